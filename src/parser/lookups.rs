use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::{
        expressions::{BinaryOperator, BooleanOperator, Expr},
        statements::Stmt,
    },
    errors::errors::Error,
    lexer::tokens::keywords,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Expression precedence levels, loosest first. Each level either parses its
/// construct or declines and lets the next tighter level try.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum Precedence {
    Boolean,
    Comparison,
    Arithmetic,
    Primary,
    Atomic,
}

impl Precedence {
    pub fn tighter(self) -> Option<Precedence> {
        match self {
            Precedence::Boolean => Some(Precedence::Comparison),
            Precedence::Comparison => Some(Precedence::Arithmetic),
            Precedence::Arithmetic => Some(Precedence::Primary),
            // Primary never declines, it parses its first atom itself.
            Precedence::Primary => Some(Precedence::Atomic),
            Precedence::Atomic => None,
        }
    }

    pub fn handler(self) -> LevelHandler {
        match self {
            Precedence::Boolean => parse_boolean_expr,
            Precedence::Comparison => parse_comparison_expr,
            Precedence::Arithmetic => parse_arithmetic_expr,
            Precedence::Primary => parse_primary_expr,
            Precedence::Atomic => parse_atomic_expr,
        }
    }
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
/// `Ok(None)` means the level declined: the current token is not one of its operators.
pub type LevelHandler = fn(&mut Parser) -> Result<Option<Expr>, Error>;

lazy_static! {
    pub static ref BOOLEAN_OPERATORS: HashMap<&'static str, BooleanOperator> = {
        let mut map = HashMap::new();
        map.insert(keywords::BOTH_OF, BooleanOperator::And);
        map.insert(keywords::EITHER_OF, BooleanOperator::Or);
        map.insert(keywords::WON_OF, BooleanOperator::Xor);
        map.insert(keywords::ALL_OF, BooleanOperator::AllOf);
        map.insert(keywords::ANY_OF, BooleanOperator::AnyOf);
        map
    };

    pub static ref COMPARISON_OPERATORS: HashMap<&'static str, BinaryOperator> = {
        let mut map = HashMap::new();
        map.insert(keywords::BOTH_SAEM, BinaryOperator::Equal);
        map.insert(keywords::DIFFRINT, BinaryOperator::NotEqual);
        map
    };

    pub static ref ARITHMETIC_OPERATORS: HashMap<&'static str, BinaryOperator> = {
        let mut map = HashMap::new();
        map.insert(keywords::SUM_OF, BinaryOperator::Add);
        map.insert(keywords::DIFF_OF, BinaryOperator::Sub);
        map.insert(keywords::PRODUKT_OF, BinaryOperator::Mul);
        map.insert(keywords::QUOSHUNT_OF, BinaryOperator::Div);
        map.insert(keywords::MOD_OF, BinaryOperator::Mod);
        map.insert(keywords::BIGGR_OF, BinaryOperator::Max);
        map.insert(keywords::SMALLR_OF, BinaryOperator::Min);
        map
    };
}

pub fn create_token_lookups(parser: &mut Parser) {
    // Statements
    parser.stmt(keywords::I_HAS_A, parse_var_decl_stmt);
    parser.stmt(keywords::VISIBLE, parse_print_stmt);
    parser.stmt(keywords::GIMMEH, parse_input_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<&'static str, StmtHandler>;
