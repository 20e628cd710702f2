use std::fmt::Display;

use crate::lexer::tokens::{keywords, TokenKind};

/// Expression variants. Every node owns its operands.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Binary(BinaryExpr),
    Boolean(BooleanExpr),
    Not(NotExpr),
    Concatenation(ConcatExpr),
    Literal(LiteralExpr),
    Variable(VariableExpr),
}

impl Expr {
    pub fn get_line(&self) -> u32 {
        match self {
            Expr::Binary(expr) => expr.line,
            Expr::Boolean(expr) => expr.line,
            Expr::Not(expr) => expr.line,
            Expr::Concatenation(expr) => expr.line,
            Expr::Literal(expr) => expr.line,
            Expr::Variable(expr) => expr.line,
        }
    }
}

// OPERATORS

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Max,
    Min,
    Equal,
    NotEqual,
}

impl BinaryOperator {
    pub fn keyword(&self) -> &'static str {
        match self {
            BinaryOperator::Add => keywords::SUM_OF,
            BinaryOperator::Sub => keywords::DIFF_OF,
            BinaryOperator::Mul => keywords::PRODUKT_OF,
            BinaryOperator::Div => keywords::QUOSHUNT_OF,
            BinaryOperator::Mod => keywords::MOD_OF,
            BinaryOperator::Max => keywords::BIGGR_OF,
            BinaryOperator::Min => keywords::SMALLR_OF,
            BinaryOperator::Equal => keywords::BOTH_SAEM,
            BinaryOperator::NotEqual => keywords::DIFFRINT,
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BooleanOperator {
    And,
    Or,
    Xor,
    AllOf,
    AnyOf,
}

impl BooleanOperator {
    pub fn keyword(&self) -> &'static str {
        match self {
            BooleanOperator::And => keywords::BOTH_OF,
            BooleanOperator::Or => keywords::EITHER_OF,
            BooleanOperator::Xor => keywords::WON_OF,
            BooleanOperator::AllOf => keywords::ALL_OF,
            BooleanOperator::AnyOf => keywords::ANY_OF,
        }
    }

    /// `ALL OF` and `ANY OF` take two or more operands; the rest take exactly two.
    pub fn is_variadic(&self) -> bool {
        matches!(self, BooleanOperator::AllOf | BooleanOperator::AnyOf)
    }
}

impl Display for BooleanOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

// COMPOUND EXPRESSIONS

/// Binary Expression
/// Arithmetic and comparison operators: `SUM OF <left> AN <right>`.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub operator: BinaryOperator,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub line: u32,
}

/// Boolean Expression
/// Two operands for `BOTH OF`, `EITHER OF`, `WON OF`; two or more for `ALL OF`, `ANY OF`.
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanExpr {
    pub operator: BooleanOperator,
    pub operands: Vec<Expr>,
    pub line: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NotExpr {
    pub operand: Box<Expr>,
    pub line: u32,
}

/// Concatenation Expression
/// Produced by `SMOOSH a AN b ...` and by `+`-chained primaries. Always two or more operands.
#[derive(Debug, Clone, PartialEq)]
pub struct ConcatExpr {
    pub operands: Vec<Expr>,
    pub line: u32,
}

// LITERALS

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    Integer,
    Float,
    String,
    Bool,
    Null,
}

impl LiteralKind {
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::NumberLiteral => Some(LiteralKind::Integer),
            TokenKind::FloatLiteral => Some(LiteralKind::Float),
            TokenKind::StringLiteral => Some(LiteralKind::String),
            TokenKind::BoolLiteral => Some(LiteralKind::Bool),
            TokenKind::NullLiteral => Some(LiteralKind::Null),
            _ => None,
        }
    }
}

/// Literal Expression
/// Keeps the raw lexeme; numeric conversion happens downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub kind: LiteralKind,
    pub value: String,
    pub line: u32,
}

/// Variable Expression
/// A reference by name; nothing is resolved at parse time.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableExpr {
    pub name: String,
    pub line: u32,
}
