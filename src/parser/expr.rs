use crate::{
    ast::expressions::{
        BinaryExpr, BooleanExpr, ConcatExpr, Expr, LiteralExpr, LiteralKind, NotExpr,
        VariableExpr,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{keywords, TokenKind},
};

use super::{
    lookups::{Precedence, ARITHMETIC_OPERATORS, BOOLEAN_OPERATORS, COMPARISON_OPERATORS},
    parser::Parser,
};

/// Parses a full expression, starting at the loosest level.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_expr_from(parser, Precedence::Boolean)
}

/// Tries each level from `level` down to the tightest until one of them parses.
///
/// Each call is one level of nesting; past the parser's nesting limit the parse fails.
pub fn parse_expr_from(parser: &mut Parser, level: Precedence) -> Result<Expr, Error> {
    parser.enter_nested()?;
    let expr = cascade(parser, level);
    parser.exit_nested();

    expr
}

fn cascade(parser: &mut Parser, level: Precedence) -> Result<Expr, Error> {
    let mut current = Some(level);

    while let Some(level) = current {
        if let Some(expr) = level.handler()(parser)? {
            return Ok(expr);
        }
        current = level.tighter();
    }

    Err(parser.unexpected("expression"))
}

/// `NOT <expr>`, `BOTH OF|EITHER OF|WON OF <expr> AN <expr>`,
/// `ALL OF|ANY OF <expr> AN <expr> [AN <expr>]... [MKAY]`
pub fn parse_boolean_expr(parser: &mut Parser) -> Result<Option<Expr>, Error> {
    let line = parser.current_line();

    if parser.is_at(keywords::NOT) {
        parser.advance();
        let operand = parse_expr(parser)?;

        return Ok(Some(Expr::Not(NotExpr {
            operand: Box::new(operand),
            line,
        })));
    }

    let Some(operator) = parser
        .current_keyword()
        .and_then(|keyword| BOOLEAN_OPERATORS.get(keyword))
        .copied()
    else {
        return Ok(None);
    };
    parser.advance();

    let mut operands = vec![parse_expr(parser)?];
    parser.expect(keywords::AN)?;
    operands.push(parse_expr(parser)?);

    if operator.is_variadic() {
        while parser.is_at(keywords::AN) {
            parser.advance();
            operands.push(parse_expr(parser)?);
        }

        if parser.is_at(keywords::MKAY) {
            parser.advance();
        }
    }

    Ok(Some(Expr::Boolean(BooleanExpr {
        operator,
        operands,
        line,
    })))
}

/// `BOTH SAEM|DIFFRINT <expr> AN <expr>`
///
/// Operands start at this level, so a comparison may nest inside a comparison
/// but never reaches up into the boolean operators.
pub fn parse_comparison_expr(parser: &mut Parser) -> Result<Option<Expr>, Error> {
    let line = parser.current_line();

    let Some(operator) = parser
        .current_keyword()
        .and_then(|keyword| COMPARISON_OPERATORS.get(keyword))
        .copied()
    else {
        return Ok(None);
    };
    parser.advance();

    let left = parse_expr_from(parser, Precedence::Comparison)?;
    parser.expect(keywords::AN)?;
    let right = parse_expr_from(parser, Precedence::Comparison)?;

    Ok(Some(Expr::Binary(BinaryExpr {
        operator,
        left: Box::new(left),
        right: Box::new(right),
        line,
    })))
}

/// `SUM OF|DIFF OF|... <expr> AN <expr>` or `SMOOSH <expr> AN <expr> [AN <expr>]...`
///
/// A binary operator consumes exactly one `AN`-separated pair, which is what
/// lets nested prefix operators compose without parentheses.
pub fn parse_arithmetic_expr(parser: &mut Parser) -> Result<Option<Expr>, Error> {
    let line = parser.current_line();

    if parser.is_at(keywords::SMOOSH) {
        parser.advance();

        let mut operands = vec![parse_expr_from(parser, Precedence::Arithmetic)?];
        parser.expect(keywords::AN)?;
        operands.push(parse_expr_from(parser, Precedence::Arithmetic)?);

        while parser.is_at(keywords::AN) {
            parser.advance();
            operands.push(parse_expr_from(parser, Precedence::Arithmetic)?);
        }

        return Ok(Some(Expr::Concatenation(ConcatExpr { operands, line })));
    }

    let Some(operator) = parser
        .current_keyword()
        .and_then(|keyword| ARITHMETIC_OPERATORS.get(keyword))
        .copied()
    else {
        return Ok(None);
    };
    parser.advance();

    let left = parse_expr_from(parser, Precedence::Arithmetic)?;
    parser.expect(keywords::AN)?;
    let right = parse_expr_from(parser, Precedence::Arithmetic)?;

    Ok(Some(Expr::Binary(BinaryExpr {
        operator,
        left: Box::new(left),
        right: Box::new(right),
        line,
    })))
}

/// `<atom> [+ <atom>]...`
///
/// Never declines: the atomic level either parses or fails, so the cascade
/// reaches `Precedence::Atomic` only through here.
pub fn parse_primary_expr(parser: &mut Parser) -> Result<Option<Expr>, Error> {
    let Some(first) = parse_atomic_expr(parser)? else {
        return Ok(None);
    };

    if !parser.is_at(keywords::PLUS) {
        return Ok(Some(first));
    }

    let line = first.get_line();
    let mut operands = vec![first];

    while parser.is_at(keywords::PLUS) {
        parser.advance();
        match parse_atomic_expr(parser)? {
            Some(operand) => operands.push(operand),
            None => return Err(parser.unexpected("expression")),
        }
    }

    Ok(Some(Expr::Concatenation(ConcatExpr { operands, line })))
}

/// A literal or an identifier. Keywords and unknown tokens cannot start an operand.
pub fn parse_atomic_expr(parser: &mut Parser) -> Result<Option<Expr>, Error> {
    let Some(token) = parser.current_token() else {
        return Err(parser.unexpected("expression"));
    };

    if matches!(token.kind, TokenKind::Keyword | TokenKind::Unknown) {
        return Err(parser.unexpected("expression"));
    }

    if token.kind == TokenKind::Comment {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                expected: String::from("expression"),
                found: format!("BTW {}", token.value),
            },
            parser.get_position(),
        ));
    }

    let token = token.clone();
    parser.advance();

    let expr = match LiteralKind::from_token_kind(token.kind) {
        Some(kind) => Expr::Literal(LiteralExpr {
            kind,
            value: token.value,
            line: token.line,
        }),
        None => Expr::Variable(VariableExpr {
            name: token.value,
            line: token.line,
        }),
    };

    Ok(Some(expr))
}
