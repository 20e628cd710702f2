use log::debug;

use crate::{
    ast::statements::{AssignmentStmt, Initializer, InputStmt, PrintStmt, Stmt, VarDeclStmt},
    errors::errors::Error,
    lexer::tokens::{keywords, TokenKind},
};

use super::{expr::parse_expr, parser::Parser};

/// Parses one statement, or skips one unrecognized token and returns `None`.
pub fn parse_stmt(parser: &mut Parser) -> Result<Option<Stmt>, Error> {
    let Some(token) = parser.current_token() else {
        return Ok(None);
    };
    let kind = token.kind;
    let value = token.value.clone();
    let line = token.line;

    if kind == TokenKind::Keyword {
        if let Some(handler) = parser.get_stmt_lookup().get(value.as_str()).copied() {
            debug!("line {}: {} statement", line, value);
            let stmt = handler(parser)?;
            return Ok(Some(with_inline_comment(parser, stmt)));
        }
    }

    let assigns = parser
        .peek(1)
        .is_some_and(|next| next.kind == TokenKind::Keyword && next.value == keywords::R);
    if kind == TokenKind::Identifier && assigns {
        debug!("line {}: assignment to {}", line, value);
        let stmt = parse_assignment_stmt(parser)?;
        return Ok(Some(with_inline_comment(parser, stmt)));
    }

    debug!("line {}: skipping unrecognised {:?}", line, value);
    // A comment above an unrecognised construct belongs to it.
    parser.take_leading_comment();
    parser.advance();

    Ok(None)
}

fn with_inline_comment(parser: &mut Parser, mut stmt: Stmt) -> Stmt {
    if let Some(comment) = parser.take_inline_comment(stmt.get_line()) {
        stmt.set_inline_comment(comment);
    }
    stmt
}

/// `I HAS A <identifier> [ITZ <expr>]`
pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let comment = parser.take_leading_comment();
    let start = parser.expect(keywords::I_HAS_A)?;
    let identifier = parser.expect_identifier(keywords::I_HAS_A)?.value;

    let value = if parser.is_at(keywords::ITZ) {
        parser.advance();
        Initializer::Value(parse_expr(parser)?)
    } else {
        Initializer::Uninitialized
    };

    Ok(Stmt::VarDecl(VarDeclStmt {
        identifier,
        value,
        line: start.line,
        comment,
        inline_comment: None,
    }))
}

/// `VISIBLE <expr>`
pub fn parse_print_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let comment = parser.take_leading_comment();
    let start = parser.expect(keywords::VISIBLE)?;
    let expression = parse_expr(parser)?;

    Ok(Stmt::Print(PrintStmt {
        expression,
        line: start.line,
        comment,
        inline_comment: None,
    }))
}

/// `GIMMEH <identifier> [AN <identifier>]...`
pub fn parse_input_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let comment = parser.take_leading_comment();
    let start = parser.expect(keywords::GIMMEH)?;

    let mut targets = vec![parser.expect_identifier(keywords::GIMMEH)?.value];
    while parser.is_at(keywords::AN) {
        parser.advance();
        targets.push(parser.expect_identifier(keywords::AN)?.value);
    }

    Ok(Stmt::Input(InputStmt {
        targets,
        line: start.line,
        comment,
        inline_comment: None,
    }))
}

/// `<identifier> R <expr>`
pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let comment = parser.take_leading_comment();
    let target = parser.expect_identifier("start of statement")?;
    parser.expect(keywords::R)?;
    let value = parse_expr(parser)?;

    Ok(Stmt::Assignment(AssignmentStmt {
        identifier: target.value,
        value,
        line: target.line,
        comment,
        inline_comment: None,
    }))
}
