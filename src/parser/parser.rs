//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program-level parsing
//! functions. The parser is a single-token-lookahead recursive descent over
//! the token stream: statements are dispatched through a keyword lookup table
//! and expressions through an ordered cascade of precedence levels.
//!
//! Comments never become nodes. A standalone comment is attached to the next
//! statement and an inline comment to the statement on its line. The last
//! non-inline comment seen is also kept in a pending slot that callers may
//! consult after the parse.

use std::rc::Rc;

use log::{debug, info};

use crate::{
    ast::ast::{Marker, Program, StatementList},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{keywords, Token, TokenKind},
    Position,
};

use super::{
    lookups::{create_token_lookups, StmtHandler, StmtLookup},
    stmt::parse_stmt,
};

/// Deepest expression nesting accepted before the parse is abandoned.
pub const MAX_NESTING_DEPTH: usize = 200;

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token stream and the statement lookup table. It
/// tracks the current position in the token stream and provides the
/// navigation primitives every grammar function is built on.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// The name of the source file being parsed
    file: Rc<String>,
    /// The most recent non-inline comment
    pending_comment: Option<String>,
    /// A non-inline comment not yet attached to a statement
    leading_comment: Option<String>,
    /// Current expression nesting depth
    depth: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Vector of tokens to parse, optionally terminated by `EOF`
    /// * `file` - Reference-counted string containing the source file name
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        info!("parser created with {} tokens", tokens.len());

        Parser {
            tokens,
            pos: 0,
            file,
            pending_comment: None,
            leading_comment: None,
            depth: 0,
            stmt_lookup: StmtLookup::new(),
        }
    }

    /// Returns the current token, or `None` once the input is exhausted.
    pub fn current_token(&self) -> Option<&Token> {
        self.peek(0)
    }

    /// Returns the text of the current token if it is a keyword.
    pub fn current_keyword(&self) -> Option<&str> {
        self.current_token()
            .filter(|token| token.kind == TokenKind::Keyword)
            .map(|token| token.value.as_str())
    }

    /// Returns the token `offset` places ahead without moving the cursor.
    /// An `EOF` token reads as the end of input.
    pub fn peek(&self, offset: usize) -> Option<&Token> {
        self.tokens
            .get(self.pos + offset)
            .filter(|token| token.kind != TokenKind::EOF)
    }

    /// Advances to the next token and returns the one consumed.
    /// At the end of input the cursor stays put and `None` is returned.
    pub fn advance(&mut self) -> Option<&Token> {
        if self.current_token().is_none() {
            return None;
        }

        self.pos += 1;
        self.tokens.get(self.pos - 1)
    }

    /// True if the current token is the keyword `keyword`.
    pub fn is_at(&self, keyword: &str) -> bool {
        self.current_keyword() == Some(keyword)
    }

    /// Consumes the current token if it is the keyword `expected`.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise an Error naming
    /// both the expected and the found token (or the end of input).
    pub fn expect(&mut self, expected: &str) -> Result<Token, Error> {
        if !self.is_at(expected) {
            return Err(self.unexpected(expected));
        }

        Ok(self.take())
    }

    /// Consumes the current token if it is an identifier.
    ///
    /// # Arguments
    ///
    /// * `after` - The construct the identifier follows, used in the error message
    pub fn expect_identifier(&mut self, after: &str) -> Result<Token, Error> {
        match self.current_token() {
            Some(token) if token.kind == TokenKind::Identifier => Ok(self.take()),
            Some(token) => {
                let found = token.value.clone();
                debug!("expected identifier after {:?}, found {:?}", after, found);
                Err(Error::new(
                    ErrorImpl::ExpectedIdentifier {
                        after: String::from(after),
                        found,
                    },
                    self.get_position(),
                ))
            }
            None => Err(self.unexpected("identifier")),
        }
    }

    /// Builds the error for a mismatch at the current token.
    pub fn unexpected(&self, expected: &str) -> Error {
        let error_impl = match self.current_token() {
            Some(token) => ErrorImpl::UnexpectedToken {
                expected: String::from(expected),
                found: token.value.clone(),
            },
            None => ErrorImpl::UnexpectedEndOfInput {
                expected: String::from(expected),
            },
        };
        debug!("syntax error at line {}: {}", self.current_line(), error_impl);

        Error::new(error_impl, self.get_position())
    }

    /// Line of the current token, or of the last token once input is exhausted.
    pub fn current_line(&self) -> u32 {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map(|token| token.line)
            .unwrap_or(1)
    }

    /// Returns the current position in the source file.
    pub fn get_position(&self) -> Position {
        Position(self.current_line(), Rc::clone(&self.file))
    }

    /// The last non-inline comment seen so far, if any.
    pub fn pending_comment(&self) -> Option<&str> {
        self.pending_comment.as_deref()
    }

    /// Consumes a comment token, remembering it when it stands on its own line.
    pub fn record_comment(&mut self) {
        if let Some(token) = self.current_token() {
            if token.is_comment() && !token.inline {
                let value = token.value.clone();
                self.pending_comment = Some(value.clone());
                self.leading_comment = Some(value);
            }
        }
        self.advance();
    }

    /// Takes the standalone comment waiting for the next statement.
    pub fn take_leading_comment(&mut self) -> Option<String> {
        self.leading_comment.take()
    }

    /// Consumes an inline comment at the cursor if it sits on `line`.
    pub fn take_inline_comment(&mut self, line: u32) -> Option<String> {
        let token = self.current_token()?;
        if !token.is_comment() || !token.inline || token.line != line {
            return None;
        }

        Some(self.take().value)
    }

    /// Enters one level of expression nesting, failing past `MAX_NESTING_DEPTH`.
    pub fn enter_nested(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            debug!("nesting limit reached at line {}", self.current_line());
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn exit_nested(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Skips any run of comment tokens at the cursor.
    pub fn skip_comments(&mut self) {
        while self.current_token().is_some_and(Token::is_comment) {
            self.record_comment();
        }
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Registers a statement handler for a keyword.
    ///
    /// # Arguments
    ///
    /// * `keyword` - The keyword that starts the statement
    /// * `stmt_fn` - The handler function for this statement type
    pub fn stmt(&mut self, keyword: &'static str, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(keyword, stmt_fn);
    }

    fn take(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        self.pos += 1;
        token
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes the lookup tables and parses one program.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (with state after parsing, including the pending comment)
/// - Result containing either the Program or the first Error encountered
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> (Parser, Result<Program, Error>) {
    let mut parser = Parser::new(tokens, file);
    create_token_lookups(&mut parser);

    info!("beginning parse of {}", parser.file);
    let program = parse_program(&mut parser);

    match &program {
        Ok(program) => info!("parsed {} statements", program.len()),
        Err(error) => info!("parse failed: {}", error),
    }

    (parser, program)
}

/// `Program -> [HAI] StatementList [KTHXBYE]`
pub fn parse_program(parser: &mut Parser) -> Result<Program, Error> {
    parser.skip_comments();
    let line = parser.current_line();

    let opening = parse_marker(parser, keywords::HAI);
    if opening.is_some() {
        // A comment above HAI describes the program, not its first statement.
        parser.take_leading_comment();
    }
    let statements = parse_statement_list(parser, &[keywords::KTHXBYE])?;
    let closing = parse_marker(parser, keywords::KTHXBYE);

    // Anything after the closing marker is not part of the program.
    while let Some(token) = parser.current_token() {
        if token.is_comment() {
            parser.record_comment();
        } else {
            debug!("ignoring {:?} after end of program", token.value);
            parser.advance();
        }
    }

    Ok(Program {
        opening,
        statements,
        closing,
        line,
    })
}

fn parse_marker(parser: &mut Parser, keyword: &str) -> Option<Marker> {
    if !parser.is_at(keyword) {
        debug!("program marker {} is absent", keyword);
        return None;
    }

    let token = parser.take();
    Some(Marker {
        keyword: token.value,
        line: token.line,
    })
}

/// Parses statements until one of `terminators` or the end of input.
///
/// Comments are skipped. `WAZZUP ... BUHBYE` blocks are parsed recursively and
/// their statements folded into this list. The terminator itself is left for
/// the caller.
pub fn parse_statement_list(
    parser: &mut Parser,
    terminators: &[&str],
) -> Result<StatementList, Error> {
    let line = parser.current_line();
    let mut body = Vec::new();

    while let Some(token) = parser.current_token() {
        let is_comment = token.is_comment();

        if let Some(keyword) = parser.current_keyword() {
            if terminators.contains(&keyword) {
                break;
            }
        }

        if is_comment {
            parser.record_comment();
            continue;
        }

        if parser.is_at(keywords::WAZZUP) {
            parser.advance();

            let block = parse_statement_list(parser, &[keywords::BUHBYE, keywords::KTHXBYE])?;
            debug!("folding {} statements from WAZZUP block", block.len());
            body.extend(block.body);

            if parser.is_at(keywords::BUHBYE) {
                parser.advance();
            }
            continue;
        }

        if let Some(stmt) = parse_stmt(parser)? {
            body.push(stmt);
        }
    }

    Ok(StatementList { body, line })
}
