use std::rc::Rc;

use lazy_static::lazy_static;
use log::{debug, info};
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, MK_PATTERN, MK_TOKEN};

use super::tokens::{Token, TokenKind, PHRASE_KEYWORDS, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = {
        let mut patterns = vec![
            MK_PATTERN!("\\n", newline_handler),
            MK_PATTERN!("[ \\t\\r]+", skip_handler),
            MK_PATTERN!("OBTW\\b(?s:(.*?))(?:\\bTLDR\\b|\\z)", block_comment_handler),
            MK_PATTERN!("BTW\\b([^\\n]*)", line_comment_handler),
            MK_PATTERN!("\"((?:[^\"\\n:]|:[^\\n])*)\"", string_handler),
        ];

        for keyword in PHRASE_KEYWORDS {
            patterns.push(MK_PATTERN!(phrase_regex(keyword), phrase_handler));
        }

        patterns.push(MK_PATTERN!("-?[0-9]+\\.[0-9]+\\b", float_handler));
        patterns.push(MK_PATTERN!("-?[0-9]+\\b", number_handler));
        patterns.push(MK_PATTERN!("[a-zA-Z][a-zA-Z0-9_]*\\b", symbol_handler));
        patterns.push(MK_PATTERN!("\\+", plus_handler));
        patterns.push(MK_PATTERN!("\\S+", unknown_handler));
        patterns
    };
}

/// Builds the pattern for a phrase keyword: words joined by horizontal
/// whitespace, closed by a word boundary unless it ends in punctuation.
fn phrase_regex(keyword: &str) -> String {
    let body = keyword
        .split(' ')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("[ \\t]+");

    if keyword.ends_with(|c: char| c.is_ascii_alphanumeric()) {
        format!("{}\\b", body)
    } else {
        body
    }
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    line: u32,
    /// Whether a non-comment token has been produced on the current line.
    line_has_token: bool,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            line: 1,
            line_has_token: false,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        if !token.is_comment() {
            self.line_has_token = true;
        }
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Returns the text matched by `regex` at the current position and its first capture group.
    fn matched(&self, regex: &Regex) -> (String, Option<String>) {
        match regex.captures(self.remainder()) {
            Some(captures) => (
                captures[0].to_string(),
                captures.get(1).map(|group| group.as_str().to_string()),
            ),
            None => (String::new(), None),
        }
    }
}

fn newline_handler(lexer: &mut Lexer, _regex: &Regex) {
    lexer.line += 1;
    lexer.line_has_token = false;
    lexer.advance_n(1);
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) {
    let (matched, _) = lexer.matched(regex);
    lexer.advance_n(matched.len());
}

fn block_comment_handler(lexer: &mut Lexer, regex: &Regex) {
    let (matched, content) = lexer.matched(regex);
    let content = content.unwrap_or_default();

    let token = Token::comment(content.trim().to_string(), lexer.line, false);
    lexer.push(token);

    let newlines = matched.matches('\n').count() as u32;
    if newlines > 0 {
        lexer.line += newlines;
        lexer.line_has_token = false;
    }
    lexer.advance_n(matched.len());
}

fn line_comment_handler(lexer: &mut Lexer, regex: &Regex) {
    let (matched, content) = lexer.matched(regex);
    let content = content.unwrap_or_default();

    let token = Token::comment(content.trim().to_string(), lexer.line, lexer.line_has_token);
    lexer.push(token);
    lexer.advance_n(matched.len());
}

fn string_handler(lexer: &mut Lexer, regex: &Regex) {
    let (matched, content) = lexer.matched(regex);

    let line = lexer.line;
    lexer.push(MK_TOKEN!(TokenKind::StringLiteral, content.unwrap_or_default(), line));
    lexer.advance_n(matched.len());
}

fn phrase_handler(lexer: &mut Lexer, regex: &Regex) {
    let (matched, _) = lexer.matched(regex);
    let normalized = matched.split_whitespace().collect::<Vec<_>>().join(" ");

    let line = lexer.line;
    lexer.push(MK_TOKEN!(TokenKind::Keyword, normalized, line));
    lexer.advance_n(matched.len());
}

fn float_handler(lexer: &mut Lexer, regex: &Regex) {
    let (matched, _) = lexer.matched(regex);

    let line = lexer.line;
    lexer.push(MK_TOKEN!(TokenKind::FloatLiteral, matched.clone(), line));
    lexer.advance_n(matched.len());
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) {
    let (matched, _) = lexer.matched(regex);

    let line = lexer.line;
    lexer.push(MK_TOKEN!(TokenKind::NumberLiteral, matched.clone(), line));
    lexer.advance_n(matched.len());
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) {
    let (value, _) = lexer.matched(regex);

    let kind = RESERVED_LOOKUP
        .get(value.as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);

    let line = lexer.line;
    lexer.advance_n(value.len());
    lexer.push(MK_TOKEN!(kind, value, line));
}

fn plus_handler(lexer: &mut Lexer, _regex: &Regex) {
    let line = lexer.line;
    lexer.push(MK_TOKEN!(TokenKind::Keyword, String::from("+"), line));
    lexer.advance_n(1);
}

fn unknown_handler(lexer: &mut Lexer, regex: &Regex) {
    let (matched, _) = lexer.matched(regex);
    debug!("unknown chunk {:?} on line {}", matched, lexer.line);

    let line = lexer.line;
    lexer.push(MK_TOKEN!(TokenKind::Unknown, matched.clone(), line));
    lexer.advance_n(matched.len());
}

/// Converts LOLCODE source into tokens, terminated by a single `EOF` token.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let pattern = PATTERNS
            .iter()
            .find(|pattern| pattern.regex.is_match(lex.remainder()));

        match pattern {
            Some(pattern) => (pattern.handler)(&mut lex, &pattern.regex),
            None => {
                let token = lex
                    .remainder()
                    .chars()
                    .next()
                    .map(String::from)
                    .unwrap_or_default();
                debug!("unrecognised token {:?} on line {}", token, lex.line);

                return Err(Error::new(
                    ErrorImpl::UnrecognisedToken { token },
                    Position(lex.line, Rc::clone(&lex.file)),
                ));
            }
        }
    }

    let line = lex.line;
    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), line));
    info!("tokenized {} into {} tokens", lex.file, lex.tokens.len());

    Ok(lex.tokens)
}
