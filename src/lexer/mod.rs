//! Lexical analysis module for the front-end.
//!
//! This module contains the lexer (tokenizer) that converts LOLCODE source
//! into the token stream consumed by the parser. It handles:
//!
//! - Tokenization of source code using anchored regex patterns
//! - Recognition of phrase keywords, single-word keywords, literals and identifiers
//! - Line tracking for error reporting
//! - `BTW` line comments and `OBTW ... TLDR` block comments

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
