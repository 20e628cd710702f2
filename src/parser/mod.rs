//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It is a recursive descent parser with a
//! single token of lookahead and no backtracking, and handles:
//!
//! - Program markers and statement lists, including folded `WAZZUP` blocks
//! - Statement parsing (declarations, printing, input, assignment)
//! - Prefix-keyword expressions across an ordered cascade of precedence levels
//! - Located syntax errors; the first one aborts the parse
//!
//! Each precedence level either parses its construct or declines, in which
//! case the next tighter level is tried.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
