//! Error types and error handling for the front-end.
//!
//! This module defines the single located error type shared by the lexer
//! and the parser. It includes:
//!
//! - The error structure with source position information
//! - Specific error variants for tokenizing and syntax failures
//! - Error names and suggestions used when rendering diagnostics

pub mod errors;

#[cfg(test)]
mod tests;
