//! Utility macros for the front-end.
//!
//! This module defines helper macros used by the lexer and by tests:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_PATTERN!` - Creates an anchored lexer pattern bound to a handler
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a non-comment Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$line` - The 1-based source line
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::NumberLiteral, "42".to_string(), 3);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $line:expr) => {
        Token {
            kind: $kind,
            value: $value,
            line: $line,
            inline: false,
        }
    };
}

/// Creates a lexer pattern anchored at the current position.
///
/// # Arguments
///
/// * `$regex` - The pattern source, without the leading anchor
/// * `$handler` - The handler invoked when the pattern matches
///
/// # Example
///
/// ```ignore
/// MK_PATTERN!("[ \\t\\r]+", skip_handler)
/// ```
#[macro_export]
macro_rules! MK_PATTERN {
    ($regex:expr, $handler:expr) => {
        RegexPattern {
            regex: Regex::new(&format!("\\A(?:{})", $regex)).expect("lexer pattern must compile"),
            handler: $handler,
        }
    };
}
