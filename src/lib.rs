#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A source location: the 1-based line and the name of the file it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

/// Returns the text of the given 1-based line, without its line terminator.
pub fn get_source_line(source: &str, line: u32) -> Option<String> {
    if line == 0 {
        return None;
    }

    source
        .lines()
        .nth((line - 1) as usize)
        .map(|text| text.trim_end_matches('\r').to_string())
}

pub fn display_error(error: &Error, file: &str, source: &str) {
    /*
        Error: UnexpectedToken (Expected `AN` but found `5`)
        -> hello.lol
           |
        20 | VISIBLE SUM OF 4 5
           | ^^^^^^^^^^^^^^^^^^
    */

    let line = error.line();
    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", file);
    println!("{:>padding$}", "|");

    match get_source_line(source, line) {
        Some(line_text) => {
            let (line_text_removed, _) = remove_starting_whitespace(&line_text);
            let trimmed = line_text_removed.trim_end();
            println!("{} | {}", line_string, trimmed);

            let arrows = trimmed.chars().count().max(1);
            println!("{:>padding$} {}", "|", "^".repeat(arrows));
        }
        None => println!("{} | <end of input>", line_string),
    }
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_source_line() {
        let source = "HAI\n  VISIBLE \"hi\"\r\nKTHXBYE";

        assert_eq!(super::get_source_line(source, 1).as_deref(), Some("HAI"));
        assert_eq!(
            super::get_source_line(source, 2).as_deref(),
            Some("  VISIBLE \"hi\"")
        );
        assert_eq!(super::get_source_line(source, 3).as_deref(), Some("KTHXBYE"));
        assert_eq!(super::get_source_line(source, 4), None);
        assert_eq!(super::get_source_line(source, 0), None);
    }

    #[test]
    fn test_remove_starting_whitespace() {
        let (text, removed) = super::remove_starting_whitespace("    GIMMEH x");
        assert_eq!(text, "GIMMEH x");
        assert_eq!(removed, 4);
    }
}
