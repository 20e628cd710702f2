use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

/// Keyword spellings as they appear in token text after normalization.
pub mod keywords {
    pub const HAI: &str = "HAI";
    pub const KTHXBYE: &str = "KTHXBYE";
    pub const WAZZUP: &str = "WAZZUP";
    pub const BUHBYE: &str = "BUHBYE";

    pub const I_HAS_A: &str = "I HAS A";
    pub const ITZ: &str = "ITZ";
    pub const R: &str = "R";
    pub const VISIBLE: &str = "VISIBLE";
    pub const GIMMEH: &str = "GIMMEH";

    pub const AN: &str = "AN";
    pub const MKAY: &str = "MKAY";
    pub const PLUS: &str = "+";

    pub const SUM_OF: &str = "SUM OF";
    pub const DIFF_OF: &str = "DIFF OF";
    pub const PRODUKT_OF: &str = "PRODUKT OF";
    pub const QUOSHUNT_OF: &str = "QUOSHUNT OF";
    pub const MOD_OF: &str = "MOD OF";
    pub const BIGGR_OF: &str = "BIGGR OF";
    pub const SMALLR_OF: &str = "SMALLR OF";
    pub const SMOOSH: &str = "SMOOSH";

    pub const BOTH_SAEM: &str = "BOTH SAEM";
    pub const DIFFRINT: &str = "DIFFRINT";

    pub const NOT: &str = "NOT";
    pub const BOTH_OF: &str = "BOTH OF";
    pub const EITHER_OF: &str = "EITHER OF";
    pub const WON_OF: &str = "WON OF";
    pub const ALL_OF: &str = "ALL OF";
    pub const ANY_OF: &str = "ANY OF";
}

/// Keywords written as more than one word (or ending in punctuation). Their
/// words may be separated by any run of spaces or tabs in the source.
pub const PHRASE_KEYWORDS: [&str; 25] = [
    "I HAS A",
    "SUM OF",
    "DIFF OF",
    "PRODUKT OF",
    "QUOSHUNT OF",
    "MOD OF",
    "BIGGR OF",
    "SMALLR OF",
    "BOTH OF",
    "EITHER OF",
    "WON OF",
    "ALL OF",
    "ANY OF",
    "BOTH SAEM",
    "IS NOW A",
    "IM IN YR",
    "IM OUTTA YR",
    "HOW IZ I",
    "FOUND YR",
    "IF U SAY SO",
    "O RLY?",
    "YA RLY",
    "NO WAI",
    "WTF?",
    "I IZ",
];

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        for keyword in [
            "HAI", "KTHXBYE", "WAZZUP", "BUHBYE", "ITZ", "R", "AN", "NOT", "DIFFRINT", "SMOOSH",
            "MAEK", "A", "VISIBLE", "GIMMEH", "MKAY", "MEBBE", "OIC", "OMG", "OMGWTF", "UPPIN",
            "NERFIN", "YR", "TIL", "WILE", "GTFO",
        ] {
            map.insert(keyword, TokenKind::Keyword);
        }
        map.insert("WIN", TokenKind::BoolLiteral);
        map.insert("FAIL", TokenKind::BoolLiteral);
        map.insert("NOOB", TokenKind::NullLiteral);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword,
    NumberLiteral, // NUMBR
    FloatLiteral,  // NUMBAR
    StringLiteral, // YARN
    BoolLiteral,   // TROOF
    NullLiteral,   // NOOB
    Identifier,
    Comment,
    /// A chunk no other pattern recognises; statements skip it.
    Unknown,
    EOF,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: u32,
    /// Only meaningful for comments: the comment trails code on its line.
    pub inline: bool,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token {{\nkind: {},\nvalue: {},\nline: {}}}",
            self.kind, self.value, self.line
        )
    }
}

impl Token {
    pub fn comment(value: String, line: u32, inline: bool) -> Self {
        Token {
            kind: TokenKind::Comment,
            value,
            line,
            inline,
        }
    }

    fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    pub fn is_literal(&self) -> bool {
        self.is_one_of_many(&[
            TokenKind::NumberLiteral,
            TokenKind::FloatLiteral,
            TokenKind::StringLiteral,
            TokenKind::BoolLiteral,
            TokenKind::NullLiteral,
        ])
    }

    pub fn is_comment(&self) -> bool {
        self.kind == TokenKind::Comment
    }

    pub fn debug(&self) {
        if self.kind == TokenKind::Comment {
            let placement = if self.inline { "inline" } else { "leading" };
            println!("{:>4} {} {} ({})", self.line, self.kind, placement, self.value);
        } else {
            println!("{:>4} {} ({})", self.line, self.kind, self.value);
        }
    }
}
