use std::slice::Iter;

use super::statements::Stmt;

/// A `HAI` or `KTHXBYE` marker as it appeared in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub keyword: String,
    pub line: u32,
}

/// Root of a parsed program. The markers are optional; the statement list is always present.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub opening: Option<Marker>,
    pub statements: StatementList,
    pub closing: Option<Marker>,
    pub line: u32,
}

impl Program {
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.statements.iter()
    }
}

/// Statements in source order. `WAZZUP ... BUHBYE` blocks are folded in flat.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementList {
    pub body: Vec<Stmt>,
    pub line: u32,
}

impl StatementList {
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }
}
