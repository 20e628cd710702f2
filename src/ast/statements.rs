use super::expressions::Expr;

/// Statement variants.
///
/// Every statement may carry the standalone comment directly above it and
/// the inline `BTW` that trails it on its own line.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    VarDecl(VarDeclStmt),
    Print(PrintStmt),
    Input(InputStmt),
    Assignment(AssignmentStmt),
}

impl Stmt {
    pub fn get_line(&self) -> u32 {
        match self {
            Stmt::VarDecl(stmt) => stmt.line,
            Stmt::Print(stmt) => stmt.line,
            Stmt::Input(stmt) => stmt.line,
            Stmt::Assignment(stmt) => stmt.line,
        }
    }

    /// The standalone comment above this statement, if any.
    pub fn comment(&self) -> Option<&str> {
        match self {
            Stmt::VarDecl(stmt) => stmt.comment.as_deref(),
            Stmt::Print(stmt) => stmt.comment.as_deref(),
            Stmt::Input(stmt) => stmt.comment.as_deref(),
            Stmt::Assignment(stmt) => stmt.comment.as_deref(),
        }
    }

    pub fn inline_comment(&self) -> Option<&str> {
        match self {
            Stmt::VarDecl(stmt) => stmt.inline_comment.as_deref(),
            Stmt::Print(stmt) => stmt.inline_comment.as_deref(),
            Stmt::Input(stmt) => stmt.inline_comment.as_deref(),
            Stmt::Assignment(stmt) => stmt.inline_comment.as_deref(),
        }
    }

    pub fn set_inline_comment(&mut self, comment: String) {
        let slot = match self {
            Stmt::VarDecl(stmt) => &mut stmt.inline_comment,
            Stmt::Print(stmt) => &mut stmt.inline_comment,
            Stmt::Input(stmt) => &mut stmt.inline_comment,
            Stmt::Assignment(stmt) => &mut stmt.inline_comment,
        };
        *slot = Some(comment);
    }
}

/// The value a declaration starts with.
///
/// `Uninitialized` is distinct from an explicit `NOOB` literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Initializer {
    Uninitialized,
    Value(Expr),
}

impl Initializer {
    pub fn as_expr(&self) -> Option<&Expr> {
        match self {
            Initializer::Uninitialized => None,
            Initializer::Value(expr) => Some(expr),
        }
    }
}

/// `I HAS A <identifier> [ITZ <expr>]`
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub identifier: String,
    pub value: Initializer,
    pub line: u32,
    pub comment: Option<String>,
    pub inline_comment: Option<String>,
}

/// `VISIBLE <expr>`
#[derive(Debug, Clone, PartialEq)]
pub struct PrintStmt {
    pub expression: Expr,
    pub line: u32,
    pub comment: Option<String>,
    pub inline_comment: Option<String>,
}

/// `GIMMEH <identifier> [AN <identifier>]...`
///
/// Targets keep source order and are never deduplicated.
#[derive(Debug, Clone, PartialEq)]
pub struct InputStmt {
    pub targets: Vec<String>,
    pub line: u32,
    pub comment: Option<String>,
    pub inline_comment: Option<String>,
}

/// `<identifier> R <expr>`
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStmt {
    pub identifier: String,
    pub value: Expr,
    pub line: u32,
    pub comment: Option<String>,
    pub inline_comment: Option<String>,
}
