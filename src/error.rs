use std::io;

use thiserror::Error;

pub type CompileResult<T> = Result<T, CompileError>;

/// Every way a session can fail. All of them end the session.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("mismatched parenthesis")]
    MismatchedParen,
    #[error("number or identifier expected")]
    ExpectedNumOrIdent,
    #[error("variable not defined: {0}")]
    Undefined(String),
    #[error("out of memory: symbol table holds at most {0} variables")]
    TableFull(usize),
    /// Kept for completeness of the taxonomy; the tree cannot represent an
    /// assignment to anything but an identifier.
    #[error("lvalue required as an operand")]
    NotLvalue,
    #[error("divide by constant zero")]
    DivByZero,
    #[error("syntax error")]
    Syntax,
    #[error("incdec not followed by id")]
    NotIncDecIdent,
    #[error("failed to write program text")]
    Io(#[from] io::Error),
}

impl CompileError {
    /// Errors that terminate the program with `EXIT 1`. A broken output sink
    /// cannot receive that instruction.
    pub fn is_reported(&self) -> bool {
        !matches!(self, CompileError::Io(_))
    }
}
