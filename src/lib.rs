pub mod analyzer;
pub mod cli;
pub mod codegen;
pub mod config;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod session;

pub use config::Config;
pub use error::{CompileError, CompileResult};
pub use session::{Outcome, Session};

/// Compile `input` into program text held in memory.
pub fn compile(input: &str, config: &Config) -> CompileResult<(String, Outcome)> {
    let mut session = Session::new(input, Vec::new(), config);
    let outcome = session.run()?;
    let text = String::from_utf8_lossy(&session.into_inner()).into_owned();
    Ok((text, outcome))
}
