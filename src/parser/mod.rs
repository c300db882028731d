mod expr;
mod parser;

pub use expr::*;
pub use parser::*;
