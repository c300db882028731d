use std::io::Write;

use tracing::{debug, error, info};

use crate::{
    analyzer::SymbolTable,
    codegen::Codegen,
    config::Config,
    error::{CompileError, CompileResult},
    lexer::Lexer,
    parser::{Parser, Statement},
};

/// How a session ended. Both cases leave a complete program in the output.
#[derive(Debug)]
pub enum Outcome {
    /// Input exhausted, `EXIT 0` emitted.
    Success,
    /// A fatal error stopped the session, `EXIT 1` emitted.
    Failure(CompileError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }

    /// Operand of the final `EXIT` instruction.
    pub fn code(&self) -> i32 {
        match self {
            Outcome::Success => 0,
            Outcome::Failure(_) => 1,
        }
    }
}

/// All state of one compilation: the parser with its lookahead token and
/// the code generator with the symbol table and register counter.
pub struct Session<'a, W: Write> {
    parser: Parser<'a>,
    codegen: Codegen<W>,
    statement_line: usize,
    dump_tree: bool,
}

impl<'a, W: Write> Session<'a, W> {
    pub fn new(input: &'a str, out: W, config: &Config) -> Self {
        Self {
            parser: Parser::new(Lexer::new(input)),
            codegen: Codegen::new(SymbolTable::new(config), out),
            statement_line: 1,
            dump_tree: false,
        }
    }

    /// Log every statement tree in prefix form.
    pub fn dump_tree(mut self, enabled: bool) -> Self {
        self.dump_tree = enabled;
        self
    }

    pub fn symbol_table(&self) -> &SymbolTable {
        self.codegen.symbol_table()
    }

    pub fn into_inner(self) -> W {
        self.codegen.into_inner()
    }

    /// Compile the whole input. Compile errors become `EXIT 1` and an
    /// `Outcome::Failure`; only a failing output sink is returned as `Err`.
    pub fn run(&mut self) -> CompileResult<Outcome> {
        match self.compile() {
            Ok(statements) => {
                info!(statements, "compilation finished");
                Ok(Outcome::Success)
            }
            Err(err) if err.is_reported() => {
                error!(line = self.statement_line, "{err}");
                self.codegen.gen_failure()?;
                Ok(Outcome::Failure(err))
            }
            Err(err) => Err(err),
        }
    }

    fn compile(&mut self) -> CompileResult<usize> {
        self.codegen.gen_prologue()?;

        let mut statements = 0;
        loop {
            self.statement_line = self.parser.line();
            match self.parser.parse_statement()? {
                Statement::Eof => break,
                Statement::Empty => (),
                Statement::Expr(expr) => {
                    if self.dump_tree {
                        info!(line = self.statement_line, tree = %expr, "parsed statement");
                    }
                    let value = self.codegen.gen_statement(&expr)?;
                    debug!(line = self.statement_line, value, "compiled statement");
                    statements += 1;
                }
            }
        }

        self.codegen.gen_epilogue()?;
        Ok(statements)
    }
}
