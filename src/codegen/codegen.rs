use std::io::Write;

use tracing::trace;

use crate::{
    analyzer::{SymbolTable, BUILTINS},
    error::{CompileError, CompileResult},
    parser::{BinOpKind, Expr},
};

use super::{Instruction, Opcode, Operand};

/// Walks statement trees, folding values and emitting one instruction per
/// node. Registers are handed out as a stack that restarts at `r0` for every
/// statement.
pub struct Codegen<W: Write> {
    out: W,
    symbol_table: SymbolTable,
    next_reg: usize,
    // set while the right operand of a `/` is being generated
    in_divisor: bool,
    divisor_has_ident: bool,
}

impl<W: Write> Codegen<W> {
    pub fn new(symbol_table: SymbolTable, out: W) -> Self {
        Self {
            out,
            symbol_table,
            next_reg: 0,
            in_divisor: false,
            divisor_has_ident: false,
        }
    }

    pub fn symbol_table(&self) -> &SymbolTable {
        &self.symbol_table
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, instruction: Instruction) -> CompileResult<()> {
        trace!(%instruction, "emit");
        writeln!(self.out, "{instruction}")?;
        Ok(())
    }

    /// Declare the builtin variables and load each into its own register.
    pub fn gen_prologue(&mut self) -> CompileResult<()> {
        for (reg, name) in BUILTINS.iter().enumerate() {
            let slot = self.symbol_table.declare(name, 0)?;
            let addr = self.symbol_table.address(slot);
            self.emit(Instruction::Preload { reg, addr })?;
        }
        Ok(())
    }

    pub fn gen_epilogue(&mut self) -> CompileResult<()> {
        // builtins own the first slots
        for reg in 0..BUILTINS.len() {
            let addr = self.symbol_table.address(reg);
            self.emit(Instruction::Mov(Operand::Reg(reg), Operand::Mem(addr)))?;
        }
        self.emit(Instruction::Exit(0))?;
        self.out.flush()?;
        Ok(())
    }

    pub fn gen_failure(&mut self) -> CompileResult<()> {
        self.emit(Instruction::Exit(1))?;
        self.out.flush()?;
        Ok(())
    }

    /// Emit the code of one statement and return its folded value.
    pub fn gen_statement(&mut self, expr: &Expr) -> CompileResult<i32> {
        self.next_reg = 0;
        self.in_divisor = false;
        self.divisor_has_ident = false;
        self.gen_expr(expr)
    }

    fn alloc_reg(&mut self) -> usize {
        let reg = self.next_reg;
        self.next_reg += 1;
        reg
    }

    fn top_reg(&self) -> usize {
        self.next_reg - 1
    }

    fn gen_expr(&mut self, expr: &Expr) -> CompileResult<i32> {
        match expr {
            Expr::Num(num) => {
                let reg = self.alloc_reg();
                self.emit(Instruction::Mov(Operand::Reg(reg), Operand::Imm(*num)))?;
                Ok(*num)
            }
            Expr::Ident(name) => self.gen_load(name),
            Expr::Binary(..) => self.gen_chain(expr),
            Expr::Assign(kind, name, right) => {
                let value = match kind.bin_op() {
                    None => self.gen_expr(right)?,
                    Some(op) => {
                        let l = self.gen_load(name)?;
                        let r = self.gen_expr(right)?;
                        self.gen_binop(op)?;
                        fold(op, l, r)
                    }
                };
                self.gen_store(name, value)?;
                Ok(value)
            }
        }
    }

    /// Left operands of a chain are walked with an explicit stack, so
    /// `1 + 1 + ... + 1` needs no call depth per operator.
    fn gen_chain(&mut self, expr: &Expr) -> CompileResult<i32> {
        let mut spine = vec![];
        let mut node = expr;
        while let Expr::Binary(kind, left, right) = node {
            spine.push((*kind, right.as_ref()));
            node = left.as_ref();
        }

        let mut value = self.gen_expr(node)?;
        for (kind, right) in spine.into_iter().rev() {
            let r = if kind == BinOpKind::Div {
                self.gen_divisor(right)?
            } else {
                self.gen_expr(right)?
            };
            self.gen_binop(kind)?;
            value = fold(kind, value, r);
        }
        Ok(value)
    }

    fn gen_load(&mut self, name: &str) -> CompileResult<i32> {
        if self.in_divisor {
            self.divisor_has_ident = true;
        }
        let (slot, value) = self.symbol_table.read(name)?;
        let addr = self.symbol_table.address(slot);
        let reg = self.alloc_reg();
        self.emit(Instruction::Mov(Operand::Reg(reg), Operand::Mem(addr)))?;
        Ok(value)
    }

    fn gen_store(&mut self, name: &str, value: i32) -> CompileResult<()> {
        let slot = self.symbol_table.write(name, value)?;
        let addr = self.symbol_table.address(slot);
        self.emit(Instruction::Mov(Operand::Mem(addr), Operand::Reg(self.top_reg())))
    }

    /// A divisor that folds to zero without touching any variable is a
    /// compile-time error. No runtime check is emitted otherwise.
    fn gen_divisor(&mut self, right: &Expr) -> CompileResult<i32> {
        self.in_divisor = true;
        let value = self.gen_expr(right)?;
        let constant = !self.divisor_has_ident;
        self.in_divisor = false;
        self.divisor_has_ident = false;

        if value == 0 && constant {
            return Err(CompileError::DivByZero);
        }
        Ok(value)
    }

    fn gen_binop(&mut self, kind: BinOpKind) -> CompileResult<()> {
        let src = self.top_reg();
        let dst = src - 1;
        self.emit(Instruction::Binary(Opcode::from(kind), dst, src))?;
        self.next_reg -= 1;
        Ok(())
    }
}

fn fold(kind: BinOpKind, left: i32, right: i32) -> i32 {
    match kind {
        BinOpKind::Add => left.wrapping_add(right),
        BinOpKind::Sub => left.wrapping_sub(right),
        BinOpKind::Mul => left.wrapping_mul(right),
        BinOpKind::Div if right == 0 => 0,
        BinOpKind::Div => left.wrapping_div(right),
        BinOpKind::BitwiseAnd => left & right,
        BinOpKind::BitwiseOr => left | right,
        BinOpKind::BitwiseXor => left ^ right,
    }
}
