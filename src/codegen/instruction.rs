use std::fmt;

use crate::parser::BinOpKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    Reg(usize),
    Mem(usize),
    Imm(i32),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Reg(reg) => write!(f, "r{reg}"),
            Operand::Mem(addr) => write!(f, "[{addr}]"),
            Operand::Imm(value) => write!(f, "{value}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Opcode {
    Add,
    Sub,
    Mul,
    Div,
    And,
    Or,
    Xor,
}

impl Opcode {
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Add => "ADD",
            Opcode::Sub => "SUB",
            Opcode::Mul => "MUL",
            Opcode::Div => "DIV",
            Opcode::And => "AND",
            Opcode::Or => "OR",
            Opcode::Xor => "XOR",
        }
    }
}

impl From<BinOpKind> for Opcode {
    fn from(kind: BinOpKind) -> Self {
        match kind {
            BinOpKind::Add => Opcode::Add,
            BinOpKind::Sub => Opcode::Sub,
            BinOpKind::Mul => Opcode::Mul,
            BinOpKind::Div => Opcode::Div,
            BinOpKind::BitwiseAnd => Opcode::And,
            BinOpKind::BitwiseOr => Opcode::Or,
            BinOpKind::BitwiseXor => Opcode::Xor,
        }
    }
}

/// One line of program text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Program-start load of a builtin variable. Written with a comma,
    /// unlike every other `MOV`.
    Preload { reg: usize, addr: usize },
    Mov(Operand, Operand),
    Binary(Opcode, usize, usize),
    Exit(i32),
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Preload { reg, addr } => {
                write!(f, "MOV {}, {}", Operand::Reg(*reg), Operand::Mem(*addr))
            }
            Instruction::Mov(dst, src) => write!(f, "MOV {dst} {src}"),
            Instruction::Binary(op, dst, src) => write!(
                f,
                "{} {} {}",
                op.mnemonic(),
                Operand::Reg(*dst),
                Operand::Reg(*src)
            ),
            Instruction::Exit(code) => write!(f, "EXIT {code}"),
        }
    }
}
