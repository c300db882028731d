use std::{fmt, mem};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
}

impl BinOpKind {
    pub fn symbol(self) -> &'static str {
        match self {
            BinOpKind::Add => "+",
            BinOpKind::Sub => "-",
            BinOpKind::Mul => "*",
            BinOpKind::Div => "/",
            BinOpKind::BitwiseAnd => "&",
            BinOpKind::BitwiseOr => "|",
            BinOpKind::BitwiseXor => "^",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignOpKind {
    Assign,
    AddAssign,
    SubAssign,
}

impl AssignOpKind {
    pub fn symbol(self) -> &'static str {
        match self {
            AssignOpKind::Assign => "=",
            AssignOpKind::AddAssign => "+=",
            AssignOpKind::SubAssign => "-=",
        }
    }

    /// Operator combining the old value with the right-hand side, if any.
    pub fn bin_op(self) -> Option<BinOpKind> {
        match self {
            AssignOpKind::Assign => None,
            AssignOpKind::AddAssign => Some(BinOpKind::Add),
            AssignOpKind::SubAssign => Some(BinOpKind::Sub),
        }
    }
}

/// Expression tree of one statement. Every node owns its children.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Num(i32),
    Ident(String),
    Binary(BinOpKind, Box<Expr>, Box<Expr>),
    Assign(AssignOpKind, String, Box<Expr>),
}

impl Expr {
    pub fn binary(kind: BinOpKind, left: Expr, right: Expr) -> Self {
        Expr::Binary(kind, Box::new(left), Box::new(right))
    }

    pub fn assign(kind: AssignOpKind, name: String, right: Expr) -> Self {
        Expr::Assign(kind, name, Box::new(right))
    }
}

/// Prefix form, e.g. `= x + 3 y`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Num(num) => write!(f, "{num}"),
            Expr::Ident(name) => write!(f, "{name}"),
            Expr::Binary(..) => {
                // operator chains lean left, walk that spine without recursing
                let mut rights = vec![];
                let mut node = self;
                while let Expr::Binary(kind, left, right) = node {
                    write!(f, "{} ", kind.symbol())?;
                    rights.push(right);
                    node = left.as_ref();
                }
                write!(f, "{node}")?;
                for right in rights.iter().rev() {
                    write!(f, " {right}")?;
                }
                Ok(())
            }
            Expr::Assign(kind, name, right) => write!(f, "{} {name} {right}", kind.symbol()),
        }
    }
}

/// Unlinks children into a work list so dropping a long chain does not
/// recurse once per node.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = vec![];
        take_children(self, &mut pending);
        while let Some(mut expr) = pending.pop() {
            take_children(&mut expr, &mut pending);
        }
    }
}

fn take_children(expr: &mut Expr, pending: &mut Vec<Expr>) {
    match expr {
        Expr::Binary(_, left, right) => {
            pending.push(mem::replace(left.as_mut(), Expr::Num(0)));
            pending.push(mem::replace(right.as_mut(), Expr::Num(0)));
        }
        Expr::Assign(_, _, right) => pending.push(mem::replace(right.as_mut(), Expr::Num(0))),
        Expr::Num(_) | Expr::Ident(_) => (),
    }
}
