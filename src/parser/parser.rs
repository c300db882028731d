use std::mem;

use crate::{
    error::{CompileError, CompileResult},
    lexer::{Lexer, Token, TokenKind},
};

use super::{AssignOpKind, BinOpKind, Expr};

#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    Eof,
    Empty,
    Expr(Expr),
}

/// Recursive-descent parser pulling tokens on demand. The lookahead token
/// survives between statements.
#[derive(Debug)]
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    line: usize,
}

impl<'a> Parser<'a> {
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let line = lexer.line();
        let current = lexer.next_token();
        Self {
            lexer,
            current,
            line,
        }
    }

    /// Line of the lookahead token.
    pub fn line(&self) -> usize {
        self.line
    }

    fn advance(&mut self) -> Token {
        self.line = self.lexer.line();
        let next = self.lexer.next_token();
        mem::replace(&mut self.current, next)
    }

    fn peek(&self) -> TokenKind {
        self.current.kind
    }

    fn consume(&mut self, kind: TokenKind) -> bool {
        if self.peek() != kind {
            return false;
        }
        self.advance();
        true
    }

    fn expect(&mut self, kind: TokenKind, err: CompileError) -> CompileResult<Token> {
        if self.peek() != kind {
            return Err(err);
        }
        Ok(self.advance())
    }

    /// statement = eof
    ///           | newline
    ///           | assign newline
    pub fn parse_statement(&mut self) -> CompileResult<Statement> {
        match self.peek() {
            TokenKind::Eof => Ok(Statement::Eof),
            TokenKind::Newline => {
                self.advance();
                Ok(Statement::Empty)
            }
            _ => {
                let expr = self.parse_assign()?;
                self.expect(TokenKind::Newline, CompileError::Syntax)?;
                Ok(Statement::Expr(expr))
            }
        }
    }

    /// assign = or
    ///        | or "="  assign
    ///        | or "+=" assign
    ///        | or "-=" assign
    ///
    /// The operator is only taken when the whole `or` reduced to a bare
    /// identifier.
    fn parse_assign(&mut self) -> CompileResult<Expr> {
        let mut left = self.parse_or()?;
        let Expr::Ident(name) = &mut left else {
            return Ok(left);
        };

        let kind = match self.peek() {
            TokenKind::Equal => AssignOpKind::Assign,
            TokenKind::PlusEqual => AssignOpKind::AddAssign,
            TokenKind::MinusEqual => AssignOpKind::SubAssign,
            _ => return Ok(left),
        };
        let name = mem::take(name);
        self.advance();

        Ok(Expr::assign(kind, name, self.parse_assign()?))
    }

    /// or = xor ("|" xor)*
    fn parse_or(&mut self) -> CompileResult<Expr> {
        let mut node = self.parse_xor()?;
        while self.consume(TokenKind::Pipe) {
            node = Expr::binary(BinOpKind::BitwiseOr, node, self.parse_xor()?);
        }
        Ok(node)
    }

    /// xor = and ("^" and)*
    fn parse_xor(&mut self) -> CompileResult<Expr> {
        let mut node = self.parse_and()?;
        while self.consume(TokenKind::Hat) {
            node = Expr::binary(BinOpKind::BitwiseXor, node, self.parse_and()?);
        }
        Ok(node)
    }

    /// and = add ("&" add)*
    fn parse_and(&mut self) -> CompileResult<Expr> {
        let mut node = self.parse_add()?;
        while self.consume(TokenKind::Ampersand) {
            node = Expr::binary(BinOpKind::BitwiseAnd, node, self.parse_add()?);
        }
        Ok(node)
    }

    /// add = mul ("+" mul | "-" mul)*
    fn parse_add(&mut self) -> CompileResult<Expr> {
        let mut node = self.parse_mul()?;
        loop {
            let kind = match self.peek() {
                TokenKind::Plus => BinOpKind::Add,
                TokenKind::Minus => BinOpKind::Sub,
                _ => return Ok(node),
            };
            self.advance();
            node = Expr::binary(kind, node, self.parse_mul()?);
        }
    }

    /// mul = unary ("*" unary | "/" unary)*
    fn parse_mul(&mut self) -> CompileResult<Expr> {
        let mut node = self.parse_unary()?;
        loop {
            let kind = match self.peek() {
                TokenKind::Star => BinOpKind::Mul,
                TokenKind::Slash => BinOpKind::Div,
                _ => return Ok(node),
            };
            self.advance();
            node = Expr::binary(kind, node, self.parse_unary()?);
        }
    }

    /// unary = "+" unary
    ///       | "-" unary
    ///       | primary
    fn parse_unary(&mut self) -> CompileResult<Expr> {
        let kind = match self.peek() {
            TokenKind::Plus => BinOpKind::Add,
            TokenKind::Minus => BinOpKind::Sub,
            _ => return self.parse_primary(),
        };
        self.advance();
        // -e is emitted as 0 - e
        Ok(Expr::binary(kind, Expr::Num(0), self.parse_unary()?))
    }

    /// primary = num
    ///         | ident
    ///         | "++" ident
    ///         | "--" ident
    ///         | "(" assign ")"
    fn parse_primary(&mut self) -> CompileResult<Expr> {
        match self.peek() {
            TokenKind::Num => {
                let token = self.advance();
                Ok(Expr::Num(parse_number(&token.text)))
            }
            TokenKind::Ident => Ok(Expr::Ident(self.advance().text)),
            TokenKind::PlusPlus | TokenKind::MinusMinus => {
                let kind = if self.advance().kind == TokenKind::PlusPlus {
                    AssignOpKind::AddAssign
                } else {
                    AssignOpKind::SubAssign
                };
                let ident = self.expect(TokenKind::Ident, CompileError::NotIncDecIdent)?;
                Ok(Expr::assign(kind, ident.text, Expr::Num(1)))
            }
            TokenKind::OpenParen => {
                self.advance();
                let expr = self.parse_assign()?;
                self.expect(TokenKind::CloseParen, CompileError::MismatchedParen)?;
                Ok(expr)
            }
            _ => Err(CompileError::ExpectedNumOrIdent),
        }
    }
}

/// Decimal literal as a 32-bit integer, wrapping on overflow.
fn parse_number(text: &str) -> i32 {
    text.bytes().fold(0i32, |acc, digit| {
        acc.wrapping_mul(10).wrapping_add(i32::from(digit - b'0'))
    })
}
