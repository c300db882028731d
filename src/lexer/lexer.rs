use std::{iter::Peekable, str::Chars};

use super::{Token, TokenKind, MAX_LEXEME_LEN, ONE_SYMBOL_TOKENS, TWO_SYMBOLS_TOKENS};

/// Pull-based tokenizer. Produces one token per call and never looks more
/// than one character past the token it is building.
#[derive(Debug)]
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            line: 1,
        }
    }

    /// Line the next token will start on, counting from 1.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn next_token(&mut self) -> Token {
        while self.chars.next_if(|&c| c == ' ' || c == '\t').is_some() {}

        let Some(c) = self.chars.next() else {
            return Token::new(TokenKind::Eof, "");
        };

        if c.is_ascii_digit() {
            self.parse_run(c, TokenKind::Num, |c| c.is_ascii_digit())
        } else if c.is_ascii_alphabetic() {
            self.parse_run(c, TokenKind::Ident, |c| {
                c.is_ascii_alphanumeric() || c == '_'
            })
        } else if c == '\n' {
            self.line += 1;
            Token::new(TokenKind::Newline, "")
        } else if let Some(token) = self.parse_symbol(c) {
            token
        } else {
            Token::new(TokenKind::Unknown, c.to_string())
        }
    }

    fn parse_run(&mut self, first: char, kind: TokenKind, accept: impl Fn(char) -> bool) -> Token {
        let mut text = String::from(first);
        while let Some(c) = self.chars.next_if(|&c| accept(c)) {
            if text.len() < MAX_LEXEME_LEN {
                text.push(c);
            }
        }
        Token::new(kind, text)
    }

    fn parse_symbol(&mut self, c: char) -> Option<Token> {
        if let Some(&next) = self.chars.peek() {
            let s: String = [c, next].iter().collect();
            if let Some(kind) = TWO_SYMBOLS_TOKENS.get(s.as_str()) {
                self.chars.next();
                return Some(Token::new(*kind, s));
            }
        }

        ONE_SYMBOL_TOKENS
            .get(&c)
            .map(|kind| Token::new(*kind, c.to_string()))
    }

    /// Tokenize the whole input, ending with the `Eof` token.
    pub fn tokenize(input: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(input);
        let mut tokens = vec![];

        loop {
            let token = lexer.next_token();
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }
}
