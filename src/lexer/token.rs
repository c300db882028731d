use phf::phf_map;

/// Longest text kept for a single token. Longer runs are consumed whole and
/// the stored text is cut at this length.
pub const MAX_LEXEME_LEN: usize = 255;

pub static ONE_SYMBOL_TOKENS: phf::Map<char, TokenKind> = phf_map! {
    '+' => TokenKind::Plus,
    '-' => TokenKind::Minus,
    '*' => TokenKind::Star,
    '/' => TokenKind::Slash,
    '&' => TokenKind::Ampersand,
    '|' => TokenKind::Pipe,
    '^' => TokenKind::Hat,
    '=' => TokenKind::Equal,
    '(' => TokenKind::OpenParen,
    ')' => TokenKind::CloseParen,
};

pub static TWO_SYMBOLS_TOKENS: phf::Map<&str, TokenKind> = phf_map! {
    "++" => TokenKind::PlusPlus,
    "--" => TokenKind::MinusMinus,
    "+=" => TokenKind::PlusEqual,
    "-=" => TokenKind::MinusEqual,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Num,
    Ident,

    Plus,
    Minus,
    Star,
    Slash,
    Ampersand,
    Pipe,
    Hat,
    Equal,

    PlusPlus,
    MinusMinus,
    PlusEqual,
    MinusEqual,

    OpenParen,
    CloseParen,

    Newline,
    Eof,
    Unknown,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}
