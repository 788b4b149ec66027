#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    OpenParen,
    CloseParen,
    Number,
    String,
    Name,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        let name = match self {
            TokenKind::OpenParen => "open paren",
            TokenKind::CloseParen => "close paren",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Name => "name",
        };

        fmt.write_str(name)
    }
}

/// A classified lexical unit.
///
/// The text of a `String` token excludes the surrounding quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new<T: Into<String>>(kind: TokenKind, text: T) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn open_paren() -> Self {
        Self::new(TokenKind::OpenParen, "(")
    }

    pub fn close_paren() -> Self {
        Self::new(TokenKind::CloseParen, ")")
    }

    pub fn number<T: Into<String>>(text: T) -> Self {
        Self::new(TokenKind::Number, text)
    }

    pub fn string<T: Into<String>>(text: T) -> Self {
        Self::new(TokenKind::String, text)
    }

    pub fn name<T: Into<String>>(text: T) -> Self {
        Self::new(TokenKind::Name, text)
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        match self.kind {
            TokenKind::String => write!(fmt, "{} \"{}\"", self.kind, self.text),
            _ => write!(fmt, "{} `{}`", self.kind, self.text),
        }
    }
}
