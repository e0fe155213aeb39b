use logos::Logos;

/// The kind of a lexical token.
///
/// This enum is the closed set of token kinds recognized by the language:
/// literals, operators, delimiters, and keywords. Keywords are ordinary
/// token rules; longest-match resolution ensures that `lets` lexes as an
/// identifier while `let` lexes as the keyword.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r]+")]
pub enum TokenKind {
    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// Identifier tokens; binding or parameter names such as `x` or `adder`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
    /// Integer literal tokens, such as `42`. No sign, no radix prefix.
    #[regex(r"[0-9]+")]
    Int,
    /// String literal tokens. The body is the raw bytes between the double
    /// quotes with no escape processing; a string missing its closing quote
    /// runs to the end of input.
    #[regex(r#""[^"]*"?"#)]
    Str,
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,

    /// A byte the scanner does not recognize. Never produced by a token
    /// rule; the lexer wrapper emits it for scan errors.
    Illegal,
    /// End of input. Produced indefinitely once the source is exhausted.
    Eof,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Ident => "IDENT",
            Self::Int => "INT",
            Self::Str => "STRING",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
        };
        write!(f, "{name}")
    }
}

/// A lexical token: a kind paired with its lexeme text.
///
/// For `Str` tokens the literal is the string body without the surrounding
/// quotes; for every other kind it is the matched source text verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Which kind of token this is.
    pub kind:    TokenKind,
    /// The lexeme text carried by the token.
    pub literal: String,
}

impl Token {
    /// Builds a token from its parts.
    #[must_use]
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self { kind,
               literal: literal.into() }
    }

    /// The end-of-input token.
    #[must_use]
    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }
}

/// A pull-based scanner producing one token per call.
///
/// The lexer never fails: bytes it does not recognize become `Illegal`
/// tokens carrying the offending byte, and once the source is exhausted
/// every further call returns `Eof`.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over the given source text.
    ///
    /// # Example
    /// ```
    /// use langur::interpreter::lexer::{Lexer, TokenKind};
    ///
    /// let mut lexer = Lexer::new("let five = 5;");
    ///
    /// assert_eq!(lexer.next_token().kind, TokenKind::Let);
    /// assert_eq!(lexer.next_token().literal, "five");
    /// ```
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: TokenKind::lexer(source) }
    }

    /// Returns the next token in the source.
    ///
    /// Whitespace is skipped. Repeated calls eventually yield `Eof` and keep
    /// yielding it indefinitely afterwards.
    pub fn next_token(&mut self) -> Token {
        match self.inner.next() {
            Some(Ok(TokenKind::Str)) => {
                Token::new(TokenKind::Str, strip_quotes(self.inner.slice()))
            },
            Some(Ok(kind)) => Token::new(kind, self.inner.slice()),
            Some(Err(())) => Token::new(TokenKind::Illegal, self.inner.slice()),
            None => Token::eof(),
        }
    }
}

/// Removes the delimiting quotes from a string lexeme.
///
/// The leading quote is always present; the trailing one is missing when
/// the string was terminated by the end of input instead.
fn strip_quotes(slice: &str) -> &str {
    let body = &slice[1..];
    body.strip_suffix('"').unwrap_or(body)
}
