//! Lexer (tokenizer) for Java source text.
//!
//! Only the tokens that shape declarations are distinguished. Operators and
//! other punctuation inside expressions come through as `Other`.

use crate::{ParseError, ParseResult, Span};

/// Token types.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Declaration keywords
    Package,
    Import,
    Class,
    Interface,
    Enum,
    Extends,
    Implements,
    Throws,

    // Modifier keywords
    Public,
    Protected,
    Private,
    Static,
    Abstract,
    Final,
    Transient,
    Volatile,
    Synchronized,
    Native,
    Strictfp,
    Default,
    NonSealed,

    // Literals
    Ident(String),
    Number(String),
    String(String),
    Char(String),

    // Symbols
    LParen,   // (
    RParen,   // )
    LBrace,   // {
    RBrace,   // }
    LBracket, // [
    RBracket, // ]
    Semi,     // ;
    Comma,    // ,
    Dot,      // .
    At,       // @
    Lt,       // <
    Gt,       // >
    Eq,       // =
    Question, // ?
    Other(char),

    // End of file
    Eof,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Package => "package",
            TokenKind::Import => "import",
            TokenKind::Class => "class",
            TokenKind::Interface => "interface",
            TokenKind::Enum => "enum",
            TokenKind::Extends => "extends",
            TokenKind::Implements => "implements",
            TokenKind::Throws => "throws",
            TokenKind::Public => "public",
            TokenKind::Protected => "protected",
            TokenKind::Private => "private",
            TokenKind::Static => "static",
            TokenKind::Abstract => "abstract",
            TokenKind::Final => "final",
            TokenKind::Transient => "transient",
            TokenKind::Volatile => "volatile",
            TokenKind::Synchronized => "synchronized",
            TokenKind::Native => "native",
            TokenKind::Strictfp => "strictfp",
            TokenKind::Default => "default",
            TokenKind::NonSealed => "non-sealed",
            TokenKind::Ident(_) => "identifier",
            TokenKind::Number(_) => "number",
            TokenKind::String(_) => "string",
            TokenKind::Char(_) => "character",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Semi => ";",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::At => "@",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Eq => "=",
            TokenKind::Question => "?",
            TokenKind::Other(_) => "operator",
            TokenKind::Eof => "end of input",
        }
    }

    /// Returns true if this token is a member or type modifier keyword.
    pub fn is_modifier(&self) -> bool {
        matches!(
            self,
            TokenKind::Public
                | TokenKind::Protected
                | TokenKind::Private
                | TokenKind::Static
                | TokenKind::Abstract
                | TokenKind::Final
                | TokenKind::Transient
                | TokenKind::Volatile
                | TokenKind::Synchronized
                | TokenKind::Native
                | TokenKind::Strictfp
                | TokenKind::Default
                | TokenKind::NonSealed
        )
    }
}

/// A token with its span.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn eof(pos: usize, line: usize, column: usize) -> Self {
        Self {
            kind: TokenKind::Eof,
            span: Span::new(pos, pos, line, column),
        }
    }
}

/// Lexer state.
pub struct Lexer<'a> {
    input: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize all input into a vector of tokens.
    pub fn tokenize(mut self) -> ParseResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = matches!(token.kind, TokenKind::Eof);
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn span_from(&self, start: usize, start_line: usize, start_col: usize) -> Span {
        Span::new(start, self.pos, start_line, start_col)
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn next_char(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.pos = pos + c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            Some(c)
        } else {
            None
        }
    }

    /// Skip whitespace and comments.
    fn skip_trivia(&mut self) -> ParseResult<()> {
        loop {
            match self.peek_char() {
                Some(c) if c.is_whitespace() => {
                    self.next_char();
                }
                Some('/') if self.rest().starts_with("//") => {
                    while let Some(c) = self.peek_char() {
                        if c == '\n' {
                            break;
                        }
                        self.next_char();
                    }
                }
                Some('/') if self.rest().starts_with("/*") => {
                    let (start, line, col) = (self.pos, self.line, self.column);
                    self.next_char();
                    self.next_char();
                    loop {
                        if self.rest().starts_with("*/") {
                            self.next_char();
                            self.next_char();
                            break;
                        }
                        if self.next_char().is_none() {
                            return Err(ParseError::new(
                                "unterminated block comment",
                                self.span_from(start, line, col),
                            ));
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn next_token(&mut self) -> ParseResult<Token> {
        self.skip_trivia()?;

        let start = self.pos;
        let start_line = self.line;
        let start_col = self.column;

        let Some(c) = self.next_char() else {
            return Ok(Token::eof(self.pos, self.line, self.column));
        };

        let kind = match c {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            ';' => TokenKind::Semi,
            ',' => TokenKind::Comma,
            '@' => TokenKind::At,
            '<' => TokenKind::Lt,
            // `>>` and `>>>` stay split so generic argument lists balance.
            '>' => TokenKind::Gt,
            '=' => TokenKind::Eq,
            '?' => TokenKind::Question,
            '.' => match self.peek_char() {
                Some(d) if d.is_ascii_digit() => self.scan_number(c),
                _ => TokenKind::Dot,
            },
            '"' => self.scan_string(start, start_line, start_col)?,
            '\'' => self.scan_char(start, start_line, start_col)?,
            '0'..='9' => self.scan_number(c),
            c if c == '_' || c == '$' || c.is_alphabetic() => self.scan_ident_or_keyword(c),
            other => TokenKind::Other(other),
        };

        Ok(Token::new(
            kind,
            self.span_from(start, start_line, start_col),
        ))
    }

    fn scan_string(
        &mut self,
        start: usize,
        start_line: usize,
        start_col: usize,
    ) -> ParseResult<TokenKind> {
        if self.rest().starts_with("\"\"") {
            return self.scan_text_block(start, start_line, start_col);
        }

        let mut value = String::new();
        loop {
            match self.next_char() {
                None | Some('\n') => {
                    return Err(ParseError::new(
                        "unterminated string literal",
                        self.span_from(start, start_line, start_col),
                    ));
                }
                Some('"') => break,
                Some('\\') => {
                    value.push('\\');
                    if let Some(escaped) = self.next_char() {
                        value.push(escaped);
                    }
                }
                Some(c) => value.push(c),
            }
        }

        Ok(TokenKind::String(value))
    }

    fn scan_text_block(
        &mut self,
        start: usize,
        start_line: usize,
        start_col: usize,
    ) -> ParseResult<TokenKind> {
        // Opening quote already consumed; take the other two.
        self.next_char();
        self.next_char();

        let mut value = String::new();
        loop {
            if self.rest().starts_with("\"\"\"") {
                for _ in 0..3 {
                    self.next_char();
                }
                return Ok(TokenKind::String(value));
            }
            match self.next_char() {
                None => {
                    return Err(ParseError::new(
                        "unterminated text block",
                        self.span_from(start, start_line, start_col),
                    ));
                }
                Some('\\') => {
                    value.push('\\');
                    if let Some(escaped) = self.next_char() {
                        value.push(escaped);
                    }
                }
                Some(c) => value.push(c),
            }
        }
    }

    fn scan_char(
        &mut self,
        start: usize,
        start_line: usize,
        start_col: usize,
    ) -> ParseResult<TokenKind> {
        let mut value = String::new();
        loop {
            match self.next_char() {
                None | Some('\n') => {
                    return Err(ParseError::new(
                        "unterminated character literal",
                        self.span_from(start, start_line, start_col),
                    ));
                }
                Some('\'') => break,
                Some('\\') => {
                    value.push('\\');
                    if let Some(escaped) = self.next_char() {
                        value.push(escaped);
                    }
                }
                Some(c) => value.push(c),
            }
        }
        Ok(TokenKind::Char(value))
    }

    /// Numbers are kept as text; declarations never need their value.
    fn scan_number(&mut self, first: char) -> TokenKind {
        let mut number = String::new();
        number.push(first);

        while let Some(c) = self.peek_char() {
            if c.is_ascii_alphanumeric() || c == '_' || c == '.' {
                number.push(c);
                self.next_char();
            } else if (c == '+' || c == '-')
                && number.ends_with(&['e', 'E', 'p', 'P'][..])
                && !number.starts_with("0x")
                && !number.starts_with("0X")
            {
                number.push(c);
                self.next_char();
            } else {
                break;
            }
        }

        TokenKind::Number(number)
    }

    fn scan_ident_or_keyword(&mut self, first: char) -> TokenKind {
        let mut ident = String::new();
        ident.push(first);

        while let Some(c) = self.peek_char() {
            if c.is_alphanumeric() || c == '_' || c == '$' {
                ident.push(c);
                self.next_char();
            } else {
                break;
            }
        }

        if ident == "non" && self.rest().starts_with("-sealed") {
            for _ in 0.."-sealed".len() {
                self.next_char();
            }
            return TokenKind::NonSealed;
        }

        // `sealed`, `record` and `permits` are contextual and stay identifiers.
        match ident.as_str() {
            "package" => TokenKind::Package,
            "import" => TokenKind::Import,
            "class" => TokenKind::Class,
            "interface" => TokenKind::Interface,
            "enum" => TokenKind::Enum,
            "extends" => TokenKind::Extends,
            "implements" => TokenKind::Implements,
            "throws" => TokenKind::Throws,
            "public" => TokenKind::Public,
            "protected" => TokenKind::Protected,
            "private" => TokenKind::Private,
            "static" => TokenKind::Static,
            "abstract" => TokenKind::Abstract,
            "final" => TokenKind::Final,
            "transient" => TokenKind::Transient,
            "volatile" => TokenKind::Volatile,
            "synchronized" => TokenKind::Synchronized,
            "native" => TokenKind::Native,
            "strictfp" => TokenKind::Strictfp,
            "default" => TokenKind::Default,
            _ => TokenKind::Ident(ident),
        }
    }
}
