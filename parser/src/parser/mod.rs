//! Parser for Java declarations.
//!
//! This module is organized into submodules by parsing category:
//! - `decl`: Compilation units and type declarations
//! - `member`: Class-body members (fields, constructors, methods, initializers)
//!
//! Anything below member level (method bodies, field initializers,
//! annotation arguments) is skipped by bracket balancing.

mod decl;
mod member;

use crate::ast::*;
use crate::error::{ParseError, ParseResult};
use crate::lexer::{Lexer, Token, TokenKind};
use crate::Span;

// ==================== PARSER STATE ====================

/// Parser state.
pub struct Parser {
    source: String,
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Create a new parser from source text.
    pub fn new(input: &str) -> ParseResult<Self> {
        let tokens = Lexer::new(input).tokenize()?;
        Ok(Self {
            source: input.to_string(),
            tokens,
            pos: 0,
        })
    }
}

// ==================== TOKEN HELPERS ====================

impl Parser {
    pub(crate) fn peek(&self) -> &Token {
        self.peek_at(0)
    }

    /// Look `offset` tokens ahead; clamps to the trailing EOF token.
    pub(crate) fn peek_at(&self, offset: usize) -> &Token {
        self.tokens.get(self.pos + offset).unwrap_or_else(|| {
            self.tokens
                .last()
                .expect("tokens should always end with EOF")
        })
    }

    pub(crate) fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.peek().kind) == std::mem::discriminant(kind)
    }

    pub(crate) fn check_at(&self, offset: usize, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.peek_at(offset).kind) == std::mem::discriminant(kind)
    }

    pub(crate) fn check_ident(&self, name: &str) -> bool {
        matches!(&self.peek().kind, TokenKind::Ident(s) if s == name)
    }

    pub(crate) fn expect(&mut self, kind: &TokenKind) -> ParseResult<Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            let token = self.peek();
            Err(self.unexpected(token, kind.name()))
        }
    }

    pub(crate) fn expect_ident(&mut self) -> ParseResult<String> {
        match self.peek().kind.clone() {
            TokenKind::Ident(name) => {
                self.advance();
                Ok(name)
            }
            _ => {
                let token = self.peek();
                Err(self.unexpected(token, "identifier"))
            }
        }
    }

    /// Parse a dotted name such as `java.util.List`.
    pub(crate) fn expect_qualified_name(&mut self) -> ParseResult<String> {
        let mut name = self.expect_ident()?;
        while self.check(&TokenKind::Dot) && matches!(self.peek_at(1).kind, TokenKind::Ident(_)) {
            self.advance();
            name.push('.');
            name.push_str(&self.expect_ident()?);
        }
        Ok(name)
    }

    pub(crate) fn unexpected(&self, token: &Token, expected: &str) -> ParseError {
        if matches!(token.kind, TokenKind::Eof) {
            ParseError::unexpected_eof(token.span, expected)
        } else {
            ParseError::unexpected_token(token.span, expected, token.kind.name())
        }
    }

    /// Span from `start` to the end of the last consumed token.
    pub(crate) fn span_from(&self, start: Span) -> Span {
        let end_token = if self.pos > 0 {
            &self.tokens[self.pos - 1]
        } else {
            self.peek()
        };
        Span::new(start.start, end_token.span.end, start.line, start.column)
    }

    /// Source text covered by `span`, with runs of whitespace collapsed.
    pub(crate) fn text(&self, span: Span) -> String {
        self.source
            .get(span.start..span.end)
            .unwrap_or_default()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// ==================== SKIPPING ====================

fn closer_for(kind: &TokenKind) -> Option<TokenKind> {
    match kind {
        TokenKind::LParen => Some(TokenKind::RParen),
        TokenKind::LBrace => Some(TokenKind::RBrace),
        TokenKind::LBracket => Some(TokenKind::RBracket),
        _ => None,
    }
}

fn is_closer(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::RParen | TokenKind::RBrace | TokenKind::RBracket
    )
}

impl Parser {
    /// Consume one bracketed group, starting at the opening token.
    pub(crate) fn skip_balanced(&mut self) -> ParseResult<()> {
        let open = self.advance();
        let Some(closer) = closer_for(&open.kind) else {
            return Err(ParseError::unexpected_token(
                open.span,
                "'(', '{' or '['",
                open.kind.name(),
            ));
        };

        let mut stack = vec![(closer, open)];
        while let Some((expected, opened)) = stack.last().cloned() {
            let token = self.advance();
            if matches!(token.kind, TokenKind::Eof) {
                return Err(ParseError::unbalanced(opened.kind.name(), opened.span));
            }
            if let Some(closer) = closer_for(&token.kind) {
                stack.push((closer, token));
            } else if is_closer(&token.kind) {
                if token.kind != expected {
                    return Err(ParseError::unexpected_token(
                        token.span,
                        expected.name(),
                        token.kind.name(),
                    ));
                }
                stack.pop();
            }
        }
        Ok(())
    }

    /// Consume a `<...>` group, starting at `<`.
    pub(crate) fn skip_angle_group(&mut self) -> ParseResult<()> {
        let open = self.expect(&TokenKind::Lt)?;
        let mut depth = 1usize;
        while depth > 0 {
            let kind = self.peek().kind.clone();
            match kind {
                TokenKind::Lt => depth += 1,
                TokenKind::Gt => depth -= 1,
                TokenKind::Eof | TokenKind::LBrace | TokenKind::Semi => {
                    return Err(ParseError::unbalanced("<", open.span));
                }
                TokenKind::LParen | TokenKind::LBracket => {
                    self.skip_balanced()?;
                    continue;
                }
                _ => {}
            }
            self.advance();
        }
        Ok(())
    }

    /// Consume tokens up to (not including) the first token at bracket
    /// depth zero for which `stop` returns true.
    pub(crate) fn skip_until(&mut self, stop: impl Fn(&Parser) -> bool) -> ParseResult<()> {
        loop {
            if stop(self) {
                return Ok(());
            }
            let token = self.peek();
            if matches!(token.kind, TokenKind::Eof) {
                return Err(ParseError::unexpected_eof(token.span, "';' or '{'"));
            }
            if closer_for(&token.kind).is_some() {
                self.skip_balanced()?;
            } else if is_closer(&token.kind) {
                let token = token.clone();
                return Err(ParseError::unexpected_token(
                    token.span,
                    "declaration",
                    token.kind.name(),
                ));
            } else {
                self.advance();
            }
        }
    }

    /// Consume a statement ending in `;`, including the `;`.
    pub(crate) fn skip_statement(&mut self) -> ParseResult<()> {
        self.skip_until(|p| p.check(&TokenKind::Semi))?;
        self.advance();
        Ok(())
    }
}

// ==================== PUBLIC API ====================

/// Parse a whole source file.
pub fn parse_compilation_unit(input: &str) -> ParseResult<CompilationUnit> {
    Parser::new(input)?.parse_compilation_unit()
}

// ==================== TESTS ====================
