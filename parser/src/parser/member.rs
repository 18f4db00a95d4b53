//! Class-body member parsing.

use super::Parser;
use crate::ast::*;
use crate::error::ParseResult;
use crate::lexer::TokenKind;
use crate::Span;

impl Parser {
    /// Parse one member of a class body owned by the type `owner`.
    pub(crate) fn parse_member(&mut self, owner_kind: TypeKind, owner: &str) -> ParseResult<Member> {
        let first = self.peek().span;

        let kind = self.peek().kind.clone();
        match kind {
            TokenKind::Semi => {
                self.advance();
                return Ok(Member::Empty(first));
            }
            TokenKind::LBrace => return self.parse_initializer(false, first),
            TokenKind::Static if self.check_at(1, &TokenKind::LBrace) => {
                self.advance();
                return self.parse_initializer(true, first);
            }
            _ => {}
        }

        let modifiers = self.parse_modifiers()?;
        let start = modifiers.span.unwrap_or(self.peek().span);

        if self.at_type_decl() {
            return Ok(Member::Type(self.parse_type_decl(modifiers, start)?));
        }

        // Generic method or constructor: `<T> T pick()`.
        if self.check(&TokenKind::Lt) {
            self.skip_angle_group()?;
        }

        if self.check_ident(owner) {
            if self.check_at(1, &TokenKind::LParen) {
                return self.parse_constructor(modifiers, start, false);
            }
            if owner_kind == TypeKind::Record && self.check_at(1, &TokenKind::LBrace) {
                return self.parse_constructor(modifiers, start, true);
            }
        }

        let ty = self.parse_type()?;
        let name = self.expect_ident()?;

        if self.check(&TokenKind::LParen) {
            self.parse_method(modifiers, ty, name, start)
        } else {
            self.parse_field(modifiers, ty, name, start)
        }
    }

    fn parse_initializer(&mut self, is_static: bool, start: Span) -> ParseResult<Member> {
        self.skip_balanced()?;
        Ok(Member::Initializer(InitializerBlock {
            is_static,
            span: self.span_from(start),
        }))
    }

    fn parse_constructor(
        &mut self,
        modifiers: Modifiers,
        start: Span,
        compact: bool,
    ) -> ParseResult<Member> {
        let name = self.expect_ident()?;
        if !compact {
            self.skip_balanced()?;
            // throws clause
            self.skip_until(|p| p.check(&TokenKind::LBrace))?;
        }
        self.skip_balanced()?;

        Ok(Member::Constructor(ConstructorDecl {
            modifiers,
            name,
            compact,
            span: self.span_from(start),
        }))
    }

    fn parse_method(
        &mut self,
        modifiers: Modifiers,
        return_type: String,
        name: String,
        start: Span,
    ) -> ParseResult<Member> {
        // Parameters.
        self.skip_balanced()?;

        // Array dimensions and throws clause.
        self.skip_until(|p| {
            p.check(&TokenKind::LBrace) || p.check(&TokenKind::Semi) || p.check(&TokenKind::Default)
        })?;
        let has_body = self.check(&TokenKind::LBrace);
        if has_body {
            self.skip_balanced()?;
        } else {
            // `;`, or an annotation element default such as `default {}`.
            self.skip_statement()?;
        }

        Ok(Member::Method(MethodDecl {
            modifiers,
            name,
            return_type,
            has_body,
            span: self.span_from(start),
        }))
    }

    fn parse_field(
        &mut self,
        modifiers: Modifiers,
        ty: String,
        first_name: String,
        start: Span,
    ) -> ParseResult<Member> {
        let mut names = vec![first_name];

        loop {
            // `int a[] = ...` style dimensions after the name.
            while self.check(&TokenKind::LBracket) {
                self.skip_balanced()?;
            }
            if self.check(&TokenKind::Eq) {
                self.advance();
                self.skip_until(|p| {
                    p.check(&TokenKind::Semi) || (p.check(&TokenKind::Comma) && p.at_next_declarator())
                })?;
            }

            let token = self.advance();
            match token.kind {
                TokenKind::Semi => break,
                TokenKind::Comma => names.push(self.expect_ident()?),
                _ => return Err(self.unexpected(&token, ";")),
            }
        }

        Ok(Member::Field(FieldDecl {
            modifiers,
            ty,
            names,
            span: self.span_from(start),
        }))
    }

    /// At a `,` inside a field initializer: does a new declarator follow?
    /// Commas inside generic arguments such as `new HashMap<K, V>()` are
    /// not bracketed, so the token shape after the comma decides.
    fn at_next_declarator(&self) -> bool {
        matches!(self.peek_at(1).kind, TokenKind::Ident(_))
            && matches!(
                self.peek_at(2).kind,
                TokenKind::Eq | TokenKind::Comma | TokenKind::Semi | TokenKind::LBracket
            )
    }

    /// Parse a type such as `java.util.Map<K, List<V>>[]` and return its text.
    pub(crate) fn parse_type(&mut self) -> ParseResult<String> {
        self.skip_type_annotations()?;

        let start = self.peek().span;
        self.expect_ident()?;
        loop {
            if self.check(&TokenKind::Lt) {
                self.skip_angle_group()?;
            } else if self.check(&TokenKind::Dot)
                && matches!(self.peek_at(1).kind, TokenKind::Ident(_))
            {
                self.advance();
                self.advance();
            } else if self.check(&TokenKind::Dot) && self.check_at(1, &TokenKind::At) {
                // `java.util.@NonNull List`
                self.advance();
                self.skip_type_annotations()?;
                self.expect_ident()?;
            } else if self.check(&TokenKind::LBracket) && self.check_at(1, &TokenKind::RBracket) {
                self.advance();
                self.advance();
            } else {
                break;
            }
        }

        Ok(self.text(self.span_from(start)))
    }

    /// Skip type annotations such as `@NonNull` or `@Size(max = 3)`.
    fn skip_type_annotations(&mut self) -> ParseResult<()> {
        while self.check(&TokenKind::At) {
            self.advance();
            self.expect_qualified_name()?;
            if self.check(&TokenKind::LParen) {
                self.skip_balanced()?;
            }
        }
        Ok(())
    }
}
