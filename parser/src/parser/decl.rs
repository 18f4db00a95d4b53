//! Compilation unit and type declaration parsing.

use super::Parser;
use crate::ast::*;
use crate::error::ParseResult;
use crate::lexer::TokenKind;
use crate::Span;

impl Parser {
    /// Parse a whole source file.
    pub fn parse_compilation_unit(&mut self) -> ParseResult<CompilationUnit> {
        let mut package = None;
        let mut types = Vec::new();

        loop {
            let kind = self.peek().kind.clone();
            match kind {
                TokenKind::Eof => break,
                TokenKind::Semi => {
                    self.advance();
                }
                TokenKind::Import => self.skip_statement()?,
                _ => {
                    let modifiers = self.parse_modifiers()?;
                    if self.check(&TokenKind::Package) {
                        self.advance();
                        package = Some(self.expect_qualified_name()?);
                        self.expect(&TokenKind::Semi)?;
                        continue;
                    }
                    let start = modifiers.span.unwrap_or(self.peek().span);
                    types.push(self.parse_type_decl(modifiers, start)?);
                }
            }
        }

        Ok(CompilationUnit { package, types })
    }

    /// Parse modifier keywords and annotations, in any order.
    pub(crate) fn parse_modifiers(&mut self) -> ParseResult<Modifiers> {
        let mut modifiers = Modifiers::default();

        loop {
            let token = self.peek().clone();
            let modifier = match token.kind {
                TokenKind::Public => Modifier::Public,
                TokenKind::Protected => Modifier::Protected,
                TokenKind::Private => Modifier::Private,
                TokenKind::Static => Modifier::Static,
                TokenKind::Abstract => Modifier::Abstract,
                TokenKind::Final => Modifier::Final,
                TokenKind::Transient => Modifier::Transient,
                TokenKind::Volatile => Modifier::Volatile,
                TokenKind::Synchronized => Modifier::Synchronized,
                TokenKind::Native => Modifier::Native,
                TokenKind::Strictfp => Modifier::Strictfp,
                TokenKind::Default => Modifier::Default,
                TokenKind::NonSealed => Modifier::NonSealed,
                TokenKind::Ident(ref name) if name == "sealed" && self.sealed_is_modifier() => {
                    Modifier::Sealed
                }
                TokenKind::At if !self.check_at(1, &TokenKind::Interface) => {
                    self.advance();
                    let name = self.expect_qualified_name()?;
                    if self.check(&TokenKind::LParen) {
                        self.skip_balanced()?;
                    }
                    modifiers.annotations.push(name);
                    modifiers.span.get_or_insert(token.span);
                    continue;
                }
                _ => break,
            };

            self.advance();
            modifiers.keywords.push(modifier);
            modifiers.span.get_or_insert(token.span);
        }

        Ok(modifiers)
    }

    /// `sealed` is only a modifier when another modifier or a type keyword
    /// follows it; otherwise it is an ordinary name.
    fn sealed_is_modifier(&self) -> bool {
        let next = &self.peek_at(1).kind;
        next.is_modifier()
            || matches!(
                next,
                TokenKind::Class | TokenKind::Interface | TokenKind::At
            )
    }

    /// Does a type declaration start at the current token?
    pub(crate) fn at_type_decl(&self) -> bool {
        match self.peek().kind {
            TokenKind::Class | TokenKind::Interface | TokenKind::Enum => true,
            TokenKind::At => self.check_at(1, &TokenKind::Interface),
            _ => self.check_ident("record") && matches!(self.peek_at(1).kind, TokenKind::Ident(_)),
        }
    }

    /// Parse a type declaration after its modifiers.
    pub(crate) fn parse_type_decl(
        &mut self,
        modifiers: Modifiers,
        start: Span,
    ) -> ParseResult<TypeDecl> {
        let keyword = self.advance();
        let kind = match keyword.kind {
            TokenKind::Class => TypeKind::Class,
            TokenKind::Interface => TypeKind::Interface,
            TokenKind::Enum => TypeKind::Enum,
            TokenKind::At => {
                self.expect(&TokenKind::Interface)?;
                TypeKind::Annotation
            }
            TokenKind::Ident(ref name) if name == "record" => TypeKind::Record,
            _ => {
                return Err(self.unexpected(&keyword, "class, interface, enum or record"));
            }
        };

        let name = self.expect_ident()?;

        // Type parameters, record components, extends/implements/permits.
        self.skip_until(|p| p.check(&TokenKind::LBrace))?;

        let body = self.parse_class_body(kind, &name)?;

        Ok(TypeDecl {
            kind,
            name,
            modifiers,
            body,
            span: self.span_from(start),
        })
    }

    /// Parse `{ members }`.
    fn parse_class_body(&mut self, kind: TypeKind, owner: &str) -> ParseResult<ClassBody> {
        let open = self.expect(&TokenKind::LBrace)?;

        if kind == TypeKind::Enum {
            self.skip_enum_constants()?;
        }

        let mut members = Vec::new();
        while !self.check(&TokenKind::RBrace) {
            if self.check(&TokenKind::Eof) {
                let token = self.peek();
                return Err(self.unexpected(token, "}"));
            }
            members.push(self.parse_member(kind, owner)?);
        }
        self.expect(&TokenKind::RBrace)?;

        Ok(ClassBody {
            members,
            span: self.span_from(open.span),
        })
    }

    /// Skip the constant list at the head of an enum body, through the `;`
    /// that ends it (if any).
    fn skip_enum_constants(&mut self) -> ParseResult<()> {
        self.skip_until(|p| p.check(&TokenKind::Semi) || p.check(&TokenKind::RBrace))?;
        if self.check(&TokenKind::Semi) {
            self.advance();
        }
        Ok(())
    }
}
