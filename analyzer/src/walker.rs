//! Tree-walking driver.

use crate::{CheckError, CheckResult, Classify, MemberEvent, ScopeStack, Violations};
use declorder_parser::{CompilationUnit, Member, TypeDecl};
use tracing::{debug, trace};

/// Drives the order state machine over class bodies.
///
/// Either walk a whole `CompilationUnit` with [`Checker::check_unit`], or
/// deliver events by hand with `enter_class_body`, `member_declaration`
/// and `leave_class_body` when bringing another syntax tree.
#[derive(Debug, Default)]
pub struct Checker {
    scopes: ScopeStack,
    violations: Violations,
}

impl Checker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check every class body in a parsed file.
    pub fn check_unit(unit: &CompilationUnit) -> CheckResult<Violations> {
        let mut checker = Self::new();
        for decl in &unit.types {
            checker.walk_type(decl)?;
        }
        checker.finish()
    }

    /// Open a class body. Nested bodies get a fresh, independent state.
    pub fn enter_class_body(&mut self, name: &str) {
        self.scopes.push();
        debug!(class = name, depth = self.scopes.depth(), "entering class body");
    }

    /// Close the innermost class body.
    pub fn leave_class_body(&mut self) -> CheckResult<()> {
        let state = self.scopes.pop()?;
        debug!(
            depth = self.scopes.depth(),
            highest = ?state.highest_kind_seen(),
            "leaving class body"
        );
        Ok(())
    }

    /// Classify a direct member of the innermost class body and check it.
    /// Members that do not classify are skipped; a node whose kind cannot
    /// be decoded is an error.
    pub fn member_declaration<N: Classify + ?Sized>(&mut self, node: &N) -> CheckResult<()> {
        match node.to_event()? {
            Some(event) => self.member_event(event),
            None => Ok(()),
        }
    }

    /// Check an already classified member.
    pub fn member_event(&mut self, event: MemberEvent) -> CheckResult<()> {
        if let Some(violation) = self.scopes.visit(&event)? {
            trace!(
                member = %violation.identifier,
                line = violation.line(),
                column = violation.column(),
                key = violation.message_key(),
                "declaration out of order"
            );
            self.violations.push(violation);
        }
        Ok(())
    }

    /// Findings so far.
    pub fn violations(&self) -> &Violations {
        &self.violations
    }

    /// End traversal. Every class body entered must have been left.
    pub fn finish(self) -> CheckResult<Violations> {
        if !self.scopes.is_empty() {
            return Err(CheckError::unclosed_scopes(self.scopes.depth()));
        }
        Ok(self.violations)
    }

    fn walk_type(&mut self, decl: &TypeDecl) -> CheckResult<()> {
        if !decl.kind.is_class_like() {
            debug!(name = %decl.name, kind = %decl.kind, "not checking member order");
            return self.walk_nested_only(decl);
        }

        self.enter_class_body(&decl.name);
        for member in &decl.body.members {
            match member {
                Member::Type(nested) => self.walk_type(nested)?,
                other => self.member_declaration(other)?,
            }
        }
        self.leave_class_body()
    }

    /// Interface and annotation bodies are not ordered, but classes nested
    /// in them are.
    fn walk_nested_only(&mut self, decl: &TypeDecl) -> CheckResult<()> {
        for member in &decl.body.members {
            if let Member::Type(nested) = member {
                self.walk_type(nested)?;
            }
        }
        Ok(())
    }
}
