//! Declaration-order findings.

use crate::MemberEvent;
use declorder_core::{MemberKind, MessageKind, Span};

/// A member declared after a member of a later kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Position of the out-of-order member itself.
    pub position: Span,
    /// The highest kind already seen in the scope.
    pub expected_not_before: MemberKind,
    /// The kind of the out-of-order member.
    pub actual: MemberKind,
    /// Which message template applies.
    pub message: MessageKind,
    /// Name of the out-of-order member.
    pub identifier: String,
}

impl Violation {
    /// Create a violation against `event`.
    pub fn new(event: &MemberEvent, expected_not_before: MemberKind, message: MessageKind) -> Self {
        Self {
            position: event.position,
            expected_not_before,
            actual: event.kind,
            message,
            identifier: event.identifier.clone(),
        }
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }

    /// The stable message key, e.g. `declaration.order.static`.
    pub fn message_key(&self) -> &'static str {
        self.message.key()
    }
}

/// Collection of violations.
#[derive(Debug, Clone, Default)]
pub struct Violations {
    violations: Vec<Violation>,
}

impl Violations {
    /// Create a new empty violations collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a violation.
    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Check if there are any violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Get all violations.
    pub fn all(&self) -> &[Violation] {
        &self.violations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    /// Violations using the given message.
    pub fn with_message(&self, message: MessageKind) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(move |v| v.message == message)
    }

    /// Get the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Order by source position. Nested class bodies are checked when
    /// they are reached, so collection order is already close to this.
    pub fn sort_by_position(&mut self) {
        self.violations
            .sort_by_key(|v| (v.position.line, v.position.column));
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}
