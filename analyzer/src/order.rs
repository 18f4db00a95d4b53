//! The declaration-order state machine.
//!
//! States are `None < StaticField < InstanceField < Constructor < Method`.
//! Each event moves the state forward to its kind or leaves it where it is;
//! an event whose kind ranks below the state is rejected and reported.
//! There is no terminal state: a scope's machine is discarded, not finished.

use crate::{MemberEvent, Violation};
use declorder_core::{MemberKind, MessageKind};

/// Ordering state for one class body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScopeState {
    highest: Option<MemberKind>,
}

impl ScopeState {
    /// A state for a class body with no relevant members seen yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The highest member kind accepted so far.
    pub fn highest_kind_seen(&self) -> Option<MemberKind> {
        self.highest
    }

    /// Feed one event. Returns the violation if the event is out of order;
    /// in that case the state is left unchanged.
    pub fn visit(&mut self, event: &MemberEvent) -> Option<Violation> {
        let (next, message) = transition(self.highest, event.kind);
        self.highest = next;

        let message = message?;
        // A rejection implies a previous maximum.
        let highest = self.highest.unwrap_or(event.kind);
        Some(Violation::new(event, highest, message))
    }
}

/// The pure transition function: `(state, kind) -> (state', finding)`.
///
/// The state never moves backwards. A backward step yields the message
/// selected by the rejected kind and the unchanged state.
pub fn transition(
    highest: Option<MemberKind>,
    kind: MemberKind,
) -> (Option<MemberKind>, Option<MessageKind>) {
    match highest {
        None => (Some(kind), None),
        Some(current) if kind >= current => (Some(kind), None),
        Some(current) => (Some(current), Some(kind.message_kind())),
    }
}

/// Start checking a class body.
pub fn enter_scope() -> ScopeState {
    ScopeState::new()
}

/// Consume one event against `state`.
pub fn visit(event: MemberEvent, state: &mut ScopeState) -> Option<Violation> {
    state.visit(&event)
}

/// Finish checking a class body.
pub fn leave_scope(_state: ScopeState) {}
