//! Class-body scope management.

use crate::{CheckError, CheckResult, MemberEvent, ScopeState, Violation};

/// The stack of open class bodies.
///
/// Entering a nested class body pushes a fresh frame; leaving it pops back
/// to the enclosing body, whose state is untouched by the nested members.
#[derive(Debug, Default)]
pub struct ScopeStack {
    frames: Vec<ScopeState>,
}

impl ScopeStack {
    /// Create a new stack with no open class body.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a class body.
    pub fn push(&mut self) {
        self.frames.push(ScopeState::new());
    }

    /// Close the innermost class body and hand back its final state.
    pub fn pop(&mut self) -> CheckResult<ScopeState> {
        self.frames.pop().ok_or(CheckError::UnbalancedScope)
    }

    /// Feed an event to the innermost class body.
    pub fn visit(&mut self, event: &MemberEvent) -> CheckResult<Option<Violation>> {
        let frame = self
            .frames
            .last_mut()
            .ok_or_else(|| CheckError::no_active_scope(&event.identifier, event.position))?;
        Ok(frame.visit(event))
    }

    /// Get the current depth (number of open class bodies).
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
