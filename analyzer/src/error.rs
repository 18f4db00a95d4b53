//! Analyzer error types.
//!
//! Ordering findings are not errors; they are collected as `Violation`s.
//! These errors mean a collaborator broke the event contract.

use declorder_core::{CoreError, Span};
use thiserror::Error;

/// Errors that can occur while driving the checker.
#[derive(Debug, Error)]
pub enum CheckError {
    /// A member was delivered while no class body was open.
    #[error("Member '{identifier}' at line {line}, column {column} visited outside any class body")]
    NoActiveScope {
        identifier: String,
        line: usize,
        column: usize,
    },

    /// `leave_class_body` without a matching `enter_class_body`.
    #[error("Left a class body that was never entered")]
    UnbalancedScope,

    /// Traversal finished with class bodies still open.
    #[error("Traversal finished with {depth} class bodies still open")]
    UnclosedScopes { depth: usize },

    /// A raw member kind outside the closed enumeration.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl CheckError {
    pub fn no_active_scope(identifier: impl Into<String>, span: Span) -> Self {
        Self::NoActiveScope {
            identifier: identifier.into(),
            line: span.line,
            column: span.column,
        }
    }

    pub fn unclosed_scopes(depth: usize) -> Self {
        Self::UnclosedScopes { depth }
    }
}

/// Result type for checker operations.
pub type CheckResult<T> = Result<T, CheckError>;
