//! declorder Analyzer
//!
//! Checks that the members of every class body appear in the canonical
//! order: static fields, instance fields, constructors, methods.
//!
//! - `classifier`: maps a declaration node to its `MemberKind`
//! - `order`: the per-scope order state machine
//! - `scope`: the stack of scopes for nested class bodies
//! - `walker`: drives the above over a parsed compilation unit

mod classifier;
mod error;
mod order;
mod scope;
mod violation;
mod walker;

pub use classifier::{classify, Classify, MemberEvent};
pub use error::{CheckError, CheckResult};
pub use order::{enter_scope, leave_scope, transition, visit, ScopeState};
pub use scope::ScopeStack;
pub use violation::{Violation, Violations};
pub use walker::Checker;
