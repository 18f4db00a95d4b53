//! Integration test harness for declorder.
//!
//! Two ways in:
//! - `Scenario` checks Java source (inline or from `fixtures/`) and verifies
//!   the findings against an `Assertion`.
//! - `MockBody` / `MockNode` stand in for a foreign syntax tree and drive the
//!   checker through its event interface.


use std::path::PathBuf;

pub use assertion::Assertion;
pub use error::{ScenarioError, ScenarioResult};
pub use mock::{drive, MockBody, MockEntry, MockNode, NodeType};
pub use scenario::Scenario;

/// Directory holding the Java fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

pub mod prelude {
    pub use crate::{
        drive, fixtures_dir, Assertion, MockBody, MockEntry, MockNode, NodeType, Scenario,
        ScenarioError, ScenarioResult,
    };
    pub use declorder_analyzer::{Checker, MemberEvent, ScopeState, Violation, Violations};
    pub use declorder_core::{MemberKind, MessageKind, Span};
}
