//! declorder Core Types
//!
//! This crate provides the foundational types shared by the parser, the
//! analyzer and the command-line driver:
//! - Source locations (Span)
//! - The ordered member kinds (MemberKind)
//! - Message tags and their canonical keys and texts (MessageKind)
//! - Common error types

mod error;
mod kind;
pub mod messages;
mod span;

pub use error::*;
pub use kind::*;
pub use span::*;
