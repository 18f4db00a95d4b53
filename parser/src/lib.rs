//! declorder Parser
//!
//! This crate turns Java source text into the declaration tree the analyzer
//! walks:
//! - Type declarations (class, interface, enum, record, annotation type)
//! - Class-body members (fields, constructors, methods, nested types,
//!   initializer blocks)
//! - Modifier and annotation lists with their source location
//!
//! Method bodies and field initializers are skipped, not parsed.

mod ast;
mod error;
mod lexer;
mod parser;

pub use ast::*;
pub use declorder_core::Span;
pub use error::*;
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{parse_compilation_unit, Parser};
