//! Member classification.
//!
//! The classifier is the boundary between a concrete syntax tree and the
//! order state machine. Any node type can take part by implementing
//! `Classify`; the bundled Java tree implements it for `Member`.

use declorder_core::{CoreResult, MemberKind, Span};
use declorder_parser::Member;

/// One classified declaration, in the order it was encountered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberEvent {
    pub kind: MemberKind,
    pub position: Span,
    /// Declared name; only used for diagnostics.
    pub identifier: String,
}

impl MemberEvent {
    pub fn new(kind: MemberKind, position: Span, identifier: impl Into<String>) -> Self {
        Self {
            kind,
            position,
            identifier: identifier.into(),
        }
    }
}

/// A declaration node that can be classified for ordering.
///
/// Implementors must only be asked about direct members of a class body;
/// a local variable is never a field.
pub trait Classify {
    /// The member kind, or `None` if the node does not take part in
    /// ordering (nested types, initializer blocks, anything else).
    ///
    /// Trees that carry raw kind codes decode them with
    /// `MemberKind::from_code` and return its error for a code outside
    /// the enumeration.
    fn member_kind(&self) -> CoreResult<Option<MemberKind>>;

    /// Where a finding against this node is reported.
    fn position(&self) -> Span;

    /// The declared name, or an empty string if there is none.
    fn identifier(&self) -> &str;

    /// Classify and package as an event.
    fn to_event(&self) -> CoreResult<Option<MemberEvent>> {
        Ok(self
            .member_kind()?
            .map(|kind| MemberEvent::new(kind, self.position(), self.identifier())))
    }
}

/// Classify a member of a parsed class body.
pub fn classify(member: &Member) -> Option<MemberKind> {
    match member {
        Member::Field(field) if field.modifiers.is_static() => Some(MemberKind::StaticField),
        Member::Field(_) => Some(MemberKind::InstanceField),
        Member::Constructor(_) => Some(MemberKind::Constructor),
        Member::Method(_) => Some(MemberKind::Method),
        Member::Type(_) | Member::Initializer(_) | Member::Empty(_) => None,
    }
}

impl Classify for Member {
    fn member_kind(&self) -> CoreResult<Option<MemberKind>> {
        Ok(classify(self))
    }

    fn position(&self) -> Span {
        self.span()
    }

    fn identifier(&self) -> &str {
        self.name().unwrap_or_default()
    }
}
