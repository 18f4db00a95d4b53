//! Member kinds and the message tags selected by them.

use crate::{messages, CoreError, CoreResult};
use std::fmt;

/// The canonical member categories, in their mandated declaration order.
///
/// The derived `Ord` is the ordering used by the checker:
/// `StaticField < InstanceField < Constructor < Method`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MemberKind {
    StaticField,
    InstanceField,
    Constructor,
    Method,
}

impl MemberKind {
    /// All kinds, lowest rank first.
    pub const ALL: [MemberKind; 4] = [
        MemberKind::StaticField,
        MemberKind::InstanceField,
        MemberKind::Constructor,
        MemberKind::Method,
    ];

    /// Decode a raw kind code handed over by a foreign tree walker.
    pub fn from_code(code: u8) -> CoreResult<Self> {
        Self::ALL
            .get(code as usize)
            .copied()
            .ok_or(CoreError::UnknownMemberKind(code))
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            MemberKind::StaticField => "static field",
            MemberKind::InstanceField => "instance field",
            MemberKind::Constructor => "constructor",
            MemberKind::Method => "method",
        }
    }

    /// The message reported when a member of this kind appears too late.
    pub fn message_kind(self) -> MessageKind {
        match self {
            MemberKind::StaticField => MessageKind::Static,
            MemberKind::InstanceField => MessageKind::Instance,
            MemberKind::Constructor => MessageKind::Constructor,
            MemberKind::Method => MessageKind::Method,
        }
    }
}

impl TryFrom<u8> for MemberKind {
    type Error = CoreError;

    fn try_from(code: u8) -> CoreResult<Self> {
        Self::from_code(code)
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which canonical message template applies to a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MessageKind {
    /// `MSG_STATIC`
    Static,
    /// `MSG_INSTANCE`
    Instance,
    /// `MSG_CONSTRUCTOR`
    Constructor,
    /// `MSG_METHOD`
    Method,
}

impl MessageKind {
    pub const ALL: [MessageKind; 4] = [
        MessageKind::Static,
        MessageKind::Instance,
        MessageKind::Constructor,
        MessageKind::Method,
    ];

    /// Stable message key, shared with Checkstyle's bundles.
    pub fn key(self) -> &'static str {
        match self {
            MessageKind::Static => messages::KEY_STATIC,
            MessageKind::Instance => messages::KEY_INSTANCE,
            MessageKind::Constructor => messages::KEY_CONSTRUCTOR,
            MessageKind::Method => messages::KEY_METHOD,
        }
    }

    /// Short tag used in configuration files.
    pub fn tag(self) -> &'static str {
        match self {
            MessageKind::Static => "static",
            MessageKind::Instance => "instance",
            MessageKind::Constructor => "constructor",
            MessageKind::Method => "method",
        }
    }

    /// Default English text.
    pub fn default_text(self) -> &'static str {
        match self {
            MessageKind::Static => messages::MSG_STATIC,
            MessageKind::Instance => messages::MSG_INSTANCE,
            MessageKind::Constructor => messages::MSG_CONSTRUCTOR,
            MessageKind::Method => messages::MSG_METHOD,
        }
    }

    /// Parse a configuration tag or a full message key.
    pub fn from_tag(tag: &str) -> CoreResult<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag() == tag || kind.key() == tag)
            .ok_or_else(|| CoreError::UnknownMessageTag(tag.to_string()))
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
