//! Declaration tree types for Java source.

use crate::Span;
use std::fmt;

/// A parsed source file.
#[derive(Debug, Clone, PartialEq)]
pub struct CompilationUnit {
    pub package: Option<String>,
    pub types: Vec<TypeDecl>,
}

// ==================== TYPES ====================

/// Which flavour of type declaration introduced a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
    Record,
    Annotation,
}

impl TypeKind {
    pub fn name(self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Interface => "interface",
            TypeKind::Enum => "enum",
            TypeKind::Record => "record",
            TypeKind::Annotation => "@interface",
        }
    }

    /// Class-like bodies hold fields, constructors and methods whose order
    /// is meaningful. Interface and annotation bodies do not.
    pub fn is_class_like(self) -> bool {
        matches!(self, TypeKind::Class | TypeKind::Enum | TypeKind::Record)
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A type declaration, top-level or nested.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDecl {
    pub kind: TypeKind,
    pub name: String,
    pub modifiers: Modifiers,
    pub body: ClassBody,
    pub span: Span,
}

/// The `{ ... }` of a type declaration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClassBody {
    pub members: Vec<Member>,
    pub span: Span,
}

// ==================== MODIFIERS ====================

/// A modifier keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Static,
    Abstract,
    Final,
    Transient,
    Volatile,
    Synchronized,
    Native,
    Strictfp,
    Default,
    Sealed,
    NonSealed,
}

/// Modifier keywords and annotations preceding a declaration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Modifiers {
    pub keywords: Vec<Modifier>,
    /// Annotation names without the `@`, e.g. `Override` or `javax.Nullable`.
    pub annotations: Vec<String>,
    /// Location of the first modifier or annotation; `None` when empty.
    pub span: Option<Span>,
}

impl Modifiers {
    pub fn contains(&self, modifier: Modifier) -> bool {
        self.keywords.contains(&modifier)
    }

    pub fn is_static(&self) -> bool {
        self.contains(Modifier::Static)
    }
}

// ==================== MEMBERS ====================

/// One direct member of a class body.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Field(FieldDecl),
    Constructor(ConstructorDecl),
    Method(MethodDecl),
    Type(TypeDecl),
    Initializer(InitializerBlock),
    /// A stray `;` between members.
    Empty(Span),
}

impl Member {
    pub fn span(&self) -> Span {
        match self {
            Member::Field(f) => f.span,
            Member::Constructor(c) => c.span,
            Member::Method(m) => m.span,
            Member::Type(t) => t.span,
            Member::Initializer(i) => i.span,
            Member::Empty(span) => *span,
        }
    }

    /// Declared name, if the member declares one. For multi-declarator
    /// fields this is the first name.
    pub fn name(&self) -> Option<&str> {
        match self {
            Member::Field(f) => f.names.first().map(String::as_str),
            Member::Constructor(c) => Some(&c.name),
            Member::Method(m) => Some(&m.name),
            Member::Type(t) => Some(&t.name),
            Member::Initializer(_) | Member::Empty(_) => None,
        }
    }
}

/// A field declaration, e.g. `private static final int A = 1, B = 2;`.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    pub modifiers: Modifiers,
    pub ty: String,
    pub names: Vec<String>,
    pub span: Span,
}

/// A constructor. `compact` marks a record's canonical constructor written
/// without a parameter list.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstructorDecl {
    pub modifiers: Modifiers,
    pub name: String,
    pub compact: bool,
    pub span: Span,
}

/// A method declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDecl {
    pub modifiers: Modifiers,
    pub name: String,
    pub return_type: String,
    /// False for abstract, native and interface methods ending in `;`.
    pub has_body: bool,
    pub span: Span,
}

/// A `static { ... }` or instance `{ ... }` block.
#[derive(Debug, Clone, PartialEq)]
pub struct InitializerBlock {
    pub is_static: bool,
    pub span: Span,
}
