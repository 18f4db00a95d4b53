//! Message keys and default texts for declaration-order findings.
//!
//! These constants keep the analyzer, the report renderer and user
//! configuration in agreement about what each finding is called.

/// Key: static variable declared after a later member kind.
pub const KEY_STATIC: &str = "declaration.order.static";

/// Key: instance variable declared after a constructor or method.
pub const KEY_INSTANCE: &str = "declaration.order.instance";

/// Key: constructor declared after a method.
pub const KEY_CONSTRUCTOR: &str = "declaration.order.constructor";

/// Key: method out of order.
pub const KEY_METHOD: &str = "declaration.order.method";

/// Default text for `KEY_STATIC`.
pub const MSG_STATIC: &str = "Static variable definition in wrong order.";

/// Default text for `KEY_INSTANCE`.
pub const MSG_INSTANCE: &str = "Instance variable definition in wrong order.";

/// Default text for `KEY_CONSTRUCTOR`.
pub const MSG_CONSTRUCTOR: &str = "Constructor definition in wrong order.";

/// Default text for `KEY_METHOD`.
pub const MSG_METHOD: &str = "Method definition in wrong order.";
