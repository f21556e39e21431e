//! Type identity for guest types crossing the host/guest boundary
//!
//! Every type mentioned by guest-compiled method metadata is identified by its
//! fully-qualified guest name. Keys are cheap to clone, compare and hash, and
//! the identities the invocation pipeline relies on are available as constants
//! in [`well_known`].

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a guest type.
///
/// Two keys are equal exactly when they carry the same fully-qualified name,
/// regardless of how they were constructed.
///
/// # Examples
///
/// ```rust
/// use vireo_reflect::type_key::{well_known, TypeKey};
///
/// let unit = TypeKey::named("vireo.Unit");
/// assert_eq!(unit, well_known::UNIT);
/// assert_eq!(unit.name(), "vireo.Unit");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeKey(Cow<'static, str>);

impl TypeKey {
    /// Creates the key of a well-known guest type.
    ///
    /// This is a const function, so keys can be defined as constants.
    pub const fn well_known(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Creates a key from a runtime-supplied fully-qualified type name.
    pub fn named(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// Returns the fully-qualified guest type name of this key.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Guest type identities the framework treats as fixed vocabulary.
pub mod well_known {
    use super::TypeKey;

    /// The continuation carrier appended to every lowered suspending
    /// signature.
    pub const CONTINUATION: TypeKey = TypeKey::well_known("vireo.coroutines.Continuation");

    /// The guest's no-meaningful-value marker.
    pub const UNIT: TypeKey = TypeKey::well_known("vireo.Unit");

    /// Top of the guest type hierarchy.
    pub const ANY: TypeKey = TypeKey::well_known("vireo.Any");

    pub const BOOLEAN: TypeKey = TypeKey::well_known("vireo.Boolean");
    pub const INT: TypeKey = TypeKey::well_known("vireo.Int");
    pub const LONG: TypeKey = TypeKey::well_known("vireo.Long");
    pub const DOUBLE: TypeKey = TypeKey::well_known("vireo.Double");
    pub const STRING: TypeKey = TypeKey::well_known("vireo.String");
}
