use std::fmt;

use serde::{Deserialize, Serialize};

use crate::type_key::TypeKey;

/// Read-only view of one formal argument of a lowered method signature.
///
/// The classifier depends on this seam only, never on a concrete reflection
/// mechanism; hosts with their own metadata source implement it over their
/// own types.
pub trait ArgumentMetadata: Sized {
    /// Declared type identity of this argument.
    fn type_key(&self) -> &TypeKey;

    /// Generic type arguments of the declared type, in declaration order.
    fn type_arguments(&self) -> &[Self];
}

/// One formal argument of a method signature, as recorded by guest-compiled
/// metadata.
///
/// Type arguments are represented by nested descriptors; they usually carry
/// no formal name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentDescriptor {
    #[serde(default)]
    name: Option<String>,
    type_key: TypeKey,
    #[serde(default)]
    type_arguments: Vec<ArgumentDescriptor>,
}

impl ArgumentDescriptor {
    /// Argument of the given type without a formal name.
    pub fn of(type_key: TypeKey) -> Self {
        Self {
            name: None,
            type_key,
            type_arguments: Vec::new(),
        }
    }

    /// Named formal argument of the given type.
    pub fn named(name: impl Into<String>, type_key: TypeKey) -> Self {
        Self {
            name: Some(name.into()),
            type_key,
            type_arguments: Vec::new(),
        }
    }

    /// Replaces the generic type arguments of this argument's declared type.
    pub fn with_type_arguments(mut self, type_arguments: Vec<ArgumentDescriptor>) -> Self {
        self.type_arguments = type_arguments;
        self
    }

    /// Formal name, when the guest compiler preserved one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl ArgumentMetadata for ArgumentDescriptor {
    fn type_key(&self) -> &TypeKey {
        &self.type_key
    }

    fn type_arguments(&self) -> &[ArgumentDescriptor] {
        &self.type_arguments
    }
}

impl fmt::Display for ArgumentDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "{}: ", name)?;
        }
        f.write_str(self.type_key.name())?;
        if !self.type_arguments.is_empty() {
            f.write_str("<")?;
            for (index, argument) in self.type_arguments.iter().enumerate() {
                if index > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", argument)?;
            }
            f.write_str(">")?;
        }
        Ok(())
    }
}
