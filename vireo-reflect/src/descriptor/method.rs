use std::fmt;

use serde::{Deserialize, Serialize};

use super::argument::{ArgumentDescriptor, ArgumentMetadata};
use crate::type_key::{well_known, TypeKey};

/// Read-only view of one lowered method signature.
pub trait MethodMetadata {
    type Argument: ArgumentMetadata;

    /// Arguments of the lowered signature, in declaration order.
    ///
    /// Order is significant: for suspending guest functions the continuation
    /// carrier is always the last argument.
    fn arguments(&self) -> &[Self::Argument];
}

/// A guest method signature, as recorded by guest-compiled metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    declaring_type: TypeKey,
    name: String,
    #[serde(default)]
    arguments: Vec<ArgumentDescriptor>,
    return_type: TypeKey,
}

impl MethodDescriptor {
    /// Starts a descriptor for `name` declared on `declaring_type`.
    ///
    /// The return type defaults to the unit marker until
    /// [`returns`](MethodDescriptorBuilder::returns) is called.
    pub fn builder(declaring_type: TypeKey, name: impl Into<String>) -> MethodDescriptorBuilder {
        MethodDescriptorBuilder {
            declaring_type,
            name: name.into(),
            arguments: Vec::new(),
            return_type: well_known::UNIT,
        }
    }

    /// Guest type this method is declared on.
    pub fn declaring_type(&self) -> &TypeKey {
        &self.declaring_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Arguments of the lowered signature, in declaration order.
    pub fn arguments(&self) -> &[ArgumentDescriptor] {
        &self.arguments
    }

    /// Declared return type, before any coroutine lowering.
    pub fn return_type(&self) -> &TypeKey {
        &self.return_type
    }
}

impl MethodMetadata for MethodDescriptor {
    type Argument = ArgumentDescriptor;

    fn arguments(&self) -> &[ArgumentDescriptor] {
        &self.arguments
    }
}

impl fmt::Display for MethodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}(", self.declaring_type, self.name)?;
        for (index, argument) in self.arguments.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", argument)?;
        }
        write!(f, ") -> {}", self.return_type)
    }
}

/// Builds a [`MethodDescriptor`] one argument at a time.
pub struct MethodDescriptorBuilder {
    declaring_type: TypeKey,
    name: String,
    arguments: Vec<ArgumentDescriptor>,
    return_type: TypeKey,
}

impl MethodDescriptorBuilder {
    /// Appends one argument to the signature.
    pub fn argument(mut self, argument: ArgumentDescriptor) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Sets the declared return type.
    pub fn returns(mut self, return_type: TypeKey) -> Self {
        self.return_type = return_type;
        self
    }

    pub fn build(self) -> MethodDescriptor {
        MethodDescriptor {
            declaring_type: self.declaring_type,
            name: self.name,
            arguments: self.arguments,
            return_type: self.return_type,
        }
    }
}
