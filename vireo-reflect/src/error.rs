use crate::type_key::TypeKey;

/// Reflection errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReflectError {
    #[error("method '{name}' is already registered for '{declaring_type}'")]
    DuplicateMethod {
        declaring_type: TypeKey,
        name: String,
    },

    #[error("no method '{name}' registered for '{declaring_type}'")]
    MethodNotFound {
        declaring_type: TypeKey,
        name: String,
    },

    #[error("unrecognized value '{value}' for {variable}")]
    UnrecognizedOverride {
        variable: &'static str,
        value: String,
    },
}
