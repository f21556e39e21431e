//! Link-time collection of method metadata
//!
//! Host crates describe their invocable guest methods as
//! [`ExecutableMethodEntry`] statics on the [`EXECUTABLE_METHODS`] slice.
//! At startup the host collects every linked entry into a [`MethodRegistry`]
//! and serves lookups from it for the lifetime of the process.

use linkme::distributed_slice;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::descriptor::MethodDescriptor;
use crate::error::ReflectError;
use crate::type_key::TypeKey;

/// Registration slice for method metadata contributed at link time.
#[distributed_slice]
pub static EXECUTABLE_METHODS: [ExecutableMethodEntry];

/// One linked contribution of method metadata.
///
/// The factory runs once, when the registry is built, so descriptor
/// construction does not have to be `const`.
///
/// # Examples
///
/// ```rust,ignore
/// use vireo_reflect::{
///     distributed_slice, well_known, ArgumentDescriptor, ExecutableMethodEntry,
///     MethodDescriptor, TypeKey, EXECUTABLE_METHODS,
/// };
///
/// #[distributed_slice(EXECUTABLE_METHODS)]
/// static FETCH_USER: ExecutableMethodEntry = ExecutableMethodEntry::new(|| {
///     MethodDescriptor::builder(TypeKey::named("app.UserHandler"), "fetch")
///         .argument(ArgumentDescriptor::named("id", well_known::LONG))
///         .returns(well_known::STRING)
///         .build()
/// });
/// ```
pub struct ExecutableMethodEntry {
    factory: fn() -> MethodDescriptor,
}

impl ExecutableMethodEntry {
    /// Creates an entry from a descriptor factory.
    pub const fn new(factory: fn() -> MethodDescriptor) -> Self {
        Self { factory }
    }

    /// Builds this entry's descriptor.
    pub fn descriptor(&self) -> MethodDescriptor {
        (self.factory)()
    }
}

/// In-memory index of method descriptors, keyed by declaring type and
/// method name.
#[derive(Debug, Default)]
pub struct MethodRegistry {
    methods: FxHashMap<TypeKey, FxHashMap<String, MethodDescriptor>>,
}

impl MethodRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects every entry linked onto [`EXECUTABLE_METHODS`].
    pub fn from_linked() -> Result<Self, ReflectError> {
        let mut registry = Self::new();
        for entry in EXECUTABLE_METHODS.iter() {
            registry.register(entry.descriptor())?;
        }
        debug!(methods = registry.len(), "collected linked method metadata");
        Ok(registry)
    }

    /// Adds a descriptor to the registry.
    ///
    /// A declaring type holds at most one method per name; registering the
    /// same pair twice fails with [`ReflectError::DuplicateMethod`].
    pub fn register(&mut self, descriptor: MethodDescriptor) -> Result<(), ReflectError> {
        trace!(method = %descriptor, "registering method metadata");
        let methods = self
            .methods
            .entry(descriptor.declaring_type().clone())
            .or_default();
        if methods.contains_key(descriptor.name()) {
            return Err(ReflectError::DuplicateMethod {
                declaring_type: descriptor.declaring_type().clone(),
                name: descriptor.name().to_string(),
            });
        }
        methods.insert(descriptor.name().to_string(), descriptor);
        Ok(())
    }

    /// Looks up one method by declaring type and name.
    pub fn get(&self, declaring_type: &TypeKey, name: &str) -> Result<&MethodDescriptor, ReflectError> {
        self.methods
            .get(declaring_type)
            .and_then(|methods| methods.get(name))
            .ok_or_else(|| ReflectError::MethodNotFound {
                declaring_type: declaring_type.clone(),
                name: name.to_string(),
            })
    }

    /// Every method registered for a declaring type, in no particular order.
    pub fn methods_of(&self, declaring_type: &TypeKey) -> impl Iterator<Item = &MethodDescriptor> {
        self.methods
            .get(declaring_type)
            .into_iter()
            .flat_map(|methods| methods.values())
    }

    /// Every declaring type with at least one registered method.
    pub fn declaring_types(&self) -> impl Iterator<Item = &TypeKey> {
        self.methods.keys()
    }

    /// Number of registered methods across all declaring types.
    pub fn len(&self) -> usize {
        self.methods.values().map(|methods| methods.len()).sum()
    }

    /// True if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ArgumentDescriptor;
    use crate::type_key::well_known;

    fn fetch_user() -> MethodDescriptor {
        MethodDescriptor::builder(TypeKey::named("app.UserHandler"), "fetch")
            .argument(ArgumentDescriptor::named("id", well_known::LONG))
            .returns(well_known::STRING)
            .build()
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = MethodRegistry::new();
        registry.register(fetch_user()).unwrap();

        let found = registry
            .get(&TypeKey::named("app.UserHandler"), "fetch")
            .unwrap();
        assert_eq!(found.name(), "fetch");
        assert_eq!(found.return_type(), &well_known::STRING);
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_duplicate_registration_is_rejected() {
        let mut registry = MethodRegistry::new();
        registry.register(fetch_user()).unwrap();

        let error = registry.register(fetch_user()).unwrap_err();
        assert_eq!(
            error,
            ReflectError::DuplicateMethod {
                declaring_type: TypeKey::named("app.UserHandler"),
                name: "fetch".to_string(),
            }
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_missing_method_reports_both_coordinates() {
        let registry = MethodRegistry::new();
        let error = registry
            .get(&TypeKey::named("app.UserHandler"), "fetch")
            .unwrap_err();
        assert_eq!(
            error,
            ReflectError::MethodNotFound {
                declaring_type: TypeKey::named("app.UserHandler"),
                name: "fetch".to_string(),
            }
        );
    }

    #[test]
    fn test_same_name_under_different_types_coexists() {
        let mut registry = MethodRegistry::new();
        registry.register(fetch_user()).unwrap();
        registry
            .register(MethodDescriptor::builder(TypeKey::named("app.OrderHandler"), "fetch").build())
            .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.declaring_types().count(), 2);
        assert_eq!(
            registry.methods_of(&TypeKey::named("app.UserHandler")).count(),
            1
        );
    }

    #[test]
    fn test_methods_of_unknown_type_is_empty() {
        let registry = MethodRegistry::new();
        assert_eq!(
            registry.methods_of(&TypeKey::named("app.Missing")).count(),
            0
        );
    }

    #[test]
    fn test_entry_factory_builds_descriptor() {
        let entry = ExecutableMethodEntry::new(fetch_user);
        assert_eq!(entry.descriptor(), fetch_user());
    }
}
