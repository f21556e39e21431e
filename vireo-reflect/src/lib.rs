//! # vireo-reflect
//!
//! Method metadata and suspend-function reflection for the Vireo framework.
//!
//! ## Features
//!
//! - **Language-neutral method descriptors** decoupled from any concrete
//!   reflection backend
//! - **Suspend-signature classification** for guest functions lowered to a
//!   trailing continuation argument
//! - **Runtime capability probing** with an environment override for staged
//!   rollouts
//! - **Link-time metadata collection** using `linkme` distributed slices
//!
//! ## Basic Usage
//!
//! ```rust
//! use vireo_reflect::{
//!     well_known, ArgumentDescriptor, MethodDescriptor, RuntimeCapabilities,
//!     SuspendClassifier, TypeKey,
//! };
//!
//! let fetch = MethodDescriptor::builder(TypeKey::named("app.UserHandler"), "fetch")
//!     .argument(ArgumentDescriptor::named("id", well_known::LONG))
//!     .argument(ArgumentDescriptor::of(well_known::CONTINUATION).with_type_arguments(vec![
//!         ArgumentDescriptor::of(well_known::STRING),
//!     ]))
//!     .returns(well_known::STRING)
//!     .build();
//!
//! let classifier = SuspendClassifier::new(RuntimeCapabilities::enabled());
//! assert!(classifier.is_suspending_signature(&fetch));
//! assert!(!classifier.is_suspending_signature_returning_unit(&fetch));
//! ```
//!
//! ## Link-Time Registration
//!
//! Hosts contribute metadata as statics on the registration slices and
//! collect everything once at startup:
//!
//! ```rust,ignore
//! use vireo_reflect::{
//!     distributed_slice, ExecutableMethodEntry, MethodDescriptor, MethodRegistry,
//!     SuspendClassifier, TypeKey, EXECUTABLE_METHODS,
//! };
//!
//! #[distributed_slice(EXECUTABLE_METHODS)]
//! static PING: ExecutableMethodEntry = ExecutableMethodEntry::new(|| {
//!     MethodDescriptor::builder(TypeKey::named("app.Health"), "ping").build()
//! });
//!
//! let registry = MethodRegistry::from_linked()?;
//! let classifier = SuspendClassifier::from_runtime();
//! let ping = registry.get(&TypeKey::named("app.Health"), "ping")?;
//! assert!(!classifier.is_suspending_signature(ping));
//! ```

pub mod capability;
pub mod descriptor;
pub mod registry;
pub mod suspend;
pub mod type_key;

mod error;
pub use error::ReflectError;

pub use capability::{GuestRuntime, RuntimeCapabilities, COROUTINES_OVERRIDE_VAR, GUEST_RUNTIMES};
pub use descriptor::{
    ArgumentDescriptor, ArgumentMetadata, MethodDescriptor, MethodDescriptorBuilder, MethodMetadata,
};
pub use registry::{ExecutableMethodEntry, MethodRegistry, EXECUTABLE_METHODS};
pub use suspend::SuspendClassifier;
pub use type_key::{well_known, TypeKey};

// Re-export the registration attribute so hosts don't need a direct
// linkme dependency for the common case
pub use linkme::distributed_slice;
