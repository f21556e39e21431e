//! Suspend-function signature classification
//!
//! The guest compiler lowers every suspending function by appending one
//! trailing argument, a `vireo.coroutines.Continuation` whose single type
//! argument is the function's logical return type. The invocation pipeline
//! uses the checks in this module to decide whether a handler has to be
//! driven through the coroutine bridge and whether its eventual result can
//! be discarded.

use crate::capability::RuntimeCapabilities;
use crate::descriptor::{ArgumentMetadata, MethodMetadata};
use crate::type_key::well_known;

/// Classifies lowered guest signatures by their suspension shape.
///
/// Both checks are pure reads of the signature and of the immutable
/// capability value captured at construction; the classifier can be shared
/// and called from any number of threads.
///
/// # Examples
///
/// ```rust
/// use vireo_reflect::{
///     well_known, ArgumentDescriptor, MethodDescriptor, RuntimeCapabilities,
///     SuspendClassifier, TypeKey,
/// };
///
/// let fetch = MethodDescriptor::builder(TypeKey::named("app.UserHandler"), "fetch")
///     .argument(ArgumentDescriptor::named("id", well_known::LONG))
///     .argument(ArgumentDescriptor::of(well_known::CONTINUATION).with_type_arguments(vec![
///         ArgumentDescriptor::of(well_known::UNIT),
///     ]))
///     .build();
///
/// let classifier = SuspendClassifier::new(RuntimeCapabilities::enabled());
/// assert!(classifier.is_suspending_signature(&fetch));
/// assert!(classifier.is_suspending_signature_returning_unit(&fetch));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SuspendClassifier {
    capabilities: RuntimeCapabilities,
}

impl SuspendClassifier {
    /// Creates a classifier over an explicit capability value.
    pub const fn new(capabilities: RuntimeCapabilities) -> Self {
        Self { capabilities }
    }

    /// Creates a classifier from the process-wide runtime probe.
    pub fn from_runtime() -> Self {
        Self::new(RuntimeCapabilities::detect())
    }

    /// Capability value this classifier was constructed with.
    pub fn capabilities(&self) -> RuntimeCapabilities {
        self.capabilities
    }

    /// True if the method was declared as a suspending guest function.
    ///
    /// A suspending function's lowered signature carries the continuation
    /// marker as its last argument; every other argument is ignored. A
    /// signature with no arguments is never suspending. When guest coroutine
    /// support is absent this returns `false` without inspecting the
    /// signature at all.
    pub fn is_suspending_signature<M: MethodMetadata>(&self, method: &M) -> bool {
        if !self.capabilities.supports_coroutines() {
            return false;
        }
        match method.arguments().last() {
            Some(argument) => argument.type_key() == &well_known::CONTINUATION,
            None => false,
        }
    }

    /// True if a suspending function's declared return type is the unit
    /// marker.
    ///
    /// Inspects the type arguments of the last argument only: the check holds
    /// when there is exactly one and it is the unit marker. It does not
    /// re-verify that the last argument is the continuation carrier; callers
    /// are expected to have established [`is_suspending_signature`] first.
    ///
    /// [`is_suspending_signature`]: Self::is_suspending_signature
    pub fn is_suspending_signature_returning_unit<M: MethodMetadata>(&self, method: &M) -> bool {
        if !self.capabilities.supports_coroutines() {
            return false;
        }
        match method.arguments().last() {
            Some(argument) => match argument.type_arguments() {
                [return_type] => return_type.type_key() == &well_known::UNIT,
                _ => false,
            },
            None => false,
        }
    }
}
