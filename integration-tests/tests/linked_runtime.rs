//! Registers a guest runtime the way a real runtime crate does and verifies
//! that the probe, the cached detection, and the classifier all see it.

use linkme::distributed_slice;
use serial_test::serial;
use vireo_reflect::{
    well_known, ArgumentDescriptor, GuestRuntime, MethodDescriptor, RuntimeCapabilities,
    SuspendClassifier, TypeKey, COROUTINES_OVERRIDE_VAR, GUEST_RUNTIMES,
};

#[distributed_slice(GUEST_RUNTIMES)]
static TEST_RUNTIME: GuestRuntime = GuestRuntime::new("vireo-test-runtime", true);

#[test]
#[serial]
fn test_linked_runtime_enables_coroutine_support() {
    std::env::remove_var(COROUTINES_OVERRIDE_VAR);
    assert!(GUEST_RUNTIMES
        .iter()
        .any(|runtime| runtime.name() == "vireo-test-runtime"));
    assert!(RuntimeCapabilities::probe().supports_coroutines());
}

#[test]
#[serial]
fn test_override_forces_support_off_despite_linked_runtime() {
    std::env::set_var(COROUTINES_OVERRIDE_VAR, "off");
    assert!(!RuntimeCapabilities::probe().supports_coroutines());
    std::env::remove_var(COROUTINES_OVERRIDE_VAR);
}

#[test]
#[serial]
fn test_classifier_from_runtime_sees_the_linked_runtime() {
    std::env::remove_var(COROUTINES_OVERRIDE_VAR);
    let classifier = SuspendClassifier::from_runtime();
    let method = MethodDescriptor::builder(TypeKey::named("app.JobHandler"), "run")
        .argument(ArgumentDescriptor::of(well_known::CONTINUATION).with_type_arguments(vec![
            ArgumentDescriptor::of(well_known::UNIT),
        ]))
        .build();
    assert!(classifier.is_suspending_signature(&method));
    assert!(classifier.is_suspending_signature_returning_unit(&method));
}
