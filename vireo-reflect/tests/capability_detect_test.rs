//! `detect()` caches its first probe for the lifetime of the process. This
//! lives in its own binary so nothing else can populate the cache first.

use vireo_reflect::{RuntimeCapabilities, SuspendClassifier, COROUTINES_OVERRIDE_VAR};

#[test]
fn test_detect_is_stable_after_first_read() {
    std::env::set_var(COROUTINES_OVERRIDE_VAR, "1");
    assert!(RuntimeCapabilities::detect().supports_coroutines());

    // Later environment changes no longer matter.
    std::env::set_var(COROUTINES_OVERRIDE_VAR, "0");
    assert!(RuntimeCapabilities::detect().supports_coroutines());
    assert!(SuspendClassifier::from_runtime()
        .capabilities()
        .supports_coroutines());

    std::env::remove_var(COROUTINES_OVERRIDE_VAR);
}
