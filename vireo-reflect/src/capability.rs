//! Guest runtime capability detection
//!
//! The classifier must stay callable in environments where no guest runtime
//! is linked into the binary at all. Instead of probing for loadable classes
//! the way a JVM host would, capability detection reads the
//! [`GUEST_RUNTIMES`] distributed slice that guest-runtime crates populate at
//! link time, with an environment-variable override for operators.

use std::env;
use std::sync::OnceLock;

use linkme::distributed_slice;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ReflectError;

/// Environment variable forcing the coroutine-capability outcome.
///
/// Accepted values: `1`/`true`/`on`/`enabled` and `0`/`false`/`off`/`disabled`
/// (case-insensitive). Anything else is logged and ignored.
pub const COROUTINES_OVERRIDE_VAR: &str = "VIREO_GUEST_COROUTINES";

/// Registration record for a guest runtime linked into this binary.
///
/// Runtime crates contribute one entry per runtime:
///
/// ```rust,ignore
/// use linkme::distributed_slice;
/// use vireo_reflect::{GuestRuntime, GUEST_RUNTIMES};
///
/// #[distributed_slice(GUEST_RUNTIMES)]
/// static RUNTIME: GuestRuntime = GuestRuntime::new("vireo-script", true);
/// ```
#[derive(Debug)]
pub struct GuestRuntime {
    name: &'static str,
    supports_coroutines: bool,
}

impl GuestRuntime {
    /// This is a const function, so records can be defined as statics.
    pub const fn new(name: &'static str, supports_coroutines: bool) -> Self {
        Self {
            name,
            supports_coroutines,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn supports_coroutines(&self) -> bool {
        self.supports_coroutines
    }
}

/// Guest runtimes linked into this binary.
#[distributed_slice]
pub static GUEST_RUNTIMES: [GuestRuntime];

/// Immutable view of the guest capabilities available to the invocation
/// pipeline.
///
/// A value is either constructed explicitly (tests, host configuration) or
/// obtained from the runtime probe. Once constructed it never changes, so it
/// can be shared freely across threads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeCapabilities {
    coroutines: bool,
}

impl RuntimeCapabilities {
    /// Capabilities with coroutine support set explicitly.
    pub const fn with_coroutines(coroutines: bool) -> Self {
        Self { coroutines }
    }

    /// Capabilities of a host with a coroutine-capable guest runtime.
    pub const fn enabled() -> Self {
        Self::with_coroutines(true)
    }

    /// Capabilities of a host without any guest runtime.
    pub const fn disabled() -> Self {
        Self::with_coroutines(false)
    }

    /// True if the guest coroutine runtime is available.
    pub fn supports_coroutines(&self) -> bool {
        self.coroutines
    }

    /// Probes the current environment, uncached.
    ///
    /// Coroutine support is present iff any registered runtime declares it,
    /// unless [`COROUTINES_OVERRIDE_VAR`] forces the outcome. An empty
    /// [`GUEST_RUNTIMES`] slice degrades to disabled; it is never an error.
    pub fn probe() -> Self {
        if let Some(forced) = override_from_env() {
            return Self::with_coroutines(forced);
        }
        let coroutines = GUEST_RUNTIMES.iter().any(GuestRuntime::supports_coroutines);
        debug!(
            coroutines,
            runtimes = GUEST_RUNTIMES.len(),
            "guest runtime probe"
        );
        Self::with_coroutines(coroutines)
    }

    /// Probes once per process and returns the cached value thereafter.
    pub fn detect() -> Self {
        static DETECTED: OnceLock<RuntimeCapabilities> = OnceLock::new();
        *DETECTED.get_or_init(Self::probe)
    }

    /// Parses an override value as accepted by [`COROUTINES_OVERRIDE_VAR`].
    pub fn parse_override(value: &str) -> Result<bool, ReflectError> {
        match value.to_lowercase().as_str() {
            "1" | "true" | "on" | "enabled" => Ok(true),
            "0" | "false" | "off" | "disabled" => Ok(false),
            _ => Err(ReflectError::UnrecognizedOverride {
                variable: COROUTINES_OVERRIDE_VAR,
                value: value.to_string(),
            }),
        }
    }
}

fn override_from_env() -> Option<bool> {
    let value = match env::var(COROUTINES_OVERRIDE_VAR) {
        Ok(value) => value,
        Err(env::VarError::NotPresent) => return None,
        Err(env::VarError::NotUnicode(value)) => {
            warn!(
                variable = COROUTINES_OVERRIDE_VAR,
                ?value,
                "ignoring non-unicode coroutine override"
            );
            return None;
        }
    };
    match RuntimeCapabilities::parse_override(&value) {
        Ok(forced) => {
            debug!(forced, variable = COROUTINES_OVERRIDE_VAR, "coroutine support forced");
            Some(forced)
        }
        Err(error) => {
            warn!(%error, "ignoring coroutine override");
            None
        }
    }
}
