//! Caller-supplied mock values.
//!
//! Each capability check has one override variable. When it is set, the
//! check reports a synthetic result instead of probing the host. This is
//! what makes the checks deterministic in tests and CI.
//!
//! The values are captured once into an [`Overrides`] snapshot and handed
//! to each probe at construction; probes never read the process
//! environment themselves.
//!
//! # Example
//!
//! ```
//! use envcheck::config::Overrides;
//!
//! let overrides = Overrides::from_env_with(|key| match key {
//!     "MOCK_MACOS_VERSION" => Ok("15.1".to_string()),
//!     _ => Err(std::env::VarError::NotPresent),
//! });
//!
//! assert_eq!(overrides.macos_version.as_deref(), Some("15.1"));
//! assert!(overrides.xcode_version.is_none());
//! ```

/// Simulated macOS version, e.g. `15.0`.
pub const MOCK_MACOS_VERSION_VAR: &str = "MOCK_MACOS_VERSION";

/// Simulated Xcode version, e.g. `16.0` or `16`.
pub const MOCK_XCODE_VERSION_VAR: &str = "MOCK_XCODE_VERSION";

/// Simulated Metal toolchain availability, e.g. `true` or `false`.
pub const MOCK_METAL_AVAILABLE_VAR: &str = "MOCK_METAL_AVAILABLE";

/// Snapshot of the raw override values, one per capability.
///
/// Values are kept unparsed. Each probe parses its own value and ignores
/// it if malformed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Raw value of [`MOCK_MACOS_VERSION_VAR`].
    pub macos_version: Option<String>,
    /// Raw value of [`MOCK_XCODE_VERSION_VAR`].
    pub xcode_version: Option<String>,
    /// Raw value of [`MOCK_METAL_AVAILABLE_VAR`].
    pub metal_available: Option<String>,
}

impl Overrides {
    /// No overrides; every check probes the host.
    pub fn none() -> Self {
        Self::default()
    }

    /// Capture overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_env_with(|key: &str| std::env::var(key))
    }

    /// Capture overrides with a custom env var lookup function.
    ///
    /// Empty values are treated as unset.
    pub fn from_env_with<F>(env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        let lookup = |key: &str| env_fn(key).ok().filter(|value| !value.is_empty());

        let overrides = Self {
            macos_version: lookup(MOCK_MACOS_VERSION_VAR),
            xcode_version: lookup(MOCK_XCODE_VERSION_VAR),
            metal_available: lookup(MOCK_METAL_AVAILABLE_VAR),
        };
        if overrides.is_any_set() {
            tracing::debug!("Mock overrides in effect: {:?}", overrides);
        }
        overrides
    }

    /// Whether at least one override is set.
    pub fn is_any_set(&self) -> bool {
        self.macos_version.is_some() || self.xcode_version.is_some() || self.metal_available.is_some()
    }
}
