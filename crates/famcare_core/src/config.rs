//! Session configuration.
//!
//! # Responsibility
//! - Decide how a new session is populated.
//!
//! # Invariants
//! - Missing or unrecognized environment values fall back to defaults.

/// Environment variable that disables sample data when set to a false-ish value.
pub const SAMPLE_DATA_ENV: &str = "FAMCARE_SAMPLE_DATA";

/// Options for opening a `CareHome`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Seed every store with the built-in sample records.
    pub seed_sample_data: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            seed_sample_data: true,
        }
    }
}

impl SessionOptions {
    /// Reads options from the process environment.
    pub fn from_env() -> Self {
        Self::from_sample_data_value(std::env::var(SAMPLE_DATA_ENV).ok().as_deref())
    }

    /// Resolves options from a raw `FAMCARE_SAMPLE_DATA` value.
    pub fn from_sample_data_value(raw: Option<&str>) -> Self {
        let seed_sample_data = match raw.map(|value| value.trim().to_ascii_lowercase()) {
            Some(value) => !matches!(value.as_str(), "0" | "false" | "no" | "off"),
            None => true,
        };
        Self { seed_sample_data }
    }

    /// Returns a copy with an explicit seeding override applied.
    pub fn with_seed_override(self, seed_sample_data: Option<bool>) -> Self {
        match seed_sample_data {
            Some(seed_sample_data) => Self { seed_sample_data },
            None => self,
        }
    }
}
