//! Top-level dashboard tabs.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Tab key for the main screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Dashboard,
    Family,
    Medications,
    Appointments,
}

pub const SCREEN_DASHBOARD: &str = "dashboard";
pub const SCREEN_FAMILY: &str = "family";
pub const SCREEN_MEDICATIONS: &str = "medications";
pub const SCREEN_APPOINTMENTS: &str = "appointments";

impl Screen {
    pub const ALL: [Screen; 4] = [
        Self::Dashboard,
        Self::Family,
        Self::Medications,
        Self::Appointments,
    ];

    /// Stable key shared with the UI router.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => SCREEN_DASHBOARD,
            Self::Family => SCREEN_FAMILY,
            Self::Medications => SCREEN_MEDICATIONS,
            Self::Appointments => SCREEN_APPOINTMENTS,
        }
    }

    /// Tab caption.
    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Family => "Family",
            Self::Medications => "Medications",
            Self::Appointments => "Appointments",
        }
    }

    /// Parses a tab key.
    pub fn parse(value: &str) -> Result<Self, ScreenError> {
        let normalized = value.trim();
        if normalized.is_empty() {
            return Err(ScreenError::EmptyKey);
        }
        match normalized.to_ascii_lowercase().as_str() {
            SCREEN_DASHBOARD => Ok(Self::Dashboard),
            SCREEN_FAMILY => Ok(Self::Family),
            SCREEN_MEDICATIONS => Ok(Self::Medications),
            SCREEN_APPOINTMENTS => Ok(Self::Appointments),
            _ => Err(ScreenError::UnknownScreen(normalized.to_string())),
        }
    }
}

/// Tab key parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenError {
    EmptyKey,
    UnknownScreen(String),
}

impl Display for ScreenError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyKey => write!(f, "screen key cannot be empty"),
            Self::UnknownScreen(value) => write!(
                f,
                "unknown screen `{value}`; expected dashboard|family|medications|appointments"
            ),
        }
    }
}

impl Error for ScreenError {}

#[cfg(test)]
mod tests {
    use super::{Screen, ScreenError};

    #[test]
    fn parse_accepts_known_keys_case_insensitively() {
        for screen in Screen::ALL {
            assert_eq!(Screen::parse(screen.as_str()), Ok(screen));
        }
        assert_eq!(Screen::parse(" Family "), Ok(Screen::Family));
    }

    #[test]
    fn parse_rejects_unknown_and_empty_keys() {
        assert_eq!(
            Screen::parse("pricing"),
            Err(ScreenError::UnknownScreen("pricing".to_string()))
        );
        assert_eq!(Screen::parse("  "), Err(ScreenError::EmptyKey));
        assert!(Screen::parse("pricing")
            .unwrap_err()
            .to_string()
            .contains("expected dashboard"));
    }
}
