//! Severity classification for error events

use std::fmt;

/// How serious an error event is, independent of its category.
///
/// Ordering follows declaration order, from `Ignore` (lowest) to `Fatal`
/// (highest). The discriminants are part of the external contract and must
/// not be reordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum Level {
    #[default]
    Ignore = 1,
    Debug = 2,
    Warning = 3,
    Notice = 4,
    Error = 5,
    Fatal = 6,
}

impl Level {
    /// Fixed uppercase display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ignore => "IGNORE",
            Self::Debug => "DEBUG",
            Self::Warning => "WARNING",
            Self::Notice => "NOTICE",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_ordered_by_severity() {
        assert!(Level::Ignore < Level::Debug);
        assert!(Level::Debug < Level::Warning);
        assert!(Level::Warning < Level::Notice);
        assert!(Level::Notice < Level::Error);
        assert!(Level::Error < Level::Fatal);
    }

    #[test]
    fn test_level_names_are_uppercase() {
        assert_eq!(Level::Ignore.to_string(), "IGNORE");
        assert_eq!(Level::Warning.to_string(), "WARNING");
        assert_eq!(Level::Fatal.to_string(), "FATAL");
    }

    #[test]
    fn test_default_level_is_ignore() {
        assert_eq!(Level::default(), Level::Ignore);
    }
}
