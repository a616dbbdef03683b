//! Normalized base error categories and raw return-code translation

use std::fmt;

use thiserror::Error;

/// Rejection produced when an integer is not a defined [`Code`]
/// discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("unrecognized return code {0}")]
pub struct UnknownCode(pub i32);

/// Normalized base error category.
///
/// The discriminants match the engine's numeric return codes and are part of
/// the external contract. `Row` and `Done` are control statuses, not errors;
/// see [`Code::is_success`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum Code {
    #[default]
    OK = 0,
    Error = 1,
    Internal = 2,
    Permission = 3,
    Abort = 4,
    Busy = 5,
    Locked = 6,
    NoMemory = 7,
    Readonly = 8,
    Interrupt = 9,
    IOError = 10,
    Corrupt = 11,
    NotFound = 12,
    Full = 13,
    CantOpen = 14,
    Protocol = 15,
    Empty = 16,
    Schema = 17,
    Exceed = 18,
    Constraint = 19,
    Mismatch = 20,
    Misuse = 21,
    NoLargeFileSupport = 22,
    Authorization = 23,
    Format = 24,
    Range = 25,
    NotADatabase = 26,
    Notice = 27,
    Warning = 28,
    Row = 100,
    Done = 101,
}

impl Code {
    /// Fixed display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::OK => "OK",
            Self::Error => "Error",
            Self::Internal => "Internal",
            Self::Permission => "Permission",
            Self::Abort => "Abort",
            Self::Busy => "Busy",
            Self::Locked => "Locked",
            Self::NoMemory => "NoMemory",
            Self::Readonly => "Readonly",
            Self::Interrupt => "Interrupt",
            Self::IOError => "IOError",
            Self::Corrupt => "Corrupt",
            Self::NotFound => "NotFound",
            Self::Full => "Full",
            Self::CantOpen => "CantOpen",
            Self::Protocol => "Protocol",
            Self::Empty => "Empty",
            Self::Schema => "Schema",
            Self::Exceed => "Exceed",
            Self::Constraint => "Constraint",
            Self::Mismatch => "Mismatch",
            Self::Misuse => "Misuse",
            Self::NoLargeFileSupport => "NoLargeFileSupport",
            Self::Authorization => "Authorization",
            Self::Format => "Format",
            Self::Range => "Range",
            Self::NotADatabase => "NotADatabase",
            Self::Notice => "Notice",
            Self::Warning => "Warning",
            Self::Row => "Row",
            Self::Done => "Done",
        }
    }

    /// Resolve a raw return code to its base category.
    ///
    /// Raw codes may be extended-form integers carrying sub-cause bits in
    /// their upper bytes; the base category always lives in the low byte.
    /// An unrecognized low byte degrades to [`Code::Error`] rather than
    /// producing an undefined value.
    #[must_use]
    pub fn from_rc(rc: i32) -> Self {
        Self::try_from(rc & 0xFF).unwrap_or(Self::Error)
    }

    /// The raw integer form of this code.
    #[must_use]
    pub const fn as_rc(self) -> i32 {
        self as i32
    }

    /// Classify a raw return code as failure vs. benign/control status.
    ///
    /// False exactly when the base category of `rc` is `OK`, `Row`, or
    /// `Done`.
    #[must_use]
    pub fn is_error_rc(rc: i32) -> bool {
        !Self::from_rc(rc).is_success()
    }

    /// True for the three non-error codes: `OK`, `Row`, `Done`.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::OK | Self::Row | Self::Done)
    }
}

impl TryFrom<i32> for Code {
    type Error = UnknownCode;

    fn try_from(value: i32) -> Result<Self, UnknownCode> {
        match value {
            0 => Ok(Self::OK),
            1 => Ok(Self::Error),
            2 => Ok(Self::Internal),
            3 => Ok(Self::Permission),
            4 => Ok(Self::Abort),
            5 => Ok(Self::Busy),
            6 => Ok(Self::Locked),
            7 => Ok(Self::NoMemory),
            8 => Ok(Self::Readonly),
            9 => Ok(Self::Interrupt),
            10 => Ok(Self::IOError),
            11 => Ok(Self::Corrupt),
            12 => Ok(Self::NotFound),
            13 => Ok(Self::Full),
            14 => Ok(Self::CantOpen),
            15 => Ok(Self::Protocol),
            16 => Ok(Self::Empty),
            17 => Ok(Self::Schema),
            18 => Ok(Self::Exceed),
            19 => Ok(Self::Constraint),
            20 => Ok(Self::Mismatch),
            21 => Ok(Self::Misuse),
            22 => Ok(Self::NoLargeFileSupport),
            23 => Ok(Self::Authorization),
            24 => Ok(Self::Format),
            25 => Ok(Self::Range),
            26 => Ok(Self::NotADatabase),
            27 => Ok(Self::Notice),
            28 => Ok(Self::Warning),
            100 => Ok(Self::Row),
            101 => Ok(Self::Done),
            other => Err(UnknownCode(other)),
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
