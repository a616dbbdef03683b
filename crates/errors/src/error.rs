//! The normalized error value and its translation setters

use std::fmt;

use crate::code::Code;
use crate::extcode::ExtCode;
use crate::infos::Infos;
use crate::level::Level;

/// Infos key recording the subsystem a code originated from.
pub const INFO_KEY_SOURCE: &str = "Source";
/// Infos key recording the raw primary return code.
pub const INFO_KEY_RC: &str = "RC";
/// Infos key recording the resolved extended return code.
pub const INFO_KEY_EXT_CODE: &str = "ExtCode";
/// Infos key recording a raw OS error number.
pub const INFO_KEY_ERRNO: &str = "Errno";

/// One error event: severity, normalized category, free-text message, and a
/// typed metadata bag.
///
/// Plain value semantics: copying duplicates everything, no identity beyond
/// content. Instances are typically reused as scratch state across calls;
/// [`Error::clear`] restores the default `OK` state including the metadata.
///
/// `code` is mutated only through the setters so that every code transition
/// also updates `level` and records provenance.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Error {
    pub level: Level,
    code: Code,
    pub message: String,
    pub infos: Infos,
}

/// Default severity for a freshly assigned code.
fn level_for(code: Code) -> Level {
    match code {
        Code::OK | Code::Row | Code::Done => Level::Ignore,
        Code::Notice => Level::Notice,
        Code::Warning => Level::Warning,
        _ => Level::Error,
    }
}

/// Best-effort analogue for an OS error, keyed off the kind the standard
/// library assigns to the raw number. Unlisted kinds resolve to `None` and
/// the caller's fallback applies.
fn code_for_io_kind(kind: std::io::ErrorKind) -> Option<Code> {
    use std::io::ErrorKind;

    match kind {
        ErrorKind::PermissionDenied => Some(Code::Permission),
        ErrorKind::NotFound => Some(Code::NotFound),
        ErrorKind::Interrupted => Some(Code::Interrupt),
        ErrorKind::OutOfMemory => Some(Code::NoMemory),
        ErrorKind::StorageFull => Some(Code::Full),
        ErrorKind::ReadOnlyFilesystem => Some(Code::Readonly),
        ErrorKind::IsADirectory | ErrorKind::NotADirectory => Some(Code::CantOpen),
        ErrorKind::ResourceBusy
        | ErrorKind::ExecutableFileBusy
        | ErrorKind::WouldBlock
        | ErrorKind::TimedOut => Some(Code::Busy),
        ErrorKind::Deadlock => Some(Code::Locked),
        ErrorKind::FileTooLarge => Some(Code::Exceed),
        ErrorKind::InvalidInput => Some(Code::Misuse),
        ErrorKind::BrokenPipe
        | ErrorKind::UnexpectedEof
        | ErrorKind::WriteZero
        | ErrorKind::NotSeekable
        | ErrorKind::StaleNetworkFileHandle => Some(Code::IOError),
        _ => None,
    }
}

impl Error {
    /// The default error value: `OK`, severity `Ignore`, no message, no
    /// metadata.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an already-normalized code; severity derives from the
    /// code's class.
    #[must_use]
    pub fn with_code(code: Code) -> Self {
        Self {
            level: level_for(code),
            code,
            message: String::new(),
            infos: Infos::new(),
        }
    }

    /// Build from a normalized code with a human-readable explanation.
    #[must_use]
    pub fn with_message(code: Code, message: impl Into<String>) -> Self {
        let mut error = Self::with_code(code);
        error.message = message.into();
        error
    }

    /// The normalized category of this event.
    #[must_use]
    pub const fn code(&self) -> Code {
        self.code
    }

    /// True iff the code is `OK`.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.code == Code::OK
    }

    /// Classify a raw return code as failure vs. benign/control status,
    /// without an `Error` instance.
    #[must_use]
    pub fn is_error(rc: i32) -> bool {
        Code::is_error_rc(rc)
    }

    /// True iff on-disk data is unreadable or invalid (`Corrupt` or
    /// `NotADatabase`).
    ///
    /// Unlike transient or access-control failures, corruption typically
    /// triggers irreversible recovery in callers, so it gets a dedicated
    /// predicate.
    #[must_use]
    pub fn is_corruption(&self) -> bool {
        matches!(self.code, Code::Corrupt | Code::NotADatabase)
    }

    /// Assign an already-normalized code, deriving the default severity for
    /// its class.
    pub fn set_code(&mut self, code: Code) {
        self.code = code;
        self.level = level_for(code);
    }

    /// Assign a normalized code and record which subsystem raised it under
    /// the [`INFO_KEY_SOURCE`] string field.
    pub fn set_code_from(&mut self, code: Code, source: impl Into<String>) {
        self.set_code(code);
        self.infos.set_string(INFO_KEY_SOURCE, source);
    }

    /// Translate raw engine return codes into the normalized form.
    ///
    /// The base category comes from the low byte of `primary`. When
    /// `extended` matches a defined [`ExtCode`], the refinement is recorded
    /// under [`INFO_KEY_EXT_CODE`]; an unrecognized sub-code loses only the
    /// refinement, never the base category. The raw primary value is kept
    /// under [`INFO_KEY_RC`].
    pub fn set_sqlite_code(&mut self, primary: i32, extended: i32) {
        let code = Code::from_rc(primary);
        self.code = code;
        self.level = if code.is_success() {
            Level::Ignore
        } else {
            Level::Error
        };
        self.infos.set_int(INFO_KEY_RC, primary);
        if let Ok(ext) = ExtCode::try_from(extended) {
            self.infos.set_int(INFO_KEY_EXT_CODE, ext.as_rc());
        }
    }

    /// Translate an OS error number on a best-effort basis, falling back to
    /// `code_if_unresolved` when no analogue is defined. The raw number is
    /// kept under [`INFO_KEY_ERRNO`].
    pub fn set_system_code(&mut self, system_code: i32, code_if_unresolved: Code) {
        let kind = std::io::Error::from_raw_os_error(system_code).kind();
        self.code = code_for_io_kind(kind).unwrap_or(code_if_unresolved);
        self.level = Level::Error;
        self.infos.set_int(INFO_KEY_ERRNO, system_code);
    }

    /// Reset to the default-constructed state, metadata included. No stale
    /// fields survive reuse across unrelated operations.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// One descriptive string combining level, code, message, and every
    /// metadata field, for the logging sink. Same as the `Display` output.
    #[must_use]
    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Error {
    /// Deterministic rendering: `[LEVEL: Code] message` followed by every
    /// infos field, each category in key order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}: {}]", self.level, self.code)?;
        if !self.message.is_empty() {
            write!(f, " {}", self.message)?;
        }
        for (key, value) in self.infos.integers() {
            write!(f, ", {key}: {value}")?;
        }
        for (key, value) in self.infos.floats() {
            write!(f, ", {key}: {value}")?;
        }
        for (key, value) in self.infos.strings() {
            write!(f, ", {key}: {value}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let mut error = Self::new();
        match err.raw_os_error() {
            Some(errno) => error.set_system_code(errno, Code::IOError),
            None => error.set_code(Code::IOError),
        }
        error.message = err.to_string();
        error
    }
}
