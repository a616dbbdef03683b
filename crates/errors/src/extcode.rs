//! Extended return codes refining the base categories
//!
//! Every extended code packs its base [`Code`] into the low byte and a
//! sub-cause ordinal into the bits above it, so the base category is always
//! recoverable by masking.

use thiserror::Error;

use crate::code::Code;

/// Rejection produced when an integer does not match any defined
/// [`ExtCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("unrecognized extended return code {0}")]
pub struct UnknownExtCode(pub i32);

/// A specific root cause under a base error category.
///
/// Invariant: for every value `e`, `e.as_rc() & 0xFF == e.base().as_rc()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum ExtCode {
    ErrorMissingCollseq = (Code::Error as i32) | (1 << 8),
    ErrorRetry = (Code::Error as i32) | (2 << 8),
    ErrorSnapshot = (Code::Error as i32) | (3 << 8),
    IOErrorRead = (Code::IOError as i32) | (1 << 8),
    IOErrorShortRead = (Code::IOError as i32) | (2 << 8),
    IOErrorWrite = (Code::IOError as i32) | (3 << 8),
    IOErrorFsync = (Code::IOError as i32) | (4 << 8),
    IOErrorDirFsync = (Code::IOError as i32) | (5 << 8),
    IOErrorTruncate = (Code::IOError as i32) | (6 << 8),
    IOErrorFstat = (Code::IOError as i32) | (7 << 8),
    IOErrorUnlock = (Code::IOError as i32) | (8 << 8),
    IOErrorRdlock = (Code::IOError as i32) | (9 << 8),
    IOErrorDelete = (Code::IOError as i32) | (10 << 8),
    IOErrorBlocked = (Code::IOError as i32) | (11 << 8),
    IOErrorNoMemory = (Code::IOError as i32) | (12 << 8),
    IOErrorAccess = (Code::IOError as i32) | (13 << 8),
    IOErrorCheckReservedLock = (Code::IOError as i32) | (14 << 8),
    IOErrorLock = (Code::IOError as i32) | (15 << 8),
    IOErrorClose = (Code::IOError as i32) | (16 << 8),
    IOErrorDirClose = (Code::IOError as i32) | (17 << 8),
    IOErrorShmOpen = (Code::IOError as i32) | (18 << 8),
    IOErrorShmSize = (Code::IOError as i32) | (19 << 8),
    IOErrorShmLock = (Code::IOError as i32) | (20 << 8),
    IOErrorShmMap = (Code::IOError as i32) | (21 << 8),
    IOErrorSeek = (Code::IOError as i32) | (22 << 8),
    IOErrorDeleteNoEntry = (Code::IOError as i32) | (23 << 8),
    IOErrorMmap = (Code::IOError as i32) | (24 << 8),
    IOErrorGetTempPath = (Code::IOError as i32) | (25 << 8),
    IOErrorConvPath = (Code::IOError as i32) | (26 << 8),
    IOErrorVnode = (Code::IOError as i32) | (27 << 8),
    IOErrorAuthorization = (Code::IOError as i32) | (28 << 8),
    IOErrorBeginAtomic = (Code::IOError as i32) | (29 << 8),
    IOErrorCommitAtomic = (Code::IOError as i32) | (30 << 8),
    IOErrorRollbackAtomic = (Code::IOError as i32) | (31 << 8),
    LockedSharedCache = (Code::Locked as i32) | (1 << 8),
    LockedVirtualTable = (Code::Locked as i32) | (2 << 8),
    BusyRecovery = (Code::Busy as i32) | (1 << 8),
    BusySnapshot = (Code::Busy as i32) | (2 << 8),
    CantOpenNoTempDir = (Code::CantOpen as i32) | (1 << 8),
    CantOpenIsDir = (Code::CantOpen as i32) | (2 << 8),
    CantOpenFullPath = (Code::CantOpen as i32) | (3 << 8),
    CantOpenConvPath = (Code::CantOpen as i32) | (4 << 8),
    CantOpenDirtyWal = (Code::CantOpen as i32) | (5 << 8),
    CorruptVirtualTable = (Code::Corrupt as i32) | (1 << 8),
    CorruptSequence = (Code::Corrupt as i32) | (2 << 8),
    ReadonlyRecovery = (Code::Readonly as i32) | (1 << 8),
    ReadonlyCantLock = (Code::Readonly as i32) | (2 << 8),
    ReadonlyRollback = (Code::Readonly as i32) | (3 << 8),
    ReadonlyDatabaseMoved = (Code::Readonly as i32) | (4 << 8),
    ReadonlyCantInit = (Code::Readonly as i32) | (5 << 8),
    ReadonlyDirectory = (Code::Readonly as i32) | (6 << 8),
    AbortRollback = (Code::Abort as i32) | (2 << 8),
    ConstraintCheck = (Code::Constraint as i32) | (1 << 8),
    ConstraintCommitHook = (Code::Constraint as i32) | (2 << 8),
    ConstraintForeignKey = (Code::Constraint as i32) | (3 << 8),
    ConstraintFunction = (Code::Constraint as i32) | (4 << 8),
    ConstraintNotNull = (Code::Constraint as i32) | (5 << 8),
    ConstraintPrimaryKey = (Code::Constraint as i32) | (6 << 8),
    ConstraintTrigger = (Code::Constraint as i32) | (7 << 8),
    ConstraintUnique = (Code::Constraint as i32) | (8 << 8),
    ConstraintVirtualTable = (Code::Constraint as i32) | (9 << 8),
    ConstraintRowID = (Code::Constraint as i32) | (10 << 8),
    NoticeRecoverWal = (Code::Notice as i32) | (1 << 8),
    NoticeRecoverRollback = (Code::Notice as i32) | (2 << 8),
    WarningAutoIndex = (Code::Warning as i32) | (1 << 8),
    AuthorizationUser = (Code::Authorization as i32) | (1 << 8),
    OKLoadPermanently = (Code::OK as i32) | (1 << 8),
}

impl ExtCode {
    /// Every defined extended code, in declaration order.
    pub const ALL: [Self; 67] = [
        Self::ErrorMissingCollseq,
        Self::ErrorRetry,
        Self::ErrorSnapshot,
        Self::IOErrorRead,
        Self::IOErrorShortRead,
        Self::IOErrorWrite,
        Self::IOErrorFsync,
        Self::IOErrorDirFsync,
        Self::IOErrorTruncate,
        Self::IOErrorFstat,
        Self::IOErrorUnlock,
        Self::IOErrorRdlock,
        Self::IOErrorDelete,
        Self::IOErrorBlocked,
        Self::IOErrorNoMemory,
        Self::IOErrorAccess,
        Self::IOErrorCheckReservedLock,
        Self::IOErrorLock,
        Self::IOErrorClose,
        Self::IOErrorDirClose,
        Self::IOErrorShmOpen,
        Self::IOErrorShmSize,
        Self::IOErrorShmLock,
        Self::IOErrorShmMap,
        Self::IOErrorSeek,
        Self::IOErrorDeleteNoEntry,
        Self::IOErrorMmap,
        Self::IOErrorGetTempPath,
        Self::IOErrorConvPath,
        Self::IOErrorVnode,
        Self::IOErrorAuthorization,
        Self::IOErrorBeginAtomic,
        Self::IOErrorCommitAtomic,
        Self::IOErrorRollbackAtomic,
        Self::LockedSharedCache,
        Self::LockedVirtualTable,
        Self::BusyRecovery,
        Self::BusySnapshot,
        Self::CantOpenNoTempDir,
        Self::CantOpenIsDir,
        Self::CantOpenFullPath,
        Self::CantOpenConvPath,
        Self::CantOpenDirtyWal,
        Self::CorruptVirtualTable,
        Self::CorruptSequence,
        Self::ReadonlyRecovery,
        Self::ReadonlyCantLock,
        Self::ReadonlyRollback,
        Self::ReadonlyDatabaseMoved,
        Self::ReadonlyCantInit,
        Self::ReadonlyDirectory,
        Self::AbortRollback,
        Self::ConstraintCheck,
        Self::ConstraintCommitHook,
        Self::ConstraintForeignKey,
        Self::ConstraintFunction,
        Self::ConstraintNotNull,
        Self::ConstraintPrimaryKey,
        Self::ConstraintTrigger,
        Self::ConstraintUnique,
        Self::ConstraintVirtualTable,
        Self::ConstraintRowID,
        Self::NoticeRecoverWal,
        Self::NoticeRecoverRollback,
        Self::WarningAutoIndex,
        Self::AuthorizationUser,
        Self::OKLoadPermanently,
    ];

    /// The raw integer form of this extended code.
    #[must_use]
    pub const fn as_rc(self) -> i32 {
        self as i32
    }

    /// The base category this extended code refines (low byte).
    #[must_use]
    pub fn base(self) -> Code {
        Code::from_rc(self.as_rc())
    }

    /// The sub-cause ordinal (bits above the low byte).
    #[must_use]
    pub const fn sub(self) -> i32 {
        (self as i32) >> 8
    }
}

impl TryFrom<i32> for ExtCode {
    type Error = UnknownExtCode;

    fn try_from(value: i32) -> Result<Self, UnknownExtCode> {
        Self::ALL
            .iter()
            .copied()
            .find(|ext| ext.as_rc() == value)
            .ok_or(UnknownExtCode(value))
    }
}
