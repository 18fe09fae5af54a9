//! Persistence gateway for roster state.
//!
//! # Responsibility
//! - Define the storage contract consumed by the service layer.
//! - Own transport errors for document load/save failures.
//!
//! # Invariants
//! - An absent document is an empty collection, not an error.
//! - A present but malformed document is an error, never a silent
//!   default.
//! - Saves are full overwrites of both documents as a unit.

use crate::model::department::Department;
use crate::model::employee::Employee;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod json_store;

pub use json_store::JsonStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from document load/save operations.
#[derive(Debug)]
pub enum StoreError {
    /// Filesystem read/write failure.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Document exists but cannot be decoded into records.
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Records cannot be encoded into a document.
    Encode {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "storage i/o failed for `{}`: {source}", path.display())
            }
            Self::Decode { path, source } => {
                write!(f, "malformed document `{}`: {source}", path.display())
            }
            Self::Encode { path, source } => {
                write!(f, "cannot encode document `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Decode { source, .. } | Self::Encode { source, .. } => Some(source),
        }
    }
}

/// Storage contract for the two persisted collections.
///
/// Implementations depend only on the record model; resolving membership
/// ids against employees is the repository's job.
pub trait StateStore {
    /// Loads the employees collection. Absent backing storage yields an
    /// empty list.
    fn load_employees(&self) -> StoreResult<Vec<Employee>>;
    /// Loads the departments collection. Absent backing storage yields
    /// an empty list.
    fn load_departments(&self) -> StoreResult<Vec<Department>>;
    /// Overwrites both collections in durable storage.
    fn save_all(&self, employees: &[Employee], departments: &[Department]) -> StoreResult<()>;
}
