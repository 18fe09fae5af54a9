//! Employee domain model.
//!
//! # Responsibility
//! - Define the canonical employee record and its serialized shape.
//! - Define the partial-update payload used by edit operations.
//!
//! # Invariants
//! - `id` is stable and never reused for another employee.
//! - `department` is `None` or the name of a department whose team
//!   contains this employee's id; the repository restores this after
//!   every mutation.

use serde::{Deserialize, Serialize};

/// Stable identifier assigned to every employee.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Ids are assigned monotonically by the repository and survive process
/// restarts through the persisted documents.
pub type EmployeeId = u64;

/// Canonical employee record.
///
/// Field-level validation (non-empty, digits-only contact fields) is the
/// repository's job; the entity itself stores whatever it is given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Stable id used for lookups, membership lists and persistence.
    pub id: EmployeeId,
    /// Full name.
    pub name: String,
    /// Natural-person registry number, ASCII digits only.
    pub cpf: String,
    /// Contact phone, ASCII digits only.
    pub phone: String,
    /// Free-form postal address.
    pub address: String,
    /// Current department name. `None` means no affiliation; serialized
    /// as JSON `null` so no department name is ever reserved.
    pub department: Option<String>,
}

impl Employee {
    /// Creates an employee record with a caller-provided stable id.
    ///
    /// Used by the repository on registration and by load paths where
    /// identity already exists in a persisted document.
    pub fn new(
        id: EmployeeId,
        name: impl Into<String>,
        cpf: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
        department: Option<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            cpf: cpf.into(),
            phone: phone.into(),
            address: address.into(),
            department,
        }
    }
}

/// Requested change to an employee's department affiliation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DepartmentPatch {
    /// Leave the current affiliation untouched.
    #[default]
    Keep,
    /// Drop the current affiliation.
    Clear,
    /// Move the employee into the named department.
    Assign(String),
}

/// Partial update for an employee record.
///
/// `None` means "keep the current value" — there is no way to clear a
/// text field through an edit, matching the interactive workflow where
/// an empty input line means "no change".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub cpf: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub department: DepartmentPatch,
}
