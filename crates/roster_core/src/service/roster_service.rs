//! Roster use-case service.
//!
//! # Responsibility
//! - Provide the mutating entry points consumed by the presentation
//!   layer.
//! - Persist the full roster state after every successful mutation.
//!
//! # Invariants
//! - `ServiceError::Roster` means the operation was rejected and the
//!   roster is unchanged.
//! - `ServiceError::Store` means the mutation was applied in memory but
//!   the save failed; in-memory and on-disk state may diverge until the
//!   next successful save.

use crate::model::department::Department;
use crate::model::employee::{Employee, EmployeeId, EmployeeUpdate};
use crate::repo::roster_repo::{Roster, RosterError};
use crate::store::{StateStore, StoreError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Layered error for service operations.
#[derive(Debug)]
pub enum ServiceError {
    /// The roster rejected the operation; nothing was mutated.
    Roster(RosterError),
    /// The mutation was applied but could not be saved to disk.
    Store(StoreError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Roster(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Roster(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<RosterError> for ServiceError {
    fn from(value: RosterError) -> Self {
        Self::Roster(value)
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Per-collection outcome of the initial load.
///
/// A failed collection starts empty; the error is kept so the
/// presentation layer can warn the user.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub employees_error: Option<StoreError>,
    pub departments_error: Option<StoreError>,
}

impl LoadReport {
    /// Returns whether both collections loaded without errors.
    pub fn is_clean(&self) -> bool {
        self.employees_error.is_none() && self.departments_error.is_none()
    }
}

/// Use-case facade over the roster aggregate and a state store.
pub struct RosterService<S: StateStore> {
    roster: Roster,
    store: S,
}

impl<S: StateStore> RosterService<S> {
    /// Loads persisted state and builds a reconciled service.
    ///
    /// A collection that fails to load starts empty and is reported in
    /// the returned `LoadReport`; the bootstrap itself never fails and
    /// performs no save.
    pub fn bootstrap(store: S) -> (Self, LoadReport) {
        let mut report = LoadReport::default();

        let employees = store.load_employees().unwrap_or_else(|err| {
            warn!("event=bootstrap module=service status=fallback collection=employees");
            report.employees_error = Some(err);
            Vec::new()
        });
        let departments = store.load_departments().unwrap_or_else(|err| {
            warn!("event=bootstrap module=service status=fallback collection=departments");
            report.departments_error = Some(err);
            Vec::new()
        });

        let roster = Roster::from_loaded(employees, departments);
        info!(
            "event=bootstrap module=service status=ok employees={} departments={} next_id={}",
            roster.employees().len(),
            roster.departments().len(),
            roster.next_id()
        );
        (Self { roster, store }, report)
    }

    /// Read access to the aggregate for listings and lookups.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Registers an employee and saves all state.
    pub fn register_employee(
        &mut self,
        name: &str,
        cpf: &str,
        phone: &str,
        address: &str,
        department: Option<&str>,
    ) -> ServiceResult<EmployeeId> {
        let id = self
            .roster
            .register_employee(name, cpf, phone, address, department)?;
        info!("event=employee_registered module=service id={id}");
        self.persist()?;
        Ok(id)
    }

    /// Applies a partial employee update and saves all state.
    pub fn edit_employee(&mut self, id: EmployeeId, update: &EmployeeUpdate) -> ServiceResult<()> {
        self.roster.edit_employee(id, update)?;
        info!("event=employee_edited module=service id={id}");
        self.persist()
    }

    /// Deletes an employee and saves all state.
    pub fn delete_employee(&mut self, id: EmployeeId) -> ServiceResult<Employee> {
        let removed = self.roster.delete_employee(id)?;
        info!("event=employee_deleted module=service id={id}");
        self.persist()?;
        Ok(removed)
    }

    /// Moves an employee into a department and saves all state.
    pub fn reallocate_employee(&mut self, id: EmployeeId, department: &str) -> ServiceResult<()> {
        self.roster.reallocate_employee(id, department)?;
        info!("event=employee_reallocated module=service id={id} department={department}");
        self.persist()
    }

    /// Creates a department and saves all state.
    pub fn create_department(&mut self, name: &str) -> ServiceResult<()> {
        self.roster.create_department(name)?;
        info!("event=department_created module=service name={name}");
        self.persist()
    }

    /// Renames a department, cascades the label, and saves all state.
    pub fn rename_department(&mut self, name: &str, new_name: &str) -> ServiceResult<()> {
        self.roster.rename_department(name, new_name)?;
        info!("event=department_renamed module=service from={name} to={new_name}");
        self.persist()
    }

    /// Deletes a department and saves all state.
    pub fn delete_department(&mut self, name: &str) -> ServiceResult<Department> {
        let removed = self.roster.delete_department(name)?;
        info!("event=department_deleted module=service name={name}");
        self.persist()?;
        Ok(removed)
    }

    fn persist(&self) -> ServiceResult<()> {
        self.store
            .save_all(self.roster.employees(), self.roster.departments())?;
        Ok(())
    }
}
