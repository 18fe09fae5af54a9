//! JSON-file implementation of the state store.
//!
//! # Responsibility
//! - Persist the roster as two pretty-printed JSON documents.
//! - Emit `store_load`/`store_save` logging events with status.
//!
//! # Invariants
//! - `employees.json` is an array of employee objects; `departments.json`
//!   is an array of `{name, team_ids}` objects.
//! - Every save rewrites both documents; there is no partial update.

use super::{StateStore, StoreError, StoreResult};
use crate::model::department::Department;
use crate::model::employee::Employee;
use log::{error, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

const EMPLOYEES_FILE: &str = "employees.json";
const DEPARTMENTS_FILE: &str = "departments.json";

/// Two-document JSON store rooted at a data directory.
pub struct JsonStore {
    employees_path: PathBuf,
    departments_path: PathBuf,
}

impl JsonStore {
    /// Creates a store using the default file names inside `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        Self {
            employees_path: data_dir.join(EMPLOYEES_FILE),
            departments_path: data_dir.join(DEPARTMENTS_FILE),
        }
    }

    /// Creates a store over two explicit document paths.
    pub fn with_paths(employees_path: PathBuf, departments_path: PathBuf) -> Self {
        Self {
            employees_path,
            departments_path,
        }
    }

    /// Path of the employees document.
    pub fn employees_path(&self) -> &Path {
        &self.employees_path
    }

    /// Path of the departments document.
    pub fn departments_path(&self) -> &Path {
        &self.departments_path
    }

    fn load_collection<T: DeserializeOwned>(&self, path: &Path) -> StoreResult<Vec<T>> {
        if !path.exists() {
            info!(
                "event=store_load module=store status=absent path={}",
                path.display()
            );
            return Ok(Vec::new());
        }

        let text = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let records = serde_json::from_str(&text).map_err(|source| StoreError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(records)
    }

    fn save_collection<T: Serialize>(&self, path: &Path, records: &[T]) -> StoreResult<()> {
        let text =
            serde_json::to_string_pretty(records).map_err(|source| StoreError::Encode {
                path: path.to_path_buf(),
                source,
            })?;
        std::fs::write(path, text).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl StateStore for JsonStore {
    fn load_employees(&self) -> StoreResult<Vec<Employee>> {
        let loaded = self.load_collection(&self.employees_path);
        match &loaded {
            Ok(records) => info!(
                "event=store_load module=store status=ok collection=employees count={}",
                records.len()
            ),
            Err(err) => error!(
                "event=store_load module=store status=error collection=employees error={err}"
            ),
        }
        loaded
    }

    fn load_departments(&self) -> StoreResult<Vec<Department>> {
        let loaded = self.load_collection(&self.departments_path);
        match &loaded {
            Ok(records) => info!(
                "event=store_load module=store status=ok collection=departments count={}",
                records.len()
            ),
            Err(err) => error!(
                "event=store_load module=store status=error collection=departments error={err}"
            ),
        }
        loaded
    }

    fn save_all(&self, employees: &[Employee], departments: &[Department]) -> StoreResult<()> {
        let outcome = self
            .save_collection(&self.employees_path, employees)
            .and_then(|()| self.save_collection(&self.departments_path, departments));
        match &outcome {
            Ok(()) => info!(
                "event=store_save module=store status=ok employees={} departments={}",
                employees.len(),
                departments.len()
            ),
            Err(err) => error!("event=store_save module=store status=error error={err}"),
        }
        outcome
    }
}
