//! Roster aggregate: the in-memory source of truth.
//!
//! # Responsibility
//! - Provide CRUD operations over the employee and department sets.
//! - Keep the employee affiliation label and the department membership
//!   list bidirectionally consistent after every operation.
//! - Own id assignment for new employees.
//!
//! # Invariants
//! - Every employee's `department` is `None` or names a department whose
//!   `team` contains that employee's id, and vice versa.
//! - Assigned ids are unique and strictly increasing, including across
//!   process restarts via `from_loaded`.
//! - Failed operations are all-or-nothing: validation happens before any
//!   mutation, and the id counter does not advance on failure.

use crate::model::department::Department;
use crate::model::employee::{DepartmentPatch, Employee, EmployeeId, EmployeeUpdate};
use crate::validate::{is_digits_only, is_present};
use log::warn;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RosterResult<T> = Result<T, RosterError>;

/// Semantic errors for roster operations.
///
/// `EmptyField`/`NotNumeric` are validation failures, `DuplicateCpf`/
/// `DuplicateDepartment` are uniqueness violations, the `NotFound`
/// variants are dangling references. None of them mutates the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// A required text field is empty or whitespace-only.
    EmptyField(&'static str),
    /// A digits-only field contains non-digit characters.
    NotNumeric(&'static str),
    /// Another employee already holds this cpf.
    DuplicateCpf(String),
    /// A department with this exact name already exists.
    DuplicateDepartment(String),
    /// No employee with this id is registered.
    EmployeeNotFound(EmployeeId),
    /// No department with this name exists.
    DepartmentNotFound(String),
}

impl Display for RosterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "{field} must not be empty"),
            Self::NotNumeric(field) => write!(f, "{field} must contain only digits"),
            Self::DuplicateCpf(cpf) => write!(f, "cpf already registered: {cpf}"),
            Self::DuplicateDepartment(name) => write!(f, "department already exists: {name}"),
            Self::EmployeeNotFound(id) => write!(f, "employee not found: {id}"),
            Self::DepartmentNotFound(name) => write!(f, "department not found: {name}"),
        }
    }
}

impl Error for RosterError {}

/// In-memory aggregate of all employee and department records.
pub struct Roster {
    employees: Vec<Employee>,
    departments: Vec<Department>,
    next_id: EmployeeId,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Roster {
    /// Creates an empty roster. The first assigned employee id is `1`.
    pub fn new() -> Self {
        Self {
            employees: Vec::new(),
            departments: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuilds the aggregate from persisted collections.
    ///
    /// # Contract
    /// - `next_id` advances past every loaded id.
    /// - Duplicate employee ids and duplicate department names keep the
    ///   first occurrence; later ones are dropped with a warning.
    /// - Team ids that do not resolve to a loaded employee, or whose
    ///   employee is labeled with a different department, are dropped
    ///   (tolerates stale references from an older save).
    /// - Affiliations naming a missing department are reset to `None`;
    ///   affiliations missing from their department's team are re-linked.
    pub fn from_loaded(employees: Vec<Employee>, departments: Vec<Department>) -> Self {
        let mut roster = Self::new();

        let mut seen_ids = HashSet::new();
        for employee in employees {
            if !seen_ids.insert(employee.id) {
                warn!(
                    "event=load_reconcile module=repo status=dropped reason=duplicate_id id={}",
                    employee.id
                );
                continue;
            }
            if employee.id >= roster.next_id {
                roster.next_id = employee.id + 1;
            }
            roster.employees.push(employee);
        }

        let mut seen_names = HashSet::new();
        for department in departments {
            if !seen_names.insert(department.name.clone()) {
                warn!(
                    "event=load_reconcile module=repo status=dropped reason=duplicate_department name={}",
                    department.name
                );
                continue;
            }
            roster.departments.push(department);
        }

        roster.reconcile_links();
        roster
    }

    /// Registers a new employee and returns its assigned id.
    ///
    /// # Errors
    /// - `EmptyField` / `NotNumeric` when a field fails validation.
    /// - `DuplicateCpf` when another employee already holds the cpf.
    /// - `DepartmentNotFound` when a target department was named but
    ///   does not exist.
    pub fn register_employee(
        &mut self,
        name: &str,
        cpf: &str,
        phone: &str,
        address: &str,
        department: Option<&str>,
    ) -> RosterResult<EmployeeId> {
        validate_field("name", name, false)?;
        validate_field("cpf", cpf, true)?;
        validate_field("phone", phone, true)?;
        validate_field("address", address, false)?;
        self.ensure_cpf_free(cpf, None)?;
        if let Some(target) = department {
            self.department_index(target)
                .ok_or_else(|| RosterError::DepartmentNotFound(target.to_string()))?;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.employees.push(Employee::new(
            id,
            name,
            cpf,
            phone,
            address,
            department.map(str::to_string),
        ));
        if let Some(target) = department {
            if let Some(index) = self.department_index(target) {
                self.departments[index].add_member(id);
            }
        }
        Ok(id)
    }

    /// Applies a partial update to an existing employee.
    ///
    /// Supplied fields replace the current values; absent fields are
    /// kept. A supplied cpf is re-validated and checked for uniqueness
    /// against all other employees. A department patch moves the id
    /// between membership lists and relabels the employee.
    pub fn edit_employee(&mut self, id: EmployeeId, update: &EmployeeUpdate) -> RosterResult<()> {
        let index = self
            .employee_index(id)
            .ok_or(RosterError::EmployeeNotFound(id))?;

        if let Some(name) = update.name.as_deref() {
            validate_field("name", name, false)?;
        }
        if let Some(cpf) = update.cpf.as_deref() {
            validate_field("cpf", cpf, true)?;
            self.ensure_cpf_free(cpf, Some(id))?;
        }
        if let Some(phone) = update.phone.as_deref() {
            validate_field("phone", phone, true)?;
        }
        if let Some(address) = update.address.as_deref() {
            validate_field("address", address, false)?;
        }
        if let DepartmentPatch::Assign(target) = &update.department {
            self.department_index(target)
                .ok_or_else(|| RosterError::DepartmentNotFound(target.clone()))?;
        }

        let employee = &mut self.employees[index];
        if let Some(name) = &update.name {
            employee.name = name.clone();
        }
        if let Some(cpf) = &update.cpf {
            employee.cpf = cpf.clone();
        }
        if let Some(phone) = &update.phone {
            employee.phone = phone.clone();
        }
        if let Some(address) = &update.address {
            employee.address = address.clone();
        }

        match &update.department {
            DepartmentPatch::Keep => {}
            DepartmentPatch::Clear => self.move_employee(id, None),
            DepartmentPatch::Assign(target) => self.move_employee(id, Some(target.clone())),
        }
        Ok(())
    }

    /// Removes an employee and its department membership.
    ///
    /// Returns the removed record. The caller is responsible for any
    /// confirmation step before invoking this.
    pub fn delete_employee(&mut self, id: EmployeeId) -> RosterResult<Employee> {
        let index = self
            .employee_index(id)
            .ok_or(RosterError::EmployeeNotFound(id))?;
        self.move_employee(id, None);
        Ok(self.employees.remove(index))
    }

    /// Moves an employee into the named department.
    ///
    /// Idempotent when the target equals the current department: the
    /// membership list keeps its length and contents.
    pub fn reallocate_employee(&mut self, id: EmployeeId, department: &str) -> RosterResult<()> {
        self.employee_index(id)
            .ok_or(RosterError::EmployeeNotFound(id))?;
        self.department_index(department)
            .ok_or_else(|| RosterError::DepartmentNotFound(department.to_string()))?;
        self.move_employee(id, Some(department.to_string()));
        Ok(())
    }

    /// Creates an empty department with a unique name.
    pub fn create_department(&mut self, name: &str) -> RosterResult<()> {
        validate_field("department name", name, false)?;
        if self.department_index(name).is_some() {
            return Err(RosterError::DuplicateDepartment(name.to_string()));
        }
        self.departments.push(Department::new(name));
        Ok(())
    }

    /// Renames a department and cascades the new label to every member.
    ///
    /// Renaming a department to its current name is a no-op.
    pub fn rename_department(&mut self, name: &str, new_name: &str) -> RosterResult<()> {
        validate_field("department name", new_name, false)?;
        let index = self
            .department_index(name)
            .ok_or_else(|| RosterError::DepartmentNotFound(name.to_string()))?;
        if new_name == name {
            return Ok(());
        }
        if self.department_index(new_name).is_some() {
            return Err(RosterError::DuplicateDepartment(new_name.to_string()));
        }

        self.departments[index].name = new_name.to_string();
        let members = self.departments[index].team.clone();
        for member in members {
            if let Some(employee_index) = self.employee_index(member) {
                self.employees[employee_index].department = Some(new_name.to_string());
            }
        }
        Ok(())
    }

    /// Deletes a department, resetting every member's affiliation.
    ///
    /// Returns the removed record. The department is discarded, not
    /// archived.
    pub fn delete_department(&mut self, name: &str) -> RosterResult<Department> {
        let index = self
            .department_index(name)
            .ok_or_else(|| RosterError::DepartmentNotFound(name.to_string()))?;
        let department = self.departments.remove(index);
        for member in &department.team {
            if let Some(employee_index) = self.employee_index(*member) {
                self.employees[employee_index].department = None;
            }
        }
        Ok(department)
    }

    /// Looks up one employee by id.
    pub fn find_employee_by_id(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.id == id)
    }

    /// Looks up one department by exact name.
    pub fn find_department_by_name(&self, name: &str) -> Option<&Department> {
        self.departments
            .iter()
            .find(|department| department.name == name)
    }

    /// All employees in registration order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// All departments in creation order.
    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    /// The id the next registration will receive.
    pub fn next_id(&self) -> EmployeeId {
        self.next_id
    }

    fn employee_index(&self, id: EmployeeId) -> Option<usize> {
        self.employees.iter().position(|employee| employee.id == id)
    }

    fn department_index(&self, name: &str) -> Option<usize> {
        self.departments
            .iter()
            .position(|department| department.name == name)
    }

    fn ensure_cpf_free(&self, cpf: &str, except: Option<EmployeeId>) -> RosterResult<()> {
        let taken = self
            .employees
            .iter()
            .any(|employee| employee.cpf == cpf && Some(employee.id) != except);
        if taken {
            return Err(RosterError::DuplicateCpf(cpf.to_string()));
        }
        Ok(())
    }

    /// Detaches the employee from its current department (if any) and
    /// attaches it to `target`, updating both sides of the link.
    ///
    /// Callers must have resolved `target` to an existing department.
    fn move_employee(&mut self, id: EmployeeId, target: Option<String>) {
        let Some(employee_index) = self.employee_index(id) else {
            return;
        };

        let current = self.employees[employee_index].department.clone();
        if current == target {
            return;
        }

        if let Some(old_name) = current {
            if let Some(index) = self.department_index(&old_name) {
                self.departments[index].remove_member(id);
            }
        }
        if let Some(new_name) = &target {
            if let Some(index) = self.department_index(new_name) {
                self.departments[index].add_member(id);
            }
        }
        self.employees[employee_index].department = target;
    }

    /// Restores the bidirectional affiliation invariant after a load.
    fn reconcile_links(&mut self) {
        let labels: Vec<(EmployeeId, Option<String>)> = self
            .employees
            .iter()
            .map(|employee| (employee.id, employee.department.clone()))
            .collect();

        for department in &mut self.departments {
            let mut kept = Vec::with_capacity(department.team.len());
            for member in &department.team {
                let label = labels.iter().find(|(id, _)| id == member);
                let consistent =
                    matches!(label, Some((_, Some(name))) if *name == department.name);
                if consistent && !kept.contains(member) {
                    kept.push(*member);
                } else {
                    warn!(
                        "event=load_reconcile module=repo status=dropped reason=stale_member department={} id={member}",
                        department.name
                    );
                }
            }
            department.team = kept;
        }

        for index in 0..self.employees.len() {
            let Some(label) = self.employees[index].department.clone() else {
                continue;
            };
            let id = self.employees[index].id;
            match self.department_index(&label) {
                Some(department_index) => self.departments[department_index].add_member(id),
                None => {
                    warn!(
                        "event=load_reconcile module=repo status=reset reason=missing_department id={id} department={label}"
                    );
                    self.employees[index].department = None;
                }
            }
        }
    }
}

fn validate_field(field: &'static str, value: &str, numeric: bool) -> RosterResult<()> {
    if !is_present(value) {
        return Err(RosterError::EmptyField(field));
    }
    if numeric && !is_digits_only(value) {
        return Err(RosterError::NotNumeric(field));
    }
    Ok(())
}
