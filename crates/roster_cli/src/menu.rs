//! Terminal menu session.
//!
//! # Responsibility
//! - Translate menu choices and prompt lines into service operations.
//! - Render listings, confirmations, and error messages.
//!
//! # Invariants
//! - An empty input line cancels the current operation.
//! - Every failure path returns to the menu with the roster unchanged;
//!   a failed save is reported as a warning and the loop continues.

use roster_core::{
    DepartmentPatch, EmployeeId, EmployeeUpdate, RosterService, ServiceError, ServiceResult,
    StateStore,
};
use std::io::{self, BufRead, Write};

const MAIN_MENU: &str = "\n--- Main menu ---\n\
1. Register employee\n\
2. Edit employee\n\
3. Delete employee\n\
4. Manage departments\n\
5. Reallocate employee\n\
6. View departments and teams\n\
7. View employees\n\
8. Exit";

const DEPARTMENT_MENU: &str = "\n--- Manage departments ---\n\
1. Create department\n\
2. Rename department\n\
3. Delete department\n\
4. View departments and teams\n\
5. Back";

/// Interactive menu loop over one service instance.
pub struct MenuSession<R: BufRead, W: Write, S: StateStore> {
    input: R,
    output: W,
    service: RosterService<S>,
}

impl<R: BufRead, W: Write, S: StateStore> MenuSession<R, W, S> {
    pub fn new(input: R, output: W, service: RosterService<S>) -> Self {
        Self {
            input,
            output,
            service,
        }
    }

    /// Runs the menu loop until the exit choice or end of input.
    pub fn run(mut self) -> io::Result<()> {
        writeln!(self.output, "===== Roster Management (terminal) =====")?;
        writeln!(self.output, "Logged in as administrator.")?;

        loop {
            writeln!(self.output, "{MAIN_MENU}")?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                break;
            };
            match choice.as_str() {
                "1" => self.register_employee()?,
                "2" => self.edit_employee()?,
                "3" => self.delete_employee()?,
                "4" => self.manage_departments()?,
                "5" => self.reallocate_employee()?,
                "6" => self.view_departments()?,
                "7" => self.view_employees()?,
                "8" => {
                    writeln!(self.output, "Leaving.")?;
                    break;
                }
                _ => writeln!(self.output, "Invalid option.")?,
            }
        }
        Ok(())
    }

    fn register_employee(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Register employee ---")?;
        let Some(name) = self.prompt_required("Name (Enter to cancel): ")? else {
            return writeln!(self.output, "Registration cancelled.");
        };
        let Some(cpf) = self.prompt_required("CPF (digits only): ")? else {
            return writeln!(self.output, "Registration cancelled.");
        };
        let Some(phone) = self.prompt_required("Phone (digits only): ")? else {
            return writeln!(self.output, "Registration cancelled.");
        };
        let Some(address) = self.prompt_required("Address: ")? else {
            return writeln!(self.output, "Registration cancelled.");
        };

        let department = if self.service.roster().departments().is_empty() {
            writeln!(
                self.output,
                "No departments exist yet; registering without one."
            )?;
            None
        } else {
            self.list_departments()?;
            match self.prompt("Department number (Enter for none): ")? {
                None => None,
                Some(choice) if choice.is_empty() => None,
                Some(choice) => match self.department_by_position(&choice) {
                    Some(name) => Some(name),
                    None => {
                        return writeln!(self.output, "Invalid department.");
                    }
                },
            }
        };

        let result = self
            .service
            .register_employee(&name, &cpf, &phone, &address, department.as_deref());
        self.report(result, |id| format!("Employee registered with id {id}."))
    }

    fn edit_employee(&mut self) -> io::Result<()> {
        let Some(id) = self.choose_employee("Employee id to edit (Enter to cancel): ")? else {
            return Ok(());
        };
        let Some(current) = self.employee_row(id) else {
            return writeln!(self.output, "Employee not found.");
        };

        let update = EmployeeUpdate {
            name: self.prompt_optional(&format!("New name ({}) (Enter to keep): ", current.name))?,
            cpf: self.prompt_optional(&format!("New CPF ({}) (Enter to keep): ", current.cpf))?,
            phone: self
                .prompt_optional(&format!("New phone ({}) (Enter to keep): ", current.phone))?,
            address: self.prompt_optional(&format!(
                "New address ({}) (Enter to keep): ",
                current.address
            ))?,
            department: DepartmentPatch::Keep,
        };

        let result = self.service.edit_employee(id, &update);
        self.report(result, |()| "Employee updated.".to_string())
    }

    fn delete_employee(&mut self) -> io::Result<()> {
        let Some(id) = self.choose_employee("Employee id to delete (Enter to cancel): ")? else {
            return Ok(());
        };
        let Some(target) = self.employee_row(id) else {
            return writeln!(self.output, "Employee not found.");
        };

        if !self.confirm(&format!("Delete {}? (y/n): ", target.name))? {
            return writeln!(self.output, "Deletion cancelled.");
        }
        let result = self.service.delete_employee(id);
        self.report(result, |removed| format!("Employee {} deleted.", removed.name))
    }

    fn reallocate_employee(&mut self) -> io::Result<()> {
        if self.service.roster().employees().is_empty() {
            return writeln!(self.output, "No employees registered.");
        }
        if self.service.roster().departments().is_empty() {
            return writeln!(self.output, "No departments exist.");
        }

        let Some(id) = self.choose_employee("Employee id to reallocate (Enter to cancel): ")?
        else {
            return Ok(());
        };
        self.list_departments()?;
        let Some(choice) = self.prompt("New department number (Enter to cancel): ")? else {
            return writeln!(self.output, "Operation cancelled.");
        };
        if choice.is_empty() {
            return writeln!(self.output, "Operation cancelled.");
        }
        let Some(department) = self.department_by_position(&choice) else {
            return writeln!(self.output, "Invalid department.");
        };

        let result = self.service.reallocate_employee(id, &department);
        self.report(result, |()| format!("Employee reallocated to {department}."))
    }

    fn manage_departments(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "{DEPARTMENT_MENU}")?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                return Ok(());
            };
            match choice.as_str() {
                "1" => self.create_department()?,
                "2" => self.rename_department()?,
                "3" => self.delete_department()?,
                "4" => self.view_departments()?,
                "5" => {
                    writeln!(self.output, "Back to main menu.")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid option.")?,
            }
        }
    }

    fn create_department(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt_required("New department name (Enter to cancel): ")? else {
            return writeln!(self.output, "Creation cancelled.");
        };
        let result = self.service.create_department(&name);
        self.report(result, |()| format!("Department {name} created."))
    }

    fn rename_department(&mut self) -> io::Result<()> {
        let Some(name) = self.choose_department()? else {
            return Ok(());
        };
        let Some(new_name) =
            self.prompt_required(&format!("New name for {name} (Enter to cancel): "))?
        else {
            return writeln!(self.output, "Rename cancelled.");
        };
        let result = self.service.rename_department(&name, &new_name);
        self.report(result, |()| format!("Department renamed to {new_name}."))
    }

    fn delete_department(&mut self) -> io::Result<()> {
        let Some(name) = self.choose_department()? else {
            return Ok(());
        };
        if !self.confirm(&format!("Delete department '{name}'? (y/n): "))? {
            return writeln!(self.output, "Deletion cancelled.");
        }
        let result = self.service.delete_department(&name);
        self.report(result, |removed| {
            format!(
                "Department {} deleted; {} member(s) released.",
                removed.name,
                removed.team.len()
            )
        })
    }

    fn view_departments(&mut self) -> io::Result<()> {
        if self.service.roster().departments().is_empty() {
            return writeln!(self.output, "No departments exist.");
        }
        let listing: Vec<(String, Vec<String>)> = self
            .service
            .roster()
            .departments()
            .iter()
            .map(|department| {
                let members = department
                    .team
                    .iter()
                    .filter_map(|id| self.service.roster().find_employee_by_id(*id))
                    .map(|employee| format!("- {} (CPF: {})", employee.name, employee.cpf))
                    .collect();
                (department.name.clone(), members)
            })
            .collect();

        for (name, members) in listing {
            writeln!(self.output, "\nDepartment: {name}")?;
            if members.is_empty() {
                writeln!(self.output, "No employees in this department.")?;
            } else {
                writeln!(self.output, "Team:")?;
                for member in members {
                    writeln!(self.output, "{member}")?;
                }
            }
        }
        Ok(())
    }

    fn view_employees(&mut self) -> io::Result<()> {
        if self.service.roster().employees().is_empty() {
            return writeln!(self.output, "No employees registered.");
        }
        let rows: Vec<String> = self
            .service
            .roster()
            .employees()
            .iter()
            .map(|employee| {
                format!(
                    "Name: {}, CPF: {}, Department: {}",
                    employee.name,
                    employee.cpf,
                    employee.department.as_deref().unwrap_or("(none)")
                )
            })
            .collect();

        writeln!(self.output, "\n--- Employees ---")?;
        for row in rows {
            writeln!(self.output, "{row}")?;
        }
        Ok(())
    }

    /// Lists employees and reads an id. `None` means cancelled, not
    /// found, or unparseable (already reported).
    fn choose_employee(&mut self, prompt: &str) -> io::Result<Option<EmployeeId>> {
        if self.service.roster().employees().is_empty() {
            writeln!(self.output, "No employees registered.")?;
            return Ok(None);
        }

        let rows: Vec<String> = self
            .service
            .roster()
            .employees()
            .iter()
            .map(|employee| {
                format!(
                    "ID: {} - Name: {} - Department: {}",
                    employee.id,
                    employee.name,
                    employee.department.as_deref().unwrap_or("(none)")
                )
            })
            .collect();
        writeln!(self.output, "\n--- Employees ---")?;
        for row in rows {
            writeln!(self.output, "{row}")?;
        }

        let Some(choice) = self.prompt(prompt)? else {
            return Ok(None);
        };
        if choice.is_empty() {
            writeln!(self.output, "Operation cancelled.")?;
            return Ok(None);
        }
        match choice.parse::<EmployeeId>() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                writeln!(self.output, "Invalid id.")?;
                Ok(None)
            }
        }
    }

    /// Lists departments and reads a position. `None` means cancelled or
    /// invalid (already reported).
    fn choose_department(&mut self) -> io::Result<Option<String>> {
        if self.service.roster().departments().is_empty() {
            writeln!(self.output, "No departments exist.")?;
            return Ok(None);
        }
        self.list_departments()?;
        let Some(choice) = self.prompt("Department number (Enter to cancel): ")? else {
            return Ok(None);
        };
        if choice.is_empty() {
            writeln!(self.output, "Operation cancelled.")?;
            return Ok(None);
        }
        match self.department_by_position(&choice) {
            Some(name) => Ok(Some(name)),
            None => {
                writeln!(self.output, "Invalid department.")?;
                Ok(None)
            }
        }
    }

    fn list_departments(&mut self) -> io::Result<()> {
        let names: Vec<String> = self
            .service
            .roster()
            .departments()
            .iter()
            .map(|department| department.name.clone())
            .collect();
        writeln!(self.output, "\nAvailable departments:")?;
        for (position, name) in names.iter().enumerate() {
            writeln!(self.output, "{}. {name}", position + 1)?;
        }
        Ok(())
    }

    fn department_by_position(&self, choice: &str) -> Option<String> {
        let position: usize = choice.parse().ok()?;
        self.service
            .roster()
            .departments()
            .get(position.checked_sub(1)?)
            .map(|department| department.name.clone())
    }

    fn employee_row(&self, id: EmployeeId) -> Option<EmployeeRow> {
        self.service
            .roster()
            .find_employee_by_id(id)
            .map(|employee| EmployeeRow {
                name: employee.name.clone(),
                cpf: employee.cpf.clone(),
                phone: employee.phone.clone(),
                address: employee.address.clone(),
            })
    }

    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        let answer = self.prompt(prompt)?.unwrap_or_default();
        Ok(answer.eq_ignore_ascii_case("y"))
    }

    /// Prompts for one trimmed line. `None` means end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompts for a value; empty input or end of input means cancel.
    fn prompt_required(&mut self, text: &str) -> io::Result<Option<String>> {
        let value = self.prompt(text)?.unwrap_or_default();
        Ok(if value.is_empty() { None } else { Some(value) })
    }

    /// Prompts for an optional replacement; empty input means keep.
    fn prompt_optional(&mut self, text: &str) -> io::Result<Option<String>> {
        self.prompt_required(text)
    }

    fn report<T>(
        &mut self,
        result: ServiceResult<T>,
        success: impl FnOnce(&T) -> String,
    ) -> io::Result<()> {
        match result {
            Ok(value) => writeln!(self.output, "{}", success(&value)),
            Err(ServiceError::Roster(err)) => writeln!(self.output, "Error: {err}."),
            Err(ServiceError::Store(err)) => writeln!(
                self.output,
                "Warning: change kept in memory, but saving failed: {err}."
            ),
        }
    }
}

struct EmployeeRow {
    name: String,
    cpf: String,
    phone: String,
    address: String,
}

#[cfg(test)]
mod tests {
    use super::MenuSession;
    use roster_core::{Department, Employee, RosterService, StateStore, StoreResult};
    use std::io::Cursor;

    struct NullStore;

    impl StateStore for NullStore {
        fn load_employees(&self) -> StoreResult<Vec<Employee>> {
            Ok(Vec::new())
        }

        fn load_departments(&self) -> StoreResult<Vec<Department>> {
            Ok(Vec::new())
        }

        fn save_all(&self, _: &[Employee], _: &[Department]) -> StoreResult<()> {
            Ok(())
        }
    }

    fn run_script(script: &str) -> String {
        let (service, report) = RosterService::bootstrap(NullStore);
        assert!(report.is_clean());
        let mut output = Vec::new();
        MenuSession::new(Cursor::new(script.to_string()), &mut output, service)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn register_and_list_employee_through_menu() {
        let output = run_script("1\nAna\n12345678901\n11999990000\nRua A\n7\n8\n");
        assert!(output.contains("Employee registered with id 1."));
        assert!(output.contains("Name: Ana, CPF: 12345678901, Department: (none)"));
        assert!(output.contains("Leaving."));
    }

    #[test]
    fn empty_name_cancels_registration() {
        let output = run_script("1\n\n8\n");
        assert!(output.contains("Registration cancelled."));
        assert!(!output.contains("registered with id"));
    }

    #[test]
    fn invalid_cpf_is_reported_and_nothing_is_registered() {
        let output = run_script("1\nAna\n12a45\n11999990000\nRua A\n7\n8\n");
        assert!(output.contains("Error: cpf must contain only digits."));
        assert!(output.contains("No employees registered."));
    }

    #[test]
    fn department_submenu_creates_and_views_teams() {
        let output = run_script("4\n1\nVendas\n4\n5\n6\n8\n");
        assert!(output.contains("Department Vendas created."));
        assert!(output.contains("Department: Vendas"));
        assert!(output.contains("No employees in this department."));
    }

    #[test]
    fn reallocate_moves_employee_into_department() {
        let script = "1\nAna\n12345678901\n11999990000\nRua A\n4\n1\nVendas\n5\n5\n1\n1\n6\n8\n";
        let output = run_script(script);
        assert!(output.contains("Employee reallocated to Vendas."));
        assert!(output.contains("- Ana (CPF: 12345678901)"));
    }

    #[test]
    fn delete_requires_confirmation() {
        let script = "1\nAna\n12345678901\n11999990000\nRua A\n3\n1\nn\n7\n8\n";
        let output = run_script(script);
        assert!(output.contains("Deletion cancelled."));
        assert!(output.contains("Name: Ana"));
    }

    #[test]
    fn unknown_menu_option_reprompts() {
        let output = run_script("9\n8\n");
        assert!(output.contains("Invalid option."));
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let output = run_script("");
        assert!(output.contains("--- Main menu ---"));
    }
}
