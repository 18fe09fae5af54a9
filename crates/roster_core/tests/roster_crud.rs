use roster_core::{DepartmentPatch, EmployeeUpdate, Roster, RosterError};

#[test]
fn register_assigns_monotonic_ids_starting_at_one() {
    let mut roster = Roster::new();

    let ana = roster
        .register_employee("Ana", "12345678901", "11999990000", "Rua A", None)
        .unwrap();
    assert_eq!(ana, 1);
    assert_eq!(roster.find_employee_by_id(1).unwrap().name, "Ana");

    let bruno = roster
        .register_employee("Bruno", "22345678901", "11999990001", "Rua B", None)
        .unwrap();
    assert_eq!(bruno, 2);

    roster.delete_employee(bruno).unwrap();
    let carla = roster
        .register_employee("Carla", "32345678901", "11999990002", "Rua C", None)
        .unwrap();
    assert_eq!(carla, 3, "deleted ids must never be reused");
}

#[test]
fn non_digit_cpf_is_rejected_without_advancing_the_counter() {
    let mut roster = Roster::new();

    let err = roster
        .register_employee("Ana", "12a45", "11999990000", "Rua A", None)
        .unwrap_err();
    assert_eq!(err, RosterError::NotNumeric("cpf"));
    assert!(roster.employees().is_empty());
    assert_eq!(roster.next_id(), 1);

    let id = roster
        .register_employee("Ana", "12345678901", "11999990000", "Rua A", None)
        .unwrap();
    assert_eq!(id, 1);
}

#[test]
fn empty_and_non_numeric_fields_are_validation_errors() {
    let mut roster = Roster::new();

    let err = roster
        .register_employee("", "12345678901", "11999990000", "Rua A", None)
        .unwrap_err();
    assert_eq!(err, RosterError::EmptyField("name"));

    let err = roster
        .register_employee("Ana", "12345678901", "11 9999", "Rua A", None)
        .unwrap_err();
    assert_eq!(err, RosterError::NotNumeric("phone"));

    let err = roster
        .register_employee("Ana", "12345678901", "11999990000", "   ", None)
        .unwrap_err();
    assert_eq!(err, RosterError::EmptyField("address"));
}

#[test]
fn duplicate_cpf_is_rejected_on_register_and_edit() {
    let mut roster = Roster::new();
    let ana = roster
        .register_employee("Ana", "12345678901", "11999990000", "Rua A", None)
        .unwrap();

    let err = roster
        .register_employee("Bia", "12345678901", "11999990001", "Rua B", None)
        .unwrap_err();
    assert_eq!(err, RosterError::DuplicateCpf("12345678901".to_string()));

    let bia = roster
        .register_employee("Bia", "22345678901", "11999990001", "Rua B", None)
        .unwrap();
    let update = EmployeeUpdate {
        cpf: Some("12345678901".to_string()),
        ..EmployeeUpdate::default()
    };
    let err = roster.edit_employee(bia, &update).unwrap_err();
    assert_eq!(err, RosterError::DuplicateCpf("12345678901".to_string()));

    // Re-submitting an employee's own cpf is not a conflict.
    let own = EmployeeUpdate {
        cpf: Some("12345678901".to_string()),
        ..EmployeeUpdate::default()
    };
    roster.edit_employee(ana, &own).unwrap();
}

#[test]
fn edit_replaces_supplied_fields_and_keeps_the_rest() {
    let mut roster = Roster::new();
    let id = roster
        .register_employee("Ana", "12345678901", "11999990000", "Rua A", None)
        .unwrap();

    let update = EmployeeUpdate {
        phone: Some("11888880000".to_string()),
        address: Some("Rua Nova".to_string()),
        ..EmployeeUpdate::default()
    };
    roster.edit_employee(id, &update).unwrap();

    let employee = roster.find_employee_by_id(id).unwrap();
    assert_eq!(employee.name, "Ana");
    assert_eq!(employee.cpf, "12345678901");
    assert_eq!(employee.phone, "11888880000");
    assert_eq!(employee.address, "Rua Nova");
}

#[test]
fn edit_rejects_invalid_replacement_without_partial_updates() {
    let mut roster = Roster::new();
    let id = roster
        .register_employee("Ana", "12345678901", "11999990000", "Rua A", None)
        .unwrap();

    let update = EmployeeUpdate {
        name: Some("Ana Maria".to_string()),
        phone: Some("not-a-phone".to_string()),
        ..EmployeeUpdate::default()
    };
    let err = roster.edit_employee(id, &update).unwrap_err();
    assert_eq!(err, RosterError::NotNumeric("phone"));

    // All-or-nothing: the valid name change must not have been applied.
    assert_eq!(roster.find_employee_by_id(id).unwrap().name, "Ana");
}

#[test]
fn edit_unknown_employee_is_not_found() {
    let mut roster = Roster::new();
    let err = roster
        .edit_employee(77, &EmployeeUpdate::default())
        .unwrap_err();
    assert_eq!(err, RosterError::EmployeeNotFound(77));
}

#[test]
fn delete_removes_employee_and_its_membership() {
    let mut roster = Roster::new();
    roster.create_department("Vendas").unwrap();
    let id = roster
        .register_employee("Ana", "12345678901", "11999990000", "Rua A", Some("Vendas"))
        .unwrap();

    let removed = roster.delete_employee(id).unwrap();
    assert_eq!(removed.name, "Ana");
    assert!(roster.find_employee_by_id(id).is_none());
    assert!(roster.find_department_by_name("Vendas").unwrap().team.is_empty());

    let err = roster.delete_employee(id).unwrap_err();
    assert_eq!(err, RosterError::EmployeeNotFound(id));
}

#[test]
fn edit_can_move_and_clear_department_affiliation() {
    let mut roster = Roster::new();
    roster.create_department("Vendas").unwrap();
    roster.create_department("Suporte").unwrap();
    let id = roster
        .register_employee("Ana", "12345678901", "11999990000", "Rua A", Some("Vendas"))
        .unwrap();

    let to_suporte = EmployeeUpdate {
        department: DepartmentPatch::Assign("Suporte".to_string()),
        ..EmployeeUpdate::default()
    };
    roster.edit_employee(id, &to_suporte).unwrap();
    assert!(roster.find_department_by_name("Vendas").unwrap().team.is_empty());
    assert_eq!(roster.find_department_by_name("Suporte").unwrap().team, vec![id]);
    assert_eq!(
        roster.find_employee_by_id(id).unwrap().department.as_deref(),
        Some("Suporte")
    );

    let clear = EmployeeUpdate {
        department: DepartmentPatch::Clear,
        ..EmployeeUpdate::default()
    };
    roster.edit_employee(id, &clear).unwrap();
    assert!(roster.find_department_by_name("Suporte").unwrap().team.is_empty());
    assert_eq!(roster.find_employee_by_id(id).unwrap().department, None);
}

#[test]
fn register_into_unknown_department_is_not_found() {
    let mut roster = Roster::new();
    let err = roster
        .register_employee("Ana", "12345678901", "11999990000", "Rua A", Some("Fiscal"))
        .unwrap_err();
    assert_eq!(err, RosterError::DepartmentNotFound("Fiscal".to_string()));
    assert!(roster.employees().is_empty());
    assert_eq!(roster.next_id(), 1);
}
