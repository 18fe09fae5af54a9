use roster_core::{Department, Employee};

#[test]
fn employee_serialization_uses_expected_wire_fields() {
    let employee = Employee::new(
        7,
        "Ana",
        "12345678901",
        "11999990000",
        "Rua A",
        Some("Vendas".to_string()),
    );

    let json = serde_json::to_value(&employee).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["name"], "Ana");
    assert_eq!(json["cpf"], "12345678901");
    assert_eq!(json["phone"], "11999990000");
    assert_eq!(json["address"], "Rua A");
    assert_eq!(json["department"], "Vendas");

    let decoded: Employee = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, employee);
}

#[test]
fn unaffiliated_employee_serializes_department_as_null() {
    let employee = Employee::new(1, "Ana", "12345678901", "11999990000", "Rua A", None);

    let json = serde_json::to_value(&employee).unwrap();
    assert!(json["department"].is_null());

    let decoded: Employee = serde_json::from_value(json).unwrap();
    assert_eq!(decoded.department, None);
}

#[test]
fn department_serialization_carries_member_ids_not_bodies() {
    let mut department = Department::new("Vendas");
    department.add_member(3);
    department.add_member(1);

    let json = serde_json::to_value(&department).unwrap();
    assert_eq!(json["name"], "Vendas");
    assert_eq!(json["team_ids"], serde_json::json!([3, 1]));

    let decoded: Department = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, department);
}

#[test]
fn membership_add_is_idempotent_and_remove_is_tolerant() {
    let mut department = Department::new("Vendas");

    department.add_member(5);
    department.add_member(5);
    assert_eq!(department.team, vec![5]);
    assert!(department.has_member(5));

    department.remove_member(5);
    department.remove_member(5);
    assert!(department.team.is_empty());
    assert!(!department.has_member(5));
}

#[test]
fn membership_preserves_insertion_order() {
    let mut department = Department::new("Suporte");
    for id in [4, 2, 9] {
        department.add_member(id);
    }
    assert_eq!(department.team, vec![4, 2, 9]);
}
