//! Domain model for employee and department records.
//!
//! # Responsibility
//! - Define the two entity shapes shared by repository and persistence.
//! - Keep the serialized document shape stable across releases.
//!
//! # Invariants
//! - Every employee is identified by a stable `EmployeeId`.
//! - Department membership is stored as ordered employee ids, never as
//!   embedded employee bodies.

pub mod department;
pub mod employee;
