//! In-memory repository layer.
//!
//! # Responsibility
//! - Hold the authoritative employee/department state for one run.
//! - Enforce cross-entity consistency on every mutating operation.
//!
//! # Invariants
//! - Repository writes validate input before any mutation; failed
//!   operations leave the aggregate untouched.
//! - Repository APIs return semantic errors (`EmployeeNotFound`,
//!   `DuplicateCpf`) instead of panicking.

pub mod roster_repo;
