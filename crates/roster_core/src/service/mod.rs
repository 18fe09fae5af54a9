//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate roster mutations with the save-after-mutate contract.
//! - Keep the presentation layer decoupled from storage details.

pub mod roster_service;
