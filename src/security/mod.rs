//! Security checks on alias definitions.
//!
//! # Responsibilities
//! - Keep redirect targets inside the application (open-redirect guard)
//!
//! # Design Decisions
//! - Validation runs when a definition is parsed, not at redirect time

pub mod redirect;

pub use redirect::{validate_target_path, TargetError};
