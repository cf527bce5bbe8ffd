//! Three-step create/edit wizard.
//!
//! # Design
//! - `draft` keeps inputs as raw strings; `schema` converts them only when checking.
//! - Each step owns a disjoint subset of the fields; advancing validates that subset.
//! - `controller` sequences priming, stepping, and the final request.

pub mod controller;
pub mod draft;
pub mod schema;

pub use controller::{FormController, FormMode, FormPhase, FormState, SubmitOutcome};
pub use draft::{EmployeeDraft, Step, StepStatus};
pub use schema::{Field, FieldError, FieldErrors, build_payload, validate_field, validate_fields};
