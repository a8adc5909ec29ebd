pub mod corporations;
pub mod derive;
pub mod handlers;
pub mod service;
pub mod types;
pub mod validate;

pub use derive::{derive_all, derive_ranks, derive_totals};
pub use service::{SubmissionError, SubmissionService};
pub use validate::{validate, ValidationReport};
