pub mod playthrough;
pub mod policy;
pub mod reports;
pub mod validation;

pub use playthrough::{PlaythroughRecord, run_catalog};
pub use policy::GameplayStrategy;
pub use validation::{QuizCheck, ValidationReport, validate_catalog};
