pub mod cell;
pub mod form;
pub mod form_schema;
pub mod outcome;
pub mod reconcile;
pub mod sheets;
pub mod submission;

// Re-export commonly used types
pub use form::*;
pub use outcome::*;
pub use submission::*;
