pub mod form;

pub use form::{ContactAction, ContactFormState, Field, FormPhase, Notice};
