pub use crate::cli::run_app;
pub use crate::domain::{Contact, ContactStore};
pub use crate::errors::AppError;
