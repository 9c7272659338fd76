//! Account aggregate - identity root for registration and login

mod entity;
mod validation;

pub use entity::{Account, AccountId};
pub use validation::{AccountValidationError, validate_email, validate_password};
