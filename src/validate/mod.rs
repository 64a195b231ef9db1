pub mod tlds;
pub mod validators;

pub use validators::{is_valid_email, is_valid_name, is_valid_password};
