pub mod field;
pub mod form;

pub use field::{FieldId, FieldRule};
pub use form::{
    Form, FormStatus, MSG_INVALID_EMAIL, MSG_INVALID_EMAIL_REGISTER, MSG_INVALID_NAME,
    MSG_INVALID_PASSWORD, MSG_INVALID_SURNAME,
};
