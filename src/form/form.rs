use crate::form::field::{FieldId, FieldRule};
use crate::input::{Input, PasswordInput, TextInput};
use crate::validate;
use indexmap::IndexMap;

pub const MSG_INVALID_EMAIL: &str = "Invalid email address";
// The register screen capitalizes its variant differently.
pub const MSG_INVALID_EMAIL_REGISTER: &str = "Invalid Email Address";
pub const MSG_INVALID_PASSWORD: &str =
    "Password must be at least 8 characters long and include upper case, lower case, and a number";
pub const MSG_INVALID_NAME: &str = "Name should only contain letters";
pub const MSG_INVALID_SURNAME: &str = "Surname should only contain letters";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Clean,
    Invalid,
}

struct FieldSlot {
    input: Box<dyn Input>,
    rule: FieldRule,
}

/// One screen's state: the current field values (via the inputs) and the
/// error messages from the last submit. Errors change only on submit; edits
/// between submits leave them displayed as-is.
pub struct Form {
    fields: Vec<FieldSlot>,
    errors: IndexMap<FieldId, &'static str>,
}

impl Form {
    fn new(fields: Vec<FieldSlot>) -> Self {
        Self {
            fields,
            errors: IndexMap::new(),
        }
    }

    pub fn login() -> Self {
        Self::new(vec![
            FieldSlot {
                input: Box::new(TextInput::new("EmailAddress", "Email Address")),
                rule: FieldRule::new(validate::is_valid_email, MSG_INVALID_EMAIL),
            },
            FieldSlot {
                input: Box::new(PasswordInput::new("Password", "Password")),
                rule: FieldRule::new(validate::is_valid_password, MSG_INVALID_PASSWORD),
            },
        ])
    }

    pub fn register() -> Self {
        Self::new(vec![
            FieldSlot {
                input: Box::new(TextInput::new("Name", "Name")),
                rule: FieldRule::new(validate::is_valid_name, MSG_INVALID_NAME),
            },
            FieldSlot {
                input: Box::new(TextInput::new("Surname", "Surname")),
                rule: FieldRule::new(validate::is_valid_name, MSG_INVALID_SURNAME),
            },
            FieldSlot {
                input: Box::new(TextInput::new("EmailAddress", "Email Address")),
                rule: FieldRule::new(validate::is_valid_email, MSG_INVALID_EMAIL_REGISTER),
            },
            FieldSlot {
                input: Box::new(PasswordInput::new("Password", "Password")),
                rule: FieldRule::new(validate::is_valid_password, MSG_INVALID_PASSWORD),
            },
        ])
    }

    pub fn forgot_password() -> Self {
        Self::new(vec![FieldSlot {
            input: Box::new(TextInput::new("EmailAddress", "Email Address")),
            rule: FieldRule::new(validate::is_valid_email, MSG_INVALID_EMAIL),
        }])
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &dyn Input> {
        self.fields.iter().map(|slot| slot.input.as_ref())
    }

    pub fn field_at(&self, index: usize) -> Option<&dyn Input> {
        self.fields.get(index).map(|slot| slot.input.as_ref())
    }

    pub fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Input> {
        self.fields
            .get_mut(index)
            .map(|slot| slot.input.as_mut() as &mut dyn Input)
    }

    /// Current value of every declared field, in declaration order.
    pub fn field_set(&self) -> IndexMap<FieldId, String> {
        self.fields
            .iter()
            .map(|slot| (slot.input.id().clone(), slot.input.value()))
            .collect()
    }

    /// Replaces one field's value. Never touches the error set.
    pub fn set_value(&mut self, id: &str, value: impl Into<String>) {
        if let Some(slot) = self.fields.iter_mut().find(|s| s.input.id().as_str() == id) {
            slot.input.set_value(value.into());
        }
    }

    pub fn value_of(&self, id: &str) -> Option<String> {
        self.fields
            .iter()
            .find(|s| s.input.id().as_str() == id)
            .map(|s| s.input.value())
    }

    /// Recomputes the error set wholesale from the current values. Failing
    /// fields map to their fixed message; a fully valid form clears it.
    pub fn submit(&mut self) -> FormStatus {
        self.errors = self
            .fields
            .iter()
            .filter(|slot| !(slot.rule.check)(&slot.input.value()))
            .map(|slot| (slot.input.id().clone(), slot.rule.message))
            .collect();
        self.status()
    }

    pub fn status(&self) -> FormStatus {
        if self.errors.is_empty() {
            FormStatus::Clean
        } else {
            FormStatus::Invalid
        }
    }

    pub fn errors(&self) -> &IndexMap<FieldId, &'static str> {
        &self.errors
    }

    pub fn error_for(&self, id: &str) -> Option<&'static str> {
        self.errors.get(id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::{
        Form, FormStatus, MSG_INVALID_EMAIL, MSG_INVALID_EMAIL_REGISTER, MSG_INVALID_PASSWORD,
    };

    #[test]
    fn register_submits_clean_with_valid_data() {
        let mut form = Form::register();
        form.set_value("Name", "Jane");
        form.set_value("Surname", "Doe");
        form.set_value("EmailAddress", "jane@doe.com");
        form.set_value("Password", "Secret12");

        assert_eq!(form.submit(), FormStatus::Clean);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn register_flags_only_the_failing_field() {
        let mut form = Form::register();
        form.set_value("Name", "Jane");
        form.set_value("Surname", "Doe");
        form.set_value("EmailAddress", "jane@doe.com");
        form.set_value("Password", "secret");

        assert_eq!(form.submit(), FormStatus::Invalid);
        assert_eq!(form.errors().len(), 1);
        assert_eq!(form.error_for("Password"), Some(MSG_INVALID_PASSWORD));
    }

    #[test]
    fn login_flags_both_fields_when_empty() {
        let mut form = Form::login();
        assert_eq!(form.submit(), FormStatus::Invalid);
        assert_eq!(form.error_for("EmailAddress"), Some(MSG_INVALID_EMAIL));
        assert_eq!(form.error_for("Password"), Some(MSG_INVALID_PASSWORD));
    }

    #[test]
    fn register_uses_its_own_email_message() {
        let mut form = Form::register();
        form.set_value("EmailAddress", "nope");
        form.submit();
        assert_eq!(
            form.error_for("EmailAddress"),
            Some(MSG_INVALID_EMAIL_REGISTER)
        );
    }

    #[test]
    fn set_value_is_idempotent_and_preserves_other_fields() {
        let mut form = Form::login();
        form.set_value("EmailAddress", "a@b.com");
        form.set_value("Password", "Abcdefg1");
        let before = form.field_set();

        form.set_value("EmailAddress", "a@b.com");
        assert_eq!(form.field_set(), before);
    }

    #[test]
    fn submit_is_idempotent_on_unchanged_input() {
        let mut form = Form::login();
        form.set_value("EmailAddress", "broken");
        form.submit();
        let first = form.errors().clone();
        form.submit();
        assert_eq!(form.errors(), &first);
    }

    #[test]
    fn errors_persist_across_edits_until_next_submit() {
        let mut form = Form::forgot_password();
        form.submit();
        assert_eq!(form.error_for("EmailAddress"), Some(MSG_INVALID_EMAIL));

        // Editing the field does not clear the displayed error.
        form.set_value("EmailAddress", "jane@doe.com");
        assert_eq!(form.error_for("EmailAddress"), Some(MSG_INVALID_EMAIL));

        assert_eq!(form.submit(), FormStatus::Clean);
        assert!(form.error_for("EmailAddress").is_none());
    }

    #[test]
    fn submit_recomputes_wholesale() {
        let mut form = Form::login();
        form.submit();
        assert_eq!(form.errors().len(), 2);

        form.set_value("EmailAddress", "a@b.com");
        form.submit();
        assert_eq!(form.errors().len(), 1);
        assert!(form.error_for("EmailAddress").is_none());
        assert_eq!(form.error_for("Password"), Some(MSG_INVALID_PASSWORD));
    }

    #[test]
    fn field_set_lists_all_declared_fields_empty_by_default() {
        let form = Form::register();
        let values = form.field_set();
        assert_eq!(
            values.keys().map(|k| k.as_str()).collect::<Vec<_>>(),
            ["Name", "Surname", "EmailAddress", "Password"]
        );
        assert!(values.values().all(|v| v.is_empty()));
    }
}
