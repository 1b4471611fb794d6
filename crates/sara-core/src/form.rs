//! Submit-time rules for the login, registration, profile, and add-friend
//! forms.
//!
//! Each form is a plain struct holding the field values as typed (already
//! masked, for CPF and phone). [`Form::validate`] runs every rule and returns
//! a [`FormErrors`] map with one message per failing field; an empty map
//! means the form may be submitted.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::FormConfig;
use crate::error::{Result, SaraError};
use crate::mask::format_cpf;
use crate::validation::{is_required, is_valid_cpf, is_valid_email, meets_min_length};

/// A field that can carry a validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    /// Full name.
    Name,
    /// Email address.
    Email,
    /// CPF.
    Cpf,
    /// Phone number.
    Phone,
    /// Street address.
    Address,
    /// Password.
    Password,
    /// Password confirmation.
    ConfirmPassword,
}

impl FormField {
    /// Stable snake_case name, matching the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Cpf => "cpf",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::Password => "password",
            Self::ConfirmPassword => "confirm_password",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Messages for the fields that failed validation, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<FormField, String>);

impl FormErrors {
    /// Creates an empty error map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` for `field` unless `ok` holds.
    ///
    /// The first message recorded for a field wins.
    pub fn check(&mut self, ok: bool, field: FormField, message: impl Into<String>) {
        if !ok {
            self.0.entry(field).or_insert_with(|| message.into());
        }
    }

    /// Returns `true` if every rule passed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The message for `field`, if it failed.
    #[must_use]
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Returns `true` if `field` failed.
    #[must_use]
    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    /// Iterates over failing fields and their messages in field order.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// A form whose fields can be checked before submission.
pub trait Form {
    /// Short name of the form, used in logs.
    const NAME: &'static str;

    /// Runs every rule of the form.
    fn validate(&self, config: &FormConfig) -> FormErrors;
}

/// Sign-in form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    /// Email address.
    pub email: String,
    /// Password.
    pub password: String,
}

impl Form for LoginForm {
    const NAME: &'static str = "login";

    fn validate(&self, config: &FormConfig) -> FormErrors {
        let messages = &config.messages;
        let mut errors = FormErrors::new();

        errors.check(is_valid_email(&self.email), FormField::Email, &messages.invalid_email);
        errors.check(
            meets_min_length(&self.password, config.min_password_length),
            FormField::Password,
            config.password_too_short_message(),
        );

        log_outcome(Self::NAME, &errors);
        errors
    }
}

/// Account registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterForm {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// CPF, masked or bare.
    pub cpf: String,
    /// Phone number, masked or bare.
    pub phone: String,
    /// Street address.
    pub address: String,
    /// Password.
    pub password: String,
    /// Password typed a second time.
    #[serde(alias = "confirm_password")]
    pub confirm_password: String,
}

impl Form for RegisterForm {
    const NAME: &'static str = "register";

    fn validate(&self, config: &FormConfig) -> FormErrors {
        let messages = &config.messages;
        let mut errors = FormErrors::new();

        errors.check(is_required(&self.name), FormField::Name, &messages.name_required);
        errors.check(is_valid_email(&self.email), FormField::Email, &messages.invalid_email);
        errors.check(is_valid_cpf(&self.cpf), FormField::Cpf, &messages.invalid_cpf);
        errors.check(is_required(&self.phone), FormField::Phone, &messages.phone_required);
        errors.check(is_required(&self.address), FormField::Address, &messages.address_required);
        errors.check(
            meets_min_length(&self.password, config.min_password_length),
            FormField::Password,
            config.password_too_short_message(),
        );
        errors.check(
            self.password == self.confirm_password,
            FormField::ConfirmPassword,
            &messages.password_mismatch,
        );

        log_outcome(Self::NAME, &errors);
        errors
    }
}

/// Profile editing form.
///
/// The CPF cannot be changed from the profile screen; it is carried only so
/// it can be shown with [`ProfileForm::formatted_cpf`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileForm {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Street address.
    pub address: String,
    /// Read-only CPF on file.
    pub cpf: String,
}

impl ProfileForm {
    /// The CPF on file, formatted for display.
    #[must_use]
    pub fn formatted_cpf(&self) -> String {
        format_cpf(&self.cpf)
    }
}

impl Form for ProfileForm {
    const NAME: &'static str = "profile";

    fn validate(&self, config: &FormConfig) -> FormErrors {
        let messages = &config.messages;
        let mut errors = FormErrors::new();

        errors.check(is_required(&self.name), FormField::Name, &messages.name_required);
        errors.check(is_valid_email(&self.email), FormField::Email, &messages.invalid_email);
        errors.check(is_required(&self.phone), FormField::Phone, &messages.phone_required);
        errors.check(is_required(&self.address), FormField::Address, &messages.address_required);

        log_outcome(Self::NAME, &errors);
        errors
    }
}

/// Form for adding a friend by email.
///
/// Only presence is checked; whether an account exists for the address is
/// up to the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddFriendForm {
    /// Friend's email address.
    pub email: String,
}

impl AddFriendForm {
    /// The email as it should be sent.
    #[must_use]
    pub fn trimmed_email(&self) -> &str {
        self.email.trim()
    }
}

impl Form for AddFriendForm {
    const NAME: &'static str = "add_friend";

    fn validate(&self, config: &FormConfig) -> FormErrors {
        let mut errors = FormErrors::new();

        errors.check(
            is_required(&self.email),
            FormField::Email,
            &config.messages.email_required,
        );

        log_outcome(Self::NAME, &errors);
        errors
    }
}

fn log_outcome(form: &str, errors: &FormErrors) {
    if errors.is_empty() {
        debug!(form, "form passed validation");
    } else {
        let failed: Vec<&str> = errors.iter().map(|(field, _)| field.as_str()).collect();
        debug!(form, failed = ?failed, "form failed validation");
    }
}

/// Which form a document belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    /// [`LoginForm`].
    Login,
    /// [`RegisterForm`].
    Register,
    /// [`ProfileForm`].
    Profile,
    /// [`AddFriendForm`].
    AddFriend,
}

impl FormKind {
    /// Decodes `json` as this kind of form and validates it.
    ///
    /// Missing fields are treated as empty strings.
    ///
    /// # Errors
    ///
    /// Returns [`SaraError::InvalidFormDocument`] if `json` is not an object
    /// of the expected shape.
    pub fn validate_json(self, json: &str, config: &FormConfig) -> Result<FormErrors> {
        Ok(match self {
            Self::Login => serde_json::from_str::<LoginForm>(json)?.validate(config),
            Self::Register => serde_json::from_str::<RegisterForm>(json)?.validate(config),
            Self::Profile => serde_json::from_str::<ProfileForm>(json)?.validate(config),
            Self::AddFriend => serde_json::from_str::<AddFriendForm>(json)?.validate(config),
        })
    }
}

impl FromStr for FormKind {
    type Err = SaraError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "login" => Ok(Self::Login),
            "register" => Ok(Self::Register),
            "profile" => Ok(Self::Profile),
            "add-friend" | "add_friend" => Ok(Self::AddFriend),
            _ => Err(SaraError::UnknownForm(s.to_string())),
        }
    }
}
