//! Holding field values while the user types.
//!
//! [`FieldState`] is the explicit version of "the text input's current
//! value": every change goes through the masker with the stored value as the
//! previous one, and the result becomes the new stored value. [`FormEditor`]
//! keeps one state per field of the registration form.

use std::collections::BTreeMap;

use tracing::trace;

use crate::config::FormConfig;
use crate::digits::digit_count;
use crate::field::FieldDescriptor;
use crate::form::{Form, FormErrors, FormField, RegisterForm};
use crate::mask::mask_incremental;
use crate::types::FieldKind;

/// The current value of a single input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    kind: FieldKind,
    value: String,
}

impl FieldState {
    /// Creates an empty field of the given kind.
    #[must_use]
    pub const fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            value: String::new(),
        }
    }

    /// The field kind.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    /// The last accepted value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Input hints for this field.
    #[must_use]
    pub const fn descriptor(&self) -> FieldDescriptor {
        FieldDescriptor::for_kind(self.kind)
    }

    /// Handles a change event carrying the input's full new text.
    ///
    /// Returns the value the input should now display. Field contents are
    /// never logged, only their length.
    pub fn on_change(&mut self, text: &str) -> &str {
        let next = mask_incremental(self.kind, text, &self.value);

        match self.kind {
            FieldKind::Password => {}
            FieldKind::Cpf | FieldKind::Phone => {
                trace!(kind = %self.kind, digits = digit_count(&next), "field changed");
            }
            FieldKind::Text | FieldKind::Email => {
                trace!(kind = %self.kind, chars = next.chars().count(), "field changed");
            }
        }

        self.value = next;
        &self.value
    }

    /// Empties the field.
    pub fn clear(&mut self) {
        self.value.clear();
    }
}

/// Field states for the registration form.
#[derive(Debug, Clone)]
pub struct FormEditor {
    fields: BTreeMap<FormField, FieldState>,
}

impl Default for FormEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl FormEditor {
    /// Creates an editor with every registration field empty.
    #[must_use]
    pub fn new() -> Self {
        let fields = [
            (FormField::Name, FieldKind::Text),
            (FormField::Email, FieldKind::Email),
            (FormField::Cpf, FieldKind::Cpf),
            (FormField::Phone, FieldKind::Phone),
            (FormField::Address, FieldKind::Text),
            (FormField::Password, FieldKind::Password),
            (FormField::ConfirmPassword, FieldKind::Password),
        ]
        .into_iter()
        .map(|(field, kind)| (field, FieldState::new(kind)))
        .collect();

        Self { fields }
    }

    /// Routes a change event to `field` and returns its new display value.
    pub fn on_change(&mut self, field: FormField, text: &str) -> &str {
        self.fields
            .entry(field)
            .or_default()
            .on_change(text)
    }

    /// The current value of `field`.
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        self.fields.get(&field).map_or("", FieldState::value)
    }

    /// The state of `field`.
    #[must_use]
    pub fn field(&self, field: FormField) -> Option<&FieldState> {
        self.fields.get(&field)
    }

    /// A snapshot of the current values as a [`RegisterForm`].
    #[must_use]
    pub fn to_register_form(&self) -> RegisterForm {
        RegisterForm {
            name: self.value(FormField::Name).to_string(),
            email: self.value(FormField::Email).to_string(),
            cpf: self.value(FormField::Cpf).to_string(),
            phone: self.value(FormField::Phone).to_string(),
            address: self.value(FormField::Address).to_string(),
            password: self.value(FormField::Password).to_string(),
            confirm_password: self.value(FormField::ConfirmPassword).to_string(),
        }
    }

    /// Validates the current values.
    #[must_use]
    pub fn submit(&self, config: &FormConfig) -> FormErrors {
        self.to_register_form().validate(config)
    }
}
