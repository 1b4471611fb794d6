//! Per-kind input hints for form fields.
//!
//! A text input picks its keyboard, placeholder, capitalization, and secure
//! entry from its [`FieldKind`]. The descriptor is plain data so any UI layer
//! can map it onto its own widget properties.

use serde::{Deserialize, Serialize};

use crate::mask::mask_incremental;
use crate::types::FieldKind;

/// Keyboard layout to request from the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyboardKind {
    /// Platform default keyboard.
    Default,
    /// Keyboard with `@` and `.` on the first page.
    EmailAddress,
    /// Digits only.
    Numeric,
}

/// Automatic capitalization behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutoCapitalize {
    /// Never capitalize.
    None,
    /// Capitalize the first letter of each sentence.
    Sentences,
}

/// Input hints for one field kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// The kind these hints belong to.
    pub kind: FieldKind,
    /// Keyboard to show.
    pub keyboard: KeyboardKind,
    /// Placeholder text, if the kind has a fixed one.
    pub placeholder: Option<&'static str>,
    /// Capitalization behavior.
    pub auto_capitalize: AutoCapitalize,
    /// Whether autocorrect is enabled.
    pub auto_correct: bool,
    /// Whether the text is hidden while typing.
    pub secure_entry: bool,
}

impl FieldDescriptor {
    /// Returns the hints for `kind`.
    #[must_use]
    pub const fn for_kind(kind: FieldKind) -> Self {
        let keyboard = match kind {
            FieldKind::Email => KeyboardKind::EmailAddress,
            FieldKind::Cpf | FieldKind::Phone => KeyboardKind::Numeric,
            FieldKind::Text | FieldKind::Password => KeyboardKind::Default,
        };

        let placeholder = match kind {
            FieldKind::Email => Some("seu@email.com"),
            FieldKind::Cpf => Some("000.000.000-00"),
            FieldKind::Phone => Some("(11) 99999-9999"),
            FieldKind::Password => Some("••••••••"),
            FieldKind::Text => None,
        };

        let auto_capitalize = match kind {
            FieldKind::Email => AutoCapitalize::None,
            _ => AutoCapitalize::Sentences,
        };

        Self {
            kind,
            keyboard,
            placeholder,
            auto_capitalize,
            auto_correct: !matches!(kind, FieldKind::Email | FieldKind::Password),
            secure_entry: matches!(kind, FieldKind::Password),
        }
    }

    /// Applies this field's mask to a keystroke.
    ///
    /// See [`mask_incremental`].
    #[must_use]
    pub fn apply(&self, current: &str, previous: &str) -> String {
        mask_incremental(self.kind, current, previous)
    }
}

impl From<FieldKind> for FieldDescriptor {
    fn from(kind: FieldKind) -> Self {
        Self::for_kind(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digits::digit_stream;

    #[test]
    fn test_numeric_keyboard_for_masked_kinds() {
        for kind in FieldKind::ALL {
            let desc = FieldDescriptor::for_kind(kind);
            assert_eq!(
                desc.keyboard == KeyboardKind::Numeric,
                kind.is_masked(),
                "kind: {kind}"
            );
        }
    }

    #[test]
    fn test_email_hints() {
        let desc = FieldDescriptor::for_kind(FieldKind::Email);
        assert_eq!(desc.keyboard, KeyboardKind::EmailAddress);
        assert_eq!(desc.auto_capitalize, AutoCapitalize::None);
        assert!(!desc.auto_correct);
        assert!(!desc.secure_entry);
    }

    #[test]
    fn test_password_is_secure_without_autocorrect() {
        let desc = FieldDescriptor::from(FieldKind::Password);
        assert!(desc.secure_entry);
        assert!(!desc.auto_correct);
        assert_eq!(desc.placeholder.map(|p| p.chars().count()), Some(8));
    }

    #[test]
    fn test_placeholders_are_full_masks() {
        let cpf = FieldDescriptor::for_kind(FieldKind::Cpf).placeholder.unwrap();
        assert_eq!(cpf, crate::mask::format_cpf(cpf));

        let phone = FieldDescriptor::for_kind(FieldKind::Phone).placeholder.unwrap();
        assert_eq!(digit_stream(phone).len(), 11);
        assert_eq!(crate::mask::mask_phone(phone, ""), phone);
    }

    #[test]
    fn test_text_has_no_placeholder() {
        assert_eq!(FieldDescriptor::for_kind(FieldKind::Text).placeholder, None);
    }

    #[test]
    fn test_apply_masks() {
        let desc = FieldDescriptor::for_kind(FieldKind::Cpf);
        assert_eq!(desc.apply("1234", ""), "123.4");
    }
}
