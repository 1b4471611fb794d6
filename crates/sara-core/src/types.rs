//! Shared types.
//!
//! Most types live next to the code that uses them (forms, config, editor).
//! [`FieldKind`] is here because the masker, the field descriptors, and the
//! form editor all dispatch on it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The kind of a form input, which decides masking and input hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Free text (names, addresses).
    #[default]
    Text,
    /// Email address.
    Email,
    /// Password, entered with secure text entry.
    Password,
    /// Brazilian CPF, masked as `000.000.000-00`.
    Cpf,
    /// Brazilian mobile phone, masked as `(11) 99999-9999`.
    Phone,
}

impl FieldKind {
    /// All field kinds, in declaration order.
    pub const ALL: [Self; 5] = [Self::Text, Self::Email, Self::Password, Self::Cpf, Self::Phone];

    /// Returns `true` if keystrokes for this kind go through the masker.
    #[inline]
    #[must_use]
    pub const fn is_masked(self) -> bool {
        matches!(self, Self::Cpf | Self::Phone)
    }

    /// Stable lowercase name, as used in config files and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Cpf => "cpf",
            Self::Phone => "phone",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown field kind name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown field kind: '{0}'. Expected one of: text, email, password, cpf, phone.")]
pub struct UnknownFieldKind(pub String);

impl FromStr for FieldKind {
    type Err = UnknownFieldKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownFieldKind(s.to_string()))
    }
}
