//! # sara-core
//!
//! Field validation and input masking for the SARA flood-safety check-in
//! forms.
//!
//! This crate provides:
//! - Predicates for email shape, password length, required fields, and the
//!   CPF check digits
//! - Keystroke-by-keystroke masking of CPF and phone inputs
//! - Submit-time rules for the login, registration, profile, and add-friend forms
//! - Configuration for error messages and the password minimum
//!
//! ## Architecture
//!
//! - [`digits`] - Digit-stream extraction shared by everything below
//! - [`validation`] - Pure validators returning `bool`
//! - [`mask`] - Incremental CPF/phone masking and CPF display formatting
//! - [`field`] - Per-kind input hints (keyboard, placeholder, secure entry)
//! - [`form`] - Form structs and their error maps
//! - [`editor`] - Field value holders that pipe changes through the masker
//! - [`config`] - Layered configuration loading and validation
//! - [`error`] - Unified error types for the crate
//! - [`types`] - Shared types

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(missing_docs)]

pub mod config;
pub mod digits;
pub mod editor;
pub mod error;
pub mod field;
pub mod form;
pub mod mask;
pub mod types;
pub mod validation;

// Re-export primary types for convenience
pub use config::{default_config_path, ConfigError, ConfigResult, FormConfig, FormMessages};
pub use digits::digit_stream;
pub use editor::{FieldState, FormEditor};
pub use error::{Result, SaraError};
pub use field::{AutoCapitalize, FieldDescriptor, KeyboardKind};
pub use form::{
    AddFriendForm, Form, FormErrors, FormField, FormKind, LoginForm, ProfileForm, RegisterForm,
};
pub use mask::{format_cpf, mask_cpf, mask_incremental, mask_phone, MAX_MASKED_DIGITS};
pub use types::{FieldKind, UnknownFieldKind};
pub use validation::{
    is_required, is_valid_cpf, is_valid_email, is_valid_password, CPF_LENGTH, MIN_PASSWORD_LENGTH,
};
