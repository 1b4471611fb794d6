use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sara_core::{FieldKind, FormKind};

/// sara-check - validate SARA forms and watch the input masks at work
#[derive(Parser, Debug)]
#[command(name = "sara-check")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Validate a JSON form document and print the field errors
    Validate {
        /// Form to validate: login, register, profile, or add-friend
        form: FormKind,

        /// JSON file to read (stdin when omitted)
        input: Option<PathBuf>,
    },

    /// Mask each stdin line as the full current text of a field
    Mask {
        /// Field kind: cpf or phone
        #[arg(value_parser = parse_masked_kind)]
        kind: FieldKind,
    },

    /// Print the formatted CPF and whether it is valid
    Cpf {
        /// CPF, with or without punctuation
        value: String,
    },
}

/// Errors raised while interpreting arguments.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("'{0}' fields are not masked; expected cpf or phone")]
    UnmaskedKind(FieldKind),

    #[error(transparent)]
    Core(#[from] sara_core::SaraError),
}

/// Parses a field kind that goes through the masker.
fn parse_masked_kind(s: &str) -> Result<FieldKind, CheckError> {
    let kind: FieldKind = s.parse().map_err(sara_core::SaraError::from)?;
    if kind.is_masked() {
        Ok(kind)
    } else {
        Err(CheckError::UnmaskedKind(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parse_validate() {
        let cli = Cli::try_parse_from(["sara-check", "validate", "register", "form.json"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Validate {
                form: FormKind::Register,
                input: Some(PathBuf::from("form.json")),
            }
        );

        let cli = Cli::try_parse_from(["sara-check", "validate", "add-friend", "friend.json"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Validate {
                form: FormKind::AddFriend,
                input: Some(PathBuf::from("friend.json")),
            }
        );

        let cli = Cli::try_parse_from(["sara-check", "validate", "login"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Validate {
                form: FormKind::Login,
                input: None,
            }
        );
    }

    #[test]
    fn test_parse_mask_and_cpf() {
        let cli = Cli::try_parse_from(["sara-check", "mask", "phone"]).unwrap();
        assert_eq!(cli.command, Commands::Mask { kind: FieldKind::Phone });

        let cli = Cli::try_parse_from(["sara-check", "cpf", "529.982.247-25"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Cpf {
                value: "529.982.247-25".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        let kind_of = |args: &[&str]| Cli::try_parse_from(args).unwrap_err().kind();

        assert!(Cli::try_parse_from(["sara-check"]).is_err());
        assert_eq!(kind_of(&["sara-check", "frobnicate"]), ErrorKind::InvalidSubcommand);
        assert_eq!(kind_of(&["sara-check", "validate"]), ErrorKind::MissingRequiredArgument);
        assert_eq!(kind_of(&["sara-check", "validate", "signup"]), ErrorKind::ValueValidation);
        assert_eq!(kind_of(&["sara-check", "mask", "email"]), ErrorKind::ValueValidation);
        assert_eq!(kind_of(&["sara-check", "cpf", "1", "2"]), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_unmasked_kind_message() {
        let err = parse_masked_kind("email").unwrap_err();
        assert!(matches!(err, CheckError::UnmaskedKind(FieldKind::Email)));
        assert!(matches!(parse_masked_kind("rg"), Err(CheckError::Core(_))));
    }
}
