//! Editor-side name validation.
//!
//! These rules run before any save request is issued: a rejected entity
//! produces no network traffic. Names must be non-empty and unique within
//! their own collection (inputs, outputs, and snippets are checked
//! independently); re-saving an entity under its own unchanged name is
//! allowed, matched by id.
//!
//! An input's `forward_to` is deliberately not checked against the existing
//! outputs; referential integrity is the server's concern.

use thiserror::Error;

use crate::models::{Configuration, Input, Output, Snippet};

/// The kind of configuration entity being validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Input,
    Output,
    Snippet,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Input => "input",
            Self::Output => "output",
            Self::Snippet => "snippet",
        };
        f.write_str(label)
    }
}

/// Validation failures raised before submission; never sent to the server.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{kind} name must not be empty")]
    EmptyName { kind: EntityKind },

    #[error("a {kind} named \"{name}\" already exists")]
    DuplicateName { kind: EntityKind, name: String },
}

fn check_name<'a, I>(kind: EntityKind, name: &str, id: &str, existing: I) -> Result<(), ValidationError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName { kind });
    }

    for (existing_id, existing_name) in existing {
        if existing_name == name && existing_id != id {
            return Err(ValidationError::DuplicateName {
                kind,
                name: name.to_string(),
            });
        }
    }

    Ok(())
}

/// Validate an input against the collector's current configuration.
///
/// # Errors
///
/// Returns a [`ValidationError`] for an empty name or a name collision with
/// a different input.
pub fn validate_input(configuration: &Configuration, input: &Input) -> Result<(), ValidationError> {
    check_name(
        EntityKind::Input,
        &input.name,
        &input.id,
        configuration
            .inputs
            .iter()
            .map(|i| (i.id.as_str(), i.name.as_str())),
    )
}

/// Validate an output against the collector's current configuration.
///
/// # Errors
///
/// Returns a [`ValidationError`] for an empty name or a name collision with
/// a different output.
pub fn validate_output(
    configuration: &Configuration,
    output: &Output,
) -> Result<(), ValidationError> {
    check_name(
        EntityKind::Output,
        &output.name,
        &output.id,
        configuration
            .outputs
            .iter()
            .map(|o| (o.id.as_str(), o.name.as_str())),
    )
}

/// Validate a snippet against the collector's current configuration.
///
/// # Errors
///
/// Returns a [`ValidationError`] for an empty name or a name collision with
/// a different snippet.
pub fn validate_snippet(
    configuration: &Configuration,
    snippet: &Snippet,
) -> Result<(), ValidationError> {
    check_name(
        EntityKind::Snippet,
        &snippet.name,
        &snippet.id,
        configuration
            .snippets
            .iter()
            .map(|s| (s.id.as_str(), s.name.as_str())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configuration_with_input(id: &str, name: &str) -> Configuration {
        Configuration {
            collector_id: "collector-1".to_string(),
            inputs: vec![Input {
                id: id.to_string(),
                name: name.to_string(),
                forward_to: "gelf-udp".to_string(),
                ..Input::default()
            }],
            ..Configuration::default()
        }
    }

    #[test]
    fn test_empty_name_rejected() {
        let configuration = Configuration::default();
        let input = Input::default();
        assert_eq!(
            validate_input(&configuration, &input),
            Err(ValidationError::EmptyName {
                kind: EntityKind::Input
            })
        );
    }

    #[test]
    fn test_whitespace_name_rejected() {
        let configuration = Configuration::default();
        let output = Output {
            name: "   ".to_string(),
            ..Output::default()
        };
        assert!(matches!(
            validate_output(&configuration, &output),
            Err(ValidationError::EmptyName { .. })
        ));
    }

    #[test]
    fn test_duplicate_name_in_same_collection_rejected() {
        let configuration = configuration_with_input("abc", "windows-eventlog");
        let new_input = Input {
            name: "windows-eventlog".to_string(),
            forward_to: "gelf-udp".to_string(),
            ..Input::default()
        };
        assert_eq!(
            validate_input(&configuration, &new_input),
            Err(ValidationError::DuplicateName {
                kind: EntityKind::Input,
                name: "windows-eventlog".to_string()
            })
        );
    }

    #[test]
    fn test_resaving_entity_under_own_name_accepted() {
        let configuration = configuration_with_input("abc", "windows-eventlog");
        let edited = Input {
            id: "abc".to_string(),
            name: "windows-eventlog".to_string(),
            forward_to: "gelf-tcp".to_string(),
            ..Input::default()
        };
        assert!(validate_input(&configuration, &edited).is_ok());
    }

    #[test]
    fn test_collections_validated_independently() {
        // An output may share its name with an input.
        let configuration = configuration_with_input("abc", "syslog");
        let output = Output {
            name: "syslog".to_string(),
            ..Output::default()
        };
        assert!(validate_output(&configuration, &output).is_ok());
    }

    #[test]
    fn test_duplicate_snippet_name_rejected() {
        let configuration = Configuration {
            snippets: vec![Snippet {
                id: "s1".to_string(),
                name: "extra-routes".to_string(),
                ..Snippet::default()
            }],
            ..Configuration::default()
        };
        let snippet = Snippet {
            name: "extra-routes".to_string(),
            ..Snippet::default()
        };
        assert!(matches!(
            validate_snippet(&configuration, &snippet),
            Err(ValidationError::DuplicateName { .. })
        ));
    }

    #[test]
    fn test_forward_to_is_not_checked() {
        // forward_to may name an output that does not exist; the server owns
        // that check.
        let configuration = Configuration::default();
        let input = Input {
            name: "file-log".to_string(),
            forward_to: "no-such-output".to_string(),
            ..Input::default()
        };
        assert!(validate_input(&configuration, &input).is_ok());
    }
}
