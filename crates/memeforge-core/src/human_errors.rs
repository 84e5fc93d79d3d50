// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the command-line front end.
//
// Every technical error is mapped to a plain sentence with a suggestion. The
// severity decides whether the front end tells the user to fix their input or
// their installation.

use crate::error::MemeforgeError;

/// Who has to act to get past an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The input (file, flags, config) has to change.
    ActionRequired,
    /// Something on the machine is missing or broken (tool, permissions).
    Environment,
    /// The file cannot be used at all.
    Permanent,
}

/// A human-readable error with a plain message and an actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain summary of what went wrong (first line of CLI output).
    pub message: String,
    /// What the user should try next.
    pub suggestion: String,
    /// Whether the input or the machine needs fixing.
    pub severity: Severity,
}

/// Convert a `MemeforgeError` into a `HumanError`.
pub fn humanize_error(err: &MemeforgeError) -> HumanError {
    match err {
        // -- Ingestion errors --
        MemeforgeError::UnsupportedFormat { path } => HumanError {
            message: format!("Memeforge can't read quotes from {path}."),
            suggestion: "Use a .txt, .csv, .docx or .pdf file.".into(),
            severity: Severity::Permanent,
        },
        MemeforgeError::Parse { path, reason } => HumanError {
            message: format!("The quotes in {path} are not laid out as expected."),
            suggestion: format!(
                "Write one quote per line as \"Body\" - Author, or use a CSV with body and author columns. ({reason})"
            ),
            severity: Severity::ActionRequired,
        },
        MemeforgeError::ExternalToolFailure { tool, reason } => {
            if reason.contains("not found") {
                HumanError {
                    message: format!("The `{tool}` program is not installed."),
                    suggestion: "Install poppler-utils (it provides pdftotext), or convert the PDF to a .txt file.".into(),
                    severity: Severity::Environment,
                }
            } else {
                HumanError {
                    message: format!("`{tool}` could not convert the document."),
                    suggestion: format!("The file may be damaged or protected. ({reason})"),
                    severity: Severity::Permanent,
                }
            }
        }

        // -- Image errors --
        MemeforgeError::ImageOpen { path, .. } => HumanError {
            message: format!("{path} could not be opened as an image."),
            suggestion: "Try a JPEG or PNG file.".into(),
            severity: Severity::Permanent,
        },
        MemeforgeError::ImageError(detail) => HumanError {
            message: "The meme could not be drawn.".into(),
            suggestion: format!("Check the image width and output directory. ({detail})"),
            severity: Severity::ActionRequired,
        },

        // -- Front end --
        MemeforgeError::Config(detail) => HumanError {
            message: "The configuration file has a problem.".into(),
            suggestion: detail.clone(),
            severity: Severity::ActionRequired,
        },
        MemeforgeError::NoResources(what) => HumanError {
            message: format!("No {what} were found."),
            suggestion: "Check the quote_files and image_dir settings, or pass --path and --body.".into(),
            severity: Severity::ActionRequired,
        },
        MemeforgeError::MissingAuthor => HumanError {
            message: "A quote needs an author.".into(),
            suggestion: "Pass --author together with --body.".into(),
            severity: Severity::ActionRequired,
        },

        // -- Storage / persistence --
        MemeforgeError::Io(io) => HumanError {
            message: "A file could not be read or written.".into(),
            suggestion: format!("Check that the path exists and is writable. ({io})"),
            severity: Severity::Environment,
        },
        MemeforgeError::Serialization(detail) => HumanError {
            message: "Settings could not be saved.".into(),
            suggestion: detail.to_string(),
            severity: Severity::Environment,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tool_is_environment() {
        let err = MemeforgeError::ExternalToolFailure {
            tool: "pdftotext".into(),
            reason: "program not found".into(),
        };
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::Environment);
        assert!(human.message.contains("pdftotext"));
    }

    #[test]
    fn tool_exit_is_permanent() {
        let err = MemeforgeError::ExternalToolFailure {
            tool: "pdftotext".into(),
            reason: "exit status 1: Syntax Error".into(),
        };
        assert_eq!(humanize_error(&err).severity, Severity::Permanent);
    }

    #[test]
    fn missing_author_is_action_required() {
        let human = humanize_error(&MemeforgeError::MissingAuthor);
        assert_eq!(human.severity, Severity::ActionRequired);
    }

    #[test]
    fn unsupported_format_is_permanent() {
        let human = humanize_error(&MemeforgeError::unsupported("quotes.xyz"));
        assert_eq!(human.severity, Severity::Permanent);
        assert!(human.message.contains("quotes.xyz"));
    }
}
