//! Client-side form state and validation.
//!
//! Validation runs before any request is built; a form that fails it
//! never reaches the network.

pub mod drafts;
pub mod signup;

pub use drafts::{AnnouncementDraft, CommentDraft, DeclarationDraft};
pub use signup::{SignUpForm, SignUpStep, SignUpWizard};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0}을(를) 입력해주세요.")]
    Required(&'static str),

    #[error("※{min}~{max}자로 해주세요.")]
    NameLength { min: usize, max: usize },

    #[error("※올바른 날짜를 입력해주세요")]
    InvalidDate,

    #[error("올바른 아이디(이메일)를 입력해주세요.")]
    InvalidEmail,

    #[error("※8~15자로 대소문자,숫자,특수문자를 포함하여야 합니다.")]
    WeakPassword,

    #[error("패스워드가 일치하지 않습니다.")]
    PasswordMismatch,

    #[error("{}", join(.0))]
    Several(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

impl ValidationError {
    /// Collapse collected errors: none is success, one stays as is.
    pub fn collect(mut errors: Vec<ValidationError>) -> Result<(), ValidationError> {
        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(ValidationError::Several(errors)),
        }
    }

    pub fn contains(&self, other: &ValidationError) -> bool {
        match self {
            ValidationError::Several(errors) => errors.contains(other),
            single => single == other,
        }
    }
}

/// Non-blank after trimming.
pub(crate) fn require(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Required(field))
    } else {
        Ok(())
    }
}
