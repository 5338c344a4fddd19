//! Two-step signup wizard. Step one collects account details and must
//! validate before the wizard advances; step two (drink preferences) has no
//! required fields.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::forms::{require, ValidationError};

pub const NAME_MIN: usize = 2;
pub const NAME_MAX: usize = 7;
pub const PASSWORD_MIN: usize = 8;
pub const PASSWORD_MAX: usize = 15;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex")
});

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub name: String,
    /// `YYYY-MM-DD`
    pub birth_date: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignUpForm {
    pub fn validate_name(&self) -> Result<(), ValidationError> {
        require(&self.name, "닉네임(이름)")?;
        let len = self.name.chars().count();
        if !(NAME_MIN..=NAME_MAX).contains(&len) {
            return Err(ValidationError::NameLength {
                min: NAME_MIN,
                max: NAME_MAX,
            });
        }
        Ok(())
    }

    pub fn validate_birth_date(&self, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
        require(&self.birth_date, "생년월일")?;
        let date = NaiveDate::parse_from_str(self.birth_date.trim(), "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDate)?;
        if date > today {
            return Err(ValidationError::InvalidDate);
        }
        Ok(date)
    }

    pub fn validate_email(&self) -> Result<(), ValidationError> {
        require(&self.email, "아이디(이메일)")?;
        if !EMAIL.is_match(self.email.trim()) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }

    pub fn validate_password(&self) -> Result<(), ValidationError> {
        require(&self.password, "패스워드")?;
        if !is_strong_password(&self.password) {
            return Err(ValidationError::WeakPassword);
        }
        Ok(())
    }

    pub fn passwords_match(&self) -> bool {
        !self.password.is_empty() && self.password == self.confirm_password
    }

    /// Every failing field is reported, not just the first.
    pub fn validate(&self, today: NaiveDate) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        if let Err(e) = self.validate_name() {
            errors.push(e);
        }
        if let Err(e) = self.validate_birth_date(today) {
            errors.push(e);
        }
        if let Err(e) = self.validate_email() {
            errors.push(e);
        }
        if let Err(e) = self.validate_password() {
            errors.push(e);
        }
        if !self.password.is_empty() && !self.passwords_match() {
            errors.push(ValidationError::PasswordMismatch);
        }

        ValidationError::collect(errors)
    }
}

fn is_strong_password(password: &str) -> bool {
    let len = password.chars().count();
    (PASSWORD_MIN..=PASSWORD_MAX).contains(&len)
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password
            .chars()
            .any(|c| !c.is_alphanumeric() && !c.is_whitespace())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignUpStep {
    #[default]
    Account,
    Preferences,
}

impl SignUpStep {
    pub fn number(self) -> u8 {
        match self {
            SignUpStep::Account => 1,
            SignUpStep::Preferences => 2,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SignUpWizard {
    pub form: SignUpForm,
    step: SignUpStep,
    /// Set once the user tried to advance, so empty fields start showing
    /// their messages.
    attempted: bool,
}

impl SignUpWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> SignUpStep {
        self.step
    }

    pub fn attempted(&self) -> bool {
        self.attempted
    }

    /// Progress bar value, 0..=100.
    pub fn progress(&self) -> u8 {
        self.step.number() * 50
    }

    /// Back navigation exists only on the second step.
    pub fn can_go_back(&self) -> bool {
        self.step == SignUpStep::Preferences
    }

    pub fn next(&mut self, today: NaiveDate) -> Result<SignUpStep, ValidationError> {
        if self.step == SignUpStep::Account {
            self.attempted = true;
            self.form.validate(today)?;
            self.step = SignUpStep::Preferences;
        }
        Ok(self.step)
    }

    pub fn prev(&mut self) -> SignUpStep {
        if self.can_go_back() {
            self.step = SignUpStep::Account;
        }
        self.step
    }
}
