//! Sign-up form validation
//!
//! Every field is checked on every pass; nothing short-circuits on the first
//! failure, so the screen can show one message per field at once. Validation
//! never touches the session store.

use super::models::SignupForm;
use lazy_static::lazy_static;
use regex::Regex;

pub const PASSWORD_MIN_LEN: usize = 6;
pub const PASSWORD_MAX_LEN: usize = 12;

lazy_static! {
    // \s plus the byte-order mark, which browser regex engines count as whitespace
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[^\s@\x{FEFF}]+@[^\s@\x{FEFF}]+\.[^\s@\x{FEFF}]+$").unwrap();
    static ref PHONE_RE: Regex = Regex::new(r"^[0-9]{10}$").unwrap();
}

/// Result of checking one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOutcome {
    /// Field left empty
    Missing(&'static str),
    /// Field present but malformed
    Invalid(&'static str),
    /// Field accepted, with the success message if the field has one
    Valid(Option<&'static str>),
}

impl FieldOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, FieldOutcome::Valid(_))
    }

    pub fn error(&self) -> Option<&'static str> {
        match self {
            FieldOutcome::Missing(msg) | FieldOutcome::Invalid(msg) => Some(*msg),
            FieldOutcome::Valid(_) => None,
        }
    }

    pub fn success(&self) -> Option<&'static str> {
        match self {
            FieldOutcome::Valid(msg) => *msg,
            _ => None,
        }
    }
}

/// Per-field outcomes of one validation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignupReport {
    pub username: FieldOutcome,
    pub email: FieldOutcome,
    pub phone: FieldOutcome,
    pub password: FieldOutcome,
    pub confirm_password: FieldOutcome,
}

impl SignupReport {
    /// True iff no field reports an error
    pub fn is_valid(&self) -> bool {
        self.fields().iter().all(|(_, outcome)| outcome.is_valid())
    }

    /// Outcomes in form order, labelled by field name
    pub fn fields(&self) -> [(&'static str, FieldOutcome); 5] {
        [
            ("username", self.username),
            ("email", self.email),
            ("phone", self.phone),
            ("password", self.password),
            ("confirm_password", self.confirm_password),
        ]
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Validate a whole sign-up form
pub fn validate_signup(form: &SignupForm) -> SignupReport {
    let report = SignupReport {
        username: check_username(&form.username),
        email: check_email(&form.email),
        phone: check_phone(&form.phone),
        password: check_password(&form.password),
        confirm_password: check_confirmation(&form.password, &form.confirm_password),
    };

    tracing::debug!(
        valid = report.is_valid(),
        username_ok = report.username.is_valid(),
        email_ok = report.email.is_valid(),
        phone_ok = report.phone.is_valid(),
        password_ok = report.password.is_valid(),
        confirm_ok = report.confirm_password.is_valid(),
        "Sign-up form validated"
    );

    report
}

fn check_username(username: &str) -> FieldOutcome {
    if username.is_empty() {
        FieldOutcome::Missing("Username is required")
    } else {
        FieldOutcome::Valid(Some("Valid username"))
    }
}

fn check_email(email: &str) -> FieldOutcome {
    if email.is_empty() {
        FieldOutcome::Missing("Email is required")
    } else if !is_valid_email(email) {
        FieldOutcome::Invalid("Invalid email address")
    } else {
        FieldOutcome::Valid(Some("Valid email address"))
    }
}

fn check_phone(phone: &str) -> FieldOutcome {
    if phone.is_empty() {
        FieldOutcome::Missing("Phone number is required")
    } else if !is_valid_phone(phone) {
        FieldOutcome::Invalid("Invalid phone number")
    } else {
        FieldOutcome::Valid(Some("Valid phone number"))
    }
}

fn check_password(password: &str) -> FieldOutcome {
    let len = password.chars().count();
    if password.is_empty() {
        FieldOutcome::Missing("Please enter a password")
    } else if !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&len) {
        FieldOutcome::Invalid("Password must be between 6 and 12 characters")
    } else {
        FieldOutcome::Valid(Some("Valid password"))
    }
}

// An empty password is reported on the password field only.
fn check_confirmation(password: &str, confirm_password: &str) -> FieldOutcome {
    if password != confirm_password {
        FieldOutcome::Invalid("Passwords do not match")
    } else {
        FieldOutcome::Valid(None)
    }
}
