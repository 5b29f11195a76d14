//! Contact and newsletter form validation.
//!
//! Validation errors are values reported next to the offending field, never
//! exceptions; a submission is simply blocked until the form validates.
//! Submissions themselves are simulated and always resolve.

use crate::notify::{NotificationKind, Notifier};
use serde::{Deserialize, Serialize};

/// An inline error attached to one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Field name (`name`, `email`, `message`).
    pub field: String,
    /// Message rendered next to the field.
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Check an address against the page's email shape: one `@`, something
/// before it, and a dotted domain after it, with no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.split_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

fn validate_required(field: &str, label: &str, value: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        Some(FieldError::new(field, format!("{label} is required.")))
    } else {
        None
    }
}

/// The contact form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Validate every field, returning all errors at once.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if let Some(e) = validate_required("name", "Name", name) {
            errors.push(e);
        } else if name.len() < 2 {
            errors.push(FieldError::new(
                "name",
                "Name must be at least 2 characters long.",
            ));
        }

        let email = self.email.trim();
        if let Some(e) = validate_required("email", "Email", email) {
            errors.push(e);
        } else if !is_valid_email(email) {
            errors.push(FieldError::new(
                "email",
                "Please enter a valid email address.",
            ));
        }

        let message = self.message.trim();
        if let Some(e) = validate_required("message", "Message", message) {
            errors.push(e);
        } else if message.len() < 10 {
            errors.push(FieldError::new(
                "message",
                "Message must be at least 10 characters long.",
            ));
        }

        errors
    }

    /// Whether the form may be submitted.
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Attempt submission.
    ///
    /// An invalid form is blocked with an error toast and produces no other
    /// side effect; a valid one resolves with a thank-you toast. Returns
    /// the field errors when blocked.
    pub fn submit(&self, notifier: &dyn Notifier) -> Result<(), Vec<FieldError>> {
        let errors = self.validate();
        if !errors.is_empty() {
            notifier.notify(
                "Please correct the errors in the form.",
                NotificationKind::Error,
            );
            return Err(errors);
        }

        notifier.notify(
            "Thank you for your message! We'll get back to you soon.",
            NotificationKind::Success,
        );
        Ok(())
    }
}

/// The newsletter signup form: a single email field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsletterForm {
    pub email: String,
}

impl NewsletterForm {
    /// Validate the email field.
    pub fn validate(&self) -> Vec<FieldError> {
        if !is_valid_email(self.email.trim()) {
            vec![FieldError::new(
                "email",
                "Please enter a valid email address.",
            )]
        } else {
            Vec::new()
        }
    }

    /// Attempt subscription. Same blocking rules as the contact form.
    pub fn submit(&self, notifier: &dyn Notifier) -> Result<(), Vec<FieldError>> {
        let errors = self.validate();
        if !errors.is_empty() {
            notifier.notify("Please enter a valid email address.", NotificationKind::Error);
            return Err(errors);
        }

        notifier.notify(
            "Successfully subscribed to our newsletter!",
            NotificationKind::Success,
        );
        Ok(())
    }
}
