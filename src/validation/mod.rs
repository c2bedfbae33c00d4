//! Input validation for the scanner and report forms
//!
//! Pure shape checks: nothing here touches the network. Field hints carry
//! the per-field error annotation the views display under each input.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::ContractAddress;
use crate::utils::{ArgusError, Result};

/// Minimal `local@domain.tld` shape, deliberately permissive
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

pub const ADDRESS_HINT: &str = "Enter a valid Ethereum address (0x...)";
pub const EMAIL_HINT: &str = "Optional. We'll only use it to follow up on this report.";

pub const INVALID_ADDRESS: &str = "Not a valid Ethereum address";
pub const INVALID_ADDRESS_FORMAT: &str = "Not a valid address format";
pub const INVALID_EMAIL: &str = "Not a valid email";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormField {
    Address,
    Email,
}

impl FormField {
    pub fn default_hint(&self) -> &'static str {
        match self {
            FormField::Address => ADDRESS_HINT,
            FormField::Email => EMAIL_HINT,
        }
    }
}

/// Accepts `0x` followed by exactly 40 hex digits, in any letter case
pub fn validate_address(input: &str) -> Result<ContractAddress> {
    ContractAddress::parse(input)
        .ok_or_else(|| ArgusError::invalid_format(FormField::Address, INVALID_ADDRESS))
}

/// An empty string means no email was given
pub fn validate_email(input: &str) -> Result<Option<String>> {
    if input.is_empty() {
        return Ok(None);
    }
    
    if EMAIL_RE.is_match(input) {
        Ok(Some(input.to_string()))
    } else {
        Err(ArgusError::invalid_format(FormField::Email, INVALID_EMAIL))
    }
}

/// Blur-time check of the address field. An empty field is not an error yet.
pub fn check_address_on_blur(input: &str) -> Option<&'static str> {
    if !input.is_empty() && !ContractAddress::is_valid(input) {
        Some(INVALID_ADDRESS_FORMAT)
    } else {
        None
    }
}

/// Hint line under a single input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldHint {
    pub field: FormField,
    pub error: Option<String>,
}

impl FieldHint {
    pub fn new(field: FormField) -> Self {
        Self { field, error: None }
    }
    
    pub fn text(&self) -> &str {
        self.error.as_deref().unwrap_or(self.field.default_hint())
    }
    
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Independent error annotations for every field of a form
#[derive(Debug, Clone, Default)]
pub struct FieldHints {
    errors: HashMap<FormField, String>,
}

impl FieldHints {
    pub fn new() -> Self {
        Self::default()
    }
    
    pub fn set_error(&mut self, field: FormField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }
    
    pub fn clear(&mut self, field: FormField) {
        self.errors.remove(&field);
    }
    
    pub fn clear_all(&mut self) {
        self.errors.clear();
    }
    
    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
    
    pub fn hint(&self, field: FormField) -> FieldHint {
        FieldHint {
            field,
            error: self.errors.get(&field).cloned(),
        }
    }
}
