// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Form payloads shared by several screens, with required-field checks.
//!
//! Validation always runs before any request is sent to the hotel API.

use crate::error::{AppError, Result};
use crate::models::CustomerCreate;
use crate::time_utils::parse_form_date;
use serde::{Deserialize, Serialize};

pub const REQUIRED_FIELDS: &str = "Please fill in all required fields";

/// Quick customer capture (events screen and spin wheel).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerForm {
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// `YYYY-MM-DD`
    #[serde(default)]
    pub birth_date: String,
}

impl CustomerForm {
    /// Name, phone and birth date are required; e-mail is optional.
    pub fn validate(&self) -> Result<CustomerCreate> {
        if blank(&self.customer_name) || blank(&self.phone) || blank(&self.birth_date) {
            return Err(AppError::Validation(REQUIRED_FIELDS.to_string()));
        }

        Ok(CustomerCreate {
            name: self.customer_name.trim().to_string(),
            email: non_blank(&self.email),
            phone: self.phone.trim().to_string(),
            birth_date: required_date(&self.birth_date, "Birth date")?,
        })
    }
}

pub(crate) fn blank(s: &str) -> bool {
    s.trim().is_empty()
}

pub(crate) fn non_blank(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

pub(crate) fn required_date(raw: &str, field: &str) -> Result<chrono::NaiveDate> {
    parse_form_date(raw)
        .ok_or_else(|| AppError::Validation(format!("{} must be a date (YYYY-MM-DD)", field)))
}
