// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Hotel customer records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Customer as stored by the hotel API. Phone numbers identify customers
/// at the desk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(deserialize_with = "super::wire::id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub phone: String,
    pub birth_date: NaiveDate,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Payload for creating or replacing a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub phone: String,
    pub birth_date: NaiveDate,
}

/// Spin-wheel participation of one customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameStatus {
    pub has_played: bool,
    #[serde(default)]
    pub first_play_date: Option<String>,
}

/// Phone number reduced to digits and `+`, the form used for matching and
/// for SMS links.
pub fn normalize_phone(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}
