// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Special dates (customer reminders), hotel events and event bookings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of special date. Values outside the known list round-trip verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SpecialDateType {
    Birthday,
    Anniversary,
    WeddingAnniversary,
    FirstVisit,
    Graduation,
    Promotion,
    Retirement,
    OtherCelebration,
    Other(String),
}

impl SpecialDateType {
    /// Types offered in the special-date form, in display order.
    pub const FORM_CHOICES: [SpecialDateType; 8] = [
        SpecialDateType::Birthday,
        SpecialDateType::Anniversary,
        SpecialDateType::WeddingAnniversary,
        SpecialDateType::FirstVisit,
        SpecialDateType::Graduation,
        SpecialDateType::Promotion,
        SpecialDateType::Retirement,
        SpecialDateType::OtherCelebration,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            SpecialDateType::Birthday => "Birthday",
            SpecialDateType::Anniversary => "Anniversary",
            SpecialDateType::WeddingAnniversary => "Wedding Anniversary",
            SpecialDateType::FirstVisit => "First Visit",
            SpecialDateType::Graduation => "Graduation",
            SpecialDateType::Promotion => "Promotion",
            SpecialDateType::Retirement => "Retirement",
            SpecialDateType::OtherCelebration => "Other Celebration",
            SpecialDateType::Other(raw) => raw,
        }
    }
}

impl From<String> for SpecialDateType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Birthday" => SpecialDateType::Birthday,
            "Anniversary" => SpecialDateType::Anniversary,
            "Wedding Anniversary" => SpecialDateType::WeddingAnniversary,
            "First Visit" => SpecialDateType::FirstVisit,
            "Graduation" => SpecialDateType::Graduation,
            "Promotion" => SpecialDateType::Promotion,
            "Retirement" => SpecialDateType::Retirement,
            "Other Celebration" => SpecialDateType::OtherCelebration,
            _ => SpecialDateType::Other(raw),
        }
    }
}

impl From<&str> for SpecialDateType {
    fn from(raw: &str) -> Self {
        raw.to_string().into()
    }
}

impl From<SpecialDateType> for String {
    fn from(kind: SpecialDateType) -> Self {
        match kind {
            SpecialDateType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SpecialDateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Special date as returned by the API, denormalized with customer fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialDate {
    #[serde(deserialize_with = "super::wire::id")]
    pub id: String,
    #[serde(deserialize_with = "super::wire::id")]
    pub customer: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: String,
    pub special_date_type: SpecialDateType,
    pub date: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Payload for creating or replacing a special date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecialDateCreate {
    pub customer: String,
    pub special_date_type: SpecialDateType,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialDateStats {
    pub total_dates: u64,
    pub birthday_count: u64,
    pub anniversary_count: u64,
    pub other_count: u64,
}

/// Hotel event (dinner, conference, party...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(deserialize_with = "super::wire::id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub event_type: String,
    pub start_date: String,
    pub end_date: String,
    pub capacity: u32,
    #[serde(default)]
    pub current_bookings: u32,
    #[serde(default)]
    pub available_spots: u32,
    #[serde(default)]
    pub is_full: bool,
    #[serde(deserialize_with = "super::wire::decimal")]
    pub price: f64,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Payload for creating or replacing an event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventCreate {
    pub title: String,
    pub description: String,
    pub event_type: String,
    pub start_date: String,
    pub end_date: String,
    pub capacity: u32,
    pub price: f64,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventBooking {
    #[serde(deserialize_with = "super::wire::id")]
    pub id: String,
    #[serde(deserialize_with = "super::wire::id")]
    pub event: String,
    #[serde(default)]
    pub event_title: String,
    #[serde(deserialize_with = "super::wire::id")]
    pub customer: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub booking_date: String,
    pub number_of_guests: u32,
    #[serde(deserialize_with = "super::wire::decimal")]
    pub total_price: f64,
    pub status: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Booking request body for `events/{id}/book/`.
#[derive(Debug, Clone, Serialize)]
pub struct BookingRequest {
    pub customer_id: String,
    pub number_of_guests: u32,
}

/// Partial booking update (status changes, notes).
#[derive(Debug, Clone, Default, Serialize)]
pub struct BookingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_guests: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
