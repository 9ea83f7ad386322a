// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Promotional offers and their usage records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferType {
    #[default]
    Percentage,
    Fixed,
}

impl OfferType {
    /// Unit suffix used in wish texts ("10% off", "5$ off").
    pub fn unit(self) -> &'static str {
        match self {
            OfferType::Percentage => "%",
            OfferType::Fixed => "$",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferStatus {
    #[default]
    Active,
    Inactive,
    Expired,
}

impl OfferStatus {
    /// Status after the active/inactive switch in the offers screen.
    /// Expired offers are reactivated.
    pub fn toggled(self) -> Self {
        match self {
            OfferStatus::Active => OfferStatus::Inactive,
            OfferStatus::Inactive | OfferStatus::Expired => OfferStatus::Active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    #[serde(deserialize_with = "super::wire::id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub offer_type: OfferType,
    /// Missing when the API returns an unusable value.
    #[serde(default, deserialize_with = "super::wire::opt_decimal")]
    pub discount_value: Option<f64>,
    pub status: OfferStatus,
    pub valid_from: NaiveDate,
    pub valid_to: NaiveDate,
    #[serde(default)]
    pub max_usage: Option<u32>,
    #[serde(default)]
    pub current_usage: u32,
    #[serde(default)]
    pub is_valid: bool,
    #[serde(default)]
    pub is_available: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Offer {
    /// Replacement payload carrying this offer's current values.
    pub fn to_update(&self) -> OfferCreate {
        OfferCreate {
            title: self.title.clone(),
            description: self.description.clone(),
            offer_type: self.offer_type,
            discount_value: self.discount_value.unwrap_or_default(),
            valid_from: self.valid_from,
            valid_to: self.valid_to,
            max_usage: self.max_usage,
            status: Some(self.status),
        }
    }
}

/// Payload for creating or replacing an offer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfferCreate {
    pub title: String,
    pub description: String,
    pub offer_type: OfferType,
    pub discount_value: f64,
    pub valid_from: NaiveDate,
    pub valid_to: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_usage: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OfferStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferUsage {
    #[serde(deserialize_with = "super::wire::id")]
    pub id: String,
    #[serde(deserialize_with = "super::wire::id")]
    pub offer: String,
    #[serde(default)]
    pub offer_title: String,
    #[serde(deserialize_with = "super::wire::id")]
    pub customer: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub used_at: String,
    #[serde(deserialize_with = "super::wire::decimal")]
    pub discount_applied: f64,
    #[serde(default)]
    pub order_id: Option<String>,
}

/// Partial usage update.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OfferUsageUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_applied: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UseOfferRequest {
    pub customer_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferStats {
    pub total_offers: u64,
    pub active_offers: u64,
    pub expired_offers: u64,
    pub total_usage: u64,
}
