// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! WhatsApp payloads. Delivery is handled by the hotel API.

use serde::{Deserialize, Serialize};

/// Request for a templated special-date wish.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WhatsAppWishRequest {
    pub customer_name: String,
    pub phone: String,
    pub special_date_type: String,
    pub custom_message: String,
    pub offer_details: String,
}

/// Request for a free-form message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WhatsAppMessageRequest {
    pub phone: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhatsAppResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub message_id: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub details: Option<WhatsAppDetails>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhatsAppDetails {
    pub customer_name: String,
    pub phone: String,
    pub special_date_type: String,
}
