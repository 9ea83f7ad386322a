// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Customer outreach: WhatsApp through the hotel API, SMS as a deep link.

use crate::error::Result;
use crate::models::customer::normalize_phone;
use crate::models::{WhatsAppMessageRequest, WhatsAppResponse, WhatsAppWishRequest};
use crate::services::api::ApiClient;

#[derive(Clone)]
pub struct MessagingService {
    client: ApiClient,
    hotel_name: String,
}

impl MessagingService {
    pub fn new(client: ApiClient, hotel_name: impl Into<String>) -> Self {
        Self {
            client,
            hotel_name: hotel_name.into(),
        }
    }

    pub fn hotel_name(&self) -> &str {
        &self.hotel_name
    }

    /// Have the hotel API send a templated wish over WhatsApp.
    pub async fn send_wish(&self, request: &WhatsAppWishRequest) -> Result<WhatsAppResponse> {
        self.client.post("/whatsapp/send-wish/", request).await
    }

    /// Have the hotel API send a free-form WhatsApp message.
    pub async fn send_message(&self, request: &WhatsAppMessageRequest) -> Result<WhatsAppResponse> {
        self.client.post("/whatsapp/send-message/", request).await
    }

    /// Text of an SMS wish signed with the hotel name.
    pub fn compose_wish(
        &self,
        customer_name: &str,
        occasion: &str,
        offer_details: Option<&str>,
        custom_message: Option<&str>,
    ) -> String {
        compose_wish(
            customer_name,
            occasion,
            offer_details,
            custom_message,
            &self.hotel_name,
        )
    }
}

/// Build the SMS wish body.
pub fn compose_wish(
    customer_name: &str,
    occasion: &str,
    offer_details: Option<&str>,
    custom_message: Option<&str>,
    hotel_name: &str,
) -> String {
    let mut message = format!(
        "🎉 Happy {}! {}, we're thinking of you on your special day!",
        occasion, customer_name
    );

    if let Some(offer) = offer_details.filter(|s| !s.is_empty()) {
        message.push_str(&format!("\n\n🎁 {}", offer));
    }

    if let Some(custom) = custom_message.filter(|s| !s.is_empty()) {
        message.push_str(&format!("\n\n💝 {}", custom));
    }

    message.push_str(&format!("\n\nBest wishes from your friends at {}!", hotel_name));
    message
}

/// `sms:` deep link that opens the operator's messaging app.
pub fn sms_link(phone: &str, body: &str) -> String {
    format!(
        "sms:{}?body={}",
        normalize_phone(phone),
        urlencoding::encode(body)
    )
}
