// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Promotional offers and usage records (`/offers/`).

use crate::error::Result;
use crate::models::{
    Offer, OfferCreate, OfferStats, OfferUsage, OfferUsageUpdate, UseOfferRequest,
};
use crate::services::api::ApiClient;

const OFFERS: &str = "/offers/offers/";
const USAGES: &str = "/offers/usages/";

#[derive(Clone)]
pub struct OffersService {
    client: ApiClient,
}

impl OffersService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Offer>> {
        self.client.list(OFFERS).await
    }

    pub async fn get(&self, id: &str) -> Result<Offer> {
        self.client.get(&format!("{}{}/", OFFERS, id)).await
    }

    pub async fn create(&self, offer: &OfferCreate) -> Result<Offer> {
        self.client.post(OFFERS, offer).await
    }

    pub async fn update(&self, id: &str, offer: &OfferCreate) -> Result<Offer> {
        self.client.put(&format!("{}{}/", OFFERS, id), offer).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("{}{}/", OFFERS, id)).await
    }

    pub async fn active(&self) -> Result<Vec<Offer>> {
        self.client.get(&format!("{}active/", OFFERS)).await
    }

    pub async fn expired(&self) -> Result<Vec<Offer>> {
        self.client.get(&format!("{}expired/", OFFERS)).await
    }

    /// Record that `customer_id` redeemed the offer.
    pub async fn use_offer(&self, offer_id: &str, customer_id: &str) -> Result<OfferUsage> {
        let request = UseOfferRequest {
            customer_id: customer_id.to_string(),
        };
        self.client
            .post(&format!("{}{}/use/", OFFERS, offer_id), &request)
            .await
    }

    pub async fn stats(&self) -> Result<OfferStats> {
        self.client.get(&format!("{}stats/", OFFERS)).await
    }

    // ─── Usages ──────────────────────────────────────────────────

    pub async fn list_usages(&self) -> Result<Vec<OfferUsage>> {
        self.client.list(USAGES).await
    }

    pub async fn get_usage(&self, id: &str) -> Result<OfferUsage> {
        self.client.get(&format!("{}{}/", USAGES, id)).await
    }

    pub async fn update_usage(&self, id: &str, update: &OfferUsageUpdate) -> Result<OfferUsage> {
        self.client.put(&format!("{}{}/", USAGES, id), update).await
    }

    pub async fn delete_usage(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("{}{}/", USAGES, id)).await
    }
}
