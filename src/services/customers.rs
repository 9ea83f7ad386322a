// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Customer records (`/customers/customers/`).

use crate::error::Result;
use crate::models::customer::normalize_phone;
use crate::models::{Customer, CustomerCreate, GameStatus, SpecialDate};
use crate::services::api::ApiClient;

const BASE: &str = "/customers/customers/";

#[derive(Clone)]
pub struct CustomerService {
    client: ApiClient,
}

impl CustomerService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Customer>> {
        self.client.list(BASE).await
    }

    pub async fn get(&self, id: &str) -> Result<Customer> {
        self.client.get(&format!("{}{}/", BASE, id)).await
    }

    pub async fn create(&self, customer: &CustomerCreate) -> Result<Customer> {
        self.client.post(BASE, customer).await
    }

    pub async fn update(&self, id: &str, customer: &CustomerCreate) -> Result<Customer> {
        self.client.put(&format!("{}{}/", BASE, id), customer).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("{}{}/", BASE, id)).await
    }

    /// Free-text search; the desk uses it to look customers up by phone.
    pub async fn search(&self, query: &str) -> Result<Vec<Customer>> {
        self.client
            .get(&format!("{}search/?q={}", BASE, urlencoding::encode(query)))
            .await
    }

    pub async fn special_dates(&self, id: &str) -> Result<Vec<SpecialDate>> {
        self.client
            .get(&format!("{}{}/special-dates/", BASE, id))
            .await
    }

    pub async fn game_status(&self, id: &str) -> Result<GameStatus> {
        self.client.get(&format!("{}{}/game-status/", BASE, id)).await
    }

    /// The customer whose phone matches `phone`, ignoring punctuation.
    pub async fn lookup_by_phone(&self, phone: &str) -> Result<Option<Customer>> {
        let wanted = normalize_phone(phone);
        let found = self.search(phone).await?;
        Ok(found
            .into_iter()
            .find(|c| normalize_phone(&c.phone) == wanted))
    }

    /// Reuse the customer with `draft.phone`, or create one. Keeps one
    /// record per phone number across screens.
    pub async fn find_or_create(&self, draft: &CustomerCreate) -> Result<Customer> {
        let existing = match self.lookup_by_phone(&draft.phone).await {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(error = %e, "Customer search failed, creating a new record");
                None
            }
        };

        if let Some(customer) = existing {
            tracing::debug!(customer_id = %customer.id, "Reusing existing customer");
            return Ok(customer);
        }

        let customer = self.create(draft).await?;
        tracing::info!(customer_id = %customer.id, "Created customer");
        Ok(customer)
    }
}
