// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Offers screen.

use crate::error::{AppError, Result};
use crate::models::{Offer, OfferCreate, OfferStatus, OfferType};
use crate::services::Services;
use crate::views::forms::{blank, required_date, REQUIRED_FIELDS};
use serde::{Deserialize, Serialize};

pub const ALL_STATUSES: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OfferForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub offer_type: OfferType,
    #[serde(default)]
    pub discount_value: f64,
    #[serde(default)]
    pub valid_from: String,
    #[serde(default)]
    pub valid_to: String,
    #[serde(default)]
    pub max_usage: Option<u32>,
    #[serde(default)]
    pub status: OfferStatus,
}

impl OfferForm {
    pub fn validate(&self) -> Result<OfferCreate> {
        if blank(&self.title)
            || blank(&self.description)
            || blank(&self.valid_from)
            || blank(&self.valid_to)
        {
            return Err(AppError::Validation(REQUIRED_FIELDS.to_string()));
        }
        if !(self.discount_value.is_finite() && self.discount_value > 0.0) {
            return Err(AppError::Validation(
                "Discount value must be greater than zero".to_string(),
            ));
        }

        Ok(OfferCreate {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            offer_type: self.offer_type,
            discount_value: self.discount_value,
            valid_from: required_date(&self.valid_from, "Valid from")?,
            valid_to: required_date(&self.valid_to, "Valid to")?,
            max_usage: self.max_usage,
            status: Some(self.status),
        })
    }

    fn from_offer(offer: &Offer) -> Self {
        Self {
            title: offer.title.clone(),
            description: offer.description.clone(),
            offer_type: offer.offer_type,
            discount_value: offer.discount_value.unwrap_or_default(),
            valid_from: offer.valid_from.to_string(),
            valid_to: offer.valid_to.to_string(),
            max_usage: offer.max_usage,
            status: offer.status,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct OffersView {
    pub offers: Vec<Offer>,
    pub status_filter: String,
    pub show_offer_form: bool,
    pub is_edit_mode: bool,
    pub editing_id: Option<String>,
    pub form: OfferForm,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OffersSnapshot {
    #[serde(flatten)]
    pub view: OffersView,
    pub filtered: Vec<Offer>,
    pub active_count: usize,
    pub inactive_count: usize,
    pub average_discount: f64,
}

impl OffersView {
    pub fn new() -> Self {
        Self {
            status_filter: ALL_STATUSES.to_string(),
            ..Self::default()
        }
    }

    pub async fn load(&mut self, services: &Services) -> Result<()> {
        self.loading = true;
        self.error = None;
        let result = services.offers.list().await;
        self.loading = false;

        match result {
            Ok(offers) => {
                self.offers = offers;
                tracing::debug!(count = self.offers.len(), "Loaded offers");
                Ok(())
            }
            Err(e) => Err(self.fail("Failed to load offers", e)),
        }
    }

    /// `all`, `active`, `inactive` or `expired`.
    pub fn set_filter(&mut self, filter: &str) -> Result<()> {
        let filter = filter.trim().to_lowercase();
        match filter.as_str() {
            ALL_STATUSES | "active" | "inactive" | "expired" => {
                self.status_filter = filter;
                Ok(())
            }
            _ => Err(AppError::Validation(format!("Unknown status filter: {}", filter))),
        }
    }

    pub fn filtered(&self) -> Vec<&Offer> {
        self.offers
            .iter()
            .filter(|offer| {
                self.status_filter == ALL_STATUSES || status_name(offer.status) == self.status_filter
            })
            .collect()
    }

    pub fn active_count(&self) -> usize {
        self.offers
            .iter()
            .filter(|o| o.status == OfferStatus::Active)
            .count()
    }

    pub fn inactive_count(&self) -> usize {
        self.offers
            .iter()
            .filter(|o| o.status != OfferStatus::Active)
            .count()
    }

    pub fn average_discount(&self) -> f64 {
        average_discount(self.offers.iter().map(|o| o.discount_value))
    }

    pub fn snapshot(&self) -> OffersSnapshot {
        OffersSnapshot {
            view: self.clone(),
            filtered: self.filtered().into_iter().cloned().collect(),
            active_count: self.active_count(),
            inactive_count: self.inactive_count(),
            average_discount: self.average_discount(),
        }
    }

    pub fn open_create_form(&mut self) {
        self.form = OfferForm::default();
        self.is_edit_mode = false;
        self.editing_id = None;
        self.show_offer_form = true;
    }

    pub fn open_edit_form(&mut self, id: &str) -> Result<()> {
        let offer = self.find(id)?;
        self.form = OfferForm::from_offer(offer);
        self.is_edit_mode = true;
        self.editing_id = Some(id.to_string());
        self.show_offer_form = true;
        Ok(())
    }

    pub fn close_form(&mut self) {
        self.show_offer_form = false;
        self.is_edit_mode = false;
        self.editing_id = None;
        self.form = OfferForm::default();
    }

    pub async fn create_offer(&mut self, services: &Services, form: OfferForm) -> Result<()> {
        self.form = form;
        let request = self.form.validate().map_err(|e| self.reject(e))?;

        self.loading = true;
        self.error = None;
        if let Err(e) = services.offers.create(&request).await {
            return Err(self.fail("Failed to create offer", e));
        }

        tracing::info!(title = %request.title, "Created offer");
        self.after_save(services).await
    }

    pub async fn update_offer(&mut self, services: &Services, id: &str, form: OfferForm) -> Result<()> {
        self.form = form;
        self.is_edit_mode = true;
        self.editing_id = Some(id.to_string());
        let request = self.form.validate().map_err(|e| self.reject(e))?;

        self.loading = true;
        self.error = None;
        if let Err(e) = services.offers.update(id, &request).await {
            return Err(self.fail("Failed to update offer", e));
        }

        tracing::info!(offer_id = %id, "Updated offer");
        self.after_save(services).await
    }

    /// Flip between active and inactive, resending the whole record.
    pub async fn toggle_status(&mut self, services: &Services, id: &str) -> Result<OfferStatus> {
        let found = self.find(id).cloned();
        let offer = found.map_err(|e| self.reject(e))?;
        let status = offer.status.toggled();
        let request = OfferCreate {
            status: Some(status),
            ..offer.to_update()
        };

        self.error = None;
        if let Err(e) = services.offers.update(id, &request).await {
            let message = match status {
                OfferStatus::Active => "Failed to activate offer",
                _ => "Failed to deactivate offer",
            };
            return Err(self.fail(message, e));
        }

        tracing::info!(offer_id = %id, status = status_name(status), "Toggled offer status");
        self.load(services).await?;
        Ok(status)
    }

    pub async fn delete_offer(&mut self, services: &Services, id: &str) -> Result<()> {
        self.loading = true;
        self.error = None;
        if let Err(e) = services.offers.delete(id).await {
            return Err(self.fail("Failed to delete offer", e));
        }
        tracing::info!(offer_id = %id, "Deleted offer");
        self.load(services).await
    }

    fn find(&self, id: &str) -> Result<&Offer> {
        self.offers
            .iter()
            .find(|o| o.id == id)
            .ok_or_else(|| AppError::NotFound("Offer not found".to_string()))
    }

    async fn after_save(&mut self, services: &Services) -> Result<()> {
        self.load(services).await?;
        self.close_form();
        Ok(())
    }

    fn reject(&mut self, err: AppError) -> AppError {
        self.error = Some(err.user_message());
        err
    }

    fn fail(&mut self, message: &str, err: AppError) -> AppError {
        tracing::warn!(error = %err, "{}", message);
        self.loading = false;
        self.error = Some(message.to_string());
        err
    }
}

fn status_name(status: OfferStatus) -> &'static str {
    match status {
        OfferStatus::Active => "active",
        OfferStatus::Inactive => "inactive",
        OfferStatus::Expired => "expired",
    }
}

/// Mean of the usable discounts, rounded to cents. Zero when none qualify.
pub fn average_discount(values: impl IntoIterator<Item = Option<f64>>) -> f64 {
    let (sum, count) = values
        .into_iter()
        .flatten()
        .filter(|v| v.is_finite())
        .fold((0.0, 0u32), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        return 0.0;
    }
    (sum / f64::from(count) * 100.0).round() / 100.0
}
