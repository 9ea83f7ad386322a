// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Special-dates screen: reminders list, CRUD form and the send-wish modal.

use crate::error::{AppError, Result};
use crate::models::{
    CustomerCreate, Offer, OfferStatus, OfferType, SpecialDate, SpecialDateCreate,
    SpecialDateType, WhatsAppWishRequest,
};
use crate::services::messaging::sms_link;
use crate::services::Services;
use crate::time_utils::{month_bounds, upcoming_window};
use crate::views::forms::{blank, non_blank, required_date, CustomerForm, REQUIRED_FIELDS};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const ALL_FILTER: &str = "All";

/// A row of the special-dates table. `id` is `None` for the provisional
/// row shown after a quick customer add, until the next reload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecialDateRow {
    pub id: Option<String>,
    pub customer_name: String,
    pub phone: String,
    pub special_date_type: SpecialDateType,
    pub date: NaiveDate,
    pub notes: Option<String>,
}

impl From<SpecialDate> for SpecialDateRow {
    fn from(sd: SpecialDate) -> Self {
        Self {
            id: Some(sd.id),
            customer_name: sd.customer_name,
            phone: sd.customer_phone,
            special_date_type: sd.special_date_type,
            date: sd.date,
            notes: sd.notes,
        }
    }
}

/// Offer that can be attached to a wish.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvailableOffer {
    pub id: String,
    pub title: String,
    pub discount: f64,
    pub offer_type: OfferType,
}

impl AvailableOffer {
    pub fn details(&self) -> String {
        format!(
            "Special Offer: {} - {}{} off",
            self.title,
            self.discount,
            self.offer_type.unit()
        )
    }
}

impl From<Offer> for AvailableOffer {
    fn from(offer: Offer) -> Self {
        Self {
            id: offer.id,
            title: offer.title,
            discount: offer.discount_value.unwrap_or(0.0),
            offer_type: offer.offer_type,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpecialDateForm {
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub special_date_type: String,
    /// `YYYY-MM-DD`
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub notes: String,
}

struct ValidSpecialDate {
    customer: CustomerCreate,
    special_date_type: SpecialDateType,
    date: NaiveDate,
    notes: Option<String>,
}

impl SpecialDateForm {
    fn validate(&self) -> Result<ValidSpecialDate> {
        if blank(&self.customer_name)
            || blank(&self.phone)
            || blank(&self.special_date_type)
            || blank(&self.date)
        {
            return Err(AppError::Validation(REQUIRED_FIELDS.to_string()));
        }

        let date = required_date(&self.date, "Date")?;
        Ok(ValidSpecialDate {
            customer: CustomerCreate {
                name: self.customer_name.trim().to_string(),
                email: non_blank(&self.email),
                phone: self.phone.trim().to_string(),
                birth_date: date,
            },
            special_date_type: SpecialDateType::from(self.special_date_type.trim()),
            date,
            notes: non_blank(&self.notes),
        })
    }

    fn from_row(row: &SpecialDateRow) -> Self {
        Self {
            customer_name: row.customer_name.clone(),
            email: String::new(),
            phone: row.phone.clone(),
            special_date_type: row.special_date_type.to_string(),
            date: row.date.to_string(),
            notes: row.notes.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommunicationMethod {
    Whatsapp,
    Sms,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WishForm {
    #[serde(default)]
    pub communication_method: Option<CommunicationMethod>,
    #[serde(default)]
    pub custom_message: String,
    #[serde(default)]
    pub include_offer: bool,
    #[serde(default)]
    pub selected_offer_id: String,
}

/// What happened to a wish.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum WishOutcome {
    Whatsapp {
        message_id: Option<String>,
        summary: String,
    },
    /// The operator opens `link` in their messaging app.
    Sms { link: String, summary: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeCounts {
    pub birthday: usize,
    pub anniversary: usize,
    pub wedding_anniversary: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EventsView {
    pub special_dates: Vec<SpecialDateRow>,
    pub available_offers: Vec<AvailableOffer>,
    pub selected_filter: String,
    pub show_special_date_form: bool,
    pub is_edit_mode: bool,
    pub editing_id: Option<String>,
    pub form: SpecialDateForm,
    pub show_customer_form: bool,
    pub show_send_wish_modal: bool,
    pub selected_special_date: Option<SpecialDateRow>,
    pub wish_form: WishForm,
    pub loading: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
}

/// Everything the events screen renders, computed for `today`.
#[derive(Debug, Clone, Serialize)]
pub struct EventsSnapshot {
    #[serde(flatten)]
    pub view: EventsView,
    pub filter_title: String,
    pub filtered: Vec<SpecialDateRow>,
    pub upcoming: Vec<SpecialDateRow>,
    pub this_month: Vec<SpecialDateRow>,
    pub counts: TypeCounts,
    pub special_date_types: Vec<SpecialDateType>,
}

impl EventsView {
    pub fn new() -> Self {
        Self {
            selected_filter: ALL_FILTER.to_string(),
            ..Self::default()
        }
    }

    /// Fetch special dates and active offers. Offers are optional.
    pub async fn load(&mut self, services: &Services) -> Result<()> {
        self.load_special_dates(services).await?;
        self.load_offers(services).await;
        Ok(())
    }

    pub async fn load_special_dates(&mut self, services: &Services) -> Result<()> {
        self.loading = true;
        self.error = None;
        let result = services.events.list_special_dates().await;
        self.loading = false;

        match result {
            Ok(rows) => {
                self.special_dates = rows.into_iter().map(Into::into).collect();
                tracing::debug!(count = self.special_dates.len(), "Loaded special dates");
                Ok(())
            }
            Err(e) => Err(self.fail("Failed to load special dates", e)),
        }
    }

    /// Offers selectable in the wish modal: every active one in the listing.
    pub async fn load_offers(&mut self, services: &Services) {
        match services.offers.list().await {
            Ok(offers) => {
                self.available_offers = offers
                    .into_iter()
                    .filter(|offer| offer.status == OfferStatus::Active)
                    .map(Into::into)
                    .collect();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load offers for wishes");
                self.available_offers.clear();
            }
        }
    }

    pub fn set_filter(&mut self, filter: &str) {
        self.selected_filter = if filter.trim().is_empty() {
            ALL_FILTER.to_string()
        } else {
            filter.trim().to_string()
        };
    }

    pub fn filter_title(&self) -> String {
        if self.selected_filter == ALL_FILTER {
            "All Special Dates".to_string()
        } else {
            format!("{} Dates", self.selected_filter)
        }
    }

    pub fn filtered(&self) -> Vec<&SpecialDateRow> {
        if self.selected_filter == ALL_FILTER {
            return self.special_dates.iter().collect();
        }
        self.special_dates
            .iter()
            .filter(|row| row.special_date_type.as_str() == self.selected_filter)
            .collect()
    }

    /// Dates in the next thirty days, soonest first.
    pub fn upcoming(&self, today: NaiveDate) -> Vec<&SpecialDateRow> {
        let (start, end) = upcoming_window(today);
        let mut rows: Vec<_> = self
            .special_dates
            .iter()
            .filter(|row| row.date >= start && row.date <= end)
            .collect();
        rows.sort_by_key(|row| row.date);
        rows
    }

    pub fn this_month(&self, today: NaiveDate) -> Vec<&SpecialDateRow> {
        let (first, last) = month_bounds(today);
        self.special_dates
            .iter()
            .filter(|row| row.date >= first && row.date <= last)
            .collect()
    }

    pub fn count_of(&self, kind: &SpecialDateType) -> usize {
        self.special_dates
            .iter()
            .filter(|row| &row.special_date_type == kind)
            .count()
    }

    pub fn counts(&self) -> TypeCounts {
        TypeCounts {
            birthday: self.count_of(&SpecialDateType::Birthday),
            anniversary: self.count_of(&SpecialDateType::Anniversary),
            wedding_anniversary: self.count_of(&SpecialDateType::WeddingAnniversary),
        }
    }

    pub fn snapshot(&self, today: NaiveDate) -> EventsSnapshot {
        EventsSnapshot {
            view: self.clone(),
            filter_title: self.filter_title(),
            filtered: self.filtered().into_iter().cloned().collect(),
            upcoming: self.upcoming(today).into_iter().cloned().collect(),
            this_month: self.this_month(today).into_iter().cloned().collect(),
            counts: self.counts(),
            special_date_types: SpecialDateType::FORM_CHOICES.to_vec(),
        }
    }

    pub fn open_create_form(&mut self) {
        self.form = SpecialDateForm {
            special_date_type: SpecialDateType::Birthday.to_string(),
            ..SpecialDateForm::default()
        };
        self.is_edit_mode = false;
        self.editing_id = None;
        self.show_special_date_form = true;
    }

    /// Open the form pre-filled with an existing row.
    pub fn open_edit_form(&mut self, id: &str) -> Result<()> {
        let row = self.find_row(id)?;
        self.form = SpecialDateForm::from_row(row);
        self.is_edit_mode = true;
        self.editing_id = Some(id.to_string());
        self.show_special_date_form = true;
        Ok(())
    }

    pub fn close_form(&mut self) {
        self.show_special_date_form = false;
        self.is_edit_mode = false;
        self.editing_id = None;
        self.form = SpecialDateForm::default();
    }

    /// Create a special date, reusing the customer with the same phone.
    pub async fn create_special_date(
        &mut self,
        services: &Services,
        form: SpecialDateForm,
    ) -> Result<()> {
        self.form = form;
        let valid = self.form.validate().map_err(|e| self.reject(e))?;

        self.loading = true;
        self.error = None;
        let customer = match services.customers.find_or_create(&valid.customer).await {
            Ok(customer) => customer,
            Err(e) => return Err(self.fail("Failed to create customer", e)),
        };

        let request = SpecialDateCreate {
            customer: customer.id,
            special_date_type: valid.special_date_type,
            date: valid.date,
            notes: valid.notes,
        };
        if let Err(e) = services.events.create_special_date(&request).await {
            return Err(self.fail("Failed to create special date", e));
        }

        tracing::info!(customer = %request.customer, kind = %request.special_date_type, "Created special date");
        self.after_save(services).await
    }

    pub async fn update_special_date(
        &mut self,
        services: &Services,
        id: &str,
        form: SpecialDateForm,
    ) -> Result<()> {
        self.form = form;
        self.is_edit_mode = true;
        self.editing_id = Some(id.to_string());
        let valid = self.form.validate().map_err(|e| self.reject(e))?;
        let known = self.find_row(id).map(|_| ());
        known.map_err(|e| self.reject(e))?;

        self.loading = true;
        self.error = None;
        let customer = match services.customers.lookup_by_phone(&valid.customer.phone).await {
            Ok(Some(customer)) => customer,
            Ok(None) => {
                return Err(self.fail(
                    "Customer not found",
                    AppError::NotFound("Customer not found".to_string()),
                ))
            }
            Err(e) => return Err(self.fail("Failed to update special date", e)),
        };

        let request = SpecialDateCreate {
            customer: customer.id,
            special_date_type: valid.special_date_type,
            date: valid.date,
            notes: valid.notes,
        };
        if let Err(e) = services.events.update_special_date(id, &request).await {
            return Err(self.fail("Failed to update special date", e));
        }

        tracing::info!(special_date_id = %id, "Updated special date");
        self.after_save(services).await
    }

    pub async fn delete_special_date(&mut self, services: &Services, id: &str) -> Result<()> {
        self.loading = true;
        self.error = None;
        if let Err(e) = services.events.delete_special_date(id).await {
            return Err(self.fail("Failed to delete special date", e));
        }
        tracing::info!(special_date_id = %id, "Deleted special date");
        self.load_special_dates(services).await
    }

    /// Create a customer from the quick-add form and show a provisional
    /// birthday row for them.
    pub async fn add_customer(&mut self, services: &Services, form: CustomerForm) -> Result<()> {
        let draft = form.validate().map_err(|e| self.reject(e))?;

        self.loading = true;
        self.error = None;
        let customer = match services.customers.create(&draft).await {
            Ok(customer) => customer,
            Err(e) => return Err(self.fail("Failed to create customer", e)),
        };
        self.loading = false;

        tracing::info!(customer_id = %customer.id, "Added customer");
        self.special_dates.push(SpecialDateRow {
            id: None,
            customer_name: customer.name,
            phone: customer.phone,
            special_date_type: SpecialDateType::Birthday,
            date: customer.birth_date,
            notes: None,
        });
        self.show_customer_form = false;
        Ok(())
    }

    pub fn open_send_wish(&mut self, id: &str) -> Result<()> {
        let row = self.find_row(id)?.clone();
        self.selected_special_date = Some(row);
        self.wish_form = WishForm::default();
        self.show_send_wish_modal = true;
        Ok(())
    }

    pub fn close_send_wish(&mut self) {
        self.show_send_wish_modal = false;
        self.selected_special_date = None;
        self.wish_form = WishForm::default();
    }

    /// Open the wish modal for the nearest upcoming date.
    pub fn send_wish_to_all(&mut self, today: NaiveDate) -> Option<SpecialDateRow> {
        let first = self.upcoming(today).first().map(|row| (*row).clone());
        match first {
            Some(row) => {
                self.selected_special_date = Some(row.clone());
                self.wish_form = WishForm::default();
                self.show_send_wish_modal = true;
                self.notice = None;
                Some(row)
            }
            None => {
                self.notice = Some("No upcoming special dates to send wishes to.".to_string());
                None
            }
        }
    }

    /// Send a wish for the row `id` over the chosen channel.
    pub async fn send_wish(
        &mut self,
        services: &Services,
        id: &str,
        wish: WishForm,
    ) -> Result<WishOutcome> {
        let found = self.find_row(id).cloned();
        let row = found.map_err(|e| self.reject(e))?;
        self.selected_special_date = Some(row.clone());
        self.wish_form = wish;

        let method = self.wish_form.communication_method.ok_or_else(|| {
            self.reject(AppError::Validation(
                "Please select a communication method".to_string(),
            ))
        })?;
        let offer = if self.wish_form.include_offer {
            let offer = self
                .available_offers
                .iter()
                .find(|o| o.id == self.wish_form.selected_offer_id)
                .cloned();
            Some(offer.ok_or_else(|| {
                self.reject(AppError::Validation("Please select an offer".to_string()))
            })?)
        } else {
            None
        };

        let outcome = match method {
            CommunicationMethod::Whatsapp => {
                self.send_whatsapp(services, &row, offer.as_ref()).await
            }
            CommunicationMethod::Sms => Ok(self.compose_sms(services, &row, offer.as_ref())),
        };
        self.close_send_wish();

        match outcome {
            Ok(outcome) => {
                self.notice = Some(match &outcome {
                    WishOutcome::Whatsapp { summary, .. } | WishOutcome::Sms { summary, .. } => {
                        summary.clone()
                    }
                });
                Ok(outcome)
            }
            Err(e) => {
                let message = format!("Failed to send WhatsApp message: {}", e.user_message());
                Err(self.fail(&message, e))
            }
        }
    }

    async fn send_whatsapp(
        &self,
        services: &Services,
        row: &SpecialDateRow,
        offer: Option<&AvailableOffer>,
    ) -> Result<WishOutcome> {
        let request = WhatsAppWishRequest {
            customer_name: row.customer_name.clone(),
            phone: row.phone.clone(),
            special_date_type: row.special_date_type.to_string(),
            custom_message: self.wish_form.custom_message.trim().to_string(),
            offer_details: offer.map(AvailableOffer::details).unwrap_or_default(),
        };

        let response = services.messaging.send_wish(&request).await?;
        if !response.success {
            let reason = response.error.unwrap_or(response.message);
            return Err(AppError::Api(reason));
        }

        tracing::info!(phone = %row.phone, message_id = ?response.message_id, "WhatsApp wish sent");
        Ok(WishOutcome::Whatsapp {
            summary: self.summary(row, offer, "WhatsApp 📱", response.message_id.as_deref()),
            message_id: response.message_id,
        })
    }

    fn compose_sms(
        &self,
        services: &Services,
        row: &SpecialDateRow,
        offer: Option<&AvailableOffer>,
    ) -> WishOutcome {
        let details = offer.map(AvailableOffer::details);
        let body = services.messaging.compose_wish(
            &row.customer_name,
            row.special_date_type.as_str(),
            details.as_deref(),
            Some(self.wish_form.custom_message.trim()),
        );

        tracing::info!(phone = %row.phone, "SMS wish composed");
        WishOutcome::Sms {
            link: sms_link(&row.phone, &body),
            summary: self.summary(row, offer, "SMS 💬", None),
        }
    }

    fn summary(
        &self,
        row: &SpecialDateRow,
        offer: Option<&AvailableOffer>,
        method: &str,
        message_id: Option<&str>,
    ) -> String {
        let mut lines = vec![
            format!("🎉 {} wishes sent!", row.special_date_type),
            format!("Customer: {}", row.customer_name),
        ];
        if let Some(offer) = offer {
            lines.push(format!(
                "Offer: {} ({}{} off)",
                offer.title,
                offer.discount,
                offer.offer_type.unit()
            ));
        }
        lines.push(format!("Method: {}", method));
        lines.push(format!("Phone: {}", row.phone));
        let custom = self.wish_form.custom_message.trim();
        if !custom.is_empty() {
            lines.push(format!("Custom Message: {}", custom));
        }
        if let Some(id) = message_id {
            lines.push(format!("Message ID: {}", id));
        }
        lines.join("\n")
    }

    fn find_row(&self, id: &str) -> Result<&SpecialDateRow> {
        self.special_dates
            .iter()
            .find(|row| row.id.as_deref() == Some(id))
            .ok_or_else(|| AppError::NotFound("Special date not found".to_string()))
    }

    async fn after_save(&mut self, services: &Services) -> Result<()> {
        self.load_special_dates(services).await?;
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

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn row(id: &str, kind: SpecialDateType, date: NaiveDate) -> SpecialDateRow {
        SpecialDateRow {
            id: Some(id.to_string()),
            customer_name: format!("Guest {}", id),
            phone: "555-0000".to_string(),
            special_date_type: kind,
            date,
            notes: None,
        }
    }

    fn view() -> EventsView {
        let mut view = EventsView::new();
        view.special_dates = vec![
            row("1", SpecialDateType::Birthday, date(2026, 5, 20)),
            row("2", SpecialDateType::Anniversary, date(2026, 5, 2)),
            row("3", SpecialDateType::Birthday, date(2026, 6, 30)),
            row("4", SpecialDateType::WeddingAnniversary, date(2026, 6, 13)),
            row("5", SpecialDateType::Graduation, date(2026, 4, 30)),
        ];
        view
    }

    #[test]
    fn test_upcoming_is_windowed_and_sorted() {
        let today = date(2026, 5, 15);
        let ids: Vec<_> = view()
            .upcoming(today)
            .iter()
            .map(|r| r.id.clone().unwrap())
            .collect();
        assert_eq!(ids, vec!["1", "4"]);
    }

    #[test]
    fn test_upcoming_includes_both_window_edges() {
        let mut view = EventsView::new();
        view.special_dates = vec![
            row("late", SpecialDateType::Birthday, date(2026, 6, 14)),
            row("today", SpecialDateType::Birthday, date(2026, 5, 15)),
            row("past", SpecialDateType::Birthday, date(2026, 5, 14)),
            row("out", SpecialDateType::Birthday, date(2026, 6, 15)),
        ];
        let ids: Vec<_> = view
            .upcoming(date(2026, 5, 15))
            .iter()
            .map(|r| r.id.clone().unwrap())
            .collect();
        assert_eq!(ids, vec!["today", "late"]);
    }

    #[test]
    fn test_this_month() {
        let ids: Vec<_> = view()
            .this_month(date(2026, 5, 15))
            .iter()
            .map(|r| r.id.clone().unwrap())
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_filter_and_title() {
        let mut view = view();
        assert_eq!(view.filter_title(), "All Special Dates");
        assert_eq!(view.filtered().len(), 5);

        view.set_filter("Birthday");
        assert_eq!(view.filter_title(), "Birthday Dates");
        assert_eq!(view.filtered().len(), 2);

        view.set_filter("Wedding Anniversary");
        assert_eq!(view.filtered().len(), 1);

        view.set_filter("");
        assert_eq!(view.selected_filter, ALL_FILTER);
    }

    #[test]
    fn test_counts() {
        let counts = view().counts();
        assert_eq!(
            counts,
            TypeCounts {
                birthday: 2,
                anniversary: 1,
                wedding_anniversary: 1
            }
        );
    }

    #[test]
    fn test_form_requires_all_fields() {
        let complete = SpecialDateForm {
            customer_name: "Maria".into(),
            email: String::new(),
            phone: "555-1234".into(),
            special_date_type: "Birthday".into(),
            date: "2026-05-20".into(),
            notes: String::new(),
        };
        assert!(complete.validate().is_ok());

        let clears: [fn(&mut SpecialDateForm); 4] = [
            |f| f.customer_name.clear(),
            |f| f.phone.clear(),
            |f| f.special_date_type.clear(),
            |f| f.date.clear(),
        ];
        for clear in clears {
            let mut form = complete.clone();
            clear(&mut form);
            assert!(matches!(form.validate(), Err(AppError::Validation(_))));
        }
    }

    #[test]
    fn test_validated_customer_uses_special_date_as_birth_date() {
        let form = SpecialDateForm {
            customer_name: " Maria ".into(),
            email: "maria@hotel.test".into(),
            phone: "555-1234".into(),
            special_date_type: "Anniversary".into(),
            date: "2026-05-20".into(),
            notes: "  ".into(),
        };
        let valid = form.validate().unwrap();
        assert_eq!(valid.customer.name, "Maria");
        assert_eq!(valid.customer.birth_date, date(2026, 5, 20));
        assert_eq!(valid.special_date_type, SpecialDateType::Anniversary);
        assert_eq!(valid.notes, None);
    }

    #[test]
    fn test_send_wish_to_all_without_upcoming_sets_notice() {
        let mut view = EventsView::new();
        assert!(view.send_wish_to_all(date(2026, 5, 15)).is_none());
        assert_eq!(
            view.notice.as_deref(),
            Some("No upcoming special dates to send wishes to.")
        );
        assert!(!view.show_send_wish_modal);
    }

    #[test]
    fn test_send_wish_to_all_opens_nearest() {
        let mut view = view();
        let row = view.send_wish_to_all(date(2026, 5, 15)).unwrap();
        assert_eq!(row.id.as_deref(), Some("1"));
        assert!(view.show_send_wish_modal);
    }

    #[test]
    fn test_offer_details_text() {
        let offer = AvailableOffer {
            id: "9".into(),
            title: "Spa Day".into(),
            discount: 20.0,
            offer_type: OfferType::Percentage,
        };
        assert_eq!(offer.details(), "Special Offer: Spa Day - 20% off");

        let fixed = AvailableOffer {
            discount: 12.5,
            offer_type: OfferType::Fixed,
            ..offer
        };
        assert_eq!(fixed.details(), "Special Offer: Spa Day - 12.5$ off");
    }

    #[test]
    fn test_open_edit_form_prefills() {
        let mut view = view();
        view.open_edit_form("2").unwrap();
        assert!(view.is_edit_mode);
        assert_eq!(view.form.special_date_type, "Anniversary");
        assert_eq!(view.form.date, "2026-05-02");
        assert!(matches!(
            view.open_edit_form("missing"),
            Err(AppError::NotFound(_))
        ));
    }
}
