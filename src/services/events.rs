// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Special dates, hotel events and event bookings (`/events/`).

use crate::error::Result;
use crate::models::{
    BookingRequest, BookingUpdate, Event, EventBooking, EventCreate, SpecialDate,
    SpecialDateCreate, SpecialDateStats,
};
use crate::services::api::ApiClient;

const SPECIAL_DATES: &str = "/events/special-dates/";
const EVENTS: &str = "/events/events/";
const BOOKINGS: &str = "/events/bookings/";

#[derive(Clone)]
pub struct EventsService {
    client: ApiClient,
}

impl EventsService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    // ─── Special Dates ───────────────────────────────────────────

    pub async fn list_special_dates(&self) -> Result<Vec<SpecialDate>> {
        self.client.list(SPECIAL_DATES).await
    }

    pub async fn get_special_date(&self, id: &str) -> Result<SpecialDate> {
        self.client.get(&format!("{}{}/", SPECIAL_DATES, id)).await
    }

    pub async fn create_special_date(&self, special_date: &SpecialDateCreate) -> Result<SpecialDate> {
        self.client.post(SPECIAL_DATES, special_date).await
    }

    pub async fn update_special_date(
        &self,
        id: &str,
        special_date: &SpecialDateCreate,
    ) -> Result<SpecialDate> {
        self.client
            .put(&format!("{}{}/", SPECIAL_DATES, id), special_date)
            .await
    }

    pub async fn delete_special_date(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("{}{}/", SPECIAL_DATES, id)).await
    }

    /// Server-side upcoming list (every date from today on).
    pub async fn upcoming_special_dates(&self) -> Result<Vec<SpecialDate>> {
        self.client.get(&format!("{}upcoming/", SPECIAL_DATES)).await
    }

    pub async fn this_month_special_dates(&self) -> Result<Vec<SpecialDate>> {
        self.client.get(&format!("{}this-month/", SPECIAL_DATES)).await
    }

    pub async fn special_date_stats(&self) -> Result<SpecialDateStats> {
        self.client.get(&format!("{}stats/", SPECIAL_DATES)).await
    }

    // ─── Events ──────────────────────────────────────────────────

    pub async fn list_events(&self) -> Result<Vec<Event>> {
        self.client.list(EVENTS).await
    }

    pub async fn get_event(&self, id: &str) -> Result<Event> {
        self.client.get(&format!("{}{}/", EVENTS, id)).await
    }

    pub async fn create_event(&self, event: &EventCreate) -> Result<Event> {
        self.client.post(EVENTS, event).await
    }

    pub async fn update_event(&self, id: &str, event: &EventCreate) -> Result<Event> {
        self.client.put(&format!("{}{}/", EVENTS, id), event).await
    }

    pub async fn delete_event(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("{}{}/", EVENTS, id)).await
    }

    pub async fn book_event(
        &self,
        event_id: &str,
        customer_id: &str,
        number_of_guests: u32,
    ) -> Result<EventBooking> {
        let request = BookingRequest {
            customer_id: customer_id.to_string(),
            number_of_guests,
        };
        self.client
            .post(&format!("{}{}/book/", EVENTS, event_id), &request)
            .await
    }

    // ─── Bookings ────────────────────────────────────────────────

    pub async fn list_bookings(&self) -> Result<Vec<EventBooking>> {
        self.client.list(BOOKINGS).await
    }

    pub async fn get_booking(&self, id: &str) -> Result<EventBooking> {
        self.client.get(&format!("{}{}/", BOOKINGS, id)).await
    }

    pub async fn update_booking(&self, id: &str, update: &BookingUpdate) -> Result<EventBooking> {
        self.client.put(&format!("{}{}/", BOOKINGS, id), update).await
    }

    pub async fn delete_booking(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("{}{}/", BOOKINGS, id)).await
    }
}
