// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for calendar-date arithmetic.

use chrono::{Datelike, Days, Local, NaiveDate};

/// Length of the "upcoming" reminder window, in days.
pub const UPCOMING_WINDOW_DAYS: u64 = 30;

/// Today's date on the front-desk machine.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Inclusive `[today, today + UPCOMING_WINDOW_DAYS]` range.
pub fn upcoming_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let end = today
        .checked_add_days(Days::new(UPCOMING_WINDOW_DAYS))
        .unwrap_or(NaiveDate::MAX);
    (today, end)
}

/// First and last day of the calendar month containing `date`.
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = date.with_day(1).unwrap_or(date);
    let last = first
        .checked_add_months(chrono::Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX);
    (first, last)
}

/// Parse a `YYYY-MM-DD` form value.
pub fn parse_form_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}
