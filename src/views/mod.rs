// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Screen state held by the server, one view-model per dashboard screen.

pub mod auth;
pub mod dashboard;
pub mod events;
pub mod forms;
pub mod offers;
pub mod spin_wheel;

pub use auth::{AuthMode, AuthView, LoginForm, RegisterForm};
pub use dashboard::DashboardView;
pub use events::{EventsView, SpecialDateForm, WishForm, WishOutcome};
pub use forms::CustomerForm;
pub use offers::{OfferForm, OffersView};
pub use spin_wheel::{Admission, SpinPhase, SpinWheelView};

use tokio::sync::Mutex;

/// Each screen is locked for the whole of an action, remote calls
/// included, so actions on one screen run one at a time.
pub struct Views {
    pub auth: Mutex<AuthView>,
    pub events: Mutex<EventsView>,
    pub offers: Mutex<OffersView>,
    pub spin_wheel: Mutex<SpinWheelView>,
}

impl Views {
    pub fn new() -> Self {
        Self {
            auth: Mutex::new(AuthView::new()),
            events: Mutex::new(EventsView::new()),
            offers: Mutex::new(OffersView::new()),
            spin_wheel: Mutex::new(SpinWheelView::new()),
        }
    }

    /// Forget the operator screens a previous operator saw.
    pub async fn reset_operator_screens(&self) {
        *self.events.lock().await = EventsView::new();
        *self.offers.lock().await = OffersView::new();
    }
}
