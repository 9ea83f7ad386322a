// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models mirroring the hotel API resources.

pub mod customer;
pub mod event;
pub mod messaging;
pub mod offer;
pub mod page;
pub mod spin_wheel;
pub mod user;
pub mod wire;

pub use customer::{Customer, CustomerCreate, GameStatus};
pub use event::{
    BookingRequest, BookingUpdate, Event, EventBooking, EventCreate, SpecialDate,
    SpecialDateCreate, SpecialDateStats, SpecialDateType,
};
pub use messaging::{WhatsAppDetails, WhatsAppMessageRequest, WhatsAppResponse, WhatsAppWishRequest};
pub use offer::{
    Offer, OfferCreate, OfferStats, OfferStatus, OfferType, OfferUsage, OfferUsageUpdate,
    UseOfferRequest,
};
pub use page::{Listing, Page};
pub use spin_wheel::{
    ClaimRequest, GameSession, GameSessionUpdate, GameStats, PlayRequest, Prize, PrizeCreate,
    SpinWheelGame, SpinWheelResult,
};
pub use user::{AuthResponse, LoginRequest, RegisterRequest, User};
