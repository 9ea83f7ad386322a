// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Spin-wheel prizes, plays and per-customer sessions.
//!
//! The prize draw itself happens on the hotel API; `probability` is only
//! shown to staff.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prize {
    #[serde(deserialize_with = "super::wire::id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    /// Relative weight (percent) used by the server-side draw.
    pub probability: u32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

fn default_true() -> bool {
    true
}

/// Payload for creating or replacing a prize.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrizeCreate {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub probability: u32,
    pub is_active: bool,
}

/// One recorded play.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinWheelGame {
    #[serde(deserialize_with = "super::wire::id")]
    pub id: String,
    #[serde(deserialize_with = "super::wire::id")]
    pub customer: String,
    #[serde(default)]
    pub customer_name: String,
    pub played_at: String,
    #[serde(deserialize_with = "super::wire::id")]
    pub prize_won: String,
    #[serde(default)]
    pub prize_name: String,
    #[serde(default)]
    pub prize_icon: String,
    pub is_claimed: bool,
    #[serde(default)]
    pub claimed_at: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Per-customer participation record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    #[serde(deserialize_with = "super::wire::id")]
    pub id: String,
    #[serde(deserialize_with = "super::wire::id")]
    pub customer: String,
    #[serde(default)]
    pub customer_name: String,
    pub has_played: bool,
    #[serde(default)]
    pub first_play_date: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Partial session update.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GameSessionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_played: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_play_date: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayRequest {
    pub customer_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClaimRequest {
    pub notes: String,
}

/// Outcome of a play, decided by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinWheelResult {
    pub prize: Prize,
    pub customer_name: String,
    pub played_at: String,
    pub is_first_play: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameStats {
    pub total_games: u64,
    pub claimed_prizes: u64,
    pub unclaimed_prizes: u64,
    #[serde(default)]
    pub prize_distribution: HashMap<String, u64>,
}
