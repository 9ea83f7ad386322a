// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Spin-wheel prizes, games and sessions (`/spin-wheel/`).
//!
//! The weighted draw and the one-play-per-customer rule are enforced by the
//! hotel API; this is a pass-through.

use crate::error::Result;
use crate::models::{
    ClaimRequest, Customer, GameSession, GameSessionUpdate, GameStats, PlayRequest, Prize,
    PrizeCreate, SpinWheelGame, SpinWheelResult,
};
use crate::services::api::ApiClient;

const PRIZES: &str = "/spin-wheel/prizes/";
const GAMES: &str = "/spin-wheel/games/";
const SESSIONS: &str = "/spin-wheel/sessions/";

#[derive(Clone)]
pub struct SpinWheelService {
    client: ApiClient,
}

impl SpinWheelService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    // ─── Prizes ──────────────────────────────────────────────────

    pub async fn list_prizes(&self) -> Result<Vec<Prize>> {
        self.client.list(PRIZES).await
    }

    pub async fn get_prize(&self, id: &str) -> Result<Prize> {
        self.client.get(&format!("{}{}/", PRIZES, id)).await
    }

    pub async fn create_prize(&self, prize: &PrizeCreate) -> Result<Prize> {
        self.client.post(PRIZES, prize).await
    }

    pub async fn update_prize(&self, id: &str, prize: &PrizeCreate) -> Result<Prize> {
        self.client.put(&format!("{}{}/", PRIZES, id), prize).await
    }

    pub async fn delete_prize(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("{}{}/", PRIZES, id)).await
    }

    pub async fn active_prizes(&self) -> Result<Vec<Prize>> {
        self.client.get(&format!("{}active/", PRIZES)).await
    }

    // ─── Games ───────────────────────────────────────────────────

    pub async fn list_games(&self) -> Result<Vec<SpinWheelGame>> {
        self.client.list(GAMES).await
    }

    /// Games played by one customer.
    pub async fn games_for_customer(&self, customer_id: &str) -> Result<Vec<SpinWheelGame>> {
        self.client
            .list(&format!(
                "{}?customer_id={}",
                GAMES,
                urlencoding::encode(customer_id)
            ))
            .await
    }

    pub async fn get_game(&self, id: &str) -> Result<SpinWheelGame> {
        self.client.get(&format!("{}{}/", GAMES, id)).await
    }

    /// Ask the server to draw a prize for `customer_id`.
    pub async fn play(&self, customer_id: &str) -> Result<SpinWheelResult> {
        let request = PlayRequest {
            customer_id: customer_id.to_string(),
        };
        self.client.post(&format!("{}play/", GAMES), &request).await
    }

    pub async fn claim_prize(&self, game_id: &str, notes: Option<&str>) -> Result<SpinWheelGame> {
        let request = ClaimRequest {
            notes: notes.unwrap_or_default().to_string(),
        };
        self.client
            .patch(&format!("{}{}/claim/", GAMES, game_id), &request)
            .await
    }

    pub async fn game_stats(&self) -> Result<GameStats> {
        self.client.get(&format!("{}stats/", GAMES)).await
    }

    // ─── Sessions ────────────────────────────────────────────────

    pub async fn list_sessions(&self) -> Result<Vec<GameSession>> {
        self.client.list(SESSIONS).await
    }

    pub async fn get_session(&self, id: &str) -> Result<GameSession> {
        self.client.get(&format!("{}{}/", SESSIONS, id)).await
    }

    pub async fn update_session(
        &self,
        id: &str,
        update: &GameSessionUpdate,
    ) -> Result<GameSession> {
        self.client.put(&format!("{}{}/", SESSIONS, id), update).await
    }

    pub async fn delete_session(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("{}{}/", SESSIONS, id)).await
    }

    pub async fn played_customers(&self) -> Result<Vec<GameSession>> {
        self.client
            .get(&format!("{}played-customers/", SESSIONS))
            .await
    }

    pub async fn available_customers(&self) -> Result<Vec<Customer>> {
        self.client
            .get(&format!("{}available-customers/", SESSIONS))
            .await
    }
}
