// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! One-play-per-customer spin wheel.
//!
//! The flow moves `Idle -> ReadyToSpin -> Spinning -> ResultShown`. A
//! customer who has already played is turned away with a notice and the
//! flow goes back to `Idle`; such a customer never reaches `Spinning`.
//! Prizes are always drawn by the hotel API. When no active prizes can be
//! loaded, spinning is refused.

use crate::error::{AppError, Result};
use crate::models::{Customer, Prize, SpinWheelGame, SpinWheelResult};
use crate::services::Services;
use crate::views::forms::CustomerForm;
use serde::Serialize;
use std::collections::BTreeSet;

const NO_PRIZES: &str = "No prizes are available right now. Spinning is disabled.";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum SpinPhase {
    #[default]
    Idle,
    ReadyToSpin {
        customer: Customer,
    },
    Spinning {
        customer: Customer,
    },
    ResultShown {
        customer: Customer,
        prize: Prize,
        played_at: String,
    },
}

impl SpinPhase {
    pub fn customer(&self) -> Option<&Customer> {
        match self {
            SpinPhase::Idle => None,
            SpinPhase::ReadyToSpin { customer }
            | SpinPhase::Spinning { customer }
            | SpinPhase::ResultShown { customer, .. } => Some(customer),
        }
    }
}

/// Result of presenting a customer to the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Admission {
    Ready,
    AlreadyPlayed,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SpinWheelView {
    pub phase: SpinPhase,
    pub prizes: Vec<Prize>,
    pub prizes_loaded: bool,
    pub played_customers: BTreeSet<String>,
    pub show_customer_form: bool,
    pub form: CustomerForm,
    pub loading: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SpinWheelSnapshot {
    #[serde(flatten)]
    pub view: SpinWheelView,
    pub can_spin: bool,
}

pub fn already_played_notice(name: &str) -> String {
    format!(
        "Sorry {}, you have already played the spin wheel game! 🎰\n\n\
         This game is only available for first-time players.",
        name
    )
}

impl SpinWheelView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_spin(&self) -> bool {
        matches!(self.phase, SpinPhase::ReadyToSpin { .. }) && !self.prizes.is_empty()
    }

    pub fn snapshot(&self) -> SpinWheelSnapshot {
        SpinWheelSnapshot {
            view: self.clone(),
            can_spin: self.can_spin(),
        }
    }

    /// Load the active prizes. An empty list leaves the wheel disabled.
    pub async fn load_prizes(&mut self, services: &Services) -> Result<()> {
        self.loading = true;
        self.error = None;
        let result = services.spin_wheel.active_prizes().await;
        self.loading = false;

        match result {
            Ok(prizes) => {
                self.prizes = prizes;
                self.prizes_loaded = true;
                if self.prizes.is_empty() {
                    tracing::warn!("No active prizes configured");
                    self.error = Some(NO_PRIZES.to_string());
                } else {
                    tracing::debug!(count = self.prizes.len(), "Loaded prizes");
                }
                Ok(())
            }
            Err(e) => {
                self.prizes.clear();
                self.prizes_loaded = false;
                Err(self.fail("Failed to load prizes", e))
            }
        }
    }

    /// Capture the customer and check whether they may play.
    pub async fn register_customer(
        &mut self,
        services: &Services,
        form: CustomerForm,
    ) -> Result<Admission> {
        self.form = form;
        self.notice = None;
        let draft = self.form.validate().map_err(|e| self.reject(e))?;

        // Whoever was at the wheel before is no longer admitted.
        self.phase = SpinPhase::Idle;
        self.show_customer_form = true;
        self.loading = true;
        self.error = None;
        let customer = match services.customers.find_or_create(&draft).await {
            Ok(customer) => customer,
            Err(e) => return Err(self.fail("Failed to create or find customer", e)),
        };

        if self.played_customers.contains(&customer.id) {
            self.loading = false;
            self.turn_away(&customer);
            return Ok(Admission::AlreadyPlayed);
        }

        let status = match services.customers.game_status(&customer.id).await {
            Ok(status) => status,
            Err(e) => return Err(self.fail("Failed to check game status", e)),
        };
        self.loading = false;

        if status.has_played {
            tracing::info!(customer_id = %customer.id, "Customer already played");
            self.played_customers.insert(customer.id.clone());
            self.turn_away(&customer);
            return Ok(Admission::AlreadyPlayed);
        }

        tracing::info!(customer_id = %customer.id, "Customer ready to spin");
        self.notice = Some(format!(
            "Welcome {}! You can now spin the wheel! 🎉",
            customer.name
        ));
        self.show_customer_form = false;
        self.form = CustomerForm::default();
        self.phase = SpinPhase::ReadyToSpin { customer };
        Ok(Admission::Ready)
    }

    /// Enter `Spinning`. Returns the id of the customer to play for.
    ///
    /// The screen lock is held for the whole round trip, so finding the
    /// view still `Spinning` means an earlier request was dropped before
    /// the answer arrived. That spin is retried for the same customer.
    pub fn begin_spin(&mut self) -> Result<String> {
        let customer = match &self.phase {
            SpinPhase::ReadyToSpin { customer } => Some(customer.clone()),
            SpinPhase::Spinning { customer } => {
                tracing::warn!(customer_id = %customer.id, "Retrying abandoned spin");
                Some(customer.clone())
            }
            _ => None,
        };
        let Some(customer) = customer else {
            return Err(self.reject(AppError::Validation(
                "Register a customer before spinning".to_string(),
            )));
        };

        if self.played_customers.contains(&customer.id) {
            let notice = already_played_notice(&customer.name);
            self.turn_away(&customer);
            return Err(AppError::Validation(notice));
        }
        if self.prizes.is_empty() {
            return Err(self.reject(AppError::Validation(NO_PRIZES.to_string())));
        }

        self.loading = true;
        self.error = None;
        self.notice = None;
        let id = customer.id.clone();
        self.phase = SpinPhase::Spinning { customer };
        Ok(id)
    }

    /// Leave `Spinning` with the server's answer.
    pub fn finish_spin(&mut self, outcome: Result<SpinWheelResult>) -> Result<Prize> {
        let customer = match std::mem::take(&mut self.phase) {
            SpinPhase::Spinning { customer } => customer,
            other => {
                self.phase = other;
                return Err(AppError::Validation("The wheel is not spinning".to_string()));
            }
        };
        self.loading = false;

        match outcome {
            Ok(result) => {
                let prize = self
                    .prizes
                    .iter()
                    .find(|p| p.name == result.prize.name)
                    .cloned()
                    .unwrap_or(result.prize);

                tracing::info!(customer_id = %customer.id, prize = %prize.name, "Spin wheel played");
                self.played_customers.insert(customer.id.clone());
                self.phase = SpinPhase::ResultShown {
                    customer,
                    prize: prize.clone(),
                    played_at: result.played_at,
                };
                Ok(prize)
            }
            Err(e) => {
                self.phase = SpinPhase::ReadyToSpin { customer };
                Err(self.fail("Failed to play spin wheel", e))
            }
        }
    }

    pub async fn spin(&mut self, services: &Services) -> Result<Prize> {
        let customer_id = self.begin_spin()?;
        let outcome = services.spin_wheel.play(&customer_id).await;
        self.finish_spin(outcome)
    }

    /// Another round for the current customer, which is only possible if
    /// they have not played yet.
    pub fn play_again(&mut self) -> Result<Admission> {
        let customer = self
            .phase
            .customer()
            .cloned()
            .ok_or_else(|| AppError::Validation("No customer is playing".to_string()))?;

        if self.played_customers.contains(&customer.id) {
            self.turn_away(&customer);
            return Ok(Admission::AlreadyPlayed);
        }

        self.phase = SpinPhase::ReadyToSpin { customer };
        Ok(Admission::Ready)
    }

    pub fn start_new_customer(&mut self) {
        self.phase = SpinPhase::Idle;
        self.form = CustomerForm::default();
        self.show_customer_form = true;
        self.error = None;
    }

    /// Mark the prize just won as handed over.
    pub async fn claim_prize(
        &mut self,
        services: &Services,
        notes: Option<&str>,
    ) -> Result<SpinWheelGame> {
        let shown = match &self.phase {
            SpinPhase::ResultShown {
                customer, prize, ..
            } => Some((customer.id.clone(), prize.name.clone())),
            _ => None,
        };
        let Some((customer_id, prize_name)) = shown else {
            return Err(self.reject(AppError::Validation(
                "There is no prize to claim".to_string(),
            )));
        };

        self.loading = true;
        self.error = None;
        let games = match services.spin_wheel.games_for_customer(&customer_id).await {
            Ok(games) => games,
            Err(e) => return Err(self.fail("Failed to claim prize", e)),
        };

        let unclaimed = games.iter().filter(|g| !g.is_claimed);
        let game = unclaimed
            .clone()
            .find(|g| g.prize_name == prize_name)
            .or_else(|| unclaimed.clone().next())
            .cloned();
        let Some(game) = game else {
            return Err(self.fail(
                "No unclaimed prize found",
                AppError::NotFound("No unclaimed prize found".to_string()),
            ));
        };

        match services.spin_wheel.claim_prize(&game.id, notes).await {
            Ok(claimed) => {
                self.loading = false;
                tracing::info!(game_id = %claimed.id, "Prize claimed");
                self.notice = Some(format!("{} claimed!", claimed.prize_name));
                Ok(claimed)
            }
            Err(e) => Err(self.fail("Failed to claim prize", e)),
        }
    }

    fn turn_away(&mut self, customer: &Customer) {
        self.notice = Some(already_played_notice(&customer.name));
        self.start_new_customer();
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
