// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Landing screen after login.

use crate::models::User;
use serde::Serialize;

/// A tile on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavigationTarget {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const NAVIGATION: [NavigationTarget; 3] = [
    NavigationTarget {
        path: "/events",
        label: "Special Dates",
        icon: "🎂",
    },
    NavigationTarget {
        path: "/offers",
        label: "Offers",
        icon: "🏷️",
    },
    NavigationTarget {
        path: "/spin-wheel",
        label: "Spin Wheel",
        icon: "🎡",
    },
];

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub current_user: Option<User>,
    pub greeting: String,
    pub navigation: Vec<NavigationTarget>,
}

impl DashboardView {
    pub fn for_user(current_user: Option<User>) -> Self {
        let greeting = match &current_user {
            Some(user) => format!("Welcome, {}", user.display_name()),
            None => "Welcome".to_string(),
        };

        Self {
            current_user,
            greeting,
            navigation: NAVIGATION.to_vec(),
        }
    }
}
