// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! List envelopes used by the hotel API.
//!
//! Plain collection endpoints are paginated; the custom actions
//! (`active/`, `upcoming/`, `search/` and friends) return bare arrays.

use serde::{Deserialize, Serialize};

/// One page of results. The dashboard only ever reads the first page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// A collection listing, paginated or not.
///
/// Pagination is a server setting, so collection endpoints are decoded
/// through this rather than assuming either shape.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Page(Page<T>),
    List(Vec<T>),
}

impl<T> Listing<T> {
    pub fn into_results(self) -> Vec<T> {
        match self {
            Listing::Page(page) => page.results,
            Listing::List(items) => items,
        }
    }
}

impl<T> From<Listing<T>> for Vec<T> {
    fn from(listing: Listing<T>) -> Self {
        listing.into_results()
    }
}
