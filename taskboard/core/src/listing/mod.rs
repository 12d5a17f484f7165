//! Remote listing: the element model, the fetch lifecycle and the HTTP client.
mod client;
mod error;

pub use client::ListingClient;
pub use error::ListingError;

use crate::date::parse_and_format;
use serde::{Deserialize, Serialize};

/// A read-only record as returned by the remote endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingElement {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl ListingElement {
    /// Letter shown when there is no avatar image.
    pub fn initial(&self) -> Option<String> {
        self.name
            .chars()
            .next()
            .map(|first| first.to_uppercase().collect())
    }

    /// Display date, or `None` when the source sent no (or a blank) timestamp.
    pub fn created_on(&self) -> Option<String> {
        self.created_at
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .map(parse_and_format)
    }
}

/// Where the last fetch stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Fetch lifecycle for one listing view.
///
/// `elements` survives a failed refresh: only a successful fetch replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingState {
    phase: FetchPhase,
    elements: Vec<ListingElement>,
}

impl ListingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters `Loading`, clearing any previous error.
    ///
    /// Returns `false` without touching anything when a fetch is already in
    /// flight; callers must not issue a request in that case.
    pub fn begin_fetch(&mut self) -> bool {
        if self.loading() {
            tracing::debug!("listing fetch already in flight, ignoring");
            return false;
        }
        self.phase = FetchPhase::Loading;
        true
    }

    /// Applies the outcome of the request started by [`ListingState::begin_fetch`].
    pub fn finish(&mut self, outcome: Result<Vec<ListingElement>, ListingError>) {
        match outcome {
            Ok(elements) => {
                tracing::debug!(count = elements.len(), "listing loaded");
                self.elements = elements;
                self.phase = FetchPhase::Loaded;
            }
            Err(e) => {
                tracing::error!(error = %e, "error fetching listing");
                self.phase = FetchPhase::Failed(e.user_message());
            }
        }
    }

    pub fn phase(&self) -> &FetchPhase {
        &self.phase
    }

    pub fn loading(&self) -> bool {
        matches!(self.phase, FetchPhase::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            FetchPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn elements(&self) -> &[ListingElement] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The refresh control is only live while nothing is loading.
    pub fn can_refresh(&self) -> bool {
        !self.loading()
    }
}
