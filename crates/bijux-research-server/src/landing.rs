// SPDX-License-Identifier: Apache-2.0

//! Landing page state: one text input, an idle/searching phase, and the
//! delayed navigation that a submission schedules.

use bijux_research_api::results_location;
use bijux_research_model::{Query, EXAMPLE_QUERIES};
use std::time::Duration;

pub const DEFAULT_SEARCH_DELAY: Duration = Duration::from_millis(500);

/// Performs the page transition once a submission completes.
pub trait Navigator {
    fn navigate(&mut self, location: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingPhase {
    Idle,
    Searching,
}

#[derive(Debug, Clone)]
pub struct LandingView {
    query: String,
    phase: LandingPhase,
    delay: Duration,
}

impl Default for LandingView {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DELAY)
    }
}

impl LandingView {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            query: String::new(),
            phase: LandingPhase::Idle,
            delay,
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn phase(&self) -> LandingPhase {
        self.phase
    }

    /// Input is frozen while a search is in flight.
    pub fn set_query(&mut self, text: impl Into<String>) {
        if self.phase == LandingPhase::Idle {
            self.query = text.into();
        }
    }

    /// Copies suggestion `index` into the input. Never submits.
    pub fn choose_example(&mut self, index: usize) -> bool {
        match EXAMPLE_QUERIES.get(index) {
            Some(example) if self.phase == LandingPhase::Idle => {
                self.query = (*example).to_string();
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.phase == LandingPhase::Idle && Query::is_submittable(&self.query)
    }

    /// Starts a search. Blank input and repeated submissions yield `None`.
    pub fn submit(&mut self) -> Option<PendingNavigation> {
        if self.phase != LandingPhase::Idle {
            return None;
        }
        let query = Query::parse(&self.query).ok()?;
        self.phase = LandingPhase::Searching;
        Some(PendingNavigation {
            location: results_location(&query),
            delay: self.delay,
        })
    }
}

/// A scheduled transition to the results page. Consumed by `complete`, so
/// it navigates at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingNavigation {
    location: String,
    delay: Duration,
}

impl PendingNavigation {
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub async fn complete<N: Navigator + ?Sized>(self, navigator: &mut N) {
        tokio::time::sleep(self.delay).await;
        navigator.navigate(&self.location);
    }
}
