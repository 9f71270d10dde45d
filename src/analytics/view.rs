//! The stateful analytics view.
//!
//! The view never performs I/O. Starting a cycle hands back a
//! [`FetchTicket`]; whoever runs the request reports the outcome through
//! [`AnalyticsView::apply`] together with the ticket's generation. Outcomes
//! from any generation other than the current one are dropped, so a slow
//! superseded request can never overwrite a newer cycle.

use super::request::build_request_url;
use super::state::ViewState;
use crate::config::Config;
use crate::error::FetchError;
use crate::models::{ApiResponse, ItemInfo};
use crate::ui::components::next_spinner_frame;

/// Work order for one fetch cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    /// Cycle this request belongs to
    pub generation: u64,
    /// URL to GET, or the reason none could be built
    pub request: Result<String, FetchError>,
}

/// What a cycle was started for. A change in either field starts a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FetchTarget {
    codename: String,
    config: Config,
}

#[derive(Debug, Clone)]
pub struct AnalyticsView {
    item: ItemInfo,
    target: FetchTarget,
    state: ViewState,
    generation: u64,
    spinner_frame: usize,
}

impl AnalyticsView {
    /// Mount the view and start its first cycle.
    pub fn mount(item: ItemInfo, config: Config) -> (Self, FetchTicket) {
        let target = FetchTarget {
            codename: item.codename.clone(),
            config,
        };
        let mut view = Self {
            item,
            target,
            state: ViewState::Loading,
            generation: 0,
            spinner_frame: 0,
        };
        let ticket = view.begin_cycle();
        (view, ticket)
    }

    /// Bring the view up to date with what the host currently reports.
    ///
    /// Returns a ticket when the request target changed and a new cycle
    /// started. A change to the display name alone only updates the header.
    pub fn sync(&mut self, item: &ItemInfo, config: &Config) -> Option<FetchTicket> {
        self.item.name.clone_from(&item.name);

        if self.target.codename == item.codename && self.target.config == *config {
            return None;
        }

        self.item = item.clone();
        self.target = FetchTarget {
            codename: item.codename.clone(),
            config: config.clone(),
        };
        Some(self.begin_cycle())
    }

    /// Apply a settled outcome. Returns false when it was stale and ignored.
    pub fn apply(&mut self, generation: u64, outcome: Result<ApiResponse, FetchError>) -> bool {
        if generation != self.generation {
            tracing::debug!(
                "Discarding stale analytics outcome (generation={}, current={})",
                generation,
                self.generation
            );
            return false;
        }
        if !self.state.is_loading() {
            tracing::warn!("Cycle {} settled twice, keeping first outcome", generation);
            return false;
        }

        self.state = match outcome {
            Ok(data) => ViewState::Success { data },
            Err(err) => ViewState::Error {
                message: err.message(),
            },
        };
        tracing::info!(
            "Analytics cycle {} for {} settled: {}",
            generation,
            self.target.codename,
            self.state.label()
        );
        true
    }

    /// Advance the loading animation. Returns true when something visible changed.
    pub fn tick(&mut self) -> bool {
        if self.state.is_loading() {
            self.spinner_frame = next_spinner_frame(self.spinner_frame);
            true
        } else {
            false
        }
    }

    pub fn item(&self) -> &ItemInfo {
        &self.item
    }

    pub fn config(&self) -> &Config {
        &self.target.config
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn spinner_frame(&self) -> usize {
        self.spinner_frame
    }

    fn begin_cycle(&mut self) -> FetchTicket {
        self.generation += 1;
        self.state = ViewState::Loading;
        self.spinner_frame = 0;

        let request = build_request_url(&self.target.config.api_endpoint, &self.target.codename);
        match &request {
            Ok(url) => tracing::info!("Analytics cycle {} started: GET {}", self.generation, url),
            Err(err) => tracing::warn!(
                "Analytics cycle {} has no valid request: {}",
                self.generation,
                err
            ),
        }

        FetchTicket {
            generation: self.generation,
            request,
        }
    }
}
