//! Fetching and holding the analytics for the item on display.

mod request;
mod state;
mod view;

pub use request::{build_request_url, fetch_analytics, run_cycle, CODENAME_PARAM};
pub use state::ViewState;
pub use view::{AnalyticsView, FetchTicket};
