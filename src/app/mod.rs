//! Application state and logic for the TUI.
//!
//! [`App`] owns the host, the analytics view and the HTTP client. Fetches
//! run as spawned tokio tasks that report back through an unbounded channel
//! of [`AppMessage`]s; the event loop feeds those into
//! [`App::handle_message`].

mod handlers;
mod messages;

pub use messages::AppMessage;

use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::analytics::{run_cycle, AnalyticsView, FetchTicket};
use crate::config::Config;
use crate::host::{ConfigProvider, ItemInfoProvider, StaticHost};
use crate::traits::HttpClient;

pub struct App {
    /// Where item identity and configuration come from
    pub host: StaticHost,
    /// The analytics panel
    pub view: AnalyticsView,
    /// Client used for every fetch cycle
    client: Arc<dyn HttpClient>,
    /// Sender handed to fetch tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver, taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Task running the current cycle's request
    fetch_task: Option<JoinHandle<()>>,
    /// Set when the user asked to quit
    pub should_quit: bool,
    /// Set when something visible changed since the last draw
    pub needs_redraw: bool,
}

impl App {
    /// Create the app and start the first fetch cycle.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(host: StaticHost, client: Arc<dyn HttpClient>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let (view, ticket) = AnalyticsView::mount(host.item_info(), host.config());

        let mut app = Self {
            host,
            view,
            client,
            message_tx,
            message_rx: Some(message_rx),
            fetch_task: None,
            should_quit: false,
            needs_redraw: true,
        };
        app.spawn_fetch(ticket);
        app
    }

    /// Re-read the host and start a new cycle if the request target changed.
    pub fn refresh(&mut self) {
        let item = self.host.item_info();
        let config = self.host.config();
        let renamed = self.view.item().name != item.name;
        if let Some(ticket) = self.view.sync(&item, &config) {
            self.spawn_fetch(ticket);
            self.mark_dirty();
        } else if renamed {
            self.mark_dirty();
        }
    }

    /// Move the host to the next item.
    pub fn next_item(&mut self) {
        self.host.select_next();
        self.refresh();
    }

    /// Move the host to the previous item.
    pub fn previous_item(&mut self) {
        self.host.select_previous();
        self.refresh();
    }

    /// Replace the host configuration.
    pub fn set_config(&mut self, config: Config) {
        self.host.set_config(config);
        self.refresh();
    }

    /// Advance animations.
    pub fn tick(&mut self) {
        if self.view.tick() {
            self.mark_dirty();
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Stop the in-flight request, if any, and flag the loop to exit.
    pub fn quit(&mut self) {
        if let Some(handle) = self.fetch_task.take() {
            handle.abort();
        }
        self.should_quit = true;
    }

    /// Whether a fetch task is still running.
    pub fn is_fetching(&self) -> bool {
        self.fetch_task
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    fn spawn_fetch(&mut self, ticket: FetchTicket) {
        // The generation check in the view is what keeps stale results out;
        // aborting just frees the superseded request early.
        if let Some(previous) = self.fetch_task.take() {
            previous.abort();
        }

        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        let FetchTicket {
            generation,
            request,
        } = ticket;

        self.fetch_task = Some(tokio::spawn(async move {
            let outcome = run_cycle(client.as_ref(), request).await;
            // Receiver gone means the app is shutting down.
            let _ = tx.send(AppMessage::AnalyticsSettled {
                generation,
                outcome,
            });
        }));
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Some(handle) = self.fetch_task.take() {
            handle.abort();
        }
    }
}
