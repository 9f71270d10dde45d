use ga4_panel::adapters::ReqwestHttpClient;
use ga4_panel::app::{App, AppMessage};
use ga4_panel::cli::{parse_args, version_string, CliCommand, RunOptions, USAGE};
use ga4_panel::config::ConfigSources;
use ga4_panel::host::StaticHost;
use ga4_panel::logging::init_file_logging;
use ga4_panel::terminal::{setup_panic_hook, TerminalManager};
use ga4_panel::ui;

use color_eyre::{eyre::eyre, Result};
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Spinner frame interval
const TICK_INTERVAL: Duration = Duration::from_millis(120);

fn main() -> Result<()> {
    let options = match parse_args(std::env::args()) {
        Ok(CliCommand::Version) => {
            println!("{}", version_string());
            return Ok(());
        }
        Ok(CliCommand::Help) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Ok(CliCommand::Run(options)) => options,
        Err(e) => {
            eprintln!("Error: {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    color_eyre::install()?;

    if let Some(path) = &options.log_path {
        init_file_logging(path)?;
    }

    // Validate configuration before touching the terminal so errors print normally
    let host = build_host(&options)?;

    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    let mut term_manager = TerminalManager::new()?;

    let result = runtime.block_on(async {
        let client = Arc::new(ReqwestHttpClient::new());
        let mut app = App::new(host, client);
        run_app(term_manager.terminal(), &mut app).await
    });

    term_manager.restore();
    result
}

fn build_host(options: &RunOptions) -> Result<StaticHost> {
    let mut sources = ConfigSources::from_env();
    if let Some(path) = &options.config_path {
        sources = sources.with_file(path);
    }
    if let Some(endpoint) = &options.endpoint {
        sources = sources.with_flag_endpoint(endpoint);
    }

    let config = sources.load()?;
    StaticHost::new(options.items.clone(), config).ok_or_else(|| eyre!("No items to display"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    let mut ticker = tokio::time::interval(TICK_INTERVAL);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        // The host is read on every pass, like a render reading its context
        app.refresh();

        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &*app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = ticker.tick() => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => app.quit(),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            app.quit();
            return Ok(());
        }
    }
}
