//! Admin Console: terminal dashboard for the admin backend.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::{watch, Mutex};
use tokio::time::Instant;

use admin_console::api::AdminApiClient;
use admin_console::config::{ConsoleArgs, ConsoleConfig};
use admin_console::domain::{App, InMemoryProjects};
use admin_console::sync::{
    ModalConfirm, Poller, RandomStatusSource, SharedApp, StatusSimulator, SyncContext,
};
use admin_console::{telemetry, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ConsoleConfig::try_from(ConsoleArgs::parse()).context("invalid configuration")?;
    telemetry::init(&config.log_level, &config.log_file).context("failed to initialize logging")?;
    tracing::info!(endpoint = %config.endpoint, "Starting admin console");

    let client = AdminApiClient::new(config.endpoint.as_str(), config.request_timeout)
        .context("failed to create API client")?;

    let app: SharedApp = Arc::new(Mutex::new(App::new(
        config.sequence_policy,
        Box::new(InMemoryProjects::demo()),
    )));
    let ctx = SyncContext::new(
        app.clone(),
        Arc::new(client),
        Arc::new(ModalConfirm::new(app.clone())),
    );

    // Setup terminal with panic hook for cleanup
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Initial loads and backend probe run in the background.
    {
        let ctx = ctx.clone();
        tokio::spawn(async move { ctx.load_initial().await });
    }

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let poller = tokio::spawn(Poller::new(ctx.clone(), config.poll_interval).run(shutdown_rx.clone()));
    let simulator = tokio::spawn(
        StatusSimulator::new(
            app.clone(),
            Box::new(RandomStatusSource::new(config.healthy_probability)),
            config.simulate_interval,
        )
        .run(shutdown_rx),
    );

    let result = run_app(&mut terminal, &ctx).await;

    let _ = shutdown_tx.send(true);
    let _ = tokio::join!(poller, simulator);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!(error = %err, "Console exited with error");
    }
    tracing::info!("Admin console stopped");
    result.map_err(Into::into)
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ctx: &SyncContext,
) -> io::Result<()> {
    loop {
        // Draw UI
        {
            let mut app_guard = ctx.app.lock().await;
            app_guard.notifications.prune(Instant::now());
            terminal.draw(|frame| {
                ui::render(frame, &app_guard);
            })?;
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    let command = ctx.app.lock().await.handle_key(key.code);
                    if let Some(command) = command {
                        tracing::debug!(?command, "Dispatching");
                        ctx.spawn(command);
                    }
                }
            }
        }

        if ctx.app.lock().await.should_quit() {
            return Ok(());
        }
    }
}
