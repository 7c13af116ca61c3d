use stroke_risk::app::{tick_interval, App, AppMessage};
use stroke_risk::cli::{handle_health_command, parse_args, run_cli_command, CliCommand};
use stroke_risk::client::PredictionClient;
use stroke_risk::config::AppConfig;
use stroke_risk::logging::init_logging;
use stroke_risk::terminal::{setup_panic_hook, TerminalManager};
use stroke_risk::ui;

use color_eyre::{eyre::eyre, Result};
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let command = parse_args(std::env::args());
    if let Some(result) = run_cli_command(&command) {
        return result;
    }

    let (mut config, config_warnings) = AppConfig::from_env();
    if let Some(url) = command.url() {
        config = config.with_base_url(url);
    }

    // Logging is best effort
    let log_guard = match init_logging(config.log_dir.as_deref()) {
        Ok(Some(guard)) => {
            tracing::info!("logging to {}", guard.path.display());
            Some(guard)
        }
        Ok(None) => None,
        Err(e) => {
            eprintln!("Warning: file logging disabled: {}", e);
            None
        }
    };
    for warning in &config_warnings {
        tracing::warn!("{}", warning);
    }

    let client = PredictionClient::from_config(&config)
        .map_err(|e| eyre!("Failed to build HTTP client: {}", e))?;
    tracing::info!("prediction endpoint: {}", client.predict_url());

    if let CliCommand::Health { .. } = command {
        let online = handle_health_command(&client, &config.base_url).await;
        // exit() skips destructors; flush the log writer first
        drop(log_guard);
        std::process::exit(if online { 0 } else { 1 });
    }

    setup_panic_hook();
    let mut term_manager = TerminalManager::new()?;

    let mut app = App::new(client);
    if let Ok((width, height)) = crossterm::terminal::size() {
        app.update_terminal_dimensions(width, height);
    }
    if config.health_check {
        app.start_health_check();
    }

    let result = run_app(term_manager.terminal(), &mut app).await;

    term_manager.restore()?;
    if let Err(ref e) = result {
        tracing::error!("app exited with error: {}", e);
    }
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // The receiver is owned here so select! can borrow it alongside the app
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    // Drives the spinner and the error banner timeout
    let mut ticker = tick_interval();

    loop {
        if app.needs_redraw || app.is_animating() {
            terminal.draw(|f| {
                ui::render(f, &mut *app);
            })?;
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
                    Some(Ok(Event::Paste(text))) => {
                        app.mark_dirty();
                        app.handle_paste(&text);
                    }
                    Some(Ok(Event::Resize(width, height))) => {
                        app.update_terminal_dimensions(width, height);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!("terminal event error: {}", e);
                    }
                    None => {
                        tracing::info!("terminal event stream closed");
                        app.quit();
                    }
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
            return Ok(());
        }
    }
}
