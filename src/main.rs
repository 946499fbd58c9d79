use algoviz::app::App;
use algoviz::cli::{self, parse_args, run_cli_command, CliCommand};
use algoviz::config::VizConfig;
use algoviz::telemetry;
use algoviz::terminal::{setup_panic_hook, TerminalManager};
use algoviz::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::Terminal;
use std::io;
use std::time::Instant;

fn main() -> Result<()> {
    color_eyre::install()?;

    let command = parse_args(std::env::args())?;
    if let Some(result) = run_cli_command(&command) {
        return result;
    }

    let (overrides, interactive) = match &command {
        CliCommand::RunTui(overrides) => (overrides.clone(), true),
        CliCommand::Events(overrides) | CliCommand::Headless(overrides) => {
            (overrides.clone(), false)
        }
        CliCommand::Version | CliCommand::Help => return Ok(()),
    };
    let config = overrides.apply(VizConfig::from_env()?);

    let log_target = telemetry::log_target_for(&config, interactive);
    telemetry::init(&config.log_filter, &log_target)?;
    tracing::info!(
        version = cli::VERSION,
        ?log_target,
        elements = config.dataset.len(),
        cadence_ms = config.cadence.as_millis() as u64,
        "algoviz starting"
    );

    match command {
        CliCommand::Events(_) => {
            let mut stdout = io::stdout().lock();
            cli::write_events(&config, &mut stdout)?;
            Ok(())
        }
        CliCommand::Headless(_) => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(cli::run_headless(&config, &mut io::stdout()))?;
            Ok(())
        }
        _ => {
            // Restore the terminal before color-eyre prints a panic report
            setup_panic_hook();
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(run_tui(config))
        }
    }
}

async fn run_tui(config: VizConfig) -> Result<()> {
    let mut manager = TerminalManager::new()?;
    let mut app = App::new(config);
    app.launch(Instant::now());

    let result = run_app(manager.terminal(), &mut app).await;
    if let Err(err) = &result {
        tracing::error!(error = %err, "event loop failed");
    }

    manager.restore()?;
    tracing::info!("algoviz exiting");
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

    loop {
        // Draw only when something visible changed
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        if app.should_quit {
            return Ok(());
        }

        // Sleep until the scheduler's next tick, or forever when nothing is pending
        let deadline = app.next_deadline().map(tokio::time::Instant::from_std);
        let tick = async {
            match deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            _ = tick => {
                app.on_tick(Instant::now());
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => app.handle_key_event(key, Instant::now()),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(err)) => return Err(err.into()),
                    None => return Ok(()),
                }
            }
        }
    }
}
