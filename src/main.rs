//! Terminal front end for the listings client.
//!
//! This binary is the thin integration layer between the library and a
//! terminal: it parses configuration, initializes tracing, builds a
//! [`Controller`] over an HTTP backend, and maps input lines to events.
//!
//! # Lifecycle
//!
//! 1. **Load**: Read the optional TOML config given as the first argument
//! 2. **Init**: Dispatch `Event::Init`, loading page 1 and the subscriptions
//! 3. **Loop**: Read a command, dispatch it, wait for every request it
//!    started, print the screen
//!
//! Alerts and confirmations go through the same stdin/stdout the commands use.
//! Logs go to stderr.

#![allow(clippy::multiple_crate_versions)]

mod cli;

use std::process::ExitCode;

use listings_client::api::HttpBackend;
use listings_client::infrastructure::{MemoryHistory, TerminalInteraction};
use listings_client::{initialize, observability, Config, Controller, Event, Result};

use cli::Command;
use tracing::Instrument;

type TerminalController = Controller<
    HttpBackend,
    MemoryHistory,
    TerminalInteraction<std::io::StdinLock<'static>, std::io::Stdout>,
>;

fn load_config() -> Result<Config> {
    std::env::args()
        .nth(1)
        .map_or_else(|| Ok(Config::default()), Config::from_file)
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("listings-client: {e}");
            return ExitCode::FAILURE;
        }
    };
    observability::init_tracing(&config);

    let span = tracing::debug_span!("run", base_url = %config.base_url);
    match run(&config).instrument(span).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "listings client stopped");
            eprintln!("listings-client: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &Config) -> Result<()> {
    let backend = HttpBackend::new(&config.base_url, config.request_timeout())?;
    let mut controller: TerminalController = Controller::new(
        initialize(config),
        backend,
        MemoryHistory::new(),
        TerminalInteraction::stdio(),
    );

    controller.dispatch(Event::Init)?;
    controller.settle().await?;
    show(&mut controller)?;

    loop {
        let Some(line) = controller.interaction_mut().read_line("> ")? else {
            break;
        };

        let command = match cli::parse(&line, controller.state()) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                controller.interaction_mut().print(&message)?;
                continue;
            }
        };

        let outcome = match command {
            Command::Quit => break,
            Command::Help => {
                controller.interaction_mut().print(cli::HELP)?;
                continue;
            }
            Command::ListSubscriptions => {
                print_subscriptions(&mut controller)?;
                continue;
            }
            Command::Back => controller.back(),
            Command::Subscribe(email) => controller.subscribe(email),
            Command::Dispatch(events) => dispatch_all(&mut controller, events),
        };

        if let Err(e) = outcome {
            tracing::debug!(error = %e, "command rejected");
            controller.interaction_mut().print(&e.to_string())?;
        }
        controller.settle().await?;
        show(&mut controller)?;
    }

    tracing::debug!("input closed, exiting");
    Ok(())
}

fn dispatch_all(controller: &mut TerminalController, events: Vec<Event>) -> Result<bool> {
    let mut changed = false;
    for event in events {
        changed |= controller.dispatch(event)?;
    }
    Ok(changed)
}

fn show(controller: &mut TerminalController) -> Result<()> {
    let mut lines = vec![cli::summary(controller.state())];
    lines.extend(cli::render(controller.state()));

    let output = controller.interaction_mut();
    for line in &lines {
        output.print(line)?;
    }
    Ok(())
}

fn print_subscriptions(controller: &mut TerminalController) -> Result<()> {
    let lines: Vec<String> = controller
        .state()
        .subscriptions
        .iter()
        .map(|sub| {
            let created = sub
                .created_at
                .map_or_else(String::new, |at| format!(" (since {})", at.format("%Y-%m-%d")));
            let filters = sub.filter_summary().join(" ");
            format!("{:>4}  {}{created}  {filters}", sub.id, sub.email)
        })
        .collect();

    let output = controller.interaction_mut();
    if lines.is_empty() {
        output.print("no subscriptions")?;
    }
    for line in &lines {
        output.print(line)?;
    }
    Ok(())
}
