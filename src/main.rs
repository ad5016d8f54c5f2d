mod app_system;
mod config;
mod domain;
mod error;
mod forms;
mod store;
mod views;

#[cfg(test)]
mod mock_renderer;

use std::io::Write;
use std::rc::Rc;

use clap::Parser;
use tokio::sync::mpsc;
use tracing::info;

use crate::app_system::{input, setup_tracing, RosterApp, UiEvent};
use crate::config::Cli;
use crate::error::AppError;
use crate::forms::FormId;
use crate::views::{Renderer, TerminalRenderer};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    setup_tracing(&cli.log_level);

    info!(seed_count = cli.seed.len(), "Starting user roster");

    let renderer = Rc::new(TerminalRenderer::new());
    let mut app = RosterApp::mount(renderer.clone());

    for name in cli.seed {
        let _ = app.dispatch(UiEvent::Enter {
            form: FormId::AddUser,
            text: name,
        });
    }
    if let Some(filter) = cli.filter {
        let _ = app.dispatch(UiEvent::Enter {
            form: FormId::Filter,
            text: filter,
        });
    }
    renderer.notice("type `help` for commands");

    let (sender, receiver) = mpsc::channel(cli.queue_depth.max(1));
    let reader = input::spawn_stdin_reader(sender);

    app.run(receiver).await;
    reader.await?;
    app.unmount();

    std::io::stdout().flush()?;
    info!("User roster finished");
    Ok(())
}
