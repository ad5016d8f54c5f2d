//! Line-oriented command input.

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use super::UiEvent;
use crate::error::CommandError;
use crate::forms::FormId;

pub const HELP: &str = "\
name <text>    type into the add-user field
add [text]     submit the add-user form (typing <text> first)
filter <text>  type into the filter field
apply [text]   submit the filter form (typing <text> first)
show           redraw both lists
help           this text
quit           leave";

/// Parse one input line. `None` for a blank line.
pub fn parse_line(line: &str) -> Option<Result<UiEvent, CommandError>> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return None;
    }

    let (command, text) = match line.split_once(' ') {
        Some((command, text)) => (command, Some(text.to_string())),
        None => (line, None),
    };

    let event = match (command, text) {
        ("name", text) => Ok(UiEvent::Edit {
            form: FormId::AddUser,
            text: text.unwrap_or_default(),
        }),
        ("add", None) => Ok(UiEvent::Submit(FormId::AddUser)),
        ("add", Some(text)) => Ok(UiEvent::Enter {
            form: FormId::AddUser,
            text,
        }),
        ("filter", text) => Ok(UiEvent::Edit {
            form: FormId::Filter,
            text: text.unwrap_or_default(),
        }),
        ("apply", None) => Ok(UiEvent::Submit(FormId::Filter)),
        ("apply", Some(text)) => Ok(UiEvent::Enter {
            form: FormId::Filter,
            text,
        }),
        ("show", None) => Ok(UiEvent::Show),
        ("help", None) => Ok(UiEvent::Help),
        ("quit" | "exit", None) => Ok(UiEvent::Quit),
        ("show", Some(_)) => Err(CommandError::UnexpectedArgument("show")),
        ("help", Some(_)) => Err(CommandError::UnexpectedArgument("help")),
        ("quit", Some(_)) => Err(CommandError::UnexpectedArgument("quit")),
        ("exit", Some(_)) => Err(CommandError::UnexpectedArgument("exit")),
        (other, _) => Err(CommandError::Unknown(other.to_string())),
    };
    Some(event)
}

/// Turn lines from `reader` into events until `quit` or end of input.
///
/// Always finishes by sending [`UiEvent::Quit`] unless the dispatcher is gone.
#[instrument(name = "input", skip_all)]
pub async fn read_events<R>(reader: R, sender: mpsc::Sender<UiEvent>)
where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(reader).lines();

    loop {
        let event = match lines.next_line().await {
            Ok(Some(line)) => match parse_line(&line) {
                Some(Ok(event)) => event,
                Some(Err(e)) => {
                    debug!(error = %e, "Rejected input");
                    UiEvent::Rejected(e)
                }
                None => continue,
            },
            Ok(None) => {
                info!("End of input");
                UiEvent::Quit
            }
            Err(e) => {
                warn!(error = %e, "Failed to read input");
                UiEvent::Quit
            }
        };

        let quit = event == UiEvent::Quit;
        if sender.send(event).await.is_err() {
            debug!("Dispatcher closed");
            return;
        }
        if quit {
            return;
        }
    }
}

/// Spawn the stdin reader. The task only owns the sender.
pub fn spawn_stdin_reader(sender: mpsc::Sender<UiEvent>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(read_events(tokio::io::stdin(), sender))
}
