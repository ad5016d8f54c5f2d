use crate::error::CommandError;
use crate::forms::FormId;

/// Typed UI events delivered to the dispatcher, one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Replace a form's uncommitted buffer.
    Edit { form: FormId, text: String },
    Submit(FormId),
    /// Edit followed by submit.
    Enter { form: FormId, text: String },
    Show,
    Help,
    Rejected(CommandError),
    Quit,
}
