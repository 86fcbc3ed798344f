use serde::Serialize;

/// Button presses forwarded to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Command {
    /// Start or pause sorting.
    Toggle,
    /// Close the running batch and open a new one.
    NewBatch,
    /// Resume the current batch after an interruption.
    Continue,
}

impl Command {
    pub fn as_str(self) -> &'static str {
        match self {
            Command::Toggle => "TOGGLE",
            Command::NewBatch => "NEW_BATCH",
            Command::Continue => "CONTINUE",
        }
    }
}

/// Body of `POST /api/control`.
#[derive(Debug, Serialize)]
pub(crate) struct ControlRequest {
    pub command: Command,
}
