//! Session state for Stockroom.
//!
//! Routes each input line either to the command pipeline or, while a
//! confirmation is pending, to the inventory as the answer to that question.

use tracing::debug;

use crate::commands::{CommandOutput, CommandRouter};
use crate::inventory::{Answer, Inventory, Outcome, PendingConfirmation, Resolution};

/// What the next input line means.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    /// The next line is a command.
    #[default]
    Idle,
    /// The next line answers this question, whatever it contains.
    AwaitingConfirmation(PendingConfirmation),
}

/// One interpreter session: the inventory plus the pending-question state.
#[derive(Debug, Default)]
pub struct Session {
    inventory: Inventory,
    state: SessionState,
}

impl Session {
    /// Creates a session with an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes one input line, returning what to show for it.
    pub fn handle_input(&mut self, line: &str) -> Option<CommandOutput> {
        match std::mem::take(&mut self.state) {
            SessionState::AwaitingConfirmation(pending) => {
                let answer = Answer::parse(line);
                debug!(?answer, "Answer to pending confirmation");
                match self.inventory.resolve(pending, answer) {
                    Resolution::Applied => None,
                    Resolution::Declined(message) => Some(CommandOutput::info(message)),
                }
            }
            SessionState::Idle => self.handle_command(line),
        }
    }

    /// Returns true while the next line will be consumed as a yes/no answer.
    pub fn is_awaiting_confirmation(&self) -> bool {
        matches!(self.state, SessionState::AwaitingConfirmation(_))
    }

    /// Returns the current session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Returns the inventory.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    fn handle_command(&mut self, line: &str) -> Option<CommandOutput> {
        if line.trim().is_empty() {
            return None;
        }

        let command = match CommandRouter::parse(line) {
            Ok(command) => command,
            Err(e) => return Some(e.into()),
        };

        match self.inventory.execute(command) {
            Ok(Outcome::Done) => None,
            Ok(Outcome::Payload(payload)) => {
                let output = CommandOutput::from(payload);
                (!output.is_empty()).then_some(output)
            }
            Ok(Outcome::NeedsConfirmation(pending)) => {
                let question = pending.question();
                self.state = SessionState::AwaitingConfirmation(pending);
                Some(CommandOutput::prompt(question))
            }
            Err(e) => Some(e.into()),
        }
    }
}
