use log::{debug, info, trace};
use std::io::{BufRead, Write};

use rpsls_game::{format_outcome, normalize, resolve, welcome_banner, Choice, Normalized, Outcome};

use crate::draw::ChoiceSource;
use crate::error::RpslsError;

pub const PROMPT: &str = "Choose: (r)ock (p)aper (s)cissors (l)izard spoc(k) (q)uit >>> ";
pub const INVALID_CHOICE: &str = "Invalid choice, try again.";
pub const FAREWELL: &str = "Goodbye!";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum QuitReason {
    User,
    InputClosed,
}

impl QuitReason {
    pub fn message(&self) -> &'static str {
        match self {
            QuitReason::User => "User quit game.",
            QuitReason::InputClosed => "Input closed.",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SessionState {
    AwaitingInput,
    Resolving(Choice),
    Printing {
        user: Choice,
        computer: Choice,
        outcome: Outcome,
    },
    Quit(QuitReason),
}

/// One interactive game, driven line by line until the user quits.
pub struct Session<R, W, D> {
    input: R,
    output: W,
    source: D,
    state: SessionState,
    rounds: u32,
}

impl<R: BufRead, W: Write, D: ChoiceSource> Session<R, W, D> {
    pub fn new(input: R, output: W, source: D) -> Self {
        Self {
            input,
            output,
            source,
            state: SessionState::AwaitingInput,
            rounds: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Completed rounds; rejected input does not count.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn run(&mut self) -> Result<(), RpslsError> {
        writeln!(self.output, "{}\n", welcome_banner())?;

        loop {
            self.step()?;
            if let SessionState::Quit(reason) = self.state() {
                info!("Session ended ({:?}) after {} round(s)", reason, self.rounds());
                return Ok(());
            }
        }
    }

    /// Advances the state machine by one transition and returns the new state.
    pub fn step(&mut self) -> Result<SessionState, RpslsError> {
        let state = self.state;
        self.state = match state {
            SessionState::AwaitingInput => self.read_choice()?,
            SessionState::Resolving(user) => {
                let computer = self.source.draw();
                SessionState::Printing {
                    user,
                    computer,
                    outcome: resolve(user, computer),
                }
            }
            SessionState::Printing {
                user,
                computer,
                outcome,
            } => {
                self.rounds += 1;
                debug!(
                    "Round {}: {} vs {} ==> {}",
                    self.rounds,
                    user,
                    computer,
                    outcome.sign()
                );
                writeln!(self.output, "{}\n", format_outcome(user, computer, &outcome))?;
                SessionState::AwaitingInput
            }
            quit @ SessionState::Quit(_) => quit,
        };

        Ok(self.state)
    }

    fn read_choice(&mut self) -> Result<SessionState, RpslsError> {
        write!(self.output, "{}", PROMPT)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            // Keep the farewell off the prompt line
            writeln!(self.output)?;
            return self.quit(QuitReason::InputClosed);
        }

        // Bytes that are not UTF-8 cannot match the grammar
        let normalized = match std::str::from_utf8(&line) {
            Ok(line) => normalize(line),
            Err(_) => Normalized::Invalid,
        };

        match normalized {
            Normalized::Valid(choice) => Ok(SessionState::Resolving(choice)),
            Normalized::Quit => self.quit(QuitReason::User),
            Normalized::Invalid => {
                trace!("Rejected input {:?}", String::from_utf8_lossy(&line));
                writeln!(self.output, "{}", INVALID_CHOICE)?;
                Ok(SessionState::AwaitingInput)
            }
        }
    }

    fn quit(&mut self, reason: QuitReason) -> Result<SessionState, RpslsError> {
        writeln!(self.output, "{} {}", reason.message(), FAREWELL)?;
        self.output.flush()?;
        Ok(SessionState::Quit(reason))
    }
}
