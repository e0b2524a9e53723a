//! Line-driven interpreter loop.
//!
//! Feeds input lines to a [`Session`] one at a time, prints what each line
//! produced, and flushes command history on a fixed timer.

use std::io::Write;
use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::app::Session;
use crate::commands::CommandOutput;
use crate::config::Config;
use crate::error::{Result, StockroomError};
use crate::history::{HistoryLog, HistorySink};

fn write_err(e: std::io::Error) -> StockroomError {
    StockroomError::internal(format!("Failed to write output: {e}"))
}

/// Interpreter driver writing to `W`.
pub struct Repl<W: Write> {
    session: Session,
    history: HistoryLog,
    sink: Option<Box<dyn HistorySink>>,
    out: W,
    prompt: String,
    flush_interval: Duration,
    started: bool,
}

impl<W: Write> Repl<W> {
    /// Creates a driver. Without a sink, history is buffered but never written.
    pub fn new(out: W, config: &Config, sink: Option<Box<dyn HistorySink>>) -> Self {
        Self {
            session: Session::new(),
            history: HistoryLog::new(config.history.batch_size),
            sink,
            out,
            prompt: config.repl.prompt.clone(),
            flush_interval: Duration::from_millis(config.history.flush_interval_ms.max(1)),
            started: false,
        }
    }

    /// Returns the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Consumes the driver, returning its output writer.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs each line of a fixture script, echoing it after the prompt.
    pub fn run_script(&mut self, script: &str) -> Result<()> {
        self.ensure_started()?;
        for line in script.lines() {
            writeln!(self.out, "{line}").map_err(write_err)?;
            self.process_line(line)?;
        }
        Ok(())
    }

    /// Reads lines until EOF or Ctrl-C, then writes any remaining history.
    pub async fn run<R: AsyncBufRead + Unpin>(&mut self, input: R) -> Result<()> {
        self.ensure_started()?;

        let mut lines = input.lines();
        let mut ticker = tokio::time::interval(self.flush_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        // Registered once; an interrupt during processing stays pending.
        let interrupt = tokio::signal::ctrl_c();
        tokio::pin!(interrupt);
        let mut listening = true;

        loop {
            tokio::select! {
                line = lines.next_line() => match line {
                    Ok(Some(line)) => self.process_line(&line)?,
                    Ok(None) => {
                        debug!("Input closed");
                        break;
                    }
                    Err(e) => {
                        self.finish().await?;
                        return Err(StockroomError::internal(format!("Failed to read input: {e}")));
                    }
                },
                _ = ticker.tick() => self.flush_history().await?,
                result = &mut interrupt, if listening => match result {
                    Ok(()) => {
                        info!("Interrupted");
                        writeln!(self.out).map_err(write_err)?;
                        break;
                    }
                    Err(e) => {
                        warn!(error = %e, "Failed to listen for Ctrl-C");
                        listening = false;
                    }
                },
            }
        }

        self.finish().await
    }

    /// Records, processes and prints one line.
    fn process_line(&mut self, line: &str) -> Result<()> {
        self.history.record(line);

        match self.session.handle_input(line) {
            Some(output @ CommandOutput::Prompt(_)) => {
                write!(self.out, "{output}").map_err(write_err)?;
            }
            Some(output @ CommandOutput::Table { .. }) => {
                writeln!(self.out, "{output}\n").map_err(write_err)?;
            }
            Some(output) => writeln!(self.out, "{output}").map_err(write_err)?,
            None => {}
        }

        if !self.session.is_awaiting_confirmation() {
            write!(self.out, "{}", self.prompt).map_err(write_err)?;
        }
        self.out.flush().map_err(write_err)
    }

    async fn flush_history(&mut self) -> Result<()> {
        let Some(sink) = self.sink.as_deref() else {
            return Ok(());
        };
        if let Some(notice) = self.history.flush_batch(sink).await {
            writeln!(self.out, "\n{notice}").map_err(write_err)?;
            self.out.flush().map_err(write_err)?;
        }
        Ok(())
    }

    async fn finish(&mut self) -> Result<()> {
        if let Some(sink) = self.sink.as_deref() {
            if let Some(notice) = self.history.drain(sink).await {
                writeln!(self.out, "\n{notice}").map_err(write_err)?;
            }
        }
        self.out.flush().map_err(write_err)
    }

    fn ensure_started(&mut self) -> Result<()> {
        if !self.started {
            self.started = true;
            write!(self.out, "{}", self.prompt).map_err(write_err)?;
            self.out.flush().map_err(write_err)?;
        }
        Ok(())
    }
}
