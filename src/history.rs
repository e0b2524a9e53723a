//! Command history recording.
//!
//! Every processed input line is buffered and periodically appended to an
//! external log in fixed-size batches. A failing log is reported to the user
//! once and then ignored for the rest of the session.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tracing::warn;

use crate::commands::CommandOutput;
use crate::error::{Result, StockroomError};

/// Shown the first time the history cannot be written.
pub const HISTORY_FAILURE_NOTICE: &str =
    "Command history not being recorded.  Please contact system administrators.";

/// Destination for recorded command lines.
///
/// Implementations must be thread-safe (Send + Sync) to support async operations.
#[async_trait]
pub trait HistorySink: Send + Sync {
    /// Appends lines to the log, in order.
    async fn append(&self, lines: &[String]) -> Result<()>;
}

/// Appends history to a UTF-8 text file, one line per entry.
#[derive(Debug, Clone)]
pub struct FileHistorySink {
    path: PathBuf,
}

impl FileHistorySink {
    /// Creates a sink writing to `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl HistorySink for FileHistorySink {
    async fn append(&self, lines: &[String]) -> Result<()> {
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| {
                StockroomError::history(format!("Failed to open {}: {e}", self.path.display()))
            })?;

        let mut text = lines.join("\n");
        text.push('\n');

        file.write_all(text.as_bytes())
            .await
            .map_err(|e| StockroomError::history(format!("Failed to append history: {e}")))?;
        file.flush()
            .await
            .map_err(|e| StockroomError::history(format!("Failed to flush history: {e}")))
    }
}

/// FIFO buffer of input lines waiting to be written.
#[derive(Debug)]
pub struct HistoryLog {
    pending: VecDeque<String>,
    batch_size: usize,
    notified_of_error: bool,
}

impl HistoryLog {
    /// Creates an empty log that writes `batch_size` lines per flush.
    pub fn new(batch_size: usize) -> Self {
        Self {
            pending: VecDeque::new(),
            batch_size: batch_size.max(1),
            notified_of_error: false,
        }
    }

    /// Buffers a raw input line.
    pub fn record(&mut self, line: &str) {
        self.pending.push_back(line.to_string());
    }

    /// Number of lines not yet written.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Writes one full batch if enough lines are buffered.
    ///
    /// Returns the one-time failure notice when this is the first failed write.
    pub async fn flush_batch(&mut self, sink: &dyn HistorySink) -> Option<CommandOutput> {
        if self.pending.len() < self.batch_size {
            return None;
        }
        let batch: Vec<String> = self.pending.drain(..self.batch_size).collect();
        self.write(sink, &batch).await
    }

    /// Writes everything still buffered, regardless of batch size.
    pub async fn drain(&mut self, sink: &dyn HistorySink) -> Option<CommandOutput> {
        if self.pending.is_empty() {
            return None;
        }
        let batch: Vec<String> = self.pending.drain(..).collect();
        self.write(sink, &batch).await
    }

    async fn write(&mut self, sink: &dyn HistorySink, batch: &[String]) -> Option<CommandOutput> {
        let err = sink.append(batch).await.err()?;
        warn!(error = %err, lines = batch.len(), "Dropping command history");

        if self.notified_of_error {
            return None;
        }
        self.notified_of_error = true;
        Some(CommandOutput::error(HISTORY_FAILURE_NOTICE))
    }
}
