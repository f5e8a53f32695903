//! Per-call diff state.

use shapediff_types::{ChangeRecord, DiffConfig, DiffError, DiffResult, Path, Result};
use tracing::{error, trace};

/// State threaded through one diff call.
///
/// Owns the result being accumulated and tracks how many nested objects are
/// currently entered. A context is created per top-level call and consumed by
/// [`DiffContext::finish`]; nothing outlives the call.
#[derive(Debug)]
pub struct DiffContext<'a> {
    config: &'a DiffConfig,
    depth: usize,
    result: DiffResult,
}

impl<'a> DiffContext<'a> {
    /// Start an empty context.
    pub fn new(config: &'a DiffConfig) -> Self {
        Self {
            config,
            depth: 0,
            result: DiffResult::new(),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &'a DiffConfig {
        self.config
    }

    /// Number of nested objects currently entered, the root included.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Changes recorded so far.
    pub fn result(&self) -> &DiffResult {
        &self.result
    }

    /// Record a change at `path`. Absent values render as the configured
    /// placeholder.
    ///
    /// Fails with [`DiffError::DuplicatePath`] if `path` was already
    /// recorded during this call.
    pub fn record(&mut self, path: &Path, old: Option<String>, new: Option<String>) -> Result<()> {
        let placeholder = &self.config.absent_placeholder;
        let old = old.unwrap_or_else(|| placeholder.clone());
        let new = new.unwrap_or_else(|| placeholder.clone());
        trace!(path = %path, old = %old, new = %new, "change recorded");

        self.result
            .insert(ChangeRecord::new(path.as_str(), old, new))
            .inspect_err(|e| error!(error = %e, "change path collision"))
    }

    pub(crate) fn enter(&mut self, path: &Path) -> Result<()> {
        if let Some(limit) = self.config.max_depth {
            if self.depth >= limit {
                return Err(DiffError::DepthExceeded {
                    path: path.to_string(),
                    limit,
                });
            }
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Consume the context, returning everything recorded.
    pub fn finish(self) -> DiffResult {
        self.result
    }
}
