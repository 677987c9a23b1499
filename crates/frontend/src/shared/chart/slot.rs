use super::backend::{ChartBackend, ChartError};
use super::config::ChartConfig;
use std::cell::RefCell;

/// At most one live chart per canvas. Dropping the slot destroys it.
pub struct ChartSlot<B: ChartBackend> {
    backend: B,
    canvas_id: String,
    live: RefCell<Option<B::Handle>>,
}

impl<B: ChartBackend> ChartSlot<B> {
    pub fn new(backend: B, canvas_id: impl Into<String>) -> Self {
        Self {
            backend,
            canvas_id: canvas_id.into(),
            live: RefCell::new(None),
        }
    }

    pub fn canvas_id(&self) -> &str {
        &self.canvas_id
    }

    /// Tears down the current chart, then builds a new one from `config`.
    pub fn render(&self, config: &ChartConfig) -> Result<(), ChartError> {
        self.clear();
        let handle = self.backend.create(&self.canvas_id, config)?;
        *self.live.borrow_mut() = Some(handle);
        Ok(())
    }

    pub fn clear(&self) {
        let previous = self.live.borrow_mut().take();
        if let Some(handle) = previous {
            self.backend.destroy(handle);
        }
    }

    pub fn is_live(&self) -> bool {
        self.live.borrow().is_some()
    }
}

impl<B: ChartBackend> Drop for ChartSlot<B> {
    fn drop(&mut self) {
        self.clear();
    }
}
