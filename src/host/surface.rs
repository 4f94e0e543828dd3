//! Panel surface: receives the rendered launcher panel.

use crate::error::ApiError;
use crate::panel::PanelView;
use parking_lot::Mutex;

pub trait PanelSurface: Send + Sync {
    fn set_content(&self, view: &PanelView) -> Result<(), ApiError>;
}

/// Keeps the most recent view so a non-graphical host can format it later.
#[derive(Debug, Default)]
pub struct CapturedPanel {
    last: Mutex<Option<PanelView>>,
    renders: Mutex<usize>,
}

impl CapturedPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_view(&self) -> Option<PanelView> {
        self.last.lock().clone()
    }

    pub fn render_count(&self) -> usize {
        *self.renders.lock()
    }
}

impl PanelSurface for CapturedPanel {
    fn set_content(&self, view: &PanelView) -> Result<(), ApiError> {
        *self.last.lock() = Some(view.clone());
        *self.renders.lock() += 1;
        Ok(())
    }
}
