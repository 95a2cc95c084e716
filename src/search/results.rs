// src/search/results.rs

/// Cards shown per "load more" step.
pub const PAGE_SIZE: usize = 24;

/// How much of the filtered result list is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultWindow {
    shown: usize,
}

impl Default for ResultWindow {
    fn default() -> Self {
        Self { shown: PAGE_SIZE }
    }
}

impl ResultWindow {
    /// Restores a window from a requested size, never below one page.
    pub fn with_shown(shown: usize) -> Self {
        Self {
            shown: shown.max(PAGE_SIZE),
        }
    }

    pub fn shown(&self) -> usize {
        self.shown
    }

    /// Number of cards actually rendered for `total` results.
    pub fn visible(&self, total: usize) -> usize {
        self.shown.min(total)
    }

    pub fn has_more(&self, total: usize) -> bool {
        self.shown < total
    }

    /// Grows by one page, but never past `total`.
    pub fn load_more(&mut self, total: usize) {
        if self.has_more(total) {
            self.shown = (self.shown + PAGE_SIZE).min(total.max(PAGE_SIZE));
        }
    }

    pub fn reset(&mut self) {
        self.shown = PAGE_SIZE;
    }
}
