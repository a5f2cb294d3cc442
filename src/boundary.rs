//! Render error boundary.
//!
//! Wraps one subtree's render. A failure latches the boundary into its
//! fallback card; `retry` only clears the latch so the next render
//! re-mounts the subtree. The failed operation is never re-run on its own.

use tracing::error;

use crate::error::Result;
use crate::panel::escape;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBoundary {
    name: &'static str,
    error: Option<String>,
}

impl ErrorBoundary {
    pub fn new(name: &'static str) -> Self {
        Self { name, error: None }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn has_failed(&self) -> bool {
        self.error.is_some()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Renders the subtree, or the fallback card if it has failed.
    pub fn render<F>(&mut self, subtree: F) -> String
    where
        F: FnOnce() -> Result<String>,
    {
        if self.error.is_some() {
            return self.fallback();
        }
        match subtree() {
            Ok(out) => out,
            Err(e) => {
                error!(boundary = self.name, error = %e, "render failed");
                self.error = Some(e.to_string());
                self.fallback()
            }
        }
    }

    pub fn retry(&mut self) {
        self.error = None;
    }

    fn fallback(&self) -> String {
        format!(
            "<div class=\"error-card\" role=\"alert\"><h3>Something went wrong</h3>\
             <p>This part of the page failed to display.</p>\
             <button data-action=\"retry:{}\">Try again</button></div>\n",
            escape(self.name)
        )
    }
}
