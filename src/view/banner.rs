/// The only text ever shown for a failed expression
pub const INVALID_EXPRESSION_MESSAGE: &str = "Invalid expression";

/// One-line status text shown under the results
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorBanner {
    text: String,
}

impl ErrorBanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
