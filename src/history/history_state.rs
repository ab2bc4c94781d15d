use super::matcher::HistoryMatcher;

pub const MAX_VISIBLE_SUGGESTIONS: usize = 10;

/// Suggestion popup listing previous expressions that match the input line
#[derive(Debug, Default)]
pub struct HistoryPopup {
    visible: bool,
    matcher: HistoryMatcher,
    /// Indices into the tracker's entries, best match first
    filtered: Vec<usize>,
    selected: usize,
}

impl HistoryPopup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn open(&mut self, input: &str, entries: &[String]) {
        self.visible = true;
        self.refresh(input, entries);
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.filtered.clear();
        self.selected = 0;
    }

    pub fn toggle(&mut self, input: &str, entries: &[String]) {
        if self.visible {
            self.close();
        } else {
            self.open(input, entries);
        }
    }

    /// Re-rank after the input line or the history changed
    pub fn refresh(&mut self, input: &str, entries: &[String]) {
        if !self.visible {
            return;
        }
        self.filtered = self.matcher.rank(input, entries);
        self.selected = self.selected.min(self.filtered.len().saturating_sub(1));
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.filtered.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_entry<'a>(&self, entries: &'a [String]) -> Option<&'a str> {
        self.filtered
            .get(self.selected)
            .and_then(|&idx| entries.get(idx))
            .map(String::as_str)
    }

    /// Window of matches to draw, keeping the selection in view
    pub fn visible_entries<'a>(
        &self,
        entries: &'a [String],
    ) -> impl Iterator<Item = (usize, &'a str)> {
        let start = self
            .selected
            .saturating_sub(MAX_VISIBLE_SUGGESTIONS.saturating_sub(1));
        self.filtered
            .iter()
            .enumerate()
            .skip(start)
            .take(MAX_VISIBLE_SUGGESTIONS)
            .filter_map(move |(display_idx, &idx)| {
                entries.get(idx).map(|entry| (display_idx, entry.as_str()))
            })
    }
}

#[cfg(test)]
#[path = "history_state_tests.rs"]
mod history_state_tests;
