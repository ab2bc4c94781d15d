use std::collections::HashSet;

use serde_json::Value;

use crate::config::DEFAULT_TREE_INDENT;
use crate::view::Renderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    Object,
    Array,
}

impl Container {
    fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Object(_) => Some(Container::Object),
            Value::Array(_) => Some(Container::Array),
            _ => None,
        }
    }

    pub fn open(self) -> &'static str {
        match self {
            Container::Object => "{",
            Container::Array => "[",
        }
    }

    pub fn close(self) -> &'static str {
        match self {
            Container::Object => "}",
            Container::Array => "]",
        }
    }

    pub fn describe(self, len: usize) -> String {
        match (self, len) {
            (Container::Object, 1) => "1 key".to_string(),
            (Container::Object, n) => format!("{} keys", n),
            (Container::Array, 1) => "1 item".to_string(),
            (Container::Array, n) => format!("{} items", n),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RowKind {
    /// Opening bracket of an expanded, non-empty container
    Open(Container),
    /// Closing bracket of an expanded container
    Close(Container),
    /// Folded container
    Collapsed { container: Container, len: usize },
    /// `{}` or `[]`
    Empty(Container),
    Scalar(Value),
}

/// One visible line of the tree
#[derive(Debug, Clone, PartialEq)]
pub struct TreeRow {
    pub depth: usize,
    /// Object key this row belongs to (not set on closing rows)
    pub key: Option<String>,
    pub kind: RowKind,
    /// JSON pointer of the node the row belongs to
    pub pointer: String,
    /// Last member of its parent (no trailing comma)
    pub last: bool,
}

impl TreeRow {
    /// Plain-text form of the row, without indentation
    pub fn text(&self) -> String {
        let mut text = String::new();
        if let Some(key) = &self.key {
            text.push_str(&quote(key));
            text.push_str(": ");
        }

        match &self.kind {
            RowKind::Open(container) => return text + container.open(),
            RowKind::Close(container) => text.push_str(container.close()),
            RowKind::Collapsed { container, .. } => {
                text.push_str(container.open());
                text.push('…');
                text.push_str(container.close());
            }
            RowKind::Empty(container) => {
                text.push_str(container.open());
                text.push_str(container.close());
            }
            RowKind::Scalar(value) => text.push_str(&value.to_string()),
        }

        if !self.last {
            text.push(',');
        }
        text
    }

    pub fn is_container(&self) -> bool {
        matches!(
            self.kind,
            RowKind::Open(_) | RowKind::Close(_) | RowKind::Collapsed { .. }
        )
    }
}

pub(super) fn quote(key: &str) -> String {
    Value::String(key.to_string()).to_string()
}

/// Escape a single JSON pointer token (RFC 6901)
fn child_pointer(parent: &str, token: &str) -> String {
    format!("{}/{}", parent, token.replace('~', "~0").replace('/', "~1"))
}

/// Collapsible tree display of a JSON value
#[derive(Debug, Clone)]
pub struct TreeView {
    root: Option<Value>,
    expanded: HashSet<String>,
    rows: Vec<TreeRow>,
    cursor: usize,
    offset: usize,
    viewport_height: usize,
    indent: u16,
}

impl Default for TreeView {
    fn default() -> Self {
        Self::new(DEFAULT_TREE_INDENT)
    }
}

impl TreeView {
    pub fn new(indent: u16) -> Self {
        Self {
            root: None,
            expanded: HashSet::new(),
            rows: Vec::new(),
            cursor: 0,
            offset: 0,
            viewport_height: 0,
            indent,
        }
    }

    pub fn root(&self) -> Option<&Value> {
        self.root.as_ref()
    }

    pub fn rows(&self) -> &[TreeRow] {
        &self.rows
    }

    pub fn indent(&self) -> u16 {
        self.indent
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_expanded(&self, pointer: &str) -> bool {
        self.expanded.contains(pointer)
    }

    /// Fold every container except the root
    pub fn collapse_all(&mut self) {
        self.expanded.clear();
        self.expanded.insert(String::new());
        self.rebuild();
    }

    /// Expand or fold the container under the cursor
    pub fn toggle_at_cursor(&mut self) {
        let Some(row) = self.rows.get(self.cursor) else {
            return;
        };
        if !row.is_container() {
            return;
        }

        let pointer = row.pointer.clone();
        if !self.expanded.remove(&pointer) {
            self.expanded.insert(pointer.clone());
        }
        self.rebuild();

        // Keep the cursor on the node that was toggled
        if let Some(idx) = self.rows.iter().position(|row| row.pointer == pointer) {
            self.cursor = idx;
        }
        self.scroll_to_cursor();
    }

    pub fn cursor_down(&mut self, lines: usize) {
        let last = self.rows.len().saturating_sub(1);
        self.cursor = self.cursor.saturating_add(lines).min(last);
        self.scroll_to_cursor();
    }

    pub fn cursor_up(&mut self, lines: usize) {
        self.cursor = self.cursor.saturating_sub(lines);
        self.scroll_to_cursor();
    }

    pub fn page_down(&mut self) {
        self.cursor_down((self.viewport_height / 2).max(1));
    }

    pub fn page_up(&mut self) {
        self.cursor_up((self.viewport_height / 2).max(1));
    }

    pub fn jump_to_top(&mut self) {
        self.cursor = 0;
        self.scroll_to_cursor();
    }

    pub fn jump_to_bottom(&mut self) {
        self.cursor = self.rows.len().saturating_sub(1);
        self.scroll_to_cursor();
    }

    /// Called by the renderer with the height it has available
    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height;
        self.scroll_to_cursor();
    }

    /// Rows that fit in the viewport, with their absolute index
    pub fn visible_rows(&self) -> impl Iterator<Item = (usize, &TreeRow)> {
        self.rows
            .iter()
            .enumerate()
            .skip(self.offset)
            .take(self.viewport_height)
    }

    fn scroll_to_cursor(&mut self) {
        if self.viewport_height == 0 {
            return;
        }
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + self.viewport_height {
            self.offset = self.cursor + 1 - self.viewport_height;
        }
        let max_offset = self.rows.len().saturating_sub(self.viewport_height);
        self.offset = self.offset.min(max_offset);
    }

    fn rebuild(&mut self) {
        self.rows.clear();
        if let Some(root) = &self.root {
            flatten(root, None, 0, String::new(), true, &self.expanded, &mut self.rows);
        }
        self.cursor = self.cursor.min(self.rows.len().saturating_sub(1));
        self.scroll_to_cursor();
    }
}

fn flatten(
    value: &Value,
    key: Option<String>,
    depth: usize,
    pointer: String,
    last: bool,
    expanded: &HashSet<String>,
    rows: &mut Vec<TreeRow>,
) {
    let Some(container) = Container::of(value) else {
        rows.push(TreeRow {
            depth,
            key,
            kind: RowKind::Scalar(value.clone()),
            pointer,
            last,
        });
        return;
    };

    let len = match value {
        Value::Object(map) => map.len(),
        Value::Array(items) => items.len(),
        _ => 0,
    };

    if len == 0 || !expanded.contains(&pointer) {
        let kind = if len == 0 {
            RowKind::Empty(container)
        } else {
            RowKind::Collapsed { container, len }
        };
        rows.push(TreeRow {
            depth,
            key,
            kind,
            pointer,
            last,
        });
        return;
    }

    rows.push(TreeRow {
        depth,
        key,
        kind: RowKind::Open(container),
        pointer: pointer.clone(),
        last,
    });

    match value {
        Value::Object(map) => {
            for (i, (child_key, child)) in map.iter().enumerate() {
                flatten(
                    child,
                    Some(child_key.clone()),
                    depth + 1,
                    child_pointer(&pointer, child_key),
                    i + 1 == len,
                    expanded,
                    rows,
                );
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                flatten(
                    child,
                    None,
                    depth + 1,
                    child_pointer(&pointer, &i.to_string()),
                    i + 1 == len,
                    expanded,
                    rows,
                );
            }
        }
        _ => {}
    }

    rows.push(TreeRow {
        depth,
        key: None,
        kind: RowKind::Close(container),
        pointer,
        last,
    });
}

fn collect_containers(value: &Value, pointer: String, out: &mut HashSet<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                collect_containers(child, child_pointer(&pointer, key), out);
            }
            out.insert(pointer);
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                collect_containers(child, child_pointer(&pointer, &i.to_string()), out);
            }
            out.insert(pointer);
        }
        _ => {}
    }
}

impl Renderer for TreeView {
    fn render(&mut self, value: &Value) {
        self.root = Some(value.clone());
        self.expanded.clear();
        self.expanded.insert(String::new());
        self.cursor = 0;
        self.offset = 0;
        self.rebuild();
    }

    fn expand_all(&mut self) {
        if let Some(root) = &self.root {
            collect_containers(root, String::new(), &mut self.expanded);
        }
        self.rebuild();
    }
}

#[cfg(test)]
#[path = "tree_state_tests.rs"]
mod tree_state_tests;
