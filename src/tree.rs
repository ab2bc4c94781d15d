pub mod tree_render;
mod tree_state;

pub use tree_state::{Container, RowKind, TreeRow, TreeView};
