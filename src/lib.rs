//! jex: explore a JSON document with live, debounced queries

pub mod app;
pub mod config;
pub mod error;
pub mod history;
pub mod input;
pub mod query;
pub mod session;
pub mod tree;
pub mod view;
pub mod widgets;


pub use error::{EvalError, JexError};
