use crate::error::JexError;
use serde_json::Value;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Read JSON from stdin or a file
pub struct InputReader;

impl InputReader {
    /// Read and parse JSON from stdin or a file path
    ///
    /// # Arguments
    /// * `path` - Optional file path. If None, reads from stdin.
    ///
    /// # Returns
    /// * `Ok(Value)` - The parsed document
    /// * `Err(JexError)` - If JSON is invalid or an IO error occurs
    pub fn read_json(path: Option<&Path>) -> Result<Value, JexError> {
        let json_str = match path {
            Some(file_path) => {
                let mut file = File::open(file_path)?;
                let mut contents = String::new();
                file.read_to_string(&mut contents)?;
                contents
            }
            None => {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                buffer
            }
        };

        Self::read_json_from_str(&json_str)
    }

    /// Parse a JSON document held in memory
    pub fn read_json_from_str(json_str: &str) -> Result<Value, JexError> {
        serde_json::from_str::<Value>(json_str).map_err(|e| JexError::InvalidJson(e.to_string()))
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod reader_tests;
