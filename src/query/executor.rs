use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread::{self, JoinHandle, sleep};
use std::time::{Duration, Instant};

use serde_json::{Deserializer, Value};

use crate::error::{EvalError, JexError};
use crate::query::evaluator::Evaluator;

/// How long a single jq run may take before it is killed
pub const DEFAULT_JQ_TIMEOUT: Duration = Duration::from_secs(2);

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Evaluate expressions with an external jq binary
pub struct JqEvaluator {
    jq_path: PathBuf,
    timeout: Duration,
}

impl JqEvaluator {
    /// Locate jq in PATH
    pub fn locate() -> Result<Self, JexError> {
        let jq_path = which::which("jq").map_err(|_| JexError::JqNotFound)?;
        log::debug!("Using jq at {}", jq_path.display());
        Ok(Self::with_path(jq_path))
    }

    pub fn with_path(jq_path: PathBuf) -> Self {
        Self {
            jq_path,
            timeout: DEFAULT_JQ_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Run jq over the serialized document
    ///
    /// # Returns
    /// * `Ok(String)` - Compact jq output, one value per line
    /// * `Err(EvalError)` - jq's stderr, a process failure, or the deadline expiring
    fn run(&self, document: &Value, filter: &str) -> Result<String, EvalError> {
        let mut child = Command::new(&self.jq_path)
            .arg("--compact-output")
            .arg(filter)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| EvalError::Jq(format!("failed to spawn jq: {}", e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            let input = serde_json::to_vec(document)
                .map_err(|e| EvalError::Runtime(format!("failed to serialize document: {}", e)))?;
            stdin
                .write_all(&input)
                .map_err(|e| EvalError::Jq(format!("failed to write to jq stdin: {}", e)))?;
        }

        // jq blocks once a pipe buffer fills, so read both while polling
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let deadline = Instant::now() + self.timeout;
        let status = loop {
            match child
                .try_wait()
                .map_err(|e| EvalError::Jq(format!("failed to wait for jq: {}", e)))?
            {
                Some(status) => break status,
                None if Instant::now() >= deadline => {
                    let _ = child.kill();
                    let _ = child.wait();
                    log::debug!("Killed jq after {:?}: {}", self.timeout, filter);
                    return Err(EvalError::Jq("timed out".to_string()));
                }
                None => sleep(POLL_INTERVAL),
            }
        };

        let stdout = stdout.join().unwrap_or_default();
        if status.success() {
            Ok(String::from_utf8_lossy(&stdout).to_string())
        } else {
            let stderr = stderr.join().unwrap_or_default();
            Err(EvalError::Jq(
                String::from_utf8_lossy(&stderr).trim().to_string(),
            ))
        }
    }
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        buf
    })
}

impl Evaluator for JqEvaluator {
    fn evaluate(&self, document: &Value, expression: &str) -> Result<Value, EvalError> {
        let stdout = self.run(document, expression)?;
        collect_outputs(&stdout)
    }
}

/// Fold jq's output stream into one value: none -> null, one -> itself, many -> array
pub(crate) fn collect_outputs(stdout: &str) -> Result<Value, EvalError> {
    let mut values = Deserializer::from_str(stdout)
        .into_iter::<Value>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| EvalError::Jq(format!("unreadable jq output: {}", e)))?;

    Ok(match values.len() {
        0 => Value::Null,
        1 => values.remove(0),
        _ => Value::Array(values),
    })
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod executor_tests;
