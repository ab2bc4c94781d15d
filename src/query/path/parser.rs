use crate::error::EvalError;

use super::{PathExpr, Step};

/// Recursive-descent parser for path expressions
///
/// Grammar:
/// ```text
/// expression := stage ('|' stage)*
/// stage      := head tail*
/// head       := ident | quoted | '*' | '@' | bracket
/// tail       := '.' (ident | quoted | '*' | '@') | bracket
/// bracket    := '[' ']' | '[' '*' ']' | '[' int ']' | '[' int? ':' int? ']'
/// ```
pub(super) struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    pub(super) fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    pub(super) fn parse(mut self) -> Result<PathExpr, EvalError> {
        let mut stages = vec![self.parse_stage()?];

        loop {
            self.skip_whitespace();
            match self.peek() {
                None => break,
                Some('|') => {
                    self.pos += 1;
                    stages.push(self.parse_stage()?);
                }
                Some(ch) => return Err(self.error(format!("unexpected '{}'", ch))),
            }
        }

        Ok(PathExpr { stages })
    }

    fn parse_stage(&mut self) -> Result<Vec<Step>, EvalError> {
        self.skip_whitespace();
        let mut steps = vec![self.parse_head()?];

        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('.') => {
                    self.pos += 1;
                    self.skip_whitespace();
                    steps.push(self.parse_dotted()?);
                }
                Some('[') => steps.push(self.parse_bracket()?),
                _ => break,
            }
        }

        Ok(steps)
    }

    fn parse_head(&mut self) -> Result<Step, EvalError> {
        match self.peek() {
            Some('[') => self.parse_bracket(),
            Some(_) => self.parse_dotted(),
            None => Err(self.error("expected expression".to_string())),
        }
    }

    /// Anything allowed right after a dot
    fn parse_dotted(&mut self) -> Result<Step, EvalError> {
        match self.peek() {
            Some('*') => {
                self.pos += 1;
                Ok(Step::ObjectWildcard)
            }
            Some('@') => {
                self.pos += 1;
                Ok(Step::Current)
            }
            Some('"') => self.parse_quoted().map(Step::Field),
            Some(ch) if is_ident_start(ch) => Ok(Step::Field(self.parse_ident())),
            Some(ch) => Err(self.error(format!("unexpected '{}'", ch))),
            None => Err(self.error("expected identifier".to_string())),
        }
    }

    fn parse_ident(&mut self) -> String {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if !is_ident_continue(ch) {
                break;
            }
            self.pos += ch.len_utf8();
        }
        self.src[start..self.pos].to_string()
    }

    fn parse_quoted(&mut self) -> Result<String, EvalError> {
        let start = self.pos;
        self.pos += 1;

        let mut escaped = false;
        while let Some(ch) = self.peek() {
            self.pos += ch.len_utf8();
            match ch {
                '\\' if !escaped => escaped = true,
                '"' if !escaped => {
                    // Quoted identifiers follow JSON string escaping rules
                    return serde_json::from_str::<String>(&self.src[start..self.pos]).map_err(
                        |e| EvalError::Parse {
                            offset: start,
                            message: format!("invalid quoted identifier: {}", e),
                        },
                    );
                }
                _ => escaped = false,
            }
        }

        Err(EvalError::Parse {
            offset: start,
            message: "unterminated quoted identifier".to_string(),
        })
    }

    fn parse_bracket(&mut self) -> Result<Step, EvalError> {
        self.expect('[')?;
        self.skip_whitespace();

        let step = match self.peek() {
            Some(']') => Step::Flatten,
            Some('*') => {
                self.pos += 1;
                Step::Wildcard
            }
            _ => {
                let start = self.parse_optional_int()?;
                self.skip_whitespace();
                if self.peek() == Some(':') {
                    self.pos += 1;
                    self.skip_whitespace();
                    let stop = self.parse_optional_int()?;
                    Step::Slice(start, stop)
                } else {
                    match start {
                        Some(index) => Step::Index(index),
                        None => return Err(self.error("expected index".to_string())),
                    }
                }
            }
        };

        self.skip_whitespace();
        self.expect(']')?;
        Ok(step)
    }

    fn parse_optional_int(&mut self) -> Result<Option<i64>, EvalError> {
        let start = self.pos;
        if self.peek() == Some('-') {
            self.pos += 1;
        }
        while matches!(self.peek(), Some(ch) if ch.is_ascii_digit()) {
            self.pos += 1;
        }

        let text = &self.src[start..self.pos];
        if text.is_empty() {
            return Ok(None);
        }
        text.parse::<i64>().map(Some).map_err(|_| EvalError::Parse {
            offset: start,
            message: format!("invalid number '{}'", text),
        })
    }

    fn expect(&mut self, expected: char) -> Result<(), EvalError> {
        match self.peek() {
            Some(ch) if ch == expected => {
                self.pos += 1;
                Ok(())
            }
            Some(ch) => Err(self.error(format!("expected '{}', found '{}'", expected, ch))),
            None => Err(self.error(format!("expected '{}'", expected))),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.pos += ch.len_utf8();
        }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn error(&self, message: String) -> EvalError {
        EvalError::Parse {
            offset: self.pos,
            message,
        }
    }
}

fn is_ident_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_ident_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod parser_tests;
