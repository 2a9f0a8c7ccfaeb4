//! The two-line rule grammar.
//!
//! ```text
//! value <V> goes to bot <B>
//! bot <B> gives low to (bot|output) <L> and high to (bot|output) <H>
//! ```

use crate::error::RuleError;
use balance::{Diff, Target, TargetKind};
use std::str::SplitWhitespace;

/// Parse one trimmed, non-empty line. `line` is the 1-based line number
/// used in error messages.
pub fn parse_line(line: usize, text: &str) -> Result<Diff, RuleError> {
    let mut words = Words {
        inner: text.split_whitespace(),
        line,
        text,
    };
    match text.as_bytes().first() {
        Some(b'v') => {
            words.keyword("value")?;
            let value = words.number("value")?;
            words.keyword("goes")?;
            words.keyword("to")?;
            words.keyword("bot")?;
            let bot = words.number("bot id")?;
            words.finish()?;
            Ok(Diff::Value {
                bot: bot.into(),
                value,
            })
        }
        Some(b'b') => {
            words.keyword("bot")?;
            let bot = words.number("bot id")?;
            words.keyword("gives")?;
            words.keyword("low")?;
            words.keyword("to")?;
            let low = words.target()?;
            words.keyword("and")?;
            words.keyword("high")?;
            words.keyword("to")?;
            let high = words.target()?;
            words.finish()?;
            Ok(Diff::Targets {
                bot: bot.into(),
                low,
                high,
            })
        }
        _ => Err(RuleError::syntax(line, text, "unrecognized instruction")),
    }
}

/// Map a kind word from the rule text. Rules say `output` where the
/// trace says `bin`.
pub fn target_kind(word: &str) -> Option<TargetKind> {
    match word {
        "bot" => Some(TargetKind::Bot),
        "output" => Some(TargetKind::Bin),
        _ => None,
    }
}

struct Words<'a> {
    inner: SplitWhitespace<'a>,
    line: usize,
    text: &'a str,
}

impl<'a> Words<'a> {
    fn next(&mut self, expected: &str) -> Result<&'a str, RuleError> {
        self.inner.next().ok_or_else(|| {
            RuleError::syntax(
                self.line,
                self.text,
                format!("expected {expected}, found end of line"),
            )
        })
    }

    fn keyword(&mut self, word: &str) -> Result<(), RuleError> {
        let found = self.next(&format!("'{word}'"))?;
        if found == word {
            Ok(())
        } else {
            Err(RuleError::syntax(
                self.line,
                self.text,
                format!("expected '{word}', found '{found}'"),
            ))
        }
    }

    fn number(&mut self, what: &str) -> Result<u32, RuleError> {
        let found = self.next(what)?;
        found.parse().map_err(|_| {
            RuleError::syntax(
                self.line,
                self.text,
                format!("expected {what} as an unsigned integer, found '{found}'"),
            )
        })
    }

    fn target(&mut self) -> Result<Target, RuleError> {
        let found = self.next("'bot' or 'output'")?;
        let kind = target_kind(found).ok_or_else(|| {
            RuleError::syntax(
                self.line,
                self.text,
                format!("expected 'bot' or 'output', found '{found}'"),
            )
        })?;
        let id = self.number("target id")?;
        Ok(Target::new(kind, id))
    }

    fn finish(mut self) -> Result<(), RuleError> {
        match self.inner.next() {
            None => Ok(()),
            Some(extra) => Err(RuleError::syntax(
                self.line,
                self.text,
                format!("unexpected trailing '{extra}'"),
            )),
        }
    }
}

/// Lazily turns lines into diffs.
///
/// Stops at end of input, at the first empty line, or right after
/// yielding the first error. Lines past the stopping point are never read.
pub struct Rules<I> {
    lines: I,
    line: usize,
    done: bool,
}

impl<I> Rules<I>
where
    I: Iterator<Item = Result<String, RuleError>>,
{
    /// Parse the lines produced by `lines`.
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            line: 0,
            done: false,
        }
    }

    /// Number of lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.line
    }
}

impl<I> Iterator for Rules<I>
where
    I: Iterator<Item = Result<String, RuleError>>,
{
    type Item = Result<Diff, RuleError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let text = match self.lines.next() {
            Some(Ok(text)) => text,
            Some(Err(e)) => {
                self.done = true;
                return Some(Err(e));
            }
            None => {
                self.done = true;
                return None;
            }
        };
        self.line += 1;
        if text.is_empty() {
            tracing::debug!(line = self.line, "empty line, end of rules");
            self.done = true;
            return None;
        }
        let parsed = parse_line(self.line, &text);
        if parsed.is_err() {
            self.done = true;
        }
        Some(parsed)
    }
}

impl<I> std::iter::FusedIterator for Rules<I> where I: Iterator<Item = Result<String, RuleError>> {}

/// Parse in-memory text. Each line is trimmed before parsing.
pub fn parse_str(text: &str) -> Rules<impl Iterator<Item = Result<String, RuleError>> + '_> {
    Rules::new(text.lines().map(|l| Ok(l.trim().to_string())))
}
