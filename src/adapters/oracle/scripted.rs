//! Replay oracle: canned replies for offline runs and tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::Path;

use anyhow::{Context as _, Result, bail};

use crate::domain::oracle::{Oracle, OracleRequest};

/// Separator line between replies in a script file.
const REPLY_SEPARATOR: &str = "---";

/// Serves prerecorded replies in order; errors once the script runs dry.
///
/// Single-threaded on purpose: a session never shares its oracle across
/// threads, so plain `RefCell` state suffices.
pub struct ScriptedOracle {
    replies: RefCell<VecDeque<String>>,
}

impl ScriptedOracle {
    pub fn new(replies: impl IntoIterator<Item = String>) -> Self {
        Self {
            replies: RefCell::new(replies.into_iter().collect()),
        }
    }

    /// Loads a script file: replies separated by `---` lines.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read oracle script: {}", path.display()))?;

        let mut replies = Vec::new();
        let mut current = String::new();
        for line in content.lines() {
            if line.trim() == REPLY_SEPARATOR {
                if !current.trim().is_empty() {
                    replies.push(std::mem::take(&mut current));
                } else {
                    current.clear();
                }
            } else {
                current.push_str(line);
                current.push('\n');
            }
        }
        if !current.trim().is_empty() {
            replies.push(current);
        }
        Ok(Self::new(replies))
    }

    pub fn remaining(&self) -> usize {
        self.replies.borrow().len()
    }
}

impl Oracle for ScriptedOracle {
    fn choose_constructor(&self, request: &OracleRequest) -> Result<String> {
        tracing::debug!(param = request.param_name, "scripted oracle serving reply");
        match self.replies.borrow_mut().pop_front() {
            Some(reply) => Ok(reply),
            None => bail!(
                "oracle script exhausted: no reply left for parameter `{}`",
                request.param_name
            ),
        }
    }
}
