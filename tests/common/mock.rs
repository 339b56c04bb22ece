//! Mock implementations for integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use anyhow::{Result, anyhow};
use type_closure::domain::oracle::{Oracle, OracleRequest};

/// Oracle that replays canned replies and records every request it received.
pub struct RecordingOracle {
    replies: RefCell<VecDeque<String>>,
    requests: RefCell<Vec<OracleRequest>>,
}

impl RecordingOracle {
    pub fn new(replies: &[&str]) -> Self {
        Self {
            replies: RefCell::new(replies.iter().map(|r| r.to_string()).collect()),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Wraps each signature line in the reply shape the choice parser expects.
    pub fn choosing(lines: &[&str]) -> Self {
        let replies: Vec<String> = lines
            .iter()
            .map(|line| format!("Let's do this step by step.\n\n- Constructor:\n    {line}\n"))
            .collect();
        Self {
            replies: RefCell::new(replies.into_iter().collect()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn requests(&self) -> Vec<OracleRequest> {
        self.requests.borrow().clone()
    }
}

impl Oracle for RecordingOracle {
    fn choose_constructor(&self, request: &OracleRequest) -> Result<String> {
        self.requests.borrow_mut().push(request.clone());
        self.replies
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| anyhow!("no scripted reply left for `{}`", request.param_name))
    }
}
