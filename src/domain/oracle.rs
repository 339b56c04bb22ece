//! Oracle port: the external text-in/text-out collaborator that picks
//! constructors. The core only prepares requests and parses replies; transport,
//! prompt templating, and retries live outside this crate.

use std::fmt;
use std::sync::OnceLock;

use anyhow::Result;
use regex::Regex;

use crate::domain::error::ResolveError;

/// What the oracle is being asked about.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryScope {
    /// First query for a method parameter: the method body is the context.
    Method { code: String },
    /// Narrower follow-up for a parameter of an already chosen constructor.
    Constructor { signature: String },
}

/// One request handed to the oracle. The oracle has no session memory, so every
/// request carries its own dependency report.
#[derive(Debug, Clone, PartialEq)]
pub struct OracleRequest {
    pub scope: QueryScope,
    pub param_name: String,
    pub dependency_report: String,
}

impl fmt::Display for OracleRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.scope {
            QueryScope::Method { code } => write!(f, "API Method: ```java {code}```")?,
            QueryScope::Constructor { signature } => {
                write!(f, "Constructor: ```java {signature}```")?
            }
        }
        write!(
            f,
            "\n\nParameter: `{}`\n\nDependent Types:\n{}",
            self.param_name, self.dependency_report
        )
    }
}

/// Stateless decision-maker: a language model, a human, or a scripted replay.
pub trait Oracle {
    /// Returns free text expected to contain one `- Constructor:` block.
    fn choose_constructor(&self, request: &OracleRequest) -> Result<String>;
}

/// The oracle's chosen constructor, extracted from its reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorChoice {
    /// Signature up to the closing paren, e.g. `Position(int line, int column)`.
    pub signature: String,
    /// The full line as the oracle wrote it.
    pub raw: String,
}

/// Matches the marker line and captures the first non-empty line after it.
fn choice_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"- Constructors?:\s*\n\s*([^\n]+)").expect("constructor marker regex")
    })
}

/// Extracts exactly one constructor choice from an oracle reply.
///
/// Replies often restate candidate lists before concluding; the conclusion is the
/// last `- Constructor:` block, so that one wins.
pub fn parse_constructor_choice(
    type_name: &str,
    response: &str,
) -> Result<ConstructorChoice, ResolveError> {
    let raw = choice_regex()
        .captures_iter(response)
        .last()
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|line| !line.is_empty())
        .ok_or_else(|| ResolveError::OracleParse {
            type_name: type_name.to_string(),
            response: response.to_string(),
        })?;

    // `Sig(...): {'param': 'type'}` — the signature ends at the `):` boundary.
    // A bare `Sig()` line has no boundary and is taken whole.
    let signature = match raw.find("):") {
        Some(idx) => raw[..=idx].to_string(),
        None => raw.clone(),
    };
    Ok(ConstructorChoice { signature, raw })
}
