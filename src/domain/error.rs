//! Resolution error taxonomy.
//!
//! Graph lookup misses are deliberately absent: a referenced name the graph does
//! not know degrades to a builtin leaf instead of failing the run.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    /// The oracle reply contained no parseable constructor block. Fatal for the
    /// current step; retrying is the caller's concern.
    #[error("oracle reply for `{type_name}` has no constructor block:\n{response}")]
    OracleParse { type_name: String, response: String },

    /// The oracle chose a signature that neither the target type nor any of its
    /// candidates declares. No fallback constructor is guessed.
    #[error("constructor `{signature}` is not declared by `{type_name}` or its candidates")]
    UnknownConstructor { type_name: String, signature: String },

    /// A non-static method whose declaring class offers neither constructors nor
    /// builders: no receiver object can be produced.
    #[error("cannot instantiate receiver class `{class_name}`: no constructors or builders")]
    NoReceiver { class_name: String },

    /// Transport failure reported by the oracle collaborator.
    #[error(transparent)]
    Oracle(#[from] anyhow::Error),
}
