//! Hook-driven breadth-first traversal.
//!
//! [`Bfs`] runs a fixed breadth-first skeleton over a [`Graph`](crate::graph::Graph)
//! and calls into a [`BfsHooks`] implementation at three points per vertex.
//! Hooks stop a run by setting the shared [`AbortFlag`]; the run then ends
//! with [`Outcome::Aborted`], which callers read as an answer, not a failure.

mod bfs;
mod hooks;
mod path;

pub use bfs::Bfs;
pub use hooks::{AbortFlag, BfsHooks, EdgeFn, HookFns, VertexFn};

use serde::{Deserialize, Serialize};

/// How a traversal run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Every reachable vertex was processed.
    Completed,
    /// A hook set the abort flag.
    Aborted,
}

impl Outcome {
    /// Returns `true` for [`Outcome::Aborted`].
    pub fn is_aborted(self) -> bool {
        matches!(self, Outcome::Aborted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_serde_round_trip() {
        for outcome in [Outcome::Completed, Outcome::Aborted] {
            let json = serde_json::to_string(&outcome).unwrap();
            let back: Outcome = serde_json::from_str(&json).unwrap();
            assert_eq!(back, outcome);
        }
        assert_eq!(serde_json::to_string(&Outcome::Aborted).unwrap(), r#""Aborted""#);
    }
}
