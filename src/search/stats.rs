//! Search statistics for diagnostics and for comparing pruned and unpruned search.

use serde::{Deserialize, Serialize};

/// Counters collected during one search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards evaluated, root included.
    pub nodes_visited: u64,

    /// Boards that were terminal and scored by utility.
    pub terminal_nodes: u64,

    /// Alpha or beta cutoffs taken.
    pub cutoffs: u64,

    /// Deepest absolute ply reached (marks on the board).
    pub deepest_ply: u8,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visit to a board with `ply` marks placed.
    pub(crate) fn visit(&mut self, ply: usize, is_terminal: bool) {
        self.nodes_visited += 1;
        if is_terminal {
            self.terminal_nodes += 1;
        }
        let ply = ply as u8;
        if ply > self.deepest_ply {
            self.deepest_ply = ply;
        }
    }

    /// Calculate nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

impl std::fmt::Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "nodes={} terminal={} cutoffs={} deepest_ply={} time={}us",
            self.nodes_visited, self.terminal_nodes, self.cutoffs, self.deepest_ply, self.time_us
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visit_tracks_depth_and_terminals() {
        let mut stats = SearchStats::new();
        stats.visit(2, false);
        stats.visit(5, true);
        stats.visit(3, true);

        assert_eq!(stats.nodes_visited, 3);
        assert_eq!(stats.terminal_nodes, 2);
        assert_eq!(stats.deepest_ply, 5);
    }

    #[test]
    fn test_nodes_per_second() {
        let stats = SearchStats {
            nodes_visited: 500,
            time_us: 250_000,
            ..Default::default()
        };
        assert!((stats.nodes_per_second() - 2000.0).abs() < 1e-9);
        assert_eq!(SearchStats::new().nodes_per_second(), 0.0);
    }

    #[test]
    fn test_serialization() {
        let stats = SearchStats {
            nodes_visited: 10,
            cutoffs: 3,
            ..Default::default()
        };
        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: SearchStats = serde_json::from_str(&json).unwrap();
        assert_eq!(stats, deserialized);
    }
}
