//! Default values used throughout cyclegraph
//!
//! Builders fall back to these when a field is left unset.

/// Cycle detection defaults
pub mod detector {
    use crate::config::DirectedAlgorithm;

    /// Algorithm used for directed graphs when none is configured
    pub const DEFAULT_DIRECTED_ALGORITHM: DirectedAlgorithm = DirectedAlgorithm::DepthFirst;

    /// Round limit for the reachability closure; `None` means "bounded by the
    /// vertex count"
    pub const DEFAULT_MAX_ROUNDS: Option<usize> = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DirectedAlgorithm;

    #[test]
    fn test_detector_constants() {
        assert_eq!(
            detector::DEFAULT_DIRECTED_ALGORITHM,
            DirectedAlgorithm::DepthFirst
        );
        assert_eq!(detector::DEFAULT_MAX_ROUNDS, None);
    }
}
