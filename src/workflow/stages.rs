//! Stage Sequence
//!
//! Fixed, ordered phase labels of an analysis run, indexed by progress.

use std::sync::Arc;

use crate::types::{AppError, AppResult};

pub const RESEARCH_STAGES: [&str; 6] = [
    "Gathering market data...",
    "Analyzing competitors...",
    "Identifying market trends...",
    "Evaluating team requirements...",
    "Performing SWOT analysis...",
    "Compiling final insights...",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageSequence {
    labels: Arc<[String]>,
}

impl StageSequence {
    pub fn new(labels: Vec<String>) -> AppResult<Self> {
        if labels.is_empty() {
            return Err(AppError::InvalidRequest(
                "a stage sequence needs at least one stage".to_string(),
            ));
        }
        Ok(Self { labels: labels.into() })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn first(&self) -> &str {
        &self.labels[0]
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// `floor(progress / 100 * len)`, clamped to the last stage so that
    /// progress 100 stays on the final label.
    pub fn stage_index(&self, progress: u8) -> usize {
        let progress = usize::from(progress.min(100));
        (progress * self.len() / 100).min(self.len() - 1)
    }
}

impl Default for StageSequence {
    fn default() -> Self {
        Self {
            labels: RESEARCH_STAGES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_index_boundaries() {
        let stages = StageSequence::default();
        assert_eq!(stages.stage_index(0), 0);
        assert_eq!(stages.stage_index(16), 0);
        assert_eq!(stages.stage_index(17), 1);
        assert_eq!(stages.stage_index(34), 2);
        assert_eq!(stages.stage_index(50), 3);
        assert_eq!(stages.stage_index(67), 4);
        assert_eq!(stages.stage_index(84), 5);
        assert_eq!(stages.stage_index(100), 5);
        assert_eq!(stages.stage_index(255), 5);
    }

    #[test]
    fn test_stage_index_is_monotonic() {
        let stages = StageSequence::default();
        let indices: Vec<usize> = (0..=100).map(|p| stages.stage_index(p)).collect();
        assert!(indices.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*indices.last().unwrap(), stages.len() - 1);
    }

    #[test]
    fn test_empty_sequence_rejected() {
        assert!(StageSequence::new(Vec::new()).is_err());
        let single = StageSequence::new(vec!["Working...".to_string()]).unwrap();
        assert_eq!(single.stage_index(100), 0);
        assert_eq!(single.first(), "Working...");
    }
}
