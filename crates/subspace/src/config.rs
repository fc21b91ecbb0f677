/// Configuration for building a `SubspaceModel`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModelConfig {
    rank: Option<usize>,
}

impl ModelConfig {
    /// Keep at most `rank` singular directions. `None` keeps min(3N, M).
    pub fn with_rank(mut self, rank: Option<usize>) -> Self {
        self.rank = rank;
        self
    }

    pub fn rank(&self) -> Option<usize> {
        self.rank
    }
}
