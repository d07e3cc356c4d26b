//! Search configuration parameters.

/// Parameters controlling a program-synthesis search.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Maximum program length (n_max). Nodes at this length are terminal.
    pub max_len: usize,

    /// Number of search iterations (n_iter). Each iteration runs one
    /// select / expand / simulate / backup cycle.
    pub iterations: usize,

    /// UCB1 exploration constant (c_param) used during tree descent.
    /// Final extraction always uses 0 (pure exploitation).
    pub exploration: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_len: 5,
            iterations: 1000,
            exploration: 1.4,
        }
    }
}

impl SearchConfig {
    /// Create a config with the given length cap and iteration budget.
    pub fn new(max_len: usize, iterations: usize) -> Self {
        Self {
            max_len,
            iterations,
            ..Default::default()
        }
    }

    /// Override the exploration constant.
    pub fn with_exploration(mut self, exploration: f64) -> Self {
        self.exploration = exploration;
        self
    }
}
