//! Monte Carlo Tree Search over symbolic programs.
//!
//! Implements the select / expand / simulate / backup cycle with UCB1
//! selection. The primitive set, goal function and configuration are
//! explicit state of the [`Search`] value; there is no ambient global.

use crate::{
    config::SearchConfig,
    node::{Node, NodeId},
    tree::Tree,
};
use rand::Rng;
use synth_core::{Goal, PrimId, PrimitiveSet, Program, Result, Score, SynthError};

/// One growth direction for a program state.
///
/// Both directions are offered for every primitive so the search can grow
/// an expression from either end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Growth {
    /// Add the primitive at the right end of the sequence.
    Append,
    /// Add the primitive at the left end, making it the new operator.
    Prepend,
}

/// A search action: grow the state by one primitive in one direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Action {
    pub prim: PrimId,
    pub growth: Growth,
}

impl Action {
    /// Apply the action to a state, producing a fresh program.
    pub fn apply(&self, state: &Program) -> Program {
        match self.growth {
            Growth::Append => state.with_appended(self.prim),
            Growth::Prepend => state.with_prepended(self.prim),
        }
    }
}

/// Result of a finished search.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    /// Highest-scoring program seen in any rollout.
    pub best_program: Program,

    /// Goal score of `best_program`.
    pub best_score: Score,

    /// Root child with the highest mean reward (exploitation-only pick).
    pub root_choice: Program,

    /// Mean reward of the chosen root child.
    pub root_choice_mean: f64,

    /// Visit count of the chosen root child.
    pub root_choice_visits: u32,

    /// Total rollouts backed up through the root (equals the iteration
    /// budget).
    pub root_visits: u32,
}

/// Monte Carlo Tree Search for program synthesis.
///
/// Generic over:
/// - `G`: The goal function scoring candidate programs
/// - `R`: The random number generator (inject a seeded one for
///   reproducible runs)
///
/// The search starts from the empty program and grows candidates one
/// primitive at a time, in both directions, up to the configured length.
pub struct Search<'a, G: Goal, R: Rng> {
    config: SearchConfig,
    primitives: &'a PrimitiveSet,
    goal: G,
    rng: R,
    tree: Tree,
    best: Option<(Program, Score)>,
}

impl<'a, G: Goal, R: Rng> Search<'a, G, R> {
    /// Create a new search rooted at the empty program.
    pub fn new(config: SearchConfig, primitives: &'a PrimitiveSet, goal: G, rng: R) -> Self {
        Self {
            config,
            primitives,
            goal,
            rng,
            tree: Tree::new(Program::empty()),
            best: None,
        }
    }

    /// Run the configured number of iterations and extract the result.
    ///
    /// Each iteration selects a leaf via the tree policy, simulates a
    /// random rollout from it, and backs the reward up the parent chain.
    /// Extraction picks the root child with the highest mean reward, with
    /// the exploration term switched off.
    ///
    /// # Errors
    /// Returns `SynthError::NoChildren` when the root never gained a child
    /// (zero iterations, a zero length budget, or an empty primitive set).
    pub fn run(&mut self) -> Result<SearchResult> {
        for _ in 0..self.config.iterations {
            let leaf = self.tree_policy();
            let (final_state, reward) = self.default_policy(leaf);
            self.record_best(final_state, reward);
            self.backup(leaf, reward.get());
        }

        let choice = self.best_child(NodeId::ROOT, 0.0)?;
        let (best_program, best_score) = self
            .best
            .clone()
            .expect("BUG: root has children but no rollout was recorded");
        let chosen = self.tree.get(choice);

        Ok(SearchResult {
            best_program,
            best_score,
            root_choice: chosen.state.clone(),
            root_choice_mean: chosen.mean_value(),
            root_choice_visits: chosen.visit_count,
            root_visits: self.tree.root().visit_count,
        })
    }

    /// All actions available from a state.
    ///
    /// Empty iff the state has reached the length cap. Otherwise, per
    /// primitive in set order, emits Append then Prepend; the order only
    /// matters for tie-breaking under uniform random choice.
    pub fn possible_actions(&self, state: &Program) -> Vec<Action> {
        if state.len() >= self.config.max_len {
            return Vec::new();
        }
        let mut actions = Vec::with_capacity(2 * self.primitives.len());
        for prim in self.primitives.ids() {
            actions.push(Action {
                prim,
                growth: Growth::Append,
            });
            actions.push(Action {
                prim,
                growth: Growth::Prepend,
            });
        }
        actions
    }

    /// A state is terminal at the length cap or on a perfect score.
    fn is_terminal(&self, state: &Program) -> bool {
        state.len() >= self.config.max_len
            || self.goal.score(self.primitives, state).is_perfect()
    }

    fn is_fully_expanded(&self, id: NodeId) -> bool {
        let node = self.tree.get(id);
        node.children.len() >= self.possible_actions(&node.state).len()
    }

    /// Create one child per possible action, in action order.
    ///
    /// Not idempotent: a second call would duplicate the children, so this
    /// is only reached through the fully-expanded check in `tree_policy`.
    fn expand(&mut self, id: NodeId) {
        let state = self.tree.get(id).state.clone();
        for action in self.possible_actions(&state) {
            let child = Node::new(action.apply(&state), Some(id));
            let child_id = self.tree.add(child);
            self.tree.get_mut(id).children.push(child_id);
        }
    }

    /// Descend from the root to the leaf to simulate from.
    ///
    /// Terminal nodes are returned immediately; a node that is not fully
    /// expanded is expanded and one of its children chosen uniformly at
    /// random; otherwise descent continues through `best_child`.
    fn tree_policy(&mut self) -> NodeId {
        let mut current = NodeId::ROOT;
        loop {
            if self.is_terminal(&self.tree.get(current).state) {
                return current;
            }

            if !self.is_fully_expanded(current) {
                self.expand(current);
                let n = self.tree.get(current).children.len();
                debug_assert!(n > 0, "BUG: expanding a non-terminal node added no children");
                let pick = self.rng.gen_range(0..n);
                return self.tree.get(current).children[pick];
            }

            match self.best_child(current, self.config.exploration) {
                Ok(child) => current = child,
                // No expandable actions from here (empty primitive set);
                // simulate in place
                Err(_) => return current,
            }
        }
    }

    /// Child maximizing `mean + c * sqrt(2 ln(parent.visits) / visits)`.
    ///
    /// Ties break on the first maximal child. While exploring, an
    /// unvisited child scores infinity so that every freshly expanded
    /// child is simulated once before mean-based selection can pass it
    /// over; with `c = 0` an unvisited child falls back to a mean of 0.
    fn best_child(&self, id: NodeId, exploration: f64) -> Result<NodeId> {
        let node = self.tree.get(id);
        if node.children.is_empty() {
            return Err(SynthError::NoChildren);
        }
        if exploration > 0.0 {
            debug_assert!(node.visit_count > 0, "BUG: exploring below an unvisited parent");
        }
        let parent_visits = node.visit_count as f64;

        let mut best = node.children[0];
        let mut best_score = f64::NEG_INFINITY;

        for &child_id in &node.children {
            let child = self.tree.get(child_id);
            let score = if exploration <= 0.0 {
                child.mean_value()
            } else if child.visit_count == 0 {
                f64::INFINITY
            } else {
                child.mean_value()
                    + exploration
                        * (2.0 * parent_visits.ln() / child.visit_count as f64).sqrt()
            };

            if score > best_score {
                best_score = score;
                best = child_id;
            }
        }

        Ok(best)
    }

    /// Random rollout from a leaf.
    ///
    /// Grows a copy of the leaf state with uniformly random actions until
    /// no actions remain, the length cap is hit, or a perfect score is
    /// reached; returns the final state with its goal score.
    fn default_policy(&mut self, leaf: NodeId) -> (Program, Score) {
        let mut state = self.tree.get(leaf).state.clone();

        while state.len() < self.config.max_len {
            let actions = self.possible_actions(&state);
            if actions.is_empty() {
                break;
            }
            let action = actions[self.rng.gen_range(0..actions.len())];
            state = action.apply(&state);
            if self.goal.score(self.primitives, &state).is_perfect() {
                break;
            }
        }

        let score = self.goal.score(self.primitives, &state);
        (state, score)
    }

    /// Walk the parent chain to the root inclusive, crediting the reward.
    fn backup(&mut self, mut id: NodeId, reward: f64) {
        loop {
            let node = self.tree.get_mut(id);
            node.visit_count += 1;
            node.value_sum += reward;
            match node.parent {
                Some(parent) => id = parent,
                None => break,
            }
        }
    }

    /// Keep the strictly best program seen so far; earliest wins ties, so
    /// the best score is non-decreasing in the iteration count.
    fn record_best(&mut self, program: Program, score: Score) {
        let improved = match &self.best {
            None => true,
            Some((_, best)) => score > *best,
        };
        if improved {
            self.best = Some((program, score));
        }
    }
}
