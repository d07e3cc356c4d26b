//! Property-based tests for the synthesis search.
//!
//! These check the action-generation bounds, determinism under a fixed
//! seed, root visit accounting, and monotonicity of the best score in the
//! iteration budget.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use synth_core::{PrimId, Program};
use synth_mcts::problems::{arith_primitives, TargetGoal};
use synth_mcts::{Search, SearchConfig};

fn arb_seed() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Iteration budgets small enough to keep the suite fast.
fn arb_iterations() -> impl Strategy<Value = usize> {
    1usize..150
}

/// A random (not necessarily well-formed) program over the arithmetic
/// alphabet, up to 8 primitives long.
fn arb_program() -> impl Strategy<Value = Program> {
    prop::collection::vec(0usize..3, 0..8).prop_map(|indices| {
        let primitives = arith_primitives();
        let ids: Vec<PrimId> = primitives.ids().collect();
        Program::from_ids(indices.into_iter().map(|i| ids[i]).collect::<Vec<_>>())
    })
}

fn run_search(max_len: usize, iterations: usize, seed: u64) -> synth_mcts::SearchResult {
    let primitives = arith_primitives();
    let mut search = Search::new(
        SearchConfig::new(max_len, iterations),
        &primitives,
        TargetGoal::new(6.0),
        ChaCha8Rng::seed_from_u64(seed),
    );
    search.run().expect("search with a budget has root children")
}

proptest! {
    /// possible_actions is empty exactly at or beyond the length cap, and
    /// otherwise offers two growth directions per primitive.
    #[test]
    fn prop_action_count_matches_length_cap(
        state in arb_program(),
        max_len in 0usize..10,
    ) {
        let primitives = arith_primitives();
        let search = Search::new(
            SearchConfig::new(max_len, 0),
            &primitives,
            TargetGoal::new(6.0),
            ChaCha8Rng::seed_from_u64(0),
        );

        let actions = search.possible_actions(&state);
        if state.len() >= max_len {
            prop_assert!(actions.is_empty());
        } else {
            prop_assert_eq!(actions.len(), 2 * primitives.len());
            // No action may produce a state longer than the cap
            for action in &actions {
                prop_assert!(action.apply(&state).len() <= max_len);
            }
        }
    }

    /// Every action produces a fresh state one primitive longer, without
    /// touching the input.
    #[test]
    fn prop_actions_are_pure(state in arb_program()) {
        let primitives = arith_primitives();
        let search = Search::new(
            SearchConfig::new(state.len() + 1, 0),
            &primitives,
            TargetGoal::new(6.0),
            ChaCha8Rng::seed_from_u64(0),
        );

        let before = state.clone();
        for action in search.possible_actions(&state) {
            let grown = action.apply(&state);
            prop_assert_eq!(grown.len(), state.len() + 1);
            prop_assert_eq!(&state, &before);
        }
    }

    /// Same seed, same configuration: identical results.
    #[test]
    fn prop_deterministic(seed in arb_seed(), iterations in arb_iterations()) {
        let a = run_search(5, iterations, seed);
        let b = run_search(5, iterations, seed);

        prop_assert_eq!(a.best_program, b.best_program);
        prop_assert_eq!(a.best_score, b.best_score);
        prop_assert_eq!(a.root_choice, b.root_choice);
        prop_assert_eq!(a.root_choice_visits, b.root_choice_visits);
    }

    /// Every rollout is backed up through the root, so the root visit
    /// count equals the iteration budget.
    #[test]
    fn prop_root_visits_equal_iterations(seed in arb_seed(), iterations in arb_iterations()) {
        let result = run_search(5, iterations, seed);
        prop_assert_eq!(result.root_visits as usize, iterations);
    }

    /// Scores stay inside [0, 1].
    #[test]
    fn prop_scores_in_range(seed in arb_seed(), iterations in arb_iterations()) {
        let result = run_search(5, iterations, seed);
        prop_assert!(result.best_score.get() >= 0.0);
        prop_assert!(result.best_score.get() <= 1.0);
        prop_assert!(result.root_choice_mean >= 0.0);
        prop_assert!(result.root_choice_mean <= 1.0);
    }

    /// For a fixed seed the RNG stream is consumed iteration by iteration,
    /// so a larger budget replays the shorter run's iterations first and
    /// the best score found can only go up.
    #[test]
    fn prop_best_score_monotone_in_budget(
        seed in arb_seed(),
        iterations in 1usize..80,
        extra in 0usize..80,
    ) {
        let short = run_search(5, iterations, seed);
        let long = run_search(5, iterations + extra, seed);
        prop_assert!(long.best_score >= short.best_score);
    }
}
