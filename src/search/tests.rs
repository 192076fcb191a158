//! Domain-agnostic tests for the search strategies using explicit game trees.
//!
//! Test coverage:
//! - Textbook minimax / alpha-beta / expectimax values and root actions
//! - Alpha-beta equivalence with minimax on random trees, including ties and
//!   early terminal states
//! - Node counting (pruning never visits more nodes)
//! - Depth handling (depth 0, depth exhaustion, single-agent games)
//! - Error handling (no legal actions, illegal actions)
//! - Parallel vs sequential search consistency

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;

#[derive(Clone, Debug)]
struct TreeNode {
    score: f64,
    children: Vec<usize>,
    win: bool,
    lose: bool,
}

/// A game whose every position is a node of a fixed tree. The action for a
/// child is its position in the parent's child list.
#[derive(Clone, Debug)]
struct TreeGame {
    nodes: Arc<Vec<TreeNode>>,
    current: usize,
    agents: usize,
    phantom_action: bool,
}

impl TreeGame {
    fn node(&self) -> &TreeNode {
        &self.nodes[self.current]
    }

    /// Lists one action past the real children, which the oracle then rejects.
    fn with_phantom_action(mut self) -> Self {
        self.phantom_action = true;
        self
    }
}

impl GameState for TreeGame {
    type Action = usize;
    type Actions = Vec<usize>;

    fn legal_actions(&self, agent: usize) -> Vec<usize> {
        if agent >= self.agents {
            return vec![];
        }
        let mut count = self.node().children.len();
        if self.phantom_action && count > 0 {
            count += 1;
        }
        (0..count).collect()
    }

    fn generate_successor(&self, agent: usize, action: &usize) -> Result<Self, IllegalActionError> {
        if agent >= self.agents {
            return Err(IllegalActionError::UnknownAgent(agent));
        }
        let child = *self
            .node()
            .children
            .get(*action)
            .ok_or_else(|| IllegalActionError::NotLegal {
                agent,
                action: action.to_string(),
            })?;
        Ok(Self {
            current: child,
            ..self.clone()
        })
    }

    fn num_agents(&self) -> usize {
        self.agents
    }

    fn is_win(&self) -> bool {
        self.node().win
    }

    fn is_lose(&self) -> bool {
        self.node().lose
    }

    fn score(&self) -> f64 {
        self.node().score
    }
}

#[derive(Default)]
struct TreeBuilder {
    nodes: Vec<TreeNode>,
}

impl TreeBuilder {
    fn push(&mut self, node: TreeNode) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    fn leaf(&mut self, score: f64) -> usize {
        self.branch(score, vec![])
    }

    fn branch(&mut self, score: f64, children: Vec<usize>) -> usize {
        self.push(TreeNode {
            score,
            children,
            win: false,
            lose: false,
        })
    }

    fn terminal(&mut self, score: f64, win: bool) -> usize {
        self.push(TreeNode {
            score,
            children: vec![],
            win,
            lose: !win,
        })
    }

    fn build(self, root: usize, agents: usize) -> TreeGame {
        TreeGame {
            nodes: Arc::new(self.nodes),
            current: root,
            agents,
            phantom_action: false,
        }
    }
}

/// Root max node over min nodes, each holding the given leaf scores.
fn two_level_tree(groups: &[&[f64]]) -> TreeGame {
    let mut builder = TreeBuilder::default();
    let children = groups
        .iter()
        .map(|leaves| {
            let leaves = leaves.iter().map(|&score| builder.leaf(score)).collect();
            builder.branch(0.0, leaves)
        })
        .collect();
    let root = builder.branch(0.0, children);
    builder.build(root, 2)
}

/// The classic three-by-three example tree.
fn textbook_tree() -> TreeGame {
    two_level_tree(&[&[3.0, 12.0, 8.0], &[2.0, 4.0, 6.0], &[14.0, 5.0, 2.0]])
}

/// A full tree of `plies` rounds over `agents` agents with small integer scores
/// so that ties are common. Some internal nodes end the game early.
fn random_tree(
    seed: u64,
    agents: usize,
    plies: u8,
    adversary_branching: std::ops::RangeInclusive<usize>,
) -> TreeGame {
    fn grow(
        builder: &mut TreeBuilder,
        rng: &mut StdRng,
        distance: usize,
        height: usize,
        agents: usize,
        adversary_branching: &std::ops::RangeInclusive<usize>,
    ) -> usize {
        let score = rng.gen_range(-5..=5) as f64;
        if distance == height {
            return builder.leaf(score);
        }
        if rng.gen_bool(0.08) {
            let win = rng.gen_bool(0.5);
            return builder.terminal(if win { 100.0 } else { -100.0 }, win);
        }
        let branching = if distance % agents == 0 {
            rng.gen_range(1..=3)
        } else {
            rng.gen_range(adversary_branching.clone())
        };
        let children = (0..branching)
            .map(|_| grow(builder, rng, distance + 1, height, agents, adversary_branching))
            .collect();
        builder.branch(score, children)
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut builder = TreeBuilder::default();
    let height = plies as usize * agents;
    // Keep the root live so every search actually expands it.
    let children = (0..rng.gen_range(2..=3))
        .map(|_| grow(&mut builder, &mut rng, 1, height, agents, &adversary_branching))
        .collect();
    let root = builder.branch(0.0, children);
    builder.build(root, agents)
}

fn score(state: &TreeGame) -> f64 {
    state.score()
}

fn run(strategy: Strategy, depth: u8, state: &TreeGame) -> (SearchOutcome<usize>, usize) {
    let mut context = SearchContext::new(depth);
    let outcome = strategy.search(&mut context, state, &score).unwrap();
    (outcome, context.searched_node_count())
}

#[test]
fn test_minimax_textbook_tree() {
    let (outcome, nodes) = run(Strategy::Minimax, 1, &textbook_tree());

    assert_eq!(outcome.value, 3.0);
    assert_eq!(outcome.action, Some(0));
    assert_eq!(nodes, 13, "minimax should visit every node");
}

#[test]
fn test_alpha_beta_textbook_tree_prunes() {
    let mut context = SearchContext::new(1);
    let outcome = alpha_beta(&mut context, &textbook_tree(), &score).unwrap();

    assert_eq!(outcome.value, 3.0);
    assert_eq!(outcome.action, Some(0));
    // The second min node is abandoned after its first leaf (2 < 3).
    assert_eq!(context.searched_node_count(), 11);
    assert_eq!(context.leaf_evaluations(), 7);
}

#[test]
fn test_expectimax_textbook_tree_averages() {
    let (outcome, _) = run(Strategy::Expectimax, 1, &textbook_tree());

    assert!((outcome.value - 23.0 / 3.0).abs() < 1e-9);
    assert_eq!(outcome.action, Some(0));
}

#[test]
fn test_expectimax_two_adversaries_differs_from_minimax() {
    // Root -> (ghost 1 -> ghost 2 -> leaf) for three agents and one ply.
    fn chance_branch(builder: &mut TreeBuilder, leaves: [[f64; 2]; 2]) -> usize {
        let ghost_two = leaves
            .iter()
            .map(|pair| {
                let leaves = pair.iter().map(|&score| builder.leaf(score)).collect();
                builder.branch(0.0, leaves)
            })
            .collect();
        builder.branch(0.0, ghost_two)
    }

    let mut builder = TreeBuilder::default();
    let risky = chance_branch(&mut builder, [[10.0, 0.0], [4.0, 6.0]]);
    let safe = chance_branch(&mut builder, [[3.0, 3.0], [3.0, 3.0]]);
    let root = builder.branch(0.0, vec![risky, safe]);
    let state = builder.build(root, 3);

    let (worst_case, _) = run(Strategy::Minimax, 1, &state);
    assert_eq!(worst_case.value, 3.0);
    assert_eq!(worst_case.action, Some(1));

    let (expected, _) = run(Strategy::Expectimax, 1, &state);
    assert_eq!(expected.value, 5.0);
    assert_eq!(expected.action, Some(0));
}

#[test]
fn test_alpha_beta_matches_minimax_on_random_trees() {
    for seed in 0..150 {
        for agents in 1..=3 {
            for plies in 1..=3u8 {
                let state = random_tree(seed, agents, plies, 1..=3);
                let (expected, minimax_nodes) = run(Strategy::Minimax, plies, &state);
                let (pruned, alpha_beta_nodes) = run(Strategy::AlphaBeta, plies, &state);

                assert_eq!(
                    expected, pruned,
                    "seed {} agents {} plies {}",
                    seed, agents, plies
                );
                assert!(
                    alpha_beta_nodes <= minimax_nodes,
                    "alpha-beta visited {} nodes, minimax {}",
                    alpha_beta_nodes,
                    minimax_nodes
                );
            }
        }
    }
}

#[test]
fn test_alpha_beta_prunes_on_branching_trees() {
    let mut total_minimax = 0;
    let mut total_alpha_beta = 0;
    for seed in 0..50 {
        let state = random_tree(seed, 2, 3, 2..=3);
        total_minimax += run(Strategy::Minimax, 3, &state).1;
        total_alpha_beta += run(Strategy::AlphaBeta, 3, &state).1;
    }
    assert!(total_alpha_beta < total_minimax);
}

#[test]
fn test_expectimax_matches_minimax_with_single_adversary_actions() {
    for seed in 0..100 {
        for agents in 2..=4 {
            let state = random_tree(seed, agents, 2, 1..=1);
            let (expected, _) = run(Strategy::Minimax, 2, &state);
            let (chance, _) = run(Strategy::Expectimax, 2, &state);
            assert_eq!(expected, chance, "seed {} agents {}", seed, agents);
        }
    }
}

#[test]
fn test_depth_zero_evaluates_root() {
    let state = random_tree(7, 2, 2, 1..=3);
    for strategy in Strategy::ALL {
        let mut context = SearchContext::new(0);
        let outcome = strategy.search(&mut context, &state, &score).unwrap();
        assert_eq!(outcome, SearchOutcome::leaf(state.score()));
        assert_eq!(context.searched_node_count(), 1);
        assert_eq!(context.leaf_evaluations(), 1);
    }
}

#[test]
fn test_depth_budget_stops_after_one_round() {
    // Two rounds of tree, searched one round deep: leaves of the search are
    // the nodes where agent 0 is next to move after one round.
    let mut builder = TreeBuilder::default();
    let mut round_one = vec![];
    for a in 0..2 {
        let mut ghost_children = vec![];
        for b in 0..2 {
            let deep = builder.leaf(1000.0);
            let deeper = builder.branch(0.0, vec![deep]);
            ghost_children.push(builder.branch((a * 10 + b) as f64, vec![deeper]));
        }
        round_one.push(builder.branch(0.0, ghost_children));
    }
    let root = builder.branch(0.0, round_one);
    let state = builder.build(root, 2);

    let mut context = SearchContext::new(1);
    let outcome = minimax(&mut context, &state, &score).unwrap();

    assert_eq!(outcome.value, 10.0);
    assert_eq!(outcome.action, Some(1));
    assert_eq!(context.searched_node_count(), 7);
    assert_eq!(context.leaf_evaluations(), 4);
}

#[test]
fn test_single_agent_game_counts_each_move_as_a_ply() {
    let mut builder = TreeBuilder::default();
    let a = builder.leaf(1.0);
    let b = builder.leaf(7.0);
    let c = builder.leaf(4.0);
    let left = builder.branch(0.0, vec![a, b]);
    let right = builder.branch(0.0, vec![c]);
    let root = builder.branch(0.0, vec![left, right]);
    let state = builder.build(root, 1);

    let (shallow, _) = run(Strategy::Minimax, 1, &state);
    assert_eq!(shallow.value, 0.0);
    assert_eq!(shallow.action, Some(0));

    let (deep, nodes) = run(Strategy::AlphaBeta, 2, &state);
    assert_eq!(deep.value, 7.0);
    assert_eq!(deep.action, Some(0));
    assert_eq!(nodes, 6);
}

#[test]
fn test_terminal_root_is_evaluated_without_expansion() {
    let mut builder = TreeBuilder::default();
    let root = builder.terminal(-500.0, false);
    let state = builder.build(root, 2);

    for strategy in Strategy::ALL {
        let mut context = SearchContext::new(3);
        let outcome = strategy.search(&mut context, &state, &score).unwrap();
        assert_eq!(outcome, SearchOutcome::leaf(-500.0));
        assert_eq!(context.searched_node_count(), 1);
    }
}

#[test]
fn test_terminal_child_short_circuits_remaining_depth() {
    // The win has no children, so expanding it for the remaining depth would fail.
    let mut builder = TreeBuilder::default();
    let won = builder.terminal(100.0, true);
    let leaf = builder.leaf(1.0);
    let ghost = builder.branch(0.0, vec![leaf]);
    let root = builder.branch(0.0, vec![ghost, won]);
    let state = builder.build(root, 2);

    let (outcome, nodes) = run(Strategy::Minimax, 1, &state);
    assert_eq!(outcome.value, 100.0);
    assert_eq!(outcome.action, Some(1));
    assert_eq!(nodes, 4);

    let mut builder = TreeBuilder::default();
    let won = builder.terminal(100.0, true);
    let root = builder.branch(0.0, vec![won]);
    let state = builder.build(root, 2);

    let (outcome, nodes) = run(Strategy::Expectimax, 5, &state);
    assert_eq!(outcome.value, 100.0);
    assert_eq!(nodes, 2);
}

#[test]
fn test_ties_go_to_first_listed_action() {
    let state = two_level_tree(&[&[4.0, 9.0], &[4.0, 5.0], &[4.0]]);
    for strategy in [Strategy::Minimax, Strategy::AlphaBeta] {
        let (outcome, _) = run(strategy, 1, &state);
        assert_eq!(outcome.value, 4.0);
        assert_eq!(outcome.action, Some(0), "{}", strategy);
    }

    let flat = two_level_tree(&[&[2.0], &[2.0], &[2.0]]);
    let (outcome, _) = run(Strategy::Expectimax, 1, &flat);
    assert_eq!(outcome.action, Some(0));
}

#[test]
fn test_no_legal_actions_is_an_invalid_state() {
    let mut builder = TreeBuilder::default();
    let stuck = builder.branch(0.0, vec![]);
    let root = builder.branch(0.0, vec![stuck]);
    let state = builder.build(root, 2);

    for strategy in Strategy::ALL {
        let mut context = SearchContext::new(1);
        let err = strategy.search(&mut context, &state, &score).unwrap_err();
        assert_eq!(err, SearchError::InvalidState { agent: 1 });
    }
}

#[test]
fn test_illegal_action_propagates() {
    let state = textbook_tree().with_phantom_action();
    for strategy in Strategy::ALL {
        let mut context = SearchContext::new(1);
        let err = strategy.search(&mut context, &state, &score).unwrap_err();
        assert!(matches!(
            err,
            SearchError::IllegalAction(IllegalActionError::NotLegal { .. })
        ));
    }
}

#[test]
fn test_parallel_and_sequential_agree() {
    for seed in 0..40 {
        let state = random_tree(seed, 3, 2, 1..=3);
        for strategy in Strategy::ALL {
            let mut sequential = SearchContext::with_parallel(2, false);
            let mut parallel = SearchContext::with_parallel(2, true);
            let expected = strategy.search(&mut sequential, &state, &score).unwrap();
            let actual = strategy.search(&mut parallel, &state, &score).unwrap();
            assert_eq!(expected, actual, "{} seed {}", strategy, seed);
        }
    }
}

#[test]
fn test_closure_evaluators() {
    let doubled = |state: &TreeGame| state.score() * 2.0;
    let mut context = SearchContext::new(1);
    let outcome = minimax(&mut context, &textbook_tree(), &doubled).unwrap();
    assert_eq!(outcome.value, 6.0);
}

#[test]
fn test_context_records_last_search() {
    let mut context = SearchContext::new(1);
    assert_eq!(context.last_value(), None);

    let _ = expectimax(&mut context, &textbook_tree(), &score).unwrap();
    assert!(context.last_search_duration().is_some());
    assert!((context.last_value().unwrap() - 23.0 / 3.0).abs() < 1e-9);

    let _ = minimax(&mut context, &textbook_tree(), &score).unwrap();
    assert_eq!(context.searched_node_count(), 13, "stats reset between searches");
}

#[test]
fn test_strategy_names_round_trip() {
    for strategy in Strategy::ALL {
        assert_eq!(strategy.name().parse::<Strategy>().unwrap(), strategy);
    }
    assert!("mcts".parse::<Strategy>().is_err());
}
