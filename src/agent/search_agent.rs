use std::time::Duration;

use log::debug;

use crate::config::AgentConfig;
use crate::evaluate::EvaluationFunction;
use crate::search::{Evaluator, GameState, SearchContext, SearchError, SearchOutcome, Strategy};

use super::Agent;

/// Plays agent 0 by running a fresh tree search every turn.
pub struct SearchAgent<E> {
    strategy: Strategy,
    evaluator: E,
    context: SearchContext,
}

impl<E> SearchAgent<E> {
    pub fn new(strategy: Strategy, depth: u8, evaluator: E) -> Result<Self, SearchError> {
        if depth == 0 {
            return Err(SearchError::DepthTooLow);
        }
        Ok(Self {
            strategy,
            evaluator,
            context: SearchContext::new(depth),
        })
    }

    /// Searches root children on the rayon pool when `parallel` is set.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.context.set_parallel(parallel);
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn depth(&self) -> u8 {
        self.context.search_depth()
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Nodes visited by the last search.
    pub fn searched_node_count(&self) -> usize {
        self.context.searched_node_count()
    }

    pub fn leaf_evaluations(&self) -> usize {
        self.context.leaf_evaluations()
    }

    /// Backed-up value of the last search, if one ran.
    pub fn last_value(&self) -> Option<f64> {
        self.context.last_value()
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.context.last_search_duration()
    }

    /// Runs one search from `state` and returns the full outcome.
    pub fn search<S>(&mut self, state: &S) -> Result<SearchOutcome<S::Action>, SearchError>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.strategy.search(&mut self.context, state, &self.evaluator)
    }

    /// Picks an action for agent 0.
    ///
    /// A game that is already over is not searched; the first listed action
    /// is returned instead.
    pub fn choose_action<S>(&mut self, state: &S) -> Result<S::Action, SearchError>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        if state.is_terminal() {
            debug!("root is terminal, skipping {} search", self.strategy);
            self.context.reset_stats();
            return state
                .legal_actions(0)
                .as_ref()
                .first()
                .cloned()
                .ok_or(SearchError::InvalidState { agent: 0 });
        }

        self.search(state)?
            .action
            .ok_or(SearchError::InvalidState { agent: 0 })
    }
}

impl SearchAgent<EvaluationFunction> {
    pub fn from_config(config: &AgentConfig) -> Result<Self, SearchError> {
        Ok(Self::new(config.strategy, config.depth, config.evaluation)?.with_parallel(config.parallel))
    }
}

impl<S, E> Agent<S> for SearchAgent<E>
where
    S: GameState,
    E: Evaluator<S>,
{
    fn index(&self) -> usize {
        0
    }

    fn get_action(&mut self, state: &S) -> Result<S::Action, SearchError> {
        self.choose_action(state)
    }
}
