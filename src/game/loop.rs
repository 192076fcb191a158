use log::{info, warn};

use crate::agent::{Agent, RandomGhost, ReflexAgent, SearchAgent};
use crate::config::{AgentConfig, AgentKind};
use crate::pacman::{Layout, PacmanState};
use crate::search::GameState;

use super::engine::{Game, GameConfig};
use super::record::{GameOutcome, GameRecord};
use super::renderer::GameRenderer;
use super::GameError;

/// Plays a series of games on one layout with fresh agents for each game.
pub struct GameLoop<R: GameRenderer> {
    config: GameConfig,
    layout: Layout,
    renderer: R,
}

impl<R: GameRenderer> GameLoop<R> {
    pub fn new(config: GameConfig, renderer: R) -> Result<Self, GameError> {
        let mut layout = Layout::load(&config.layout)?;
        if let Some(num_ghosts) = config.num_ghosts {
            layout = layout.with_max_ghosts(num_ghosts);
        }

        Ok(Self {
            config,
            layout,
            renderer,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Plays game number `game`. Each game gets its own seed so a series is
    /// reproducible game by game.
    pub fn play(&self, game: usize) -> Result<GameRecord, GameError> {
        let seed = self.config.seed.wrapping_add(game as u64);
        let state = PacmanState::new(&self.layout);

        let mut agents = vec![build_pacman(self.config.pacman, &self.config.agent, seed)?];
        for ghost in 1..state.num_agents() {
            let ghost_seed = seed.wrapping_mul(31).wrapping_add(ghost as u64);
            agents.push(Box::new(RandomGhost::new(ghost, ghost_seed)) as Box<dyn Agent<PacmanState>>);
        }

        let record = Game::new(state, agents, self.config.max_moves)?.run(&self.renderer)?;
        match record.outcome {
            GameOutcome::MoveLimit => warn!(
                "game {} stopped after {} Pacman moves with score {}",
                game + 1,
                record.pacman_moves,
                record.score
            ),
            _ => info!("game {} finished: {}", game + 1, record),
        }
        Ok(record)
    }

    pub fn run(&self) -> Result<Vec<GameRecord>, GameError> {
        (0..self.config.games).map(|game| self.play(game)).collect()
    }
}

/// Builds the Pacman agent for `kind`. Search agents take their strategy from
/// `kind` and everything else from `config`.
pub fn build_pacman(
    kind: AgentKind,
    config: &AgentConfig,
    seed: u64,
) -> Result<Box<dyn Agent<PacmanState>>, GameError> {
    match kind {
        AgentKind::Reflex => Ok(Box::new(ReflexAgent::new(seed))),
        AgentKind::Search(strategy) => {
            let config = AgentConfig {
                strategy,
                ..config.clone()
            };
            let agent = SearchAgent::from_config(&config)
                .map_err(|source| GameError::Agent { agent: 0, source })?;
            Ok(Box::new(agent))
        }
    }
}
