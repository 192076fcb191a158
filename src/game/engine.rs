use log::debug;

use crate::agent::Agent;
use crate::config::{AgentConfig, AgentKind};
use crate::pacman::PacmanState;
use crate::search::GameState;

use super::record::{GameOutcome, GameRecord};
use super::renderer::GameRenderer;
use super::GameError;

/// Everything needed to set up a series of games.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    /// Built-in layout name or path to a layout file.
    pub layout: String,
    pub pacman: AgentKind,
    /// Depth, evaluation function and parallelism for search agents. The
    /// strategy is taken from `pacman`.
    pub agent: AgentConfig,
    /// Keeps only the first N ghosts of the layout when set.
    pub num_ghosts: Option<usize>,
    pub games: usize,
    /// Pacman moves allowed before a game is called off.
    pub max_moves: usize,
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        let agent = AgentConfig::default();
        Self {
            layout: "minimaxClassic".to_string(),
            pacman: AgentKind::Search(agent.strategy),
            agent,
            num_ghosts: None,
            games: 1,
            max_moves: 500,
            seed: 0,
        }
    }
}

type BoxedAgent = Box<dyn Agent<PacmanState>>;

/// A single game in progress, with one agent per seat.
pub struct Game {
    state: PacmanState,
    agents: Vec<BoxedAgent>,
    turn: usize,
    pacman_moves: usize,
    total_moves: usize,
    max_moves: usize,
}

impl Game {
    /// Seats `agents` in order. Seat `i` must hold an agent playing for agent
    /// `i`, and every agent in `state` needs a seat.
    pub fn new(
        state: PacmanState,
        agents: Vec<BoxedAgent>,
        max_moves: usize,
    ) -> Result<Self, GameError> {
        if agents.len() != state.num_agents() {
            return Err(GameError::AgentCount {
                expected: state.num_agents(),
                found: agents.len(),
            });
        }
        if let Some((seat, agent)) = agents
            .iter()
            .enumerate()
            .find(|(seat, agent)| agent.index() != *seat)
        {
            return Err(GameError::AgentSeat {
                seat,
                index: agent.index(),
            });
        }

        Ok(Self {
            state,
            agents,
            turn: 0,
            pacman_moves: 0,
            total_moves: 0,
            max_moves,
        })
    }

    pub fn state(&self) -> &PacmanState {
        &self.state
    }

    /// Index of the agent to move next.
    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn pacman_moves(&self) -> usize {
        self.pacman_moves
    }

    pub fn total_moves(&self) -> usize {
        self.total_moves
    }

    /// How the game ended, or `None` while it is still going.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if self.state.is_win() {
            Some(GameOutcome::Win)
        } else if self.state.is_lose() {
            Some(GameOutcome::Loss)
        } else if self.turn == 0 && self.pacman_moves >= self.max_moves {
            Some(GameOutcome::MoveLimit)
        } else {
            None
        }
    }

    /// Lets the agent whose turn it is make one move.
    pub fn step(&mut self) -> Result<(), GameError> {
        let index = self.turn;
        let action = self.agents[index]
            .get_action(&self.state)
            .map_err(|source| GameError::Agent {
                agent: index,
                source,
            })?;
        debug!("agent {} plays {}", index, action);

        self.state = self
            .state
            .generate_successor(index, &action)
            .map_err(|source| GameError::IllegalMove {
                agent: index,
                source,
            })?;

        if index == 0 {
            self.pacman_moves += 1;
        }
        self.total_moves += 1;
        self.turn = (index + 1) % self.agents.len();
        Ok(())
    }

    /// Plays until the game ends.
    pub fn run<R: GameRenderer>(&mut self, renderer: &R) -> Result<GameRecord, GameError> {
        renderer.render(&self.state, self.pacman_moves);

        loop {
            if let Some(outcome) = self.outcome() {
                if self.turn != 0 {
                    renderer.render(&self.state, self.pacman_moves);
                }
                return Ok(GameRecord {
                    score: self.state.score(),
                    outcome,
                    pacman_moves: self.pacman_moves,
                    total_moves: self.total_moves,
                });
            }

            self.step()?;

            if self.turn == 0 {
                renderer.render(&self.state, self.pacman_moves);
                if let Some(delay) = renderer.frame_delay() {
                    std::thread::sleep(delay);
                }
            }
        }
    }
}
