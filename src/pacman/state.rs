//! Game rules for the reference grid pursuit game.
//!
//! Agent 0 is Pacman; agents 1.. are ghosts. Pacman may stop, ghosts may not,
//! and a ghost only reverses when it has no other way to go. Every Pacman move
//! costs a point, food is worth 10, clearing the board is worth 500 and wins,
//! and running into a ghost costs 500 and loses. Eating a capsule scares every
//! ghost for [`SCARED_TIME`] ghost moves; a scared ghost caught by Pacman is
//! worth 200 and respawns at its start.

use std::sync::Arc;

use smallvec::SmallVec;

use crate::search::{GameState, IllegalActionError};

use super::direction::{Direction, Position, ALL_DIRECTIONS};
use super::grid::Grid;
use super::layout::Layout;

pub const SCARED_TIME: u32 = 40;
pub const TIME_PENALTY: f64 = 1.0;
pub const FOOD_SCORE: f64 = 10.0;
pub const WIN_SCORE: f64 = 500.0;
pub const LOSE_PENALTY: f64 = 500.0;
pub const GHOST_EATEN_SCORE: f64 = 200.0;

pub type DirectionList = SmallVec<[Direction; 5]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
}

/// Where an agent is, which way it last moved, and how long it stays scared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AgentState {
    start: Position,
    position: Position,
    direction: Direction,
    scared_timer: u32,
}

impl AgentState {
    fn new(start: Position) -> Self {
        Self {
            start,
            position: start,
            direction: Direction::Stop,
            scared_timer: 0,
        }
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn scared_timer(&self) -> u32 {
        self.scared_timer
    }

    pub fn is_scared(&self) -> bool {
        self.scared_timer > 0
    }

    fn respawn(&mut self) {
        self.position = self.start;
        self.direction = Direction::Stop;
        self.scared_timer = 0;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PacmanState {
    walls: Arc<Grid<bool>>,
    food: Grid<bool>,
    capsules: Vec<Position>,
    agents: Vec<AgentState>,
    score: f64,
    outcome: Option<Outcome>,
}

impl PacmanState {
    pub fn new(layout: &Layout) -> Self {
        let agents = std::iter::once(layout.pacman_start())
            .chain(layout.ghost_starts().iter().copied())
            .map(AgentState::new)
            .collect();

        Self {
            walls: Arc::new(layout.walls().clone()),
            food: layout.food().clone(),
            capsules: layout.capsules().to_vec(),
            agents,
            score: 0.0,
            outcome: None,
        }
    }

    pub fn walls(&self) -> &Grid<bool> {
        &self.walls
    }

    #[inline]
    pub fn has_wall(&self, position: Position) -> bool {
        self.walls.is_set(position)
    }

    pub fn food(&self) -> &Grid<bool> {
        &self.food
    }

    #[inline]
    pub fn has_food(&self, position: Position) -> bool {
        self.food.is_set(position)
    }

    pub fn num_food(&self) -> usize {
        self.food.count()
    }

    pub fn capsules(&self) -> &[Position] {
        &self.capsules
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn pacman_state(&self) -> &AgentState {
        &self.agents[0]
    }

    pub fn pacman_position(&self) -> Position {
        self.agents[0].position
    }

    pub fn ghost_states(&self) -> &[AgentState] {
        &self.agents[1..]
    }

    pub fn ghost_positions(&self) -> Vec<Position> {
        self.ghost_states().iter().map(AgentState::position).collect()
    }

    pub fn num_ghosts(&self) -> usize {
        self.agents.len() - 1
    }

    /// Shorthand for `generate_successor(0, &action)`.
    pub fn pacman_successor(&self, action: Direction) -> Result<Self, IllegalActionError> {
        self.generate_successor(0, &action)
    }

    /// Directions that do not run into a wall from `position`, `Stop` included.
    fn possible_moves(&self, position: Position) -> DirectionList {
        ALL_DIRECTIONS
            .iter()
            .copied()
            .filter(|&direction| match position.step(direction) {
                Some(next) => self.walls.contains(next) && !self.has_wall(next),
                None => false,
            })
            .collect()
    }

    fn ghost_moves(&self, ghost: &AgentState) -> DirectionList {
        let mut moves = self.possible_moves(ghost.position);
        moves.retain(|direction| *direction != Direction::Stop);

        let reverse = ghost.direction.reverse();
        if moves.len() > 1 && reverse != Direction::Stop {
            moves.retain(|direction| *direction != reverse);
        }
        // A ghost walled in on every side can only wait.
        if moves.is_empty() {
            moves.push(Direction::Stop);
        }
        moves
    }

    fn move_agent(&mut self, agent: usize, action: Direction) {
        let state = &mut self.agents[agent];
        if let Some(next) = state.position.step(action) {
            state.position = next;
        }
        state.direction = action;
    }

    fn consume(&mut self, position: Position) {
        if self.food.is_set(position) {
            self.food.set(position, false);
            self.score += FOOD_SCORE;
            if self.food.count() == 0 && self.outcome.is_none() {
                self.score += WIN_SCORE;
                self.outcome = Some(Outcome::Win);
            }
        }

        if let Some(index) = self.capsules.iter().position(|&c| c == position) {
            self.capsules.swap_remove(index);
            for ghost in self.agents.iter_mut().skip(1) {
                ghost.scared_timer = SCARED_TIME;
            }
        }
    }

    fn check_collisions(&mut self, mover: usize) {
        let pacman = self.pacman_position();
        let ghosts: Vec<usize> = if mover == 0 {
            (1..self.agents.len()).collect()
        } else {
            vec![mover]
        };

        for ghost in ghosts {
            if self.agents[ghost].position == pacman {
                self.collide(ghost);
            }
        }
    }

    fn collide(&mut self, ghost: usize) {
        if self.agents[ghost].is_scared() {
            self.score += GHOST_EATEN_SCORE;
            self.agents[ghost].respawn();
        } else if self.outcome.is_none() {
            self.score -= LOSE_PENALTY;
            self.outcome = Some(Outcome::Lose);
        }
    }
}

impl GameState for PacmanState {
    type Action = Direction;
    type Actions = DirectionList;

    /// Moves stay listed after the game ends so a caller can still name one,
    /// but [`generate_successor`](GameState::generate_successor) refuses to
    /// advance a finished game.
    fn legal_actions(&self, agent: usize) -> DirectionList {
        match agent {
            0 => self.possible_moves(self.pacman_position()),
            _ => match self.agents.get(agent) {
                Some(ghost) => self.ghost_moves(ghost),
                None => DirectionList::new(),
            },
        }
    }

    fn generate_successor(
        &self,
        agent: usize,
        action: &Direction,
    ) -> Result<Self, IllegalActionError> {
        if self.outcome.is_some() {
            return Err(IllegalActionError::GameOver);
        }
        if agent >= self.agents.len() {
            return Err(IllegalActionError::UnknownAgent(agent));
        }
        if !self.legal_actions(agent).contains(action) {
            return Err(IllegalActionError::NotLegal {
                agent,
                action: action.to_string(),
            });
        }

        let mut next = self.clone();
        next.move_agent(agent, *action);
        if agent == 0 {
            next.consume(next.pacman_position());
            next.score -= TIME_PENALTY;
        } else {
            let ghost = &mut next.agents[agent];
            ghost.scared_timer = ghost.scared_timer.saturating_sub(1);
        }
        next.check_collisions(agent);

        Ok(next)
    }

    fn num_agents(&self) -> usize {
        self.agents.len()
    }

    fn is_win(&self) -> bool {
        self.outcome == Some(Outcome::Win)
    }

    fn is_lose(&self) -> bool {
        self.outcome == Some(Outcome::Lose)
    }

    fn score(&self) -> f64 {
        self.score
    }
}
