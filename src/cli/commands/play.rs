//! Play command - run games with a chosen Pacman agent.

use std::time::Duration;

use multiagent::config::{AgentConfig, AgentKind};
use multiagent::evaluate::EvaluationFunction;
use multiagent::game::{
    GameConfig, GameError, GameLoop, GameRecord, GameRenderer, GameSummary, SilentRenderer,
    TextRenderer,
};
use structopt::StructOpt;

use super::util::exit_with_error;
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    /// Built-in layout name or path to a layout file.
    #[structopt(short, long, default_value = "minimaxClassic")]
    pub layout: String,
    #[structopt(short, long, default_value = "minimax")]
    pub agent: AgentKind,
    #[structopt(short, long, default_value = "2")]
    pub depth: u8,
    #[structopt(short, long = "eval", default_value = "score")]
    pub evaluation: EvaluationFunction,
    #[structopt(short = "n", long, default_value = "1")]
    pub games: usize,
    /// Keep only this many ghosts from the layout.
    #[structopt(short = "k", long)]
    pub ghosts: Option<usize>,
    #[structopt(long, default_value = "0")]
    pub seed: u64,
    #[structopt(long, default_value = "500")]
    pub max_moves: usize,
    /// Don't draw the board.
    #[structopt(short, long)]
    pub quiet: bool,
    /// Search root actions on all cores.
    #[structopt(long)]
    pub parallel: bool,
    /// Pause between rounds when drawing the board.
    #[structopt(long)]
    pub delay_ms: Option<u64>,
}

impl PlayArgs {
    fn game_config(&self) -> GameConfig {
        let mut agent = AgentConfig {
            depth: self.depth,
            evaluation: self.evaluation,
            parallel: self.parallel,
            ..AgentConfig::default()
        };
        if let AgentKind::Search(strategy) = self.agent {
            agent.strategy = strategy;
        }

        GameConfig {
            layout: self.layout.clone(),
            pacman: self.agent,
            agent,
            num_ghosts: self.ghosts,
            games: self.games,
            max_moves: self.max_moves,
            seed: self.seed,
        }
    }
}

fn play<R: GameRenderer>(config: GameConfig, renderer: R) -> Result<Vec<GameRecord>, GameError> {
    let game_loop = GameLoop::new(config, renderer)?;
    let mut records = Vec::new();
    for game in 0..game_loop.config().games {
        let record = game_loop.play(game)?;
        println!("Game {}: {}", game + 1, record);
        records.push(record);
    }
    Ok(records)
}

impl Command for PlayArgs {
    fn execute(self) {
        let config = self.game_config();
        let result = if self.quiet {
            play(config, SilentRenderer)
        } else {
            let renderer = TextRenderer {
                delay_between_moves: self.delay_ms.map(Duration::from_millis),
            };
            play(config, renderer)
        };

        match result {
            Ok(records) => println!("{}", GameSummary::from_records(&records)),
            Err(error) => exit_with_error("game failed", error),
        }
    }
}
