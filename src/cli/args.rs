//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    best_action::BestActionArgs, count_nodes::CountNodesArgs, layouts::LayoutsArgs,
    play::PlayArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "multiagent",
    about = "Adversarial game-tree search agents for a grid pursuit game"
)]
pub enum Multiagent {
    #[structopt(
        name = "play",
        about = "Play one or more games on a `--layout` (default: minimaxClassic) with the chosen `--agent` (minimax, alpha-beta, expectimax or reflex) controlling Pacman and random ghosts. Search agents look `--depth` plies ahead (default: 2) and score leaves with `--eval` (score or better)."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "best-action",
        about = "Print the action and backed-up value a search agent picks for the initial state of a layout."
    )]
    BestAction(BestActionArgs),
    #[structopt(
        name = "count-nodes",
        about = "Count the nodes each search strategy visits from the initial state of a layout, for every depth from 1 to `--depth` (default: 3), and report the time it took to do so."
    )]
    CountNodes(CountNodesArgs),
    #[structopt(name = "layouts", about = "List the built-in layouts.")]
    Layouts(LayoutsArgs),
}

impl crate::cli::commands::Command for Multiagent {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            BestAction(cmd),
            CountNodes(cmd),
            Layouts(cmd),
        }
    }
}
