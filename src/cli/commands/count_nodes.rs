//! Count nodes command - compare how much of the tree each strategy visits.

use std::time::Duration;

use multiagent::evaluate::EvaluationFunction;
use multiagent::game::count_nodes;
use structopt::StructOpt;

use super::util::{exit_with_error, load_state};
use super::Command;

#[derive(StructOpt)]
pub struct CountNodesArgs {
    #[structopt(short, long, default_value = "minimaxClassic")]
    pub layout: String,
    #[structopt(short, long, default_value = "3")]
    pub depth: u8,
    #[structopt(short, long = "eval", default_value = "score")]
    pub evaluation: EvaluationFunction,
    #[structopt(short = "k", long)]
    pub ghosts: Option<usize>,
}

impl Command for CountNodesArgs {
    fn execute(self) {
        let state = load_state(&self.layout, self.ghosts)
            .unwrap_or_else(|error| exit_with_error("could not load layout", error));
        let counts = count_nodes(&state, self.depth, self.evaluation)
            .unwrap_or_else(|error| exit_with_error("search failed", error));

        let mut total_nodes = 0;
        let mut total_duration = Duration::from_secs(0);

        for count in &counts {
            total_nodes += count.nodes;
            total_duration += count.duration;

            println!(
                "depth: {}, strategy: {}, nodes: {}, leaves: {}, nodes per second: {:.0}",
                count.depth,
                count.strategy,
                count.nodes,
                count.leaf_evaluations,
                count.nodes_per_second()
            );
        }

        println!(
            "total nodes: {}, total duration: {:?}, nodes per second: {:.0}",
            total_nodes,
            total_duration,
            total_nodes as f64 / total_duration.as_secs_f64().max(f64::EPSILON)
        );
    }
}
