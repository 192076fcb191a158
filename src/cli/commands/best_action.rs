//! Best action command - search the initial state of a layout once.

use multiagent::agent::SearchAgent;
use multiagent::evaluate::EvaluationFunction;
use multiagent::search::Strategy;
use structopt::StructOpt;

use super::util::{exit_with_error, load_state};
use super::Command;

#[derive(StructOpt)]
pub struct BestActionArgs {
    #[structopt(short, long, default_value = "minimaxClassic")]
    pub layout: String,
    #[structopt(short, long, default_value = "alpha-beta")]
    pub strategy: Strategy,
    #[structopt(short, long, default_value = "2")]
    pub depth: u8,
    #[structopt(short, long = "eval", default_value = "score")]
    pub evaluation: EvaluationFunction,
    #[structopt(short = "k", long)]
    pub ghosts: Option<usize>,
}

impl Command for BestActionArgs {
    fn execute(self) {
        let state = load_state(&self.layout, self.ghosts)
            .unwrap_or_else(|error| exit_with_error("could not load layout", error));
        let mut agent = SearchAgent::new(self.strategy, self.depth, self.evaluation)
            .unwrap_or_else(|error| exit_with_error("invalid agent", error));

        match agent.choose_action(&state) {
            Ok(action) => {
                println!("{}", action);
                println!(
                    "* Value: {}\n* Nodes searched: {} (depth: {})\n* Search took: {}",
                    agent
                        .last_value()
                        .map_or("-".to_string(), |value| value.to_string()),
                    agent.searched_node_count(),
                    agent.depth(),
                    agent
                        .last_search_duration()
                        .map_or("-".to_string(), |d| format!("{:?}", d))
                );
            }
            Err(error) => exit_with_error("failed to choose an action", error),
        }
    }
}
