mod cli;

use cli::commands::Command;
use cli::Multiagent;
use structopt::StructOpt;

fn main() {
    #[cfg(feature = "instrumentation")]
    multiagent::instrumentation::init_tracing();
    #[cfg(not(feature = "instrumentation"))]
    env_logger::init();

    Multiagent::from_args().execute();
}
