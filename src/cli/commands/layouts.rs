//! Layouts command - list the built-in layouts.

use multiagent::pacman::layouts::builtin_names;
use multiagent::pacman::Layout;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct LayoutsArgs {}

impl Command for LayoutsArgs {
    fn execute(self) {
        for name in builtin_names() {
            match Layout::load(name) {
                Ok(layout) => println!(
                    "{:<16} {}x{}, {} ghosts, {} food",
                    name,
                    layout.width(),
                    layout.height(),
                    layout.num_ghosts(),
                    layout.food().count()
                ),
                Err(error) => eprintln!("{}: {}", name, error),
            }
        }
    }
}
