mod command;
mod config;
mod logging;
mod model;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
