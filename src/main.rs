use anyhow::Result;
use organize_scripts::cli;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = cli::parse();
    app::run(args)
}
