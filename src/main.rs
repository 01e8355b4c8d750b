use std::process::ExitCode;

use clap::Parser;
use cotas::cli::{Cli, run};

#[tokio::main]
async fn main() -> ExitCode {
    cotas::logging::init();
    run(Cli::parse()).await
}
