// src/main.rs
use clap::Parser;
use pulsescope::cli::Cli;
// 入口函数
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    pulsescope::session::run(cli)
}
