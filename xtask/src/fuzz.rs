use clap::Subcommand;
use duct::cmd;

#[derive(Subcommand)]
pub enum Fuzz {
    /// Run the SimpleStreams feed reader
    Feed,
}

pub fn fuzz_parsers(command: Fuzz) -> anyhow::Result<()> {
    let mut args = vec!["fuzz", "run"];
    match command {
        Fuzz::Feed => args.push("feed"),
    }

    cmd!("cargo", "install", "cargo-fuzz").run()?; // will not install if its already installed
    cmd("cargo", args).run()?;
    Ok(())
}
