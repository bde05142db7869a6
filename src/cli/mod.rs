use clap::{Parser, Subcommand};

mod analyze;
mod chart;
mod sniff;

#[derive(Parser, Debug)]
#[command(name = "tabsum", version, about = "Tabsum CLI")]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Analyze(analyze::AnalyzeArgs),
    Sniff(sniff::SniffArgs),
    Chart(chart::ChartArgs),
}

impl Cli {
    pub fn dispatch(self) -> anyhow::Result<()> {
        match self.command {
            Command::Analyze(args) => analyze::handle(args),
            Command::Sniff(args) => sniff::handle(args),
            Command::Chart(args) => chart::handle(args),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/cli/mod.rs"]
mod tests;
