use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum AnalysisCommand {
    #[command(
        about = "Congestion window analysis (default)",
        long_about = "Analyze a congestion window trace and its packet losses, simulating a trace when none is available",
        visible_alias = "c",
        verbatim_doc_comment
    )]
    Cwnd(CwndArgs),

    #[command(
        about = "Generic time series analysis",
        long_about = "Plot whitespace separated time/value pairs, skipping lines with the marker token",
        visible_alias = "s",
        verbatim_doc_comment
    )]
    Series(SeriesArgs),
}

impl Default for AnalysisCommand {
    fn default() -> Self {
        AnalysisCommand::Cwnd(CwndArgs::default())
    }
}

#[derive(Parser, Debug, Clone, Default, PartialEq)]
pub struct CwndArgs {
    /// Congestion window trace, `time_ms,cwnd` rows after a header
    #[arg(long)]
    pub cwnd_file: Option<PathBuf>,

    /// Packet loss trace, `time_ms[,size]` rows after a header
    #[arg(long)]
    pub loss_file: Option<PathBuf>,

    /// Seed of the simulator used when no trace is available
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Parser, Debug, Clone, Default, PartialEq)]
pub struct SeriesArgs {
    /// Whitespace separated `time value` lines
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Lines containing this token are skipped
    #[arg(long)]
    pub marker: Option<String>,
}
