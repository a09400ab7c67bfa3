use super::kind::{AnalysisCommand, CwndArgs, SeriesArgs};
use super::output::OutputArgs;
use crate::configs::analyzer::AnalyzerConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct AnalyzerArgs {
    /// Analysis kind, `cwnd` when omitted
    #[command(subcommand)]
    pub command: Option<AnalysisCommand>,

    /// Configuration file path, `analyzer.toml` is used when present
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Disable logging to stdout
    #[arg(long, short = 'q', default_value_t = false, global = true)]
    pub quiet: bool,

    /// Also write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

impl AnalyzerArgs {
    pub fn command(&self) -> AnalysisCommand {
        self.command.clone().unwrap_or_default()
    }

    /// Command line flags take precedence over every configuration layer.
    pub fn apply_to(&self, config: &mut AnalyzerConfig) {
        if let Some(dir) = &self.output.output_dir {
            config.output.directory = dir.clone();
        }
        if self.output.no_open {
            config.output.open_charts = false;
        }
        if self.output.no_html {
            config.output.html = false;
        }
        if self.output.no_json {
            config.output.json_report = false;
        }

        match self.command() {
            AnalysisCommand::Cwnd(CwndArgs {
                cwnd_file,
                loss_file,
                seed,
            }) => {
                if let Some(path) = cwnd_file {
                    config.input.cwnd_file = path;
                }
                if let Some(path) = loss_file {
                    config.input.loss_file = path;
                }
                if seed.is_some() {
                    config.simulator.seed = seed;
                }
            }
            AnalysisCommand::Series(SeriesArgs { input, marker }) => {
                if let Some(path) = input {
                    config.input.series_file = path;
                }
                if let Some(marker) = marker {
                    config.input.skip_marker = marker;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_should_run_default_cwnd_analysis() {
        let args = AnalyzerArgs::try_parse_from(["cwnd-analyzer"]).unwrap();
        let mut config = AnalyzerConfig::default();

        args.apply_to(&mut config);

        assert_eq!(args.command(), AnalysisCommand::Cwnd(CwndArgs::default()));
        assert_eq!(config, AnalyzerConfig::default());
        assert!(config.output.open_charts);
    }

    #[test]
    fn cwnd_flags_should_override_config() {
        let args = AnalyzerArgs::try_parse_from([
            "cwnd-analyzer",
            "--output-dir",
            "out",
            "--no-html",
            "--no-open",
            "cwnd",
            "--cwnd-file",
            "trace.csv",
            "--seed",
            "7",
        ])
        .unwrap();
        let mut config = AnalyzerConfig::default();

        args.apply_to(&mut config);

        assert_eq!(config.output.directory, PathBuf::from("out"));
        assert!(!config.output.html);
        assert!(!config.output.open_charts);
        assert_eq!(config.input.cwnd_file, PathBuf::from("trace.csv"));
        assert_eq!(config.input.loss_file, PathBuf::from("tcp_loss_data.csv"));
        assert_eq!(config.simulator.seed, Some(7));
    }

    #[test]
    fn series_flags_should_override_config() {
        let args = AnalyzerArgs::try_parse_from([
            "cwnd-analyzer",
            "series",
            "--input",
            "rtt.txt",
            "--marker",
            "Drop",
            "--quiet",
        ])
        .unwrap();
        let mut config = AnalyzerConfig::default();

        args.apply_to(&mut config);

        assert!(args.quiet);
        assert_eq!(config.input.series_file, PathBuf::from("rtt.txt"));
        assert_eq!(config.input.skip_marker, "Drop");
    }

    #[test]
    fn explicit_identifier_should_win_over_hostname() {
        let args =
            AnalyzerArgs::try_parse_from(["cwnd-analyzer", "--identifier", "lab-1"]).unwrap();

        assert_eq!(args.output.identifier(), "lab-1");
    }
}
