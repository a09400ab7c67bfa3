use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default, PartialEq)]
pub struct OutputArgs {
    /// Output directory path for charts and the JSON report
    #[arg(long, short = 'o')]
    pub output_dir: Option<PathBuf>,

    /// Identifier of the analysis run (defaults to hostname if not provided)
    #[arg(long)]
    pub identifier: Option<String>,

    /// Do not open the generated charts after the analysis is finished
    #[arg(long, default_value_t = false)]
    pub no_open: bool,

    /// Skip the interactive HTML charts
    #[arg(long, default_value_t = false)]
    pub no_html: bool,

    /// Skip writing report.json
    #[arg(long, default_value_t = false)]
    pub no_json: bool,
}

impl OutputArgs {
    pub fn identifier(&self) -> String {
        self.identifier.clone().unwrap_or_else(|| {
            hostname::get()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|_| "unknown".to_owned())
        })
    }
}
