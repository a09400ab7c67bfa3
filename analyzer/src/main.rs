mod analytics;
mod args;
mod configs;
mod error;
mod loader;
mod logging;
mod plot;
mod runner;
mod simulator;
mod validatable;

use crate::args::common::AnalyzerArgs;
use crate::configs::config_provider::{ConfigProvider, FileConfigProvider};
use crate::error::AnalyzerError;
use crate::logging::Logging;
use crate::runner::AnalysisRunner;
use crate::validatable::Validatable;
use clap::Parser;
use figlet_rs::FIGfont;
use tracing::info;

fn main() -> Result<(), AnalyzerError> {
    let args = AnalyzerArgs::parse();

    let mut logging = Logging::new();
    logging.init(args.quiet, &args.log_file)?;

    if !args.quiet {
        if let Ok(standard_font) = FIGfont::standard() {
            if let Some(figure) = standard_font.convert("cwnd analyzer") {
                println!("{figure}");
            }
        }
    }

    let mut config = FileConfigProvider::new(args.config.clone()).load_config()?;
    args.apply_to(&mut config);
    config.validate()?;
    info!("{config}");

    let runner = AnalysisRunner::new(config, args.command(), args.output.identifier());
    runner.run()?;
    info!("Finished the analysis.");
    Ok(())
}
