use crate::cli::AnalyzeArgs;
use crate::config::PartialAnalysisConfig;
use crate::error::Result;
use complexqc::workflows::analyze::analyze_files;
use std::fs;
use tracing::{debug, info};

pub fn run(args: AnalyzeArgs) -> Result<()> {
    let options = match &args.config {
        Some(path) => PartialAnalysisConfig::from_file(path)?,
        None => PartialAnalysisConfig::default(),
    }
    .merge_with_cli(&args)?;
    debug!(?options, "resolved analysis options");

    let report = analyze_files(&args.input, args.pae.as_deref(), &options)?;
    let json = serde_json::to_string_pretty(&report)?;

    match &args.output {
        Some(path) => {
            fs::write(path, json + "\n")?;
            info!(output = %path.display(), "report written");
        }
        None => println!("{json}"),
    }

    Ok(())
}
