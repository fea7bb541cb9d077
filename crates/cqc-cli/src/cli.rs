use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "complexqc CLI - Interface-quality metrics for predicted biomolecular complexes: classify a model and score its protein-protein, protein-ligand, or protein-nucleic interface.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the interface metrics matching a model's interaction category.
    Analyze(AnalyzeArgs),
    /// Print the interaction category of a model and exit.
    Detect(DetectArgs),
}

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Path to the input coordinate file (PDB or mmCIF).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path to the confidence matrix archive (.npz).
    /// Required when the model classifies as protein-ligand.
    #[arg(short, long, value_name = "PATH")]
    pub pae: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write the JSON report to this file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    // --- Parameter Overrides ---
    /// Override the charged-contact cutoff from the config file.
    #[arg(long, value_name = "ANGSTROM")]
    pub electrostatic_cutoff: Option<f64>,

    /// Override the groove contact cutoff from the config file.
    #[arg(long, value_name = "ANGSTROM")]
    pub groove_cutoff: Option<f64>,

    /// Override the pocket membership cutoff from the config file.
    #[arg(long, value_name = "ANGSTROM")]
    pub pocket_cutoff: Option<f64>,

    /// Override the residue-contact cutoff from the config file.
    #[arg(long, value_name = "ANGSTROM")]
    pub overlap_cutoff: Option<f64>,

    /// Override the Van-der-Waals scale factor for clash detection.
    #[arg(long, value_name = "FACTOR")]
    pub vdw_scale: Option<f64>,

    /// Override the solvent probe radius for surface evaluation.
    #[arg(long, value_name = "ANGSTROM")]
    pub probe_radius: Option<f64>,
}

/// Arguments for the `detect` subcommand.
#[derive(Args, Debug)]
pub struct DetectArgs {
    /// Path to the input coordinate file (PDB or mmCIF).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,
}
