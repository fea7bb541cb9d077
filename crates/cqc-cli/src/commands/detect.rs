use crate::cli::DetectArgs;
use crate::error::Result;
use complexqc::analysis::prediction::detect_prediction_type;
use complexqc::core::io::loader::load_structure;

pub fn run(args: DetectArgs) -> Result<()> {
    let model = load_structure(&args.input)?;
    let prediction_type = detect_prediction_type(&model);
    println!("{prediction_type}");
    Ok(())
}
