use crate::catalog::sets::known_sets;
use crate::cli::OutputFormat;

/// Execute sets subcommand
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run(format: OutputFormat) -> anyhow::Result<()> {
    let sets = known_sets();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&sets)?);
        }
        OutputFormat::Text => {
            for set in &sets {
                let marker = if set.premium { "premium" } else { "" };
                println!("{:<32} {:<4} {marker}", set.display_name, set.code);
            }
        }
    }

    Ok(())
}
