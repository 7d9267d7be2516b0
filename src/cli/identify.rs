use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use tracing::debug;

use crate::cli::OutputFormat;
use crate::core::report::IdentificationReport;
use crate::matching::identifier::{Identifier, IdentifierConfig};
use crate::matching::scoring::max_distance;
use crate::parsing::pack::{CARD_HEIGHT, CARD_WIDTH};

#[derive(Args, Debug)]
pub struct IdentifyArgs {
    /// Pack screenshot containing five cards
    #[arg(required = true)]
    pub pack_image: PathBuf,

    /// Set name (e.g. "Genetic Apex", "genetic-apex-premium")
    #[arg(required = true)]
    pub set_name: String,

    /// Directory containing one folder of reference images per set code
    /// (default: ./images, then ../images)
    #[arg(long)]
    pub images_dir: Option<PathBuf>,
}

/// Execute identify subcommand
///
/// Exits with failure when the report is a failure report.
///
/// # Errors
///
/// Returns an error if the report cannot be written to stdout.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: IdentifyArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<ExitCode> {
    let identifier = Identifier::new(IdentifierConfig {
        images_root: args.images_dir.clone(),
    });

    let start_time = std::time::Instant::now();
    let report = identifier.identify(&args.pack_image, &args.set_name);
    debug!("Identification took {:?}", start_time.elapsed());

    match format {
        OutputFormat::Json => print_json_report(&report)?,
        OutputFormat::Text => print_text_report(&report, verbose),
    }

    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Print a report as a single-line JSON document
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn print_json_report(report: &IdentificationReport) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(report)?);
    Ok(())
}

fn print_text_report(report: &IdentificationReport, verbose: bool) {
    match report {
        IdentificationReport::Failure { error } => {
            println!("Identification failed: {error}");
        }
        IdentificationReport::Success {
            set_code,
            set_name,
            cards,
        } => {
            println!("Set: {set_name} ({set_code})\n");

            let worst = max_distance(CARD_WIDTH, CARD_HEIGHT);
            for card in cards {
                match card.confidence_score {
                    Some(score) if verbose => {
                        #[allow(clippy::cast_precision_loss)] // Display only
                        let similarity = 100.0 * (1.0 - score as f64 / worst as f64);
                        println!(
                            "#{} {}  (score {score}, {similarity:.1}% similar)",
                            card.position, card.card_name
                        );
                    }
                    Some(score) => {
                        println!("#{} {}  (score {score})", card.position, card.card_name);
                    }
                    None => println!("#{} {}", card.position, card.card_name),
                }
            }
        }
    }
}
