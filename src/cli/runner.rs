use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use letterbox::{
    BatchConfig, BatchReport, LetterboxParams, letterbox_file_to_path, output_path_for,
    process_directory_to_path,
};

use super::args::CliArgs;
use super::errors::AppError;

/// `RUST_LOG` (or `info`) as the base filter; `--log` raises it to debug.
fn log_filter(verbose: bool, env: Option<&str>) -> EnvFilter {
    let filter = env
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"));
    if verbose {
        filter.add_directive(LevelFilter::DEBUG.into())
    } else {
        filter
    }
}

fn init_logging(verbose: bool) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose, env.as_deref()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn params_from_args(args: &CliArgs) -> LetterboxParams {
    LetterboxParams::new(args.size, args.background).with_filter(args.filter)
}

/// Output path for single file mode: explicit `--output`, else `<stem>.png`
/// inside `--output-dir` or `_out` next to the input file.
fn single_output_path(
    input: &Path,
    output: Option<PathBuf>,
    output_dir: Option<PathBuf>,
) -> PathBuf {
    output.unwrap_or_else(|| {
        let dir = output_dir.unwrap_or_else(|| {
            letterbox::core::params::default_output_dir(input.parent().unwrap_or(Path::new("")))
        });
        output_path_for(input, &dir)
    })
}

fn print_report(report: &BatchReport) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);
    let params = params_from_args(&args);

    if let Some(input) = args.input.clone() {
        let output = single_output_path(&input, args.output.clone(), args.output_dir.clone());
        let layout = letterbox_file_to_path(&input, &output, &params).map_err(AppError::from)?;
        debug!("Placed at {:?}", layout);
        info!("{} -> {}", input.display(), output.display());

        if args.json {
            let report = BatchReport {
                processed: 1,
                outputs: vec![output],
                ..BatchReport::default()
            };
            print_report(&report)?;
        }
        return Ok(());
    }

    let input_dir = args.input_dir.clone().ok_or(AppError::MissingArgument {
        arg: "--input-dir".to_string(),
    })?;
    let config =
        BatchConfig::new(input_dir, args.output_dir.clone(), params).map_err(AppError::from)?;

    info!("Starting batch processing from directory: {:?}", config.input_dir);
    info!("Output directory: {:?}", config.output_dir);
    info!(
        "Canvas: {}, background: {}, filter: {}",
        config.params.canvas, config.params.background, config.params.filter
    );

    let report = process_directory_to_path(&config, args.keep_going).map_err(AppError::from)?;

    info!("Batch processing complete!");
    info!("Processed: {}", report.processed);
    info!("Skipped: {}", report.skipped);
    info!("Errors: {}", report.errors);

    if args.json {
        print_report(&report)?;
    }

    if report.errors > 0 {
        for failure in &report.failures {
            warn!("Failed: {:?}: {}", failure.path, failure.message);
        }
        return Err(AppError::BatchFailed {
            failed: report.errors,
            total: report.processed + report.errors,
        }
        .into());
    }

    Ok(())
}
