use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::{info, warn};
use promptshare::api::HttpPostApi;
use promptshare::batch::{BatchRequest, ConsoleNotifier, run_batch};
use promptshare::core::config::{self, CliOverrides};
use promptshare::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(
    name = "promptshare",
    about = "Generate an image from a prompt and share it with the community"
)]
struct Args {
    /// Base URL of the image-sharing service
    #[arg(long)]
    api_url: Option<String>,

    /// Author name pre-filled in the form
    #[arg(short, long)]
    name: Option<String>,

    /// Directory generated photos are saved to
    #[arg(long)]
    save_dir: Option<PathBuf>,

    /// Run without the terminal UI
    #[arg(long)]
    batch: bool,

    /// Prompt for batch mode (a surprise prompt when omitted)
    #[arg(short, long, requires = "batch")]
    prompt: Option<String>,

    /// Save the generated photo (batch mode)
    #[arg(long, requires = "batch")]
    save: bool,

    /// Share the generated photo (batch mode)
    #[arg(long, requires = "batch")]
    share: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<ExitCode> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - the terminal belongs to the UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("promptshare.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        warn!("{}, falling back to defaults", e);
        config::PromptshareConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            api_url: args.api_url,
            name: args.name,
            save_dir: args.save_dir,
        },
    );

    info!("promptshare starting up against {}", resolved.base_url);

    if !args.batch {
        tui::run(resolved)?;
        return Ok(ExitCode::SUCCESS);
    }

    let api = HttpPostApi::new(resolved.base_url.clone(), resolved.timeout)
        .map_err(std::io::Error::other)?;
    let notifier = Arc::new(ConsoleNotifier::new(std::io::stderr()));
    let outcome = run_batch(
        &resolved,
        Arc::new(api),
        notifier,
        BatchRequest {
            prompt: args.prompt,
            save: args.save,
            share: args.share,
        },
    )
    .await;

    info!("Batch finished: {:?}", outcome);
    Ok(if outcome.succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
