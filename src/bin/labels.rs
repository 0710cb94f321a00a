use anyhow::Result;
use clap::Parser;
use rekognition_labels::{cli::Cli, create_rekognition_client, RekognitionDetector};
use std::{io, process::ExitCode};

async fn try_main(cli: Cli) -> Result<()> {
    let request = cli.request()?;
    let client = create_rekognition_client(&cli.session()).await;
    let detector = RekognitionDetector::new(client);

    let count = rekognition_labels::run(&detector, &request, &mut io::stdout().lock()).await?;
    tracing::info!(count, location = %request.location(), "done");

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();

    match try_main(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ERROR: {err:#}");
            ExitCode::FAILURE
        }
    }
}
