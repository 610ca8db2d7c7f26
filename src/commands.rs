//! Subcommand execution for the CLI binary.

use std::path::Path;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use log::{info, warn};
use tokio::io::{stdin, AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::app::{print_batch_summary, print_error_statistics, render_batch, render_section};
use crate::batch::BatchOrchestrator;
use crate::cli::{AnalyzeArgs, BatchArgs, Cli, Command};
use crate::client::{AnalysisClient, AnalysisPhase};
use crate::config::{ClientConfig, MAX_URL_LENGTH};
use crate::export::{export_batch, ExportEngine};
use crate::store::{ResultStore, StoreOutcome};

/// Runs the parsed command line to completion.
///
/// # Errors
///
/// Returns an error if the service URL is invalid, the HTTP client cannot be
/// built, the analysis fails, or an export cannot be written.
pub async fn run(cli: Cli) -> Result<()> {
    let config = ClientConfig::with_base_url(&cli.api_url)
        .with_context(|| format!("Invalid analysis service URL: {}", cli.api_url))?;
    let client = AnalysisClient::new(config).context("Failed to initialize HTTP client")?;
    let mut store = ResultStore::new();

    let outcome = match cli.command {
        Command::Analyze(args) => analyze(&client, &mut store, args).await,
        Command::Batch(args) => batch(&client, &mut store, args).await,
        Command::Recent { limit } => recent(&client, limit).await,
        Command::Health => health(&client).await,
    };

    print_error_statistics(&client.error_stats());
    outcome
}

async fn analyze(client: &AnalysisClient, store: &mut ResultStore, args: AnalyzeArgs) -> Result<()> {
    let settings = args.settings.to_settings();
    let ticket = store.begin_single();

    let result = client
        .analyze_observed(&args.url, &settings, |phase| {
            if phase == AnalysisPhase::Requesting {
                info!("Service is up, analyzing {}", args.url.trim());
            }
        })
        .await?;

    if store.store_single(ticket, result) == StoreOutcome::Superseded {
        bail!("Analysis result was superseded by a newer submission");
    }
    let Some(result) = store.current() else {
        bail!("No analysis result stored");
    };

    let sections = if args.section.is_empty() {
        store.available_sections()
    } else {
        args.section.clone()
    };
    for section in sections {
        println!("{}", render_section(result, section));
    }

    let engine = ExportEngine::new(client);
    for format in &args.export {
        let artifact = engine
            .export_single(result, *format)
            .await
            .with_context(|| format!("Failed to export {format}"))?;
        let path = artifact
            .save_to(&args.output_dir)
            .await
            .with_context(|| format!("Failed to write {}", artifact.filename))?;
        println!("Exported {}", path.display());
    }
    Ok(())
}

async fn batch(client: &AnalysisClient, store: &mut ResultStore, args: BatchArgs) -> Result<()> {
    let mut urls = args.urls.clone();
    if let Some(path) = &args.file {
        urls.extend(read_url_file(path).await?);
    }

    let settings = args.settings.to_settings();
    let orchestrator = BatchOrchestrator::new(client.clone());
    let started_at_ms = chrono::Utc::now().timestamp_millis();
    let ticket = store.begin_batch(started_at_ms);
    let start = Instant::now();

    let run = orchestrator.run_at(&urls, &settings, started_at_ms).await?;
    if store.complete_batch(ticket, run) == StoreOutcome::Superseded {
        bail!("Batch run was superseded by a newer submission");
    }
    let Some(run) = store.batch() else {
        bail!("No batch run stored");
    };

    println!("{}", render_batch(run));
    print_batch_summary(&run.summary(), start.elapsed().as_secs_f64());

    if args.export_csv {
        let artifact = export_batch(run).context("Failed to export batch CSV")?;
        let path = artifact
            .save_to(&args.output_dir)
            .await
            .with_context(|| format!("Failed to write {}", artifact.filename))?;
        println!("Exported {}", path.display());
    }
    Ok(())
}

async fn recent(client: &AnalysisClient, limit: u32) -> Result<()> {
    let analyses = client.recent_analyses(limit as usize).await?;
    if analyses.is_empty() {
        println!("No analyses stored yet");
    }
    for entry in analyses {
        println!(
            "#{:<6} {:<4} {} {}",
            entry.id,
            entry.status_code.map(|s| s.to_string()).unwrap_or_default(),
            entry.url,
            entry.title.unwrap_or_default()
        );
    }
    Ok(())
}

async fn health(client: &AnalysisClient) -> Result<()> {
    client.check_health().await?;
    println!("Analysis service at {} is up", client.config().api_base_url);
    Ok(())
}

/// Reads URLs from `path`, one per line (`-` reads stdin).
///
/// Blank lines and `#` comments are skipped, as are lines longer than
/// `MAX_URL_LENGTH`.
pub async fn read_url_file(path: &Path) -> Result<Vec<String>> {
    if path == Path::new("-") {
        return read_urls(BufReader::new(stdin())).await;
    }
    let file = tokio::fs::File::open(path)
        .await
        .with_context(|| format!("Failed to open {}", path.display()))?;
    read_urls(BufReader::new(file)).await
}

async fn read_urls<R: AsyncBufRead + Unpin>(reader: R) -> Result<Vec<String>> {
    let mut lines = reader.lines();
    let mut urls = Vec::new();
    while let Some(line) = lines.next_line().await.context("Failed to read URL list")? {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if trimmed.len() > MAX_URL_LENGTH {
            warn!("Skipping URL longer than {MAX_URL_LENGTH} characters");
            continue;
        }
        urls.push(trimmed.to_string());
    }
    Ok(urls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_read_url_file_skips_comments_and_blanks() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# header").unwrap();
        writeln!(file, "a.com").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  https://b.com  ").unwrap();
        writeln!(file, "{}", "x".repeat(MAX_URL_LENGTH + 1)).unwrap();

        let urls = read_url_file(file.path()).await.unwrap();
        assert_eq!(urls, vec!["a.com", "https://b.com"]);
    }

    #[tokio::test]
    async fn test_read_url_file_missing() {
        let err = read_url_file(Path::new("/nonexistent/urls.txt")).await.unwrap_err();
        assert!(err.to_string().contains("Failed to open"));
    }
}
