use clap::Parser;
use indicatif::ProgressBar;
use resume_ai_common::{FileUpload, MockResumeService, ResumeAnalyzer};
use resume_ai_rust::{cache, cli, client, config, error, render};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use client::HttpResumeService;
use config::Config;
use error::{ResumeAiError, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze {
            input,
            job,
            as_text,
            output,
            use_cache,
            mock,
        } => {
            println!("📄 resume-ai - resume analysis\n");

            // 1. read input
            println!("[1/3] Reading input...");
            if !input.exists() {
                return Err(ResumeAiError::FileNotFound(input.display().to_string()));
            }
            let bytes = std::fs::read(&input)?;
            let job_description = match &job {
                Some(path) => Some(std::fs::read_to_string(path)?),
                None => None,
            };
            let file_name = input
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| "resume".to_string());
            println!("✔ {} ({} bytes)\n", file_name, bytes.len());

            let cache_dir = cache_dir_for(&input);
            let cache_key = cache::compute_key(&bytes, job_description.as_deref());

            // 2. analyze, or reuse a cached result
            let cached_payload = use_cache
                .then(|| cache::CacheFile::load(&cache_dir).get(&cache_key).cloned())
                .flatten();

            let payload = match cached_payload {
                Some(payload) => {
                    println!("[2/3] Cached analysis found, skipping request\n");
                    payload
                }
                None => {
                    println!(
                        "[2/3] Analyzing...{}",
                        if mock { " (mock service)" } else { "" }
                    );
                    let service: Box<dyn ResumeAnalyzer> = if mock {
                        Box::new(MockResumeService::new())
                    } else {
                        Box::new(HttpResumeService::new(config.resolve_base_url()?))
                    };

                    let spinner = ProgressBar::new_spinner();
                    spinner.set_message("Waiting for the analysis service...");
                    spinner.enable_steady_tick(Duration::from_millis(100));

                    let text_mode = as_text || is_text_input(&input);
                    let result = if text_mode {
                        let resume_text = String::from_utf8_lossy(&bytes).into_owned();
                        service
                            .analyze_text(&resume_text, job_description.as_deref())
                            .await
                    } else {
                        service
                            .analyze_file(
                                FileUpload::new(file_name.clone(), bytes),
                                job_description.as_deref(),
                            )
                            .await
                    };

                    spinner.finish_and_clear();
                    let payload = result?;
                    println!("✔ Analysis complete\n");

                    if use_cache {
                        let mut cached = cache::CacheFile::load(&cache_dir);
                        cached.insert(cache_key, file_name.clone(), payload.clone());
                        if let Err(e) = cached.save(&cache_dir) {
                            tracing::warn!(error = %e, "failed to save analysis cache");
                        }
                    }
                    payload
                }
            };

            // 3. render
            println!("[3/3] Results");
            render::render_payload(&payload);

            if let Some(output) = output {
                let json = serde_json::to_string_pretty(&payload)?;
                std::fs::write(&output, json)?;
                println!("\n✔ Raw analysis saved: {}", output.display());
            }

            println!("\n✅ Done");
        }

        Commands::Health { mock } => {
            let health = if mock {
                MockResumeService::new().check_health().await
            } else {
                HttpResumeService::new(config.resolve_base_url()?)
                    .check_health()
                    .await
            };

            // the probe itself never fails; a dead service reports "error"
            if health.is_error() {
                println!("✖ Analysis service unreachable (status: {})", health.status);
            } else {
                println!("✔ Analysis service healthy (status: {})", health.status);
            }
        }

        Commands::Config { set_api_url, show } => {
            let mut config = config;

            if let Some(url) = set_api_url {
                config.set_api_url(url)?;
                println!("✔ API base URL saved");
            }

            if show {
                println!("Configuration:");
                println!("  environment:  {}", config.app_env);
                println!(
                    "  api base URL: {}",
                    config.api_base_url.as_deref().unwrap_or("(not set)")
                );
                println!("  config file:  {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Inputs with a plain-text extension go to the text endpoint
fn is_text_input(path: &Path) -> bool {
    matches!(
        path.extension()
            .and_then(|extension| extension.to_str())
            .map(|extension| extension.to_ascii_lowercase())
            .as_deref(),
        Some("txt") | Some("md")
    )
}

fn cache_dir_for(input: &Path) -> PathBuf {
    input
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}
