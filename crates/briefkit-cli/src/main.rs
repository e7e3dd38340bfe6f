mod assemble;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use briefkit_core::{AudienceInput, BrandPreferences, JourneyType};
use briefkit_pipeline::{DocumentText, Pipeline, PipelineRequest};

use crate::assemble::BriefAssembler;

#[derive(Debug, Parser)]
#[command(name = "briefkit")]
#[command(about = "Extract, classify, and assemble marketing campaign briefs")]
struct Cli {
    /// Page URL to extract from. Repeatable; URLs are reconciled first.
    #[arg(long = "url")]
    urls: Vec<String>,

    /// Plain-text document to extract from (already converted from PDF).
    /// Repeatable; documents are reconciled after URLs.
    #[arg(long = "text-file")]
    text_files: Vec<PathBuf>,

    /// Journey type: B2B or B2C.
    #[arg(long, default_value = "B2C")]
    journey_type: String,

    /// JSON file with brand preference overrides.
    #[arg(long)]
    brand_prefs: Option<PathBuf>,

    /// JSON file with user-supplied primary audience data.
    #[arg(long)]
    audience: Option<PathBuf>,

    /// Pretty-print the result JSON.
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = briefkit_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let request = build_request(&cli)?;
    let pipeline = Pipeline::new(&config, BriefAssembler)?
        .with_progress(|step, message| tracing::info!(step, "{message}"));

    let result = pipeline.run(&request).await;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{json}");

    if let Some(error) = &result.error {
        anyhow::bail!("pipeline failed: {error}");
    }
    Ok(())
}

fn build_request(cli: &Cli) -> anyhow::Result<PipelineRequest> {
    let mut documents = Vec::new();
    for path in &cli.text_files {
        let text = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("cannot read {}: {e}", path.display()))?;
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        let pages = 1;
        documents.push(DocumentText { name, text, pages });
    }

    let brand_preferences: Option<BrandPreferences> = match &cli.brand_prefs {
        Some(path) => Some(serde_json::from_str(&std::fs::read_to_string(path)?)?),
        None => None,
    };
    let audience: Option<AudienceInput> = match &cli.audience {
        Some(path) => Some(serde_json::from_str(&std::fs::read_to_string(path)?)?),
        None => None,
    };

    Ok(PipelineRequest {
        urls: cli.urls.clone(),
        documents,
        journey_type: JourneyType::parse_lenient(&cli.journey_type),
        brand_preferences,
        audience,
    })
}
