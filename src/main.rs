use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use cypher_pattern::config::{ConfigOverrides, EnvironmentConfig, LabelOperator};
use cypher_pattern::document::PatternDocument;

/// cypher-pattern - compile JSON pattern documents to Cypher
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Pattern document (reads stdin when omitted)
    input: Option<PathBuf>,

    /// YAML configuration file (otherwise CYPHER_PATTERN_* environment variables)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Prefix for generated variable names
    #[arg(long)]
    prefix: Option<String>,

    /// Prefix for generated parameter names
    #[arg(long)]
    param_prefix: Option<String>,

    /// Separator between node labels (':' or '&')
    #[arg(long)]
    label_operator: Option<LabelOperator>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

impl Cli {
    fn environment_config(&self) -> anyhow::Result<EnvironmentConfig> {
        let overrides = ConfigOverrides {
            prefix: self.prefix.clone(),
            param_prefix: self.param_prefix.clone(),
            label_operator: self.label_operator,
        };
        let config = EnvironmentConfig::load(self.config.as_deref(), overrides)
            .context("Invalid configuration")?;
        Ok(config)
    }

    fn read_input(&self) -> anyhow::Result<String> {
        match &self.input {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display())),
            None => {
                let mut input = String::new();
                std::io::stdin()
                    .read_to_string(&mut input)
                    .context("Failed to read stdin")?;
                Ok(input)
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Defaults to INFO level, can be overridden with RUST_LOG env var
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.environment_config()?;
    log::debug!("Using configuration: {:?}", config);

    let document = PatternDocument::from_json(&cli.read_input()?)?;
    let result = document.compile(config)?;
    log::info!(
        "Compiled pattern ({} parameter(s))",
        result.params.len()
    );

    let output = if cli.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", output);
    Ok(())
}
