//! Microdata extraction CLI
//!
//! Reads HTML documents (or serialized node trees) from files, URLs or standard
//! input, extracts their microdata items and prints them as `{"items": [...]}`
//! JSON, one document per source.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, ValueEnum};
use microdata::{DomTree, ExtractOptions, ItemDocument, ItempropTokens, ValuePolicy, html};
use std::fmt;
use std::io::Read;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum InputFormat {
    /// HTML markup (default)
    Html,
    /// A node tree serialized as JSON
    JsonTree,
}

/// Where a document is read from
#[derive(Debug, Clone, PartialEq, Eq)]
enum Source {
    Stdin,
    Url(String),
    Path(PathBuf),
}

impl Source {
    fn parse(raw: &str) -> Self {
        if raw == "-" {
            return Source::Stdin;
        }
        let lower = raw.get(..8).unwrap_or(raw).to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Source::Url(raw.to_string())
        } else {
            Source::Path(PathBuf::from(raw))
        }
    }

    fn read(&self) -> Result<String> {
        match self {
            Source::Stdin => {
                let mut contents = String::new();
                std::io::stdin()
                    .read_to_string(&mut contents)
                    .context("Failed to read standard input")?;
                Ok(contents)
            }
            Source::Url(url) => {
                log::debug!("Fetching {}", url);
                let response = reqwest::blocking::get(url)
                    .and_then(|response| response.error_for_status())
                    .with_context(|| format!("Failed to fetch {}", url))?;
                response
                    .text()
                    .with_context(|| format!("Failed to read response body from {}", url))
            }
            Source::Path(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display())),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Stdin => write!(f, "<stdin>"),
            Source::Url(url) => write!(f, "{}", url),
            Source::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Parser)]
#[command(name = "microdata")]
#[command(version)]
#[command(about = "Extract HTML microdata items as JSON", long_about = None)]
struct Cli {
    /// Files or http(s) URLs to read; use `-` for standard input
    #[arg(value_name = "SOURCE")]
    sources: Vec<String>,

    /// How to interpret each source
    #[arg(long, short = 'i', value_enum, default_value = "html")]
    input: InputFormat,

    /// JSON file with extraction options
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Maximum element nesting to walk (overrides the config file)
    #[arg(long, value_name = "DEPTH")]
    max_depth: Option<usize>,

    /// Precedence between a tag's value attribute and its text (overrides the config file)
    #[arg(long, value_enum)]
    value_policy: Option<ValuePolicy>,

    /// Treatment of repeated names in one itemprop attribute (overrides the config file)
    #[arg(long, value_enum)]
    itemprop_tokens: Option<ItempropTokens>,

    /// Print each document on a single line
    #[arg(long)]
    compact: bool,
}

impl Cli {
    fn extract_options(&self) -> Result<ExtractOptions> {
        let mut options = match &self.config {
            Some(path) => ExtractOptions::from_file(path)?,
            None => ExtractOptions::default(),
        };
        if let Some(max_depth) = self.max_depth {
            options = options.max_depth(max_depth);
        }
        if let Some(value_policy) = self.value_policy {
            options = options.value_policy(value_policy);
        }
        if let Some(itemprop_tokens) = self.itemprop_tokens {
            options = options.itemprop_tokens(itemprop_tokens);
        }
        options.validate()?;
        Ok(options)
    }
}

fn extract_source(source: &Source, input: InputFormat, options: &ExtractOptions) -> Result<ItemDocument> {
    let contents = source.read()?;
    let items = match input {
        InputFormat::Html => html::items_from_html(&contents, options)?,
        InputFormat::JsonTree => DomTree::from_json(&contents)?.items(options)?,
    };
    Ok(ItemDocument::new(items))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.sources.is_empty() {
        eprintln!("{}", Cli::command().render_usage());
        std::process::exit(1);
    }

    let options = cli.extract_options()?;

    for raw in &cli.sources {
        let source = Source::parse(raw);
        log::info!("Extracting microdata from {}", source);

        let document = extract_source(&source, cli.input, &options)
            .with_context(|| format!("Failed to extract microdata from {}", source))?;
        log::debug!("{}: {} items", source, document.items.len());

        let json = if cli.compact {
            document.to_json()?
        } else {
            document.to_json_pretty()?
        };
        println!("{}", json);
    }

    Ok(())
}
