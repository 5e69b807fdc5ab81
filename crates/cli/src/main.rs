// ABOUTME: CLI for extracting articles through the Diffbot Article API.
// ABOUTME: Analyzes URLs (or decodes saved responses) and prints the articles as JSON.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};
use diffbot::{Article, Client, Fields};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Extract articles with the Diffbot Article API and output JSON.
#[derive(Parser, Debug)]
#[command(name = "diffbot-cli")]
#[command(about = "Extract articles with the Diffbot Article API", long_about = None)]
struct Args {
    /// Page URL(s) to analyze.
    urls: Vec<String>,

    /// Diffbot developer token.
    #[arg(long, env = "DIFFBOT_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// API endpoint override.
    #[arg(long = "api-url", env = "DIFFBOT_API_URL")]
    api_url: Option<String>,

    /// Optional fields to request, comma separated (e.g. "tags,meta,images(*)").
    #[arg(long)]
    fields: Option<String>,

    /// Request the comment count.
    #[arg(long, default_value_t = false)]
    comments: bool,

    /// Server-side extraction timeout in milliseconds.
    #[arg(long = "timeout-ms")]
    timeout_ms: Option<u64>,

    /// Send this HTML file for extraction instead of fetching the URL (one URL only).
    #[arg(long)]
    html: Option<PathBuf>,

    /// Decode a saved API response instead of calling the API. Use "-" for stdin.
    #[arg(long, conflicts_with_all = ["urls", "html"])]
    input: Option<PathBuf>,

    /// Output file path (default: stdout).
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Output compact JSON instead of pretty.
    #[arg(long, default_value_t = false)]
    compact: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("diffbot={level},diffbot_cli={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

fn emit(args: &Args, text: &str) -> Result<()> {
    match &args.output {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))
        }
        None => {
            println!("{}", text);
            Ok(())
        }
    }
}

fn render<T: Serialize + ?Sized>(value: &T, compact: bool) -> Result<String> {
    let out = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(out)
}

/// Run the command. Returns whether every target succeeded.
async fn run(args: &Args) -> Result<bool> {
    if let Some(path) = &args.input {
        let body = read_input(path)?;
        let article = Article::from_json(&body)
            .with_context(|| format!("failed to decode {}", path.display()))?;
        emit(args, &render(&article, args.compact)?)?;
        return Ok(true);
    }

    if args.urls.is_empty() {
        bail!("at least one URL is required, or use --input");
    }
    if args.html.is_some() && args.urls.len() != 1 {
        bail!("--html requires exactly one URL");
    }

    let fields = match &args.fields {
        Some(list) => Fields::parse(list)?,
        None => Fields::new(),
    };
    let html = match &args.html {
        Some(path) => Some(read_input(path)?),
        None => None,
    };

    let mut builder = Client::builder();
    if let Some(token) = &args.token {
        builder = builder.token(token);
    }
    if let Some(api_url) = &args.api_url {
        builder = builder.api_base(api_url);
    }
    let client = builder.build()?;

    let mut articles = Vec::new();
    let mut all_ok = true;

    for url in &args.urls {
        let mut request = client.analyze(url).with_fields(fields.clone());
        if args.comments {
            request = request.with_comments();
        }
        if let Some(ms) = args.timeout_ms {
            request = request.with_timeout(Duration::from_millis(ms));
        }
        if let Some(html) = &html {
            request = request.with_html(html.clone());
        }

        match request.send().await {
            Ok(article) => {
                debug!(%article, "analyzed");
                articles.push(article);
            }
            Err(e) => {
                eprintln!("error analyzing {}: {}", url, e);
                all_ok = false;
            }
        }
    }

    // Several URLs always give an array, holding whichever ones succeeded.
    if args.urls.len() > 1 {
        emit(args, &render(&articles, args.compact)?)?;
    } else if let Some(article) = articles.first() {
        emit(args, &render(article, args.compact)?)?;
    }

    Ok(all_ok)
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(1)
        }
    }
}
