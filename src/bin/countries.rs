use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use countries_rs::api::request_url;
use countries_rs::render::html::render_page;
use countries_rs::{
    Client, LogErrorSink, Pipeline, ResultBox, RunSummary, Settings, TextSink, run_all, storage,
};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

const PAGE_TITLE: &str = "Countries";

#[derive(Parser, Debug)]
#[command(
    name = "countries",
    version,
    about = "Fetch REST Countries data and print grouped, filtered & sorted summaries"
)]
struct Cli {
    /// Log verbosity (RUST_LOG overrides this).
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    log_level: LogLevel,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run pipelines and render their results.
    Run(RunArgs),
    /// Print the request URL of each selected pipeline without fetching anything.
    Urls(SourceArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutFormat {
    Text,
    Html,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum PipelineArg {
    Tally,
    Large,
    Language,
    Membership,
}

impl From<PipelineArg> for Pipeline {
    fn from(p: PipelineArg) -> Self {
        match p {
            PipelineArg::Tally => Pipeline::Tally,
            PipelineArg::Large => Pipeline::Large,
            PipelineArg::Language => Pipeline::Language,
            PipelineArg::Membership => Pipeline::Membership,
        }
    }
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Pipeline(s) to run; repeat the flag for several. Defaults to all four.
    #[arg(short, long, value_enum)]
    pipeline: Vec<PipelineArg>,
    /// Language for the language pipeline (e.g., Spanish, French).
    #[arg(short, long, default_value = countries_rs::config::DEFAULT_LANGUAGE)]
    language: String,
    /// API base URL.
    #[arg(long, default_value = countries_rs::config::DEFAULT_BASE_URL)]
    base_url: String,
}

#[derive(Args, Debug)]
struct RunArgs {
    #[command(flatten)]
    source: SourceArgs,
    /// Population split for the tally pipeline.
    #[arg(long, default_value_t = countries_rs::config::DEFAULT_TALLY_THRESHOLD)]
    tally_threshold: u64,
    /// Minimum population (exclusive) for the large-countries pipeline.
    #[arg(long, default_value_t = countries_rs::config::DEFAULT_LARGE_THRESHOLD)]
    large_threshold: u64,
    /// Request timeout in seconds. Without it requests wait indefinitely.
    #[arg(long)]
    timeout: Option<u64>,
    /// Output format. If omitted, inferred from --out extension (text otherwise).
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
    /// Write results to this file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

impl SourceArgs {
    fn pipelines(&self) -> Vec<Pipeline> {
        if self.pipeline.is_empty() {
            Pipeline::ALL.to_vec()
        } else {
            self.pipeline.iter().copied().map(Pipeline::from).collect()
        }
    }
}

impl RunArgs {
    fn settings(&self) -> Settings {
        Settings {
            base_url: self.source.base_url.clone(),
            language: self.source.language.clone(),
            tally_threshold: self.tally_threshold,
            large_threshold: self.large_threshold,
            timeout: self.timeout.map(Duration::from_secs),
        }
    }

    fn resolved_format(&self) -> OutFormat {
        if let Some(f) = self.format {
            return f;
        }
        let ext = self
            .out
            .as_deref()
            .and_then(Path::extension)
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("html" | "htm") => OutFormat::Html,
            Some("json") => OutFormat::Json,
            _ => OutFormat::Text,
        }
    }
}

fn init_logging(level: LogLevel) {
    let level = match level {
        LogLevel::Off => "off",
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };
    let env = env_logger::Env::default().filter_or("RUST_LOG", level);
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);
    match cli.cmd {
        Command::Run(args) => cmd_run(args),
        Command::Urls(args) => cmd_urls(args),
    }
}

fn cmd_urls(args: SourceArgs) -> Result<()> {
    for p in args.pipelines() {
        let (endpoint, fields) = p.request(&args.language);
        println!("{p}\t{}", request_url(&args.base_url, &endpoint, fields));
    }
    Ok(())
}

fn cmd_run(args: RunArgs) -> Result<()> {
    let settings = args.settings();
    let client = Client::new(&settings)?;
    let pipelines = args.source.pipelines();

    let summary = match args.resolved_format() {
        OutFormat::Text => {
            let out: Box<dyn Write + Send> = match args.out.as_ref() {
                Some(path) => Box::new(File::create(path)?),
                None => Box::new(std::io::stdout()),
            };
            let sink = TextSink::new(out);
            run_all(&client, &settings, &pipelines, &sink, &LogErrorSink)
        }
        fmt @ (OutFormat::Html | OutFormat::Json) => {
            let results = ResultBox::new();
            let summary = run_all(&client, &settings, &pipelines, &results, &LogErrorSink);
            let fragments = results.into_fragments();
            match (fmt, args.out.as_ref()) {
                (OutFormat::Html, Some(path)) => storage::save_html(&fragments, PAGE_TITLE, path)?,
                (OutFormat::Html, None) => {
                    print!("{}", render_page(PAGE_TITLE, &fragments, chrono::Utc::now()))
                }
                (_, Some(path)) => storage::save_json(&fragments, path)?,
                (_, None) => println!("{}", serde_json::to_string_pretty(&fragments)?),
            }
            summary
        }
    };

    if let Some(path) = args.out.as_ref() {
        eprintln!("Wrote results to {}", path.display());
    }
    report(&summary);
    Ok(())
}

fn report(summary: &RunSummary) {
    if summary.failed.is_empty() {
        return;
    }
    let names: Vec<&str> = summary.failed.iter().map(Pipeline::name).collect();
    eprintln!(
        "{} of {} pipelines failed: {}",
        summary.failed.len(),
        summary.failed.len() + summary.completed.len(),
        names.join(", ")
    );
}
