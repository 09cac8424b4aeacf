use anyhow::Result;
use clap::{CommandFactory, Parser, ValueEnum};
use ddexport::config::{Config, API_URL_ENV};
use ddexport::datadog::auth::{API_KEY_VAR, APP_KEY_VAR};
use ddexport::datadog::{DatadogClient, DatadogCredentials};
use ddexport::resource::{
    executor, known_names, lookup, selector, DeleteOutcome, DeleteReport, Report,
};
use ddexport::{Action, Context, SelectionOptions};
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Export Datadog resources to Terraform, or delete them by tag
#[derive(Parser, Debug)]
#[command(name = "ddexport", version, about, long_about = None)]
struct Args {
    /// Resource kind to act on (monitors, dashboards, screenboards)
    resource: String,

    /// What to do with the selected resources
    #[arg(long, value_enum)]
    action: Action,

    /// IDs of the elements to fetch
    #[arg(long, value_delimiter = ',')]
    ids: Vec<i64>,

    /// Tags of the elements to fetch; on delete, tags an element must carry
    #[arg(long, value_delimiter = ',')]
    tags: Vec<String>,

    /// Select every available element
    #[arg(long)]
    all: bool,

    /// Only act on monitors of this type, e.g. "metric alert"
    #[arg(long = "type")]
    resource_type: Option<String>,

    /// Actually delete (the default is a dry run)
    #[arg(long)]
    force: bool,

    /// Save each element into a separate file
    #[arg(long)]
    files: bool,

    /// Directory for --files output
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Datadog API base URL
    #[arg(long)]
    api_url: Option<String>,

    /// Enable debug output
    #[arg(long)]
    debug: bool,

    /// Log level (overridden by --debug; without either flag, RUST_LOG or warn)
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,
}

const DEFAULT_LOG_DIRECTIVE: &str = "warn";

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

/// Filter directive for the subscriber. A level given on the command line
/// wins over `RUST_LOG`; `None` means logging is off.
fn filter_directive(explicit: Option<LogLevel>, rust_log: Option<String>) -> Option<String> {
    match explicit {
        Some(level) => level
            .to_tracing_level()
            .map(|level| level.as_str().to_lowercase()),
        None => Some(
            rust_log
                .filter(|directive| !directive.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_DIRECTIVE.to_string()),
        ),
    }
}

/// Log to stderr so rendered output on stdout stays clean
fn setup_logging(
    explicit: Option<LogLevel>,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let directive = filter_directive(explicit, std::env::var(EnvFilter::DEFAULT_ENV).ok())?;

    let (non_blocking, guard) = tracing_appender::non_blocking(io::stderr());

    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|e| {
        eprintln!("Ignoring invalid log filter {:?}: {}", directive, e);
        EnvFilter::new(DEFAULT_LOG_DIRECTIVE)
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_target(false)
        .init();

    tracing::debug!("ddexport started with log filter: {}", directive);

    Some(guard)
}

fn print_usage() {
    let mut cmd = Args::command();
    eprintln!("{}", cmd.render_usage());
    eprintln!("\twhere <RESOURCE> is one of: {}", known_names().join(", "));
    eprintln!(
        "Environment variables {} and {} are required",
        API_KEY_VAR, APP_KEY_VAR
    );
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.debug {
        Some(LogLevel::Debug)
    } else {
        args.log_level
    };
    let _log_guard = setup_logging(level);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            print_usage();
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let credentials = DatadogCredentials::from_env()?;
    let kind = lookup(&args.resource)?;

    let config = Config::load();
    let env_url = std::env::var(API_URL_ENV).ok();
    let api_url = config.effective_api_url(args.api_url.as_deref(), env_url.as_deref());
    let output_dir = config.effective_output_dir(args.output_dir.as_deref());

    let options = SelectionOptions {
        ids: args.ids,
        tags: args.tags,
        all: args.all,
        action: args.action,
        resource_type: args.resource_type,
        force: args.force,
        to_files: args.files,
    };
    selector::validate(&options, kind)?;

    tracing::info!("Using API endpoint {}", api_url);
    let client = DatadogClient::new(credentials, &api_url, config.effective_timeout())
        .map_err(ddexport::Error::from)?;
    let ctx = Context::new(client, options).with_output_dir(output_dir);

    let items = selector::select(&ctx, kind).await?;

    let mut out = BufWriter::new(io::stdout().lock());
    let report = match executor::execute(&ctx, &items, &mut out).await {
        Ok(report) => report,
        Err(err) => {
            if let ddexport::Error::DeleteAborted { report, .. } = &err {
                report_deletions(report, ctx.options.force);
            }
            return Err(err.into());
        }
    };

    match report {
        Report::Export(report) => {
            for exported in &report.exported {
                if let Some(path) = &exported.path {
                    tracing::info!("Wrote {}", path.display());
                }
            }
        }
        Report::Delete(report) => {
            report_deletions(&report, ctx.options.force);
            report.into_result()?;
        }
    }

    Ok(())
}

fn report_deletions(report: &DeleteReport, force: bool) {
    for outcome in &report.outcomes {
        if let DeleteOutcome::Failed { item, error } = outcome {
            eprintln!("Failed to delete element {}: {}", item.id, error);
        }
    }
    if force {
        tracing::info!("Deleted {} element(s)", report.deleted());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_win_over_rust_log() {
        let rust_log = || Some("trace".to_string());
        assert_eq!(
            filter_directive(Some(LogLevel::Debug), rust_log()).as_deref(),
            Some("debug")
        );
        assert_eq!(
            filter_directive(Some(LogLevel::Error), rust_log()).as_deref(),
            Some("error")
        );
        assert_eq!(filter_directive(Some(LogLevel::Off), rust_log()), None);
    }

    #[test]
    fn test_rust_log_applies_without_flags() {
        assert_eq!(
            filter_directive(None, Some("ddexport=info".into())).as_deref(),
            Some("ddexport=info")
        );
        assert_eq!(filter_directive(None, None).as_deref(), Some("warn"));
        assert_eq!(filter_directive(None, Some(" ".into())).as_deref(), Some("warn"));
    }

    #[test]
    fn test_debug_flag_is_explicit() {
        let args = Args::parse_from(["ddexport", "monitors", "--action", "export", "--debug"]);
        assert!(args.debug);
        assert!(args.log_level.is_none());

        let args = Args::parse_from([
            "ddexport",
            "monitors",
            "--action",
            "export",
            "--log-level",
            "info",
        ]);
        assert!(matches!(args.log_level, Some(LogLevel::Info)));
    }
}
