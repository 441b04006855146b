use anyhow::Result;
use ccmpoll::{hostlist, ConfigLoader, JsonWriter, OutputFormat, ReplayTransport, TextWriter, ToolError};
use ccmpoll_core::{ErrorLog, Poller, RecordSink, TracingDiagnostics};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::filter::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ccmpoll")]
#[command(about = "Poll managed hosts for pending software updates, Wsman first with Dcom fallback")]
struct Args {
    /// Hosts to poll, in order
    hosts: Vec<String>,

    /// Read additional hosts from a file, one per line
    #[arg(long, value_name = "PATH")]
    hosts_file: Option<PathBuf>,

    /// Append failure details here for hosts that exhaust both protocols
    #[arg(long, value_name = "PATH")]
    error_log: Option<PathBuf>,

    /// Output format for status records
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Capture file backing the replay transport
    #[arg(long, value_name = "PATH")]
    capture: Option<PathBuf>,

    /// Config file path
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging; records go to stdout, diagnostics to stderr
    let env_filter = if args.verbose {
        EnvFilter::from_default_env()
            .add_directive(tracing_subscriber::filter::LevelFilter::DEBUG.into())
    } else {
        EnvFilter::from_default_env()
            .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration; CLI flags override file values
    let config = ConfigLoader::load_or_default(args.config)?;

    let format = match args.format {
        Some(format) => format,
        None => OutputFormat::from_name(&config.poll.format)
            .ok_or_else(|| ToolError::UnknownFormat(config.poll.format.clone()))?,
    };
    let error_log = args.error_log.or(config.poll.error_log);
    let capture_path = args
        .capture
        .or(config.capture.path)
        .ok_or(ToolError::NoTransport)?;

    // Positional hosts first, then the hosts file, order preserved
    let mut hosts = args.hosts;
    if let Some(path) = &args.hosts_file {
        hosts.extend(hostlist::read_hosts_file(path)?);
    }
    if hosts.is_empty() {
        tracing::warn!("no hosts given; nothing to poll");
    }

    let transport = Arc::new(ReplayTransport::from_file(&capture_path)?);
    let mut poller = Poller::new(transport).with_diagnostics(Arc::new(TracingDiagnostics));
    if let Some(path) = error_log {
        poller = poller.with_error_log(ErrorLog::new(path));
    }

    let mut sink: Box<dyn RecordSink> = match format {
        OutputFormat::Text => Box::new(TextWriter::new(std::io::stdout().lock())),
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout().lock())),
    };

    // Per-host failures surface as records in the stream, never as a
    // non-zero exit
    poller.run(&hosts, sink.as_mut()).await?;
    Ok(())
}
