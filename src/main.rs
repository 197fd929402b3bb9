use anyhow::Context as _;
use clap::{Parser, Subcommand};
use maillog_core::config::Config;
use maillog_core::share::{ShareRequest, ShareTarget};
use maillog_core::writer::{ConsoleSink, StderrSink};
use maillog_core::{Exporter, LogLevel, LogWriter};

#[derive(Parser)]
#[command(name = "maillog", about = "Append-only log capture with mailable export")]
struct Cli {
    /// Write debug logs to /tmp/maillog-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Append one entry to the log file.
    Write {
        /// Severity: trace, debug, info, warn, error, fatal.
        #[arg(long, default_value = "info")]
        level: String,
        /// Category tag recorded in brackets, e.g. com.example.Sync.
        #[arg(long, default_value = "maillog.cli")]
        tag: String,
        message: String,
    },
    /// Print the grouped rendering of the current log to stdout.
    Show,
    /// Package the log into a compressed artifact and hand it off.
    Export {
        /// Artifact base name; the `.gz` suffix is appended. Defaults to the
        /// configured file_name.
        #[arg(long)]
        name: Option<String>,
        /// Text prepended verbatim ahead of the grouped log content.
        #[arg(long)]
        metadata: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/maillog-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("maillog debug log started — tail -f /tmp/maillog-debug.log");
    }

    let config = Config::load().unwrap_or_else(|_| Config::defaults());

    match cli.command {
        Command::Write { level, tag, message } => {
            let level: LogLevel = level.parse()?;
            let console: Option<Box<dyn ConsoleSink>> = if config.log.console {
                Some(Box::new(StderrSink))
            } else {
                None
            };
            let writer =
                LogWriter::open(config.log.file_path(), config.log.format_spec(), console)?;
            writer.write(level, &tag, &message);
        }

        Command::Show => {
            let path = config.log.file_path();
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("no log at {}", path.display()))?;
            print!("{}", maillog_core::group::group(raw.lines()));
        }

        Command::Export { name, metadata } => {
            let name = name.unwrap_or_else(|| config.export.file_name.clone());
            let exporter = Exporter::new(config.export.dir());
            let artifact = exporter.export(&config.log.file_path(), metadata.as_deref(), &name)?;
            tracing::debug!(artifact = %artifact.display(), "export complete");

            let request = ShareRequest::new(
                artifact,
                config.export.recipient.clone(),
                config.export.subject.clone(),
            );
            PrintHandoff.share(&request)?;
        }
    }

    Ok(())
}

/// Stand-in share target for the CLI: prints the hand-off so the user (or a
/// wrapping script) can attach the artifact themselves. Platform chooser
/// integration lives in the host application, not here.
struct PrintHandoff;

impl ShareTarget for PrintHandoff {
    fn share(&self, request: &ShareRequest) -> anyhow::Result<()> {
        println!(
            "{} ({}) ready to send to {} — subject: {}",
            request.artifact().display(),
            request.mime_type,
            request.recipient,
            request.subject,
        );
        Ok(())
    }
}
