use std::{
    fs::File,
    io::{self, IsTerminal, Write},
    path::Path,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        FmtContext, MakeWriter,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

use crate::config::LoggingConfig;

// --- Formatter ---

/// `quote_core::wizard::controller` becomes `core/wizard::controller`.
/// Targets outside the workspace are left alone.
fn short_target(target: &str) -> String {
    match target.strip_prefix("quote_") {
        Some(rest) => match rest.split_once("::") {
            Some((krate, module)) => format!("{krate}/{module}"),
            None => rest.to_string(),
        },
        None => target.to_string(),
    }
}

struct LocalFmt;

impl<S, N> FormatEvent<S, N> for LocalFmt
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();

        if ansi {
            write!(writer, "\x1b[2m")?
        }
        write!(
            writer,
            "{} ",
            Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )?;
        if ansi {
            write!(writer, "\x1b[0m")?
        }

        let (pre, post) = if ansi {
            match *meta.level() {
                Level::ERROR => ("\x1b[1;31m", "\x1b[0m"),
                Level::WARN => ("\x1b[1;33m", "\x1b[0m"),
                Level::INFO => ("\x1b[1;32m", "\x1b[0m"),
                Level::DEBUG => ("\x1b[1;34m", "\x1b[0m"),
                Level::TRACE => ("\x1b[1;35m", "\x1b[0m"),
            }
        } else {
            ("", "")
        };
        write!(writer, "{}{:>5}{} ", pre, meta.level(), post)?;

        let origin = short_target(meta.target());
        match (meta.line(), ansi) {
            (Some(line), true) => write!(writer, "\x1b[36m{origin}:{line}\x1b[0m ")?,
            (Some(line), false) => write!(writer, "{origin}:{line} ")?,
            (None, true) => write!(writer, "\x1b[36m{origin}\x1b[0m ")?,
            (None, false) => write!(writer, "{origin} ")?,
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// --- Log file writer ---

/// Shared append-mode log file. A poisoned lock still yields the file.
#[derive(Clone)]
struct LogFile(Arc<Mutex<File>>);

struct LogFileWriter<'a>(MutexGuard<'a, File>);

impl Write for LogFileWriter<'_> {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = LogFileWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        LogFileWriter(self.0.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

fn open_log_file(path: &Path) -> Result<LogFile> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))?;
    Ok(LogFile(Arc::new(Mutex::new(file))))
}

// --- Public API ---

/// Builds the level filter: `RUST_LOG` when set, otherwise `fallback`.
///
/// # Errors
///
/// Fails when `fallback` is not a valid filter directive.
pub fn make_filter(fallback: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(fallback)
            .with_context(|| format!("invalid log level '{fallback}'")),
    }
}

/// Initializes logging. Call once at startup.
///
/// - Stdout: colored when attached to a terminal, plain when piped, and
///   omitted entirely when `config.stdout` is false.
/// - File: appended to when `config.file` is set.
/// - Level: `RUST_LOG` if set, otherwise `config.level`.
///
/// # Errors
///
/// Fails on an invalid level or an unopenable log file. A subscriber that is
/// already installed is left in place.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = make_filter(&config.level)?;

    let stdout_layer = config.stdout.then(|| {
        tracing_subscriber::fmt::layer()
            .event_format(LocalFmt)
            .with_ansi(io::stdout().is_terminal())
    });

    let file_layer = match &config.file {
        Some(path) => Some(
            tracing_subscriber::fmt::layer()
                .event_format(LocalFmt)
                .with_ansi(false)
                .with_writer(open_log_file(path)?),
        ),
        None => None,
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn workspace_targets_are_shortened() {
        assert_eq!(
            short_target("quote_core::wizard::controller"),
            "core/wizard::controller"
        );
        assert_eq!(short_target("quote_cli"), "cli");
        assert_eq!(short_target("csv::reader"), "csv::reader");
    }

    #[test]
    fn invalid_fallback_level_is_rejected() {
        // only meaningful when RUST_LOG does not override the fallback
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }

        assert!(make_filter("quote=loud").is_err());
        assert!(make_filter("debug").is_ok());
    }

    #[test]
    fn missing_log_directory_is_reported() {
        let config = LoggingConfig {
            file: Some("/nonexistent/dir/quote.log".into()),
            ..LoggingConfig::default()
        };

        let err = init_logging(&config).unwrap_err();

        assert!(err.to_string().contains("cannot open log file"));
    }
}
