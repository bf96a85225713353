//! Tracing setup for the `donate` binary.
//!
//! One global, reloadable level filter feeds two layers: stdout (which can
//! be muted at runtime) and a file layer that discards everything until a
//! log file is attached.

use std::{
    fs::File,
    io::{self, IsTerminal, Write},
    path::Path,
    sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError},
};

use anyhow::{Context, Result, anyhow};
use chrono::Local;
use tracing::{Event, Level, Subscriber, error};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{
        FmtContext, MakeWriter,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    reload,
    util::SubscriberInitExt,
};

const DEFAULT_DIRECTIVES: &str = "info,donate_ui=debug,donate_core=debug,donate_http=debug";

/// `<local time> <LEVEL> <file:line> <fields>`, coloured on a terminal.
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
        let paint = |code: &'static str| if ansi { code } else { "" };

        write!(
            writer,
            "{}{}{} ",
            paint("\x1b[2m"),
            Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z"),
            paint("\x1b[0m")
        )?;

        let colour = match *meta.level() {
            Level::ERROR => "\x1b[1;31m",
            Level::WARN => "\x1b[1;33m",
            Level::INFO => "\x1b[1;32m",
            Level::DEBUG => "\x1b[1;34m",
            Level::TRACE => "\x1b[1;35m",
        };
        write!(
            writer,
            "{}{:>5}{} ",
            paint(colour),
            meta.level(),
            paint("\x1b[0m")
        )?;

        if let (Some(file), Some(line)) = (meta.file(), meta.line()) {
            let file = file
                .rsplit_once("src/")
                .or_else(|| file.rsplit_once("src\\"))
                .map_or(file, |(_, rest)| rest);
            write!(
                writer,
                "{}{file}:{line}{} ",
                paint("\x1b[36m"),
                paint("\x1b[0m")
            )?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

type LogFile = Arc<Mutex<Option<File>>>;

/// Writer target that can be pointed at a file after initialization.
/// Writes are dropped while no file is attached.
#[derive(Clone)]
struct FileSlot(LogFile);

struct SlotWriter<'a>(MutexGuard<'a, Option<File>>);

impl Write for SlotWriter<'_> {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        match &mut *self.0 {
            Some(f) => f.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut *self.0 {
            Some(f) => f.flush(),
            None => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for FileSlot {
    type Writer = SlotWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        SlotWriter(self.0.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

type Reload = Box<dyn Fn(EnvFilter) -> Result<()> + Send + Sync>;

/// Runtime controls captured when the subscriber is installed.
struct LogHandles {
    level: Reload,
    stdout: Reload,
    file: LogFile,
}

static HANDLES: OnceLock<LogHandles> = OnceLock::new();

fn handles() -> Result<&'static LogHandles> {
    HANDLES
        .get()
        .ok_or_else(|| anyhow!("logging not yet initialized"))
}

fn reloader<S>(
    handle: reload::Handle<EnvFilter, S>,
    what: &'static str,
) -> Reload
where
    S: Subscriber + Send + Sync + 'static,
{
    Box::new(move |filter| {
        handle
            .reload(filter)
            .map_err(|e| anyhow!("{what} filter reload failed: {e}"))
    })
}

/// Installs the global subscriber. Call once at startup; later calls are
/// no-ops.
///
/// The level comes from `RUST_LOG` when set, otherwise
/// `info` with debug output for the donation crates.
pub fn init_default_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));
    let (level_filter, level_handle) = reload::Layer::new(filter);
    // "trace" lets everything the global filter admits through to stdout.
    let (stdout_gate, stdout_handle) = reload::Layer::new(EnvFilter::new("trace"));
    let file: LogFile = Arc::new(Mutex::new(None));

    let stdout_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalFmt)
        .with_ansi(io::stdout().is_terminal())
        .with_filter(stdout_gate);

    let file_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalFmt)
        .with_ansi(false)
        .with_writer(FileSlot(Arc::clone(&file)));

    if tracing_subscriber::registry()
        .with(level_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .is_ok()
    {
        let _ = HANDLES.set(LogHandles {
            level: reloader(level_handle, "level"),
            stdout: reloader(stdout_handle, "stdout"),
            file,
        });
    }
}

/// Replaces the active level filter. Accepts a bare level (`"warn"`) or
/// any `EnvFilter` directive string.
pub fn set_log_level(level: &str) -> Result<()> {
    let filter =
        EnvFilter::try_new(level).map_err(|e| anyhow!("invalid log level '{level}': {e}"))?;
    (handles()?.level)(filter)
}

/// Mutes or restores stdout logging; file logging is unaffected.
pub fn set_stdout_enabled(enabled: bool) -> Result<()> {
    let filter = EnvFilter::new(if enabled { "trace" } else { "off" });
    (handles()?.stdout)(filter)
}

/// Appends log records to `path` from now on, replacing any previous file.
/// The parent directory must exist.
pub fn enable_file_logging(path: &Path) -> Result<()> {
    let handles = handles()?;
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))?;
    *handles.file.lock().unwrap_or_else(PoisonError::into_inner) = Some(file);
    Ok(())
}

/// Logs the failure of a detached background task.
pub fn log_task_error(
    task_name: &'static str,
    result: Result<()>,
) {
    if let Err(error) = result {
        error!(task = task_name, error = %error, "background task failed");
    }
}
