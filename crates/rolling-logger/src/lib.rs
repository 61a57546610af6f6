//! Rolling Logger
//!
//! File logger for Tauri apps. Output goes to `<app>.log` in the log
//! directory; when it outgrows `max_bytes` it is shifted to `<app>.1.log`,
//! `<app>.2.log`, ... and the oldest file beyond `max_files` is dropped.
//! The newest lines are also kept in a circular buffer for in-app viewing.
//!
//! `log` records are bridged into the same `tracing` subscriber. On Android
//! every event is mirrored to logcat as well.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("log file io: {0}")]
    Io(#[from] io::Error),
    #[error("logger already initialized")]
    AlreadyInitialized,
    #[error("logger not initialized")]
    NotInitialized,
    #[error("failed to install subscriber: {0}")]
    Subscriber(String),
}

/// Size and retention limits
#[derive(Clone, Copy, Debug)]
pub struct RollingOptions {
    /// Rotate once the current file would exceed this size
    pub max_bytes: u64,
    /// Total files kept, current one included
    pub max_files: usize,
    /// Lines kept in memory
    pub buffer_lines: usize,
}

impl Default for RollingOptions {
    fn default() -> Self {
        Self {
            max_bytes: 1024 * 1024,
            max_files: 5,
            buffer_lines: 500,
        }
    }
}

struct Inner {
    dir: PathBuf,
    stem: String,
    options: RollingOptions,
    file: File,
    written: u64,
    recent: VecDeque<String>,
    partial: Vec<u8>,
}

impl Inner {
    fn path_for(&self, index: usize) -> PathBuf {
        if index == 0 {
            self.dir.join(format!("{}.log", self.stem))
        } else {
            self.dir.join(format!("{}.{}.log", self.stem, index))
        }
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        let keep = self.options.max_files.max(1);
        let oldest = self.path_for(keep - 1);
        if keep > 1 && oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (0..keep.saturating_sub(1)).rev() {
            let from = self.path_for(index);
            if from.exists() {
                fs::rename(&from, self.path_for(index + 1))?;
            }
        }
        // With a single file allowed the current one is simply truncated
        self.file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(self.path_for(0))?;
        self.written = 0;
        Ok(())
    }

    // Bytes are held until a full line arrives so split characters decode whole
    fn remember(&mut self, bytes: &[u8]) {
        self.partial.extend_from_slice(bytes);
        while let Some(pos) = self.partial.iter().position(|&b| b == b'\n') {
            let raw: Vec<u8> = self.partial.drain(..=pos).collect();
            if self.options.buffer_lines == 0 {
                continue;
            }
            let line = String::from_utf8_lossy(&raw)
                .trim_end_matches(['\n', '\r'])
                .to_string();
            if self.recent.len() == self.options.buffer_lines {
                self.recent.pop_front();
            }
            self.recent.push_back(line);
        }
    }

    fn write_bytes(&mut self, buf: &[u8]) -> io::Result<()> {
        let incoming = buf.len() as u64;
        if self.written > 0 && self.written + incoming > self.options.max_bytes {
            self.rotate()?;
        }
        self.file.write_all(buf)?;
        self.written += incoming;
        self.remember(buf);
        Ok(())
    }
}

/// Shared handle to a rolling log file
#[derive(Clone)]
pub struct RollingFile {
    inner: Arc<Mutex<Inner>>,
}

impl RollingFile {
    /// Open (or continue) `<stem>.log` inside `dir`, creating the directory
    pub fn open(dir: impl Into<PathBuf>, stem: &str, options: RollingOptions) -> Result<Self, LoggerError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        let path = dir.join(format!("{}.log", stem));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();
        Ok(Self {
            inner: Arc::new(Mutex::new(Inner {
                dir,
                stem: stem.to_string(),
                options,
                file,
                written,
                recent: VecDeque::with_capacity(options.buffer_lines),
                partial: Vec::new(),
            })),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panic mid-write leaves nothing worth discarding the log over
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Append one line
    pub fn write_line(&self, line: &str) -> Result<(), LoggerError> {
        let mut inner = self.lock();
        inner.write_bytes(format!("{}\n", line).as_bytes())?;
        Ok(())
    }

    /// Newest lines, oldest first
    pub fn recent_lines(&self) -> Vec<String> {
        self.lock().recent.iter().cloned().collect()
    }

    /// Path of the file currently written to
    pub fn current_path(&self) -> PathBuf {
        self.lock().path_for(0)
    }

    pub fn dir(&self) -> PathBuf {
        self.lock().dir.clone()
    }
}

/// `io::Write` view used by the subscriber
pub struct RollingWriter {
    file: RollingFile,
}

impl Write for RollingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.lock().write_bytes(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.lock().file.flush()
    }
}

impl<'a> MakeWriter<'a> for RollingFile {
    type Writer = RollingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        RollingWriter { file: self.clone() }
    }
}

/// Local wall-clock timestamps
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Mirrors events into a `log::Log` sink (logcat on Android)
pub struct LogForward<L> {
    sink: L,
}

impl<L: log::Log> LogForward<L> {
    pub fn new(sink: L) -> Self {
        Self { sink }
    }
}

#[derive(Default)]
struct EventText {
    message: String,
    fields: String,
    log_target: Option<String>,
}

impl Visit for EventText {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message = value.to_string(),
            "log.target" => self.log_target = Some(value.to_string()),
            _ => self.record_debug(field, &value),
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let name = field.name();
        if name == "message" {
            self.message = format!("{:?}", value);
        } else if !name.starts_with("log.") {
            self.fields.push_str(&format!(" {}={:?}", name, value));
        }
    }
}

fn to_log_level(level: &tracing::Level) -> log::Level {
    match *level {
        tracing::Level::ERROR => log::Level::Error,
        tracing::Level::WARN => log::Level::Warn,
        tracing::Level::INFO => log::Level::Info,
        tracing::Level::DEBUG => log::Level::Debug,
        tracing::Level::TRACE => log::Level::Trace,
    }
}

impl<S: Subscriber, L: log::Log + 'static> Layer<S> for LogForward<L> {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        let mut text = EventText::default();
        event.record(&mut text);
        // Bridged `log` records carry their real target as a field
        let target = text.log_target.as_deref().unwrap_or(meta.target());
        self.sink.log(
            &log::Record::builder()
                .level(to_log_level(meta.level()))
                .target(target)
                .args(format_args!("{}{}", text.message, text.fields))
                .build(),
        );
    }
}

static LOGGER: OnceLock<RollingFile> = OnceLock::new();

/// Install the global subscriber writing to `<log_dir>/<app_name>.log`
pub fn init_logger(log_dir: impl AsRef<Path>, app_name: &str) -> Result<(), LoggerError> {
    if LOGGER.get().is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }
    let file = RollingFile::open(log_dir.as_ref(), app_name, RollingOptions::default())?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file.clone())
        .with_ansi(false)
        .with_timer(LocalTime);
    let subscriber = tracing_subscriber::registry()
        .with(LevelFilter::INFO)
        .with(file_layer);

    #[cfg(target_os = "android")]
    let subscriber = subscriber.with(LogForward::new(android_logger::AndroidLogger::new(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Info)
            .with_tag(app_name),
    )));

    // Also installs the `log` -> `tracing` bridge
    subscriber
        .try_init()
        .map_err(|e| LoggerError::Subscriber(e.to_string()))?;

    LOGGER.set(file).map_err(|_| LoggerError::AlreadyInitialized)?;
    tracing::info!(app = app_name, "logger started");
    Ok(())
}

fn ensure_init() -> Result<(), LoggerError> {
    LOGGER.get().map(|_| ()).ok_or(LoggerError::NotInitialized)
}

pub fn info(msg: &str) -> Result<(), LoggerError> {
    ensure_init()?;
    tracing::info!("{}", msg);
    Ok(())
}

pub fn warn(msg: &str) -> Result<(), LoggerError> {
    ensure_init()?;
    tracing::warn!("{}", msg);
    Ok(())
}

pub fn error(msg: &str) -> Result<(), LoggerError> {
    ensure_init()?;
    tracing::error!("{}", msg);
    Ok(())
}

/// Newest buffered lines of the global logger
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(RollingFile::recent_lines).unwrap_or_default()
}
