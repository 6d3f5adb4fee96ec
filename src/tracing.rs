//! Log output: stderr always, plus an optional file attached once the CLI has
//! been parsed (the subscriber has to exist before that, so dotenv loading and
//! argument parsing can already log).

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, OnceLock};

type LogFile = Arc<Mutex<Option<File>>>;

#[derive(Clone)]
struct TeeWriter {
    file: LogFile,
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for TeeWriter {
    type Writer = TeeWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = io::stderr().write(buf)?;
        if let Ok(mut guard) = self.file.lock() {
            if let Some(file) = guard.as_mut() {
                let _ = file.write_all(&buf[..written]);
            }
        }
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        if let Ok(mut guard) = self.file.lock() {
            if let Some(file) = guard.as_mut() {
                let _ = file.flush();
            }
        }
        Ok(())
    }
}

static LOG_FILE: OnceLock<LogFile> = OnceLock::new();

/// Install the global subscriber. `RUST_LOG` overrides the default `info` level.
pub fn init() {
    let _ = tracing_log::LogTracer::init();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file = LOG_FILE.get_or_init(|| Arc::new(Mutex::new(None))).clone();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(TeeWriter { file })
        .try_init();
}

/// Start (or stop, with `None`) copying log lines to a file. Parent directories
/// are created as needed.
pub fn set_log_file(path: Option<&Path>) -> io::Result<()> {
    let file = match path {
        Some(path) => Some(open_append(path)?),
        None => None,
    };
    if let Some(slot) = LOG_FILE.get() {
        if let Ok(mut guard) = slot.lock() {
            *guard = file;
        }
    }
    Ok(())
}

fn open_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
