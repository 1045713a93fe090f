use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use chrono::Utc;

use crate::domain::SampleId;
use crate::error::FetchError;

/// Append-mode download log. One line per terminal outcome, shaped
/// `<timestamp> <LEVEL> <message>` so runs can be audited after the fact.
pub struct DownloadLog {
    file: File,
}

impl DownloadLog {
    pub fn open(path: &Path) -> Result<Self, FetchError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|err| FetchError::LogWrite(err.to_string()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|err| FetchError::LogWrite(err.to_string()))?;
        Ok(Self { file })
    }

    pub fn success(&mut self, id: &SampleId, raw_url: &str) -> Result<(), FetchError> {
        self.line("INFO", &format!("SUCCESS\tsample_id={id}\traw_url={raw_url}"))
    }

    pub fn failure(&mut self, id: &SampleId, raw_url: &str, status: u16) -> Result<(), FetchError> {
        self.line(
            "ERROR",
            &format!("FAIL\tsample_id={id}\traw_url={raw_url}\tstatus_code={status}"),
        )
    }

    pub fn invalid_url(&mut self, id: &SampleId, url: &str) -> Result<(), FetchError> {
        self.line("ERROR", &format!("INVALID_URL\tsample_id={id}\turl={url}"))
    }

    fn line(&mut self, level: &str, message: &str) -> Result<(), FetchError> {
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S%.3f");
        writeln!(self.file, "{timestamp} {level} {message}")
            .map_err(|err| FetchError::LogWrite(err.to_string()))
    }
}
