use std::fs;

use camino::{Utf8Path, Utf8PathBuf};

use crate::domain::{SAMPLE_EXT, SampleId};
use crate::error::FetchError;

/// Flat output directory holding one `<sample_id>.java` file per
/// successfully downloaded sample.
#[derive(Debug, Clone)]
pub struct OutputStore {
    root: Utf8PathBuf,
}

impl OutputStore {
    pub fn new(root: Utf8PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub fn sample_path(&self, id: &SampleId) -> Utf8PathBuf {
        self.root.join(format!("{id}.{SAMPLE_EXT}"))
    }

    pub fn ensure_root(&self) -> Result<(), FetchError> {
        fs::create_dir_all(self.root.as_std_path())
            .map_err(|err| FetchError::Filesystem(err.to_string()))
    }

    /// Writes the sample body via a temp file and rename, so a crash never
    /// leaves a truncated `.java` file under its final name.
    pub fn write_sample(&self, id: &SampleId, body: &str) -> Result<Utf8PathBuf, FetchError> {
        self.ensure_root()?;
        let path = self.sample_path(id);
        let tmp_path = path.with_extension("tmp");
        fs::write(tmp_path.as_std_path(), body.as_bytes())
            .map_err(|err| FetchError::Filesystem(err.to_string()))?;
        fs::rename(tmp_path.as_std_path(), path.as_std_path())
            .map_err(|err| FetchError::Filesystem(err.to_string()))?;
        Ok(path)
    }
}
