use std::collections::HashSet;

use serde::Serialize;

use crate::domain::{Outcome, SampleId};
use crate::error::FetchError;
use crate::github::RawContentClient;
use crate::journal::DownloadLog;
use crate::manifest::SampleRow;
use crate::resolver::UrlResolver;
use crate::store::OutputStore;

#[derive(Debug, Clone)]
pub struct ProgressEvent {
    pub message: String,
}

pub trait ProgressSink {
    fn event(&self, event: ProgressEvent);
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub rows: Vec<RowReport>,
    pub counts: RunCounts,
}

#[derive(Debug, Clone, Serialize)]
pub struct RowReport {
    pub sample_id: String,
    pub outcome: Outcome,
    pub raw_url: Option<String>,
    pub output_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RunCounts {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub invalid_url: usize,
    pub skipped: usize,
}

impl RunCounts {
    fn record(&mut self, outcome: &Outcome) {
        self.total += 1;
        match outcome {
            Outcome::Success => self.succeeded += 1,
            Outcome::Fail { .. } => self.failed += 1,
            Outcome::InvalidUrl => self.invalid_url += 1,
            Outcome::Skipped => self.skipped += 1,
        }
    }
}

pub struct App<C: RawContentClient> {
    store: OutputStore,
    client: C,
    resolver: UrlResolver,
}

impl<C: RawContentClient> App<C> {
    pub fn new(store: OutputStore, client: C) -> Self {
        Self {
            store,
            client,
            resolver: UrlResolver::new(),
        }
    }

    /// Drives one run over the manifest rows, strictly in row order.
    ///
    /// A sample id is attempted at most once per run; later rows bearing
    /// the same id are skipped without a fetch. The seen set starts empty
    /// every run and the output directory is never consulted, so re-runs
    /// re-download and overwrite. Transport-level faults abort the run.
    pub fn run(
        &self,
        rows: &[SampleRow],
        log: &mut DownloadLog,
        sink: &dyn ProgressSink,
    ) -> Result<RunReport, FetchError> {
        self.store.ensure_root()?;

        let mut seen = HashSet::new();
        let mut reports = Vec::with_capacity(rows.len());
        let mut counts = RunCounts::default();

        for row in rows {
            let id: SampleId = row.sample_id.parse()?;
            if !seen.insert(id.clone()) {
                tracing::debug!(sample_id = %id, "already processed, skipping");
                let report = RowReport {
                    sample_id: id.as_str().to_string(),
                    outcome: Outcome::Skipped,
                    raw_url: None,
                    output_path: None,
                };
                counts.record(&report.outcome);
                reports.push(report);
                continue;
            }

            let report = self.process_row(&id, &row.link, log, sink)?;
            counts.record(&report.outcome);
            reports.push(report);
        }

        Ok(RunReport {
            rows: reports,
            counts,
        })
    }

    fn process_row(
        &self,
        id: &SampleId,
        link: &str,
        log: &mut DownloadLog,
        sink: &dyn ProgressSink,
    ) -> Result<RowReport, FetchError> {
        let Some(blob) = self.resolver.resolve(link) else {
            sink.event(ProgressEvent {
                message: format!("invalid URL for sample {id}: {link}"),
            });
            log.invalid_url(id, link)?;
            return Ok(RowReport {
                sample_id: id.as_str().to_string(),
                outcome: Outcome::InvalidUrl,
                raw_url: None,
                output_path: None,
            });
        };

        let raw_url = blob.raw_url();
        let response = self.client.fetch_raw(&raw_url)?;

        if response.is_success() {
            let path = self.store.write_sample(id, &response.body)?;
            sink.event(ProgressEvent {
                message: format!("saved {path}"),
            });
            log.success(id, &raw_url)?;
            Ok(RowReport {
                sample_id: id.as_str().to_string(),
                outcome: Outcome::Success,
                raw_url: Some(raw_url),
                output_path: Some(path.to_string()),
            })
        } else {
            sink.event(ProgressEvent {
                message: format!(
                    "could not download sample {id}: status {}, raw_url: {raw_url}",
                    response.status
                ),
            });
            log.failure(id, &raw_url, response.status)?;
            Ok(RowReport {
                sample_id: id.as_str().to_string(),
                outcome: Outcome::Fail {
                    status: response.status,
                },
                raw_url: Some(raw_url),
                output_path: None,
            })
        }
    }
}
