use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::bandit::{ArmStats, Choice, DecideConfig, Decision};
use crate::cards::Card;
use crate::context::{DecisionContext, Street};

/// One decision as written to the JSONL decision log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    /// Unique identifier for this decision (format: YYYYMMDD-NNNNNN)
    pub decision_id: String,
    /// Seed of the generator that drove the trials
    pub seed: u64,
    pub hole: Vec<Card>,
    pub board: Vec<Card>,
    pub street: Street,
    pub choice: Choice,
    pub stay: ArmStats,
    pub fold: ArmStats,
    pub trials: u64,
    pub time_budget_ms: u64,
    /// Timestamp when the decision was logged (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl DecisionRecord {
    pub fn new(
        decision_id: String,
        seed: u64,
        ctx: &DecisionContext,
        config: &DecideConfig,
        decision: &Decision,
    ) -> Self {
        Self {
            decision_id,
            seed,
            hole: ctx.hole().to_vec(),
            board: ctx.board().to_vec(),
            street: ctx.street(),
            choice: decision.choice,
            stay: decision.stay,
            fold: decision.fold,
            trials: decision.trials,
            time_budget_ms: config.time_budget.as_millis() as u64,
            ts: None,
        }
    }
}

pub fn format_decision_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

pub struct DecisionLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl DecisionLogger {
    /// Starts a fresh log, truncating any existing file.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        ensure_parent(path.as_ref())?;
        let f = File::create(path)?;
        Ok(Self::with_writer(f, 0))
    }

    /// Opens `path` for appending. Ids continue after the records already in
    /// the file so they stay unique across runs.
    pub fn append<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let path = path.as_ref();
        ensure_parent(path)?;
        let existing = if path.exists() {
            BufReader::new(File::open(path)?)
                .lines()
                .map_while(Result::ok)
                .filter(|l| !l.trim().is_empty())
                .count()
        } else {
            0
        };
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::with_writer(f, u32::try_from(existing).unwrap_or(u32::MAX)))
    }

    fn with_writer(f: File, seq: u32) -> Self {
        Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq,
        }
    }

    #[doc(hidden)]
    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq = self.seq.saturating_add(1);
        format_decision_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &DecisionRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}

fn ensure_parent(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)?;
        }
    }
    Ok(())
}
