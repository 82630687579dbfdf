use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use nalgebra::Vector2;
use tracing::warn;

use crate::error::RecorderError;
use crate::sim::observer::StepObserver;

/// Column header, `;`-delimited.
pub const HEADER: &str = "tick;pos_x;pos_y;vel_x;vel_y;angle";
/// Row terminator, the same `\r\n` Python's `csv.writer` emits by default.
pub const LINE_TERMINATOR: &str = "\r\n";

/// Records one row per engine step.
///
/// Owns the output sink and a monotonic tick counter starting at 0.
/// Columns: tick, pos_x, pos_y, vel_x, vel_y, angle, numeric values
/// rounded to 4 decimals. The sink is flushed by [`finish`](Self::finish)
/// and, failing that, on drop.
///
/// Each row is formatted in full and handed to the sink in one
/// `write_all`. A sink that accepts part of a row and then fails can still
/// hold a truncated last row; wrapping it in a `BufWriter` keeps rows whole
/// up to the buffer flush.
///
/// State is `f64`, so long episodes can differ in the fourth decimal from
/// records of a single-precision simulation of the same inputs.
#[derive(Debug)]
pub struct CsvRecorder<W: Write> {
    writer: Option<W>,
    tick: u64,
    error: Option<io::Error>,
}

impl CsvRecorder<BufWriter<File>> {
    /// Create (or truncate) the file at `path` and write the header.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, RecorderError> {
        let file = File::create(path)?;
        Self::new(BufWriter::new(file))
    }
}

impl<W: Write> CsvRecorder<W> {
    pub fn new(mut writer: W) -> Result<Self, RecorderError> {
        writer.write_all(HEADER.as_bytes())?;
        writer.write_all(LINE_TERMINATOR.as_bytes())?;
        Ok(Self { writer: Some(writer), tick: 0, error: None })
    }

    /// Number of rows written so far.
    pub fn ticks(&self) -> u64 {
        self.tick
    }

    /// Write a single row. Fails if an earlier write already failed.
    pub fn record(
        &mut self,
        position: &Vector2<f64>,
        velocity: &Vector2<f64>,
        angle: f64,
    ) -> Result<(), RecorderError> {
        if let Some(e) = &self.error {
            return Err(io::Error::new(e.kind(), e.to_string()).into());
        }
        let Some(writer) = self.writer.as_mut() else {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "recorder already finished").into());
        };
        let row = format!(
            "{};{:.4};{:.4};{:.4};{:.4};{:.4}{}",
            self.tick,
            position.x, position.y,
            velocity.x, velocity.y,
            angle,
            LINE_TERMINATOR,
        );
        writer.write_all(row.as_bytes())?;
        self.tick += 1;
        Ok(())
    }

    /// Flush and return the sink, surfacing the first error seen while
    /// recording.
    pub fn finish(mut self) -> Result<W, RecorderError> {
        if let Some(e) = self.error.take() {
            return Err(e.into());
        }
        let mut writer = self
            .writer
            .take()
            .ok_or_else(|| io::Error::new(io::ErrorKind::BrokenPipe, "recorder already finished"))?;
        writer.flush()?;
        Ok(writer)
    }
}

impl<W: Write> StepObserver for CsvRecorder<W> {
    fn on_step(&mut self, position: &Vector2<f64>, velocity: &Vector2<f64>, angle: f64) {
        if self.error.is_some() {
            return;
        }
        if let Err(RecorderError::Io(e)) = self.record(position, velocity, angle) {
            warn!(tick = self.tick, error = %e, "step recording failed; further steps are dropped");
            self.error = Some(e);
        }
    }
}

impl<W: Write> Drop for CsvRecorder<W> {
    fn drop(&mut self) {
        if let Some(writer) = self.writer.as_mut() {
            if let Err(e) = writer.flush() {
                warn!(error = %e, "failed to flush step records");
            }
        }
    }
}
