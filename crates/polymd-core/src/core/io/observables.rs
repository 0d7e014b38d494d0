use super::TrajectoryError;
use super::traits::{Frame, TrajectorySink};
use crate::core::geometry::SimulationBox;
use crate::core::models::snapshot::Snapshot;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Scalar state of the system at one recorded frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Observables {
    pub step: u64,
    pub time: f64,
    /// `None` when the system has fewer than two particles.
    pub min_distance: Option<f64>,
    pub kinetic_energy: f64,
    pub pair_energy: f64,
    pub bond_energy: f64,
    pub total_energy: f64,
    pub temperature: f64,
    pub force_cap: f64,
}

/// Writes one CSV row of [`Observables`] per frame. The header row is emitted with the
/// first frame.
pub struct ObservablesWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl ObservablesWriter<BufWriter<File>> {
    pub fn create(path: &Path) -> Result<Self, TrajectoryError> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> ObservablesWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
        }
    }

    pub fn into_inner(self) -> Result<W, TrajectoryError> {
        self.writer
            .into_inner()
            .map_err(|e| TrajectoryError::Io(e.into_error()))
    }
}

impl<W: Write> TrajectorySink for ObservablesWriter<W> {
    fn write_structure(&mut self, _: &Snapshot, _: &SimulationBox) -> Result<(), TrajectoryError> {
        Ok(())
    }

    fn write_frame(&mut self, frame: &Frame) -> Result<(), TrajectoryError> {
        self.writer.serialize(frame.observables)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), TrajectoryError> {
        self.writer.flush()?;
        Ok(())
    }
}
