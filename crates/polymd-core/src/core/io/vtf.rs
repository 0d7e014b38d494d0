use super::TrajectoryError;
use super::traits::{Frame, TrajectorySink};
use crate::core::geometry::SimulationBox;
use crate::core::models::snapshot::Snapshot;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes trajectories in the VTF format read by VMD.
///
/// The structure block lists the unit cell (periodic boxes only), one `atom` line per
/// particle and one `bond` line per bond. Every frame is an indexed `timestep` block with
/// unfolded coordinates.
pub struct VtfWriter<W: Write> {
    writer: W,
}

impl VtfWriter<BufWriter<File>> {
    pub fn create(path: &Path) -> Result<Self, TrajectoryError> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> VtfWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TrajectorySink for VtfWriter<W> {
    fn write_structure(
        &mut self,
        snapshot: &Snapshot,
        sim_box: &SimulationBox,
    ) -> Result<(), TrajectoryError> {
        if let Some(lengths) = sim_box.lengths() {
            writeln!(
                self.writer,
                "unitcell {} {} {}",
                lengths.x, lengths.y, lengths.z
            )?;
        }
        for (id, _) in &snapshot.particles {
            writeln!(self.writer, "atom {} radius 1 name 0 type 0", id)?;
        }
        for (a, b) in &snapshot.bonds {
            writeln!(self.writer, "bond {}:{}", a, b)?;
        }
        Ok(())
    }

    fn write_frame(&mut self, frame: &Frame) -> Result<(), TrajectoryError> {
        writeln!(self.writer)?;
        writeln!(self.writer, "timestep indexed")?;
        for (id, pos) in &frame.snapshot.particles {
            writeln!(self.writer, "{} {} {} {}", id, pos.x, pos.y, pos.z)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), TrajectoryError> {
        self.writer.flush()?;
        Ok(())
    }
}
