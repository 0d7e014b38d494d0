use super::TrajectoryError;
use super::observables::Observables;
use crate::core::geometry::SimulationBox;
use crate::core::models::snapshot::Snapshot;

/// A single recorded point of a trajectory.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub snapshot: Snapshot,
    pub observables: Observables,
}

/// Destination for trajectory data.
///
/// The structure is written once before the first frame. Frames follow in simulation
/// order.
pub trait TrajectorySink {
    fn write_structure(
        &mut self,
        snapshot: &Snapshot,
        sim_box: &SimulationBox,
    ) -> Result<(), TrajectoryError>;

    fn write_frame(&mut self, frame: &Frame) -> Result<(), TrajectoryError>;

    fn flush(&mut self) -> Result<(), TrajectoryError> {
        Ok(())
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl TrajectorySink for NullSink {
    fn write_structure(&mut self, _: &Snapshot, _: &SimulationBox) -> Result<(), TrajectoryError> {
        Ok(())
    }

    fn write_frame(&mut self, _: &Frame) -> Result<(), TrajectoryError> {
        Ok(())
    }
}

impl<T: TrajectorySink + ?Sized> TrajectorySink for &mut T {
    fn write_structure(
        &mut self,
        snapshot: &Snapshot,
        sim_box: &SimulationBox,
    ) -> Result<(), TrajectoryError> {
        (**self).write_structure(snapshot, sim_box)
    }

    fn write_frame(&mut self, frame: &Frame) -> Result<(), TrajectoryError> {
        (**self).write_frame(frame)
    }

    fn flush(&mut self) -> Result<(), TrajectoryError> {
        (**self).flush()
    }
}

impl<T: TrajectorySink> TrajectorySink for Option<T> {
    fn write_structure(
        &mut self,
        snapshot: &Snapshot,
        sim_box: &SimulationBox,
    ) -> Result<(), TrajectoryError> {
        match self {
            Some(sink) => sink.write_structure(snapshot, sim_box),
            None => Ok(()),
        }
    }

    fn write_frame(&mut self, frame: &Frame) -> Result<(), TrajectoryError> {
        match self {
            Some(sink) => sink.write_frame(frame),
            None => Ok(()),
        }
    }

    fn flush(&mut self) -> Result<(), TrajectoryError> {
        match self {
            Some(sink) => sink.flush(),
            None => Ok(()),
        }
    }
}

/// Fans every call out to both sinks, first to second.
impl<A: TrajectorySink, B: TrajectorySink> TrajectorySink for (A, B) {
    fn write_structure(
        &mut self,
        snapshot: &Snapshot,
        sim_box: &SimulationBox,
    ) -> Result<(), TrajectoryError> {
        self.0.write_structure(snapshot, sim_box)?;
        self.1.write_structure(snapshot, sim_box)
    }

    fn write_frame(&mut self, frame: &Frame) -> Result<(), TrajectoryError> {
        self.0.write_frame(frame)?;
        self.1.write_frame(frame)
    }

    fn flush(&mut self) -> Result<(), TrajectoryError> {
        self.0.flush()?;
        self.1.flush()
    }
}
