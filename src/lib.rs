//! Group particle positions from a simulation dump by time step, and animate them.
//!
//! The input is a whitespace-delimited text file with two header lines, one footer line, and in
//! between one record per particle per time step:
//!
//! ```text
//! <step> <ignored> <ignored> <x> <y> [<ignored>...]
//! ```
use std::collections::BTreeMap;
use std::path::Path;

use glam::DVec2;

pub use crate::error::{Error, FormatError, Result};
pub use crate::reader::{parse_record, Record, TrajectoryReader, FOOTER_LINES, HEADER_LINES};
pub use crate::render::{animate, render_gif, Animation, GifAnimation, RenderConfig};

pub mod error;
pub mod reader;
pub mod render;

/// The positions of all particles observed at a single time step.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Frame {
    pub step: i64,
    /// Positions in the order in which they appear in the input.
    pub positions: Vec<DVec2>,
}

impl Frame {
    pub fn new(step: i64) -> Self {
        Self {
            step,
            positions: Vec::new(),
        }
    }

    pub fn natoms(&self) -> usize {
        self.positions.len()
    }

    pub fn coords(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.positions.iter().map(|p| (p.x, p.y))
    }
}

/// All [`Frame`]s in a trajectory, keyed by their time step.
///
/// Iteration always happens in ascending step order, regardless of the order in which the steps
/// appeared in the input.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FrameSet {
    frames: BTreeMap<i64, Frame>,
}

impl FrameSet {
    /// Read and group all records of the trajectory file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        TrajectoryReader::open(path)?.read_frame_set()
    }

    /// Group the data records in `lines`.
    ///
    /// The lines are expected to have been stripped of their header and footer already. Line
    /// numbers in errors are reported as if the header were still there.
    pub fn from_lines<'l>(lines: impl IntoIterator<Item = &'l str>) -> Result<Self> {
        let mut frames = Self::default();
        for (idx, line) in lines.into_iter().enumerate() {
            let record = parse_record(line, idx + HEADER_LINES + 1)?;
            frames.push(record);
        }
        Ok(frames)
    }

    /// Append the position of a [`Record`] to the frame of its step.
    pub(crate) fn push(&mut self, record: Record) {
        self.frames
            .entry(record.step)
            .or_insert_with(|| Frame::new(record.step))
            .positions
            .push(record.position);
    }

    /// The number of distinct time steps.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The total number of positions over all frames.
    pub fn n_points(&self) -> usize {
        self.frames.values().map(Frame::natoms).sum()
    }

    pub fn get(&self, step: i64) -> Option<&Frame> {
        self.frames.get(&step)
    }

    /// The observed steps, in ascending order.
    pub fn steps(&self) -> impl Iterator<Item = i64> + '_ {
        self.frames.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Frame> + '_ {
        self.frames.values()
    }

    /// Steps between the first and last observed step that have no records, in ascending order.
    ///
    /// The steps are produced lazily, so a huge gap costs nothing until it is walked.
    pub fn gaps(&self) -> impl Iterator<Item = i64> + '_ {
        self.steps()
            .zip(self.steps().skip(1))
            .flat_map(|(prev, step)| prev + 1..step)
    }

    /// The number of steps [`FrameSet::gaps`] would produce.
    pub fn n_missing(&self) -> u64 {
        self.steps()
            .zip(self.steps().skip(1))
            .map(|(prev, step)| step.abs_diff(prev) - 1)
            .fold(0, u64::saturating_add)
    }
}

impl<'f> IntoIterator for &'f FrameSet {
    type Item = &'f Frame;
    type IntoIter = std::collections::btree_map::Values<'f, i64, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.values()
    }
}
