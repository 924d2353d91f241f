use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use glam::DVec2;
use tracing::{debug, info};

use crate::error::{FormatError, Result};
use crate::FrameSet;

/// Number of lines at the start of a trajectory file that carry no particle data.
pub const HEADER_LINES: usize = 2;
/// Number of lines at the end of a trajectory file that carry no particle data.
pub const FOOTER_LINES: usize = 1;

/// Minimum number of whitespace-delimited fields in a data record.
const NFIELDS: usize = 5;
const FIELD_STEP: usize = 0;
const FIELD_X: usize = 3;
const FIELD_Y: usize = 4;

/// A single data record: one particle position at one time step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub step: i64,
    pub position: DVec2,
}

/// Parse a single data record.
///
/// Only the time step (field 0) and the position (fields 3 and 4) are read, any other fields are
/// skipped without being looked at. The `line` number is only used for error reporting.
pub fn parse_record(record: &str, line: usize) -> std::result::Result<Record, FormatError> {
    let fields: Vec<&str> = record.split_whitespace().collect();
    if fields.len() < NFIELDS {
        return Err(FormatError::MissingFields {
            line,
            expected: NFIELDS,
            found: fields.len(),
        });
    }

    let step = fields[FIELD_STEP]
        .parse()
        .map_err(|source| FormatError::TimeStep {
            line,
            value: fields[FIELD_STEP].to_string(),
            source,
        })?;
    let coord = |idx: usize| {
        fields[idx]
            .parse::<f64>()
            .map_err(|source| FormatError::Coordinate {
                line,
                value: fields[idx].to_string(),
                source,
            })
    };
    let position = DVec2::new(coord(FIELD_X)?, coord(FIELD_Y)?);

    Ok(Record { step, position })
}

/// Reads a whole trajectory text file and groups its records into a [`FrameSet`].
#[derive(Debug)]
pub struct TrajectoryReader<R> {
    pub file: R,
}

impl TrajectoryReader<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> TrajectoryReader<R> {
    pub fn new(reader: R) -> Self {
        Self { file: reader }
    }

    /// Read all lines, skip the header and footer, and group the remaining records by step.
    ///
    /// # Errors
    ///
    /// Fails on any reader error, when the file is shorter than the header and footer together,
    /// or when any data record is malformed. Nothing is returned for the records that did parse.
    pub fn read_frame_set(&mut self) -> Result<FrameSet> {
        let lines = (&mut self.file)
            .lines()
            .collect::<std::io::Result<Vec<String>>>()?;

        let expected = HEADER_LINES + FOOTER_LINES;
        if lines.len() < expected {
            return Err(FormatError::TooShort {
                expected,
                found: lines.len(),
            }
            .into());
        }
        let records = &lines[HEADER_LINES..lines.len() - FOOTER_LINES];
        debug!(nlines = lines.len(), nrecords = records.len(), "read trajectory");

        let frames = FrameSet::from_lines(records.iter().map(String::as_str))?;

        let missing = frames.n_missing();
        if missing > 0 {
            info!(
                missing,
                first = ?frames.gaps().next(),
                "time steps are not contiguous, missing steps are skipped"
            );
        }
        info!(
            nframes = frames.len(),
            npoints = frames.n_points(),
            "grouped trajectory"
        );

        Ok(frames)
    }
}
