use std::path::Path;

use trajplot::{Error, FormatError, FrameSet, TrajectoryReader, FOOTER_LINES, HEADER_LINES};

mod trajectories {
    pub const SMALL: &str = "tests/trajectories/small.txt";
    pub const EMPTY: &str = "tests/trajectories/empty.txt";
    pub const THREE_FIELDS: &str = "tests/trajectories/three_fields.txt";
    pub const GAP: &str = "tests/trajectories/bhs_gap.txt";
}

fn nlines(path: impl AsRef<Path>) -> std::io::Result<usize> {
    Ok(std::fs::read_to_string(path)?.lines().count())
}

mod group {
    use super::*;

    #[test]
    fn small() -> trajplot::Result<()> {
        let frames = FrameSet::open(trajectories::SMALL)?;
        assert_eq!(frames.steps().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(
            frames.get(0).unwrap().coords().collect::<Vec<_>>(),
            vec![(1.5, 2.5), (3.0, 4.0)]
        );
        assert_eq!(
            frames.get(1).unwrap().coords().collect::<Vec<_>>(),
            vec![(5.0, 6.0)]
        );
        Ok(())
    }

    #[test]
    fn empty() -> trajplot::Result<()> {
        let frames = FrameSet::open(trajectories::EMPTY)?;
        assert!(frames.is_empty());
        assert_eq!(frames.n_points(), 0);
        Ok(())
    }

    #[test]
    fn point_count() -> trajplot::Result<()> {
        for path in [trajectories::SMALL, trajectories::EMPTY, trajectories::GAP] {
            let frames = FrameSet::open(path)?;
            assert_eq!(
                frames.n_points(),
                nlines(path)? - HEADER_LINES - FOOTER_LINES,
                "every data line should end up as exactly one point ({path})"
            );
        }
        Ok(())
    }

    #[test]
    fn points_stay_with_their_step() -> trajplot::Result<()> {
        let frames = FrameSet::open(trajectories::GAP)?;
        let text = std::fs::read_to_string(trajectories::GAP)?;
        let lines: Vec<&str> = text.lines().collect();
        let records = &lines[HEADER_LINES..lines.len() - FOOTER_LINES];

        for frame in &frames {
            let expected: Vec<(f64, f64)> = records
                .iter()
                .map(|line| line.split_whitespace().collect::<Vec<_>>())
                .filter(|fields| fields[0].parse::<i64>().unwrap() == frame.step)
                .map(|fields| (fields[3].parse().unwrap(), fields[4].parse().unwrap()))
                .collect();
            assert_eq!(frame.coords().collect::<Vec<_>>(), expected);
        }
        Ok(())
    }

    #[test]
    fn idempotent() -> trajplot::Result<()> {
        let first = FrameSet::open(trajectories::GAP)?;
        let second = FrameSet::open(trajectories::GAP)?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn gaps_are_skipped() -> trajplot::Result<()> {
        let frames = FrameSet::open(trajectories::GAP)?;
        assert_eq!(frames.len(), 6);
        assert_eq!(frames.gaps().collect::<Vec<_>>(), vec![4]);
        assert_eq!(frames.n_missing(), 1);
        assert!(frames.iter().all(|frame| frame.natoms() == 8));
        Ok(())
    }
}

mod malformed {
    use super::*;

    #[test]
    fn three_fields() {
        match FrameSet::open(trajectories::THREE_FIELDS) {
            Err(Error::Format(FormatError::MissingFields { line, found, .. })) => {
                assert_eq!(line, 4);
                assert_eq!(found, 3);
            }
            other => panic!("expected a format error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file() {
        let result = FrameSet::open("tests/trajectories/does_not_exist.txt");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn header_only() {
        let mut reader = TrajectoryReader::new("only one line\n".as_bytes());
        assert!(matches!(
            reader.read_frame_set(),
            Err(Error::Format(FormatError::TooShort { found: 1, .. }))
        ));
    }
}
