use crate::graph::StateId;
use crate::matrix::Matrix;
use std::io;
use std::io::Write;

/// Export a simulated trajectory as CSV, keyed by step number.
///
/// Each element of `trajectory` is one `1×N` distribution row; `tracked`
/// selects which state columns appear in the file. The first data row is
/// step 1 (the distribution after one transition).
///
/// # Panics
///
/// Panics if a tracked state lies outside a distribution row; the caller
/// composes both from the same chain, so a mismatch is a programming error.
pub fn write_trajectory(
    out: &mut impl Write,
    tracked: &[StateId],
    trajectory: &[Matrix],
) -> io::Result<()> {
    write!(out, "Step")?;
    for state in tracked {
        write!(out, ",State{state}")?;
    }
    writeln!(out)?;

    for (step, distribution) in trajectory.iter().enumerate() {
        write!(out, "{}", step + 1)?;
        for state in tracked {
            write!(out, ",{:.6}", distribution.get(0, state.to_index()))?;
        }
        writeln!(out)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trajectory_rows_are_keyed_by_step() {
        let mut first = Matrix::zeros(1, 3);
        first.set(0, 1, 1.0);
        let mut second = Matrix::zeros(1, 3);
        second.set(0, 2, 0.5);
        second.set(0, 0, 0.5);

        let tracked = [StateId::new(1), StateId::new(3)];
        let mut out = Vec::new();
        write_trajectory(&mut out, &tracked, &[first, second]).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Step,State1,State3");
        assert_eq!(lines[1], "1,0.000000,0.000000");
        assert_eq!(lines[2], "2,0.500000,0.500000");
        assert_eq!(lines.len(), 3);
    }
}
