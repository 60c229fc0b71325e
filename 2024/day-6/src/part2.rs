use indicatif::ParallelProgressIterator;
use miette::*;
use rayon::prelude::*;

use crate::patrol::{Lab, Patrol};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let lab: Lab = input.parse()?;
    let candidates = lab.candidates();

    tracing::debug!(candidates = candidates.len(), "simulating obstruction placements");

    // Each placement is an independent simulation over the shared, read-only map.
    let loops = candidates
        .par_iter()
        .progress_count(candidates.len() as u64)
        .filter(|&&idx| lab.patrol(Some(idx)) == Patrol::Looped)
        .count();

    Ok(loops.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_floor_has_no_loops() -> Result<()> {
        assert_eq!("0", process("...\n...\n.^.")?);
        Ok(())
    }

    #[test]
    fn it_works() -> Result<()> {
        let input = "....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...";
        assert_eq!("6", process(input)?);
        Ok(())
    }
}
