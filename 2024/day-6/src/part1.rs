use miette::*;

use crate::patrol::{Lab, Patrol};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let lab: Lab = input.parse()?;

    match lab.patrol(None) {
        Patrol::Exited { visited } => Ok(visited.to_string()),
        Patrol::Looped => Err(miette!("Guard never leaves the mapped area")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...";

    #[test]
    fn patrol_is_deterministic() -> Result<()> {
        let first = process(INPUT)?;
        let second = process(INPUT)?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn it_works() -> Result<()> {
        assert_eq!("41", process(INPUT)?);
        Ok(())
    }
}
