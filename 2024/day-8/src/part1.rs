use std::collections::{HashMap, HashSet};
use std::str::FromStr;

use glam::IVec2;
use itertools::Itertools;
use miette::*;

/// Antenna positions grouped by frequency, plus the map bounds.
#[derive(Debug)]
pub(crate) struct City {
    size: IVec2,
    pub(crate) antennas: HashMap<char, Vec<IVec2>>,
}

impl FromStr for City {
    type Err = Report;

    fn from_str(input: &str) -> Result<Self> {
        let rows: Vec<&str> = input.lines().filter(|line| !line.is_empty()).collect();
        let width = rows.first().map(|row| row.chars().count()).unwrap_or(0);
        if rows.iter().any(|row| row.chars().count() != width) {
            return Err(miette!("City map rows must all have the same length"));
        }

        let antennas = rows
            .iter()
            .enumerate()
            .flat_map(|(y, row)| {
                row.chars()
                    .enumerate()
                    .filter(|&(_, c)| c != '.')
                    .map(move |(x, c)| (c, IVec2::new(x as i32, y as i32)))
            })
            .into_group_map();

        Ok(Self {
            size: IVec2::new(width as i32, rows.len() as i32),
            antennas,
        })
    }
}

impl City {
    pub(crate) fn contains(&self, pos: IVec2) -> bool {
        pos.cmpge(IVec2::ZERO).all() && pos.cmplt(self.size).all()
    }

    /// Every unordered pair of same-frequency antennas.
    pub(crate) fn pairs(&self) -> impl Iterator<Item = (IVec2, IVec2)> + '_ {
        self.antennas
            .values()
            .flat_map(|positions| positions.iter().copied().tuple_combinations())
    }
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let city: City = input.parse()?;

    let antinodes: HashSet<IVec2> = city
        .pairs()
        .flat_map(|(a, b)| {
            let delta = a - b;
            [a + delta, b - delta]
        })
        .filter(|&pos| city.contains(pos))
        .collect();

    Ok(antinodes.len().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_antennas() -> Result<()> {
        let input = "..........
..........
..........
....a.....
..........
.....a....
..........
..........
..........
..........";
        assert_eq!("2", process(input)?);
        Ok(())
    }

    #[test]
    fn it_works() -> Result<()> {
        let input = "............
........0...
.....0......
.......0....
....0.......
......A.....
............
............
........A...
.........A..
............
............";
        assert_eq!("14", process(input)?);
        Ok(())
    }
}
