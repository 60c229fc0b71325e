use std::str::FromStr;

use glam::IVec2;
use miette::*;

/// A rectangular grid of letters stored row-major.
pub(crate) struct WordSearch {
    width: i32,
    height: i32,
    letters: Vec<u8>,
}

impl FromStr for WordSearch {
    type Err = Report;

    fn from_str(input: &str) -> Result<Self> {
        let rows: Vec<&[u8]> = input
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::as_bytes)
            .collect();

        let width = rows.first().map(|row| row.len()).unwrap_or(0);
        if rows.iter().any(|row| row.len() != width) {
            return Err(miette!("Word search rows must all have the same length"));
        }

        Ok(Self {
            width: width as i32,
            height: rows.len() as i32,
            letters: rows.concat(),
        })
    }
}

impl WordSearch {
    /// Returns the letter at `pos`, or `None` when it falls off the grid.
    pub(crate) fn get(&self, pos: IVec2) -> Option<u8> {
        if pos.x < 0 || pos.y < 0 || pos.x >= self.width || pos.y >= self.height {
            return None;
        }
        Some(self.letters[(pos.y * self.width + pos.x) as usize])
    }

    pub(crate) fn positions(&self) -> impl Iterator<Item = IVec2> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| IVec2::new(x, y)))
    }

    /// Whether `word` is spelled starting at `start` and stepping by `dir`.
    fn spells(&self, word: &[u8], start: IVec2, dir: IVec2) -> bool {
        word.iter()
            .enumerate()
            .all(|(i, &letter)| self.get(start + dir * i as i32) == Some(letter))
    }
}

const DIRECTIONS: [IVec2; 8] = [
    IVec2::new(-1, -1),
    IVec2::new(0, -1),
    IVec2::new(1, -1),
    IVec2::new(-1, 0),
    IVec2::new(1, 0),
    IVec2::new(-1, 1),
    IVec2::new(0, 1),
    IVec2::new(1, 1),
];

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let grid: WordSearch = input.parse()?;

    let count = grid
        .positions()
        .filter(|&pos| grid.get(pos) == Some(b'X'))
        .map(|pos| {
            DIRECTIONS
                .iter()
                .filter(|&&dir| grid.spells(b"XMAS", pos, dir))
                .count()
        })
        .sum::<usize>();

    Ok(count.to_string())
}
