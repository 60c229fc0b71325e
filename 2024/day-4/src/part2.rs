use glam::IVec2;
use miette::*;

use crate::part1::WordSearch;

/// Both diagonals through an `A` must read `MAS` in either direction.
fn is_x_mas(grid: &WordSearch, center: IVec2) -> bool {
    let diagonal = |a: IVec2, b: IVec2| {
        matches!(
            (grid.get(center + a), grid.get(center + b)),
            (Some(b'M'), Some(b'S')) | (Some(b'S'), Some(b'M'))
        )
    };

    diagonal(IVec2::new(-1, -1), IVec2::new(1, 1))
        && diagonal(IVec2::new(1, -1), IVec2::new(-1, 1))
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let grid: WordSearch = input.parse()?;

    let count = grid
        .positions()
        .filter(|&pos| grid.get(pos) == Some(b'A') && is_x_mas(&grid, pos))
        .count();

    Ok(count.to_string())
}
