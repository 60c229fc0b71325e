use std::str::FromStr;

use glam::IVec2;
use miette::*;

/// Heights 0-9 stored row-major; `None` marks impassable tiles (`.`).
#[derive(Debug)]
pub(crate) struct TopoMap {
    width: i32,
    height: i32,
    pub(crate) heights: Vec<Option<u8>>,
}

impl FromStr for TopoMap {
    type Err = Report;

    fn from_str(input: &str) -> Result<Self> {
        let rows: Vec<&str> = input.lines().filter(|line| !line.is_empty()).collect();
        let width = rows.first().map(|row| row.len()).unwrap_or(0);

        let mut heights = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(miette!("Row {y} has {} tiles, expected {width}", row.len()));
            }
            for c in row.chars() {
                heights.push(match c {
                    '.' => None,
                    _ => Some(
                        c.to_digit(10)
                            .ok_or_else(|| miette!("Invalid height {c:?} on row {y}"))?
                            as u8,
                    ),
                });
            }
        }

        Ok(Self {
            width: width as i32,
            height: rows.len() as i32,
            heights,
        })
    }
}

const STEPS: [IVec2; 4] = [IVec2::NEG_Y, IVec2::X, IVec2::Y, IVec2::NEG_X];

impl TopoMap {
    fn position(&self, idx: usize) -> IVec2 {
        IVec2::new(idx as i32 % self.width, idx as i32 / self.width)
    }

    fn index(&self, pos: IVec2) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 || pos.x >= self.width || pos.y >= self.height {
            return None;
        }
        Some((pos.y * self.width + pos.x) as usize)
    }

    /// Neighbouring tiles exactly one step higher than `idx`.
    pub(crate) fn uphill(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        let pos = self.position(idx);
        let next = self.heights[idx].map(|h| h + 1);
        STEPS
            .iter()
            .filter_map(move |&step| self.index(pos + step))
            .filter(move |&n| next.is_some() && self.heights[n] == next)
    }

    pub(crate) fn trailheads(&self) -> impl Iterator<Item = usize> + '_ {
        self.heights
            .iter()
            .enumerate()
            .filter(|&(_, &h)| h == Some(0))
            .map(|(idx, _)| idx)
    }

    /// Number of distinct height-9 tiles reachable from `start`.
    fn score(&self, start: usize) -> usize {
        let mut seen = vec![false; self.heights.len()];
        let mut stack = vec![start];
        let mut peaks = 0;
        seen[start] = true;

        while let Some(idx) = stack.pop() {
            if self.heights[idx] == Some(9) {
                peaks += 1;
                continue;
            }
            for n in self.uphill(idx) {
                if !seen[n] {
                    seen[n] = true;
                    stack.push(n);
                }
            }
        }
        peaks
    }
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let map: TopoMap = input.parse()?;

    let total: usize = map.trailheads().map(|head| map.score(head)).sum();

    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forked_trail_scores_two() -> Result<()> {
        let input = "...0...
...1...
...2...
6543456
7.....7
8.....8
9.....9";
        assert_eq!("2", process(input)?);
        Ok(())
    }

    #[test]
    fn it_works() -> Result<()> {
        let input = "89010123
78121874
87430965
96549874
45678903
32019012
01329801
10456732";
        assert_eq!("36", process(input)?);
        Ok(())
    }
}
