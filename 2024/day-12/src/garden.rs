use std::str::FromStr;

use glam::IVec2;
use miette::*;

/// Orthogonal steps in clockwise order, so consecutive entries are adjacent
/// sides of a corner.
const SIDES: [IVec2; 4] = [IVec2::NEG_Y, IVec2::X, IVec2::Y, IVec2::NEG_X];

/// Measurements of one connected region of identical plants.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Region {
    pub(crate) plant: u8,
    pub(crate) area: usize,
    pub(crate) perimeter: usize,
    /// Each corner of the outline starts a new straight side, so this is also
    /// the number of sides.
    pub(crate) corners: usize,
}

/// The garden map, flattened row-major.
#[derive(Debug)]
pub(crate) struct Garden {
    width: i32,
    height: i32,
    plots: Vec<u8>,
}

impl FromStr for Garden {
    type Err = Report;

    fn from_str(input: &str) -> Result<Self> {
        let rows: Vec<&[u8]> = input
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::as_bytes)
            .collect();

        let width = rows.first().map(|row| row.len()).unwrap_or(0);
        if rows.iter().any(|row| row.len() != width) {
            return Err(miette!("Garden rows must all have the same length"));
        }

        Ok(Self {
            width: width as i32,
            height: rows.len() as i32,
            plots: rows.concat(),
        })
    }
}

impl Garden {
    fn plant_at(&self, pos: IVec2) -> Option<u8> {
        if pos.x < 0 || pos.y < 0 || pos.x >= self.width || pos.y >= self.height {
            return None;
        }
        Some(self.plots[(pos.y * self.width + pos.x) as usize])
    }

    fn position(&self, idx: usize) -> IVec2 {
        IVec2::new(idx as i32 % self.width, idx as i32 / self.width)
    }

    /// Outer and inner corners of the outline touching the plot at `pos`.
    fn corners_at(&self, pos: IVec2, plant: u8) -> usize {
        let same = |offset: IVec2| self.plant_at(pos + offset) == Some(plant);

        (0..SIDES.len())
            .filter(|&i| {
                let a = SIDES[i];
                let b = SIDES[(i + 1) % SIDES.len()];
                let outer = !same(a) && !same(b);
                let inner = same(a) && same(b) && !same(a + b);
                outer || inner
            })
            .count()
    }

    /// Flood fills every region, measuring it along the way.
    pub(crate) fn regions(&self) -> Vec<Region> {
        let mut seen = vec![false; self.plots.len()];
        let mut regions = Vec::new();

        for start in 0..self.plots.len() {
            if seen[start] {
                continue;
            }

            let plant = self.plots[start];
            let mut region = Region {
                plant,
                ..Default::default()
            };
            let mut stack = vec![start];
            seen[start] = true;

            while let Some(idx) = stack.pop() {
                let pos = self.position(idx);
                region.area += 1;
                region.corners += self.corners_at(pos, plant);

                for side in SIDES {
                    let next = pos + side;
                    if self.plant_at(next) != Some(plant) {
                        region.perimeter += 1;
                        continue;
                    }
                    let next_idx = (next.y * self.width + next.x) as usize;
                    if !seen[next_idx] {
                        seen[next_idx] = true;
                        stack.push(next_idx);
                    }
                }
            }

            tracing::trace!(?region, "measured region");
            regions.push(region);
        }

        regions
    }
}
