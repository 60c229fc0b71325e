use std::str::FromStr;

use glam::IVec2;
use miette::*;
use strum::EnumCount;

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumCount)]
pub(crate) enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '^' => Some(Self::North),
            '>' => Some(Self::East),
            'v' => Some(Self::South),
            '<' => Some(Self::West),
            _ => None,
        }
    }

    pub(crate) fn turn_right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Unit step in grid coordinates, y grows downwards.
    pub(crate) fn offset(self) -> IVec2 {
        match self {
            Self::North => IVec2::NEG_Y,
            Self::East => IVec2::X,
            Self::South => IVec2::Y,
            Self::West => IVec2::NEG_X,
        }
    }
}

/// How a patrol ended.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Patrol {
    /// The guard walked off the map after visiting this many distinct cells.
    Exited { visited: usize },
    /// The guard reached a cell facing a way it had already faced there.
    Looped,
}

/// The lab map, flattened row-major.
#[derive(Debug, Clone)]
pub(crate) struct Lab {
    width: i32,
    height: i32,
    obstacles: Vec<bool>,
    start: IVec2,
    heading: Heading,
}

impl FromStr for Lab {
    type Err = Report;

    fn from_str(input: &str) -> Result<Self> {
        let mut obstacles = Vec::new();
        let mut guard = None;
        let mut width = None;
        let mut height = 0;

        for (y, line) in input.lines().filter(|line| !line.is_empty()).enumerate() {
            let len = line.chars().count();
            if *width.get_or_insert(len) != len {
                return Err(miette!("Row {y} has {len} cells, expected {}", width.unwrap_or(len)));
            }
            height += 1;

            for (x, glyph) in line.chars().enumerate() {
                match glyph {
                    '#' => obstacles.push(true),
                    '.' => obstacles.push(false),
                    _ => {
                        let heading = Heading::from_glyph(glyph)
                            .ok_or_else(|| miette!("Unexpected map glyph {glyph:?} at ({x}, {y})"))?;
                        if guard.replace((IVec2::new(x as i32, y as i32), heading)).is_some() {
                            return Err(miette!("Map contains more than one guard"));
                        }
                        obstacles.push(false);
                    }
                }
            }
        }

        let (start, heading) = guard.ok_or(miette!("No guard found on the map"))?;

        Ok(Self {
            width: width.unwrap_or(0) as i32,
            height,
            obstacles,
            start,
            heading,
        })
    }
}

impl Lab {
    fn index(&self, pos: IVec2) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 || pos.x >= self.width || pos.y >= self.height {
            return None;
        }
        Some((pos.y * self.width + pos.x) as usize)
    }

    /// Cells where an extra obstruction could be placed: empty and not the
    /// guard's starting cell.
    pub(crate) fn candidates(&self) -> Vec<usize> {
        let start = self.index(self.start);
        self.obstacles
            .iter()
            .enumerate()
            .filter(|&(idx, &blocked)| !blocked && Some(idx) != start)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Walks the guard until it leaves the map or repeats a (cell, heading)
    /// state, optionally with one extra obstruction at `extra`.
    pub(crate) fn patrol(&self, extra: Option<usize>) -> Patrol {
        let blocked = |idx: usize| self.obstacles[idx] || extra == Some(idx);

        let mut seen = vec![false; self.obstacles.len() * Heading::COUNT];
        let mut visited = 0;
        let mut pos = self.start;
        let mut heading = self.heading;
        let Some(mut idx) = self.index(pos) else {
            return Patrol::Exited { visited };
        };

        loop {
            let cell = &seen[idx * Heading::COUNT..(idx + 1) * Heading::COUNT];
            if cell[heading as usize] {
                return Patrol::Looped;
            }
            if !cell.iter().any(|&s| s) {
                visited += 1;
            }
            seen[idx * Heading::COUNT + heading as usize] = true;

            let next = pos + heading.offset();
            match self.index(next) {
                None => return Patrol::Exited { visited },
                Some(next_idx) if blocked(next_idx) => heading = heading.turn_right(),
                Some(next_idx) => {
                    pos = next;
                    idx = next_idx;
                }
            }
        }
    }
}
