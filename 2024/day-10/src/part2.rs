use itertools::Itertools;
use miette::*;

use crate::part1::TopoMap;

/// Counts distinct trails from every tile to any height-9 tile, filling the
/// table from the peaks downwards.
fn trail_counts(map: &TopoMap) -> Vec<u64> {
    let mut counts = vec![0u64; map.heights.len()];

    let by_height_desc = map
        .heights
        .iter()
        .enumerate()
        .filter_map(|(idx, h)| h.map(|h| (h, idx)))
        .sorted_unstable_by(|a, b| b.cmp(a));

    for (h, idx) in by_height_desc {
        let trails = if h == 9 {
            1
        } else {
            map.uphill(idx).map(|n| counts[n]).sum()
        };
        counts[idx] = trails;
    }
    counts
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let map: TopoMap = input.parse()?;
    let counts = trail_counts(&map);

    let rating: u64 = map.trailheads().map(|head| counts[head]).sum();

    Ok(rating.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_trailhead_rating() -> Result<()> {
        let input = ".....0.
..4321.
..5..2.
..6543.
..7..4.
..8765.
..9....";
        assert_eq!("3", process(input)?);
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
        assert_eq!("81", process(input)?);
        Ok(())
    }
}
