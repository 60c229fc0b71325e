use std::collections::HashSet;
use std::iter::successors;

use glam::IVec2;
use miette::*;

use crate::part1::City;

/// Positions from `start` stepping by `step` until leaving the map.
fn ray(city: &City, start: IVec2, step: IVec2) -> impl Iterator<Item = IVec2> + '_ {
    successors(Some(start), move |&pos| Some(pos + step))
        .take_while(move |&pos| city.contains(pos))
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let city: City = input.parse()?;
    let city = &city;

    // Both antennas of a pair lie on their own line.
    let antinodes: HashSet<IVec2> = city
        .pairs()
        .flat_map(move |(a, b)| {
            let delta = a - b;
            ray(city, a, delta).chain(ray(city, b, -delta))
        })
        .collect();

    Ok(antinodes.len().to_string())
}
