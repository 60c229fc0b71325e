pub(crate) mod garden;
pub mod part1;
pub mod part2;
