pub(crate) mod disk;
pub mod part1;
pub mod part2;
