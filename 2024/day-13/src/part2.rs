use glam::I64Vec2;
use miette::*;

use crate::part1::{parse, Machine};

/// The prize coordinates are off by this much on both axes.
const UNIT_CONVERSION: i64 = 10_000_000_000_000;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let machines = parse(input)?;

    let tokens: i64 = machines
        .into_iter()
        .map(|machine| Machine {
            prize: machine.prize + I64Vec2::splat(UNIT_CONVERSION),
            ..machine
        })
        .filter_map(|machine| machine.tokens())
        .sum();

    Ok(tokens.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "Button A: X+94, Y+34
Button B: X+22, Y+67
Prize: X=8400, Y=5400

Button A: X+26, Y+66
Button B: X+67, Y+21
Prize: X=12748, Y=12176

Button A: X+17, Y+86
Button B: X+84, Y+37
Prize: X=7870, Y=6450

Button A: X+69, Y+23
Button B: X+27, Y+71
Prize: X=18641, Y=10279";
        assert_eq!("875318608908", process(input)?);
        Ok(())
    }
}
