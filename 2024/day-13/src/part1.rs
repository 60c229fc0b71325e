use glam::I64Vec2;
use miette::*;
use nom::{
    bytes::complete::tag,
    character::complete::{i64, line_ending, multispace0, multispace1},
    combinator::{all_consuming, map},
    multi::separated_list1,
    sequence::{delimited, preceded, separated_pair, terminated, tuple},
    IResult,
};

/// One claw machine: the two button movements and the prize location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Machine {
    pub(crate) a: I64Vec2,
    pub(crate) b: I64Vec2,
    pub(crate) prize: I64Vec2,
}

/// Tokens per press of button A and button B.
const COST: (i64, i64) = (3, 1);

impl Machine {
    /// Solves `na * a + nb * b = prize` with Cramer's rule.
    ///
    /// Returns the press counts only when the system has a single solution in
    /// non-negative integers.
    pub(crate) fn presses(&self) -> Option<(i64, i64)> {
        let det = self.a.x * self.b.y - self.a.y * self.b.x;
        if det == 0 {
            return None;
        }

        let na = self.prize.x * self.b.y - self.prize.y * self.b.x;
        let nb = self.a.x * self.prize.y - self.a.y * self.prize.x;
        if na % det != 0 || nb % det != 0 {
            return None;
        }

        let (na, nb) = (na / det, nb / det);
        (na >= 0 && nb >= 0).then_some((na, nb))
    }

    pub(crate) fn tokens(&self) -> Option<i64> {
        self.presses().map(|(na, nb)| na * COST.0 + nb * COST.1)
    }
}

fn coordinates<'a>(sign: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, I64Vec2> {
    map(
        separated_pair(
            preceded(tuple((tag("X"), tag(sign))), i64),
            tag(", "),
            preceded(tuple((tag("Y"), tag(sign))), i64),
        ),
        |(x, y)| I64Vec2::new(x, y),
    )
}

fn machine(input: &str) -> IResult<&str, Machine> {
    let (input, a) = delimited(tag("Button A: "), coordinates("+"), line_ending)(input)?;
    let (input, b) = delimited(tag("Button B: "), coordinates("+"), line_ending)(input)?;
    let (input, prize) = preceded(tag("Prize: "), coordinates("="))(input)?;
    Ok((input, Machine { a, b, prize }))
}

pub(crate) fn parse(input: &str) -> Result<Vec<Machine>> {
    let (_, machines) = all_consuming(terminated(
        separated_list1(multispace1, machine),
        multispace0,
    ))(input)
    .map_err(|e| miette!("Parse failed: {e}"))?;
    Ok(machines)
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let machines = parse(input)?;

    let tokens: i64 = machines.iter().filter_map(Machine::tokens).sum();

    Ok(tokens.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    const INPUT: &str = "Button A: X+94, Y+34
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
Prize: X=18641, Y=10279
";

    #[test]
    fn test_parse() -> Result<()> {
        let machines = parse(INPUT)?;
        assert_eq!(machines.len(), 4);
        assert_eq!(
            machines[0],
            Machine {
                a: I64Vec2::new(94, 34),
                b: I64Vec2::new(22, 67),
                prize: I64Vec2::new(8400, 5400),
            }
        );
        Ok(())
    }

    #[rstest]
    #[case(0, Some((80, 40)))]
    #[case(1, None)]
    #[case(2, Some((38, 86)))]
    #[case(3, None)]
    fn test_presses(#[case] index: usize, #[case] expected: Option<(i64, i64)>) -> Result<()> {
        assert_eq!(expected, parse(INPUT)?[index].presses());
        Ok(())
    }

    #[test]
    fn parallel_buttons_have_no_unique_solution() {
        let machine = Machine {
            a: I64Vec2::new(1, 1),
            b: I64Vec2::new(2, 2),
            prize: I64Vec2::new(4, 4),
        };
        assert_eq!(machine.presses(), None);
    }

    #[test]
    fn it_works() -> Result<()> {
        assert_eq!("480", process(INPUT)?);
        Ok(())
    }
}
