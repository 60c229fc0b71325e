use chumsky::prelude::*;
use miette::*;
use rayon::prelude::*;
use strum::EnumIter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub(crate) enum Operator {
    Add,
    Multiply,
    Concatenate,
}

impl Operator {
    /// Applies the operator, returning `None` on overflow.
    pub(crate) fn apply(self, lhs: u64, rhs: u64) -> Option<u64> {
        match self {
            Self::Add => lhs.checked_add(rhs),
            Self::Multiply => lhs.checked_mul(rhs),
            Self::Concatenate => {
                let shift = 10u64.checked_pow(rhs.checked_ilog10().unwrap_or(0) + 1)?;
                lhs.checked_mul(shift)?.checked_add(rhs)
            }
        }
    }
}

#[derive(Debug)]
pub(crate) struct Equation {
    pub(crate) target: u64,
    pub(crate) operands: Vec<u64>,
}

impl Equation {
    /// Whether some choice of operators, evaluated left to right, reaches the target.
    pub(crate) fn is_solvable(&self, operators: &[Operator]) -> bool {
        fn search(target: u64, acc: u64, rest: &[u64], operators: &[Operator]) -> bool {
            let Some((&next, rest)) = rest.split_first() else {
                return acc == target;
            };
            operators.iter().any(|op| {
                op.apply(acc, next)
                    .is_some_and(|value| search(target, value, rest, operators))
            })
        }

        match self.operands.split_first() {
            Some((&first, rest)) => search(self.target, first, rest, operators),
            None => false,
        }
    }
}

pub(crate) fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Equation>, extra::Err<Rich<'a, char>>> {
    let number = text::int(10).from_str::<u64>().unwrapped();

    let equation = number
        .then_ignore(just(':'))
        .then(
            just(' ')
                .ignore_then(number)
                .repeated()
                .at_least(1)
                .collect::<Vec<_>>(),
        )
        .map(|(target, operands)| Equation { target, operands });

    equation
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

/// Sums the targets of every equation solvable with `operators`.
pub(crate) fn calibrate(input: &str, operators: &[Operator]) -> Result<u64> {
    let equations = parser()
        .parse(input.trim_end())
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    Ok(equations
        .par_iter()
        .filter(|equation| equation.is_solvable(operators))
        .map(|equation| equation.target)
        .sum())
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let total = calibrate(input, &[Operator::Add, Operator::Multiply])?;
    Ok(total.to_string())
}
