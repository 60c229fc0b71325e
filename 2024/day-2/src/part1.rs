use chumsky::prelude::*;
use itertools::Itertools;
use miette::*;

/// Parses one report per line, each a run of space separated levels.
pub(crate) fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Vec<i32>>, extra::Err<Rich<'a, char>>>
{
    let level = text::int(10).from_str::<i32>().unwrapped();

    level
        .separated_by(just(' '))
        .at_least(1)
        .collect::<Vec<_>>()
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

/// A report is safe when the levels are strictly monotonic and every
/// adjacent pair differs by at most 3.
pub(crate) fn is_safe(report: &[i32]) -> bool {
    let diffs = report
        .iter()
        .tuple_windows()
        .map(|(a, b)| b - a)
        .collect::<Vec<_>>();

    let increasing = diffs.iter().all(|&d| d > 0);
    let decreasing = diffs.iter().all(|&d| d < 0);

    (increasing || decreasing) && diffs.iter().all(|d| d.abs() <= 3)
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let reports = parser()
        .parse(input.trim_end())
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let safe = reports.iter().filter(|report| is_safe(report)).count();

    Ok(safe.to_string())
}
