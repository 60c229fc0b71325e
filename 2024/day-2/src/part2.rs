use chumsky::Parser;
use itertools::Itertools;
use miette::*;

use crate::part1::{is_safe, parser};

/// Returns the index of the first level that breaks the safety rules, judged
/// against the direction set by the first pair.
fn first_violation(report: &[i32]) -> Option<usize> {
    let mut diffs = report.iter().tuple_windows().map(|(a, b)| b - a);
    let direction = diffs.clone().next()?.signum();

    diffs
        .position(|d| d.signum() != direction || d == 0 || d.abs() > 3)
        .map(|i| i + 1)
}

fn without(report: &[i32], index: usize) -> Vec<i32> {
    let mut levels = report.to_vec();
    levels.remove(index);
    levels
}

/// The problem dampener tolerates a single bad level.
///
/// Only removals near the first violation can repair the report, plus the
/// very first level since it alone fixes the direction.
pub(crate) fn is_safe_dampened(report: &[i32]) -> bool {
    let Some(violation) = first_violation(report) else {
        return true;
    };

    [0, violation.saturating_sub(1), violation]
        .into_iter()
        .unique()
        .any(|i| is_safe(&without(report, i)))
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let reports = parser()
        .parse(input.trim_end())
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let safe = reports
        .iter()
        .filter(|report| is_safe_dampened(report))
        .count();

    Ok(safe.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    fn brute_force(report: &[i32]) -> bool {
        is_safe(report) || (0..report.len()).any(|i| is_safe(&without(report, i)))
    }

    #[rstest]
    #[case(&[7, 6, 4, 2, 1], true)]
    #[case(&[1, 2, 7, 8, 9], false)]
    #[case(&[9, 7, 6, 2, 1], false)]
    #[case(&[1, 3, 2, 4, 5], true)]
    #[case(&[8, 6, 4, 4, 1], true)]
    #[case(&[1, 3, 6, 7, 9], true)]
    #[case(&[5, 1, 2, 3, 4], true)]
    #[case(&[1, 5, 4, 3, 2], true)]
    #[case(&[1, 2, 3, 4, 9], true)]
    fn test_is_safe_dampened(#[case] report: &[i32], #[case] expected: bool) {
        assert_eq!(expected, is_safe_dampened(report));
    }

    #[test]
    fn matches_brute_force() {
        // Every report of length 5 over a small alphabet of levels.
        let levels = [1, 2, 3, 5, 8];
        for report in (0..5).map(|_| levels).multi_cartesian_product() {
            assert_eq!(
                brute_force(&report),
                is_safe_dampened(&report),
                "report {report:?}"
            );
        }
    }

    #[test]
    fn it_works() -> Result<()> {
        let input = "7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9";
        assert_eq!("4", process(input)?);
        Ok(())
    }
}
