use chumsky::prelude::*;
use itertools::Itertools;
use miette::*;

/// Parses the two location id columns, one pair per line.
pub(crate) fn parser<'a>()
-> impl Parser<'a, &'a str, (Vec<u32>, Vec<u32>), extra::Err<Rich<'a, char>>> {
    let id = text::int(10).from_str::<u32>().unwrapped();

    id.then_ignore(just(' ').repeated().at_least(1))
        .then(id)
        .separated_by(text::newline())
        .allow_trailing()
        .collect::<Vec<_>>()
        .map(|pairs| pairs.into_iter().unzip())
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let (left, right) = parser()
        .parse(input.trim_end())
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    // Pair the smallest with the smallest, second smallest with second smallest, ...
    let distance: u32 = left
        .into_iter()
        .sorted_unstable()
        .zip(right.into_iter().sorted_unstable())
        .map(|(l, r)| l.abs_diff(r))
        .sum();

    Ok(distance.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser() {
        let (left, right) = parser().parse("3   4\n4   3").into_result().unwrap();
        assert_eq!(left, vec![3, 4]);
        assert_eq!(right, vec![4, 3]);
    }

    #[test]
    fn single_spaced_columns() -> Result<()> {
        let input = "3 4\n4 3\n2 5\n1 3\n3 9\n3 3";
        assert_eq!("11", process(input)?);
        Ok(())
    }

    #[test]
    fn it_works() -> Result<()> {
        let input = "3   4
4   3
2   5
1   3
3   9
3   3
";
        assert_eq!("11", process(input)?);
        Ok(())
    }
}
