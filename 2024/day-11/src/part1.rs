use cached::proc_macro::cached;
use chumsky::prelude::*;
use miette::*;

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<u64>, extra::Err<Rich<'a, char>>> {
    text::int(10)
        .from_str::<u64>()
        .unwrapped()
        .separated_by(just(' ').repeated().at_least(1))
        .at_least(1)
        .collect()
        .padded()
}

/// Number of stones a single stone turns into after `blinks` blinks.
///
/// Memoized on `(stone, blinks)`; the same small values recur constantly.
#[cached]
pub(crate) fn stones_after(stone: u64, blinks: u32) -> u64 {
    if blinks == 0 {
        return 1;
    }
    if stone == 0 {
        return stones_after(1, blinks - 1);
    }

    let digits = stone.ilog10() + 1;
    if digits % 2 == 0 {
        let half = 10u64.pow(digits / 2);
        stones_after(stone / half, blinks - 1) + stones_after(stone % half, blinks - 1)
    } else {
        stones_after(stone * 2024, blinks - 1)
    }
}

pub(crate) fn count_stones(input: &str, blinks: u32) -> Result<u64> {
    let stones = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    Ok(stones
        .into_iter()
        .map(|stone| stones_after(stone, blinks))
        .sum())
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    Ok(count_stones(input, 25)?.to_string())
}
