use chumsky::Parser;
use counter::Counter;
use miette::*;

use crate::part1::parser;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let (left, right) = parser()
        .parse(input.trim_end())
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let occurrences = right.into_iter().collect::<Counter<u32>>();

    let similarity: usize = left
        .into_iter()
        .map(|id| id as usize * occurrences[&id])
        .sum();

    Ok(similarity.to_string())
}
