use miette::*;
use strum::IntoEnumIterator;

use crate::part1::{calibrate, Operator};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let operators = Operator::iter().collect::<Vec<_>>();
    let total = calibrate(input, &operators)?;
    Ok(total.to_string())
}
