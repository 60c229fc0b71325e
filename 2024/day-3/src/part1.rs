use miette::*;
use regex::Regex;

/// Matches a well formed `mul(a,b)` and captures both operands.
pub(crate) const MUL_PATTERN: &str = r"mul\((\d+),(\d+)\)";

pub(crate) fn product(captures: &regex::Captures) -> Result<u64> {
    let lhs: u64 = captures[1].parse().into_diagnostic()?;
    let rhs: u64 = captures[2].parse().into_diagnostic()?;
    lhs.checked_mul(rhs)
        .ok_or_else(|| miette!("mul({lhs},{rhs}) overflows a u64"))
}

/// Adds a product to the running total, failing instead of wrapping.
pub(crate) fn accumulate(total: u64, product: u64) -> Result<u64> {
    total
        .checked_add(product)
        .ok_or_else(|| miette!("Sum of products overflows a u64"))
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let mul = Regex::new(MUL_PATTERN).into_diagnostic()?;

    let total = mul
        .captures_iter(input)
        .try_fold(0, |total, captures| accumulate(total, product(&captures)?))?;

    Ok(total.to_string())
}
