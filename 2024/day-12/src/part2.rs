use miette::*;

use crate::garden::Garden;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let garden: Garden = input.parse()?;

    let price: usize = garden
        .regions()
        .iter()
        .map(|region| region.area * region.corners)
        .sum();

    Ok(price.to_string())
}
