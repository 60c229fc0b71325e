use miette::*;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    Ok(input.lines().count().to_string())
}
