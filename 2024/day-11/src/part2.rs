use miette::*;

use crate::part1::count_stones;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    Ok(count_stones(input, 75)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        assert_eq!("65601038650482", process("125 17")?);
        Ok(())
    }
}
