use miette::*;
use regex::Regex;

use crate::part1::{accumulate, product, MUL_PATTERN};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    // One alternation keeps every instruction in textual order.
    let instruction = Regex::new(&format!(r"{MUL_PATTERN}|do\(\)|don't\(\)")).into_diagnostic()?;

    let mut enabled = true;
    let mut total = 0;

    for captures in instruction.captures_iter(input) {
        match &captures[0] {
            "do()" => enabled = true,
            "don't()" => enabled = false,
            _ if enabled => total = accumulate(total, product(&captures)?)?,
            _ => {}
        }
    }

    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_until_reenabled() -> Result<()> {
        assert_eq!("6", process("don't()mul(5,5)do()mul(2,3)don't()mul(7,7)")?);
        Ok(())
    }

    #[test]
    fn overflow_in_enabled_section_is_an_error() {
        assert!(process("do()mul(9999999999,9999999999)").is_err());
    }

    #[test]
    fn overflow_in_disabled_section_is_skipped() -> Result<()> {
        assert_eq!("4", process("don't()mul(9999999999,9999999999)do()mul(2,2)")?);
        Ok(())
    }

    #[test]
    fn it_works() -> Result<()> {
        let input = "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";
        assert_eq!("48", process(input)?);
        Ok(())
    }
}
