use chumsky::prelude::*;
use miette::*;

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<&'a str>, extra::Err<Rich<'a, char>>> {
    text::digits(10)
        .to_slice()
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let lines = parser()
        .parse(input.trim_end())
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    Ok(lines.len().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "1\n2\n3";
        assert_eq!("3", process(input)?);
        Ok(())
    }
}
