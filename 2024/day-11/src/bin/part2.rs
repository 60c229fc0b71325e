use miette::*;

use aoc2024_day_11::part2;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let input = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .into_diagnostic()
            .wrap_err_with(|| format!("could not read input file at: {path}"))?,
        None => include_str!("../../input2.txt").to_string(),
    };
    let result = part2::process(&input)?;
    println!("Result: {}", result);
    Ok(())
}
