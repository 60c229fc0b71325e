use chumsky::Parser;
use miette::*;

use crate::part1::{middle_page, parser};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let queue = parser()
        .parse(input.trim_end())
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let total = queue
        .updates
        .iter()
        .filter(|update| !queue.rules.is_ordered(update))
        .map(|update| queue.rules.reorder(update).map(|fixed| middle_page(&fixed)))
        .sum::<Result<u32>>()?;

    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reorders_by_rules() {
        let queue = parser()
            .parse("47|53\n97|47\n97|53\n\n53,47,97")
            .into_result()
            .unwrap();
        let fixed = queue.rules.reorder(&queue.updates[0]).unwrap();
        assert_eq!(fixed, vec![97, 47, 53]);
    }

    #[test]
    fn reorders_with_partial_rules() {
        let queue = parser()
            .parse("1|2\n3|4\n\n2,4,1,3")
            .into_result()
            .unwrap();
        let fixed = queue.rules.reorder(&queue.updates[0]).unwrap();
        assert!(queue.rules.is_ordered(&fixed));
        assert_eq!(fixed, vec![1, 3, 2, 4]);
    }

    #[test]
    fn rule_spanning_unrelated_page() -> Result<()> {
        // A comparator sort sees 2 as equal to both neighbours and never swaps 1 and 3.
        assert_eq!("3", process("3|1\n\n1,2,3")?);
        Ok(())
    }

    #[test]
    fn cyclic_rules_are_an_error() {
        assert!(process("1|2\n2|1\n\n1,2").is_err());
    }

    #[test]
    fn it_works() -> Result<()> {
        let input = "47|53
97|13
97|61
97|47
75|29
61|13
75|53
29|13
97|29
53|29
61|53
97|53
61|29
47|13
75|47
97|75
47|61
75|61
47|29
75|13
53|13

75,47,61,53,29
97,61,53,29,13
75,29,13
75,97,47,61,53
61,13,29
97,13,75,29,47";
        assert_eq!("123", process(input)?);
        Ok(())
    }
}
