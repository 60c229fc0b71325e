use std::collections::{HashSet, VecDeque};

use chumsky::prelude::*;
use itertools::Itertools;
use miette::*;

/// Page ordering rules: `(before, after)` pairs.
#[derive(Debug, Default)]
pub(crate) struct Rules(HashSet<(u32, u32)>);

impl Rules {
    /// Every pair of pages must respect any rule that mentions both.
    pub(crate) fn is_ordered(&self, update: &[u32]) -> bool {
        update
            .iter()
            .tuple_combinations()
            .all(|(&a, &b)| !self.0.contains(&(b, a)))
    }

    /// Topologically orders an update using only the rules between its own
    /// pages. Unconstrained pages keep their relative input order.
    pub(crate) fn reorder(&self, update: &[u32]) -> Result<Vec<u32>> {
        let mut successors = vec![Vec::new(); update.len()];
        let mut in_degree = vec![0usize; update.len()];
        for (i, j) in (0..update.len()).tuple_combinations() {
            if self.0.contains(&(update[i], update[j])) {
                successors[i].push(j);
                in_degree[j] += 1;
            }
            if self.0.contains(&(update[j], update[i])) {
                successors[j].push(i);
                in_degree[i] += 1;
            }
        }

        let mut ready: VecDeque<usize> = (0..update.len())
            .filter(|&i| in_degree[i] == 0)
            .collect();
        let mut ordered = Vec::with_capacity(update.len());
        while let Some(i) = ready.pop_front() {
            ordered.push(update[i]);
            for &j in &successors[i] {
                in_degree[j] -= 1;
                if in_degree[j] == 0 {
                    ready.push_back(j);
                }
            }
        }

        if ordered.len() != update.len() {
            return Err(miette!("Rules for update {update:?} form a cycle"));
        }
        Ok(ordered)
    }
}

#[derive(Debug)]
pub(crate) struct PrintQueue {
    pub(crate) rules: Rules,
    pub(crate) updates: Vec<Vec<u32>>,
}

pub(crate) fn parser<'a>() -> impl Parser<'a, &'a str, PrintQueue, extra::Err<Rich<'a, char>>> {
    let page = text::int(10).from_str::<u32>().unwrapped();

    let rule = page.then_ignore(just('|')).then(page);
    let rules = rule
        .separated_by(text::newline())
        .collect::<HashSet<_>>()
        .map(Rules);

    let updates = page
        .separated_by(just(','))
        .at_least(1)
        .collect::<Vec<_>>()
        .separated_by(text::newline())
        .allow_trailing()
        .collect::<Vec<_>>();

    rules
        .then_ignore(text::newline().repeated().exactly(2))
        .then(updates)
        .map(|(rules, updates)| PrintQueue { rules, updates })
}

pub(crate) fn middle_page(update: &[u32]) -> u32 {
    update.get(update.len() / 2).copied().unwrap_or(0)
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let queue = parser()
        .parse(input.trim_end())
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let total: u32 = queue
        .updates
        .iter()
        .filter(|update| queue.rules.is_ordered(update))
        .map(|update| middle_page(update))
        .sum();

    Ok(total.to_string())
}
