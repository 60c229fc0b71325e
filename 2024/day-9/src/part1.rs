use miette::*;

use crate::disk::{checksum, DiskMap};

/// Moves blocks one at a time from the end of the disk into the leftmost free
/// block until no gaps remain between file blocks.
pub(crate) fn compact_blocks(blocks: &mut [Option<u64>]) {
    if blocks.is_empty() {
        return;
    }

    let mut left = 0;
    let mut right = blocks.len() - 1;

    while left < right {
        if blocks[left].is_some() {
            left += 1;
        } else if blocks[right].is_none() {
            right -= 1;
        } else {
            blocks.swap(left, right);
        }
    }
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let mut blocks = DiskMap::parse(input)?.blocks();

    compact_blocks(&mut blocks);

    Ok(checksum(&blocks).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compaction_is_idempotent() -> Result<()> {
        let mut blocks = DiskMap::parse("2333133121414131402")?.blocks();
        compact_blocks(&mut blocks);
        let once = checksum(&blocks);

        compact_blocks(&mut blocks);
        assert_eq!(once, checksum(&blocks));
        Ok(())
    }

    #[test]
    fn small_example() -> Result<()> {
        // 0..111....22222 compacts to 022111222......
        assert_eq!("60", process("12345")?);
        Ok(())
    }

    #[test]
    fn it_works() -> Result<()> {
        assert_eq!("1928", process("2333133121414131402")?);
        Ok(())
    }
}
