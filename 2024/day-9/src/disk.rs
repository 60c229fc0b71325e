use chumsky::prelude::*;
use miette::*;

/// A contiguous run of blocks holding one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct File {
    pub(crate) id: u64,
    pub(crate) start: usize,
    pub(crate) len: usize,
}

/// A contiguous run of free blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Gap {
    pub(crate) start: usize,
    pub(crate) len: usize,
}

/// The dense disk map: lengths alternating between files and free space.
#[derive(Debug)]
pub(crate) struct DiskMap {
    lengths: Vec<usize>,
}

fn parser<'a>() -> impl Parser<'a, &'a str, DiskMap, extra::Err<Rich<'a, char>>> {
    text::digits(10)
        .to_slice()
        .map(|digits: &str| DiskMap {
            lengths: digits.bytes().map(|b| (b - b'0') as usize).collect(),
        })
        .padded()
}

impl DiskMap {
    pub(crate) fn parse(input: &str) -> Result<Self> {
        parser()
            .parse(input)
            .into_result()
            .map_err(|e| miette!("Parse failed: {:?}", e))
    }

    /// Files and gaps in disk order, with file ids assigned left to right.
    pub(crate) fn layout(&self) -> (Vec<File>, Vec<Gap>) {
        let mut files = Vec::with_capacity(self.lengths.len() / 2 + 1);
        let mut gaps = Vec::with_capacity(self.lengths.len() / 2);
        let mut start = 0;

        for (i, &len) in self.lengths.iter().enumerate() {
            if i % 2 == 0 {
                files.push(File {
                    id: (i / 2) as u64,
                    start,
                    len,
                });
            } else {
                gaps.push(Gap { start, len });
            }
            start += len;
        }

        (files, gaps)
    }

    /// One entry per block: the owning file id, or `None` when free.
    pub(crate) fn blocks(&self) -> Vec<Option<u64>> {
        let (files, _) = self.layout();
        let size = self.lengths.iter().sum();
        let mut blocks = vec![None; size];
        for file in files {
            blocks[file.start..file.start + file.len].fill(Some(file.id));
        }
        blocks
    }
}

pub(crate) fn checksum(blocks: &[Option<u64>]) -> u64 {
    blocks
        .iter()
        .enumerate()
        .filter_map(|(pos, id)| id.map(|id| pos as u64 * id))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() -> Result<()> {
        let (files, gaps) = DiskMap::parse("12345")?.layout();
        assert_eq!(
            files,
            vec![
                File { id: 0, start: 0, len: 1 },
                File { id: 1, start: 3, len: 3 },
                File { id: 2, start: 10, len: 5 },
            ]
        );
        assert_eq!(gaps, vec![Gap { start: 1, len: 2 }, Gap { start: 6, len: 4 }]);
        Ok(())
    }

    #[test]
    fn test_blocks() -> Result<()> {
        let blocks = DiskMap::parse("12345\n")?.blocks();
        let rendered: String = blocks
            .iter()
            .map(|block| match block {
                Some(id) => char::from_digit(*id as u32, 10).unwrap(),
                None => '.',
            })
            .collect();
        assert_eq!(rendered, "0..111....22222");
        Ok(())
    }
}
