use miette::*;

use crate::disk::{DiskMap, File, Gap};

/// Moves whole files, highest id first, into the leftmost gap that fits and
/// lies before the file. Each file is considered exactly once.
pub(crate) fn compact_files(files: &mut [File], gaps: &mut [Gap]) {
    for file in files.iter_mut().rev() {
        let Some(gap) = gaps
            .iter_mut()
            .take_while(|gap| gap.start < file.start)
            .find(|gap| gap.len >= file.len)
        else {
            continue;
        };

        file.start = gap.start;
        gap.start += file.len;
        gap.len -= file.len;
    }
}

fn checksum(files: &[File]) -> u64 {
    files
        .iter()
        .map(|file| {
            (file.start..file.start + file.len)
                .map(|pos| pos as u64 * file.id)
                .sum::<u64>()
        })
        .sum()
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let (mut files, mut gaps) = DiskMap::parse(input)?.layout();

    compact_files(&mut files, &mut gaps);
    tracing::debug!(files = files.len(), "compacted whole files");

    Ok(checksum(&files).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_only_move_left() -> Result<()> {
        let (mut files, mut gaps) = DiskMap::parse("2333133121414131402")?.layout();
        let before = files.clone();
        compact_files(&mut files, &mut gaps);
        for (old, new) in before.iter().zip(&files) {
            assert!(new.start <= old.start, "file {} moved right", old.id);
        }
        Ok(())
    }

    #[test]
    fn it_works() -> Result<()> {
        assert_eq!("2858", process("2333133121414131402")?);
        Ok(())
    }
}
