use super::load_genome_library;

use anyhow::{Error, Result};
use gmatch_core::domain::dtos::{
    genome::NamedGenome, genome_index::GenomeIndex,
};
use std::path::PathBuf;
use tracing::info;

/// Build an index with every genome of the given library files.
#[tracing::instrument(name = "Building genome index", skip(files))]
pub fn build_genome_index(
    files: &[PathBuf],
    min_search_length: usize,
) -> Result<GenomeIndex<NamedGenome>> {
    let mut index = GenomeIndex::new(min_search_length)
        .map_err(|err| Error::msg(err.to_string()))?;

    for file in files {
        let genomes = load_genome_library(file.as_path())?;
        let count = genomes.len();

        for genome in genomes {
            index.add_genome(genome);
        }

        info!("Loaded {count} genomes from {:?}", file);
    }

    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_genome_index() -> Result<()> {
        let path = std::env::temp_dir()
            .join(format!("gmatch-{}-index.txt", std::process::id()));
        std::fs::write(&path, ">g1\nACGTACGT\n>g2\nACG\n")?;

        let index = build_genome_index(&[path.to_owned()], 4)?;
        std::fs::remove_file(&path)?;

        assert_eq!(index.genome_count(), 2);
        assert_eq!(index.indexed_windows(), 5);

        Ok(())
    }

    #[test]
    fn test_build_genome_index_rejects_zero_length() {
        assert!(build_genome_index(&[], 0).is_err());
    }
}
