use anyhow::{Error, Result};
use gmatch_core::domain::dtos::{
    file_or_stdin::parse_genomes, genome::NamedGenome,
};
use std::{fs::File, io::BufReader, path::Path};
use tracing::debug;
use zstd::Decoder;

/// Load the genomes stored in a plain or zstd compressed genome file.
pub fn load_genome_library(path: &Path) -> Result<Vec<NamedGenome>> {
    //
    // Read from a compressed file
    //
    let read_from_zstd = |path: &Path| -> Result<Vec<NamedGenome>> {
        let reader = File::open(path)?;
        let reader = Decoder::new(reader)?;
        Ok(parse_genomes(BufReader::new(reader))?)
    };

    //
    // Read from a plain text file
    //
    let read_from_text = |path: &Path| -> Result<Vec<NamedGenome>> {
        let reader = File::open(path)?;
        Ok(parse_genomes(BufReader::new(reader))?)
    };

    //
    // Load the library content
    //
    let zstd_err = match read_from_zstd(path) {
        Ok(genomes) => {
            debug!("Compressed genome library loaded: {:?}", path);
            return Ok(genomes);
        }
        Err(err) => err,
    };

    let text_err = match read_from_text(path) {
        Ok(genomes) => {
            debug!("Genome library loaded: {:?}", path);
            return Ok(genomes);
        }
        Err(err) => err,
    };

    Err(Error::msg(format!(
        "Error loading genome library {path:?}: {zstd_err} | {text_err}"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gmatch_core::domain::dtos::genome::Genome;
    use std::path::PathBuf;

    const CONTENT: &str = ">Ferroplasma acidarmanus\nACGTACGT\nNNAC\n>g2\nttaa\n";

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("gmatch-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_load_plain_library() -> Result<()> {
        let path = temp_path("plain.txt");
        std::fs::write(&path, CONTENT)?;

        let genomes = load_genome_library(&path)?;
        std::fs::remove_file(&path)?;

        assert_eq!(genomes.len(), 2);
        assert_eq!(genomes[0].name(), "Ferroplasma acidarmanus");
        assert_eq!(genomes[0].sequence(), "ACGTACGTNNAC");
        assert_eq!(genomes[1].sequence(), "TTAA");

        Ok(())
    }

    #[test]
    fn test_load_compressed_library() -> Result<()> {
        let path = temp_path("compressed.txt.zst");
        std::fs::write(&path, zstd::encode_all(CONTENT.as_bytes(), 3)?)?;

        let genomes = load_genome_library(&path)?;
        std::fs::remove_file(&path)?;

        assert_eq!(genomes.len(), 2);
        assert_eq!(genomes[1].name(), "g2");

        Ok(())
    }

    #[test]
    fn test_load_invalid_library() -> Result<()> {
        let path = temp_path("invalid.txt");
        std::fs::write(&path, ">g1\nACGU\n")?;

        let result = load_genome_library(&path);
        std::fs::remove_file(&path)?;

        assert!(result.is_err());
        assert!(load_genome_library(&temp_path("missing.txt")).is_err());

        Ok(())
    }
}
