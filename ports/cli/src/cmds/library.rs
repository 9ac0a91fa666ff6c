use crate::dtos::telemetry_code::TelemetryCode;

use anyhow::{bail, Result};
use clap::Args;
use gmatch_core::domain::dtos::{
    genome::NamedGenome, genome_index::GenomeIndex,
};
use gmatch_ports_lib::{build_genome_index, LibraryConfig};
use std::{ops::RangeInclusive, path::PathBuf};
use tracing::info;

const DEFAULT_MIN_SEARCH_LENGTH: usize = 10;

const MIN_SEARCH_LENGTH_RANGE: RangeInclusive<usize> = 3..=100;

#[derive(Args, Debug)]
pub(crate) struct LibraryArguments {
    /// Genome library files
    ///
    /// Plain text or zstd compressed files containing one or more genome
    /// records. Each record starts with a `>name` line followed by the DNA
    /// sequence lines.
    #[arg(short, long = "library")]
    pub(super) library: Vec<PathBuf>,

    /// Library configuration file
    ///
    /// A YAML file listing the genome files and the minimum search length.
    /// Command line values take precedence.
    #[arg(short, long)]
    pub(super) config: Option<PathBuf>,

    /// Minimum search length
    ///
    /// The length of the windows used to index genomes (3 to 100).
    #[arg(short = 'k', long)]
    pub(super) min_search_length: Option<usize>,
}

impl LibraryArguments {
    /// Resolve the library files and build the genome index.
    pub(super) fn build_index(&self) -> Result<GenomeIndex<NamedGenome>> {
        let config = match &self.config {
            Some(path) => LibraryConfig::from_yaml_file(path)?,
            None => LibraryConfig::default(),
        }
        .with_overrides(&self.library, self.min_search_length);

        let min_search_length = config
            .min_search_length
            .unwrap_or(DEFAULT_MIN_SEARCH_LENGTH);

        if !MIN_SEARCH_LENGTH_RANGE.contains(&min_search_length) {
            bail!(
                "Invalid minimum search length {min_search_length}. It should be within {}-{}.",
                MIN_SEARCH_LENGTH_RANGE.start(),
                MIN_SEARCH_LENGTH_RANGE.end()
            );
        }

        if config.genomes.is_empty() {
            bail!("No genome library given. Use `--library` or `--config`.");
        }

        let index = build_genome_index(&config.genomes, min_search_length)?;

        info!(
            code = TelemetryCode::CLIINDEX0001.to_string(),
            genomes = index.genome_count(),
            windows = index.indexed_windows(),
            "Genome index built"
        );

        Ok(index)
    }
}
