use super::{
    approximate_trie::ApproximateTrie, genome::Genome,
    telemetry_code::TelemetryCode,
};

use mycelium_base::utils::errors::{use_case_err, MappedErrors};
use tracing::debug;

/// A trie value pointing at the start of a window inside an indexed genome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexEntry {
    /// Start position of the window inside the genome.
    pub position: usize,

    /// Slot of the genome in the index collection.
    pub genome: usize,
}

/// An append-only collection of genomes indexed by every fixed-length window.
///
/// The window length (`minimum_search_length`) is fixed at construction time.
/// Genomes are referenced from the trie by their slot in the collection, which
/// never changes since genomes are never removed.
#[derive(Clone, Debug)]
pub struct GenomeIndex<G: Genome> {
    minimum_search_length: usize,
    genomes: Vec<G>,
    trie: ApproximateTrie<IndexEntry>,
    indexed_windows: usize,
}

impl<G: Genome> GenomeIndex<G> {
    pub fn new(minimum_search_length: usize) -> Result<Self, MappedErrors> {
        if minimum_search_length == 0 {
            return use_case_err("The minimum search length should be at least 1.")
                .as_error();
        }

        Ok(GenomeIndex {
            minimum_search_length,
            genomes: Vec::new(),
            trie: ApproximateTrie::new(),
            indexed_windows: 0,
        })
    }

    pub fn minimum_search_length(&self) -> usize {
        self.minimum_search_length
    }

    pub fn genomes(&self) -> &[G] {
        &self.genomes
    }

    pub fn genome_count(&self) -> usize {
        self.genomes.len()
    }

    /// Number of windows inserted into the trie so far.
    pub fn indexed_windows(&self) -> usize {
        self.indexed_windows
    }

    pub fn trie_node_count(&self) -> usize {
        self.trie.node_count()
    }

    /// Add a genome and index each of its overlapping windows.
    ///
    /// Genomes shorter than the minimum search length are stored but produce
    /// no window.
    pub fn add_genome(&mut self, genome: G) {
        let slot = self.genomes.len();
        let mut position = 0;

        while let Some(window) =
            genome.extract(position, self.minimum_search_length)
        {
            self.trie.insert(
                window,
                IndexEntry {
                    position,
                    genome: slot,
                },
            );

            position += 1;
        }

        debug!(
            code = TelemetryCode::DTINDEX0001.to_string(),
            genome = genome.name(),
            windows = position,
            "Genome indexed"
        );

        self.indexed_windows += position;
        self.genomes.push(genome);
    }

    /// Retrieve the entries whose window matches `key`.
    ///
    /// The key should have exactly `minimum_search_length` characters.
    pub fn find_entries(
        &self,
        key: &str,
        exact_match_only: bool,
    ) -> Vec<IndexEntry> {
        self.trie.find(key, exact_match_only)
    }

    pub fn genome(&self, entry: &IndexEntry) -> Option<&G> {
        self.genomes.get(entry.genome)
    }

    /// Drop every genome and trie node, keeping the window length.
    pub fn reset(&mut self) {
        self.genomes.clear();
        self.trie.reset();
        self.indexed_windows = 0;
    }
}
