mod longest_common_prefix;

use longest_common_prefix::longest_common_prefix;

use crate::domain::dtos::{
    dna_match::DnaMatch,
    genome::Genome,
    genome_index::{GenomeIndex, IndexEntry},
    search_response::SearchResponse,
    telemetry_code::TelemetryCode,
};

use mycelium_base::utils::errors::{use_case_err, MappedErrors};
use std::collections::{btree_map::Entry, BTreeMap};
use tracing::{debug, trace};

/// Find the genomes containing a DNA fragment.
///
/// The first `minimum_search_length` bases of the fragment select candidate
/// windows from the index. Each candidate is then extended over the whole
/// fragment and kept when the common prefix reaches `minimum_length`. When
/// `exact_match_only` is false a single substituted base is tolerated.
///
/// # Returns
/// At most one match per genome name (the longest, then the earliest), ordered
/// by genome name. `NotFound` when no candidate qualifies. An error is returned
/// when `fragment` is shorter than `minimum_length` or when `minimum_length`
/// is below the index minimum search length.
///
#[tracing::instrument(
    name = "FindingGenomesWithThisDna",
    level = "debug",
    skip(index)
)]
pub fn find_genomes_with_this_dna<G: Genome>(
    index: &GenomeIndex<G>,
    fragment: &str,
    minimum_length: usize,
    exact_match_only: bool,
) -> Result<SearchResponse<DnaMatch>, MappedErrors> {
    // ? -----------------------------------------------------------------------
    // ? Validate arguments
    // ? -----------------------------------------------------------------------

    if fragment.len() < minimum_length {
        return use_case_err(format!(
            "The fragment length ({}) should not be smaller than the minimum match length ({minimum_length}).",
            fragment.len()
        ))
        .as_error();
    }

    if minimum_length < index.minimum_search_length() {
        return use_case_err(format!(
            "The minimum match length ({minimum_length}) should not be smaller than the minimum search length ({}).",
            index.minimum_search_length()
        ))
        .as_error();
    }

    debug!(
        code = TelemetryCode::UCFIND0001.to_string(),
        "Start fragment search"
    );

    // ? -----------------------------------------------------------------------
    // ? Collect candidates from the fragment prefix
    // ? -----------------------------------------------------------------------

    let key = match fragment.get(..index.minimum_search_length()) {
        Some(key) => key,
        None => {
            return use_case_err("The fragment should contain only DNA bases.")
                .as_error()
        }
    };

    let candidates = index.find_entries(key, exact_match_only);

    debug!(
        code = TelemetryCode::UCFIND0003.to_string(),
        candidates = candidates.len(),
        "Candidates collected"
    );

    // ? -----------------------------------------------------------------------
    // ? Verify candidates and keep the best match of each genome
    // ? -----------------------------------------------------------------------

    let mut best_matches = BTreeMap::<String, DnaMatch>::new();

    for entry in candidates.iter() {
        let genome = match index.genome(entry) {
            Some(genome) => genome,
            None => continue,
        };

        let candidate = match verify_candidate(
            genome,
            entry,
            fragment,
            minimum_length,
            exact_match_only,
        ) {
            Some(candidate) => candidate,
            None => {
                trace!(
                    code = TelemetryCode::UCFIND0004.to_string(),
                    genome = genome.name(),
                    position = entry.position,
                    "Candidate discarded"
                );

                continue;
            }
        };

        match best_matches.entry(candidate.genome_name.to_owned()) {
            Entry::Vacant(slot) => {
                slot.insert(candidate);
            }
            Entry::Occupied(mut slot) => {
                if candidate.supersedes(slot.get()) {
                    slot.insert(candidate);
                }
            }
        }
    }

    debug!(
        code = TelemetryCode::UCFIND0002.to_string(),
        genomes = best_matches.len(),
        "End fragment search"
    );

    Ok(SearchResponse::from_results(
        best_matches.into_values().collect(),
    ))
}

/// Extend a candidate window over the fragment.
///
/// Candidates near the end of their genome cannot provide the whole fragment
/// length, so shorter extractions are tried down to `minimum_length`. The
/// first extraction that succeeds decides the candidate.
fn verify_candidate<G: Genome>(
    genome: &G,
    entry: &IndexEntry,
    fragment: &str,
    minimum_length: usize,
    exact_match_only: bool,
) -> Option<DnaMatch> {
    let extracted = std::iter::once(fragment.len())
        .chain((minimum_length..fragment.len()).rev())
        .find_map(|length| genome.extract(entry.position, length))?;

    match longest_common_prefix(fragment, extracted, exact_match_only) {
        Some(length) if length >= minimum_length => Some(DnaMatch {
            genome_name: genome.name().to_owned(),
            position: entry.position,
            length,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dtos::genome::NamedGenome;

    fn build_index(
        minimum_search_length: usize,
        genomes: &[(&str, &str)],
    ) -> GenomeIndex<NamedGenome> {
        let mut index = GenomeIndex::new(minimum_search_length).unwrap();

        for (name, sequence) in genomes {
            index.add_genome(NamedGenome::new(*name, sequence).unwrap());
        }

        index
    }

    fn found(response: SearchResponse<DnaMatch>) -> Vec<DnaMatch> {
        match response {
            SearchResponse::Found(matches) => matches,
            SearchResponse::NotFound => panic!("Expected matches"),
        }
    }

    fn dna_match(name: &str, position: usize, length: usize) -> DnaMatch {
        DnaMatch {
            genome_name: name.to_string(),
            position,
            length,
        }
    }

    #[test]
    fn test_repeated_window_is_deduplicated_to_earliest() {
        let index = build_index(4, &[("g1", "ACGTACGT")]);

        let matches =
            found(find_genomes_with_this_dna(&index, "ACGT", 4, true).unwrap());

        assert_eq!(matches, vec![dna_match("g1", 0, 4)]);
    }

    #[test]
    fn test_longest_match_wins_over_earliest() {
        let index = build_index(4, &[("g1", "ACGTTTTTACGTACGA")]);

        let matches = found(
            find_genomes_with_this_dna(&index, "ACGTACGA", 4, true).unwrap(),
        );

        assert_eq!(matches, vec![dna_match("g1", 8, 8)]);
    }

    #[test]
    fn test_every_indexed_window_is_found() {
        let sequence = "GATTACAGGCTTACCGATNNACG";
        let index = build_index(5, &[("g1", sequence), ("g2", "CCCCCCCC")]);
        let genome = &index.genomes()[0];

        for position in 0..=(sequence.len() - 5) {
            let window = genome.extract(position, 5).unwrap();

            let matches = found(
                find_genomes_with_this_dna(&index, window, 5, true).unwrap(),
            );

            let hit = matches
                .iter()
                .find(|m| m.genome_name == "g1")
                .expect("Window should be found in g1");

            assert!(hit.length >= 5);
            assert!(hit.position <= position);
            assert_eq!(genome.extract(hit.position, 5), Some(window));
        }
    }

    #[test]
    fn test_one_match_per_genome() {
        let index = build_index(
            4,
            &[("g1", "AAAACCCCAAAA"), ("g2", "TTAAAACC"), ("g3", "GGGGGGGG")],
        );

        let matches =
            found(find_genomes_with_this_dna(&index, "AAAAC", 4, true).unwrap());

        assert_eq!(
            matches,
            vec![dna_match("g1", 0, 5), dna_match("g2", 2, 5)]
        );
    }

    #[test]
    fn test_same_name_genomes_share_one_match() {
        let index = build_index(4, &[("dup", "CCACGTAA"), ("dup", "ACGTAA")]);

        let matches =
            found(find_genomes_with_this_dna(&index, "ACGTAA", 4, true).unwrap());

        assert_eq!(matches, vec![dna_match("dup", 0, 6)]);
    }

    #[test]
    fn test_snip_is_tolerated_only_when_allowed() {
        let index = build_index(4, &[("g1", "TTACGTACGGCC")]);

        let response =
            find_genomes_with_this_dna(&index, "ACGAACGG", 8, true).unwrap();
        assert_eq!(response, SearchResponse::NotFound);

        let matches = found(
            find_genomes_with_this_dna(&index, "ACGAACGG", 8, false).unwrap(),
        );
        assert_eq!(matches, vec![dna_match("g1", 2, 8)]);
    }

    #[test]
    fn test_snip_in_the_search_key() {
        let index = build_index(4, &[("g1", "TTACGTACGGCC")]);

        let matches = found(
            find_genomes_with_this_dna(&index, "ATGTACGG", 6, false).unwrap(),
        );
        assert_eq!(matches, vec![dna_match("g1", 2, 8)]);

        let response =
            find_genomes_with_this_dna(&index, "ATGTACGG", 6, true).unwrap();
        assert_eq!(response, SearchResponse::NotFound);
    }

    #[test]
    fn test_two_snips_shorten_the_match() {
        let index = build_index(4, &[("g1", "ACGTACGTAC")]);

        let matches = found(
            find_genomes_with_this_dna(&index, "ACGTTCGAAC", 4, false).unwrap(),
        );
        assert_eq!(matches, vec![dna_match("g1", 0, 7)]);

        let response =
            find_genomes_with_this_dna(&index, "ACGTTCGAAC", 8, false).unwrap();
        assert_eq!(response, SearchResponse::NotFound);
    }

    #[test]
    fn test_candidate_near_the_end_is_shortened() {
        let index = build_index(4, &[("g1", "GGGGACGTAC")]);

        let matches = found(
            find_genomes_with_this_dna(&index, "ACGTACGT", 6, true).unwrap(),
        );
        assert_eq!(matches, vec![dna_match("g1", 4, 6)]);

        let response =
            find_genomes_with_this_dna(&index, "ACGTACGT", 7, true).unwrap();
        assert_eq!(response, SearchResponse::NotFound);
    }

    #[test]
    fn test_fragment_equal_to_search_length() {
        let index = build_index(3, &[("g1", "CATGAT")]);

        let matches =
            found(find_genomes_with_this_dna(&index, "GAT", 3, true).unwrap());
        assert_eq!(matches, vec![dna_match("g1", 3, 3)]);

        // CAT is a trie candidate but a substitution on the first base
        // invalidates it
        let matches =
            found(find_genomes_with_this_dna(&index, "GAT", 3, false).unwrap());
        assert_eq!(matches, vec![dna_match("g1", 3, 3)]);
    }

    #[test]
    fn test_precondition_violations() {
        let index = build_index(4, &[("g1", "ACGTACGT")]);

        assert!(find_genomes_with_this_dna(&index, "ACG", 4, true).is_err());
        assert!(find_genomes_with_this_dna(&index, "ACGT", 5, true).is_err());
        assert!(find_genomes_with_this_dna(&index, "ACGTACGT", 3, true).is_err());
    }

    #[test]
    fn test_empty_index_returns_not_found() {
        let index = build_index(4, &[]);

        let response =
            find_genomes_with_this_dna(&index, "ACGT", 4, false).unwrap();

        assert_eq!(response, SearchResponse::NotFound);
    }
}
