use super::find_genomes_with_this_dna;
use crate::domain::dtos::{
    genome::Genome, genome_index::GenomeIndex, genome_match::GenomeMatch,
    search_response::SearchResponse, telemetry_code::TelemetryCode,
};

use mycelium_base::utils::errors::{use_case_err, MappedErrors};
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

/// Rank the indexed genomes by their similarity with a query genome.
///
/// The query is cut into consecutive, non-overlapping windows of
/// `fragment_length` bases. Each window is searched in the index and every
/// genome holding a qualifying match scores one hit for that window. The
/// score of a genome is its share of hits over `query.length() /
/// fragment_length` windows. A trailing window shorter than `fragment_length`
/// is never searched.
///
/// # Returns
/// Genomes scoring strictly above `percent_threshold`, highest score first and
/// ties ordered by genome name. `NotFound` when no genome clears the
/// threshold.
///
#[tracing::instrument(
    name = "FindingRelatedGenomes",
    skip(index, query),
    fields(
        run_id = Uuid::new_v4().to_string().replace("-", ""),
        query = query.name(),
    )
)]
pub fn find_related_genomes<G: Genome, Q: Genome>(
    index: &GenomeIndex<G>,
    query: &Q,
    fragment_length: usize,
    exact_match_only: bool,
    percent_threshold: f64,
) -> Result<SearchResponse<GenomeMatch>, MappedErrors> {
    // ? -----------------------------------------------------------------------
    // ? Validate arguments
    // ? -----------------------------------------------------------------------

    if fragment_length < index.minimum_search_length() {
        return use_case_err(format!(
            "The fragment length ({fragment_length}) should not be smaller than the minimum search length ({}).",
            index.minimum_search_length()
        ))
        .as_error();
    }

    debug!(
        code = TelemetryCode::UCRELATED0001.to_string(),
        "Start related genomes search"
    );

    // ? -----------------------------------------------------------------------
    // ? Count the windows hitting each genome
    //
    // The denominator is the nominal number of complete windows, computed
    // independently of the extraction loop.
    //
    // ? -----------------------------------------------------------------------

    let total_fragments = query.length() / fragment_length;
    let mut hits = HashMap::<String, usize>::new();

    for position in (0..query.length()).step_by(fragment_length) {
        let window = match query.extract(position, fragment_length) {
            Some(window) => window,
            None => continue,
        };

        let response = find_genomes_with_this_dna(
            index,
            window,
            fragment_length,
            exact_match_only,
        )?;

        for dna_match in response.into_results() {
            *hits.entry(dna_match.genome_name).or_insert(0) += 1;
        }
    }

    debug!(
        code = TelemetryCode::UCRELATED0003.to_string(),
        total_fragments = total_fragments,
        genomes = hits.len(),
        "Query windows scored"
    );

    // ? -----------------------------------------------------------------------
    // ? Filter and rank genomes
    // ? -----------------------------------------------------------------------

    let mut matches = hits
        .into_iter()
        .map(|(genome_name, count)| GenomeMatch {
            genome_name,
            percent_match: count as f64 / total_fragments as f64 * 100.0,
        })
        .filter(|genome_match| genome_match.percent_match > percent_threshold)
        .collect::<Vec<GenomeMatch>>();

    matches.sort_by(GenomeMatch::ranking);

    debug!(
        code = TelemetryCode::UCRELATED0002.to_string(),
        genomes = matches.len(),
        "End related genomes search"
    );

    Ok(SearchResponse::from_results(matches))
}
