use super::{library::LibraryArguments, print_records};
use crate::dtos::telemetry_code::TelemetryCode;

use anyhow::{bail, Error, Result};
use clap::Parser;
use gmatch_core::{
    domain::dtos::{
        dna_match::DnaMatch, genome::NamedGenome,
        output_format::OutputFormat, search_response::SearchResponse,
    },
    use_cases::find_genomes_with_this_dna,
};
use tracing::info;

#[derive(Parser, Debug)]
pub(crate) struct Arguments {
    /// The DNA sequence to search for
    pub(super) sequence: String,

    #[command(flatten)]
    pub(super) library: LibraryArguments,

    /// Minimum match length
    ///
    /// Matches shorter than this length are discarded. Defaults to the minimum
    /// search length.
    #[arg(short, long)]
    pub(super) min_match_length: Option<usize>,

    /// Allow SNiPs
    ///
    /// Tolerate a single substituted base in each match.
    #[arg(short = 's', long, default_value = "false")]
    pub(super) allow_snips: bool,

    /// Output format
    #[arg(long, short = 'f', default_value = "tsv")]
    pub(super) out_format: OutputFormat,
}

pub(crate) fn find_dna_cmd(args: Arguments) -> Result<()> {
    let sequence = NamedGenome::normalize_sequence("query", &args.sequence)?;
    let index = args.library.build_index()?;

    if sequence.len() < index.minimum_search_length() {
        bail!(
            "DNA sequence length must be at least {}",
            index.minimum_search_length()
        );
    }

    let min_match_length = args
        .min_match_length
        .unwrap_or(index.minimum_search_length());

    if min_match_length > sequence.len() {
        bail!("Minimum match length must be at most the sequence length.");
    }

    let matches = match find_genomes_with_this_dna(
        &index,
        &sequence,
        min_match_length,
        !args.allow_snips,
    )
    .map_err(|err| Error::msg(err.to_string()))?
    {
        SearchResponse::Found(matches) => matches,
        SearchResponse::NotFound => {
            info!(
                code = TelemetryCode::CLIQUERY0001.to_string(),
                "No matches of {sequence} were found"
            );

            Vec::new()
        }
    };

    print_records(
        &matches,
        &args.out_format,
        "genomeName\tposition\tlength",
        |dna_match: &DnaMatch| {
            format!(
                "{}\t{}\t{}",
                dna_match.genome_name, dna_match.position, dna_match.length
            )
        },
    )
}
