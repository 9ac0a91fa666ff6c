use super::{library::LibraryArguments, print_records};
use crate::dtos::telemetry_code::TelemetryCode;

use anyhow::{bail, Error, Result};
use clap::Parser;
use gmatch_core::{
    domain::dtos::{
        file_or_stdin::FileOrStdin, genome::Genome,
        genome_match::GenomeMatch, output_format::OutputFormat,
    },
    use_cases::find_related_genomes,
};
use serde::Serialize;
use tracing::info;

#[derive(Parser, Debug)]
pub(crate) struct Arguments {
    /// Query genomes
    ///
    /// A genome file with one or more records. If the value is "-", the
    /// genomes are read from STDIN.
    #[clap(default_value = "-")]
    pub(super) query: FileOrStdin,

    #[command(flatten)]
    pub(super) library: LibraryArguments,

    /// Fragment length
    ///
    /// The length of the query windows searched in the library. Defaults to
    /// twice the minimum search length.
    #[arg(long)]
    pub(super) fragment_length: Option<usize>,

    /// Match percentage threshold
    ///
    /// Only genomes matching strictly more than this percentage (0 to 100) of
    /// the query windows are reported.
    #[arg(short, long, default_value = "0")]
    pub(super) threshold: f64,

    /// Allow SNiPs
    ///
    /// Tolerate a single substituted base in each window match.
    #[arg(short = 's', long, default_value = "false")]
    pub(super) allow_snips: bool,

    /// Output format
    #[arg(long, short = 'f', default_value = "tsv")]
    pub(super) out_format: OutputFormat,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RelatedGenome {
    query: String,

    #[serde(flatten)]
    genome_match: GenomeMatch,
}

pub(crate) fn find_related_cmd(args: Arguments) -> Result<()> {
    if !(0.0..=100.0).contains(&args.threshold) {
        bail!("Percentage must be in the range 0 to 100.");
    }

    let queries = args.query.genomes()?;
    let index = args.library.build_index()?;

    let fragment_length = args
        .fragment_length
        .unwrap_or(2 * index.minimum_search_length());

    let mut related = Vec::<RelatedGenome>::new();

    for query in queries.iter() {
        let matches = find_related_genomes(
            &index,
            query,
            fragment_length,
            !args.allow_snips,
            args.threshold,
        )
        .map_err(|err| Error::msg(err.to_string()))?
        .into_results();

        if matches.is_empty() {
            info!(
                code = TelemetryCode::CLIQUERY0001.to_string(),
                query = query.name(),
                "No related genomes were found"
            );
        }

        related.extend(matches.into_iter().map(|genome_match| {
            RelatedGenome {
                query: query.name().to_owned(),
                genome_match,
            }
        }));
    }

    print_records(
        &related,
        &args.out_format,
        "query\tgenomeName\tpercentMatch",
        |record: &RelatedGenome| {
            format!(
                "{}\t{}\t{:.2}",
                record.query,
                record.genome_match.genome_name,
                record.genome_match.percent_match
            )
        },
    )
}
