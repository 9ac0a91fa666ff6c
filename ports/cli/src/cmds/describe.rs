use super::library::LibraryArguments;

use anyhow::Result;
use clap::Parser;
use gmatch_core::domain::dtos::output_format::OutputFormat;
use std::collections::BTreeMap;

#[derive(Parser, Debug)]
pub(crate) struct Arguments {
    #[command(flatten)]
    pub(super) library: LibraryArguments,

    /// Output format
    #[arg(long, short = 'f', default_value = "tsv")]
    pub(super) out_format: OutputFormat,
}

pub(crate) fn describe_library_cmd(args: Arguments) -> Result<()> {
    let index = args.library.build_index()?;

    let mut stats = BTreeMap::new();

    stats.insert("GenomeCount", index.genome_count());
    stats.insert("IndexedWindows", index.indexed_windows());
    stats.insert("MinSearchLength", index.minimum_search_length());
    stats.insert("TrieNodes", index.trie_node_count());

    match args.out_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(&stats)?);
        }
        OutputFormat::Tsv => {
            for (k, v) in stats {
                println!("{}\t{}", k, v);
            }
        }
    }

    Ok(())
}
