pub mod approximate_trie;
pub mod dna_match;
pub mod file_or_stdin;
pub mod genome;
pub mod genome_index;
pub mod genome_match;
pub mod output_format;
pub mod search_response;

pub(crate) mod telemetry_code;
