pub(crate) mod describe;
pub(crate) mod find_dna;
pub(crate) mod find_related;
pub(crate) mod library;

use anyhow::Result;
use gmatch_core::domain::dtos::output_format::OutputFormat;
use serde::Serialize;

/// Print records in the requested output format.
///
/// The `tsv` format prints `header` followed by one `to_row` line per record.
pub(super) fn print_records<T, F>(
    records: &[T],
    out_format: &OutputFormat,
    header: &str,
    to_row: F,
) -> Result<()>
where
    T: Serialize,
    F: Fn(&T) -> String,
{
    match out_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(records)?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(records)?);
        }
        OutputFormat::Tsv => {
            println!("{header}");
            for record in records {
                println!("{}", to_row(record));
            }
        }
    }

    Ok(())
}
