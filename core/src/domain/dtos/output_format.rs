use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum OutputFormat {
    /// Tab separated values
    ///
    /// One result per line, human-readable.
    Tsv,

    /// JSON format
    Json,

    /// YAML format
    Yaml,
}
