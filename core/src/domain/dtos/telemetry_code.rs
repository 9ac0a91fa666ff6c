use serde::Serialize;
use std::fmt::Display;

#[derive(Clone, Debug, Serialize)]
#[serde(untagged, rename_all = "UPPERCASE")]
pub(crate) enum TelemetryCode {
    // ? -----------------------------------------------------------------------
    // ? Reserved codes to the genome index
    //
    /// A genome was added and its windows were indexed
    ///
    DTINDEX0001,
    // ? -----------------------------------------------------------------------

    // ? -----------------------------------------------------------------------
    // ? Reserved codes to the find_genomes_with_this_dna use case
    //
    /// Fragment search started
    ///
    UCFIND0001,
    //
    /// Fragment search ended
    ///
    UCFIND0002,
    //
    /// Trie candidates were collected for the fragment prefix
    ///
    UCFIND0003,
    //
    /// A candidate was discarded during verification
    ///
    UCFIND0004,
    // ? -----------------------------------------------------------------------

    // ? -----------------------------------------------------------------------
    // ? Reserved codes to the find_related_genomes use case
    //
    /// Related genomes search started
    ///
    UCRELATED0001,
    //
    /// Related genomes search ended
    ///
    UCRELATED0002,
    //
    /// Query windows were scored against the index
    ///
    UCRELATED0003,
    // ? -----------------------------------------------------------------------
}

impl Display for TelemetryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
