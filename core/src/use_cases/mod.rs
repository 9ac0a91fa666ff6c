/// This module contains the use case to find every indexed genome holding a
/// DNA fragment, exactly or with a single substitution.
mod find_genomes_with_this_dna;

/// This module contains the use case to rank indexed genomes by the share of
/// a query genome they cover.
mod find_related_genomes;

pub use find_genomes_with_this_dna::*;
pub use find_related_genomes::*;
