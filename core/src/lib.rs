//! Approximate DNA fragment search over a set of indexed genomes.
//!
//! Genomes are indexed by every window of a fixed length in an
//! [`ApproximateTrie`](domain::dtos::approximate_trie::ApproximateTrie). The
//! use cases search fragments tolerating a single substituted base and rank
//! genomes by their similarity with a query genome.

/// Here resides the domain logic of the application.
pub mod domain;

/// Here resides the use cases of the application.
pub mod use_cases;
