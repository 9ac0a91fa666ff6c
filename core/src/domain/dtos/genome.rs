use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Characters accepted in a genome sequence.
pub const DNA_ALPHABET: [char; 5] = ['A', 'C', 'G', 'T', 'N'];

/// The capability the genome index consumes.
///
/// The index never inspects how a genome is stored. It only asks for its name,
/// its length and contiguous windows of it.
pub trait Genome {
    fn name(&self) -> &str;

    fn length(&self) -> usize;

    /// Extract `length` bases starting at `position`.
    ///
    /// Returns `None` when `position + length` exceeds the genome length.
    fn extract(&self, position: usize, length: usize) -> Option<&str>;
}

#[derive(Debug, Error, PartialEq)]
pub enum GenomeError {
    #[error("genome name should not be empty")]
    EmptyName,

    #[error("invalid character `{character}` in genome {name}")]
    InvalidCharacter { name: String, character: char },
}

/// An in-memory genome with an upper-cased sequence over {A,C,G,T,N}.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NamedGenome {
    name: String,
    sequence: String,
}

impl NamedGenome {
    pub fn new<T, S>(name: T, sequence: S) -> Result<Self, GenomeError>
    where
        T: Into<String>,
        S: AsRef<str>,
    {
        let name = name.into();

        if name.is_empty() {
            return Err(GenomeError::EmptyName);
        }

        let sequence = Self::normalize_sequence(&name, sequence.as_ref())?;

        Ok(NamedGenome { name, sequence })
    }

    /// Upper-case a raw sequence and check its alphabet.
    ///
    /// # Example
    ///
    /// ```
    /// use gmatch_core::domain::dtos::genome::NamedGenome;
    ///
    /// assert_eq!(
    ///     NamedGenome::normalize_sequence("g1", "acgtN").unwrap(),
    ///     "ACGTN"
    /// );
    /// assert!(NamedGenome::normalize_sequence("g1", "ACGU").is_err());
    /// ```
    ///
    pub fn normalize_sequence(
        name: &str,
        sequence: &str,
    ) -> Result<String, GenomeError> {
        sequence
            .chars()
            .map(|c| c.to_ascii_uppercase())
            .map(|c| match DNA_ALPHABET.contains(&c) {
                true => Ok(c),
                false => Err(GenomeError::InvalidCharacter {
                    name: name.to_owned(),
                    character: c,
                }),
            })
            .collect()
    }

    pub fn sequence(&self) -> &str {
        &self.sequence
    }
}

impl Genome for NamedGenome {
    fn name(&self) -> &str {
        &self.name
    }

    fn length(&self) -> usize {
        self.sequence.len()
    }

    fn extract(&self, position: usize, length: usize) -> Option<&str> {
        let end = position.checked_add(length)?;

        if end > self.sequence.len() {
            return None;
        }

        Some(&self.sequence[position..end])
    }
}
