use serde::{Deserialize, Serialize};

/// The best match of a DNA fragment inside a single genome.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DnaMatch {
    /// The name of the genome containing the match.
    pub genome_name: String,

    /// The zero-based start position of the match inside the genome.
    pub position: usize,

    /// The number of fragment bases covered by the match.
    pub length: usize,
}

impl DnaMatch {
    /// Whether `self` should replace `other` as the best match of a genome.
    ///
    /// Longer matches win. On a length tie the earlier position wins.
    pub fn supersedes(&self, other: &DnaMatch) -> bool {
        self.length > other.length
            || (self.length == other.length && self.position < other.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dna_match(position: usize, length: usize) -> DnaMatch {
        DnaMatch {
            genome_name: "g1".to_string(),
            position,
            length,
        }
    }

    #[test]
    fn test_supersedes() {
        assert!(dna_match(10, 8).supersedes(&dna_match(0, 7)));
        assert!(dna_match(0, 8).supersedes(&dna_match(4, 8)));
        assert!(!dna_match(4, 8).supersedes(&dna_match(0, 8)));
        assert!(!dna_match(0, 7).supersedes(&dna_match(10, 8)));
        assert!(!dna_match(3, 7).supersedes(&dna_match(3, 7)));
    }

    #[test]
    fn test_serialize_as_camel_case() {
        let content = serde_json::to_string(&dna_match(4, 12)).unwrap();

        assert_eq!(
            content,
            r#"{"genomeName":"g1","position":4,"length":12}"#
        );
    }
}
