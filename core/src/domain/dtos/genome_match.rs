use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// The share of a query genome covered by fragments of an indexed genome.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenomeMatch {
    pub genome_name: String,

    /// Percentage (0 to 100) of the query fragments found in the genome.
    pub percent_match: f64,
}

impl GenomeMatch {
    /// Ranking order: higher percentages first, then genome names in
    /// ascending order.
    pub fn ranking(&self, other: &GenomeMatch) -> Ordering {
        other
            .percent_match
            .total_cmp(&self.percent_match)
            .then_with(|| self.genome_name.cmp(&other.genome_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genome_match(name: &str, percent_match: f64) -> GenomeMatch {
        GenomeMatch {
            genome_name: name.to_string(),
            percent_match,
        }
    }

    #[test]
    fn test_ranking() {
        let mut matches = vec![
            genome_match("b", 50.0),
            genome_match("c", 75.0),
            genome_match("a", 50.0),
            genome_match("d", 100.0),
        ];

        matches.sort_by(GenomeMatch::ranking);

        let names: Vec<&str> =
            matches.iter().map(|m| m.genome_name.as_str()).collect();

        assert_eq!(names, ["d", "c", "a", "b"]);
    }
}
