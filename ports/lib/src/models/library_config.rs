use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The genome library to index before running a query.
///
/// Structure when deserialized from YAML:
///
/// ```yaml
/// minSearchLength: 10
/// genomes:
///   - data/Ferroplasma_acidarmanus.txt
///   - data/Halorubrum_chaoviator.txt
/// ```
///
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LibraryConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_search_length: Option<usize>,

    /// Genome files, relative paths resolved against the configuration file
    /// directory.
    #[serde(default)]
    pub genomes: Vec<PathBuf>,
}

impl LibraryConfig {
    pub fn from_yaml_file(file: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(file)?;
        let mut config: LibraryConfig = serde_yaml::from_str(&content)?;

        if let Some(base) = file.parent() {
            config.genomes = config
                .genomes
                .into_iter()
                .map(|genome| match genome.is_relative() {
                    true => base.join(genome),
                    false => genome,
                })
                .collect();
        }

        Ok(config)
    }

    /// Merge command line values into the configuration.
    ///
    /// Genome files are appended and a given minimum search length replaces
    /// the configured one.
    pub fn with_overrides(
        mut self,
        genomes: &[PathBuf],
        min_search_length: Option<usize>,
    ) -> Self {
        self.genomes.extend(genomes.iter().cloned());

        if min_search_length.is_some() {
            self.min_search_length = min_search_length;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_yaml_file_resolves_relative_paths() -> Result<()> {
        let dir = std::env::temp_dir()
            .join(format!("gmatch-{}-config", std::process::id()));
        std::fs::create_dir_all(&dir)?;

        let file = dir.join("library.yaml");
        std::fs::write(
            &file,
            "minSearchLength: 12\ngenomes:\n  - a.txt\n  - /data/b.txt\n",
        )?;

        let config = LibraryConfig::from_yaml_file(&file)?;
        std::fs::remove_dir_all(&dir)?;

        assert_eq!(config.min_search_length, Some(12));
        assert_eq!(
            config.genomes,
            vec![dir.join("a.txt"), PathBuf::from("/data/b.txt")]
        );

        Ok(())
    }

    #[test]
    fn test_with_overrides() {
        let config = LibraryConfig {
            min_search_length: Some(12),
            genomes: vec![PathBuf::from("a.txt")],
        };

        let merged = config
            .clone()
            .with_overrides(&[PathBuf::from("b.txt")], None);
        assert_eq!(merged.min_search_length, Some(12));
        assert_eq!(
            merged.genomes,
            vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]
        );

        let merged = config.with_overrides(&[], Some(8));
        assert_eq!(merged.min_search_length, Some(8));
    }
}
