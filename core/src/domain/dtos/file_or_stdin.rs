///
/// An special congrats to `thepacketgeek`
/// (https://crates.io/users/thepacketgeek) for the clap-stdin code
/// (https://github.com/thepacketgeek/clap-stdin) used as a base for this
/// implementation.
///
///
use super::genome::{GenomeError, NamedGenome};

use std::io::{self, BufRead};
use std::str::FromStr;
use std::sync::atomic::AtomicBool;
use thiserror::Error;
static STDIN_HAS_BEEN_USED: AtomicBool = AtomicBool::new(false);

#[derive(Debug, Error)]
pub enum GenomeSourceError {
    #[error("stdin argument used more than once")]
    StdInRepeatedUse,

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("line {line}: sequence found before any genome header")]
    SequenceWithoutHeader { line: usize },

    #[error("line {line}: {source}")]
    InvalidGenome {
        line: usize,
        #[source]
        source: GenomeError,
    },

    #[error("no genome found in source")]
    Empty,
}

/// Source of the genomes will be either from `stdin` or a file path
#[derive(Clone)]
pub enum Source {
    Stdin,
    Arg(String),
}

impl FromStr for Source {
    type Err = GenomeSourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-" => {
                if STDIN_HAS_BEEN_USED
                    .load(std::sync::atomic::Ordering::Acquire)
                {
                    return Err(GenomeSourceError::StdInRepeatedUse);
                }
                STDIN_HAS_BEEN_USED
                    .store(true, std::sync::atomic::Ordering::SeqCst);
                Ok(Self::Stdin)
            }
            arg => Ok(Self::Arg(arg.to_owned())),
        }
    }
}

impl std::fmt::Debug for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Stdin => write!(f, "stdin"),
            Source::Arg(v) => v.fmt(f),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileOrStdin {
    pub source: Source,
}

impl FileOrStdin {
    /// Read every genome record of the source.
    pub fn genomes(&self) -> Result<Vec<NamedGenome>, GenomeSourceError> {
        parse_genomes(self.open_reader()?)
    }

    fn open_reader(&self) -> Result<impl BufRead, GenomeSourceError> {
        let input: Box<dyn std::io::Read + 'static> = match &self.source {
            Source::Stdin => Box::new(std::io::stdin()),
            Source::Arg(filepath) => {
                let f = std::fs::File::open(filepath)?;
                Box::new(f)
            }
        };

        Ok(std::io::BufReader::new(input))
    }

    pub fn from_file(file: &str) -> Self {
        Self {
            source: Source::Arg(file.to_string()),
        }
    }
}

impl FromStr for FileOrStdin {
    type Err = GenomeSourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let source = Source::from_str(s)?;
        Ok(Self { source })
    }
}

/// Parse genome records from a reader.
///
/// Each record is a header line starting with `>` followed by the genome
/// name, then zero or more sequence lines which are concatenated. Empty lines
/// are skipped.
///
/// # Example
///
/// ```
/// use gmatch_core::domain::dtos::{
///     file_or_stdin::parse_genomes, genome::Genome,
/// };
///
/// let content = ">g1\nACGT\nacgt\n>g2\nNNNN\n";
/// let genomes = parse_genomes(content.as_bytes()).unwrap();
///
/// assert_eq!(genomes.len(), 2);
/// assert_eq!(genomes[0].name(), "g1");
/// assert_eq!(genomes[0].extract(0, 8), Some("ACGTACGT"));
/// ```
///
pub fn parse_genomes<R: BufRead>(
    reader: R,
) -> Result<Vec<NamedGenome>, GenomeSourceError> {
    let mut genomes = Vec::<NamedGenome>::new();
    let mut header: Option<(usize, String)> = None;
    let mut sequence = String::new();

    let build = |line: usize, name: String, sequence: &str| {
        NamedGenome::new(name, sequence)
            .map_err(|source| GenomeSourceError::InvalidGenome { line, source })
    };

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        let line = line.trim_end();

        if line.is_empty() {
            continue;
        }

        if let Some(name) = line.strip_prefix('>') {
            if let Some((start, previous)) = header.take() {
                genomes.push(build(start, previous, &sequence)?);
                sequence.clear();
            }

            header = Some((line_number, name.to_owned()));
            continue;
        }

        if header.is_none() {
            return Err(GenomeSourceError::SequenceWithoutHeader {
                line: line_number,
            });
        }

        sequence.push_str(line);
    }

    if let Some((start, name)) = header {
        genomes.push(build(start, name, &sequence)?);
    }

    if genomes.is_empty() {
        return Err(GenomeSourceError::Empty);
    }

    Ok(genomes)
}
