pub mod fragment;
pub mod heap;
pub mod leaderboard;
pub mod mass;
pub mod peptide;
pub mod scoring;
pub mod sequencer;
pub mod spectrum;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A peptide contains a symbol that is not present in the residue table
    UnknownResidue(char),
    /// Target spectrum contains no masses, so there is no parent mass
    InvalidSpectrum,
    /// The leaderboard emptied before any candidate reached the parent mass
    NoSolution,
    /// Residue masses must be strictly positive
    InvalidResidue { symbol: char, mass: u32 },
    DuplicateResidue(char),
    /// Summed residue masses do not fit in a `u32`
    MassOverflow,
    /// Malformed residue table or spectrum text (1-based line number)
    Parse { line: usize, message: String },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownResidue(c) => write!(f, "unknown residue `{}`", c),
            Self::InvalidSpectrum => f.write_str("target spectrum is empty"),
            Self::NoSolution => {
                f.write_str("no candidate peptide reached the parent mass of the spectrum")
            }
            Self::InvalidResidue { symbol, mass } => {
                write!(f, "residue `{}` has invalid mass {}", symbol, mass)
            }
            Self::DuplicateResidue(c) => write!(f, "residue `{}` is defined more than once", c),
            Self::MassOverflow => f.write_str("peptide mass exceeds the supported range"),
            Self::Parse { line, message } => write!(f, "line {}: {}", line, message),
        }
    }
}

impl std::error::Error for Error {}
