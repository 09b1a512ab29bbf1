use fnv::FnvHashMap;
use serde::Serialize;

use crate::peptide::Peptide;
use crate::Error;

/// Integer residue masses of the 20 proteinogenic amino acids
pub const STANDARD_AA: [(char, u32); 20] = [
    ('G', 57),
    ('A', 71),
    ('S', 87),
    ('P', 97),
    ('V', 99),
    ('T', 101),
    ('C', 103),
    ('I', 113),
    ('L', 113),
    ('N', 114),
    ('D', 115),
    ('K', 128),
    ('Q', 128),
    ('E', 129),
    ('M', 131),
    ('H', 137),
    ('F', 147),
    ('R', 156),
    ('Y', 163),
    ('W', 186),
];

/// Mapping of one-letter residue symbols to positive integer masses.
///
/// Insertion order is preserved: it is the order in which the sequencer
/// appends residues to candidates, and therefore decides which of several
/// equal-scoring peptides is found first.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResidueTable {
    residues: Vec<(char, u32)>,
    #[serde(skip_serializing)]
    lookup: FnvHashMap<char, u32>,
}

impl ResidueTable {
    /// Build a table from (symbol, mass) pairs, in order
    pub fn new<I>(residues: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (char, u32)>,
    {
        let mut table = ResidueTable {
            residues: Vec::new(),
            lookup: FnvHashMap::default(),
        };
        for (symbol, mass) in residues {
            if mass == 0 {
                return Err(Error::InvalidResidue { symbol, mass });
            }
            if table.lookup.insert(symbol, mass).is_some() {
                return Err(Error::DuplicateResidue(symbol));
            }
            table.residues.push((symbol, mass));
        }
        Ok(table)
    }

    /// Parse a residue table with one `symbol mass` pair per line.
    /// Blank lines and lines starting with `#` are ignored
    pub fn parse(contents: &str) -> Result<Self, Error> {
        let mut residues = Vec::new();
        for (idx, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let err = |message: String| Error::Parse {
                line: idx + 1,
                message,
            };

            let mut fields = line.split_ascii_whitespace();
            let (symbol, mass) = match (fields.next(), fields.next(), fields.next()) {
                (Some(symbol), Some(mass), None) => (symbol, mass),
                _ => return Err(err(format!("expected `symbol mass`, found `{}`", line))),
            };

            let mut chars = symbol.chars();
            let symbol = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => return Err(err(format!("residue symbol `{}` is not a single character", symbol))),
            };
            let mass = mass
                .parse::<u32>()
                .map_err(|e| err(format!("invalid mass `{}`: {}", mass, e)))?;
            residues.push((symbol, mass));
        }
        Self::new(residues)
    }

    /// Remove every symbol whose mass was already claimed by an earlier symbol,
    /// e.g. `L` is dropped when `I` precedes it.
    pub fn deduplicate_masses(self) -> Self {
        let mut seen = Vec::with_capacity(self.residues.len());
        let residues = self
            .residues
            .into_iter()
            .filter(|(symbol, mass)| {
                if seen.contains(mass) {
                    log::trace!("dropping residue `{}`: mass {} is ambiguous", symbol, mass);
                    false
                } else {
                    seen.push(*mass);
                    true
                }
            })
            .collect::<Vec<_>>();
        let lookup = residues.iter().copied().collect();
        ResidueTable { residues, lookup }
    }

    /// Mass of a single residue
    pub fn mass(&self, residue: char) -> Result<u32, Error> {
        self.lookup
            .get(&residue)
            .copied()
            .ok_or(Error::UnknownResidue(residue))
    }

    /// Total mass of a peptide
    pub fn peptide_mass(&self, peptide: &Peptide) -> Result<u32, Error> {
        peptide.iter().try_fold(0u32, |total, &c| {
            total.checked_add(self.mass(c)?).ok_or(Error::MassOverflow)
        })
    }

    /// Render a peptide as its residue masses joined by `-`, e.g. `113-128-186`
    pub fn mass_notation(&self, peptide: &Peptide) -> Result<String, Error> {
        Ok(peptide
            .iter()
            .map(|&c| self.mass(c).map(|m| m.to_string()))
            .collect::<Result<Vec<_>, _>>()?
            .join("-"))
    }

    /// Iterate over (symbol, mass) pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = &(char, u32)> + '_ {
        self.residues.iter()
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}

/// The standard table with mass-ambiguous residues removed: `I` stands in
/// for `L`, and `K` for `Q`
impl Default for ResidueTable {
    fn default() -> Self {
        ResidueTable {
            residues: STANDARD_AA.to_vec(),
            lookup: STANDARD_AA.iter().copied().collect(),
        }
        .deduplicate_masses()
    }
}
