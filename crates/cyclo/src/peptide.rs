use serde::{Serialize, Serializer};

/// An ordered sequence of residue symbols.
///
/// Peptides are plain values: growing one produces a new peptide and leaves
/// the original untouched, so candidates on a leaderboard never alias.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Peptide {
    sequence: Vec<char>,
}

impl Peptide {
    /// Return a new peptide with `residue` appended to the C-terminal end
    pub fn extend(&self, residue: char) -> Peptide {
        let mut sequence = Vec::with_capacity(self.sequence.len() + 1);
        sequence.extend_from_slice(&self.sequence);
        sequence.push(residue);
        Peptide { sequence }
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, char> {
        self.sequence.iter()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.sequence
    }
}

impl AsRef<Peptide> for Peptide {
    fn as_ref(&self) -> &Peptide {
        self
    }
}

impl From<&str> for Peptide {
    fn from(s: &str) -> Self {
        Peptide {
            sequence: s.chars().collect(),
        }
    }
}

impl FromIterator<char> for Peptide {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Peptide {
            sequence: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Peptide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use std::fmt::Write;
        for &c in &self.sequence {
            f.write_char(c)?;
        }
        Ok(())
    }
}

impl Serialize for Peptide {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
