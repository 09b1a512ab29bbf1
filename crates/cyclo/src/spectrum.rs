use std::cmp::Ordering;

use serde::Serialize;

use crate::Error;

/// A multiset of integer masses, sorted in ascending order
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Spectrum {
    masses: Vec<u32>,
}

impl Spectrum {
    /// Build a spectrum from experimental masses. Duplicates are kept, since
    /// they count separately when scoring
    pub fn new(mut masses: Vec<u32>) -> Result<Self, Error> {
        if masses.is_empty() {
            return Err(Error::InvalidSpectrum);
        }
        masses.sort_unstable();
        Ok(Spectrum { masses })
    }

    /// Parse whitespace-separated integer masses
    pub fn parse(contents: &str) -> Result<Self, Error> {
        let mut masses = Vec::new();
        for (idx, line) in contents.lines().enumerate() {
            for token in line.split_ascii_whitespace() {
                let mass = token.parse::<u32>().map_err(|e| Error::Parse {
                    line: idx + 1,
                    message: format!("invalid mass `{}`: {}", token, e),
                })?;
                masses.push(mass);
            }
        }
        Self::new(masses)
    }

    /// Largest mass in the spectrum, presumed to be the mass of the intact peptide
    pub fn parent_mass(&self) -> u32 {
        // `new` guarantees at least one mass
        self.masses[self.masses.len() - 1]
    }

    /// Size of the multiset intersection with a sorted theoretical spectrum:
    /// each mass contributes the smaller of its two multiplicities
    pub fn shared_masses(&self, theoretical: &[u32]) -> usize {
        intersection(theoretical, &self.masses)
    }

    /// Is every mass of `theoretical` (with multiplicity) present in `self`?
    pub fn contains_all(&self, theoretical: &[u32]) -> bool {
        intersection(theoretical, &self.masses) == theoretical.len()
    }

    pub fn masses(&self) -> &[u32] {
        &self.masses
    }

    pub fn len(&self) -> usize {
        self.masses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }
}

/// Merge two sorted slices, counting matched pairs
fn intersection(lhs: &[u32], rhs: &[u32]) -> usize {
    debug_assert!(lhs.windows(2).all(|w| w[0] <= w[1]));
    let (mut i, mut j, mut shared) = (0, 0, 0);
    while i < lhs.len() && j < rhs.len() {
        match lhs[i].cmp(&rhs[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                shared += 1;
                i += 1;
                j += 1;
            }
        }
    }
    shared
}
