use serde::{Deserialize, Serialize};

use crate::mass::ResidueTable;
use crate::peptide::Peptide;
use crate::Error;

/// Which theoretical spectrum to generate for a peptide
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Fragments of the peptide read as an open chain
    Linear,
    /// Fragments of the peptide closed into a ring, including those that
    /// wrap around the junction between the last and first residue
    Cyclic,
}

/// Cumulative masses of the first `i` residues, for `i` in `0..=len`
pub fn prefix_masses(peptide: &Peptide, table: &ResidueTable) -> Result<Vec<u32>, Error> {
    let mut prefix = Vec::with_capacity(peptide.len() + 1);
    let mut cumulative_mass = 0u32;
    prefix.push(cumulative_mass);
    for &residue in peptide.iter() {
        cumulative_mass = cumulative_mass
            .checked_add(table.mass(residue)?)
            .ok_or(Error::MassOverflow)?;
        prefix.push(cumulative_mass);
    }
    Ok(prefix)
}

/// Generate the sorted theoretical spectrum of `peptide`.
///
/// * [`Kind::Linear`] yields `n(n+1)/2 + 1` masses
/// * [`Kind::Cyclic`] yields `n(n-1) + 2` masses (`[0]` for the empty peptide)
pub fn theoretical_spectrum(
    peptide: &Peptide,
    table: &ResidueTable,
    kind: Kind,
) -> Result<Vec<u32>, Error> {
    let prefix = prefix_masses(peptide, table)?;
    Ok(from_prefix(&prefix, kind))
}

pub fn linear_spectrum(peptide: &Peptide, table: &ResidueTable) -> Result<Vec<u32>, Error> {
    theoretical_spectrum(peptide, table, Kind::Linear)
}

pub fn cyclic_spectrum(peptide: &Peptide, table: &ResidueTable) -> Result<Vec<u32>, Error> {
    theoretical_spectrum(peptide, table, Kind::Cyclic)
}

fn from_prefix(prefix: &[u32], kind: Kind) -> Vec<u32> {
    let n = prefix.len() - 1;
    let total = prefix[n];
    let capacity = match kind {
        Kind::Linear => n * (n + 1) / 2 + 1,
        Kind::Cyclic if n == 0 => 1,
        Kind::Cyclic => n * (n - 1) + 2,
    };

    let mut spectrum = Vec::with_capacity(capacity);
    spectrum.push(0);
    for i in 0..n {
        for j in i + 1..=n {
            let fragment = prefix[j] - prefix[i];
            spectrum.push(fragment);
            // Fragments touching neither terminus have a complement that
            // spans the ring closure
            if kind == Kind::Cyclic && i > 0 && j < n {
                spectrum.push(total - fragment);
            }
        }
    }
    spectrum.sort_unstable();
    spectrum
}

#[cfg(test)]
mod test {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn table() -> ResidueTable {
        ResidueTable::new([('A', 71), ('C', 103)]).unwrap()
    }

    /// Map arbitrary bytes onto a short peptide over the standard alphabet
    fn peptide(bytes: &[u8]) -> (Peptide, ResidueTable) {
        let table = ResidueTable::default();
        let alphabet = table.iter().map(|(c, _)| *c).collect::<Vec<_>>();
        let peptide = bytes
            .iter()
            .take(16)
            .map(|b| alphabet[*b as usize % alphabet.len()])
            .collect();
        (peptide, table)
    }

    #[test]
    fn prefix() {
        let prefix = prefix_masses(&"ACA".into(), &table()).unwrap();
        assert_eq!(prefix, vec![0, 71, 174, 245]);
    }

    #[test]
    fn linear_aca() {
        let spectrum = linear_spectrum(&"ACA".into(), &table()).unwrap();
        assert_eq!(spectrum, vec![0, 71, 71, 103, 174, 174, 245]);
    }

    #[test]
    fn cyclic_aca() {
        // "C" at positions 1..2 is the only internal fragment; its complement
        // "AA" wraps around the ring
        let spectrum = cyclic_spectrum(&"ACA".into(), &table()).unwrap();
        assert_eq!(spectrum, vec![0, 71, 71, 103, 142, 174, 174, 245]);
    }

    #[test]
    fn cyclic_textbook() {
        let table = ResidueTable::default();
        let spectrum = cyclic_spectrum(&"NKEI".into(), &table).unwrap();
        assert_eq!(
            spectrum,
            vec![0, 113, 114, 128, 129, 227, 242, 242, 257, 355, 356, 370, 371, 484]
        );
    }

    #[test]
    fn empty_and_single() {
        let empty = Peptide::default();
        assert_eq!(linear_spectrum(&empty, &table()).unwrap(), vec![0]);
        assert_eq!(cyclic_spectrum(&empty, &table()).unwrap(), vec![0]);

        let single = Peptide::from("C");
        assert_eq!(linear_spectrum(&single, &table()).unwrap(), vec![0, 103]);
        assert_eq!(cyclic_spectrum(&single, &table()).unwrap(), vec![0, 103]);
    }

    #[test]
    fn unknown_residue() {
        assert_eq!(
            cyclic_spectrum(&"ACG".into(), &table()),
            Err(Error::UnknownResidue('G'))
        );
    }

    #[test]
    fn mass_overflow() {
        let table = ResidueTable::new([('A', 3_000_000_000)]).unwrap();
        assert_eq!(prefix_masses(&"A".into(), &table), Ok(vec![0, 3_000_000_000]));
        assert_eq!(
            linear_spectrum(&"AA".into(), &table),
            Err(Error::MassOverflow)
        );
    }

    #[quickcheck]
    fn linear_spectrum_size(bytes: Vec<u8>) -> bool {
        let (peptide, table) = peptide(&bytes);
        let n = peptide.len();
        let total = table.peptide_mass(&peptide).unwrap();
        let spectrum = linear_spectrum(&peptide, &table).unwrap();

        spectrum.len() == n * (n + 1) / 2 + 1
            && spectrum[0] == 0
            && spectrum[spectrum.len() - 1] == total
            && spectrum.windows(2).all(|w| w[0] <= w[1])
    }

    #[quickcheck]
    fn cyclic_spectrum_size(bytes: Vec<u8>) -> bool {
        let (peptide, table) = peptide(&bytes);
        let n = peptide.len();
        if n == 0 {
            return true;
        }
        let total = table.peptide_mass(&peptide).unwrap();
        let spectrum = cyclic_spectrum(&peptide, &table).unwrap();

        spectrum.len() == n * (n - 1) + 2
            && spectrum.iter().filter(|&&m| m == 0).count() == 1
            && spectrum.iter().filter(|&&m| m == total).count() == 1
            && spectrum.windows(2).all(|w| w[0] <= w[1])
    }
}
