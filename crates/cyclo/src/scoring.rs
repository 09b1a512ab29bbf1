use crate::fragment::{theoretical_spectrum, Kind};
use crate::mass::ResidueTable;
use crate::peptide::Peptide;
use crate::spectrum::Spectrum;
use crate::Error;

/// Compares theoretical spectra of candidate peptides against a fixed
/// experimental spectrum
#[derive(Copy, Clone, Debug)]
pub struct Scorer<'db> {
    pub table: &'db ResidueTable,
    pub target: &'db Spectrum,
}

impl<'db> Scorer<'db> {
    pub fn new(table: &'db ResidueTable, target: &'db Spectrum) -> Self {
        Scorer { table, target }
    }

    /// Number of theoretical masses shared with the target spectrum, counted
    /// with multiplicity: a mass occurring twice in both spectra scores 2
    pub fn score(&self, peptide: &Peptide, kind: Kind) -> Result<usize, Error> {
        let theoretical = theoretical_spectrum(peptide, self.table, kind)?;
        Ok(self.target.shared_masses(&theoretical))
    }

    /// Does the linear spectrum of `peptide` fit entirely inside the target?
    ///
    /// This is stricter than [`Scorer::score`]: a single theoretical mass
    /// missing from the target makes the peptide inconsistent. The sequencer
    /// does not filter on it, since noisy spectra routinely lack true masses.
    pub fn is_consistent(&self, peptide: &Peptide) -> Result<bool, Error> {
        let theoretical = theoretical_spectrum(peptide, self.table, Kind::Linear)?;
        Ok(self.target.contains_all(&theoretical))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fragment::cyclic_spectrum;
    use quickcheck_macros::quickcheck;

    fn target() -> Spectrum {
        Spectrum::new(vec![0, 113, 128, 186, 241, 299, 314, 427]).unwrap()
    }

    fn table() -> ResidueTable {
        ResidueTable::new([('L', 113), ('K', 128), ('W', 186)]).unwrap()
    }

    #[test]
    fn score_modes() {
        let (table, target) = (table(), target());
        let scorer = Scorer::new(&table, &target);

        assert_eq!(scorer.score(&"LKW".into(), Kind::Cyclic), Ok(8));
        // Linear LKW lacks the 299 (W+L) wrap-around fragment
        assert_eq!(scorer.score(&"LKW".into(), Kind::Linear), Ok(7));
        assert_eq!(scorer.score(&Peptide::default(), Kind::Linear), Ok(1));
        assert_eq!(scorer.score(&"WW".into(), Kind::Cyclic), Ok(2));
        assert_eq!(
            scorer.score(&"LKA".into(), Kind::Cyclic),
            Err(Error::UnknownResidue('A'))
        );
    }

    #[test]
    fn repeated_masses_count_separately() {
        let table = ResidueTable::new([('A', 71), ('C', 103)]).unwrap();
        let target = Spectrum::new(vec![0, 71, 71, 103, 142, 174, 174, 245]).unwrap();
        let scorer = Scorer::new(&table, &target);
        assert_eq!(scorer.score(&"ACA".into(), Kind::Cyclic), Ok(8));

        let sparse = Spectrum::new(vec![0, 71, 103, 245]).unwrap();
        let scorer = Scorer::new(&table, &sparse);
        assert_eq!(scorer.score(&"ACA".into(), Kind::Cyclic), Ok(4));
    }

    #[test]
    fn consistency() {
        let (table, target) = (table(), target());
        let scorer = Scorer::new(&table, &target);

        assert_eq!(scorer.is_consistent(&"LK".into()), Ok(true));
        assert_eq!(scorer.is_consistent(&"KW".into()), Ok(true));
        // 113 + 113 = 226 is absent
        assert_eq!(scorer.is_consistent(&"LL".into()), Ok(false));
        // 128 appears twice in the linear spectrum of KK, once in the target
        assert_eq!(scorer.is_consistent(&"K".into()), Ok(true));
        assert_eq!(scorer.is_consistent(&"KK".into()), Ok(false));
    }

    #[quickcheck]
    fn self_score_is_perfect(bytes: Vec<u8>) -> bool {
        let table = ResidueTable::default();
        let alphabet = table.iter().map(|(c, _)| *c).collect::<Vec<_>>();
        let peptide = bytes
            .iter()
            .take(12)
            .map(|b| alphabet[*b as usize % alphabet.len()])
            .collect::<Peptide>();

        let theoretical = cyclic_spectrum(&peptide, &table).unwrap();
        let expected = theoretical.len();
        let target = Spectrum::new(theoretical).unwrap();
        let scorer = Scorer::new(&table, &target);
        scorer.score(&peptide, Kind::Cyclic) == Ok(expected)
    }
}
