use rayon::prelude::*;

use crate::fragment::Kind;
use crate::heap::nth_highest;
use crate::peptide::Peptide;
use crate::scoring::Scorer;
use crate::Error;

/// Keep the candidates whose linear score is at least the `n`-th highest
/// linear score on the leaderboard.
///
/// Candidates tied with the cutoff are all retained, so the result may be
/// larger than `n`. Leaderboards with at most `n` entries are returned
/// unchanged, and the relative order of surviving candidates is preserved.
///
/// Linear rather than cyclic scores are used: candidates are partial
/// peptides, and wrap-around fragments only exist once the ring is complete.
pub fn trim<T>(leaderboard: Vec<T>, scorer: &Scorer<'_>, n: usize) -> Result<Vec<T>, Error>
where
    T: AsRef<Peptide> + Sync,
{
    let n = n.max(1);
    if leaderboard.len() <= n {
        return Ok(leaderboard);
    }

    // Scores are collected in leaderboard order, regardless of how rayon
    // splits the work
    let scores = leaderboard
        .par_iter()
        .map(|candidate| scorer.score(candidate.as_ref(), Kind::Linear))
        .collect::<Result<Vec<usize>, Error>>()?;

    let mut ranked = scores.clone();
    let threshold = match nth_highest(&mut ranked, n) {
        Some(threshold) => threshold,
        None => return Ok(leaderboard),
    };

    let before = leaderboard.len();
    let trimmed = leaderboard
        .into_iter()
        .zip(scores)
        .filter(|(_, score)| *score >= threshold)
        .map(|(candidate, _)| candidate)
        .collect::<Vec<_>>();

    log::trace!(
        "trimmed leaderboard from {} to {} candidates (linear score >= {})",
        before,
        trimmed.len(),
        threshold
    );
    Ok(trimmed)
}
