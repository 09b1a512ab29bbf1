use std::cmp::Ordering;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::fragment::Kind;
use crate::leaderboard::trim;
use crate::mass::ResidueTable;
use crate::peptide::Peptide;
use crate::scoring::Scorer;
use crate::spectrum::Spectrum;
use crate::Error;

#[derive(Deserialize, Serialize, Default, Clone, Debug)]
/// Parameters used for leaderboard sequencing
pub struct Builder {
    /// Number of top-scoring candidates carried between rounds (ties at the
    /// cutoff are always kept)
    pub retain: Option<usize>,
}

impl Builder {
    pub fn make_parameters(self) -> Parameters {
        Parameters {
            retain: self.retain.map(|n| n.max(1)).unwrap_or(1000),
        }
    }

    pub fn update_retain(&mut self, retain: usize) {
        self.retain = Some(retain)
    }
}

#[derive(Serialize, Copy, Clone, Debug, PartialEq, Eq)]
pub struct Parameters {
    pub retain: usize,
}

impl Parameters {
    pub fn build<'db>(self, table: &'db ResidueTable, target: &'db Spectrum) -> Sequencer<'db> {
        Sequencer {
            scorer: Scorer::new(table, target),
            parameters: self,
        }
    }
}

/// Best full-length candidate found by a sequencing run
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Leader {
    pub peptide: Peptide,
    /// Cyclic score against the target spectrum
    pub score: usize,
    /// Candidates found after the leader with the same cyclic score, in the
    /// order they were generated
    pub equivalent: Vec<Peptide>,
}

/// Counters accumulated over a sequencing run
#[derive(Serialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Number of expand/filter/trim rounds
    pub rounds: usize,
    /// Candidates generated by expansion
    pub expanded: usize,
    /// Candidates discarded for exceeding the parent mass
    pub pruned: usize,
    /// Candidates whose mass equals the parent mass
    pub full_mass: usize,
    /// Candidates removed by leaderboard trimming
    pub trimmed: usize,
}

#[derive(Clone, Debug, Default)]
struct Candidate {
    peptide: Peptide,
    mass: u32,
}

impl AsRef<Peptide> for Candidate {
    fn as_ref(&self) -> &Peptide {
        &self.peptide
    }
}

pub struct Sequencer<'db> {
    scorer: Scorer<'db>,
    pub parameters: Parameters,
}

impl<'db> Sequencer<'db> {
    /// Run leaderboard sequencing, returning the best cyclic peptide whose
    /// mass equals the parent mass of the target spectrum
    pub fn run(&self) -> Result<Leader, Error> {
        self.run_with_stats().map(|(leader, _)| leader)
    }

    pub fn run_with_stats(&self) -> Result<(Leader, Stats), Error> {
        let parent_mass = self.scorer.target.parent_mass();
        log::debug!(
            "sequencing against parent mass {} with {} residues, retaining {} candidates",
            parent_mass,
            self.scorer.table.len(),
            self.parameters.retain
        );

        let mut stats = Stats::default();
        let mut leader: Option<Leader> = None;
        let mut leaderboard = vec![Candidate::default()];

        while !leaderboard.is_empty() {
            stats.rounds += 1;
            let generated = leaderboard.len() * self.scorer.table.len();
            let expanded = self.expand(&leaderboard);
            stats.expanded += generated;
            // Children whose mass overflows `u32` are dropped by `expand`
            stats.pruned += generated - expanded.len();

            // Bound: masses only grow, so anything heavier than the parent
            // mass can never become a solution. Candidates at the parent mass
            // are complete: they compete for the lead, but are neither trimmed
            // against nor extended further
            let mut candidates = Vec::with_capacity(expanded.len());
            let mut full_mass = Vec::new();
            for candidate in expanded {
                match candidate.mass.cmp(&parent_mass) {
                    Ordering::Greater => stats.pruned += 1,
                    Ordering::Equal => full_mass.push(candidate.peptide),
                    Ordering::Less => candidates.push(candidate),
                }
            }
            stats.full_mass += full_mass.len();

            let scores = full_mass
                .par_iter()
                .map(|peptide| self.scorer.score(peptide, Kind::Cyclic))
                .collect::<Result<Vec<_>, Error>>()?;

            // Fold in generation order, so the first of several equal-scoring
            // candidates keeps the lead
            for (peptide, score) in full_mass.iter().zip(scores) {
                let best = leader.as_ref().map_or(0, |current| current.score);
                if score > best {
                    log::debug!(
                        "round {}: new leader {} (score {} > {})",
                        stats.rounds,
                        peptide,
                        score,
                        best
                    );
                    leader = Some(Leader {
                        peptide: peptide.clone(),
                        score,
                        equivalent: Vec::new(),
                    });
                } else if score == best {
                    if let Some(current) = leader.as_mut() {
                        current.equivalent.push(peptide.clone());
                    }
                }
            }

            if candidates.is_empty() {
                log::trace!(
                    "round {}: no candidate remains below the parent mass",
                    stats.rounds
                );
                break;
            }

            let before = candidates.len();
            leaderboard = trim(candidates, &self.scorer, self.parameters.retain)?;
            stats.trimmed += before - leaderboard.len();

            log::trace!(
                "round {}: {} candidates remain, {} at parent mass",
                stats.rounds,
                leaderboard.len(),
                full_mass.len()
            );
        }

        log::debug!(
            "sequencing finished after {} rounds: {} candidates expanded, {} pruned, {} trimmed",
            stats.rounds,
            stats.expanded,
            stats.pruned,
            stats.trimmed
        );

        leader.map(|leader| (leader, stats)).ok_or(Error::NoSolution)
    }

    /// Append every residue in the table to every candidate. Output order is
    /// candidate-major, then table order. Children whose mass would overflow
    /// are skipped
    fn expand(&self, leaderboard: &[Candidate]) -> Vec<Candidate> {
        let table = self.scorer.table;
        leaderboard
            .par_iter()
            .flat_map_iter(|candidate| {
                table.iter().filter_map(move |&(residue, mass)| {
                    Some(Candidate {
                        peptide: candidate.peptide.extend(residue),
                        mass: candidate.mass.checked_add(mass)?,
                    })
                })
            })
            .collect()
    }
}
