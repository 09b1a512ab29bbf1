use super::input::Search;
use anyhow::Context;
use cyclo_core::mass::ResidueTable;
use cyclo_core::sequencer::{Leader, Stats};
use cyclo_core::spectrum::Spectrum;
use log::info;
use std::time::Instant;

pub struct Runner {
    pub table: ResidueTable,
    pub spectrum: Spectrum,
    pub parameters: Search,
    start: Instant,
}

impl Runner {
    pub fn new(parameters: Search) -> anyhow::Result<Self> {
        let start = Instant::now();

        let table = match &parameters.residues {
            Some(path) => {
                let contents = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read residue table `{}`", path))?;
                ResidueTable::parse(&contents)
                    .with_context(|| format!("Failed to parse residue table `{}`", path))?
            }
            None => ResidueTable::default(),
        };
        let table = match parameters.deduplicate_masses {
            true => table.deduplicate_masses(),
            false => table,
        };

        let contents = std::fs::read_to_string(&parameters.spectrum)
            .with_context(|| format!("Failed to read spectrum `{}`", parameters.spectrum))?;
        let spectrum = Spectrum::parse(&contents)
            .with_context(|| format!("Failed to parse spectrum `{}`", parameters.spectrum))?;

        info!(
            "loaded {} residues and {} masses (parent mass {}) in {:#?}",
            table.len(),
            spectrum.len(),
            spectrum.parent_mass(),
            start.elapsed()
        );

        Ok(Self {
            table,
            spectrum,
            parameters,
            start,
        })
    }

    /// Sequence the spectrum and write results to the output directory
    pub fn run(&self) -> anyhow::Result<Leader> {
        let (leader, stats) = self.sequence()?;

        self.write_json(&leader, &stats)?;
        self.write_tsv(&leader)?;

        info!("finished in {}s", self.start.elapsed().as_secs());
        Ok(leader)
    }

    pub fn sequence(&self) -> anyhow::Result<(Leader, Stats)> {
        let start = Instant::now();
        let sequencer = self
            .parameters
            .sequencer
            .build(&self.table, &self.spectrum);
        let (leader, stats) = sequencer
            .run_with_stats()
            .context("Sequencing did not produce a peptide")?;

        info!(
            "sequenced {} ({}) with score {}/{} in {:#?}",
            leader.peptide,
            self.table.mass_notation(&leader.peptide)?,
            leader.score,
            self.spectrum.len(),
            start.elapsed()
        );
        if !leader.equivalent.is_empty() {
            info!(
                "{} other candidates share the leading score",
                leader.equivalent.len()
            );
        }
        info!(
            "- {} rounds, {} candidates expanded, {} pruned by mass, {} trimmed",
            stats.rounds, stats.expanded, stats.pruned, stats.trimmed
        );

        Ok((leader, stats))
    }
}
