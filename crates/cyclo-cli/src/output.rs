use anyhow::Context;
use cyclo_core::peptide::Peptide;
use cyclo_core::sequencer::{Leader, Stats};
use serde::Serialize;

use crate::input::Search;
use crate::runner::Runner;

#[derive(Serialize)]
struct Results<'a> {
    search: &'a Search,
    leader: &'a Leader,
    stats: &'a Stats,
}

impl Runner {
    pub fn serialize_peptide(
        &self,
        peptide: &Peptide,
        score: usize,
        rank: usize,
    ) -> anyhow::Result<csv::ByteRecord> {
        let mut record = csv::ByteRecord::new();
        record.push_field(peptide.to_string().as_bytes());
        record.push_field(self.table.mass_notation(peptide)?.as_bytes());
        record.push_field(itoa::Buffer::new().format(score).as_bytes());
        record.push_field(itoa::Buffer::new().format(rank).as_bytes());
        Ok(record)
    }

    /// Write `results.tsv`: the leader first, followed by equal-scoring peptides
    /// in the order they were found
    pub fn write_tsv(&self, leader: &Leader) -> anyhow::Result<()> {
        let path = self.parameters.output_directory.join("results.tsv");
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .from_path(&path)
            .with_context(|| format!("Failed to create `{}`", path.display()))?;

        let headers = csv::ByteRecord::from(vec!["peptide", "masses", "score", "rank"]);
        wtr.write_byte_record(&headers)?;

        let peptides = std::iter::once(&leader.peptide).chain(leader.equivalent.iter());
        for (idx, peptide) in peptides.enumerate() {
            let record = self.serialize_peptide(peptide, leader.score, idx + 1)?;
            wtr.write_byte_record(&record)?;
        }
        wtr.flush()?;

        log::info!("wrote {}", path.display());
        Ok(())
    }

    /// Write `results.json`, containing the effective parameters and result
    pub fn write_json(&self, leader: &Leader, stats: &Stats) -> anyhow::Result<()> {
        let path = self.parameters.output_directory.join("results.json");
        let results = Results {
            search: &self.parameters,
            leader,
            stats,
        };
        let bytes = serde_json::to_vec_pretty(&results)?;
        std::fs::write(&path, bytes)
            .with_context(|| format!("Failed to write `{}`", path.display()))?;

        log::info!("wrote {}", path.display());
        Ok(())
    }
}
