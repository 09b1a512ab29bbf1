use std::path::PathBuf;

use anyhow::{ensure, Context};
use clap::ArgMatches;
use cyclo_core::sequencer::{Builder, Parameters};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Clone, Debug)]
/// Actual sequencing parameters - may include overrides or default values not set by user
pub struct Search {
    pub version: String,
    pub sequencer: Parameters,
    /// Residue table file, or `None` for the built-in amino acid table
    pub residues: Option<String>,
    pub deduplicate_masses: bool,
    pub spectrum: String,

    #[serde(skip_serializing)]
    pub output_directory: PathBuf,
}

#[derive(Deserialize, Default, Debug)]
/// Input parameters deserialized from JSON file
pub struct Input {
    pub sequencer: Option<Builder>,
    pub residues: Option<String>,
    pub deduplicate_masses: Option<bool>,
    pub spectrum: Option<String>,
    pub output_directory: Option<String>,
}

impl Input {
    pub fn from_arguments(matches: ArgMatches) -> anyhow::Result<Self> {
        let path = matches
            .get_one::<String>("parameters")
            .expect("required parameters");
        let mut input = Input::load(path)
            .with_context(|| format!("Failed to read parameters from `{path}`"))?;

        // Handle JSON configuration overrides
        if let Some(output_directory) = matches.get_one::<String>("output_directory") {
            log::trace!("overriding `output_directory` parameter.");
            input.output_directory = Some(output_directory.into());
        }
        if let Some(residues) = matches.get_one::<String>("residues") {
            log::trace!("overriding `residues` parameter.");
            input.residues = Some(residues.into());
        }
        if let Some(spectrum) = matches.get_one::<String>("spectrum") {
            log::trace!("overriding `spectrum` parameter.");
            input.spectrum = Some(spectrum.into());
        }
        if let Some(retain) = matches.get_one::<usize>("retain").copied() {
            log::trace!("overriding `sequencer.retain` parameter.");
            input
                .sequencer
                .get_or_insert_with(Builder::default)
                .update_retain(retain);
        }

        ensure!(
            input.spectrum.is_some(),
            "`spectrum` must be set. For more information try '--help'"
        );

        Ok(input)
    }

    pub fn load<S: AsRef<str>>(path: S) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        serde_json::from_str(&contents).map_err(anyhow::Error::from)
    }

    pub fn build(self) -> anyhow::Result<Search> {
        let sequencer = self.sequencer.unwrap_or_default().make_parameters();
        if sequencer.retain < 10 {
            log::warn!(
                "`sequencer.retain` is {}: a narrow leaderboard is likely to lose the true peptide",
                sequencer.retain
            );
        }

        let spectrum = self
            .spectrum
            .context("`spectrum` must be set. For more information try '--help'")?;

        let output_directory = match self.output_directory {
            Some(path) => {
                let path = PathBuf::from(path);
                std::fs::create_dir_all(&path).with_context(|| {
                    format!("Failed to create output directory `{}`", path.display())
                })?;
                path
            }
            None => std::env::current_dir()?,
        };

        Ok(Search {
            version: clap::crate_version!().into(),
            sequencer,
            residues: self.residues,
            deduplicate_masses: self.deduplicate_masses.unwrap_or(true),
            spectrum,
            output_directory,
        })
    }
}
