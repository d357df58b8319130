//! Solver options shared across commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use crate::config::{SolverConfig, TieBreak, TranspositionPolicy};

/// Solver flags; a flag given on the command line overrides the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct SolverArgs {
    /// JSON file with solver settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Best-move labelling: prefer-immediate-win or all-optimal
    #[arg(long)]
    pub tie_break: Option<TieBreak>,

    /// Repeated positions: recompute (checked) or reuse (fast)
    #[arg(long)]
    pub transpositions: Option<TranspositionPolicy>,
}

impl SolverArgs {
    pub fn resolve(&self) -> Result<SolverConfig> {
        let mut config = match &self.config {
            Some(path) => SolverConfig::from_json_file(path)
                .with_context(|| format!("loading solver config from {}", path.display()))?,
            None => SolverConfig::default(),
        };
        if let Some(tie_break) = self.tie_break {
            config = config.with_tie_break(tie_break);
        }
        if let Some(transpositions) = self.transpositions {
            config = config.with_transpositions(transpositions);
        }
        debug!(?config, "resolved solver config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn flags_override_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"tie_break": "all-optimal", "transpositions": "reuse"}}"#).unwrap();

        let args = SolverArgs {
            config: Some(file.path().to_path_buf()),
            tie_break: None,
            transpositions: Some(TranspositionPolicy::Recompute),
        };
        let config = args.resolve().unwrap();
        assert_eq!(config.tie_break, TieBreak::AllOptimal);
        assert_eq!(config.transpositions, TranspositionPolicy::Recompute);
    }

    #[test]
    fn no_flags_gives_defaults() {
        let config = SolverArgs::default().resolve().unwrap();
        assert_eq!(config, SolverConfig::default());
    }
}
