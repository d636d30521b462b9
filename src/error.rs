use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Make sure that the netlify files exist. base_dir={base_dir:?} config_file={config_file:?}")]
    MissingConfig {
        base_dir: PathBuf,
        config_file: PathBuf,
    },
    #[error("Failed to copy {from:?} to {to:?}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },
    #[error("Could not locate the program directory: {0}")]
    ProgramDir(#[source] io::Error),
}
