use std::{
    env, io,
    path::{Path, PathBuf},
};

use crate::error::SiteError;

use super::Tier;

pub const PUBLIC_DIR: &str = "public";
pub const DEST_CONFIG_NAME: &str = "netlify.toml";

/// Paths touched by a single deploy, all rooted at `base_dir`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePaths {
    pub base_dir: PathBuf,
    pub config_file: PathBuf,
    pub dest_config: PathBuf,
}

impl SitePaths {
    pub fn new(base_dir: impl Into<PathBuf>, tier: Tier) -> Self {
        let base_dir = base_dir.into();
        let config_file = base_dir.join(tier.config_file_name());
        let dest_config = base_dir.join(PUBLIC_DIR).join(DEST_CONFIG_NAME);

        SitePaths {
            base_dir,
            config_file,
            dest_config,
        }
    }

    /// Directory holding the running executable.
    pub fn program_dir() -> Result<PathBuf, SiteError> {
        let exe = env::current_exe().map_err(SiteError::ProgramDir)?;
        exe.parent().map(Path::to_path_buf).ok_or_else(|| {
            SiteError::ProgramDir(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} has no parent directory", exe.display()),
            ))
        })
    }
}
