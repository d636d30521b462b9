use crate::error::SiteError;
use crate::logging::Logger;
use crate::utils::file_utils::ConfigFs;
use crate::DryRunConfig;

use super::SitePaths;

/// Publish the tier's netlify file to `public/netlify.toml`.
///
/// Nothing is written when the source file is missing or in dry-run mode.
pub fn deploy_config<F: ConfigFs>(
    paths: &SitePaths,
    fs: &F,
    dry_run: &DryRunConfig,
    logger: &Logger,
) -> Result<(), SiteError> {
    logger.info(&format!("Base directory: {}", paths.base_dir.display()));
    logger.debug(&format!("Source: {}", paths.config_file.display()));
    logger.debug(&format!("Destination: {}", paths.dest_config.display()));

    if !fs.is_file(&paths.config_file) {
        return Err(SiteError::MissingConfig {
            base_dir: paths.base_dir.clone(),
            config_file: paths.config_file.clone(),
        });
    }

    if dry_run.is_dry_run {
        logger.warning(&format!(
            "Dry run: Would copy {} to {}",
            paths.config_file.display(),
            paths.dest_config.display()
        ));
        return Ok(());
    }

    let bytes = fs
        .copy(&paths.config_file, &paths.dest_config)
        .map_err(|source| SiteError::Copy {
            from: paths.config_file.clone(),
            to: paths.dest_config.clone(),
            source,
        })?;

    logger.success(&format!(
        "Copied {} to {} ({} bytes)",
        paths.config_file.display(),
        paths.dest_config.display(),
        bytes
    ));

    Ok(())
}
