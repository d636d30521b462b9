pub use self::deploy::deploy_config;
pub use self::paths::SitePaths;
pub use self::tier::Tier;

mod deploy;
mod paths;
mod tier;
