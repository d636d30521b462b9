use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// Deployment environment, selects which netlify file gets published.
#[derive(ValueEnum, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Dev,
    Prod,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Dev => "dev",
            Tier::Prod => "prod",
        }
    }

    pub fn config_file_name(&self) -> String {
        format!("netlify_{}.toml", self.as_str())
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
