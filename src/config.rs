//! Configuration for the console shells.

use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use crate::{ConstantsProvider, Error, GroupParameters, Result};

/// Default location of the TOML configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "config/zkp.toml";

/// Which group the shells run over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GroupChoice {
    /// Embedded 1024-bit group with 160-bit order.
    Modp1024,
    /// The 23/11 toy group. Demonstration only.
    Toy,
}

/// How the second generator of the 1024-bit group is derived.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BetaDerivation {
    /// From the embedded demo exponent; reproducible across runs.
    Fixed,
    /// From an exponent drawn at startup and then discarded.
    Random,
}

/// Shell configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Group selection.
    pub group: GroupChoice,
    /// Derivation of `beta` for the 1024-bit group.
    pub beta: BetaDerivation,
    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            group: GroupChoice::Modp1024,
            beta: BetaDerivation::Fixed,
            log_filter: "warn".to_string(),
        }
    }
}

impl ShellConfig {
    /// Loads configuration from the default TOML file and environment variables.
    ///
    /// Configuration priority: environment variables > TOML file > defaults.
    pub fn from_env() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_PATH)
    }

    /// Loads configuration from `path` and `ZKP_*` environment variables.
    ///
    /// A missing file is not an error; defaults apply.
    pub fn load(path: &str) -> Result<Self> {
        use figment::providers::{Env, Format, Serialized, Toml};
        use figment::Figment;

        Figment::from(Serialized::defaults(ShellConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("ZKP_"))
            .extract()
            .map_err(|e| Error::Config(e.to_string()))
    }

    /// Builds the configured group parameters.
    pub fn group_parameters<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Result<GroupParameters> {
        match (self.group, self.beta) {
            (GroupChoice::Toy, _) => Ok(GroupParameters::toy()),
            (GroupChoice::Modp1024, BetaDerivation::Fixed) => ConstantsProvider::generate(),
            (GroupChoice::Modp1024, BetaDerivation::Random) => {
                ConstantsProvider::generate_with_rng(rng)
            }
        }
    }
}
