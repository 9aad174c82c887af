use clap::ValueEnum;

/// Run-wide settings passed into every component instead of living in
/// process-wide constants.
#[derive(Clone, Debug)]
pub struct TargetConfig {
    /// Base URL of the service under test.
    pub base_url: String,
    /// Deterministic seed for synthetic account data; worker `i` derives
    /// its own seed from `seed + i`. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

/// How a stored credential is placed in the Authorization header.
///
/// The original tooling built the header inconsistently across call sites;
/// both behaviors are kept as named options rather than silently unified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AuthStyle {
    /// Prepend `Bearer ` to the stored credential.
    Bearer,
    /// Send the stored credential verbatim.
    Raw,
}

impl AuthStyle {
    pub fn header_value(self, credential: &str) -> String {
        match self {
            AuthStyle::Bearer => format!("Bearer {credential}"),
            AuthStyle::Raw => credential.to_string(),
        }
    }
}
