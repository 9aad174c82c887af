use std::fs;
use std::path::Path;

use anyhow::Context;
use clap::ValueEnum;

use crate::account::Account;
use crate::client::LobbyClient;
use crate::config::AuthStyle;

/// The four diagnostic GET endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TimedEndpoint {
    LobbyResults,
    CurrentLobby,
    MyProfile,
    Players,
}

impl TimedEndpoint {
    pub fn path(self) -> &'static str {
        match self {
            TimedEndpoint::LobbyResults => "lobbies/results",
            TimedEndpoint::CurrentLobby => "lobbies/my/current_lobby",
            TimedEndpoint::MyProfile => "user/me",
            TimedEndpoint::Players => "players",
        }
    }

    /// Header construction observed against the real server: only the
    /// lobby-results call prefixed the stored credential with `Bearer `,
    /// the other three sent it verbatim. Kept as-is, not unified.
    pub fn default_auth_style(self) -> AuthStyle {
        match self {
            TimedEndpoint::LobbyResults => AuthStyle::Bearer,
            _ => AuthStyle::Raw,
        }
    }
}

/// For every account in the batch file, issue `repeat` timed GETs against
/// the endpoint and print the elapsed time. Purely diagnostic: bodies are
/// discarded and nothing is asserted about the responses.
pub async fn time_endpoint(
    client: &LobbyClient,
    endpoint: TimedEndpoint,
    batch_file: &Path,
    style: AuthStyle,
    repeat: usize,
) -> anyhow::Result<()> {
    let raw = fs::read_to_string(batch_file)
        .with_context(|| format!("read batch file {}", batch_file.display()))?;
    let accounts: Vec<Account> =
        serde_json::from_str(&raw).context("parse batch file")?;

    for account in &accounts {
        let auth = style.header_value(&account.token);
        for _ in 0..repeat {
            let elapsed = client.timed_get(endpoint.path(), &auth).await?;
            println!(
                "endpoint={} email={} elapsed_ms={}",
                endpoint.path(),
                account.email,
                elapsed.as_millis()
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::TimedEndpoint;
    use crate::config::AuthStyle;

    #[test]
    fn endpoint_paths_match_the_service() {
        assert_eq!(TimedEndpoint::LobbyResults.path(), "lobbies/results");
        assert_eq!(TimedEndpoint::CurrentLobby.path(), "lobbies/my/current_lobby");
        assert_eq!(TimedEndpoint::MyProfile.path(), "user/me");
        assert_eq!(TimedEndpoint::Players.path(), "players");
    }

    #[test]
    fn only_lobby_results_defaults_to_bearer_prefixing() {
        assert_eq!(
            TimedEndpoint::LobbyResults.default_auth_style(),
            AuthStyle::Bearer
        );
        assert_eq!(TimedEndpoint::CurrentLobby.default_auth_style(), AuthStyle::Raw);
        assert_eq!(TimedEndpoint::MyProfile.default_auth_style(), AuthStyle::Raw);
        assert_eq!(TimedEndpoint::Players.default_auth_style(), AuthStyle::Raw);
    }
}
