use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::{info, warn};

use crate::account::Account;
use crate::client::LobbyClient;

/// Re-login every account in a batch file and rewrite the file in place
/// (truncating write, unlike the generator's append). Accounts whose login
/// is rejected keep their stale token; only the reason is logged.
pub async fn refresh_tokens(client: &LobbyClient, path: &Path) -> anyhow::Result<()> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read batch file {}", path.display()))?;
    let mut accounts: Vec<Account> =
        serde_json::from_str(&raw).context("parse batch file")?;

    for account in &mut accounts {
        match client.login(&account.email, &account.password).await {
            Ok(token) => {
                info!(email = %account.email, "logged in");
                account.token = format!("Bearer {token}");
            }
            Err(err) if err.is_rejection() => {
                warn!(email = %account.email, error = %err, "login failed, keeping stale token");
            }
            Err(err) => return Err(err).context("user/login transport failure"),
        }
    }

    let body = serde_json::to_string_pretty(&accounts)?;
    fs::write(path, body)
        .with_context(|| format!("rewrite batch file {}", path.display()))?;
    Ok(())
}
