use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use rand::rngs::StdRng;
use tracing::{info, warn};

use crate::account::{self, Account};
use crate::client::LobbyClient;

pub struct BatchReport {
    pub attempted: usize,
    pub registered: usize,
}

/// Attempt `count` create+login sequences and flush the successful accounts
/// to `path` as one JSON array after all attempts finish.
///
/// Rejections (non-2xx create or login, missing token field) drop that one
/// account and the loop continues; transport failures abort the whole batch.
pub async fn generate_batch(
    client: &LobbyClient,
    rng: &mut StdRng,
    count: usize,
    path: &Path,
) -> anyhow::Result<BatchReport> {
    // Opened before the first attempt, like the original tooling: a worker
    // aborted mid-run still leaves an (empty) file behind.
    let mut file = open_batch_file(path)
        .with_context(|| format!("open batch file {}", path.display()))?;

    let mut accounts: Vec<Account> = Vec::new();

    for _ in 0..count {
        let profile = account::synthesize(rng);
        match client.create_account(&profile).await {
            Ok(elapsed) => println!("{}", timing_line("user/create", elapsed)),
            Err(err) if err.is_rejection() => {
                warn!(email = %profile.email, error = %err, "create rejected");
                continue;
            }
            Err(err) => return Err(err).context("user/create transport failure"),
        }

        match client.login(&profile.email, &profile.password).await {
            Ok(token) => {
                accounts.push(Account::from_profile(profile, format!("Bearer {token}")));
            }
            Err(err) if err.is_rejection() => {
                warn!(email = %profile.email, error = %err, "login rejected, dropping account");
            }
            Err(err) => return Err(err).context("user/login transport failure"),
        }
    }

    let report = BatchReport {
        attempted: count,
        registered: accounts.len(),
    };
    let body = serde_json::to_string_pretty(&accounts)?;
    file.write_all(body.as_bytes())
        .with_context(|| format!("write batch file {}", path.display()))?;
    info!(
        registered = report.registered,
        attempted = report.attempted,
        file = %path.display(),
        "batch finished"
    );
    Ok(report)
}

// Append mode mirrors the original tooling: the array is written only once,
// at the end of the run, but an existing file is not truncated first.
fn open_batch_file(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

fn timing_line(endpoint: &str, elapsed: Duration) -> String {
    format!("endpoint={endpoint} elapsed_ms={}", elapsed.as_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_lines_are_key_value_formatted() {
        assert_eq!(
            timing_line("user/create", Duration::from_millis(42)),
            "endpoint=user/create elapsed_ms=42"
        );
    }

    #[test]
    fn batch_file_exists_as_soon_as_it_is_opened() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("batch_0.json");
        open_batch_file(&path).unwrap();
        assert!(path.exists());
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);
    }
}
