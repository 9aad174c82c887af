use std::path::PathBuf;

use anyhow::bail;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::error;

use crate::client::LobbyClient;
use crate::config::TargetConfig;
use crate::generator;

/// Spawn `workers` concurrent generator tasks, worker `i` writing to
/// `<prefix>_<i>.json`, then join them all. Workers share nothing mutable;
/// one failed worker is logged and does not stop the others.
pub async fn run_workers(
    config: &TargetConfig,
    workers: usize,
    per_worker: usize,
    prefix: &str,
) -> anyhow::Result<()> {
    let client = LobbyClient::new(config)?;

    let mut tasks = Vec::with_capacity(workers);
    for index in 0..workers {
        let client = client.clone();
        let path = PathBuf::from(format!("{prefix}_{index}.json"));
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(index as u64)),
            None => StdRng::from_os_rng(),
        };
        tasks.push(tokio::spawn(async move {
            generator::generate_batch(&client, &mut rng, per_worker, &path).await
        }));
    }

    let mut registered = 0usize;
    let mut failed = 0usize;
    for (index, task) in tasks.into_iter().enumerate() {
        match task.await {
            Ok(Ok(report)) => registered += report.registered,
            Ok(Err(err)) => {
                error!(worker = index, error = %err, "worker failed");
                failed += 1;
            }
            Err(err) => {
                error!(worker = index, error = %err, "worker panicked");
                failed += 1;
            }
        }
    }

    println!("workers={workers}");
    println!("registered={registered}");
    println!("failed_workers={failed}");

    if failed > 0 {
        bail!("{failed} of {workers} workers failed");
    }
    Ok(())
}
