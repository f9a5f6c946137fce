use anyhow::Result;
use hostwatch::*;
use std::io::BufRead;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

/// Replays a JSON-lines feed of push messages into a HostState and prints
/// the resulting snapshot. The feed comes from a file argument or stdin.
fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let arg = std::env::args().nth(1);
    if arg.as_deref() == Some("--version") {
        println!("{} {}", version::NAME, version::VERSION);
        return Ok(());
    }

    let app_config = config::AppConfig::load()?;
    let mut host = state::HostState::with_retention(app_config.retention.clone());

    let stdin = std::io::stdin();
    let reader: Box<dyn BufRead> = match &arg {
        Some(path) => Box::new(std::io::BufReader::new(std::fs::File::open(path)?)),
        None => Box::new(stdin.lock()),
    };

    let mut replayed: u64 = 0;
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        // The feed is the transport here: malformed lines are skipped, the
        // state layer itself stays strict.
        match serde_json::from_str::<models::Envelope>(&line) {
            Ok(envelope) => {
                tracing::debug!(kind = ?envelope.kind, line = idx + 1, "dispatching message");
                match host.handle_envelope(envelope) {
                    Ok(()) => replayed += 1,
                    Err(e) => {
                        tracing::warn!(error = %e, line = idx + 1, "message content rejected");
                    }
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, line = idx + 1, "skipping malformed feed line");
            }
        }
    }

    tracing::info!(
        messages_replayed = replayed,
        processes = host.processes().len(),
        disks = host.disks().len(),
        "replay complete"
    );
    println!("{}", serde_json::to_string_pretty(&host.snapshot())?);
    Ok(())
}
