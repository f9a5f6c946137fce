use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub retention: RetentionConfig,
}

/// Caps for the append-only series. `None` means unbounded, which matches the
/// wire contract; a cap keeps the most recent N entries of a series.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RetentionConfig {
    pub max_log_entries: Option<usize>,
    pub max_cpu_samples: Option<usize>,
    pub max_process_cpu_samples: Option<usize>,
}

impl AppConfig {
    /// Load from CONFIG_FILE (default "config.toml"). A missing file yields
    /// the defaults: everything unbounded.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        match std::fs::read_to_string(&path) {
            Ok(s) => Self::load_from_str(&s),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(anyhow::anyhow!("read {}: {}", path, e)),
        }
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if let Some(n) = self.retention.max_log_entries {
            anyhow::ensure!(n > 0, "retention.max_log_entries must be > 0, got {}", n);
        }
        if let Some(n) = self.retention.max_cpu_samples {
            anyhow::ensure!(n > 0, "retention.max_cpu_samples must be > 0, got {}", n);
        }
        if let Some(n) = self.retention.max_process_cpu_samples {
            anyhow::ensure!(
                n > 0,
                "retention.max_process_cpu_samples must be > 0, got {}",
                n
            );
        }
        Ok(())
    }
}
