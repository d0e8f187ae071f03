//! Implementing `LoadEnv` by hand instead of deriving it

use envload::{Field, LoadEnv, LoadError};
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Default)]
struct Config {
    pub workers: usize,
    pub poll_interval: Duration,
    pub verbose: bool,
}

impl LoadEnv for Config {
    fn fields(&mut self) -> Result<Vec<Field<'_>>, LoadError> {
        Ok(vec![
            Field::new("workers", &mut self.workers).annotation("WORKERS,4"),
            Field::new("poll_interval", &mut self.poll_interval)
                .env_var("POLL_INTERVAL")
                .default("500ms"),
            Field::new("verbose", &mut self.verbose),
        ])
    }
}

fn main() -> anyhow::Result<()> {
    // A fake environment; the process environment is left alone
    let env = HashMap::from([("VERBOSE".to_string(), "1".to_string())]);

    let mut config = Config::default();
    envload::load_env_from(&mut config, &env)?;

    println!("Configuration loaded from a map:");
    println!("  Workers: {}", config.workers);
    println!("  Poll interval: {:?}", config.poll_interval);
    println!("  Verbose: {}", config.verbose);

    Ok(())
}
