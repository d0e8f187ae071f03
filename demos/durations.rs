//! Duration fields example

use envload::LoadEnv;
use std::time::Duration;

#[derive(Debug, Default, LoadEnv)]
struct Config {
    // Accepts values like 300ms, 1.5h or 2h30m
    #[env("TIMEOUT")]
    pub timeout: Duration,

    #[env("IDLE_TIMEOUT,90s")]
    pub idle_timeout: Duration,

    // Unset durations are zero
    pub grace_period: Duration,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("TIMEOUT", "2h30m");

    let config: Config = envload::from_env()?;

    println!("Timeouts:");
    println!("  Timeout: {:?}", config.timeout);
    println!("  Idle timeout: {:?}", config.idle_timeout);
    println!("  Grace period: {:?}", config.grace_period);

    // Invalid text is reported with the field, the text and the expected kind
    std::env::set_var("TIMEOUT", "ten minutes");
    if let Err(e) = envload::from_env::<Config>() {
        println!("Rejected: {e}");
    }

    Ok(())
}
