//! Basic usage example

use envload::LoadEnv;

#[derive(Debug, Default, LoadEnv)]
struct Config {
    // Loaded from LOG_PREFIX, empty when unset
    #[env("LOG_PREFIX")]
    pub log_prefix: String,

    // Loaded from PORT, 8888 when unset or empty
    #[env("PORT,8888")]
    pub port: i64,

    // Loaded from DEVELOPMENT, false when unset
    #[env("DEVELOPMENT")]
    pub development: bool,
}

fn main() -> anyhow::Result<()> {
    // Set environment variables for demonstration
    std::env::set_var("LOG_PREFIX", "svc");
    std::env::remove_var("PORT");

    // Load configuration in place
    let mut config = Config::default();
    envload::load_env(&mut config)?;

    println!("Configuration loaded:");
    println!("  Log prefix: {}", config.log_prefix);
    println!("  Port: {}", config.port);
    println!("  Development: {}", config.development);

    Ok(())
}
