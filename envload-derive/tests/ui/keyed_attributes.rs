// Keyed annotations combined with a struct-level prefix

use envload::LoadEnv;
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Default, LoadEnv)]
#[env(prefix = "SVC_")]
struct Config {
    #[env(name = "DB")]
    database_url: String,

    #[env(default = "250ms")]
    timeout: Duration,
}

fn main() {
    let env = HashMap::from([("SVC_DB".to_string(), "postgres://db".to_string())]);
    let config: Config = envload::from_env_with(&env).unwrap();

    assert_eq!(config.database_url, "postgres://db");
    assert_eq!(config.timeout, Duration::from_millis(250));
}
