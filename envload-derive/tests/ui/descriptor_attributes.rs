// Descriptor-style annotations, including a default-only descriptor

use envload::LoadEnv;
use std::collections::HashMap;

#[derive(Debug, Default, LoadEnv)]
pub struct Config {
    #[env("LOG_PREFIX")]
    pub log_prefix: String,

    #[env("PORT,8888")]
    pub port: i64,

    #[env = "DEVELOPMENT"]
    pub development: bool,

    #[env(",0.5")]
    pub sample_rate: f32,
}

fn main() {
    let env = HashMap::from([("LOG_PREFIX".to_string(), "svc".to_string())]);
    let config: Config = envload::from_env_with(&env).unwrap();

    assert_eq!(config.log_prefix, "svc");
    assert_eq!(config.port, 8888);
    assert!(!config.development);
    assert_eq!(config.sample_rate, 0.5);
}
