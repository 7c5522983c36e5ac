//! Configuration loaded from the home directory and process environment.
//!
//! Everything runs in one test because it mutates process-wide variables.

use clap::Parser;
use sarvam_tts::TextToSpeechClient;
use sarvam_tts::cli::Args;
use sarvam_tts::config::{API_KEY_ENV, BASE_URL_ENV, Config, ConfigFile, Overrides};
use tempfile::TempDir;

fn set(name: &str, value: &str) {
    // SAFETY: this test binary runs a single test, so no other thread reads the environment.
    unsafe { std::env::set_var(name, value) }
}

fn unset(name: &str) {
    // SAFETY: see `set`.
    unsafe { std::env::remove_var(name) }
}

#[test]
fn test_config_layers_from_home_and_env() {
    let home = TempDir::new().unwrap();
    set("HOME", home.path().to_str().unwrap());
    unset(API_KEY_ENV);
    unset(BASE_URL_ENV);

    // No file and no environment: the key is missing.
    assert!(Config::load(Overrides::default()).is_err());
    assert!(TextToSpeechClient::from_env().is_err());

    let path = ConfigFile::default_path().unwrap();
    assert!(path.starts_with(home.path()));
    ConfigFile {
        api_key: Some("from-file".to_string()),
        base_url: Some("http://file.example".to_string()),
    }
    .save_to(&path)
    .unwrap();

    // File only.
    let config = Config::load(Overrides::default()).unwrap();
    assert_eq!(config.api_key(), "from-file");
    assert_eq!(config.base_url(), "http://file.example");

    // Environment wins over the file, field by field.
    set(API_KEY_ENV, "from-env");
    assert_eq!(
        Overrides::from_env(),
        Overrides {
            api_key: Some("from-env".to_string()),
            base_url: None,
        }
    );
    let config = Config::load(Overrides::default()).unwrap();
    assert_eq!(config.api_key(), "from-env");
    assert_eq!(config.base_url(), "http://file.example");

    let client = TextToSpeechClient::from_env().unwrap();
    assert_eq!(client.config().api_key(), "from-env");

    // Explicit values win over the environment.
    let explicit = Overrides {
        api_key: Some("from-flag".to_string()),
        base_url: None,
    };
    assert_eq!(Config::load(explicit).unwrap().api_key(), "from-flag");

    // Empty variables are ignored.
    set(BASE_URL_ENV, "");
    assert_eq!(Overrides::from_env().base_url, None);

    // The CLI reads the same variables.
    set(BASE_URL_ENV, "http://env.example/");
    let args = Args::try_parse_from(["sarvam-tts"]).unwrap();
    assert_eq!(args.api_key.as_deref(), Some("from-env"));
    assert_eq!(args.base_url.as_deref(), Some("http://env.example/"));
    let config = Config::load(args.overrides()).unwrap();
    assert_eq!(config.base_url(), "http://env.example");

    let args = Args::try_parse_from(["sarvam-tts", "--api-key", "from-flag"]).unwrap();
    assert_eq!(args.api_key.as_deref(), Some("from-flag"));

    unset(API_KEY_ENV);
    unset(BASE_URL_ENV);
}
