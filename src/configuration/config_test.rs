use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use serial_test::serial;

use super::Config;
use super::ConfigKey;
use crate::application::cli;

fn write_config(contents: &str) -> Result<tempfile::NamedTempFile> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    file.write_all(contents.as_bytes())?;
    return Ok(file);
}

#[test]
fn it_serializes_to_valid_toml() {
    let res = Config::serialize_default(cli::build());
    let toml_res = res.parse::<toml_edit::Document>();

    assert!(toml_res.is_ok());
    assert!(res.contains("api-url = \"http://localhost:5000\""));
    assert!(res.contains("health-check-interval = 30000"));
    assert!(res.contains("request-timeout = 300000"));
    assert!(!res.contains("config-file"));
}

#[tokio::test]
#[serial]
async fn it_loads_defaults_without_config_file() -> Result<()> {
    let matches = cli::build().try_get_matches_from(vec![
        "lexchat",
        "-c",
        "./does-not-exist/config.toml",
    ])?;
    Config::load(vec![&matches]).await?;

    assert_eq!(Config::get(ConfigKey::ApiURL), "http://localhost:5000");
    assert_eq!(
        Config::get_duration(ConfigKey::HealthCheckInterval)?,
        Duration::from_secs(30)
    );
    return Ok(());
}

#[tokio::test]
#[serial]
async fn it_loads_config_from_file() -> Result<()> {
    let file = write_config("api-url = \"http://legal.internal:8080\"\nrequest-timeout = 1500\n")?;
    let path = file.path().to_string_lossy().to_string();
    let matches = cli::build().try_get_matches_from(vec!["lexchat", "chat", "-c", &path])?;
    let (_, chat_matches) = matches.subcommand().unwrap();
    Config::load(vec![&matches, chat_matches]).await?;

    assert_eq!(Config::get(ConfigKey::ApiURL), "http://legal.internal:8080");
    assert_eq!(
        Config::get_duration(ConfigKey::RequestTimeout)?,
        Duration::from_millis(1500)
    );
    return Ok(());
}

#[tokio::test]
#[serial]
async fn it_prefers_flags_over_config_file() -> Result<()> {
    let file = write_config("api-url = \"http://legal.internal:8080\"\n")?;
    let path = file.path().to_string_lossy().to_string();
    let matches = cli::build().try_get_matches_from(vec![
        "lexchat",
        "-c",
        &path,
        "--api-url",
        "http://127.0.0.1:5001",
    ])?;
    Config::load(vec![&matches]).await?;

    assert_eq!(Config::get(ConfigKey::ApiURL), "http://127.0.0.1:5001");
    return Ok(());
}

#[tokio::test]
#[serial]
async fn it_fails_on_non_numeric_timeouts() -> Result<()> {
    let file = write_config("health-check-interval = \"soon\"\n")?;
    let path = file.path().to_string_lossy().to_string();
    let matches = cli::build().try_get_matches_from(vec!["lexchat", "-c", &path])?;
    let res = Config::load(vec![&matches]).await;

    assert!(res.is_err());
    return Ok(());
}

#[tokio::test]
#[serial]
async fn it_fails_on_invalid_toml() -> Result<()> {
    let file = write_config("api-url = \n")?;
    let path = file.path().to_string_lossy().to_string();
    let matches = cli::build().try_get_matches_from(vec!["lexchat", "-c", &path])?;
    let res = Config::load(vec![&matches]).await;

    assert!(res.is_err());
    return Ok(());
}
