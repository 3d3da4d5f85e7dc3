use eyre::Result;
use nyxprep_lib::cli::{Command, FetchParams, ResolvedCommand, resolve_command};
use nyxprep_lib::config::{Config, FileDef, UpstreamConfig};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const UPSTREAM_VERSION: &str = "7.19";

/// Trimmed-down upstream header with the logging block the patch targets.
pub const SAMPLE_HEADER: &str = r#"#ifndef MONGOOSE_H
#define MONGOOSE_H

#define MG_VERSION "7.19"

enum { MG_LL_NONE, MG_LL_ERROR, MG_LL_INFO, MG_LL_DEBUG, MG_LL_VERBOSE };
extern int mg_log_level;

#if MG_ENABLE_LOG
#define MG_LOG(level, args)                                 \
  do {                                                      \
    if ((level) <= mg_log_level) {                          \
      mg_log_prefix((level), __FILE__, __LINE__, __func__); \
      mg_log args;                                          \
    }                                                       \
  } while (0)
#else
#define MG_LOG(level, args) \
  do {                      \
    if (0) mg_log args;     \
  } while (0)
#endif

#define MG_ERROR(args) MG_LOG(MG_LL_ERROR, args)
#define MG_INFO(args) MG_LOG(MG_LL_INFO, args)

#endif  // MONGOOSE_H
"#;

/// Trimmed-down upstream source without a logging block.
pub const SAMPLE_SOURCE: &str = r#"#include "mongoose.h"

int mg_log_level = MG_LL_INFO;

void mg_log_set(int log_level) {
  MG_DEBUG(("Setting log level to %d", log_level));
  mg_log_level = log_level;
}
"#;

pub fn upstream_path(version: &str, filename: &str) -> String {
    format!("/cesanta/mongoose/{version}/{filename}")
}

pub fn create_test_config(server_uri: &str, output_dir: &Path) -> Config {
    let mut config = Config::default();
    config.upstream = UpstreamConfig {
        url_template: format!("{server_uri}/{{organization}}/{{repository}}/{{version}}/{{filename}}"),
        files: vec![
            FileDef::Simple("mongoose.c".to_string()),
            FileDef::Simple("mongoose.h".to_string()),
        ],
        ..UpstreamConfig::default()
    };
    config.output.path = output_dir.to_path_buf();
    config
}

pub struct TestEnvironment {
    pub temp_dir: TempDir,
    pub config_path: PathBuf,
    pub output_dir: PathBuf,
}

pub fn setup_test_environment(server_uri: &str) -> Result<TestEnvironment> {
    setup_test_environment_with(server_uri, |_| {})
}

pub fn setup_test_environment_with(
    server_uri: &str,
    customize: impl FnOnce(&mut Config),
) -> Result<TestEnvironment> {
    let temp_dir = tempfile::tempdir()?;
    let output_dir = temp_dir.path().join("src").join("external");

    let mut config = create_test_config(server_uri, &output_dir);
    customize(&mut config);

    let config_path = temp_dir.path().join("config.json");
    std::fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;

    Ok(TestEnvironment {
        temp_dir,
        config_path,
        output_dir,
    })
}

pub fn build_fetch_params(config_path: &Path) -> Result<FetchParams> {
    build_fetch_params_with(config_path, None)
}

pub fn build_fetch_params_with(config_path: &Path, version_tag: Option<&str>) -> Result<FetchParams> {
    let command = Command::Fetch {
        config_path: Some(config_path.to_string_lossy().into_owned()),
        version_tag: version_tag.map(str::to_string),
        output_dir: None,
        require_patch: false,
        timeout_secs: None,
    };
    match resolve_command(command)? {
        ResolvedCommand::Fetch(params) => Ok(params),
        other => Err(eyre::eyre!("Resolved command type mismatch: {other:?}")),
    }
}

/// Mounts a GET mock for one upstream file that must be hit exactly `expected_calls` times.
pub async fn mount_upstream_file(
    server: &MockServer,
    filename: &str,
    response: ResponseTemplate,
    expected_calls: u64,
) {
    Mock::given(method("GET"))
        .and(path(upstream_path(UPSTREAM_VERSION, filename)))
        .respond_with(response)
        .expect(expected_calls)
        .mount(server)
        .await;
}

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter("nyxprep_lib=debug,nyxprep_e2e_tests=debug")
        .with_test_writer()
        .try_init()
        .ok();
}
