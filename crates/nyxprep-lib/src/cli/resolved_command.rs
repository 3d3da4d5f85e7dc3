use crate::cli::args::Command;
use crate::cli::params::{FetchParams, PatchParams, ShowConfigParams};
use crate::config::load_config_or_default;
use crate::error::NyxPrepError;
use crate::fetch::FetchOptions;
use crate::patch::LoggerPatch;
use crate::upstream::resolve_file_specs;
use std::path::PathBuf;

fn invalid_argument(details: &str) -> NyxPrepError {
    NyxPrepError::CliArgumentValidation {
        details: details.to_string(),
    }
}

#[derive(Debug, Clone)]
pub enum ResolvedCommand {
    Fetch(FetchParams),
    Patch(PatchParams),
    ShowConfig(ShowConfigParams),
}

pub fn resolve_command(command: Command) -> Result<ResolvedCommand, NyxPrepError> {
    match command {
        Command::Fetch {
            config_path,
            version_tag,
            output_dir,
            require_patch,
            timeout_secs,
        } => {
            let mut app_config = load_config_or_default(config_path.as_deref())?;

            if let Some(version_tag) = version_tag {
                app_config.upstream.version = version_tag;
            }
            if let Some(output_dir) = output_dir {
                app_config.output.path = PathBuf::from(output_dir);
            }
            if require_patch {
                app_config.output.require_patch = true;
            }
            if timeout_secs.is_some() {
                app_config.http.timeout_secs = timeout_secs;
            }

            if app_config.upstream.version.trim().is_empty() {
                return Err(invalid_argument("Upstream version tag must not be empty."));
            }
            if app_config.upstream.files.is_empty() {
                return Err(invalid_argument(
                    "No upstream files configured. Configure upstream.files.",
                ));
            }
            if app_config.http.timeout_secs == Some(0) {
                return Err(invalid_argument("timeout must be greater than 0."));
            }

            let files = resolve_file_specs(&app_config.upstream)?;
            let patch = LoggerPatch::new(&app_config.logger)?;

            Ok(ResolvedCommand::Fetch(FetchParams {
                files,
                patch,
                options: FetchOptions::from(&app_config),
            }))
        }
        Command::Patch {
            config_path,
            input_path,
            output_path,
            require_patch,
        } => {
            let app_config = load_config_or_default(config_path.as_deref())?;
            let patch = LoggerPatch::new(&app_config.logger)?;

            let input_path = PathBuf::from(input_path);
            let output_path = output_path
                .map(PathBuf::from)
                .unwrap_or_else(|| input_path.clone());

            Ok(ResolvedCommand::Patch(PatchParams {
                input_path,
                output_path,
                patch,
                require_patch: require_patch || app_config.output.require_patch,
            }))
        }
        Command::ShowConfig { config_path } => {
            let app_config = load_config_or_default(config_path.as_deref())?;
            let files = resolve_file_specs(&app_config.upstream)?;

            Ok(ResolvedCommand::ShowConfig(ShowConfigParams { app_config, files }))
        }
    }
}
