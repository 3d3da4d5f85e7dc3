use crate::cli::ShowConfigParams;
use crate::config::Config;
use crate::error::NyxPrepError;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
struct EffectiveConfig<'a> {
    config: &'a Config,
    urls: BTreeMap<&'a str, &'a str>,
}

pub fn render_effective_config(params: &ShowConfigParams) -> Result<String, NyxPrepError> {
    let effective = EffectiveConfig {
        config: &params.app_config,
        urls: params
            .files
            .iter()
            .map(|file| (file.name.as_str(), file.url.as_str()))
            .collect(),
    };

    Ok(serde_json::to_string_pretty(&effective)?)
}

pub async fn run_show_config(params: ShowConfigParams) -> Result<(), NyxPrepError> {
    println!("{}", render_effective_config(&params)?);
    Ok(())
}
