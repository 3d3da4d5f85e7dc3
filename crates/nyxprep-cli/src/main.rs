use nyxprep_lib::cli::{
    ResolvedCommand, parse_args, resolve_command, run_fetch, run_patch, run_show_config,
};
use nyxprep_lib::error::NyxPrepError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), NyxPrepError> {
    color_eyre::install()?;

    let args = parse_args();
    let command = resolve_command(args.command)?;

    match command {
        ResolvedCommand::Fetch(params) => {
            run_fetch(params).await?;
        }
        ResolvedCommand::Patch(params) => {
            run_patch(params).await?;
        }
        ResolvedCommand::ShowConfig(params) => run_show_config(params).await?,
    }

    Ok(())
}
