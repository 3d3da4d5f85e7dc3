use crate::cli::FetchParams;
use crate::error::NyxPrepError;
use crate::fetch::{FetchedFile, fetch_and_patch_all};
use tracing;

pub async fn run_fetch(params: FetchParams) -> Result<Vec<FetchedFile>, NyxPrepError> {
    let FetchParams {
        files,
        patch,
        options,
    } = params;

    tracing::info!(
        "Fetching {} file(s) into {}",
        files.len(),
        options.output_dir.display()
    );

    let fetched = fetch_and_patch_all(&files, &patch, &options).await?;

    let unpatched = fetched.iter().filter(|file| !file.patched).count();
    tracing::debug!(
        "{} of {} file(s) had a `{}` block replaced",
        fetched.len() - unpatched,
        fetched.len(),
        patch.guard()
    );

    tracing::info!("Fetch completed successfully");
    Ok(fetched)
}
