use crate::cli::PatchParams;
use crate::error::NyxPrepError;

/// Applies the logging patch to a local file. Returns whether the block was replaced.
pub async fn run_patch(params: PatchParams) -> Result<bool, NyxPrepError> {
    let PatchParams {
        input_path,
        output_path,
        patch,
        require_patch,
    } = params;

    tracing::info!("Patching {}", input_path.display());

    let contents = tokio::fs::read_to_string(&input_path)
        .await
        .map_err(|source| NyxPrepError::Read {
            path: input_path.clone(),
            source,
        })?;

    let patched = patch.apply(&contents);
    if !patched.is_applied() {
        if require_patch {
            return Err(NyxPrepError::PatchNotApplied {
                filename: input_path.display().to_string(),
                guard: patch.guard().to_string(),
            });
        }
        tracing::debug!(
            "No `{}` block found in {}, passing through",
            patch.guard(),
            input_path.display()
        );
    }

    tokio::fs::write(&output_path, patched.as_str())
        .await
        .map_err(|source| NyxPrepError::Write {
            path: output_path.clone(),
            source,
        })?;

    tracing::info!("Patched file written to {}", output_path.display());
    Ok(patched.is_applied())
}
