use super::types::{FetchOptions, FetchedFile};
use crate::error::NyxPrepError;
use crate::patch::LoggerPatch;
use crate::upstream::FileSpec;
use crate::verification::ContentDigestVerifier;
use reqwest::{Client, StatusCode};
use std::path::Path;
use tracing::{debug, info, trace};

pub fn build_http_client(options: &FetchOptions) -> Result<Client, NyxPrepError> {
    let mut builder = Client::builder().user_agent(options.user_agent.as_str());
    if let Some(timeout) = options.timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Fetches, patches and writes each file in order, stopping at the first failure.
///
/// Files written before a failure are left in place.
pub async fn fetch_and_patch_all(
    files: &[FileSpec],
    patch: &LoggerPatch,
    options: &FetchOptions,
) -> Result<Vec<FetchedFile>, NyxPrepError> {
    let client = build_http_client(options)?;

    tokio::fs::create_dir_all(&options.output_dir)
        .await
        .map_err(|source| NyxPrepError::DirectoryCreation {
            path: options.output_dir.clone(),
            source,
        })?;

    let mut fetched = Vec::with_capacity(files.len());
    for file in files {
        fetched.push(fetch_and_patch(&client, file, patch, options).await?);
    }

    Ok(fetched)
}

async fn fetch_and_patch(
    client: &Client,
    file: &FileSpec,
    patch: &LoggerPatch,
    options: &FetchOptions,
) -> Result<FetchedFile, NyxPrepError> {
    info!(file = %file.name, url = %file.url, "Downloading");
    let contents = download(client, file).await?;

    let patched = patch.apply(&contents);
    if patched.is_applied() {
        debug!(file = %file.name, guard = patch.guard(), "Replaced logging block");
    } else if options.require_patch {
        return Err(NyxPrepError::PatchNotApplied {
            filename: file.name.clone(),
            guard: patch.guard().to_string(),
        });
    } else {
        debug!(file = %file.name, guard = patch.guard(), "No logging block found, passing through");
    }

    let output_path = options.output_dir.join(&file.name);
    write_output(&output_path, patched.as_str()).await?;
    info!(file = %file.name, output = %output_path.display(), "Written");

    Ok(FetchedFile {
        name: file.name.clone(),
        bytes_written: patched.as_str().len(),
        patched: patched.is_applied(),
        output_path,
    })
}

async fn download(client: &Client, file: &FileSpec) -> Result<String, NyxPrepError> {
    let response = client.get(file.url.clone()).send().await?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(NyxPrepError::Retrieval {
            filename: file.name.clone(),
            url: file.url.to_string(),
            status,
        });
    }

    let body = response.bytes().await?;
    debug!(file = %file.name, bytes = body.len(), "Received");

    if let Some(digest) = &file.digest {
        trace!(file = %file.name, expected_digest = digest.digest_hex(), "Verifying");
        let mut verifier = ContentDigestVerifier::new(digest.clone());
        verifier.update(&body);
        verifier
            .verify()
            .map_err(|source| NyxPrepError::Verification {
                filename: file.name.clone(),
                source,
            })?;
    }

    String::from_utf8(body.to_vec()).map_err(|source| NyxPrepError::Decode {
        filename: file.name.clone(),
        source,
    })
}

async fn write_output(path: &Path, contents: &str) -> Result<(), NyxPrepError> {
    tokio::fs::write(path, contents)
        .await
        .map_err(|source| NyxPrepError::Write {
            path: path.to_path_buf(),
            source,
        })
}
