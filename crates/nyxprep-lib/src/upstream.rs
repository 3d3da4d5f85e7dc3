use crate::config::UpstreamConfig;
use crate::error::NyxPrepError;
use crate::verification::ContentDigest;
use url::Url;

/// One upstream file to fetch, with its resolved download URL.
#[derive(Clone, Debug, PartialEq)]
pub struct FileSpec {
    pub name: String,
    pub url: Url,
    pub digest: Option<ContentDigest>,
}

/// Resolves every configured file to a [`FileSpec`], preserving order.
pub fn resolve_file_specs(upstream: &UpstreamConfig) -> Result<Vec<FileSpec>, NyxPrepError> {
    upstream
        .files
        .iter()
        .map(|file| {
            let name = file.name();
            validate_file_name(name)?;

            let digest = file
                .digest()
                .map(ContentDigest::try_from)
                .transpose()
                .map_err(|e| NyxPrepError::InvalidFileSpec {
                    name: name.to_string(),
                    reason: e.to_string(),
                })?;

            Ok(FileSpec {
                name: name.to_string(),
                url: render_url(upstream, name)?,
                digest,
            })
        })
        .collect()
}

pub fn render_url(upstream: &UpstreamConfig, filename: &str) -> Result<Url, NyxPrepError> {
    let rendered = render_template(&upstream.url_template, upstream, filename).map_err(|reason| {
        NyxPrepError::InvalidUrl {
            url: upstream.url_template.clone(),
            reason,
        }
    })?;

    Url::parse(&rendered).map_err(|e| NyxPrepError::InvalidUrl {
        url: rendered.clone(),
        reason: e.to_string(),
    })
}

fn render_template(
    template: &str,
    upstream: &UpstreamConfig,
    filename: &str,
) -> Result<String, String> {
    let mut rendered = String::with_capacity(template.len() + filename.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        rendered.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let end = after
            .find('}')
            .ok_or_else(|| format!("unterminated placeholder in `{template}`"))?;

        let value = match &after[..end] {
            "organization" => upstream.organization.as_str(),
            "repository" => upstream.repository.as_str(),
            "version" => upstream.version.as_str(),
            "filename" => filename,
            other => return Err(format!("unknown placeholder `{{{other}}}`")),
        };
        rendered.push_str(value);
        rest = &after[end + 1..];
    }
    rendered.push_str(rest);

    Ok(rendered)
}

// Files land directly in the output directory, so names must not escape it.
fn validate_file_name(name: &str) -> Result<(), NyxPrepError> {
    let reason = if name.is_empty() {
        Some("file name is empty")
    } else if name == "." || name == ".." {
        Some("file name refers to a directory")
    } else if name.contains(['/', '\\']) {
        Some("file name must not contain path separators")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(NyxPrepError::InvalidFileSpec {
            name: name.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}
