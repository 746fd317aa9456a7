use anyhow::{Result, bail};
use url::Url;

/// Reject an empty or whitespace-only required field.
pub fn validate_required(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        bail!("{} must not be empty", field);
    }
    Ok(())
}

/// Validate a provider endpoint URL.
/// Rules: parses as a URL, `http` or `https` scheme, has a host.
pub fn validate_endpoint(field: &str, value: &str) -> Result<()> {
    let url = match Url::parse(value) {
        Ok(u) => u,
        Err(e) => bail!("{} '{}' is not a valid URL: {}", field, value, e),
    };
    if !matches!(url.scheme(), "http" | "https") {
        bail!("{} '{}' must use http or https", field, value);
    }
    if url.host_str().is_none_or(str::is_empty) {
        bail!("{} '{}' has no host", field, value);
    }
    Ok(())
}
