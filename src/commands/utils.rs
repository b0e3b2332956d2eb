use crate::error::NavError;
use crate::error::Result;

/// CLI paths must be absolute app paths
pub fn validate_path(path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(NavError::InvalidArguments(
            "Path cannot be empty".to_string(),
        ));
    }

    if !path.starts_with('/') {
        return Err(NavError::InvalidArguments(format!(
            "Path must start with '/': {}",
            path
        )));
    }

    if path.contains("://") || path.contains('?') || path.contains('#') {
        return Err(NavError::InvalidArguments(
            "Only the path part of a URL is allowed".to_string(),
        ));
    }

    Ok(())
}
