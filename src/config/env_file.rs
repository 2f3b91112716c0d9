//! `.env` file handling
//!
//! Values from the file take precedence over variables already present in
//! the process environment.

use std::env;
use std::path::Path;

use crate::error::ConfigError;

/// Environment file read relative to the working directory
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Parse an environment file into ordered `(key, value)` pairs
///
/// Returns `Ok(None)` when the file does not exist.
pub fn read_env_file(path: &Path) -> Result<Option<Vec<(String, String)>>, ConfigError> {
    let to_error = |source: dotenvy::Error| ConfigError::EnvFile {
        path: path.to_path_buf(),
        source,
    };

    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(err) if err.not_found() => return Ok(None),
        Err(err) => return Err(to_error(err)),
    };

    let pairs = iter
        .collect::<Result<Vec<_>, _>>()
        .map_err(to_error)?;

    Ok(Some(pairs))
}

/// Load an environment file into the process environment, overriding
/// existing variables
///
/// The whole file is parsed before anything is written, so a malformed file
/// leaves the environment untouched. Returns the number of variables set, or
/// `None` when the file does not exist.
pub fn apply_env_file(path: &Path) -> Result<Option<usize>, ConfigError> {
    let Some(pairs) = read_env_file(path)? else {
        tracing::debug!(path = %path.display(), "No environment file found");
        return Ok(None);
    };

    for (key, value) in &pairs {
        env::set_var(key, value);
    }

    tracing::debug!(
        path = %path.display(),
        count = pairs.len(),
        "Loaded environment file (overriding process environment)"
    );

    Ok(Some(pairs.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".env");

        assert!(read_env_file(&path).unwrap().is_none());
    }

    #[test]
    fn test_read_skips_comments_and_blank_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(
            &path,
            "# application\nPROJECT_NAME=\"Inventory API\"\n\nCACHE_TTL=60\n# trailing comment\n",
        )
        .unwrap();

        let pairs = read_env_file(&path).unwrap().unwrap();
        assert_eq!(
            pairs,
            vec![
                ("PROJECT_NAME".to_string(), "Inventory API".to_string()),
                ("CACHE_TTL".to_string(), "60".to_string()),
            ]
        );
    }

    #[test]
    fn test_read_single_quoted_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "ALLOWED_HOSTS='[\"a.com\",\"b.com\"]'\n").unwrap();

        let pairs = read_env_file(&path).unwrap().unwrap();
        assert_eq!(pairs[0].1, r#"["a.com","b.com"]"#);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "GOOD=1\nthis is not a pair\n").unwrap();

        let err = read_env_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::EnvFile { .. }));
    }
}
