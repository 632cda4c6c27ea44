use std::path::PathBuf;

use thiserror::Error;

/// Failures of the command line wrapper. Conversion itself never fails.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Usage: markdown2html README.md README.html")]
    Usage,
    #[error("Missing {}", .0.display())]
    Missing(PathBuf),
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            CliError::Usage.to_string(),
            "Usage: markdown2html README.md README.html"
        );
        assert_eq!(
            CliError::Missing(PathBuf::from("README.md")).to_string(),
            "Missing README.md"
        );
    }
}
