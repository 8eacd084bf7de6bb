use crate::domain::model::PointsScheme;
use crate::utils::error::{RankingsError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(RankingsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RankingsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Checks that an input file exists before anything is read from it.
pub fn validate_file_exists(field_name: &str, path: &Path) -> Result<()> {
    validate_path(field_name, &path.to_string_lossy())?;

    if !path.is_file() {
        return Err(RankingsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.display().to_string(),
            reason: format!("The file {} does not exist.", path.display()),
        });
    }

    Ok(())
}

/// A win must be worth at least a draw, and a draw at least a loss.
pub fn validate_points(field_name: &str, points: &PointsScheme) -> Result<()> {
    if points.win < points.draw || points.draw < points.loss {
        return Err(RankingsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!(
                "win = {}, draw = {}, loss = {}",
                points.win, points.draw, points.loss
            ),
            reason: "Points must satisfy win >= draw >= loss".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("store.path", "contest-results.jsonl").is_ok());
        assert!(validate_path("store.path", "").is_err());
        assert!(validate_path("store.path", "  ").is_err());
        assert!(validate_path("store.path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_file_exists() {
        let file = NamedTempFile::new().unwrap();
        assert!(validate_file_exists("file", file.path()).is_ok());

        let missing = file.path().with_extension("missing");
        let err = validate_file_exists("file", &missing).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_validate_points() {
        assert!(validate_points("points", &PointsScheme::default()).is_ok());
        assert!(validate_points(
            "points",
            &PointsScheme {
                win: 1,
                draw: 1,
                loss: 1
            }
        )
        .is_ok());
        assert!(validate_points(
            "points",
            &PointsScheme {
                win: 1,
                draw: 2,
                loss: 0
            }
        )
        .is_err());
    }
}
