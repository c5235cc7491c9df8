use crate::error::DiscoError;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Internal status for a download target that was already on disk.
/// Never leaves the process: `normalize_exit_code` folds it into success.
pub const EXIT_ALREADY_EXISTS: i32 = 2;

/// Every resolution, transport and download failure shares one exit status.
pub fn get_exit_code(_error: &DiscoError) -> i32 {
    EXIT_FAILURE
}

pub fn normalize_exit_code(code: i32) -> i32 {
    if code == EXIT_ALREADY_EXISTS {
        EXIT_SUCCESS
    } else {
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldKind;

    #[test]
    fn test_all_errors_exit_with_failure() {
        let errors = vec![
            DiscoError::FieldNotFound {
                kind: FieldKind::Distribution,
                input: "nope".to_string(),
            },
            DiscoError::Transport("timeout".to_string()),
            DiscoError::NoPackageFound("zulu 17".to_string()),
            DiscoError::MissingDownloadInfo("abc".to_string()),
        ];

        for error in &errors {
            assert_eq!(get_exit_code(error), EXIT_FAILURE);
        }
    }

    #[test]
    fn test_already_exists_is_normalized_to_success() {
        assert_eq!(normalize_exit_code(EXIT_ALREADY_EXISTS), EXIT_SUCCESS);
        assert_eq!(normalize_exit_code(EXIT_FAILURE), EXIT_FAILURE);
        assert_eq!(normalize_exit_code(EXIT_SUCCESS), EXIT_SUCCESS);
    }
}
