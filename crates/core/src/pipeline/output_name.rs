use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum OutputNameError {
    #[error("output name is empty")]
    Empty,
    #[error("output name {0:?} must not contain path separators")]
    ContainsSeparator(String),
    #[error("output name {0:?} is reserved")]
    Reserved(String),
}

/// Checks a user-chosen output base name and returns it trimmed.
///
/// The name must address a single file inside the output directory, so
/// separators and the `.`/`..` entries are refused. Dots elsewhere are fine:
/// the output extension is always appended.
pub fn validate_output_name(raw: &str) -> Result<&str, OutputNameError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(OutputNameError::Empty);
    }
    if name.contains(['/', '\\']) {
        return Err(OutputNameError::ContainsSeparator(name.to_string()));
    }
    if name == "." || name == ".." {
        return Err(OutputNameError::Reserved(name.to_string()));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain("blended", "blended")]
    #[case::trimmed("  sunset_mix \n", "sunset_mix")]
    #[case::dotted("v1.2", "v1.2")]
    fn test_accepts(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(validate_output_name(raw), Ok(expected));
    }

    #[rstest]
    #[case::empty("", OutputNameError::Empty)]
    #[case::blank("   ", OutputNameError::Empty)]
    #[case::unix_path("../evil", OutputNameError::ContainsSeparator("../evil".into()))]
    #[case::windows_path("a\\b", OutputNameError::ContainsSeparator("a\\b".into()))]
    #[case::dot(".", OutputNameError::Reserved(".".into()))]
    #[case::dotdot("..", OutputNameError::Reserved("..".into()))]
    fn test_rejects(#[case] raw: &str, #[case] expected: OutputNameError) {
        assert_eq!(validate_output_name(raw), Err(expected));
    }
}
