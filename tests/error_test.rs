use std::io;
use std::path::PathBuf;

use component_extract::error::ExtractError;

#[test]
fn test_error_conversion() {
    let regex_err = regex::Regex::new("(unclosed").unwrap_err();
    let extract_err: ExtractError = regex_err.into();

    match extract_err {
        ExtractError::PatternError(_) => (),
        _ => panic!("Expected PatternError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = ExtractError::ReadError {
        path: PathBuf::from("app.component.ts"),
        source: io::Error::new(io::ErrorKind::NotFound, "file not found"),
    };
    assert_eq!(
        err.to_string(),
        "Failed to read 'app.component.ts': file not found."
    );

    let err = ExtractError::WriteError {
        path: PathBuf::from("app.component.html"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
    };
    assert_eq!(
        err.to_string(),
        "Failed to write 'app.component.html': permission denied."
    );
}
