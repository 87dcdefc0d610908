use std::path::PathBuf;

use component_extract::extractor::Extractor;
use component_extract::paths::sibling_path;
use component_extract::processor::{apply, Action, FileOperation};
use tempfile::TempDir;

#[test]
fn test_sibling_path_keeps_directories() {
    assert_eq!(
        sibling_path("src/app/nav/nav.component.ts", "html"),
        PathBuf::from("src/app/nav/nav.component.html")
    );
    assert_eq!(
        sibling_path("src/app/nav/nav.component.ts", "scss"),
        PathBuf::from("src/app/nav/nav.component.scss")
    );
}

#[test]
fn test_plan_orders_writes() {
    let extractor = Extractor::new().unwrap();
    let content = "styles: [`\n    a {}\n  `]\n";

    let operations = extractor.plan("nav.component.ts", content);

    assert_eq!(
        operations,
        vec![
            FileOperation {
                action: Action::Created,
                target: PathBuf::from("nav.component.scss"),
                content: "a {}".to_string(),
            },
            FileOperation {
                action: Action::Updated,
                target: PathBuf::from("nav.component.ts"),
                content: "styleUrls: ['./nav.component.scss']\n".to_string(),
            },
        ]
    );
}

#[test]
fn test_apply_writes_content() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("out.html");

    apply(&FileOperation {
        action: Action::Created,
        target: target.clone(),
        content: "<p></p>\n".to_string(),
    })
    .unwrap();

    assert_eq!(std::fs::read_to_string(target).unwrap(), "<p></p>\n");
}

#[test]
fn test_apply_fails_on_missing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("missing").join("out.html");

    let operation = FileOperation {
        action: Action::Updated,
        target,
        content: String::new(),
    };
    assert!(apply(&operation).is_err());
}

#[test]
fn test_action_display() {
    assert_eq!(Action::Created.to_string(), "Created");
    assert_eq!(Action::Updated.to_string(), "Updated");
}
