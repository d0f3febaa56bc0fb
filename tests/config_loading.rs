//! Integration tests for loading layout tolerances from TOML

use std::fs;
use std::path::PathBuf;

use flex_infer::layout::classify;
use flex_infer::{ConfigError, Frame, LayoutConfig, NodeSchema};
use pretty_assertions::assert_eq;

fn write_config(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("flex-infer-{}-{}.toml", name, std::process::id()));
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_from_file() {
    let path = write_config(
        "overrides",
        r#"
overlap_probe_tolerance = -8.0
overlap_tolerance = -20.0
grid_min_children = 6
"#,
    );
    let config = LayoutConfig::from_file(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(
        config,
        LayoutConfig {
            overlap_probe_tolerance: -8.0,
            overlap_tolerance: -20.0,
            grid_min_children: 6,
            ..LayoutConfig::default()
        }
    );
}

#[test]
fn test_missing_file_is_io_error() {
    let path = std::env::temp_dir().join("flex-infer-does-not-exist.toml");
    let err = LayoutConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_wrong_type_is_toml_error() {
    let err = LayoutConfig::from_toml_str("split_tolerance = \"wide\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_probe_deeper_than_confirmation_is_invalid() {
    let err = LayoutConfig::from_toml_str(
        "overlap_probe_tolerance = -30.0\noverlap_tolerance = -10.0\n",
    )
    .unwrap_err();
    match err {
        ConfigError::Invalid { field, .. } => assert_eq!(field, "overlap_probe_tolerance"),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_non_finite_value_is_invalid() {
    let err = LayoutConfig::from_toml_str("align_tolerance_ratio = nan\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { .. }));
}

#[test]
fn test_looser_overlap_tolerance_keeps_children_in_flow() {
    let children = vec![
        NodeSchema::new("a", "View").with_frame(Frame::new(0.0, 0.0, 100.0, 100.0)),
        NodeSchema::new("b", "View").with_frame(Frame::new(85.0, 0.0, 100.0, 100.0)),
    ];

    let strict = classify(&children, &LayoutConfig::default());
    assert_eq!(strict.absolute, vec![0, 1]);

    let loose = LayoutConfig::from_toml_str("overlap_tolerance = -20.0\n").unwrap();
    let classes = classify(&children, &loose);
    assert!(classes.absolute.is_empty());
    assert_eq!(classes.normal, vec![0, 1]);
}
