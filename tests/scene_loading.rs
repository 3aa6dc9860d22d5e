use std::io::Write;

use overlapkit::{build_scene, load_shapes, polygon_to_svg_path, EngineConfig, ShapeId};
use tempfile::NamedTempFile;

fn scene_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_and_resolve_scene() {
    let file = scene_file(
        r#"[
            {"id": "left", "path": "M0 0 L10 0 L10 10 L0 10 Z"},
            {"id": "right", "path": "M5 5 L15 5 L15 15 L5 15 Z"},
            {"id": "far", "path": "M100 100 L110 100 L110 110 Z"}
        ]"#,
    );

    let shapes = load_shapes(file.path()).unwrap();
    let mut scene = build_scene(shapes, EngineConfig::default()).unwrap();
    assert_eq!(scene.overlaps().len(), 1);

    let shared = scene.resolve(7.0, 7.0).unwrap();
    assert_eq!(
        shared.owners(),
        vec![&ShapeId::from("left"), &ShapeId::from("right")]
    );

    let lone = scene.resolve(101.0, 100.5).unwrap();
    assert_eq!(
        polygon_to_svg_path(lone.region()),
        "M100 100 L110 100 L110 110 Z"
    );

    assert!(scene.resolve(50.0, 50.0).is_none());
}

#[test]
fn test_missing_scene_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_shapes(&dir.path().join("nope.json")).unwrap_err();
    assert!(err.to_string().contains("Failed to read scene file"));
}
