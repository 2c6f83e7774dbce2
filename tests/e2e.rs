mod common;

use common::synthetic_paths::{sequence, square, zigzag};
use line_dataset::config::DatasetToolConfig;
use line_dataset::dataset::{BoundsPolicy, LineDocument};
use line_dataset::image::io::load_rgb_png;
use line_dataset::image::{ImageView, BLACK, WHITE};
use line_dataset::{build_dataset, DatasetError, CANVAS_SIZE};
use serde_json::Value;
use std::fs;
use std::path::Path;

fn write_batch(dir: &Path, file: &str, sequences: Vec<Value>) {
    fs::write(dir.join(file), Value::Array(sequences).to_string()).unwrap();
}

fn read_doc(path: &Path) -> LineDocument {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn builds_train_and_valid_with_global_ids() {
    let _ = env_logger::builder().is_test(true).try_init();
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_batch(
        input.path(),
        "train.json",
        vec![
            sequence(&[(10.0, 10.0, 1), (50.0, 10.0, 2), (50.0, 40.0, 1)]),
            sequence(&[(5.0, 5.0, 0)]),
            square(100.0, 100.0, 20.0),
        ],
    );
    write_batch(
        input.path(),
        "valid.json",
        vec![sequence(&[(20.0, 20.0, 1), (20.0, 20.0, 1)]), zigzag(6)],
    );

    let config = DatasetToolConfig::from_dirs(input.path(), output.path());
    let report = build_dataset(&config).unwrap();
    assert_eq!(report.total_images(), 5);
    assert_eq!(report.total_annotations(), 2 + 0 + 4 + 1 + 5);

    let train = read_doc(&output.path().join("annotations/lines_train.json"));
    let valid = read_doc(&output.path().join("annotations/lines_valid.json"));

    let image_ids: Vec<u64> = train
        .images
        .iter()
        .chain(&valid.images)
        .map(|r| r.id.0)
        .collect();
    assert_eq!(image_ids, vec![0, 1, 2, 3, 4]);

    let anno_ids: Vec<u64> = train
        .annotations
        .iter()
        .chain(&valid.annotations)
        .map(|a| a.id.0)
        .collect();
    assert_eq!(anno_ids, (0..12).collect::<Vec<u64>>());

    assert_eq!(train.annotations[0].line.to_array(), [10, 10, 40, 0]);
    assert_eq!(train.annotations[1].line.to_array(), [50, 10, 0, 30]);
    assert!(train.annotations.iter().all(|a| a.image_id.0 != 1));
    assert_eq!(valid.annotations[0].line.to_array(), [20, 20, 0, 0]);
    assert_eq!(valid.images[0].file_name, "3.png");

    for doc in [&train, &valid] {
        assert_eq!(doc.categories.len(), 1);
        assert_eq!(doc.categories[0].id, "0");
        for a in &doc.annotations {
            let (dx, dy) = a.line.displacement();
            assert!(dx > 0 || (dx == 0 && dy >= 0));
            assert_eq!((a.category_id, a.area), (0, 1));
        }
    }

    for (batch, id) in [("train", 0), ("train", 1), ("train", 2), ("valid", 3), ("valid", 4)] {
        let path = output.path().join(batch).join(format!("{id}.png"));
        let img = load_rgb_png(&path).unwrap();
        assert_eq!((img.w, img.h), (CANVAS_SIZE, CANVAS_SIZE));
    }
}

#[test]
fn written_png_matches_rendered_path() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_batch(
        input.path(),
        "train.json",
        vec![sequence(&[(10.9, 10.2, 1), (50.5, 10.0, 2), (50.0, 40.99, 1)])],
    );
    write_batch(input.path(), "valid.json", vec![sequence(&[(5.0, 5.0, 0)])]);

    build_dataset(&DatasetToolConfig::from_dirs(input.path(), output.path())).unwrap();

    let corner = load_rgb_png(&output.path().join("train/0.png")).unwrap();
    assert_eq!(corner.pixel(10, 10), Some(BLACK));
    assert_eq!(corner.pixel(30, 10), Some(BLACK));
    assert_eq!(corner.pixel(50, 25), Some(BLACK));
    assert_eq!(corner.pixel(50, 40), Some(BLACK));
    assert_eq!(corner.pixel(30, 30), Some(WHITE));
    assert_eq!(corner.count(BLACK), 41 + 31 - 1);

    let blank = load_rgb_png(&output.path().join("valid/1.png")).unwrap();
    assert_eq!(blank.count(WHITE), CANVAS_SIZE * CANVAS_SIZE);
}

#[test]
fn rerun_overwrites_identically() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_batch(input.path(), "train.json", vec![zigzag(9)]);
    write_batch(input.path(), "valid.json", vec![square(3.0, 200.0, 50.0)]);
    let config = DatasetToolConfig::from_dirs(input.path(), output.path());

    build_dataset(&config).unwrap();
    let first_doc = fs::read(output.path().join("annotations/lines_valid.json")).unwrap();
    let first_png = load_rgb_png(&output.path().join("train/0.png")).unwrap();

    build_dataset(&config).unwrap();
    let second_doc = fs::read(output.path().join("annotations/lines_valid.json")).unwrap();
    let second_png = load_rgb_png(&output.path().join("train/0.png")).unwrap();

    assert_eq!(first_doc, second_doc);
    assert_eq!(first_png.as_bytes(), second_png.as_bytes());
}

#[test]
fn malformed_point_aborts_run() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    fs::write(input.path().join("train.json"), "[[[1.0, 2.0, 1], [3.0]]]").unwrap();
    write_batch(input.path(), "valid.json", vec![]);

    let err = build_dataset(&DatasetToolConfig::from_dirs(input.path(), output.path()))
        .unwrap_err();
    assert!(matches!(err, DatasetError::InputMalformed { .. }), "{err}");
    assert!(!output.path().join("annotations").exists());
}

#[test]
fn reject_policy_and_report_file() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_batch(
        input.path(),
        "train.json",
        vec![sequence(&[(1.0, 1.0, 1), (255.9, 300.0, 1)])],
    );
    write_batch(input.path(), "valid.json", vec![]);

    let mut config = DatasetToolConfig::from_dirs(input.path(), output.path());
    config.bounds = BoundsPolicy::Reject;
    let err = build_dataset(&config).unwrap_err();
    assert!(matches!(err, DatasetError::OutOfBounds { .. }));

    config.bounds = BoundsPolicy::Clamp;
    config.report_json = Some(output.path().join("report.json"));
    let report = build_dataset(&config).unwrap();
    assert_eq!(report.batches[0].clamped_points, 1);

    let written: Value =
        serde_json::from_str(&fs::read_to_string(output.path().join("report.json")).unwrap())
            .unwrap();
    assert_eq!(written["batches"][0]["name"], "train");
    assert_eq!(written["batches"][0]["clampedPoints"], 1);
    assert_eq!(written["batches"][1]["images"], 0);
}

#[test]
fn output_root_that_is_a_file_is_a_storage_error() {
    let input = tempfile::tempdir().unwrap();
    let scratch = tempfile::tempdir().unwrap();
    write_batch(
        input.path(),
        "train.json",
        vec![sequence(&[(1.0, 1.0, 1), (9.0, 9.0, 1)])],
    );
    write_batch(input.path(), "valid.json", vec![]);
    let root = scratch.path().join("root_is_file");
    fs::write(&root, b"not a directory").unwrap();

    let err = build_dataset(&DatasetToolConfig::from_dirs(input.path(), &root)).unwrap_err();
    match err {
        DatasetError::Storage { path, .. } => assert!(path.starts_with(&root), "{path:?}"),
        other => panic!("expected storage error, got {other}"),
    }
    assert!(root.is_file());
}
