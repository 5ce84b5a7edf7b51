use std::fs;
use std::path::Path;

use assert_cmd::Command;

mod common;
use common::{png_header_only, write_annotation, write_jpeg, write_png};

fn create_visdrone_root(root: &Path) {
    let train = root.join("VisDrone2019-DET-train");
    write_jpeg(&train.join("images/a.jpg"), 100, 200);
    write_annotation(&train.join("annotations/a.txt"), "10,20,30,40,0.9,5,0,1\n");

    let val = root.join("VisDrone2019-DET-val");
    write_png(&val.join("images/b.png"), 50, 50);
    write_annotation(&val.join("annotations/b.txt"), "0,0,50,50,1,2,0,0\nbad,line\n");

    let test = root.join("VisDrone2019-DET-test-dev");
    fs::create_dir_all(test.join("images")).expect("create test images");
    write_annotation(&test.join("annotations/c.txt"), "1,1,1,1,1,1,0,0\n");
}

#[test]
fn runs() {
    let mut cmd = Command::cargo_bin("visdrone2yolo").unwrap();
    cmd.assert().success();
}

#[test]
fn outputs_tool_name() {
    let mut cmd = Command::cargo_bin("visdrone2yolo").unwrap();
    cmd.arg("-V");
    cmd.assert().success().stdout("visdrone2yolo 0.1.0\n");
}

#[test]
fn convert_writes_labels_and_summary() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let root = temp.path().join("VisDrone2019-DET-train");
    create_visdrone_root(temp.path());

    let mut cmd = Command::cargo_bin("visdrone2yolo").unwrap();
    cmd.arg("convert")
        .arg("--images")
        .arg(root.join("images"))
        .arg("--annotations")
        .arg(root.join("annotations"))
        .arg("--output")
        .arg(temp.path().join("out"))
        .args(["--name", "train"]);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("Conversion complete for split 'train'"))
        .stdout(predicates::str::contains("YOLO annotations saved in"));

    let out = fs::read_to_string(temp.path().join("out/a.txt")).expect("read output");
    assert_eq!(out, "5 0.250000 0.200000 0.300000 0.200000 1");
}

#[test]
fn header_only_accepts_truncated_images() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let images = temp.path().join("images");
    fs::create_dir_all(&images).expect("create images dir");
    fs::write(images.join("cut.png"), png_header_only(100, 100)).expect("write image");
    write_annotation(&temp.path().join("annotations/cut.txt"), "0,0,50,50,1,1,0,0\n");

    let convert = |output: &str, header_only: bool| {
        let mut cmd = Command::cargo_bin("visdrone2yolo").unwrap();
        cmd.arg("convert")
            .arg("--images")
            .arg(&images)
            .arg("--annotations")
            .arg(temp.path().join("annotations"))
            .arg("--output")
            .arg(temp.path().join(output));
        if header_only {
            cmd.arg("--header-only");
        }
        cmd.assert().success()
    };

    convert("decoded", false).stderr(predicates::str::contains("Failed to decode image"));
    assert!(!temp.path().join("decoded/cut.txt").exists());

    convert("headers", true);
    assert!(temp.path().join("headers/cut.txt").is_file());
}

#[test]
fn visdrone_converts_all_splits_and_warns_on_skips() {
    let temp = tempfile::tempdir().expect("create temp dir");
    create_visdrone_root(temp.path());

    let mut cmd = Command::cargo_bin("visdrone2yolo").unwrap();
    cmd.arg("visdrone").arg(temp.path());
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("split 'train'"))
        .stdout(predicates::str::contains("split 'val'"))
        .stdout(predicates::str::contains("split 'test-dev'"))
        .stderr(predicates::str::contains("expected 8 fields"))
        .stderr(predicates::str::contains("no jpg/png image"));

    assert!(temp
        .path()
        .join("VisDrone2019-DET-val/yolo_labels/b.txt")
        .is_file());
    assert!(!temp
        .path()
        .join("VisDrone2019-DET-test-dev/yolo_labels/c.txt")
        .exists());
}

#[test]
fn strict_fails_when_items_are_skipped() {
    let temp = tempfile::tempdir().expect("create temp dir");
    create_visdrone_root(temp.path());

    let mut cmd = Command::cargo_bin("visdrone2yolo").unwrap();
    cmd.arg("visdrone").arg(temp.path()).arg("--strict");
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("Strict mode"));
}

#[test]
fn plan_runs_splits_with_json_report() {
    let temp = tempfile::tempdir().expect("create temp dir");
    create_visdrone_root(temp.path());

    let plan = temp.path().join("plan.yaml");
    fs::write(
        &plan,
        "splits:\n  - name: train\n    image_dir: VisDrone2019-DET-train/images\n    annotation_dir: VisDrone2019-DET-train/annotations\n    output_dir: labels/train\n",
    )
    .expect("write plan");

    let mut cmd = Command::cargo_bin("visdrone2yolo").unwrap();
    cmd.arg("plan").arg(&plan).args(["--report", "json"]);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("\"split\": \"train\""))
        .stdout(predicates::str::contains("\"files_written\": 1"));

    assert!(temp.path().join("labels/train/a.txt").is_file());
}

#[test]
fn missing_annotation_dir_fails_after_other_splits() {
    let temp = tempfile::tempdir().expect("create temp dir");
    create_visdrone_root(temp.path());
    fs::remove_dir_all(temp.path().join("VisDrone2019-DET-val/annotations"))
        .expect("remove val annotations");

    let mut cmd = Command::cargo_bin("visdrone2yolo").unwrap();
    cmd.arg("visdrone").arg(temp.path());
    cmd.assert()
        .failure()
        .stdout(predicates::str::contains("split 'test-dev'"))
        .stderr(predicates::str::contains("1 split(s) failed"));
}

#[test]
fn invalid_plan_fails() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let plan = temp.path().join("plan.yaml");
    fs::write(&plan, "splits: []\n").expect("write plan");

    let mut cmd = Command::cargo_bin("visdrone2yolo").unwrap();
    cmd.arg("plan").arg(&plan);
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("Invalid conversion plan"));
}
