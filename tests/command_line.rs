use image::{Rgba, RgbaImage};
use std::path::PathBuf;
use std::process::{Command, Output};
use std::{env, fs};

fn get_project_root_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn get_test_path(file_name: &str) -> PathBuf {
    let mut root_path = get_project_root_path();
    root_path.push("target");
    root_path.push("command_line");
    root_path.push(file_name);
    root_path
}

fn cleanup(path: &PathBuf) {
    if path.exists() && path.is_file() {
        fs::remove_file(path).expect("Deletion of test file failed");
    }
}

fn write_input_image(path: &PathBuf) {
    fs::create_dir_all(path.parent().unwrap()).expect("Creation of test directory failed");
    let mut input = RgbaImage::new(2, 1);
    input.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
    input.put_pixel(1, 0, Rgba([0, 255, 0, 255]));
    input.save(path).expect("Writing input image failed");
}

fn run(arguments: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_image-gremlin"))
        .arg("replace-color")
        .args(arguments)
        .output()
        .expect("Running the binary failed")
}

#[test]
fn test_verbose_prints_resolved_settings() {
    let input_path = get_test_path("verbose_input.png");
    let output_path = get_test_path("verbose_output.png");
    write_input_image(&input_path);

    let output = run(&[
        "-i",
        input_path.to_str().unwrap(),
        "-o",
        output_path.to_str().unwrap(),
        "-s",
        "#ff0000",
        "-t",
        "00ff0080",
        "--tolerance",
        "10",
        "-v",
    ]);

    assert_eq!(output.status.code(), Some(0));
    let log = String::from_utf8_lossy(&output.stderr);
    assert!(log.contains("Source color: FF0000FF"), "log was {}", log);
    assert!(log.contains("Target color: 00FF0080"), "log was {}", log);
    assert!(log.contains("Tolerance: 10"), "log was {}", log);
    assert!(log.contains("Image dimensions: 2x1"), "log was {}", log);
    let summary = String::from_utf8_lossy(&output.stdout);
    assert!(summary.contains(output_path.to_str().unwrap()));
    cleanup(&output_path);
    cleanup(&input_path);
}

#[test]
fn test_quiet_run_hides_settings() {
    let input_path = get_test_path("quiet_input.png");
    let output_path = get_test_path("quiet_output.png");
    write_input_image(&input_path);

    let output = run(&[
        "-i",
        input_path.to_str().unwrap(),
        "-o",
        output_path.to_str().unwrap(),
        "-s",
        "FF0000",
        "-t",
        "00FF00",
    ]);

    assert_eq!(output.status.code(), Some(0));
    let log = String::from_utf8_lossy(&output.stderr);
    assert!(!log.contains("Source color"), "log was {}", log);
    cleanup(&output_path);
    cleanup(&input_path);
}

#[test]
fn test_huge_thread_count_on_tiny_image() {
    let input_path = get_test_path("threads_input.png");
    let output_path = get_test_path("threads_output.png");
    write_input_image(&input_path);

    let output = run(&[
        "-i",
        input_path.to_str().unwrap(),
        "-o",
        output_path.to_str().unwrap(),
        "-s",
        "FF0000",
        "-t",
        "00FF00",
        "--threads",
        "100000",
    ]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr was {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let result = image::open(&output_path).unwrap().into_rgba8();
    assert!(result.pixels().all(|pixel| *pixel == Rgba([0, 255, 0, 255])));
    cleanup(&output_path);
    cleanup(&input_path);
}

#[test]
fn test_missing_input_exits_with_failure() {
    let input_path = get_test_path("absent_input.png");
    let output_path = get_test_path("absent_output.png");
    cleanup(&input_path);

    let output = run(&[
        "-i",
        input_path.to_str().unwrap(),
        "-o",
        output_path.to_str().unwrap(),
        "-s",
        "FF0000",
        "-t",
        "00FF00",
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("not found"));
    assert!(!output_path.exists());
}

#[test]
fn test_unsupported_output_exits_before_processing() {
    let input_path = get_test_path("format_input.png");
    write_input_image(&input_path);

    let output = run(&[
        "-i",
        input_path.to_str().unwrap(),
        "-o",
        get_test_path("format_output.xyz").to_str().unwrap(),
        "-s",
        "FF0000",
        "-t",
        "00FF00",
    ]);

    assert_eq!(output.status.code(), Some(1));
    let log = String::from_utf8_lossy(&output.stderr);
    assert!(!log.contains("Replaced"), "log was {}", log);
    cleanup(&input_path);
}

#[test]
fn test_invalid_color_exits_with_usage_error() {
    let output = run(&["-i", "in.png", "-o", "out.png", "-s", "FF00", "-t", "00FF00"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--source-color"));
}
