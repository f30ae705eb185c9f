//! Command line round trips through temporary files.

use clap::Parser;
use image::{Rgba, RgbaImage};
use stonecut::cli::{run, run_project, Cli, ProjectArgs};
use stonecut::{Config, Drawing};
use tempfile::TempDir;

fn write_canvas(dir: &TempDir) -> std::path::PathBuf {
    let mut raster = RgbaImage::from_pixel(20, 20, Rgba([255, 255, 255, 255]));
    for i in 4..=15 {
        for (x, y) in [(i, 4), (i, 15), (4, i), (15, i)] {
            raster.put_pixel(x, y, Rgba([0, 0, 0, 255]));
        }
    }
    let path = dir.path().join("canvas.png");
    raster.save(&path).unwrap();
    path
}

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("stonecut").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_fill_trace_and_project() {
    let dir = TempDir::new().unwrap();
    let canvas = write_canvas(&dir);
    let mask = dir.path().join("mask.png");
    let drawing = dir.path().join("drawing.json");
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[canvas]\nwidth_px = 20\nheight_px = 20\nwidth_m = 2.0\nheight_m = 2.0\n")
        .unwrap();

    run(cli(&[
        "--config",
        config.to_str().unwrap(),
        "fill",
        "--input",
        canvas.to_str().unwrap(),
        "--seed",
        "10,10",
        "--color",
        "#3366cc",
        "--output",
        mask.to_str().unwrap(),
        "--drawing",
        drawing.to_str().unwrap(),
    ]))
    .unwrap();

    assert!(mask.exists());
    let doc = Drawing::from_json(&std::fs::read_to_string(&drawing).unwrap()).unwrap();
    assert_eq!(doc.fills().count(), 1);
    assert_eq!(doc.fills().next().map(|f| f.color.as_str()), Some("#3366cc"));

    let gcode_path = dir.path().join("mask.gcode");
    let svg_path = dir.path().join("mask.svg");
    run(cli(&[
        "trace",
        "--input",
        mask.to_str().unwrap(),
        "--svg",
        svg_path.to_str().unwrap(),
        "--output",
        gcode_path.to_str().unwrap(),
    ]))
    .unwrap();
    let traced = std::fs::read_to_string(&gcode_path).unwrap();
    assert!(traced.starts_with("G21\nG90\n"));
    assert!(std::fs::read_to_string(&svg_path).unwrap().contains(" Z\""));

    let out_dir = dir.path().join("out");
    let config = Config::load_from_file(&config).unwrap();
    let written = run_project(
        &config,
        ProjectArgs {
            input: drawing.clone(),
            output_dir: out_dir.clone(),
            name: "garden".to_string(),
        },
    )
    .unwrap()
    .unwrap();

    let name = written.file_name().unwrap().to_str().unwrap().to_string();
    assert!(name.starts_with("garden_2.000m_x_2.000m_"));
    assert!(name.ends_with(".gcode"));
    assert_eq!(std::fs::read_to_string(&written).unwrap(), traced);
}

#[test]
fn test_project_without_fills_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let drawing = dir.path().join("drawing.json");
    std::fs::write(&drawing, r#"{"operations": [{"type": "pen", "points": [0, 0, 5, 5]}]}"#)
        .unwrap();

    let written = run_project(
        &Config::default(),
        ProjectArgs {
            input: drawing,
            output_dir: dir.path().to_path_buf(),
            name: "empty".to_string(),
        },
    )
    .unwrap();
    assert!(written.is_none());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_fill_noop_writes_no_mask() {
    let dir = TempDir::new().unwrap();
    let canvas = write_canvas(&dir);
    let mask = dir.path().join("mask.png");

    // The frame pixel is already black.
    run(cli(&[
        "fill",
        "-i",
        canvas.to_str().unwrap(),
        "-s",
        "4,4",
        "-c",
        "#000000",
        "-o",
        mask.to_str().unwrap(),
    ]))
    .unwrap();
    assert!(!mask.exists());
}

#[test]
fn test_stone_program_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    std::fs::write(&config, r#"{"stone": {"cut_feed": 650.0}}"#).unwrap();

    run(cli(&[
        "--config",
        config.to_str().unwrap(),
        "stone",
        "--x",
        "400",
        "--y",
        "300",
        "--width",
        "100",
        "--height",
        "50",
        "--rotation",
        "270",
        "--index",
        "2",
        "--output-dir",
        dir.path().to_str().unwrap(),
    ]))
    .unwrap();

    let program = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .find(|e| e.file_name().to_string_lossy().starts_with("stone_2_1.000m_x_0.500m_"))
        .expect("stone program written");
    let gcode = std::fs::read_to_string(program.path()).unwrap();
    assert!(gcode.contains("; Stone 2 (ID: stone-2)"));
    assert!(gcode.contains("R-90.00 ; Rotate coordinate system"));
    assert!(gcode.contains("F650 ; Cut to right"));
}

#[test]
fn test_trace_of_blank_mask_fails() {
    let dir = TempDir::new().unwrap();
    let mask = dir.path().join("blank.png");
    RgbaImage::new(8, 8).save(&mask).unwrap();

    let err = run(cli(&["trace", "--input", mask.to_str().unwrap()])).unwrap_err();
    assert!(err.to_string().contains("No drawable points"));
}
