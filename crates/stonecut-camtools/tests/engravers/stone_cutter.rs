//! Stone rectangle programs.

use chrono::NaiveDate;
use stonecut_camtools::{normalize_rotation, StoneCutGenerator, StoneCutParameters, StonePlacement};

fn placement(rotation: f64) -> StonePlacement {
    StonePlacement {
        id: "stone-a".to_string(),
        x: 200.0,
        y: 150.0,
        width: 80.0,
        height: 40.0,
        rotation,
    }
}

#[test]
fn test_unrotated_program() {
    let generator = StoneCutGenerator::new(StoneCutParameters::default()).unwrap();
    let gcode = generator.generate(1, &placement(0.0)).unwrap();

    let expected = "\
; G-code generated for stone cutting
; Stone 1 (ID: stone-a)
; Position: X=2.000m, Y=1.500m
; Size: W=0.800m, H=0.400m
; Rotation: 0 degrees
;
G21 ; Set units to millimeters
G90 ; Set to absolute positioning
G28 ; Home all axes
;
G0 X2000.00 Y1500.00 ; Move to stone position
G0 X1600.00 Y1300.00 ; Move to start position (bottom-left)
G1 Z-5 F100 ; Lower tool (adjust Z and feed rate as needed)
G1 X2400.00 Y1300.00 F500 ; Cut to right
G1 X2400.00 Y1700.00 F500 ; Cut to top
G1 X1600.00 Y1700.00 F500 ; Cut to left
G1 X1600.00 Y1300.00 F500 ; Cut to bottom (close rectangle)
G0 Z5 ; Raise tool
;
G28 ; Home all axes
M30 ; Program end and rewind
";
    assert_eq!(gcode, expected);
}

#[test]
fn test_rotated_program_wraps_cut() {
    let generator = StoneCutGenerator::new(StoneCutParameters::default()).unwrap();
    let gcode = generator.generate(3, &placement(-45.0)).unwrap();
    let lines: Vec<&str> = gcode.lines().collect();

    assert!(lines.contains(&"; Stone 3 (ID: stone-a)"));
    assert!(lines.contains(&"; Rotation: -45 degrees"));

    let g68 = lines.iter().position(|l| l.starts_with("G68")).unwrap();
    let plunge = lines.iter().position(|l| l.starts_with("G1 Z")).unwrap();
    let raise = lines.iter().position(|l| l.starts_with("G0 Z")).unwrap();
    let g69 = lines.iter().position(|l| l.starts_with("G69")).unwrap();
    assert_eq!(lines[g68], "G68 X2000.00 Y1500.00 R-45.00 ; Rotate coordinate system");
    assert!(g68 < plunge && plunge < raise && raise < g69);
    assert_eq!(lines.last(), Some(&"M30 ; Program end and rewind"));
}

#[test]
fn test_axes_scale_independently() {
    let params = StoneCutParameters {
        canvas_width_m: 4.0,
        canvas_height_m: 6.0,
        ..Default::default()
    };
    let generator = StoneCutGenerator::new(params).unwrap();
    let (w, h) = generator.size_m(&placement(0.0));
    assert!((w - 0.4).abs() < 1e-9);
    assert!((h - 0.4).abs() < 1e-9);

    let date = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
    assert_eq!(
        generator.file_name(1, &placement(0.0), date),
        "stone_1_0.400m_x_0.400m_2025-01-31.gcode"
    );
}

#[test]
fn test_custom_tool_settings() {
    let params = StoneCutParameters {
        plunge_depth: -2.5,
        plunge_feed: 80.0,
        cut_feed: 1200.0,
        safe_z: 10.0,
        ..Default::default()
    };
    let gcode = StoneCutGenerator::new(params)
        .unwrap()
        .generate(1, &placement(0.0))
        .unwrap();
    assert!(gcode.contains("G1 Z-2.5 F80 ;"));
    assert!(gcode.contains("F1200 ; Cut to right"));
    assert!(gcode.contains("G0 Z10 ; Raise tool"));
}

#[test]
fn test_quarter_turns_stay_in_range() {
    let mut rotation = 0.0;
    for _ in 0..10 {
        rotation = normalize_rotation(rotation + 90.0);
        assert!((-180.0..=180.0).contains(&rotation));
    }
    assert_eq!(rotation, 180.0);
}
