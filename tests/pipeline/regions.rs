//! Per-region tracing, caching and failure isolation.

use image::Rgb;
use stonecut::{DrawingOperation, FillOperation, FillPipeline, PixelMask};
use stonecut_core::Point;
use stonecut_raster::encode_mask_png;

fn fill_from(pixels: &[(u32, u32)]) -> FillOperation {
    let mask = PixelMask::from_pixels(12, 12, pixels.iter().copied());
    let data = encode_mask_png(&mask.to_image(Rgb([0, 0, 0]))).unwrap();
    FillOperation::new(data, "#000000", 12, 12)
}

fn block(x0: u32, y0: u32, size: u32) -> Vec<(u32, u32)> {
    (y0..y0 + size)
        .flat_map(|y| (x0..x0 + size).map(move |x| (x, y)))
        .collect()
}

#[test]
fn test_regions_concatenate_in_drawing_order() {
    let first = fill_from(&block(8, 8, 2));
    let second = fill_from(&block(0, 0, 2));
    let ops = vec![
        DrawingOperation::Fill(first.clone()),
        DrawingOperation::Fill(second.clone()),
    ];

    let mut pipeline = FillPipeline::new();
    let traces = pipeline.trace_regions(&ops);
    assert_eq!(traces.len(), 2);
    assert_eq!(traces[0].id, first.id);
    assert_eq!(traces[1].id, second.id);

    let points = pipeline.collect_points(&ops);
    assert_eq!(points.first(), Some(&Point::new(8.0, 8.0)));
    assert_eq!(points[5], Point::new(0.0, 0.0));
}

#[test]
fn test_decode_failure_skips_only_that_region() {
    let good = fill_from(&block(1, 1, 3));
    let mut bad = fill_from(&block(5, 5, 3));
    bad.image_data = "data:image/png;base64,bm90IGFuIGltYWdl".to_string();

    let ops = vec![
        DrawingOperation::Fill(bad.clone()),
        DrawingOperation::Fill(good.clone()),
    ];
    let mut pipeline = FillPipeline::new();
    let traces = pipeline.trace_regions(&ops);

    assert!(!traces[0].is_ok());
    assert!(traces[0].outcome.as_ref().unwrap_err().contains("decode"));
    assert_eq!(traces[1].boundary().map(|b| b.len()), Some(9));

    // The failed region is not cached and contributes no points.
    assert!(!pipeline.cache().contains(&bad.id));
    assert_eq!(pipeline.collect_points(&ops).len(), 9);
}

#[test]
fn test_changed_image_is_traced_again() {
    let mut fill = fill_from(&block(0, 0, 2));
    let mut pipeline = FillPipeline::new();

    let before = pipeline.trace_fill(&fill);
    assert_eq!(before.boundary().map(|b| b[0]), Some(Point::new(0.0, 0.0)));

    // Same id, new region.
    fill.image_data = fill_from(&block(6, 6, 2)).image_data;
    let after = pipeline.trace_fill(&fill);
    assert_eq!(after.boundary().map(|b| b[0]), Some(Point::new(6.0, 6.0)));
    assert_eq!(pipeline.cache().len(), 1);
}

#[test]
fn test_removed_fills_are_evicted() {
    let kept = fill_from(&block(0, 0, 2));
    let removed = fill_from(&block(4, 4, 2));

    let mut pipeline = FillPipeline::new();
    pipeline.trace_regions(&[
        DrawingOperation::Fill(kept.clone()),
        DrawingOperation::Fill(removed.clone()),
    ]);
    assert_eq!(pipeline.cache().len(), 2);

    pipeline.trace_regions(&[DrawingOperation::Fill(kept.clone())]);
    assert!(pipeline.cache().contains(&kept.id));
    assert!(!pipeline.cache().contains(&removed.id));
}

#[test]
fn test_fill_without_image_data_is_ignored() {
    let mut empty = fill_from(&block(0, 0, 2));
    empty.image_data.clear();
    let traces = FillPipeline::new().trace_regions(&[DrawingOperation::Fill(empty)]);
    assert!(traces.is_empty());
}
