use proptest::prelude::*;
use stonecut_raster::{boundary_pixels, extract_boundary, PixelMask};

fn arb_mask() -> impl Strategy<Value = PixelMask> {
    (1u32..16, 1u32..16).prop_flat_map(|(w, h)| {
        proptest::collection::vec(any::<bool>(), (w * h) as usize).prop_map(move |cells| {
            let pixels = cells
                .iter()
                .enumerate()
                .filter(|(_, filled)| **filled)
                .map(|(i, _)| (i as u32 % w, i as u32 / w))
                .collect::<Vec<_>>();
            PixelMask::from_pixels(w, h, pixels)
        })
    })
}

proptest! {
    #[test]
    fn boundary_is_non_empty_and_inside_mask(mask in arb_mask()) {
        let contour = extract_boundary(&mask);
        prop_assert_eq!(contour.is_empty(), mask.is_empty());
        for p in &contour {
            prop_assert!(mask.contains(p.x as i64, p.y as i64));
        }
    }

    #[test]
    fn contour_visits_every_boundary_pixel_once(mask in arb_mask()) {
        let pixels = boundary_pixels(&mask);
        let contour = extract_boundary(&mask);
        let closed = contour.len() == pixels.len() + 1;
        prop_assert!(closed || contour.len() == pixels.len());

        let open = if closed { &contour[..contour.len() - 1] } else { &contour[..] };
        let mut seen: Vec<(u32, u32)> = open.iter().map(|p| (p.x as u32, p.y as u32)).collect();
        seen.sort_unstable();
        let mut expected = pixels.clone();
        expected.sort_unstable();
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn adjacent_ends_are_closed(mask in arb_mask()) {
        let contour = extract_boundary(&mask);
        if contour.len() > 2 {
            let first = contour[0];
            let last = contour[contour.len() - 1];
            if last != first {
                prop_assert!(last.distance_to(&first) > 2f64.sqrt());
            }
        }
    }
}
