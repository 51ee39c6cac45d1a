use pixelfilter::filters::{
    blur, contrast, flip_horizontal, flip_vertical, grayscale, tint, vintage, BorderPolicy,
};
use pixelfilter::{Channel, PixelGrid};
use proptest::prelude::*;

fn grid_strategy(max_side: usize) -> impl Strategy<Value = PixelGrid> {
    (1..=max_side, 1..=max_side).prop_flat_map(|(h, w)| {
        prop::collection::vec(any::<u8>(), h * w * 4)
            .prop_map(move |raw| PixelGrid::from_rgba_raw(w, h, raw).unwrap())
    })
}

fn channel_strategy() -> impl Strategy<Value = Channel> {
    prop_oneof![
        Just(Channel::Red),
        Just(Channel::Green),
        Just(Channel::Blue),
        Just(Channel::Alpha),
    ]
}

proptest! {
    #[test]
    fn flip_horizontal_is_involution(g in grid_strategy(8)) {
        prop_assert_eq!(flip_horizontal(&flip_horizontal(&g)), g);
    }

    #[test]
    fn flip_vertical_is_involution(g in grid_strategy(8)) {
        prop_assert_eq!(flip_vertical(&flip_vertical(&g)), g);
    }

    #[test]
    fn flip_horizontal_mirrors_columns(g in grid_strategy(8)) {
        let (rows, cols) = g.dim();
        let flipped = flip_horizontal(&g);
        for r in 0..rows {
            for c in 0..cols {
                prop_assert_eq!(flipped.pixel(r, c), g.pixel(r, cols - 1 - c));
            }
        }
    }

    #[test]
    fn grayscale_equalizes_channels(g in grid_strategy(8)) {
        let gray = grayscale(&g).unwrap();
        for px in gray.as_array().lanes(ndarray::Axis(2)) {
            prop_assert_eq!(px[0], px[1]);
            prop_assert_eq!(px[1], px[2]);
        }
    }

    #[test]
    fn grayscale_is_idempotent(g in grid_strategy(8)) {
        let once = grayscale(&g).unwrap();
        prop_assert_eq!(grayscale(&once).unwrap(), once);
    }

    #[test]
    fn tint_one_is_identity(g in grid_strategy(8), channel in channel_strategy()) {
        prop_assert_eq!(tint(&g, 1.0, channel).unwrap(), g);
    }

    #[test]
    fn tint_touches_only_target_channel(
        g in grid_strategy(6),
        factor in -3.0f64..3.0,
        channel in channel_strategy(),
    ) {
        let out = tint(&g, factor, channel).unwrap();
        let target = channel.index();
        for ((r, c, ch), &v) in out.as_array().indexed_iter() {
            if ch != target {
                prop_assert_eq!(v, g.as_array()[[r, c, ch]]);
            }
        }
    }

    #[test]
    fn contrast_one_is_near_identity(g in grid_strategy(8)) {
        let out = contrast(&g, 1.0).unwrap();
        for (a, b) in out.as_array().iter().zip(g.as_array().iter()) {
            prop_assert!((*a as i32 - *b as i32).abs() <= 1);
        }
    }

    #[test]
    fn filters_preserve_dimensions(
        g in grid_strategy(8),
        factor in -10.0f64..10.0,
    ) {
        let dim = g.dim();
        prop_assert_eq!(flip_horizontal(&g).dim(), dim);
        prop_assert_eq!(flip_vertical(&g).dim(), dim);
        prop_assert_eq!(grayscale(&g).unwrap().dim(), dim);
        prop_assert_eq!(vintage(&g).unwrap().dim(), dim);
        prop_assert_eq!(contrast(&g, factor).unwrap().dim(), dim);
        prop_assert_eq!(tint(&g, factor, Channel::Blue).unwrap().dim(), dim);
    }

    #[test]
    fn blur_copy_input_keeps_border(g in grid_strategy(9), radius in 0usize..3) {
        let (h, w) = g.dim();
        prop_assume!(2 * radius < h.min(w));
        let out = blur(&g, radius, BorderPolicy::CopyInput).unwrap();
        for r in 0..h {
            for c in 0..w {
                let on_border = r < radius || c < radius || r + radius >= h || c + radius >= w;
                if on_border {
                    prop_assert_eq!(out.pixel(r, c), g.pixel(r, c));
                }
            }
        }
    }

    #[test]
    fn blur_mean_lies_within_neighborhood(g in grid_strategy(7)) {
        let (h, w) = g.dim();
        prop_assume!(h >= 3 && w >= 3);
        let out = blur(&g, 1, BorderPolicy::Transparent).unwrap();
        for r in 1..h - 1 {
            for c in 1..w - 1 {
                for ch in 0..4 {
                    let mut lo = u8::MAX;
                    let mut hi = u8::MIN;
                    for dr in 0..3 {
                        for dc in 0..3 {
                            let v = g.as_array()[[r + dr - 1, c + dc - 1, ch]];
                            lo = lo.min(v);
                            hi = hi.max(v);
                        }
                    }
                    let v = out.as_array()[[r, c, ch]];
                    prop_assert!(lo <= v && v <= hi);
                }
            }
        }
    }

    #[test]
    fn blur_rejects_oversized_radius(g in grid_strategy(6), extra in 0usize..3) {
        let (h, w) = g.dim();
        let radius = h.min(w).div_ceil(2) + extra;
        prop_assert!(blur(&g, radius, BorderPolicy::CopyInput).is_err());
    }
}

#[test]
fn vintage_white_grid() {
    let g = PixelGrid::filled(3, 3, [255, 255, 255, 255]);
    let out = vintage(&g).unwrap();
    assert_eq!(out, PixelGrid::filled(3, 3, [255, 255, 238, 255]));
}

#[test]
fn blur_uniform_gray_interior() {
    let g = PixelGrid::filled(5, 5, [100, 100, 100, 255]);
    let out = blur(&g, 1, BorderPolicy::Transparent).unwrap();
    for r in 1..4 {
        for c in 1..4 {
            assert_eq!(out.pixel(r, c), Some([100, 100, 100, 255]));
        }
    }
    assert_eq!(out.pixel(0, 0), Some([0, 0, 0, 0]));
}

#[test]
fn flip_horizontal_three_pixel_row() {
    let a = [1, 1, 1, 255];
    let b = [2, 2, 2, 255];
    let c = [3, 3, 3, 255];
    let g = PixelGrid::from_rows(&[vec![a, b, c]]).unwrap();
    let out = flip_horizontal(&g);
    assert_eq!(out, PixelGrid::from_rows(&[vec![c, b, a]]).unwrap());
}
