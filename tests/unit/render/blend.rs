use super::*;
use crate::foundation::core::Argb8;

fn solid(width: u32, height: u32, px: Argb8) -> Bitmap {
    let mut bmp = Bitmap::new(width, height).unwrap();
    bmp.fill(px);
    bmp
}

#[test]
fn opaque_foreground_covers_whole_background() {
    let fg_px = Argb8::new(255, 10, 20, 30);
    let bg = solid(4, 1, Argb8::new(255, 90, 90, 90));
    let fg = solid(4, 1, fg_px);

    let out = blend(&bg, &fg, 0, 0).unwrap();
    assert_eq!(out.pixels(), fg_px.to_bytes().repeat(4).as_slice());
}

#[test]
fn result_copies_background_resolution_and_compression_only() {
    let mut bg = solid(2, 2, Argb8::new(255, 1, 1, 1));
    bg.set_resolution(2835, 1417);
    bg.set_compression(3);
    bg.set_colors(12, 4);
    let fg = solid(2, 2, Argb8::new(255, 2, 2, 2));

    let out = blend(&bg, &fg, 0, 0).unwrap();
    let h = out.header();
    assert_eq!((h.h_resolution, h.v_resolution, h.compression), (2835, 1417, 3));
    assert_eq!((h.colors_used, h.colors_required), (0, 0));
    assert_eq!((h.width, h.height), (2, 2));
}

#[test]
fn pixels_outside_footprint_stay_zero() {
    let bg = solid(6, 4, Argb8::new(255, 50, 60, 70));
    let fg = solid(2, 2, Argb8::new(255, 1, 2, 3));

    let out = blend(&bg, &fg, 2, 1).unwrap();
    for y in 0..4 {
        for x in 0..6 {
            let inside = (2..4).contains(&x) && (1..3).contains(&y);
            let expected = if inside {
                Argb8::new(255, 1, 2, 3)
            } else {
                Argb8::TRANSPARENT
            };
            assert_eq!(out.pixel(x, y), Some(expected), "({x}, {y})");
        }
    }
}

#[test]
fn odd_width_skips_last_column() {
    let bg = solid(3, 2, Argb8::new(255, 50, 60, 70));
    let fg = solid(3, 2, Argb8::new(255, 1, 2, 3));

    let (out, stats) = blend_with_opts(&bg, &fg, 0, 0, &BlendOpts::default()).unwrap();
    for y in 0..2 {
        assert_eq!(out.pixel(0, y), Some(Argb8::new(255, 1, 2, 3)));
        assert_eq!(out.pixel(1, y), Some(Argb8::new(255, 1, 2, 3)));
        assert_eq!(out.pixel(2, y), Some(Argb8::TRANSPARENT));
    }
    assert_eq!(stats.rows, 2);
    assert_eq!(stats.pairs, 2);
}

#[test]
fn single_column_foreground_blends_nothing() {
    let bg = solid(2, 2, Argb8::new(255, 5, 5, 5));
    let fg = solid(1, 2, Argb8::new(255, 1, 1, 1));

    let (out, stats) = blend_with_opts(&bg, &fg, 1, 0, &BlendOpts::default()).unwrap();
    assert!(out.pixels().iter().all(|&b| b == 0));
    assert_eq!(stats, BlendStats::default());
}

#[test]
fn rows_count_only_rows_with_a_pair() {
    let bg = solid(4, 3, Argb8::new(255, 5, 5, 5));
    let flat = Bitmap::new(4, 0).unwrap();
    let (_, stats) = blend_with_opts(&bg, &flat, 0, 3, &BlendOpts::default()).unwrap();
    assert_eq!(stats.rows, 0);

    let narrow = solid(1, 3, Argb8::new(255, 1, 1, 1));
    let wide = solid(2, 3, Argb8::new(255, 1, 1, 1));
    let opts = BlendOpts {
        parallel: true,
        threads: Some(2),
    };
    for opts in [BlendOpts::default(), opts] {
        let (_, narrow_stats) = blend_with_opts(&bg, &narrow, 0, 0, &opts).unwrap();
        let (_, wide_stats) = blend_with_opts(&bg, &wide, 0, 0, &opts).unwrap();
        assert_eq!(narrow_stats.rows, 0);
        assert_eq!((wide_stats.rows, wide_stats.pairs), (3, 3));
    }
}

#[test]
fn placement_outside_background_is_rejected() {
    let bg = solid(4, 4, Argb8::TRANSPARENT);
    let fg = solid(2, 2, Argb8::TRANSPARENT);

    assert!(blend(&bg, &fg, 2, 2).is_ok());
    for (x, y) in [(3, 0), (0, 3), (u32::MAX, 0), (0, u32::MAX)] {
        let err = blend(&bg, &fg, x, y).unwrap_err();
        assert!(matches!(err, OverError::OutOfBounds(_)), "({x}, {y})");
    }

    let big = solid(5, 1, Argb8::TRANSPARENT);
    assert!(matches!(
        blend(&bg, &big, 0, 0),
        Err(OverError::OutOfBounds(_))
    ));
}

#[test]
fn stats_count_zero_alpha_lanes() {
    let bg = solid(4, 2, Argb8::TRANSPARENT);
    let fg = solid(4, 2, Argb8::new(0, 9, 9, 9));

    let (out, stats) = blend_with_opts(&bg, &fg, 0, 0, &BlendOpts::default()).unwrap();
    assert!(out.pixels().iter().all(|&b| b == 0));
    assert_eq!(stats.pairs, 4);
    assert_eq!(stats.zero_alpha_lanes, 8);
    assert_eq!(stats.wrapped_lanes, 0);
}

#[test]
fn parallel_matches_sequential() {
    let mut bg = Bitmap::new(9, 7).unwrap();
    let mut fg = Bitmap::new(6, 5).unwrap();
    for (i, b) in bg.pixels_mut().iter_mut().enumerate() {
        *b = (i * 31 % 251) as u8;
    }
    for (i, b) in fg.pixels_mut().iter_mut().enumerate() {
        *b = (i * 17 % 253) as u8;
    }

    let (seq, seq_stats) = blend_with_opts(&bg, &fg, 2, 1, &BlendOpts::default()).unwrap();
    let opts = BlendOpts {
        parallel: true,
        threads: Some(3),
    };
    let (par, par_stats) = blend_with_opts(&bg, &fg, 2, 1, &opts).unwrap();

    assert_eq!(seq, par);
    assert_eq!(seq_stats, par_stats);
    assert_eq!(seq_stats.rows, 5);
    assert_eq!(seq_stats.pairs, 15);
}

#[test]
fn zero_threads_is_rejected() {
    let bg = solid(2, 1, Argb8::TRANSPARENT);
    let opts = BlendOpts {
        parallel: true,
        threads: Some(0),
    };
    let err = blend_with_opts(&bg, &bg, 0, 0, &opts).unwrap_err();
    assert!(matches!(err, OverError::Validation(_)));
    assert!(err.to_string().contains("at least one thread"));
}
