use std::io::Cursor;

use super::*;
use crate::foundation::core::Argb8;

#[test]
fn rgba_conversion_moves_alpha_last() {
    let mut bmp = Bitmap::new(2, 1).unwrap();
    bmp.set_pixel(0, 0, Argb8::new(128, 10, 20, 30)).unwrap();
    bmp.set_pixel(1, 0, Argb8::new(255, 40, 50, 60)).unwrap();

    let img = to_rgba_image(&bmp).unwrap();
    assert_eq!(img.get_pixel(0, 0).0, [10, 20, 30, 128]);
    assert_eq!(img.get_pixel(1, 0).0, [40, 50, 60, 255]);

    assert_eq!(from_rgba_image(&img).unwrap().pixels(), bmp.pixels());
}

#[test]
fn png_preview_decodes_with_same_pixels() {
    let mut bmp = Bitmap::new(3, 2).unwrap();
    bmp.fill(Argb8::new(200, 1, 2, 3));

    let dir = std::path::PathBuf::from("target").join("preview_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("preview.png");
    save_png(&bmp, &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    let back = image::load(Cursor::new(bytes), image::ImageFormat::Png)
        .unwrap()
        .to_rgba8();
    assert_eq!(back.dimensions(), (3, 2));
    assert!(back.pixels().all(|p| p.0 == [1, 2, 3, 200]));
}
