use super::*;

#[test]
fn new_is_zero_filled_and_sized() {
    let bmp = Bitmap::new(5, 3).unwrap();
    assert_eq!(bmp.width(), 5);
    assert_eq!(bmp.height(), 3);
    assert_eq!(bmp.pixels().len(), 5 * 3 * 4);
    assert!(bmp.pixels().iter().all(|&b| b == 0));
    assert_eq!(bmp.header().bits_per_pixel, 32);
    assert_eq!(bmp.header().image_size, 60);
    assert_eq!(bmp.header().file_size, 130);
}

#[test]
fn zero_sized_image_is_allowed() {
    let bmp = Bitmap::new(0, 4).unwrap();
    assert!(bmp.pixels().is_empty());
    assert_eq!(bmp.pixel(0, 0), None);
}

#[test]
fn set_pixel_then_read_back() {
    let mut bmp = Bitmap::new(2, 2).unwrap();
    let px = Argb8::new(255, 1, 2, 3);
    bmp.set_pixel(1, 1, px).unwrap();

    assert_eq!(bmp.pixel(1, 1), Some(px));
    assert_eq!(bmp.pixel(0, 1), Some(Argb8::TRANSPARENT));
    assert_eq!(&bmp.pixels()[12..16], &[255, 1, 2, 3]);
}

#[test]
fn set_pixel_outside_is_validation_error() {
    let mut bmp = Bitmap::new(2, 2).unwrap();
    let err = bmp.set_pixel(2, 0, Argb8::TRANSPARENT).unwrap_err();
    assert!(matches!(err, OverError::Validation(_)));
}

#[test]
fn from_parts_checks_buffer_length() {
    let header = BmpHeader::for_dimensions(2, 1).unwrap();
    assert!(Bitmap::from_parts(header, vec![0; 8]).is_ok());
    let err = Bitmap::from_parts(header, vec![0; 7]).unwrap_err();
    assert!(matches!(err, OverError::Malformed(_)));
}

#[test]
fn fill_sets_every_pixel() {
    let mut bmp = Bitmap::new(3, 1).unwrap();
    bmp.fill(Argb8::new(9, 8, 7, 6));
    assert_eq!(bmp.into_pixels(), [9, 8, 7, 6].repeat(3));
}

#[test]
fn header_setters_leave_dimensions_and_buffer_alone() {
    let mut bmp = Bitmap::new(2, 2).unwrap();
    bmp.set_compression(3);
    bmp.set_resolution(2835, 2835);
    bmp.set_colors(16, 16);

    assert_eq!((bmp.width(), bmp.height()), (2, 2));
    assert_eq!(bmp.pixels().len(), bmp.header().pixel_len().unwrap());
    assert!(matches!(
        bmp.set_pixel(2, 1, Argb8::TRANSPARENT),
        Err(OverError::Validation(_))
    ));

    let bytes = crate::codec::bmp::encode(&bmp);
    assert_eq!(bytes.len(), 70 + 16);
    assert_eq!(crate::codec::bmp::decode(&bytes).unwrap(), bmp);
}

#[test]
fn pixel_reads_storage_order() {
    let header = BmpHeader::for_dimensions(2, 1).unwrap();
    let bmp = Bitmap::from_parts(header, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    assert_eq!(bmp.pixel(1, 0), Some(Argb8::new(5, 6, 7, 8)));
    assert_eq!(bmp.pixel(1, 0).map(|p| p.to_bytes()), Some([5, 6, 7, 8]));
    assert_eq!(bmp.pixel(2, 0), None);
}
