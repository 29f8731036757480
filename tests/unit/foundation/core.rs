use super::*;

#[test]
fn channel_index_matches_storage_order() {
    let px = Argb8::new(1, 2, 3, 4);
    let bytes = px.to_bytes();
    for ch in Channel::ALL {
        assert_eq!(bytes[ch.index()], px.channel(ch));
    }
    assert_eq!(Argb8::from_bytes(bytes), px);
    assert_eq!(Channel::Alpha.index(), 0);
    assert_eq!(Channel::Blue.index(), 3);
}

#[test]
fn pair_helpers_keep_pixel_order() {
    let p0 = Argb8::new(10, 20, 30, 40);
    let p1 = Argb8::new(50, 60, 70, 80);
    let pair = pair_from_pixels(p0, p1);
    assert_eq!(pair, [10, 20, 30, 40, 50, 60, 70, 80]);
    assert_eq!(pixels_from_pair(&pair), (p0, p1));
}

#[test]
fn transparent_is_all_zero() {
    assert_eq!(Argb8::TRANSPARENT.to_bytes(), [0; 4]);
    assert_eq!(Argb8::default(), Argb8::TRANSPARENT);
}
