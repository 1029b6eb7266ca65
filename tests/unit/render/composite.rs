use super::*;

#[test]
fn transparent_src_is_noop() {
    let dst = [10, 20, 30, 40];
    assert_eq!(over(dst, [255, 255, 255, 0]), dst);
}

#[test]
fn opaque_src_replaces_dst() {
    assert_eq!(over([255, 255, 255, 255], [3, 122, 149, 255]), [3, 122, 149, 255]);
}

#[test]
fn half_alpha_over_white_mixes() {
    // 50% red premultiplied over opaque white.
    let out = over([255, 255, 255, 255], [128, 0, 0, 128]);
    assert_eq!(out[3], 255);
    assert_eq!(out[0], 255);
    assert_eq!(out[1], 127);
}

#[test]
fn in_place_requires_matching_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(over_in_place(&mut dst, &[0u8; 4]).is_err());
    assert!(over_in_place(&mut dst, &[9, 9, 9, 255, 0, 0, 0, 0]).is_ok());
    assert_eq!(dst, vec![9, 9, 9, 255, 0, 0, 0, 0]);
}

#[test]
fn unpremultiply_restores_straight_channels() {
    let mut px = vec![64u8, 32, 0, 128, 7, 7, 7, 0, 1, 2, 3, 255];
    unpremultiply_in_place(&mut px);
    assert_eq!(px, vec![128, 64, 0, 128, 7, 7, 7, 0, 1, 2, 3, 255]);
}
