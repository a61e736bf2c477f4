use super::*;

#[test]
fn fnv1a_matches_reference_vectors() {
    let mut h = Fnv1a64::new_default();
    h.write_bytes(b"");
    assert_eq!(h.finish(), Fnv1a64::OFFSET_BASIS);

    // Published FNV-1a 64 digest for "a".
    let mut h = Fnv1a64::new_default();
    h.write_bytes(b"a");
    assert_eq!(h.finish(), 0xaf63dc4c8601ec8c);
}

#[test]
fn fnv1a_is_order_sensitive() {
    let mut h1 = Fnv1a64::new_default();
    h1.write_u32(1);
    h1.write_u32(2);
    let mut h2 = Fnv1a64::new_default();
    h2.write_u32(2);
    h2.write_u32(1);
    assert_ne!(h1.finish(), h2.finish());
}

#[test]
fn mul_div255_endpoints() {
    assert_eq!(mul_div255_u8(0, 255), 0);
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(255, 0), 0);
    assert_eq!(mul_div255_u8(100, 128), ((100u32 * 128 + 127) / 255) as u8);
}

#[test]
fn premultiply_then_unpremultiply_is_exact_for_opaque() {
    let mut px = vec![10u8, 200, 77, 255, 0, 0, 0, 0];
    let orig = px.clone();
    premultiply_rgba8_in_place(&mut px);
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(px, orig);
}

#[test]
fn premultiply_zero_alpha_clears_color() {
    let mut px = vec![10u8, 200, 77, 0];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(px, vec![0, 0, 0, 0]);
}

#[test]
fn unpremultiply_half_alpha_roundtrips_within_one() {
    let mut px = vec![50u8, 25, 100, 128];
    unpremultiply_rgba8_in_place(&mut px);
    // 50/128 scaled back to straight alpha.
    assert_eq!(px[3], 128);
    assert!((px[0] as i32 - 100).abs() <= 1);
    assert!((px[1] as i32 - 50).abs() <= 1);
    assert!((px[2] as i32 - 199).abs() <= 1);
}
