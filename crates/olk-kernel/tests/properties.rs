//! End-to-end behavior of the public kernel functions.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use olk_kernel::{
    BufferView, ColorMatrix, Curve, Kernel, Lut1D, expand_channels, lut_sample, lut_sample_raw,
    matrix_transform, matrix_transform_raw, pointwise_map,
};
use olk_transfer::{srgb, srgb_inv};

#[test]
fn test_lin_is_identity() {
    let input: Vec<f32> = (-100..100).map(|i| i as f32 * 0.05).collect();
    assert_eq!(pointwise_map(&input, &Curve::Lin).unwrap(), input);
}

#[test]
fn test_srgb_roundtrip_through_kernel() {
    let input: Vec<f32> = (0..=1000).map(|i| i as f32 / 1000.0).collect();

    let encoded = pointwise_map(&input, &Curve::Srgb).unwrap();
    let decoded = pointwise_map(&encoded, &Curve::SrgbInv).unwrap();
    for (a, b) in decoded.iter().zip(input.iter()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-5);
    }

    let decoded = pointwise_map(&input, &Curve::SrgbInv).unwrap();
    let encoded = pointwise_map(&decoded, &Curve::Srgb).unwrap();
    for (a, b) in encoded.iter().zip(input.iter()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-5);
    }
}

#[test]
fn test_srgb_branch_continuity() {
    let lo = 0.0031308f32;
    assert_abs_diff_eq!(srgb(lo), srgb(f32::from_bits(lo.to_bits() + 1)), epsilon = 1e-4);
    assert_abs_diff_eq!(srgb(lo), lo * 12.92, epsilon = 1e-4);

    let hi = 0.04045f32;
    assert_abs_diff_eq!(srgb_inv(hi), srgb_inv(f32::from_bits(hi.to_bits() + 1)), epsilon = 1e-5);
    assert_abs_diff_eq!(srgb_inv(hi), hi / 12.92, epsilon = 1e-5);
}

#[test]
fn test_lut_identity_ramp_reproduces_input() {
    let size = 2048;
    let lut = Lut1D::identity(size).unwrap();
    let input: Vec<f32> = (1..500).map(|i| i as f32 / 500.0).collect();
    let out = lut_sample(&input, &lut).unwrap();
    for (o, v) in out.iter().zip(input.iter()) {
        assert_abs_diff_eq!(*o, *v, epsilon = 1.0 / (size - 1) as f32 + 1e-6);
    }
}

#[test]
fn test_lut_clamps_including_bounds() {
    let table = [0.25f32, 0.5, 0.625, 0.875, 0.9];
    let (lo, hi) = (0.2f32, 0.7f32);
    let input = [-10.0f32, 0.0, 0.1, lo, hi, 0.8, 10.0, f32::INFINITY];
    let out = lut_sample_raw(&input, &table, lo, hi).unwrap();
    assert_eq!(out, vec![0.25, 0.25, 0.25, 0.25, 0.9, 0.9, 0.9, 0.9]);
}

#[test]
fn test_lut_interior_interpolates() {
    // pos = 0.3 * 5 = 1.5 -> halfway between 0.5 and 0.625
    let table = [0.25f32, 0.5, 0.625, 0.875, 0.9];
    let out = lut_sample_raw(&[0.3f32], &table, 0.0, 1.0).unwrap();
    assert_relative_eq!(out[0], 0.5625, epsilon = 1e-6);
}

#[test]
fn test_matrix_identity() {
    let input: Vec<f32> = (0..99).map(|i| i as f32 / 7.0).collect();
    assert_eq!(matrix_transform(&input, &ColorMatrix::IDENTITY).unwrap(), input);
    let flat = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
    assert_eq!(matrix_transform_raw(&input, &flat).unwrap(), input);
}

#[test]
fn test_matrix_row_column_convention() {
    let out = matrix_transform_raw(&[1.0f32, 0.0, 0.0], &[0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0])
        .unwrap();
    assert_eq!(out, vec![0.0, 1.0, 0.0]);
}

#[test]
fn test_matrix_shape_errors() {
    let err = matrix_transform_raw(&[1.0f32, 0.0, 0.0], &[1.0; 8]).unwrap_err();
    assert!(err.is_shape_error());

    let err = matrix_transform(&[1.0f32, 0.0, 0.0, 1.0], &ColorMatrix::IDENTITY).unwrap_err();
    assert!(err.is_shape_error());
}

#[test]
fn test_expand_channels() {
    assert_eq!(expand_channels(&[0.2f32, 0.5]).unwrap(), vec![0.2, 0.2, 0.2, 0.5, 0.5, 0.5]);
}

#[test]
fn test_gray_pipeline() {
    // single channel -> RGB -> matrix -> encode
    let gray = [0.0f32, 0.18, 1.0];
    let rgb = expand_channels(&gray).unwrap();
    let luma = ColorMatrix::from_rows([
        [0.2126, 0.7152, 0.0722],
        [0.2126, 0.7152, 0.0722],
        [0.2126, 0.7152, 0.0722],
    ]);
    let mixed = matrix_transform(&rgb, &luma).unwrap();
    let encoded = pointwise_map(&mixed, &Curve::Srgb).unwrap();

    assert_eq!(encoded.len(), 9);
    for (k, px) in encoded.chunks_exact(3).enumerate() {
        assert_abs_diff_eq!(px[0], srgb(gray[k]), epsilon = 1e-5);
        assert_eq!(px[0], px[1]);
        assert_eq!(px[1], px[2]);
    }
}

#[test]
fn test_shaped_buffers_must_be_flattened() {
    let image = vec![0.5f32; 4 * 2 * 3];
    let view = BufferView::new(&image, &[4, 2, 3]).unwrap();
    let kernel = Kernel::new();

    assert!(kernel.pointwise_map(view, &Curve::Srgb).unwrap_err().is_shape_error());
    assert!(kernel.matrix_transform(view, &ColorMatrix::IDENTITY).is_err());
    assert!(kernel.expand_channels(view).is_err());

    let flat = view.flatten();
    assert_eq!(kernel.matrix_transform(flat, &ColorMatrix::IDENTITY).unwrap(), image);
}
