//! Tests for the feature extractor

use image::{Rgb, RgbImage, Rgba, RgbaImage};

use super::test_utils::{assert_close, gray_image, noise_image, stair_grid};
use crate::glcm::direction::Direction;
use crate::glcm::errors::GlcmError;
use crate::glcm::extractor::{extract_from_grid, matrix_levels, ExtractorStage, GlcmExtractor};

#[test]
fn test_stair_image_features() {
    // Gray equals x, so the grid is [[0,0,0],[1,1,1],[2,2,2]]
    let img = gray_image(3, 3, |x, _| x as u8);
    let mut extractor = GlcmExtractor::new(img, 255).unwrap();
    let f = *extractor.extract().unwrap();

    assert_close(f.contrast, 0.75);
    assert_close(f.dissimilarity, 0.75);
    assert_close(f.homogeneity, 0.625);
    assert_close(f.energy, (1.0 / 3.0 + 0.75) / 4.0);
    assert_close(f.entropy, (3f64.log10() + 3.0 * 4f64.log10()) / 4.0);
}

#[test]
fn test_directional_features_in_fixed_order() {
    let img = gray_image(3, 3, |x, _| x as u8);
    let mut extractor = GlcmExtractor::new(img, 255).unwrap();
    extractor.extract().unwrap();

    let directional = extractor.directional_features().unwrap();
    let order: Vec<Direction> = directional.iter().map(|d| d.direction).collect();
    assert_eq!(order, Direction::ALL.to_vec());

    assert_close(directional[0].features.energy, 1.0 / 3.0);
    for d in &directional[1..] {
        assert_close(d.features.contrast, 1.0);
        assert_close(d.features.energy, 0.25);
    }
}

#[test]
fn test_clamped_levels_do_not_change_results() {
    let img = gray_image(3, 3, |x, _| x as u8);
    let mut extractor = GlcmExtractor::new(img, 255).unwrap();
    let from_image = *extractor.extract().unwrap();

    let from_grid = extract_from_grid(&stair_grid(), 3).unwrap();
    assert_eq!(*from_grid.features(), from_image);
}

#[test]
fn test_rescale_collapses_small_grays() {
    // gray * 10 / 255 is 0 for gray 0, 1 and 2
    let img = gray_image(3, 3, |x, _| x as u8);
    let mut extractor = GlcmExtractor::new(img, 10).unwrap();
    let f = *extractor.extract().unwrap();

    assert_eq!(f.contrast, 0.0);
    assert_eq!(f.dissimilarity, 0.0);
    assert_eq!(f.homogeneity, 1.0);
    assert_eq!(f.energy, 1.0);
    assert_eq!(f.entropy, 0.0);
}

#[test]
fn test_uniform_color_image() {
    let img = RgbImage::from_pixel(5, 4, Rgb([120, 60, 30]));
    let mut extractor = GlcmExtractor::new(img, 15).unwrap();
    extractor.extract().unwrap();

    assert_eq!(extractor.contrast().unwrap(), 0.0);
    assert_eq!(extractor.dissimilarity().unwrap(), 0.0);
    assert_eq!(extractor.homogeneity().unwrap(), 1.0);
    assert_eq!(extractor.energy().unwrap(), 1.0);
    assert_eq!(extractor.entropy().unwrap(), 0.0);
}

#[test]
fn test_alpha_does_not_affect_features() {
    let opaque = RgbaImage::from_fn(6, 6, |x, y| Rgba([(x * 40) as u8, (y * 40) as u8, 90, 255]));
    let clear = RgbaImage::from_fn(6, 6, |x, y| Rgba([(x * 40) as u8, (y * 40) as u8, 90, 0]));

    let mut a = GlcmExtractor::new(opaque, 15).unwrap();
    let mut b = GlcmExtractor::new(clear, 15).unwrap();
    assert_eq!(*a.extract().unwrap(), *b.extract().unwrap());
}

#[test]
fn test_accessors_before_extract() {
    let extractor = GlcmExtractor::new(noise_image(4, 4, 5), 15).unwrap();

    assert_eq!(extractor.stage(), ExtractorStage::Uninitialized);
    assert!(matches!(extractor.contrast(), Err(GlcmError::NotExtracted)));
    assert!(matches!(extractor.homogenity(), Err(GlcmError::NotExtracted)));
    assert!(matches!(extractor.entropy(), Err(GlcmError::NotExtracted)));
    assert!(matches!(extractor.energy(), Err(GlcmError::NotExtracted)));
    assert!(matches!(extractor.dissimilarity(), Err(GlcmError::NotExtracted)));
    assert!(matches!(extractor.features(), Err(GlcmError::NotExtracted)));
}

#[test]
fn test_accessors_after_extract() {
    let mut extractor = GlcmExtractor::new(noise_image(9, 8, 17), 15).unwrap();
    let f = *extractor.extract().unwrap();

    assert_eq!(extractor.stage(), ExtractorStage::Extracted);
    assert_eq!(extractor.contrast().unwrap(), f.contrast);
    assert_eq!(extractor.homogenity().unwrap(), f.homogeneity);
    assert_eq!(extractor.homogeneity().unwrap(), f.homogeneity);
    assert_eq!(extractor.entropy().unwrap(), f.entropy);
    assert_eq!(extractor.energy().unwrap(), f.energy);
    assert_eq!(extractor.dissimilarity().unwrap(), f.dissimilarity);
}

#[test]
fn test_extract_is_repeatable() {
    let mut extractor = GlcmExtractor::new(noise_image(21, 17, 314), 31).unwrap();
    let first = *extractor.extract().unwrap();
    let second = *extractor.extract().unwrap();

    assert_eq!(first.contrast.to_bits(), second.contrast.to_bits());
    assert_eq!(first.homogeneity.to_bits(), second.homogeneity.to_bits());
    assert_eq!(first.entropy.to_bits(), second.entropy.to_bits());
    assert_eq!(first.energy.to_bits(), second.energy.to_bits());
    assert_eq!(first.dissimilarity.to_bits(), second.dissimilarity.to_bits());
}

#[test]
fn test_single_pixel_is_degenerate() {
    let mut extractor = GlcmExtractor::new(RgbImage::from_pixel(1, 1, Rgb([9, 9, 9])), 15).unwrap();

    let result = extractor.extract();
    assert!(matches!(result, Err(GlcmError::DegenerateInput { .. })));
    assert_eq!(extractor.stage(), ExtractorStage::Quantized);
    assert!(matches!(extractor.features(), Err(GlcmError::NotExtracted)));
}

#[test]
fn test_every_direction_of_single_pixel_is_degenerate() {
    use crate::glcm::cooccurrence::CoOccurrenceBuilder;
    use crate::glcm::matrix::ProbabilityMatrix;

    let grid = super::test_utils::grid(&[&[0]]);
    let builder = CoOccurrenceBuilder::new(16);
    for direction in Direction::ALL {
        let counts = builder.build(&grid, direction).unwrap();
        match ProbabilityMatrix::from_counts(&counts) {
            Err(GlcmError::DegenerateInput { direction: d }) => assert_eq!(d, direction),
            other => panic!("expected degenerate input for {}, got {:?}", direction, other),
        }
    }
}

#[test]
fn test_one_pixel_wide_image_is_degenerate() {
    // Width 1 leaves a single outer row: only 0° has pairs
    let mut extractor = GlcmExtractor::new(gray_image(1, 5, |_, y| y as u8), 255).unwrap();

    match extractor.extract() {
        Err(GlcmError::DegenerateInput { direction }) => assert_ne!(direction, Direction::Deg0),
        other => panic!("expected degenerate input, got {:?}", other),
    }
}

#[test]
fn test_non_positive_gray_level_is_rejected() {
    for level in [0, -1, i32::MIN] {
        let result = GlcmExtractor::new(RgbImage::new(3, 3), level);
        assert!(matches!(result, Err(GlcmError::InvalidConfiguration(_))), "level {}", level);
    }
}

#[test]
fn test_matrix_levels() {
    assert_eq!(matrix_levels(1).unwrap(), 2);
    assert_eq!(matrix_levels(15).unwrap(), 16);
    assert_eq!(matrix_levels(255).unwrap(), 256);
    assert_eq!(matrix_levels(100_000).unwrap(), 256);
    assert!(matrix_levels(0).is_err());
}

#[test]
fn test_gray_levels_above_255_match_255() {
    let mut at_255 = GlcmExtractor::new(noise_image(10, 10, 77), 255).unwrap();
    let mut above = GlcmExtractor::new(noise_image(10, 10, 77), 4096).unwrap();

    assert_eq!(above.levels(), 256);
    assert_eq!(*at_255.extract().unwrap(), *above.extract().unwrap());
}
