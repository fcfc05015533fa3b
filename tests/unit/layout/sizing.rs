//! Tests for fit-to-column scaling and the global vertical factor

#[cfg(test)]
mod tests {
    use masonrycollage::layout::sizing::{
        ImageDimensions, ScaledSize, SizeFitter, fit_to_column, global_scale,
    };
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn default_fitter(column_count: usize, column_width: u32) -> SizeFitter {
        SizeFitter {
            column_count,
            column_width,
            padding: 40,
            vertical_gap: 20,
            available_height: 920,
        }
    }

    // Tests images narrower than the column keep their size
    // Verified by removing the clamp to 1.0
    #[test]
    fn test_fit_never_upscales() {
        let size = fit_to_column(ImageDimensions::new(100, 100), 340);
        assert_eq!(size, ScaledSize::new(100, 100));
    }

    // Tests wide images shrink to the column width
    // Verified by scaling height with the inverse factor
    #[test]
    fn test_fit_shrinks_to_column() {
        assert_eq!(
            fit_to_column(ImageDimensions::new(1000, 500), 340),
            ScaledSize::new(340, 170)
        );
        assert_eq!(
            fit_to_column(ImageDimensions::new(680, 1001), 340),
            ScaledSize::new(340, 500)
        );
    }

    // Tests zero-area images map to the zero size
    // Verified by dividing by a zero width
    #[test]
    fn test_fit_zero_area() {
        assert_eq!(fit_to_column(ImageDimensions::new(0, 50), 340), ScaledSize::ZERO);
        assert_eq!(fit_to_column(ImageDimensions::new(50, 0), 340), ScaledSize::ZERO);
        assert!(ImageDimensions::new(0, 0).is_empty());
    }

    // Tests the global factor only ever shrinks
    // Verified by removing the min(1.0) clamp
    #[test]
    fn test_global_scale() {
        assert!((global_scale(40, 40, 920) - 1.0).abs() < f64::EPSILON);
        assert!((global_scale(0, 40, 920) - 1.0).abs() < f64::EPSILON);
        assert!((global_scale(500, 40, 920) - 1.0).abs() < f64::EPSILON);
        assert!((global_scale(960, 40, 920) - 1.0).abs() < f64::EPSILON);

        let shrink = global_scale(1960, 40, 920);
        assert!((shrink - 920.0 / 1920.0).abs() < 1e-12);
    }

    // Tests truncating scale keeps sizes within the original
    // Verified by rounding instead of truncating
    #[test]
    fn test_scaled_truncates() {
        let size = ScaledSize::new(153, 99).scaled(0.5);
        assert_eq!(size, ScaledSize::new(76, 49));
        assert_eq!(ScaledSize::new(10, 10).scaled(1.0), ScaledSize::new(10, 10));
    }

    // Tests content that fits the canvas is not rescaled
    // Verified by always applying the measured factor
    #[test]
    fn test_fitter_keeps_fitting_content() {
        let dims = vec![ImageDimensions::new(100, 100); 4];
        let fitted = default_fitter(2, 340).fit(&dims);

        assert!((fitted.global_scale - 1.0).abs() < f64::EPSILON);
        assert_eq!(fitted.base, fitted.fitted);
        assert_eq!(fitted.fitted, vec![ScaledSize::new(100, 100); 4]);
    }

    // Tests tall content is shrunk until the measured columns fit
    // Verified by measuring without subtracting the top padding
    #[test]
    fn test_fitter_shrinks_tall_content() {
        let dims = vec![ImageDimensions::new(340, 1000); 4];
        let fitted = default_fitter(2, 340).fit(&dims);

        // Two images plus two gaps per column: 2040px of content
        let expected = 920.0 / 2040.0;
        assert!((fitted.global_scale - expected).abs() < 1e-12);
        for size in &fitted.fitted {
            assert_eq!(size.height, (1000.0 * expected).floor() as u32);
            assert_eq!(size.width, (340.0 * expected).floor() as u32);
        }
    }

    // Tests zero-area images survive both passes in place
    // Verified by filtering them out of the output
    #[test]
    fn test_fitter_keeps_zero_area_slots() {
        let dims = vec![
            ImageDimensions::new(200, 200),
            ImageDimensions::new(0, 200),
            ImageDimensions::new(200, 200),
        ];
        let fitted = default_fitter(2, 340).fit(&dims);

        assert_eq!(fitted.fitted.len(), 3);
        assert_eq!(fitted.fitted.get(1), Some(&ScaledSize::ZERO));
    }

    // Tests no upscaling, column fit and aspect ratio over random inputs
    // Verified by letting pass 2 grow short content
    #[test]
    fn test_fitter_random_dimensions() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let count = rng.random_range(1..=14);
            let dims: Vec<ImageDimensions> = (0..count)
                .map(|_| {
                    ImageDimensions::new(rng.random_range(1..=3000), rng.random_range(1..=3000))
                })
                .collect();
            let column_width = rng.random_range(100..=400);
            let fitted = default_fitter(2, column_width).fit(&dims);

            assert!(fitted.global_scale <= 1.0);
            for (original, size) in dims.iter().zip(&fitted.fitted) {
                assert!(size.width <= original.width);
                assert!(size.height <= original.height);
                assert!(size.width <= column_width);

                // Two truncations per side bound the cross-multiplied error
                let drift = (i64::from(size.width) * i64::from(original.height)
                    - i64::from(size.height) * i64::from(original.width))
                .abs();
                let bound = 2 * i64::from(original.width.max(original.height));
                assert!(drift <= bound, "{original:?} -> {size:?}");
            }
        }
    }

    // Tests aspect ratio stays within a small tolerance for typical photos
    // Verified by fitting height to the column instead of width
    #[test]
    fn test_fitter_preserves_aspect_ratio() {
        let dims = vec![
            ImageDimensions::new(1000, 800),
            ImageDimensions::new(600, 900),
            ImageDimensions::new(1200, 1200),
        ];
        let fitted = default_fitter(2, 340).fit(&dims);

        for (original, size) in dims.iter().zip(&fitted.fitted) {
            let expected = f64::from(original.width) / f64::from(original.height);
            let actual = f64::from(size.width) / f64::from(size.height);
            assert!((actual - expected).abs() < 0.02, "{original:?} -> {size:?}");
        }
    }
}
