mod common;

use canny_scale::edges::{DirectionClass, EDGE};
use canny_scale::image::{GrayImageU8, ImageU8};
use canny_scale::{run_pipeline, run_scale, CannyConfig, CannyError, ThresholdPair};
use common::synthetic_image::{bright_column_u8, bright_rect_u8, checkerboard_u8};

fn unit_sigma_config() -> CannyConfig {
    CannyConfig {
        sigmas: vec![1.0],
        ..Default::default()
    }
}

fn edge_positions(edges: &GrayImageU8) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for y in 0..edges.h {
        for x in 0..edges.w {
            if edges.get(x, y) == EDGE {
                out.push((x, y));
            }
        }
    }
    out
}

#[test]
fn all_zero_image_produces_no_edges() {
    let _ = env_logger::builder().is_test(true).try_init();
    let buffer = vec![0u8; 25];
    let image = ImageU8::new(5, 5, 5, &buffer).unwrap();

    let scale = run_scale(&image, 1.0, &CannyConfig::default()).unwrap();
    assert_eq!(scale.kernel_size.size, 5);
    assert!(scale.gradient.fx.data.iter().all(|&v| v == 0));
    assert!(scale.gradient.fy.data.iter().all(|&v| v == 0));
    assert!(scale.magnitude.values.data.iter().all(|&v| v == 0.0));
    assert!(scale.magnitude.bytes.data.iter().all(|&v| v == 0));
    assert!(scale.quantized.data.iter().all(|&q| q == 0));
    assert!(scale.suppressed.values.data.iter().all(|&v| v == 0.0));
    assert_eq!(scale.edges.len(), 2);
    for e in &scale.edges {
        assert_eq!(e.edges.count_nonzero(), 0);
    }
}

#[test]
fn bright_column_yields_thin_vertical_ridges() {
    let _ = env_logger::builder().is_test(true).try_init();
    let buffer = bright_column_u8(5, 5, 2);
    let image = ImageU8::new(5, 5, 5, &buffer).unwrap();

    let scale = run_scale(&image, 1.0, &unit_sigma_config()).unwrap();
    let fx = &scale.gradient.fx;
    let fy = &scale.gradient.fy;

    // Centre row sees the column symmetrically in y.
    for x in 0..5 {
        assert_eq!(fy.get(x, 2), 0);
    }
    assert_eq!(fx.get(1, 2), -385);
    assert_eq!(fx.get(3, 2), 385);
    assert_eq!(fx.get(2, 2), 0);
    for x in [1, 3] {
        assert_eq!(
            DirectionClass::from_label(scale.quantized.get(x, 2)),
            DirectionClass::Horizontal
        );
    }

    // Ridges on both sides of the bright column survive NMS, the column
    // itself and the frame do not.
    let sup = &scale.suppressed.values;
    for y in 0..5 {
        for x in 0..5 {
            let ridge = (x == 1 || x == 3) && (1..4).contains(&y);
            assert_eq!(sup.get(x, y) > 0.0, ridge, "suppressed at ({x}, {y})");
        }
    }
    assert_eq!(sup.get(1, 2), 385.0);

    let expected = vec![(1, 1), (3, 1), (1, 2), (3, 2), (1, 3), (3, 3)];
    for e in &scale.edges {
        assert_eq!(edge_positions(&e.edges), expected);
    }
}

#[test]
fn scales_are_reported_in_configured_order() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (w, h) = (64usize, 48usize);
    let buffer = checkerboard_u8(w, h, 16);
    let image = ImageU8::new(w, h, w, &buffer).unwrap();

    let output = run_pipeline(&image, &CannyConfig::default()).unwrap();
    assert_eq!((output.width, output.height), (w, h));
    let sigmas: Vec<f64> = output.scales.iter().map(|s| s.sigma).collect();
    assert_eq!(sigmas, vec![0.5, 1.0, 2.0]);
    let sizes: Vec<usize> = output.scales.iter().map(|s| s.kernel_size.size).collect();
    assert_eq!(sizes, vec![3, 5, 7]);

    for scale in &output.scales {
        assert_eq!(scale.edges.len(), 2);
        for e in &scale.edges {
            assert!(e.edges.count_nonzero() > 0);
            for (i, &v) in e.edges.data.iter().enumerate() {
                assert!(v == 0 || v == EDGE);
                if v == EDGE {
                    assert!(scale.suppressed.values.data[i] > 0.0);
                }
            }
        }
    }
}

#[test]
fn flat_interior_of_a_rectangle_has_no_edges() {
    let (w, h) = (40usize, 36usize);
    let buffer = bright_rect_u8(w, h, (10, 10), (30, 25));
    let image = ImageU8::new(w, h, w, &buffer).unwrap();

    let scale = run_scale(&image, 1.0, &unit_sigma_config()).unwrap();
    let edges = &scale.edges[0].edges;
    for y in 14..21 {
        for x in 14..26 {
            assert_eq!(edges.get(x, y), 0, "({x}, {y})");
        }
    }
    assert!((8..=11).any(|x| edges.get(x, 17) == EDGE));
    assert!((28..=31).any(|x| edges.get(x, 17) == EDGE));
}

#[test]
fn swapped_threshold_pairs_match() {
    let (w, h) = (32usize, 32usize);
    let buffer = checkerboard_u8(w, h, 8);
    let image = ImageU8::new(w, h, w, &buffer).unwrap();
    let config = CannyConfig {
        sigmas: vec![1.0],
        thresholds: vec![ThresholdPair::new(100, 50), ThresholdPair::new(50, 100)],
        ..Default::default()
    };

    let scale = run_scale(&image, 1.0, &config).unwrap();
    assert_eq!(scale.edges[0].edges, scale.edges[1].edges);
    assert_eq!(scale.edges[1].thresholds, ThresholdPair::new(50, 100));
}

#[test]
fn invalid_parameters_abort_before_work() {
    let buffer = vec![0u8; 16];
    let image = ImageU8::new(4, 4, 4, &buffer).unwrap();

    let bad_sigma = CannyConfig {
        sigmas: vec![1.0, 0.3],
        ..Default::default()
    };
    assert!(matches!(
        run_pipeline(&image, &bad_sigma),
        Err(CannyError::InvalidParameter(_))
    ));

    let bad_truncation = CannyConfig {
        truncation: 0.0,
        ..Default::default()
    };
    assert!(matches!(
        run_scale(&image, 1.0, &bad_truncation),
        Err(CannyError::InvalidParameter(_))
    ));

    for sigma in [1e5, 1e160] {
        let huge_sigma = CannyConfig {
            sigmas: vec![1.0, sigma],
            ..Default::default()
        };
        assert!(matches!(
            run_pipeline(&image, &huge_sigma),
            Err(CannyError::InvalidParameter(_))
        ));
        assert!(matches!(
            run_scale(&image, sigma, &unit_sigma_config()),
            Err(CannyError::InvalidParameter(_))
        ));
    }
}

#[test]
fn strided_input_matches_packed_input() {
    let (w, h, stride) = (20usize, 12usize, 24usize);
    let packed = checkerboard_u8(w, h, 5);
    let mut strided = vec![77u8; stride * h];
    for y in 0..h {
        strided[y * stride..y * stride + w].copy_from_slice(&packed[y * w..(y + 1) * w]);
    }
    let a = ImageU8::new(w, h, w, &packed).unwrap();
    let b = ImageU8::new(w, h, stride, &strided).unwrap();

    let ra = run_scale(&a, 1.0, &unit_sigma_config()).unwrap();
    let rb = run_scale(&b, 1.0, &unit_sigma_config()).unwrap();
    assert_eq!(ra.gradient, rb.gradient);
    assert_eq!(ra.edges[0].edges, rb.edges[0].edges);
}
