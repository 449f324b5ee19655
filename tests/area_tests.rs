/*
MIT License

Copyright (c) 2026 npcount-rs developers
*/

use approx::assert_abs_diff_eq;
use npcount_rs::crystal::{ConstantsCache, Facet};
use npcount_rs::estimator::{areas, by_area, count, CountingMethod};
use rstest::rstest;

const FCC_111: Facet = Facet { h: 1, k: 1, l: 1 };
const FCC_100: Facet = Facet { h: 1, k: 0, l: 0 };

#[test]
fn test_cr_hemisphere_areas() {
    let cache = ConstantsCache::new();
    let region_areas = areas(&cache, "Cr", 55.0, 90.0, None).unwrap().into_value();
    assert_abs_diff_eq!(region_areas.interface, 8567.0, epsilon = 2.0);
    assert_abs_diff_eq!(region_areas.perimeter, 936.0, epsilon = 2.0);
    assert_abs_diff_eq!(region_areas.surface, 18328.0, epsilon = 2.0);
}

#[test]
fn test_footprint_decomposition() {
    let cache = ConstantsCache::new();
    for (element, r, theta) in [("Ag", 50.0, 90.0), ("Pt", 25.0, 135.0), ("Cu", 80.0, 40.0)] {
        let region_areas = areas(&cache, element, r, theta, None).unwrap().into_value();
        let footprint = std::f64::consts::PI * r * r;
        assert_eq!(region_areas.perimeter + region_areas.interface, footprint);
    }
}

#[test]
fn test_interface_area_independent_of_angle() {
    let cache = ConstantsCache::new();
    let at_60 = areas(&cache, "Ag", 50.0, 60.0, None).unwrap().into_value();
    let at_120 = areas(&cache, "Ag", 50.0, 120.0, None).unwrap().into_value();
    assert_eq!(at_60.interface, at_120.interface);
    assert_eq!(at_60.perimeter, at_120.perimeter);
    // the surface area does depend on the angle
    assert!(at_60.surface != at_120.surface);
}

#[test]
fn test_ag_hemisphere_counts() {
    let cache = ConstantsCache::new();
    let counts = by_area(&cache, "Ag", 50.0, 90.0, Some(FCC_100), Some(FCC_111))
        .unwrap()
        .into_value();
    assert_abs_diff_eq!(counts.perimeter as f64, 106.0, epsilon = 2.0);
    assert_abs_diff_eq!(counts.interface as f64, 833.0, epsilon = 2.0);
    assert_abs_diff_eq!(counts.surface as f64, 2083.0, epsilon = 2.0);
    assert_abs_diff_eq!(counts.total as f64, 15306.0, epsilon = 2.0);
}

#[rstest]
#[case(0.0)]
#[case(180.0)]
#[case(-20.0)]
#[case(200.0)]
fn test_invalid_angles(#[case] theta: f64) {
    let cache = ConstantsCache::new();
    let error = areas(&cache, "Pt", 3.2, theta, None).unwrap_err();
    assert!(error.is_invalid_angle());
}

#[rstest]
#[case(-3.2)]
#[case(0.0)]
fn test_invalid_radii(#[case] radius: f64) {
    let cache = ConstantsCache::new();
    let error = areas(&cache, "Pd", radius, 33.0, Some(FCC_100)).unwrap_err();
    assert!(error.is_invalid_radius());
}

#[test]
fn test_unknown_element_fails_loud() {
    let cache = ConstantsCache::new();
    assert!(areas(&cache, "Px", 3.2, 33.0, Some(FCC_100)).is_err());
}

#[test]
fn test_count_dispatch_matches_by_area() {
    let cache = ConstantsCache::new();
    let direct = by_area(&cache, "Ag", 50.0, 90.0, Some(FCC_100), Some(FCC_111))
        .unwrap()
        .into_value();
    let dispatched = count(
        &cache,
        CountingMethod::Area,
        "Ag",
        50.0,
        90.0,
        Some(FCC_100),
        Some(FCC_111),
    )
    .unwrap()
    .into_value();
    assert_eq!(direct, dispatched);
}
