/*
MIT License

Copyright (c) 2026 npcount-rs developers
*/

//! Tabulated interplanar spacings per (element, facet).
//!
//! Values are the perpendicular distances between adjacent occupied
//! atomic planes of each facet, in Å, derived from the reference-state
//! lattice constants with the stacking rules of each lattice (fcc (111):
//! a/√3, (100): a/2, (110): a/(2√2); bcc (110): a/√2, (100): a/2,
//! (111): a/(2√3); hcp (001): c/2, (100): a·√3/2) and rounded to three
//! decimals. Facets absent from an element's row are unsupported for
//! that element.

use super::facet::Facet;

type Row = &'static [((i32, i32, i32), f64)];

fn spacing_row(element: &str) -> Option<Row> {
    let row: Row = match element {
        // fcc: (1,1,1), (1,0,0), (1,1,0)
        "Al" => &[((1, 1, 1), 2.338), ((1, 0, 0), 2.025), ((1, 1, 0), 1.432)],
        "Ca" => &[((1, 1, 1), 3.222), ((1, 0, 0), 2.790), ((1, 1, 0), 1.973)],
        "Ni" => &[((1, 1, 1), 2.032), ((1, 0, 0), 1.760), ((1, 1, 0), 1.245)],
        "Cu" => &[((1, 1, 1), 2.084), ((1, 0, 0), 1.805), ((1, 1, 0), 1.276)],
        "Sr" => &[((1, 1, 1), 3.510), ((1, 0, 0), 3.040), ((1, 1, 0), 2.150)],
        "Rh" => &[((1, 1, 1), 2.194), ((1, 0, 0), 1.900), ((1, 1, 0), 1.344)],
        "Pd" => &[((1, 1, 1), 2.246), ((1, 0, 0), 1.945), ((1, 1, 0), 1.375)],
        "Ag" => &[((1, 1, 1), 2.361), ((1, 0, 0), 2.045), ((1, 1, 0), 1.446)],
        "Ir" => &[((1, 1, 1), 2.217), ((1, 0, 0), 1.920), ((1, 1, 0), 1.358)],
        "Pt" => &[((1, 1, 1), 2.263), ((1, 0, 0), 1.960), ((1, 1, 0), 1.386)],
        "Au" => &[((1, 1, 1), 2.356), ((1, 0, 0), 2.040), ((1, 1, 0), 1.442)],
        "Pb" => &[((1, 1, 1), 2.858), ((1, 0, 0), 2.475), ((1, 1, 0), 1.750)],
        // bcc: (1,1,0), (1,0,0), (1,1,1)
        "Li" => &[((1, 1, 0), 2.468), ((1, 0, 0), 1.745), ((1, 1, 1), 1.007)],
        "Na" => &[((1, 1, 0), 2.991), ((1, 0, 0), 2.115), ((1, 1, 1), 1.221)],
        "K" => &[((1, 1, 0), 3.698), ((1, 0, 0), 2.615), ((1, 1, 1), 1.510)],
        "V" => &[((1, 1, 0), 2.143), ((1, 0, 0), 1.515), ((1, 1, 1), 0.875)],
        "Cr" => &[((1, 1, 0), 2.036), ((1, 0, 0), 1.440), ((1, 1, 1), 0.831)],
        "Fe" => &[((1, 1, 0), 2.029), ((1, 0, 0), 1.435), ((1, 1, 1), 0.828)],
        "Nb" => &[((1, 1, 0), 2.333), ((1, 0, 0), 1.650), ((1, 1, 1), 0.953)],
        "Mo" => &[((1, 1, 0), 2.227), ((1, 0, 0), 1.575), ((1, 1, 1), 0.909)],
        "Ba" => &[((1, 1, 0), 3.550), ((1, 0, 0), 2.510), ((1, 1, 1), 1.449)],
        "Ta" => &[((1, 1, 0), 2.341), ((1, 0, 0), 1.655), ((1, 1, 1), 0.956)],
        "W" => &[((1, 1, 0), 2.234), ((1, 0, 0), 1.580), ((1, 1, 1), 0.912)],
        // hcp: (0,0,1), (1,0,0)
        "Be" => &[((0, 0, 1), 1.790), ((1, 0, 0), 1.983)],
        "Mg" => &[((0, 0, 1), 2.605), ((1, 0, 0), 2.780)],
        "Sc" => &[((0, 0, 1), 2.635), ((1, 0, 0), 2.867)],
        "Ti" => &[((0, 0, 1), 2.340), ((1, 0, 0), 2.555)],
        "Co" => &[((0, 0, 1), 2.035), ((1, 0, 0), 2.174)],
        "Zn" => &[((0, 0, 1), 2.475), ((1, 0, 0), 2.304)],
        "Y" => &[((0, 0, 1), 2.865), ((1, 0, 0), 3.161)],
        "Zr" => &[((0, 0, 1), 2.575), ((1, 0, 0), 2.797)],
        "Tc" => &[((0, 0, 1), 2.200), ((1, 0, 0), 2.373)],
        "Ru" => &[((0, 0, 1), 2.140), ((1, 0, 0), 2.338)],
        "Cd" => &[((0, 0, 1), 2.810), ((1, 0, 0), 2.581)],
        "Hf" => &[((0, 0, 1), 2.530), ((1, 0, 0), 2.771)],
        "Re" => &[((0, 0, 1), 2.230), ((1, 0, 0), 2.390)],
        "Os" => &[((0, 0, 1), 2.160), ((1, 0, 0), 2.373)],
        // simple cubic
        "Po" => &[((1, 0, 0), 3.350), ((1, 1, 0), 2.369), ((1, 1, 1), 1.934)],
        // body-centred tetragonal
        "In" => &[((1, 1, 1), 1.042)],
        _ => return None,
    };
    Some(row)
}

/// Interplanar spacing in Å for an (element, facet) pair; `None` when
/// the pair is not tabulated. The element symbol must already be
/// capitalized.
pub fn interplanar_spacing(element: &str, facet: Facet) -> Option<f64> {
    spacing_row(element)?
        .iter()
        .find(|(indices, _)| *indices == facet.indices())
        .map(|&(_, spacing)| spacing)
}
