/*
MIT License

Copyright (c) 2026 npcount-rs developers
*/

//! Periodic-table data: element symbols, atomic numbers, and covalent
//! radii.
//!
//! Covalent radii are the single-bond values of Cordero et al. (2008),
//! low-spin where the reference distinguishes; radii are tabulated up to
//! curium, beyond which lookups return `None`.

/// Element symbols indexed by atomic number − 1
const SYMBOLS: [&str; 118] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S", "Cl",
    "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As",
    "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In",
    "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb",
    "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl",
    "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk",
    "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn",
    "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];

/// Covalent radii in Å, indexed by atomic number − 1 (H through Cm)
const COVALENT_RADII: [f64; 96] = [
    0.31, 0.28, 1.28, 0.96, 0.84, 0.76, 0.71, 0.66, 0.57, 0.58, // H-Ne
    1.66, 1.41, 1.21, 1.11, 1.07, 1.05, 1.02, 1.06, // Na-Ar
    2.03, 1.76, 1.70, 1.60, 1.53, 1.39, 1.39, 1.32, 1.26, 1.24, 1.32, 1.22, // K-Zn
    1.22, 1.20, 1.19, 1.20, 1.20, 1.16, // Ga-Kr
    2.20, 1.95, 1.90, 1.75, 1.64, 1.54, 1.47, 1.46, 1.42, 1.39, 1.45, 1.44, // Rb-Cd
    1.42, 1.39, 1.39, 1.38, 1.39, 1.40, // In-Xe
    2.44, 2.15, 2.07, 2.04, 2.03, 2.01, 1.99, 1.98, 1.98, 1.96, 1.94, 1.92, // Cs-Dy
    1.92, 1.89, 1.90, 1.87, 1.87, // Ho-Lu
    1.75, 1.70, 1.62, 1.51, 1.44, 1.41, 1.36, 1.36, 1.32, // Hf-Hg
    1.45, 1.46, 1.48, 1.40, 1.50, 1.50, // Tl-Rn
    2.60, 2.21, 2.15, 2.06, 2.00, 1.96, 1.90, 1.87, 1.80, 1.69, // Fr-Cm
];

/// Element symbol for an atomic number, `None` outside 1..=118
pub fn element_symbol(atomic_number: u32) -> Option<&'static str> {
    if atomic_number == 0 {
        return None;
    }
    SYMBOLS.get(atomic_number as usize - 1).copied()
}

/// Atomic number for an element symbol. The symbol is matched after
/// capitalization, so "ag" and "AG" both resolve to 47.
pub fn atomic_number(symbol: &str) -> Option<u32> {
    let normalized = capitalize(symbol);
    SYMBOLS
        .iter()
        .position(|&s| s == normalized)
        .map(|i| i as u32 + 1)
}

/// Covalent radius in Å, `None` for atomic numbers beyond the table
pub fn covalent_radius(atomic_number: u32) -> Option<f64> {
    if atomic_number == 0 {
        return None;
    }
    COVALENT_RADII.get(atomic_number as usize - 1).copied()
}

/// Normalize an element symbol: first letter uppercase, rest lowercase
pub fn capitalize(symbol: &str) -> String {
    let trimmed = symbol.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_symbol_round_trip() {
        assert_eq!(element_symbol(47), Some("Ag"));
        assert_eq!(atomic_number("Ag"), Some(47));
        assert_eq!(atomic_number("ag"), Some(47));
        assert_eq!(atomic_number("AG"), Some(47));
    }

    #[test]
    fn test_unknown_symbols() {
        assert_eq!(atomic_number("Fol"), None);
        assert_eq!(atomic_number(""), None);
        assert_eq!(element_symbol(0), None);
        assert_eq!(element_symbol(119), None);
    }

    #[test]
    fn test_covalent_radii() {
        assert_relative_eq!(covalent_radius(46).unwrap(), 1.39); // Pd
        assert_relative_eq!(covalent_radius(26).unwrap(), 1.32); // Fe
        assert_relative_eq!(covalent_radius(8).unwrap(), 0.66); // O
        assert!(covalent_radius(118).is_none()); // beyond the table
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("fe"), "Fe");
        assert_eq!(capitalize(" Fe "), "Fe");
        assert_eq!(capitalize("FE"), "Fe");
    }
}
