/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

/// Decimal (base 1000) prefixes.
#[derive(PartialEq, PartialOrd, Eq, Ord, Hash, Clone, Copy, Debug)]
pub enum DecPrefix {
    Unit,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
    Exa,
}

/// Binary (base 1024) prefixes.
#[derive(PartialEq, PartialOrd, Eq, Ord, Hash, Clone, Copy, Debug)]
pub enum BinPrefix {
    Unit,
    Kibi,
    Mebi,
    Gibi,
    Tebi,
    Pebi,
    Exbi,
}

impl DecPrefix {
    pub fn power(&self) -> i32 {
        match self {
            DecPrefix::Unit => 0,
            DecPrefix::Kilo => 1,
            DecPrefix::Mega => 2,
            DecPrefix::Giga => 3,
            DecPrefix::Tera => 4,
            DecPrefix::Peta => 5,
            DecPrefix::Exa => 6,
        }
    }

    pub fn multiplier(&self) -> f64 {
        1000f64.powi(self.power())
    }

    /// The lowercased suffix letter ("k" in "kb"), empty for `Unit`.
    pub fn letter(&self) -> &'static str {
        match self {
            DecPrefix::Unit => "",
            DecPrefix::Kilo => "k",
            DecPrefix::Mega => "m",
            DecPrefix::Giga => "g",
            DecPrefix::Tera => "t",
            DecPrefix::Peta => "p",
            DecPrefix::Exa => "e",
        }
    }
}

impl BinPrefix {
    pub fn power(&self) -> i32 {
        match self {
            BinPrefix::Unit => 0,
            BinPrefix::Kibi => 1,
            BinPrefix::Mebi => 2,
            BinPrefix::Gibi => 3,
            BinPrefix::Tebi => 4,
            BinPrefix::Pebi => 5,
            BinPrefix::Exbi => 6,
        }
    }

    pub fn multiplier(&self) -> f64 {
        1024f64.powi(self.power())
    }

    /// The lowercased suffix pair ("ki" in "kib"), empty for `Unit`.
    pub fn letter(&self) -> &'static str {
        match self {
            BinPrefix::Unit => "",
            BinPrefix::Kibi => "ki",
            BinPrefix::Mebi => "mi",
            BinPrefix::Gibi => "gi",
            BinPrefix::Tebi => "ti",
            BinPrefix::Pebi => "pi",
            BinPrefix::Exbi => "ei",
        }
    }
}

pub(crate) const DEC_PREFIXES: [DecPrefix; 6] = [
    DecPrefix::Kilo,
    DecPrefix::Mega,
    DecPrefix::Giga,
    DecPrefix::Tera,
    DecPrefix::Peta,
    DecPrefix::Exa,
];

pub(crate) const BIN_PREFIXES: [BinPrefix; 6] = [
    BinPrefix::Kibi,
    BinPrefix::Mebi,
    BinPrefix::Gibi,
    BinPrefix::Tebi,
    BinPrefix::Pebi,
    BinPrefix::Exbi,
];
