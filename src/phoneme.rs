//! Phoneme symbol inventory.
//!
//! The consonant and vowel sets are the Open JTalk inventory, closed by
//! construction: every symbol a mora can resolve to is a variant here, and
//! every use site matches exhaustively. Devoicing is a flag on [`Vowel`]
//! rather than a separate symbol set; the devoiced realizations (`A`, `I`,
//! `U`, `E`, `O`) exist only as renderings of `devoiced = true`.

use std::fmt;

/// Consonant phoneme symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsonantSymbol {
    K,
    Ky,
    Kw,
    G,
    Gy,
    Gw,
    S,
    Sh,
    Z,
    J,
    T,
    Ch,
    Ts,
    Ty,
    D,
    Dy,
    N,
    Ny,
    H,
    Hy,
    F,
    B,
    By,
    P,
    Py,
    M,
    My,
    Y,
    R,
    Ry,
    W,
    V,
}

impl ConsonantSymbol {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::K => "k",
            Self::Ky => "ky",
            Self::Kw => "kw",
            Self::G => "g",
            Self::Gy => "gy",
            Self::Gw => "gw",
            Self::S => "s",
            Self::Sh => "sh",
            Self::Z => "z",
            Self::J => "j",
            Self::T => "t",
            Self::Ch => "ch",
            Self::Ts => "ts",
            Self::Ty => "ty",
            Self::D => "d",
            Self::Dy => "dy",
            Self::N => "n",
            Self::Ny => "ny",
            Self::H => "h",
            Self::Hy => "hy",
            Self::F => "f",
            Self::B => "b",
            Self::By => "by",
            Self::P => "p",
            Self::Py => "py",
            Self::M => "m",
            Self::My => "my",
            Self::Y => "y",
            Self::R => "r",
            Self::Ry => "ry",
            Self::W => "w",
            Self::V => "v",
        }
    }
}

impl fmt::Display for ConsonantSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vowel phoneme symbol.
///
/// `N` is the moraic nasal (撥音), `Cl` the glottal stop (促音), `Pau` a
/// pause. None of those three can be devoiced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VowelSymbol {
    A,
    I,
    U,
    E,
    O,
    N,
    Cl,
    Pau,
}

impl VowelSymbol {
    /// Whether this is one of the five plain vowels /a i u e o/, the only
    /// symbols devoicing applies to.
    pub fn is_plain(self) -> bool {
        matches!(self, Self::A | Self::I | Self::U | Self::E | Self::O)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::I => "i",
            Self::U => "u",
            Self::E => "e",
            Self::O => "o",
            Self::N => "N",
            Self::Cl => "cl",
            Self::Pau => "pau",
        }
    }

    fn devoiced_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::I => "I",
            Self::U => "U",
            Self::E => "E",
            Self::O => "O",
            // Never constructed devoiced; voiced rendering as a fallback.
            Self::N => "N",
            Self::Cl => "cl",
            Self::Pau => "pau",
        }
    }
}

impl fmt::Display for VowelSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A vowel phoneme: symbol plus devoiced state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vowel {
    pub symbol: VowelSymbol,
    pub devoiced: bool,
}

impl Vowel {
    pub fn voiced(symbol: VowelSymbol) -> Self {
        Self {
            symbol,
            devoiced: false,
        }
    }

    /// Rendering in the Open JTalk convention: devoiced plain vowels are
    /// uppercase (`U`), everything else keeps its plain form.
    pub fn symbol_str(self) -> &'static str {
        if self.devoiced {
            self.symbol.devoiced_str()
        } else {
            self.symbol.as_str()
        }
    }
}

impl fmt::Display for Vowel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol_str())
    }
}

/// One phoneme: a consonant or a vowel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phoneme {
    Consonant(ConsonantSymbol),
    Vowel(Vowel),
}

impl Phoneme {
    pub fn symbol_str(self) -> &'static str {
        match self {
            Self::Consonant(c) => c.as_str(),
            Self::Vowel(v) => v.symbol_str(),
        }
    }
}

impl fmt::Display for Phoneme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol_str())
    }
}
