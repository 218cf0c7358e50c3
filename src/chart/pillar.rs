//! The pillar value type.
//!
//! A pillar is one (stem, branch) pair. Only 60 of the 120 conceivable pairs
//! are valid: stem and branch must agree in yin/yang parity, which is what
//! makes the combined cycle 60 terms long instead of 120. Constructors
//! enforce the parity rule, so a `Pillar` in hand is always well-formed.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use super::cycle::{Branch, Stem};
use crate::constants::{BRANCH_COUNT, STEM_COUNT};
use crate::error::CalculationError;

/// An immutable (stem, branch) pair: a value, not an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    stem: Stem,
    branch: Branch,
}

impl Pillar {
    /// Build a pillar from independently derived cycle values, verifying the
    /// parity invariant. Arithmetic that reduces a single integer mod 10 and
    /// mod 12 always satisfies it, but that is checked here, not assumed.
    pub fn from_cycle_values(stem_value: i64, branch_value: i64) -> Result<Self, CalculationError> {
        let stem = Stem::from_cycle(stem_value);
        let branch = Branch::from_cycle(branch_value);
        if stem.index() % 2 != branch.index() % 2 {
            return Err(CalculationError::ParityViolation {
                stem: stem.index(),
                branch: branch.index(),
            });
        }
        Ok(Self { stem, branch })
    }

    /// Pillar at a position in the 60-term cycle. Any integer is accepted;
    /// reduction is floored so negative offsets count backwards correctly.
    pub fn from_sexagenary_index(index: i64) -> Self {
        // A single cycle number reduced mod 10 and mod 12 keeps parity on
        // both sides, so this cannot violate the invariant
        Self {
            stem: Stem::from_cycle(index.rem_euclid(STEM_COUNT)),
            branch: Branch::from_cycle(index.rem_euclid(BRANCH_COUNT)),
        }
    }

    pub fn stem(self) -> Stem {
        self.stem
    }

    pub fn branch(self) -> Branch {
        self.branch
    }

    /// The hangul pair, e.g. "무오".
    pub fn ganji(self) -> String {
        format!("{}{}", self.stem.hangul(), self.branch.hangul())
    }

    /// The hanja pair, e.g. "戊午".
    pub fn hanja(self) -> String {
        format!("{}{}", self.stem.hanja(), self.branch.hanja())
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.ganji(), self.hanja())
    }
}

// Serialized as the full record downstream consumers expect: symbols,
// hanja, elements, and raw indices side by side
impl Serialize for Pillar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut record = serializer.serialize_struct("Pillar", 9)?;
        record.serialize_field("ganji", &self.ganji())?;
        record.serialize_field("gan", self.stem.hangul())?;
        record.serialize_field("ji", self.branch.hangul())?;
        record.serialize_field("gan_hanja", self.stem.hanja())?;
        record.serialize_field("ji_hanja", self.branch.hanja())?;
        record.serialize_field("gan_element", &self.stem.element())?;
        record.serialize_field("ji_element", &self.branch.element())?;
        record.serialize_field("gan_index", &self.stem.index())?;
        record.serialize_field("ji_index", &self.branch.index())?;
        record.end()
    }
}
