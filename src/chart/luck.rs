//! Luck-cycle (대운) direction.
//!
//! The direction in which the ten-year luck cycles run is fixed by the year
//! stem's polarity and the subject's gender: yang-year men and yin-year
//! women run forward through the cycle, the other two combinations run
//! backward. Only the direction and conventional start age are computed
//! here; the cycle contents belong to interpretive layers outside this
//! crate.

use serde::Serialize;
use std::str::FromStr;

use super::cycle::{Polarity, Stem};
use crate::constants::LUCK_CYCLE_START_AGE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "male" | "m" | "남" | "남성" => Ok(Gender::Male),
            "female" | "f" | "여" | "여성" => Ok(Gender::Female),
            other => Err(format!("unknown gender '{other}' (expected male or female)")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LuckDirection {
    Forward,
    Backward,
}

/// Direction and start age of the luck cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LuckCycle {
    pub start_age: u8,
    pub direction: LuckDirection,
}

/// Derive the luck cycle from the year stem and gender.
pub fn luck_cycle(year_stem: Stem, gender: Gender) -> LuckCycle {
    let direction = match (year_stem.polarity(), gender) {
        (Polarity::Yang, Gender::Male) | (Polarity::Yin, Gender::Female) => LuckDirection::Forward,
        _ => LuckDirection::Backward,
    };
    LuckCycle {
        start_age: LUCK_CYCLE_START_AGE,
        direction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yang_year_male_runs_forward() {
        assert_eq!(
            luck_cycle(Stem::Gap, Gender::Male).direction,
            LuckDirection::Forward
        );
        assert_eq!(
            luck_cycle(Stem::Mu, Gender::Female).direction,
            LuckDirection::Backward
        );
    }

    #[test]
    fn yin_year_female_runs_forward() {
        assert_eq!(
            luck_cycle(Stem::Eul, Gender::Female).direction,
            LuckDirection::Forward
        );
        assert_eq!(
            luck_cycle(Stem::Gye, Gender::Male).direction,
            LuckDirection::Backward
        );
    }

    #[test]
    fn gender_parses_korean_and_english_forms() {
        assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("F".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("남".parse::<Gender>().unwrap(), Gender::Male);
        assert!("other".parse::<Gender>().is_err());
    }
}
