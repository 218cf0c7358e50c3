//! The heavenly stems and earthly branches.
//!
//! Two fixed cycles, 10 stems and 12 branches, whose least common multiple
//! gives the 60-term sexagenary cycle. Each symbol carries a five-element
//! classification and a yin/yang polarity; branches additionally own one of
//! the twelve 2-hour windows of the civil day.

use serde::Serialize;

use crate::constants::{BRANCH_COUNT, STEM_COUNT};

/// One of the five elements (오행).
///
/// Serialized as its hangul name, the form downstream consumers read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Element {
    #[serde(rename = "목")]
    Wood,
    #[serde(rename = "화")]
    Fire,
    #[serde(rename = "토")]
    Earth,
    #[serde(rename = "금")]
    Metal,
    #[serde(rename = "수")]
    Water,
}

impl Element {
    pub fn hangul(self) -> &'static str {
        match self {
            Element::Wood => "목",
            Element::Fire => "화",
            Element::Earth => "토",
            Element::Metal => "금",
            Element::Water => "수",
        }
    }

    pub fn hanja(self) -> &'static str {
        match self {
            Element::Wood => "木",
            Element::Fire => "火",
            Element::Earth => "土",
            Element::Metal => "金",
            Element::Water => "水",
        }
    }
}

/// Yin/yang polarity of a cycle symbol; even indices are yang.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Yang,
    Yin,
}

/// The 10 heavenly stems (천간), in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[allow(missing_docs)]
pub enum Stem {
    #[serde(rename = "갑")]
    Gap,
    #[serde(rename = "을")]
    Eul,
    #[serde(rename = "병")]
    Byeong,
    #[serde(rename = "정")]
    Jeong,
    #[serde(rename = "무")]
    Mu,
    #[serde(rename = "기")]
    Gi,
    #[serde(rename = "경")]
    Gyeong,
    #[serde(rename = "신")]
    Sin,
    #[serde(rename = "임")]
    Im,
    #[serde(rename = "계")]
    Gye,
}

/// All 10 stems in cycle order (index 0 = 갑).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Gap,
    Stem::Eul,
    Stem::Byeong,
    Stem::Jeong,
    Stem::Mu,
    Stem::Gi,
    Stem::Gyeong,
    Stem::Sin,
    Stem::Im,
    Stem::Gye,
];

impl Stem {
    /// 0-based cycle index (갑=0 .. 계=9).
    pub const fn index(self) -> u8 {
        match self {
            Stem::Gap => 0,
            Stem::Eul => 1,
            Stem::Byeong => 2,
            Stem::Jeong => 3,
            Stem::Mu => 4,
            Stem::Gi => 5,
            Stem::Gyeong => 6,
            Stem::Sin => 7,
            Stem::Im => 8,
            Stem::Gye => 9,
        }
    }

    /// Stem for an arbitrary integer, reduced with floored modulo so that
    /// negative cycle arithmetic lands on the right symbol.
    pub fn from_cycle(value: i64) -> Self {
        ALL_STEMS[value.rem_euclid(STEM_COUNT) as usize]
    }

    pub fn hangul(self) -> &'static str {
        match self {
            Stem::Gap => "갑",
            Stem::Eul => "을",
            Stem::Byeong => "병",
            Stem::Jeong => "정",
            Stem::Mu => "무",
            Stem::Gi => "기",
            Stem::Gyeong => "경",
            Stem::Sin => "신",
            Stem::Im => "임",
            Stem::Gye => "계",
        }
    }

    pub fn hanja(self) -> &'static str {
        match self {
            Stem::Gap => "甲",
            Stem::Eul => "乙",
            Stem::Byeong => "丙",
            Stem::Jeong => "丁",
            Stem::Mu => "戊",
            Stem::Gi => "己",
            Stem::Gyeong => "庚",
            Stem::Sin => "辛",
            Stem::Im => "壬",
            Stem::Gye => "癸",
        }
    }

    /// Five-element classification: two stems per element, yang then yin.
    pub fn element(self) -> Element {
        match self {
            Stem::Gap | Stem::Eul => Element::Wood,
            Stem::Byeong | Stem::Jeong => Element::Fire,
            Stem::Mu | Stem::Gi => Element::Earth,
            Stem::Gyeong | Stem::Sin => Element::Metal,
            Stem::Im | Stem::Gye => Element::Water,
        }
    }

    pub fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// Descriptive reading of this stem as a day master (일간).
    pub fn day_master_description(self) -> &'static str {
        match self {
            Stem::Gap => "큰 나무(甲木) - 곧고 뻗어나가는 성장의 기운",
            Stem::Eul => "작은 나무(乙木) - 유연하고 적응력 있는 기운",
            Stem::Byeong => "태양(丙火) - 밝고 뜨거운 열정의 기운",
            Stem::Jeong => "촛불(丁火) - 따뜻하고 은은한 빛의 기운",
            Stem::Mu => "큰 산(戊土) - 안정적이고 묵직한 기운",
            Stem::Gi => "논밭(己土) - 포용하고 키워내는 기운",
            Stem::Gyeong => "바위/쇠(庚金) - 강하고 결단력 있는 기운",
            Stem::Sin => "보석(辛金) - 섬세하고 빛나는 기운",
            Stem::Im => "큰 물(壬水) - 넓고 깊은 지혜의 기운",
            Stem::Gye => "이슬/비(癸水) - 촉촉하고 스며드는 기운",
        }
    }
}

/// The 12 earthly branches (지지), in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[allow(missing_docs)]
pub enum Branch {
    #[serde(rename = "자")]
    Ja,
    #[serde(rename = "축")]
    Chuk,
    #[serde(rename = "인")]
    In,
    #[serde(rename = "묘")]
    Myo,
    #[serde(rename = "진")]
    Jin,
    #[serde(rename = "사")]
    Sa,
    #[serde(rename = "오")]
    O,
    #[serde(rename = "미")]
    Mi,
    #[serde(rename = "신")]
    Shin,
    #[serde(rename = "유")]
    Yu,
    #[serde(rename = "술")]
    Sul,
    #[serde(rename = "해")]
    Hae,
}

/// All 12 branches in cycle order (index 0 = 자).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Ja,
    Branch::Chuk,
    Branch::In,
    Branch::Myo,
    Branch::Jin,
    Branch::Sa,
    Branch::O,
    Branch::Mi,
    Branch::Shin,
    Branch::Yu,
    Branch::Sul,
    Branch::Hae,
];

impl Branch {
    /// 0-based cycle index (자=0 .. 해=11).
    pub const fn index(self) -> u8 {
        match self {
            Branch::Ja => 0,
            Branch::Chuk => 1,
            Branch::In => 2,
            Branch::Myo => 3,
            Branch::Jin => 4,
            Branch::Sa => 5,
            Branch::O => 6,
            Branch::Mi => 7,
            Branch::Shin => 8,
            Branch::Yu => 9,
            Branch::Sul => 10,
            Branch::Hae => 11,
        }
    }

    /// Branch for an arbitrary integer, reduced with floored modulo.
    pub fn from_cycle(value: i64) -> Self {
        ALL_BRANCHES[value.rem_euclid(BRANCH_COUNT) as usize]
    }

    pub fn hangul(self) -> &'static str {
        match self {
            Branch::Ja => "자",
            Branch::Chuk => "축",
            Branch::In => "인",
            Branch::Myo => "묘",
            Branch::Jin => "진",
            Branch::Sa => "사",
            Branch::O => "오",
            Branch::Mi => "미",
            Branch::Shin => "신",
            Branch::Yu => "유",
            Branch::Sul => "술",
            Branch::Hae => "해",
        }
    }

    pub fn hanja(self) -> &'static str {
        match self {
            Branch::Ja => "子",
            Branch::Chuk => "丑",
            Branch::In => "寅",
            Branch::Myo => "卯",
            Branch::Jin => "辰",
            Branch::Sa => "巳",
            Branch::O => "午",
            Branch::Mi => "未",
            Branch::Shin => "申",
            Branch::Yu => "酉",
            Branch::Sul => "戌",
            Branch::Hae => "亥",
        }
    }

    /// Five-element classification; the distribution over branches is
    /// uneven (earth claims the four "storage" branches).
    pub fn element(self) -> Element {
        match self {
            Branch::Ja | Branch::Hae => Element::Water,
            Branch::Chuk | Branch::Jin | Branch::Mi | Branch::Sul => Element::Earth,
            Branch::In | Branch::Myo => Element::Wood,
            Branch::Sa | Branch::O => Element::Fire,
            Branch::Shin | Branch::Yu => Element::Metal,
        }
    }

    pub fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// Civil hour at which this branch's 2-hour window begins.
    /// Branch 0 (자) owns 23:00–00:59, so window k starts at (23 + 2k) mod 24.
    pub fn window_start_hour(self) -> u32 {
        (23 + 2 * u32::from(self.index())) % 24
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_indices_sequential() {
        for (i, stem) in ALL_STEMS.iter().enumerate() {
            assert_eq!(stem.index() as usize, i);
        }
    }

    #[test]
    fn branch_indices_sequential() {
        for (i, branch) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(branch.index() as usize, i);
        }
    }

    #[test]
    fn from_cycle_wraps_negative_values() {
        assert_eq!(Stem::from_cycle(-1), Stem::Gye);
        assert_eq!(Stem::from_cycle(-10), Stem::Gap);
        assert_eq!(Branch::from_cycle(-1), Branch::Hae);
        assert_eq!(Branch::from_cycle(25), Branch::Chuk);
    }

    #[test]
    fn stems_pair_per_element_yang_then_yin() {
        for pair in ALL_STEMS.chunks(2) {
            assert_eq!(pair[0].element(), pair[1].element());
            assert_eq!(pair[0].polarity(), Polarity::Yang);
            assert_eq!(pair[1].polarity(), Polarity::Yin);
        }
    }

    #[test]
    fn branch_element_table_matches_tradition() {
        assert_eq!(Branch::Ja.element(), Element::Water);
        assert_eq!(Branch::In.element(), Element::Wood);
        assert_eq!(Branch::Sa.element(), Element::Fire);
        assert_eq!(Branch::Shin.element(), Element::Metal);
        // The four storage branches are all earth
        for b in [Branch::Chuk, Branch::Jin, Branch::Mi, Branch::Sul] {
            assert_eq!(b.element(), Element::Earth);
        }
    }

    #[test]
    fn first_window_starts_at_23() {
        assert_eq!(Branch::Ja.window_start_hour(), 23);
        assert_eq!(Branch::Chuk.window_start_hour(), 1);
        assert_eq!(Branch::Hae.window_start_hour(), 21);
    }

    #[test]
    fn day_master_descriptions_nonempty() {
        for stem in ALL_STEMS {
            assert!(!stem.day_master_description().is_empty());
        }
    }
}
