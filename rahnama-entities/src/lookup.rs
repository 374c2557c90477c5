//! Closed sets of reference values.
//!
//! Every value has a stable code that is used in URLs and storage
//! and a (Persian) label for display.

use strum::{AsRefStr, EnumIter, EnumMessage, EnumString, IntoEnumIterator, IntoStaticStr};

pub trait Lookup: Copy + Eq + Into<&'static str> + IntoEnumIterator + EnumMessage {
    fn code(self) -> &'static str {
        self.into()
    }

    fn label(self) -> &'static str {
        self.get_message().unwrap_or_else(|| self.code())
    }

    fn from_code(code: &str) -> Option<Self> {
        Self::iter().find(|v| v.code() == code)
    }

    /// The catch-all value, if any.
    fn is_other(self) -> bool {
        self.code() == OTHER_CODE
    }
}

pub const OTHER_CODE: &str = "other";

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, IntoStaticStr, EnumString, EnumIter, EnumMessage)]
pub enum City {
    #[strum(serialize = "tehran",                 message = "تهران")]
    Tehran,
    #[strum(serialize = "isfahan",                message = "اصفهان")]
    Isfahan,
    #[strum(serialize = "fars",                   message = "فارس")]
    Fars,
    #[strum(serialize = "khorasan-razavi",        message = "خراسان رضوی")]
    KhorasanRazavi,
    #[strum(serialize = "azarbaijan-sharghi",     message = "آذربایجان شرقی")]
    AzarbaijanSharghi,
    #[strum(serialize = "mazandaran",             message = "مازندران")]
    Mazandaran,
    #[strum(serialize = "khorasan-shomali",       message = "خراسان شمالی")]
    KhorasanShomali,
    #[strum(serialize = "khorasan-jonubi",        message = "خراسان جنوبی")]
    KhorasanJonubi,
    #[strum(serialize = "alborz",                 message = "البرز")]
    Alborz,
    #[strum(serialize = "gilan",                  message = "گیلان")]
    Gilan,
    #[strum(serialize = "kerman",                 message = "کرمان")]
    Kerman,
    #[strum(serialize = "lorestan",               message = "لرستان")]
    Lorestan,
    #[strum(serialize = "azarbaijan-gharbi",      message = "آذربایجان غربی")]
    AzarbaijanGharbi,
    #[strum(serialize = "hamadan",                message = "همدان")]
    Hamadan,
    #[strum(serialize = "kermanshah",             message = "کرمانشاه")]
    Kermanshah,
    #[strum(serialize = "yazd",                   message = "یزد")]
    Yazd,
    #[strum(serialize = "ardabil",                message = "اردبیل")]
    Ardabil,
    #[strum(serialize = "bushehr",                message = "بوشهر")]
    Bushehr,
    #[strum(serialize = "zanjan",                 message = "زنجان")]
    Zanjan,
    #[strum(serialize = "semnan",                 message = "سمنان")]
    Semnan,
    #[strum(serialize = "qom",                    message = "قم")]
    Qom,
    #[strum(serialize = "golestan",               message = "گلستان")]
    Golestan,
    #[strum(serialize = "qazvin",                 message = "قزوین")]
    Qazvin,
    #[strum(serialize = "markazi",                message = "مرکزی")]
    Markazi,
    #[strum(serialize = "chaharmahal-bakhtiari",  message = "چهارمحال و بختیاری")]
    ChaharmahalBakhtiari,
    #[strum(serialize = "kohgiluyeh-boyer-ahmad", message = "کهگیلویه و بویراحمد")]
    KohgiluyehBoyerAhmad,
    #[strum(serialize = "ilam",                   message = "ایلام")]
    Ilam,
    #[strum(serialize = "kordestan",              message = "کردستان")]
    Kordestan,
    #[strum(serialize = "hormozgan",              message = "هرمزگان")]
    Hormozgan,
    #[strum(serialize = "sistan-baluchestan",     message = "سیستان و بلوچستان")]
    SistanBaluchestan,
    #[strum(serialize = "west-azarbaijan",        message = "آذربایجان غربی")]
    WestAzarbaijan,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, IntoStaticStr, EnumString, EnumIter, EnumMessage)]
pub enum SportType {
    #[strum(serialize = "bodybuilding", message = "بدنسازی")]
    Bodybuilding,
    #[strum(serialize = "horse_riding", message = "سوارکاری")]
    HorseRiding,
    #[strum(serialize = "swimming",     message = "شنا")]
    Swimming,
    #[strum(serialize = "football",     message = "فوتبال")]
    Football,
    #[strum(serialize = "volleyball",   message = "والیبال")]
    Volleyball,
    #[strum(serialize = "yoga",         message = "یوگا")]
    Yoga,
    #[strum(serialize = "crossfit",     message = "کراس فیت")]
    Crossfit,
    #[strum(serialize = "pilates",      message = "پیلاتس")]
    Pilates,
    #[strum(serialize = "handball",     message = "هندبال")]
    Handball,
    #[strum(serialize = "other",        message = "سایر موارد")]
    Other,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, IntoStaticStr, EnumString, EnumIter, EnumMessage)]
pub enum PriceRange {
    #[strum(serialize = "low",     message = "اقتصادی")]
    Low,
    #[strum(serialize = "medium",  message = "متوسط")]
    Medium,
    #[strum(serialize = "high",    message = "گران")]
    High,
    #[strum(serialize = "premium", message = "لوکس")]
    Premium,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, IntoStaticStr, EnumString, EnumIter, EnumMessage)]
pub enum Facility {
    #[strum(serialize = "pool",        message = "استخر")]
    Pool,
    #[strum(serialize = "sauna",       message = "سونا")]
    Sauna,
    #[strum(serialize = "jacuzzi",     message = "جکوزی")]
    Jacuzzi,
    #[strum(serialize = "parking",     message = "پارکینگ")]
    Parking,
    #[strum(serialize = "cafe",        message = "کافه")]
    Cafe,
    #[strum(serialize = "locker_room", message = "رختکن")]
    LockerRoom,
    #[strum(serialize = "other",       message = "سایر موارد")]
    Other,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, IntoStaticStr, EnumString, EnumIter, EnumMessage)]
pub enum MealType {
    #[strum(serialize = "breakfast", message = "صبحانه")]
    Breakfast,
    #[strum(serialize = "lunch",     message = "ناهار")]
    Lunch,
    #[strum(serialize = "dinner",    message = "شام")]
    Dinner,
    #[strum(serialize = "snack",     message = "میان‌وعده")]
    Snack,
    #[strum(serialize = "all",       message = "همه")]
    All,
}

impl Lookup for City {}
impl Lookup for SportType {}
impl Lookup for PriceRange {}
impl Lookup for Facility {}
impl Lookup for MealType {}

/// Multi-valued tag dimensions of a listing.
///
/// The code doubles as the name of the corresponding query parameter.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, IntoStaticStr, EnumString, EnumIter)]
pub enum Facet {
    #[strum(serialize = "sport_type")]
    SportType,
    #[strum(serialize = "meal_type")]
    MealType,
    #[strum(serialize = "facility")]
    Facility,
}

impl Facet {
    pub fn code(self) -> &'static str {
        self.into()
    }

    /// All values of this dimension as (code, label) pairs.
    pub fn options(self) -> Vec<(&'static str, &'static str)> {
        match self {
            Self::SportType => code_label_pairs::<SportType>(),
            Self::MealType => code_label_pairs::<MealType>(),
            Self::Facility => code_label_pairs::<Facility>(),
        }
    }

    /// Label of a stored code, `None` if the code is unknown.
    pub fn label_of(self, code: &str) -> Option<&'static str> {
        match self {
            Self::SportType => SportType::from_code(code).map(Lookup::label),
            Self::MealType => MealType::from_code(code).map(Lookup::label),
            Self::Facility => Facility::from_code(code).map(Lookup::label),
        }
    }
}

pub fn code_label_pairs<T: Lookup>() -> Vec<(&'static str, &'static str)> {
    T::iter().map(|v| (v.code(), v.label())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn there_are_31_provinces() {
        assert_eq!(31, City::iter().count());
    }

    #[test]
    fn codes_and_labels() {
        assert_eq!("khorasan-razavi", City::KhorasanRazavi.code());
        assert_eq!("خراسان رضوی", City::KhorasanRazavi.label());
        assert_eq!("locker_room", Facility::LockerRoom.code());
        assert_eq!(Some(SportType::HorseRiding), SportType::from_code("horse_riding"));
        assert_eq!(None, SportType::from_code("chess"));
        assert_eq!("horse_riding".parse::<SportType>().ok(), Some(SportType::HorseRiding));
    }

    #[test]
    fn other_values() {
        assert!(SportType::Other.is_other());
        assert!(Facility::Other.is_other());
        assert!(!MealType::All.is_other());
    }

    #[test]
    fn facet_labels() {
        assert_eq!(Some("شنا"), Facet::SportType.label_of("swimming"));
        assert_eq!(None, Facet::MealType.label_of("swimming"));
        assert_eq!("meal_type", Facet::MealType.code());
        assert_eq!(5, Facet::MealType.options().len());
    }
}
