use strum::{AsRefStr, EnumIter, EnumString, IntoStaticStr};

use crate::section::Section;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, IntoStaticStr, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum CategoryCode {
    Gym,
    Restaurant,
    Trainer,
    Doctor,
}

impl CategoryCode {
    pub fn code(self) -> &'static str {
        self.into()
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Gym => "باشگاه",
            Self::Restaurant => "رستوران",
            Self::Trainer => "مربیان",
            Self::Doctor => "پزشکان",
        }
    }

    /// The directory section behind this category, if any.
    pub const fn section(self) -> Option<Section> {
        match self {
            Self::Gym => Some(Section::Gym),
            Self::Restaurant => Some(Section::Restaurant),
            Self::Trainer => Some(Section::Trainer),
            Self::Doctor => None,
        }
    }
}

/// A top-level entry of the site navigation.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub code   : CategoryCode,
    pub icon   : Option<String>,
    pub order  : i32,
    pub active : bool,
}

impl Category {
    /// The categories that are created on first start.
    pub fn defaults() -> Vec<Self> {
        [
            (CategoryCode::Gym, "💪", 1),
            (CategoryCode::Restaurant, "🍽️", 2),
            (CategoryCode::Trainer, "🏋️", 3),
            (CategoryCode::Doctor, "👨‍⚕️", 4),
        ]
        .into_iter()
        .map(|(code, icon, order)| Self {
            code,
            icon: Some(icon.to_owned()),
            order,
            active: true,
        })
        .collect()
    }
}
