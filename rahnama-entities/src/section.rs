use strum::{AsRefStr, EnumIter, EnumString, IntoStaticStr};

use crate::lookup::Facet;

/// The verticals of the directory.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, IntoStaticStr, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Section {
    Gym,
    Restaurant,
    Trainer,
}

impl Section {
    pub fn code(self) -> &'static str {
        self.into()
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Gym => "باشگاه‌ها",
            Self::Restaurant => "رستوران‌ها",
            Self::Trainer => "مربیان",
        }
    }

    /// The multi-valued tag dimensions that can be used for filtering.
    pub const fn facets(self) -> &'static [Facet] {
        match self {
            Self::Gym => &[Facet::SportType, Facet::Facility],
            Self::Restaurant => &[Facet::MealType],
            Self::Trainer => &[Facet::SportType],
        }
    }

    /// The primary category dimension shown on listing cards.
    pub const fn category_facet(self) -> Facet {
        match self {
            Self::Gym | Self::Trainer => Facet::SportType,
            Self::Restaurant => Facet::MealType,
        }
    }

    pub const fn has_price_range(self) -> bool {
        matches!(self, Self::Gym)
    }

    pub const fn has_resume(self) -> bool {
        matches!(self, Self::Trainer)
    }

    pub fn supports(self, facet: Facet) -> bool {
        self.facets().contains(&facet)
    }
}
