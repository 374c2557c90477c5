use crate::{id::*, lookup::*, section::*, time::*};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub const MAX_LEN: usize = 20;

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for PhoneNumber {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for PhoneNumber {
    fn from(from: &str) -> Self {
        Self(from.to_owned())
    }
}

impl From<PhoneNumber> for String {
    fn from(from: PhoneNumber) -> Self {
        from.0
    }
}

/// Section specific properties of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingKind {
    Gym {
        sport_types: Vec<SportType>,
        price_range: Option<PriceRange>,
        facilities: Vec<Facility>,
    },
    Restaurant {
        meal_types: Vec<MealType>,
    },
    Trainer {
        sport_types: Vec<SportType>,
        /// Path of an uploaded PDF file
        resume: Option<String>,
    },
}

impl ListingKind {
    pub fn empty(section: Section) -> Self {
        match section {
            Section::Gym => Self::Gym {
                sport_types: vec![],
                price_range: None,
                facilities: vec![],
            },
            Section::Restaurant => Self::Restaurant { meal_types: vec![] },
            Section::Trainer => Self::Trainer {
                sport_types: vec![],
                resume: None,
            },
        }
    }

    pub const fn section(&self) -> Section {
        match self {
            Self::Gym { .. } => Section::Gym,
            Self::Restaurant { .. } => Section::Restaurant,
            Self::Trainer { .. } => Section::Trainer,
        }
    }

    pub fn price_range(&self) -> Option<PriceRange> {
        match self {
            Self::Gym { price_range, .. } => *price_range,
            _ => None,
        }
    }

    pub fn resume(&self) -> Option<&str> {
        match self {
            Self::Trainer { resume, .. } => resume.as_deref(),
            _ => None,
        }
    }

    /// Codes of all tags of the given dimension.
    pub fn tag_codes(&self, facet: Facet) -> Vec<&'static str> {
        match (self, facet) {
            (
                Self::Gym { sport_types, .. } | Self::Trainer { sport_types, .. },
                Facet::SportType,
            ) => sport_types.iter().map(|v| v.code()).collect(),
            (Self::Gym { facilities, .. }, Facet::Facility) => {
                facilities.iter().map(|v| v.code()).collect()
            }
            (Self::Restaurant { meal_types }, Facet::MealType) => {
                meal_types.iter().map(|v| v.code()).collect()
            }
            _ => vec![],
        }
    }

    /// Adds a tag given by its code.
    ///
    /// Returns `false` if the code is unknown or the
    /// dimension is not supported by this kind.
    pub fn add_tag(&mut self, facet: Facet, code: &str) -> bool {
        match (self, facet) {
            (
                Self::Gym { sport_types, .. } | Self::Trainer { sport_types, .. },
                Facet::SportType,
            ) => push_code(sport_types, code),
            (Self::Gym { facilities, .. }, Facet::Facility) => push_code(facilities, code),
            (Self::Restaurant { meal_types }, Facet::MealType) => push_code(meal_types, code),
            _ => false,
        }
    }
}

fn push_code<T: Lookup>(values: &mut Vec<T>, code: &str) -> bool {
    let Some(value) = T::from_code(code) else {
        return false;
    };
    if !values.contains(&value) {
        values.push(value);
    }
    true
}

/// A gym, restaurant or trainer.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub id            : Id,
    pub name          : String,
    pub city          : Option<City>,
    pub address       : String,
    pub description   : Option<String>,
    pub phone_numbers : Vec<PhoneNumber>,
    pub kind          : ListingKind,
    pub created_at    : Timestamp,
    pub updated_at    : Timestamp,
}

impl Listing {
    pub const fn section(&self) -> Section {
        self.kind.section()
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewListing {
    pub name          : String,
    pub city          : Option<City>,
    pub address       : String,
    pub description   : Option<String>,
    pub phone_numbers : Vec<PhoneNumber>,
    pub kind          : ListingKind,
    pub created_at    : Timestamp,
}

impl From<Listing> for NewListing {
    fn from(from: Listing) -> Self {
        let Listing {
            id: _,
            name,
            city,
            address,
            description,
            phone_numbers,
            kind,
            created_at,
            updated_at: _,
        } = from;
        Self {
            name,
            city,
            address,
            description,
            phone_numbers,
            kind,
            created_at,
        }
    }
}

/// An uploaded photo of a listing.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub id          : Id,
    pub listing_id  : Id,
    pub path        : String,
    pub description : Option<String>,
    pub created_at  : Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewImage {
    pub listing_id  : Id,
    pub path        : String,
    pub description : Option<String>,
    pub created_at  : Timestamp,
}
