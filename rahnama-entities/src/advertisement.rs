use strum::{AsRefStr, EnumString, IntoStaticStr};
use url::Url;

use crate::{id::*, section::*, time::*};

/// Side of the page as stored with an advertisement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, IntoStaticStr, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum AdPosition {
    Left,
    Right,
}

impl AdPosition {
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// The promoted content, exactly one per advertisement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdMedia {
    /// Path of an uploaded image
    Image(String),
    /// Path of an uploaded animated GIF
    Gif(String),
    /// Path of an uploaded video
    VideoFile(String),
    VideoUrl(Url),
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advertisement {
    pub id         : Id,
    pub title      : String,
    pub section    : Section,
    pub position   : AdPosition,
    pub order      : i32,
    pub active     : bool,
    pub media      : AdMedia,
    /// Click-through target
    pub link       : Option<Url>,
    pub created_at : Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAdvertisement {
    pub title      : String,
    pub section    : Section,
    pub position   : AdPosition,
    pub order      : i32,
    pub active     : bool,
    pub media      : AdMedia,
    pub link       : Option<Url>,
    pub created_at : Timestamp,
}
