// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

/// Predicates for selecting listings of a section.
///
/// All predicates are combined with AND. The codes are
/// matched literally, i.e. unknown codes match nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingFilter {
    pub section: Section,
    /// Case-insensitive substring of name, address or description
    pub search: Option<String>,
    pub city: Option<String>,
    /// Matches if the listing carries any of the given tags
    pub tags: Vec<(Facet, Vec<String>)>,
    pub price_range: Option<String>,
    /// Minimum average rating, unrated listings never match
    pub min_rating: Option<f64>,
}

impl ListingFilter {
    pub const fn new(section: Section) -> Self {
        Self {
            section,
            search: None,
            city: None,
            tags: Vec::new(),
            price_range: None,
            min_rating: None,
        }
    }
}

pub trait ListingRepo {
    fn create_listing(&self, listing: NewListing) -> Result<Id>;

    fn get_listing(&self, id: Id) -> Result<Listing>;
    // Listings that do not exist are skipped
    fn get_listings(&self, ids: &[Id]) -> Result<Vec<Listing>>;

    fn count_listings(&self, filter: &ListingFilter) -> Result<usize>;
    /// Ids of matching listings, newest first.
    ///
    /// Each listing occurs at most once.
    fn query_listing_ids(
        &self,
        filter: &ListingFilter,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Id>>;

    fn create_image(&self, image: NewImage) -> Result<Id>;
    // Newest first
    fn load_images_of_listings(&self, listing_ids: &[Id]) -> Result<Vec<Image>>;
}

pub trait RatingRepository {
    fn create_rating(&self, rating: NewRating) -> Result<Id>;
    // Newest first
    fn load_ratings_of_listing(&self, listing_id: Id) -> Result<Vec<Rating>>;
    fn load_ratings_of_listings(&self, listing_ids: &[Id]) -> Result<Vec<Rating>>;
}

pub trait CommentRepository {
    fn create_comment(&self, comment: NewComment) -> Result<Id>;
    // All comments including unapproved ones, newest first
    fn load_comments_of_listing(&self, listing_id: Id) -> Result<Vec<Comment>>;
}

pub trait AdvertisementRepo {
    fn create_advertisement(&self, ad: NewAdvertisement) -> Result<Id>;
    /// Active advertisements ordered by their explicit order.
    fn load_active_advertisements(
        &self,
        section: Section,
        position: AdPosition,
        limit: usize,
    ) -> Result<Vec<Advertisement>>;
}

pub trait CategoryRepo {
    // Returns `false` if a category with the same code already exists
    fn create_category_if_it_does_not_exist(&self, category: &Category) -> Result<bool>;
    // Ordered by order and code
    fn all_categories(&self) -> Result<Vec<Category>>;
}
