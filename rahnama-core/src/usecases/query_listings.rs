use std::collections::HashMap;

use super::prelude::*;
use crate::util::pagination::Page;

pub const LISTINGS_PER_PAGE: usize = 9;

/// Query parameters of a listing page as submitted.
///
/// Parameters that are not supported by a section are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingParams {
    pub search: Option<String>,
    pub city: Option<String>,
    pub rating: Option<String>,
    pub sport_type: Vec<String>,
    pub meal_type: Vec<String>,
    pub price_range: Option<String>,
    pub facility: Vec<String>,
    pub page: Option<String>,
}

impl ListingParams {
    pub fn tag_codes(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::SportType => &self.sport_type,
            Facet::MealType => &self.meal_type,
            Facet::Facility => &self.facility,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListingQuery {
    pub filter: ListingFilter,
    pub page: Option<String>,
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.is_empty())
}

impl ListingQuery {
    pub fn from_params(section: Section, params: ListingParams) -> Self {
        let search = params
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToOwned::to_owned);
        // A malformed threshold is ignored
        let min_rating = params
            .rating
            .as_deref()
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|r| !r.is_nan());
        let tags = section
            .facets()
            .iter()
            .map(|facet| {
                let codes: Vec<_> = params
                    .tag_codes(*facet)
                    .iter()
                    .filter(|c| !c.is_empty())
                    .cloned()
                    .collect();
                (*facet, codes)
            })
            .filter(|(_, codes)| !codes.is_empty())
            .collect();
        let price_range = if section.has_price_range() {
            non_empty(params.price_range)
        } else {
            None
        };
        let filter = ListingFilter {
            section,
            search,
            city: non_empty(params.city),
            tags,
            price_range,
            min_rating,
        };
        Self {
            filter,
            page: params.page,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ListingCard {
    pub listing: Listing,
    pub rating: AvgRating,
    /// The most recent image
    pub image: Option<Image>,
}

#[derive(Debug, Clone)]
pub struct ListingPage {
    pub cards: Vec<ListingCard>,
    pub page: Page,
}

pub fn query_listings<R>(repo: &R, query: &ListingQuery) -> Result<ListingPage>
where
    R: ListingRepo + RatingRepository,
{
    let total_count = repo.count_listings(&query.filter)?;
    let page = Page::resolve(total_count, LISTINGS_PER_PAGE, query.page.as_deref());
    let range = page.range();
    let ids = if range.is_empty() {
        vec![]
    } else {
        repo.query_listing_ids(&query.filter, range.start, range.len())?
    };
    if ids.is_empty() {
        return Ok(ListingPage {
            cards: vec![],
            page,
        });
    }

    let mut ratings: HashMap<Id, AvgRatingValueBuilder> = HashMap::with_capacity(ids.len());
    for rating in repo.load_ratings_of_listings(&ids)? {
        *ratings.entry(rating.listing_id).or_default() += rating.value;
    }
    let mut listings: HashMap<_, _> = repo
        .get_listings(&ids)?
        .into_iter()
        .map(|l| (l.id, l))
        .collect();
    let mut images = HashMap::new();
    for image in repo.load_images_of_listings(&ids)? {
        images.entry(image.listing_id).or_insert(image);
    }
    let cards = ids
        .iter()
        .filter_map(|id| {
            let Some(listing) = listings.remove(id) else {
                log::warn!("Listing {id} vanished while loading");
                return None;
            };
            Some(ListingCard {
                listing,
                rating: ratings.remove(id).unwrap_or_default().build(),
                image: images.remove(id),
            })
        })
        .collect();
    Ok(ListingPage { cards, page })
}
