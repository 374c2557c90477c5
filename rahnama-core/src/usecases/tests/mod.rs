use std::{cell::RefCell, result};

use crate::{
    entities::*,
    repositories::{Error as RepoError, *},
};

type RepoResult<T> = result::Result<T, RepoError>;

#[derive(Default)]
pub struct MockDb {
    pub listings: RefCell<Vec<Listing>>,
    pub images: RefCell<Vec<Image>>,
    pub ratings: RefCell<Vec<Rating>>,
    pub comments: RefCell<Vec<Comment>>,
    pub ads: RefCell<Vec<Advertisement>>,
    pub categories: RefCell<Vec<Category>>,
    /// Number of listing ids of each rating lookup
    pub rating_lookups: RefCell<Vec<usize>>,
    last_id: RefCell<i64>,
}

impl MockDb {
    fn next_id(&self) -> Id {
        let mut last_id = self.last_id.borrow_mut();
        *last_id += 1;
        Id::new(*last_id)
    }

    pub fn add_listing(&self, listing: Listing) -> Id {
        self.create_listing(listing.into()).unwrap()
    }

    pub fn add_rating(&self, listing_id: Id, value: u8) -> Id {
        self.create_rating(NewRating {
            listing_id,
            value: value.into(),
            created_at: Timestamp::now(),
        })
        .unwrap()
    }

    pub fn add_comment(&self, listing_id: Id, text: &str, approved: bool) -> Id {
        self.create_comment(NewComment {
            listing_id,
            rating_id: None,
            name: "visitor".into(),
            email: None,
            text: text.into(),
            approved,
            created_at: Timestamp::now(),
        })
        .unwrap()
    }

    pub fn add_image(&self, listing_id: Id, path: &str, created_at: i64) -> Id {
        self.create_image(NewImage {
            listing_id,
            path: path.into(),
            description: None,
            created_at: Timestamp::from_millis(created_at).unwrap(),
        })
        .unwrap()
    }

    fn average_rating(&self, listing_id: Id) -> Option<f64> {
        let values: Vec<_> = self
            .ratings
            .borrow()
            .iter()
            .filter(|r| r.listing_id == listing_id)
            .map(|r| f64::from(r.value))
            .collect();
        if values.is_empty() {
            return None;
        }
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }

    fn filtered_listing_ids(&self, filter: &ListingFilter) -> Vec<Id> {
        let mut listings: Vec<_> = self
            .listings
            .borrow()
            .iter()
            .filter(|l| matches_filter(l, filter))
            .filter(|l| {
                filter.min_rating.is_none_or(|min_rating| {
                    self.average_rating(l.id)
                        .is_some_and(|avg| avg >= min_rating)
                })
            })
            .map(|l| (l.created_at, l.id))
            .collect();
        listings.sort_by(|a, b| b.cmp(a));
        listings.into_iter().map(|(_, id)| id).collect()
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn matches_filter(listing: &Listing, filter: &ListingFilter) -> bool {
    let ListingFilter {
        section,
        search,
        city,
        tags,
        price_range,
        min_rating: _,
    } = filter;
    if listing.section() != *section {
        return false;
    }
    if let Some(search) = search {
        if !(contains_ignore_case(&listing.name, search)
            || contains_ignore_case(&listing.address, search)
            || listing
                .description
                .as_deref()
                .is_some_and(|d| contains_ignore_case(d, search)))
        {
            return false;
        }
    }
    if let Some(city) = city {
        if listing.city.map(Lookup::code) != Some(city.as_str()) {
            return false;
        }
    }
    for (facet, codes) in tags {
        let listing_codes = listing.kind.tag_codes(*facet);
        if !codes.iter().any(|c| listing_codes.contains(&c.as_str())) {
            return false;
        }
    }
    if let Some(price_range) = price_range {
        if listing.kind.price_range().map(Lookup::code) != Some(price_range.as_str()) {
            return false;
        }
    }
    true
}

impl ListingRepo for MockDb {
    fn create_listing(&self, listing: NewListing) -> RepoResult<Id> {
        let id = self.next_id();
        let NewListing {
            name,
            city,
            address,
            description,
            phone_numbers,
            kind,
            created_at,
        } = listing;
        self.listings.borrow_mut().push(Listing {
            id,
            name,
            city,
            address,
            description,
            phone_numbers,
            kind,
            created_at,
            updated_at: created_at,
        });
        Ok(id)
    }

    fn get_listing(&self, id: Id) -> RepoResult<Listing> {
        self.listings
            .borrow()
            .iter()
            .find(|l| l.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn get_listings(&self, ids: &[Id]) -> RepoResult<Vec<Listing>> {
        Ok(self
            .listings
            .borrow()
            .iter()
            .filter(|l| ids.contains(&l.id))
            .cloned()
            .collect())
    }

    fn count_listings(&self, filter: &ListingFilter) -> RepoResult<usize> {
        Ok(self.filtered_listing_ids(filter).len())
    }

    fn query_listing_ids(
        &self,
        filter: &ListingFilter,
        offset: usize,
        limit: usize,
    ) -> RepoResult<Vec<Id>> {
        Ok(self
            .filtered_listing_ids(filter)
            .into_iter()
            .skip(offset)
            .take(limit)
            .collect())
    }

    fn create_image(&self, image: NewImage) -> RepoResult<Id> {
        let id = self.next_id();
        let NewImage {
            listing_id,
            path,
            description,
            created_at,
        } = image;
        self.images.borrow_mut().push(Image {
            id,
            listing_id,
            path,
            description,
            created_at,
        });
        Ok(id)
    }

    fn load_images_of_listings(&self, listing_ids: &[Id]) -> RepoResult<Vec<Image>> {
        let mut images: Vec<_> = self
            .images
            .borrow()
            .iter()
            .filter(|i| listing_ids.contains(&i.listing_id))
            .cloned()
            .collect();
        images.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(images)
    }
}

impl RatingRepository for MockDb {
    fn create_rating(&self, rating: NewRating) -> RepoResult<Id> {
        if !self.listings.borrow().iter().any(|l| l.id == rating.listing_id) {
            return Err(RepoError::NotFound);
        }
        let id = self.next_id();
        let NewRating {
            listing_id,
            value,
            created_at,
        } = rating;
        self.ratings.borrow_mut().push(Rating {
            id,
            listing_id,
            value,
            created_at,
        });
        Ok(id)
    }

    fn load_ratings_of_listing(&self, listing_id: Id) -> RepoResult<Vec<Rating>> {
        self.load_ratings_of_listings(&[listing_id])
    }

    fn load_ratings_of_listings(&self, listing_ids: &[Id]) -> RepoResult<Vec<Rating>> {
        self.rating_lookups.borrow_mut().push(listing_ids.len());
        let mut ratings: Vec<_> = self
            .ratings
            .borrow()
            .iter()
            .filter(|r| listing_ids.contains(&r.listing_id))
            .cloned()
            .collect();
        ratings.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(ratings)
    }
}

impl CommentRepository for MockDb {
    fn create_comment(&self, comment: NewComment) -> RepoResult<Id> {
        let id = self.next_id();
        let NewComment {
            listing_id,
            rating_id,
            name,
            email,
            text,
            approved,
            created_at,
        } = comment;
        self.comments.borrow_mut().push(Comment {
            id,
            listing_id,
            rating_id,
            name,
            email,
            text,
            approved,
            created_at,
        });
        Ok(id)
    }

    fn load_comments_of_listing(&self, listing_id: Id) -> RepoResult<Vec<Comment>> {
        let mut comments: Vec<_> = self
            .comments
            .borrow()
            .iter()
            .filter(|c| c.listing_id == listing_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(comments)
    }
}

impl AdvertisementRepo for MockDb {
    fn create_advertisement(&self, ad: NewAdvertisement) -> RepoResult<Id> {
        let id = self.next_id();
        let NewAdvertisement {
            title,
            section,
            position,
            order,
            active,
            media,
            link,
            created_at,
        } = ad;
        self.ads.borrow_mut().push(Advertisement {
            id,
            title,
            section,
            position,
            order,
            active,
            media,
            link,
            created_at,
        });
        Ok(id)
    }

    fn load_active_advertisements(
        &self,
        section: Section,
        position: AdPosition,
        limit: usize,
    ) -> RepoResult<Vec<Advertisement>> {
        let mut ads: Vec<_> = self
            .ads
            .borrow()
            .iter()
            .filter(|a| a.active && a.section == section && a.position == position)
            .cloned()
            .collect();
        ads.sort_by_key(|a| a.order);
        ads.truncate(limit);
        Ok(ads)
    }
}

impl CategoryRepo for MockDb {
    fn create_category_if_it_does_not_exist(&self, category: &Category) -> RepoResult<bool> {
        let mut categories = self.categories.borrow_mut();
        if categories.iter().any(|c| c.code == category.code) {
            return Ok(false);
        }
        categories.push(category.clone());
        Ok(true)
    }

    fn all_categories(&self) -> RepoResult<Vec<Category>> {
        Ok(self.categories.borrow().clone())
    }
}
