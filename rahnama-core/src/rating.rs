use crate::entities::*;

pub trait Rated {
    fn avg_rating(&self, _: &[Rating]) -> AvgRating;
}

impl Rated for Listing {
    fn avg_rating(&self, ratings: &[Rating]) -> AvgRating {
        debug_assert_eq!(
            ratings.len(),
            ratings.iter().filter(|r| r.listing_id == self.id).count()
        );
        avg_rating(ratings.iter().map(|r| r.value))
    }
}

pub fn avg_rating(values: impl IntoIterator<Item = RatingValue>) -> AvgRating {
    values
        .into_iter()
        .fold(AvgRatingValueBuilder::default(), |mut acc, v| {
            acc += v;
            acc
        })
        .build()
}
