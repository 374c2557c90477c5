use super::prelude::*;

#[derive(Debug, Clone)]
pub struct ListingDetail {
    pub listing: Listing,
    /// Newest first
    pub images: Vec<Image>,
    pub rating: AvgRating,
    /// Only approved comments, newest first
    pub comments: Vec<Comment>,
}

/// Loads a listing and fails if it belongs to a different section.
pub fn get_listing_of_section<R>(repo: &R, section: Section, id: Id) -> Result<Listing>
where
    R: ListingRepo,
{
    let listing = repo.get_listing(id)?;
    if listing.section() != section {
        log::debug!(
            "Listing {id} belongs to section {} instead of {}",
            listing.section().code(),
            section.code()
        );
        return Err(RepoError::NotFound.into());
    }
    Ok(listing)
}

pub fn load_listing_detail<R>(repo: &R, section: Section, id: Id) -> Result<ListingDetail>
where
    R: ListingRepo + RatingRepository + CommentRepository,
{
    let listing = get_listing_of_section(repo, section, id)?;
    let images = repo.load_images_of_listings(&[id])?;
    let ratings = repo.load_ratings_of_listing(id)?;
    let rating = listing.avg_rating(&ratings);
    let comments = repo
        .load_comments_of_listing(id)?
        .into_iter()
        .filter(|c| c.approved)
        .collect();
    Ok(ListingDetail {
        listing,
        images,
        rating,
        comments,
    })
}

#[cfg(test)]
mod tests {
    use super::super::tests::MockDb;
    use super::*;
    use rahnama_entities::builders::*;

    #[test]
    fn hide_unapproved_comments() {
        let db = MockDb::default();
        let id = db.add_listing(Listing::build().name("Iron").finish());
        db.add_comment(id, "visible", true);
        db.add_comment(id, "hidden", false);

        let detail = load_listing_detail(&db, Section::Gym, id).unwrap();
        assert_eq!(1, detail.comments.len());
        assert_eq!("visible", detail.comments[0].text);
        assert_eq!(2, db.comments.borrow().len());
    }

    #[test]
    fn average_of_all_ratings() {
        let db = MockDb::default();
        let id = db.add_listing(Listing::build().finish());
        for v in [3, 4, 5] {
            db.add_rating(id, v);
        }
        let detail = load_listing_detail(&db, Section::Gym, id).unwrap();
        assert_eq!(4.0, detail.rating.value.rounded());
        assert_eq!(3, detail.rating.count);
    }

    #[test]
    fn average_without_ratings_is_zero() {
        let db = MockDb::default();
        let id = db.add_listing(Listing::build().finish());
        let detail = load_listing_detail(&db, Section::Gym, id).unwrap();
        assert_eq!(0.0, detail.rating.value.rounded());
        assert_eq!(0, detail.rating.count);
    }

    #[test]
    fn unknown_listing() {
        let db = MockDb::default();
        assert!(matches!(
            load_listing_detail(&db, Section::Gym, Id::new(1)),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }

    #[test]
    fn listing_of_another_section_is_not_found() {
        let db = MockDb::default();
        let id = db.add_listing(Listing::build().section(Section::Restaurant).finish());
        assert!(load_listing_detail(&db, Section::Restaurant, id).is_ok());
        assert!(matches!(
            load_listing_detail(&db, Section::Gym, id),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }
}
