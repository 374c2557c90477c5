use super::{get_listing_of_section, prelude::*};
use crate::util::validate::{
    parse_optional_email, parse_rating_value, validate_name, CommentInvalidation,
    FieldInvalidation,
};

/// A comment together with a rating as submitted by a visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewListingComment {
    pub name: String,
    pub email: String,
    pub comment: String,
    pub rating: String,
}

#[derive(Debug, Clone)]
pub struct Storable(Listing, NewRating, NewComment);

impl Storable {
    pub fn listing(&self) -> &Listing {
        &self.0
    }
}

pub fn prepare_new_comment<R>(
    repo: &R,
    section: Section,
    listing_id: Id,
    c: NewListingComment,
) -> Result<Storable>
where
    R: ListingRepo,
{
    let listing = get_listing_of_section(repo, section, listing_id)?;

    let NewListingComment {
        name,
        email,
        comment,
        rating,
    } = c;
    let name = name.trim();
    let text = comment.trim();
    let mut invalidation = CommentInvalidation {
        name: validate_name(name).err(),
        ..Default::default()
    };
    if text.is_empty() {
        invalidation.comment = Some(FieldInvalidation::Required);
    }
    let email = parse_optional_email(&email)
        .map_err(|err| invalidation.email = Some(err))
        .ok()
        .flatten();
    let value = parse_rating_value(&rating)
        .map_err(|err| invalidation.rating = Some(err))
        .ok();
    let Some(value) = value.filter(|_| invalidation.is_empty()) else {
        return Err(invalidation.into());
    };

    let now = Timestamp::now();
    let rating = NewRating {
        listing_id,
        value,
        created_at: now,
    };
    let comment = NewComment {
        listing_id,
        rating_id: None,
        name: name.to_owned(),
        email,
        text: text.to_owned(),
        // Published immediately
        approved: true,
        created_at: now,
    };
    Ok(Storable(listing, rating, comment))
}

/// Creates the rating and then the comment that refers to it.
///
/// Both records must be written within a single transaction.
pub fn store_new_comment<R>(repo: &R, s: Storable) -> Result<(Id, Id)>
where
    R: RatingRepository + CommentRepository,
{
    let Storable(listing, rating, mut comment) = s;
    debug_assert_eq!(listing.id, rating.listing_id);
    debug_assert_eq!(listing.id, comment.listing_id);
    let rating_id = repo.create_rating(rating)?;
    comment.rating_id = Some(rating_id);
    let comment_id = repo.create_comment(comment)?;
    Ok((rating_id, comment_id))
}

#[cfg(test)]
mod tests {
    use super::super::tests::MockDb;
    use super::*;
    use rahnama_entities::builders::*;

    fn valid_comment() -> NewListingComment {
        NewListingComment {
            name: "Sara".into(),
            email: "".into(),
            comment: "Clean and friendly".into(),
            rating: "4".into(),
        }
    }

    fn invalidation(res: Result<Storable>) -> CommentInvalidation {
        match res {
            Err(Error::InvalidComment(inv)) => inv,
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn comment_refers_to_new_rating() {
        let db = MockDb::default();
        let id = db.add_listing(Listing::build().section(Section::Trainer).finish());
        let storable = prepare_new_comment(&db, Section::Trainer, id, valid_comment()).unwrap();
        let (rating_id, comment_id) = store_new_comment(&db, storable).unwrap();

        let ratings = db.ratings.borrow();
        let comments = db.comments.borrow();
        assert_eq!(1, ratings.len());
        assert_eq!(1, comments.len());
        assert_eq!(rating_id, ratings[0].id);
        assert_eq!(RatingValue::from(4), ratings[0].value);
        assert_eq!(comment_id, comments[0].id);
        assert_eq!(Some(rating_id), comments[0].rating_id);
        assert_eq!(id, comments[0].listing_id);
        assert!(comments[0].approved);
        assert_eq!(None, comments[0].email);
    }

    #[test]
    fn rating_out_of_range() {
        let db = MockDb::default();
        let id = db.add_listing(Listing::build().finish());
        for rating in ["0", "6"] {
            let c = NewListingComment {
                rating: rating.into(),
                ..valid_comment()
            };
            let inv = invalidation(prepare_new_comment(&db, Section::Gym, id, c));
            assert_eq!(Some(FieldInvalidation::RatingValue), inv.rating);
            assert_eq!(None, inv.name);
        }
        assert!(db.ratings.borrow().is_empty());
        assert!(db.comments.borrow().is_empty());
    }

    #[test]
    fn collect_all_field_errors() {
        let db = MockDb::default();
        let id = db.add_listing(Listing::build().finish());
        let c = NewListingComment {
            name: " ".into(),
            email: "not-an-email".into(),
            comment: "".into(),
            rating: "".into(),
        };
        let inv = invalidation(prepare_new_comment(&db, Section::Gym, id, c));
        assert_eq!(Some(FieldInvalidation::Required), inv.name);
        assert_eq!(Some(FieldInvalidation::Email), inv.email);
        assert_eq!(Some(FieldInvalidation::Required), inv.comment);
        assert_eq!(Some(FieldInvalidation::Required), inv.rating);
    }

    #[test]
    fn keep_optional_email() {
        let db = MockDb::default();
        let id = db.add_listing(Listing::build().finish());
        let c = NewListingComment {
            email: "sara@example.com".into(),
            ..valid_comment()
        };
        let storable = prepare_new_comment(&db, Section::Gym, id, c).unwrap();
        store_new_comment(&db, storable).unwrap();
        assert_eq!(
            Some("sara@example.com"),
            db.comments.borrow()[0].email.as_ref().map(|e| e.as_str())
        );
    }

    #[test]
    fn comment_on_non_existing_listing() {
        let db = MockDb::default();
        assert!(matches!(
            prepare_new_comment(&db, Section::Gym, Id::new(42), valid_comment()),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }
}
