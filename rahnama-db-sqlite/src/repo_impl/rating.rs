use super::*;

impl<'a> RatingRepository for DbReadWrite<'a> {
    fn create_rating(&self, rating: NewRating) -> Result<Id> {
        create_rating(&mut self.conn.borrow_mut(), rating)
    }
    fn load_ratings_of_listing(&self, listing_id: Id) -> Result<Vec<Rating>> {
        load_ratings_of_listings(&mut self.conn.borrow_mut(), &[listing_id])
    }
    fn load_ratings_of_listings(&self, listing_ids: &[Id]) -> Result<Vec<Rating>> {
        load_ratings_of_listings(&mut self.conn.borrow_mut(), listing_ids)
    }
}

impl<'a> RatingRepository for DbConnection<'a> {
    fn create_rating(&self, rating: NewRating) -> Result<Id> {
        create_rating(&mut self.conn.borrow_mut(), rating)
    }
    fn load_ratings_of_listing(&self, listing_id: Id) -> Result<Vec<Rating>> {
        load_ratings_of_listings(&mut self.conn.borrow_mut(), &[listing_id])
    }
    fn load_ratings_of_listings(&self, listing_ids: &[Id]) -> Result<Vec<Rating>> {
        load_ratings_of_listings(&mut self.conn.borrow_mut(), listing_ids)
    }
}

impl<'a> RatingRepository for DbReadOnly<'a> {
    fn create_rating(&self, _rating: NewRating) -> Result<Id> {
        unreachable!();
    }
    fn load_ratings_of_listing(&self, listing_id: Id) -> Result<Vec<Rating>> {
        load_ratings_of_listings(&mut self.conn.borrow_mut(), &[listing_id])
    }
    fn load_ratings_of_listings(&self, listing_ids: &[Id]) -> Result<Vec<Rating>> {
        load_ratings_of_listings(&mut self.conn.borrow_mut(), listing_ids)
    }
}

fn create_rating(conn: &mut SqliteConnection, rating: NewRating) -> Result<Id> {
    use schema::listing_rating::dsl;
    let NewRating {
        listing_id,
        value,
        created_at,
    } = rating;
    debug_assert!(value.is_valid());
    let new_rating = models::NewListingRating {
        listing_rowid: listing_id.to_i64(),
        value: u8::from(value).into(),
        created_at: created_at.as_millis(),
    };
    diesel::insert_into(schema::listing_rating::table)
        .values(&new_rating)
        .returning(dsl::rowid)
        .get_result::<i64>(conn)
        .map(Id::from)
        .map_err(|err| match err {
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                repo::Error::NotFound
            }
            err => from_diesel_err(err),
        })
}

fn load_ratings_of_listings(
    conn: &mut SqliteConnection,
    listing_ids: &[Id],
) -> Result<Vec<Rating>> {
    use schema::listing_rating::dsl;
    if listing_ids.is_empty() {
        return Ok(vec![]);
    }
    schema::listing_rating::table
        .filter(dsl::listing_rowid.eq_any(ids_to_rowids(listing_ids)))
        .order_by((dsl::created_at.desc(), dsl::rowid.desc()))
        .load::<models::ListingRating>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(
            |models::ListingRating {
                 rowid,
                 listing_rowid,
                 value,
                 created_at,
             }|
             -> Result<Rating> {
                let value = u8::try_from(value)
                    .ok()
                    .map(RatingValue::from)
                    .filter(|v| v.is_valid())
                    .ok_or_else(|| anyhow!("Invalid rating value: {value}"))?;
                Ok(Rating {
                    id: rowid.into(),
                    listing_id: listing_rowid.into(),
                    value,
                    created_at: load_timestamp(created_at)?,
                })
            },
        )
        .collect()
}
