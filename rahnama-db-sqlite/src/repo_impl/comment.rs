use super::*;

impl<'a> CommentRepository for DbReadWrite<'a> {
    fn create_comment(&self, comment: NewComment) -> Result<Id> {
        create_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn load_comments_of_listing(&self, listing_id: Id) -> Result<Vec<Comment>> {
        load_comments_of_listing(&mut self.conn.borrow_mut(), listing_id)
    }
}

impl<'a> CommentRepository for DbConnection<'a> {
    fn create_comment(&self, comment: NewComment) -> Result<Id> {
        create_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn load_comments_of_listing(&self, listing_id: Id) -> Result<Vec<Comment>> {
        load_comments_of_listing(&mut self.conn.borrow_mut(), listing_id)
    }
}

impl<'a> CommentRepository for DbReadOnly<'a> {
    fn create_comment(&self, _comment: NewComment) -> Result<Id> {
        unreachable!();
    }
    fn load_comments_of_listing(&self, listing_id: Id) -> Result<Vec<Comment>> {
        load_comments_of_listing(&mut self.conn.borrow_mut(), listing_id)
    }
}

fn create_comment(conn: &mut SqliteConnection, comment: NewComment) -> Result<Id> {
    use schema::listing_comment::dsl;
    let NewComment {
        listing_id,
        rating_id,
        name,
        email,
        text,
        approved,
        created_at,
    } = comment;
    let new_comment = models::NewListingComment {
        listing_rowid: listing_id.to_i64(),
        rating_rowid: rating_id.map(Id::to_i64),
        name: &name,
        email: email.as_ref().map(EmailAddress::as_str),
        text: &text,
        approved,
        created_at: created_at.as_millis(),
    };
    diesel::insert_into(schema::listing_comment::table)
        .values(&new_comment)
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

fn load_comments_of_listing(conn: &mut SqliteConnection, listing_id: Id) -> Result<Vec<Comment>> {
    use schema::listing_comment::dsl;
    schema::listing_comment::table
        .filter(dsl::listing_rowid.eq(listing_id.to_i64()))
        .order_by((dsl::created_at.desc(), dsl::rowid.desc()))
        .load::<models::ListingComment>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(
            |models::ListingComment {
                 rowid,
                 listing_rowid,
                 rating_rowid,
                 name,
                 email,
                 text,
                 approved,
                 created_at,
             }|
             -> Result<Comment> {
                Ok(Comment {
                    id: rowid.into(),
                    listing_id: listing_rowid.into(),
                    rating_id: rating_rowid.map(Id::from),
                    name,
                    // Addresses have been validated before they were stored
                    email: email.map(EmailAddress::new_unchecked),
                    text,
                    approved,
                    created_at: load_timestamp(created_at)?,
                })
            },
        )
        .collect()
}
