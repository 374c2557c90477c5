use std::collections::HashMap;

use diesel::{
    dsl::sql,
    sql_types::{Bool, Double},
    sqlite::Sqlite,
};

use super::*;

impl<'a> ListingRepo for DbReadWrite<'a> {
    fn create_listing(&self, listing: NewListing) -> Result<Id> {
        create_listing(&mut self.conn.borrow_mut(), listing)
    }
    fn get_listing(&self, id: Id) -> Result<Listing> {
        get_listing(&mut self.conn.borrow_mut(), id)
    }
    fn get_listings(&self, ids: &[Id]) -> Result<Vec<Listing>> {
        get_listings(&mut self.conn.borrow_mut(), ids)
    }
    fn count_listings(&self, filter: &ListingFilter) -> Result<usize> {
        count_listings(&mut self.conn.borrow_mut(), filter)
    }
    fn query_listing_ids(
        &self,
        filter: &ListingFilter,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Id>> {
        query_listing_ids(&mut self.conn.borrow_mut(), filter, offset, limit)
    }
    fn create_image(&self, image: NewImage) -> Result<Id> {
        create_image(&mut self.conn.borrow_mut(), image)
    }
    fn load_images_of_listings(&self, listing_ids: &[Id]) -> Result<Vec<Image>> {
        load_images_of_listings(&mut self.conn.borrow_mut(), listing_ids)
    }
}

impl<'a> ListingRepo for DbConnection<'a> {
    fn create_listing(&self, listing: NewListing) -> Result<Id> {
        create_listing(&mut self.conn.borrow_mut(), listing)
    }
    fn get_listing(&self, id: Id) -> Result<Listing> {
        get_listing(&mut self.conn.borrow_mut(), id)
    }
    fn get_listings(&self, ids: &[Id]) -> Result<Vec<Listing>> {
        get_listings(&mut self.conn.borrow_mut(), ids)
    }
    fn count_listings(&self, filter: &ListingFilter) -> Result<usize> {
        count_listings(&mut self.conn.borrow_mut(), filter)
    }
    fn query_listing_ids(
        &self,
        filter: &ListingFilter,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Id>> {
        query_listing_ids(&mut self.conn.borrow_mut(), filter, offset, limit)
    }
    fn create_image(&self, image: NewImage) -> Result<Id> {
        create_image(&mut self.conn.borrow_mut(), image)
    }
    fn load_images_of_listings(&self, listing_ids: &[Id]) -> Result<Vec<Image>> {
        load_images_of_listings(&mut self.conn.borrow_mut(), listing_ids)
    }
}

impl<'a> ListingRepo for DbReadOnly<'a> {
    fn create_listing(&self, _listing: NewListing) -> Result<Id> {
        unreachable!();
    }
    fn get_listing(&self, id: Id) -> Result<Listing> {
        get_listing(&mut self.conn.borrow_mut(), id)
    }
    fn get_listings(&self, ids: &[Id]) -> Result<Vec<Listing>> {
        get_listings(&mut self.conn.borrow_mut(), ids)
    }
    fn count_listings(&self, filter: &ListingFilter) -> Result<usize> {
        count_listings(&mut self.conn.borrow_mut(), filter)
    }
    fn query_listing_ids(
        &self,
        filter: &ListingFilter,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Id>> {
        query_listing_ids(&mut self.conn.borrow_mut(), filter, offset, limit)
    }
    fn create_image(&self, _image: NewImage) -> Result<Id> {
        unreachable!();
    }
    fn load_images_of_listings(&self, listing_ids: &[Id]) -> Result<Vec<Image>> {
        load_images_of_listings(&mut self.conn.borrow_mut(), listing_ids)
    }
}

fn create_listing(conn: &mut SqliteConnection, listing: NewListing) -> Result<Id> {
    let NewListing {
        name,
        city,
        address,
        description,
        phone_numbers,
        kind,
        created_at,
    } = listing;
    let section = kind.section();
    let new_listing = models::NewListing {
        section: section.code(),
        name: &name,
        city: city.map(Lookup::code),
        address: &address,
        description: description.as_deref().unwrap_or_default(),
        price_range: kind.price_range().map(Lookup::code),
        resume: kind.resume(),
        created_at: created_at.as_millis(),
        updated_at: created_at.as_millis(),
    };
    conn.transaction::<_, DieselError, _>(|conn| {
        use schema::listing::dsl;
        let rowid = diesel::insert_into(schema::listing::table)
            .values(&new_listing)
            .returning(dsl::rowid)
            .get_result::<i64>(conn)?;
        let tags: Vec<_> = section
            .facets()
            .iter()
            .flat_map(|facet| {
                kind.tag_codes(*facet)
                    .into_iter()
                    .map(|code| models::NewListingTag {
                        listing_rowid: rowid,
                        facet: facet.code(),
                        code,
                    })
            })
            .collect();
        if !tags.is_empty() {
            diesel::insert_into(schema::listing_tag::table)
                .values(&tags)
                .execute(conn)?;
        }
        let phones: Vec<_> = phone_numbers
            .iter()
            .map(|phone| models::NewListingPhone {
                listing_rowid: rowid,
                phone: phone.as_str(),
            })
            .collect();
        if !phones.is_empty() {
            diesel::insert_into(schema::listing_phone::table)
                .values(&phones)
                .execute(conn)?;
        }
        Ok(rowid)
    })
    .map(Id::from)
    .map_err(from_diesel_err)
}

fn get_listing(conn: &mut SqliteConnection, id: Id) -> Result<Listing> {
    get_listings(conn, &[id])?
        .into_iter()
        .next()
        .ok_or(repo::Error::NotFound)
}

fn get_listings(conn: &mut SqliteConnection, ids: &[Id]) -> Result<Vec<Listing>> {
    if ids.is_empty() {
        return Ok(vec![]);
    }
    let rowids = ids_to_rowids(ids);
    let rows = {
        use schema::listing::dsl;
        schema::listing::table
            .filter(dsl::rowid.eq_any(&rowids))
            .load::<models::Listing>(conn)
            .map_err(from_diesel_err)?
    };
    let mut tags = {
        use schema::listing_tag::dsl;
        let mut tags = HashMap::<i64, Vec<models::ListingTag>>::new();
        for tag in schema::listing_tag::table
            .filter(dsl::listing_rowid.eq_any(&rowids))
            .order_by((dsl::facet, dsl::code))
            .load::<models::ListingTag>(conn)
            .map_err(from_diesel_err)?
        {
            tags.entry(tag.listing_rowid).or_default().push(tag);
        }
        tags
    };
    let mut phones = {
        use schema::listing_phone::dsl;
        let mut phones = HashMap::<i64, Vec<PhoneNumber>>::new();
        for models::ListingPhone {
            listing_rowid,
            phone,
            ..
        } in schema::listing_phone::table
            .filter(dsl::listing_rowid.eq_any(&rowids))
            .order_by(dsl::rowid)
            .load::<models::ListingPhone>(conn)
            .map_err(from_diesel_err)?
        {
            phones.entry(listing_rowid).or_default().push(phone.into());
        }
        phones
    };
    let mut listings = Vec::with_capacity(rows.len());
    for row in rows {
        let tags = tags.remove(&row.rowid).unwrap_or_default();
        let phone_numbers = phones.remove(&row.rowid).unwrap_or_default();
        listings.push(load_listing(row, tags, phone_numbers)?);
    }
    // Preserve the requested order
    listings.sort_by_key(|l| ids.iter().position(|id| *id == l.id));
    Ok(listings)
}

fn load_listing(
    row: models::Listing,
    tags: Vec<models::ListingTag>,
    phone_numbers: Vec<PhoneNumber>,
) -> Result<Listing> {
    let models::Listing {
        rowid,
        section,
        name,
        city,
        address,
        description,
        price_range,
        resume,
        created_at,
        updated_at,
    } = row;
    let section = load_section(&section)?;
    let mut kind = ListingKind::empty(section);
    for models::ListingTag { facet, code, .. } in tags {
        let added = facet
            .parse::<Facet>()
            .map(|facet| kind.add_tag(facet, &code))
            .unwrap_or(false);
        if !added {
            log::warn!("Ignoring unknown tag {facet}={code} of listing {rowid}");
        }
    }
    match &mut kind {
        ListingKind::Gym {
            price_range: kind_price_range,
            ..
        } => {
            *kind_price_range = price_range.as_deref().and_then(|code| {
                let price_range = PriceRange::from_code(code);
                if price_range.is_none() {
                    log::warn!("Ignoring unknown price range {code} of listing {rowid}");
                }
                price_range
            });
        }
        ListingKind::Trainer {
            resume: kind_resume,
            ..
        } => {
            *kind_resume = resume.filter(|path| !path.is_empty());
        }
        ListingKind::Restaurant { .. } => {}
    }
    let city = city.as_deref().and_then(|code| {
        let city = City::from_code(code);
        if city.is_none() {
            log::warn!("Ignoring unknown city {code} of listing {rowid}");
        }
        city
    });
    Ok(Listing {
        id: rowid.into(),
        name,
        city,
        address,
        description: Some(description).filter(|d| !d.trim().is_empty()),
        phone_numbers,
        kind,
        created_at: load_timestamp(created_at)?,
        updated_at: load_timestamp(updated_at)?,
    })
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

type BoxedListingQuery<'a, ST> = schema::listing::BoxedQuery<'a, Sqlite, ST>;

fn filter_listings<'a, ST>(
    mut query: BoxedListingQuery<'a, ST>,
    filter: &'a ListingFilter,
) -> BoxedListingQuery<'a, ST> {
    use schema::{listing::dsl, listing_tag::dsl as tag_dsl};
    let ListingFilter {
        section,
        search,
        city,
        tags,
        price_range,
        min_rating,
    } = filter;
    query = query.filter(dsl::section.eq(section.code()));
    if let Some(search) = search {
        // SQLite LIKE ignores the case of ASCII letters only.
        let pattern = format!("%{}%", escape_like(search));
        query = query.filter(
            dsl::name
                .like(pattern.clone())
                .escape('\\')
                .or(dsl::address.like(pattern.clone()).escape('\\'))
                .or(dsl::description.like(pattern).escape('\\')),
        );
    }
    if let Some(city) = city {
        query = query.filter(dsl::city.eq(city.as_str()));
    }
    if let Some(price_range) = price_range {
        query = query.filter(dsl::price_range.eq(price_range.as_str()));
    }
    for (facet, codes) in tags {
        query = query.filter(
            dsl::rowid.eq_any(
                schema::listing_tag::table
                    .select(tag_dsl::listing_rowid)
                    .filter(tag_dsl::facet.eq(facet.code()))
                    .filter(tag_dsl::code.eq_any(codes)),
            ),
        );
    }
    if let Some(min_rating) = min_rating {
        // AVG() of a listing without ratings is NULL and never matches
        query = query.filter(
            sql::<Bool>(
                "(SELECT AVG(listing_rating.value) FROM listing_rating \
                  WHERE listing_rating.listing_rowid = listing.rowid) >= ",
            )
            .bind::<Double, _>(*min_rating),
        );
    }
    query
}

fn count_listings(conn: &mut SqliteConnection, filter: &ListingFilter) -> Result<usize> {
    let query = schema::listing::table
        .select(diesel::dsl::count_star())
        .into_boxed();
    Ok(filter_listings(query, filter)
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn query_listing_ids(
    conn: &mut SqliteConnection,
    filter: &ListingFilter,
    offset: usize,
    limit: usize,
) -> Result<Vec<Id>> {
    use schema::listing::dsl;
    if limit == 0 {
        return Ok(vec![]);
    }
    let query = schema::listing::table.select(dsl::rowid).into_boxed();
    let mut query = filter_listings(query, filter)
        .order_by((dsl::created_at.desc(), dsl::rowid.desc()))
        .limit(i64::try_from(limit).unwrap_or(i64::MAX));
    if offset > 0 {
        query = query.offset(offset as i64);
    }
    Ok(query
        .load::<i64>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Id::from)
        .collect())
}

fn create_image(conn: &mut SqliteConnection, image: NewImage) -> Result<Id> {
    use schema::listing_image::dsl;
    let NewImage {
        listing_id,
        path,
        description,
        created_at,
    } = image;
    let new_image = models::NewListingImage {
        listing_rowid: listing_id.to_i64(),
        path: &path,
        description: description.as_deref(),
        created_at: created_at.as_millis(),
    };
    diesel::insert_into(schema::listing_image::table)
        .values(&new_image)
        .returning(dsl::rowid)
        .get_result::<i64>(conn)
        .map(Id::from)
        .map_err(from_diesel_err)
}

fn load_images_of_listings(conn: &mut SqliteConnection, listing_ids: &[Id]) -> Result<Vec<Image>> {
    use schema::listing_image::dsl;
    if listing_ids.is_empty() {
        return Ok(vec![]);
    }
    schema::listing_image::table
        .filter(dsl::listing_rowid.eq_any(ids_to_rowids(listing_ids)))
        .order_by((dsl::created_at.desc(), dsl::rowid.desc()))
        .load::<models::ListingImage>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(
            |models::ListingImage {
                 rowid,
                 listing_rowid,
                 path,
                 description,
                 created_at,
             }|
             -> Result<Image> {
                Ok(Image {
                    id: rowid.into(),
                    listing_id: listing_rowid.into(),
                    path,
                    description,
                    created_at: load_timestamp(created_at)?,
                })
            },
        )
        .collect()
}
