use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = listing)]
pub struct NewListing<'a> {
    pub section: &'a str,
    pub name: &'a str,
    pub city: Option<&'a str>,
    pub address: &'a str,
    pub description: &'a str,
    pub price_range: Option<&'a str>,
    pub resume: Option<&'a str>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct Listing {
    pub rowid: i64,
    pub section: String,
    pub name: String,
    pub city: Option<String>,
    pub address: String,
    pub description: String,
    pub price_range: Option<String>,
    pub resume: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = listing_tag)]
pub struct NewListingTag<'a> {
    pub listing_rowid: i64,
    pub facet: &'a str,
    pub code: &'a str,
}

#[derive(Queryable)]
pub struct ListingTag {
    pub listing_rowid: i64,
    pub facet: String,
    pub code: String,
}

#[derive(Insertable)]
#[diesel(table_name = listing_phone)]
pub struct NewListingPhone<'a> {
    pub listing_rowid: i64,
    pub phone: &'a str,
}

#[derive(Queryable)]
pub struct ListingPhone {
    pub rowid: i64,
    pub listing_rowid: i64,
    pub phone: String,
}

#[derive(Insertable)]
#[diesel(table_name = listing_image)]
pub struct NewListingImage<'a> {
    pub listing_rowid: i64,
    pub path: &'a str,
    pub description: Option<&'a str>,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct ListingImage {
    pub rowid: i64,
    pub listing_rowid: i64,
    pub path: String,
    pub description: Option<String>,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = listing_rating)]
pub struct NewListingRating {
    pub listing_rowid: i64,
    pub value: i32,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct ListingRating {
    pub rowid: i64,
    pub listing_rowid: i64,
    pub value: i32,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = listing_comment)]
pub struct NewListingComment<'a> {
    pub listing_rowid: i64,
    pub rating_rowid: Option<i64>,
    pub name: &'a str,
    pub email: Option<&'a str>,
    pub text: &'a str,
    pub approved: bool,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct ListingComment {
    pub rowid: i64,
    pub listing_rowid: i64,
    pub rating_rowid: Option<i64>,
    pub name: String,
    pub email: Option<String>,
    pub text: String,
    pub approved: bool,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = category)]
pub struct NewCategory<'a> {
    pub code: &'a str,
    pub icon: Option<&'a str>,
    pub sort_order: i32,
    pub active: bool,
}

#[derive(Queryable)]
pub struct Category {
    pub rowid: i64,
    pub code: String,
    pub icon: Option<String>,
    pub sort_order: i32,
    pub active: bool,
}

#[derive(Insertable)]
#[diesel(table_name = advertisement)]
pub struct NewAdvertisement<'a> {
    pub title: &'a str,
    pub section: &'a str,
    pub position: &'a str,
    pub sort_order: i32,
    pub active: bool,
    pub media_type: &'a str,
    pub media: &'a str,
    pub link: Option<&'a str>,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct Advertisement {
    pub rowid: i64,
    pub title: String,
    pub section: String,
    pub position: String,
    pub sort_order: i32,
    pub active: bool,
    pub media_type: String,
    pub media: String,
    pub link: Option<String>,
    pub created_at: i64,
}
