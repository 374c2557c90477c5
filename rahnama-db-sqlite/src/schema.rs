///////////////////////////////////////////////////////////////////////
// Listings
///////////////////////////////////////////////////////////////////////

table! {
    listing (rowid) {
        rowid -> BigInt,
        section -> Text,
        name -> Text,
        city -> Nullable<Text>,
        address -> Text,
        description -> Text,
        price_range -> Nullable<Text>,
        resume -> Nullable<Text>,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

table! {
    listing_tag (listing_rowid, facet, code) {
        listing_rowid -> BigInt,
        facet -> Text,
        code -> Text,
    }
}

joinable!(listing_tag -> listing (listing_rowid));

table! {
    listing_phone (rowid) {
        rowid -> BigInt,
        listing_rowid -> BigInt,
        phone -> Text,
    }
}

joinable!(listing_phone -> listing (listing_rowid));

table! {
    listing_image (rowid) {
        rowid -> BigInt,
        listing_rowid -> BigInt,
        path -> Text,
        description -> Nullable<Text>,
        created_at -> BigInt,
    }
}

joinable!(listing_image -> listing (listing_rowid));

///////////////////////////////////////////////////////////////////////
// Ratings and comments
///////////////////////////////////////////////////////////////////////

table! {
    listing_rating (rowid) {
        rowid -> BigInt,
        listing_rowid -> BigInt,
        value -> Integer,
        created_at -> BigInt,
    }
}

joinable!(listing_rating -> listing (listing_rowid));

table! {
    listing_comment (rowid) {
        rowid -> BigInt,
        listing_rowid -> BigInt,
        rating_rowid -> Nullable<BigInt>,
        name -> Text,
        email -> Nullable<Text>,
        text -> Text,
        approved -> Bool,
        created_at -> BigInt,
    }
}

joinable!(listing_comment -> listing (listing_rowid));

///////////////////////////////////////////////////////////////////////
// Navigation and advertisements
///////////////////////////////////////////////////////////////////////

table! {
    category (rowid) {
        rowid -> BigInt,
        code -> Text,
        icon -> Nullable<Text>,
        sort_order -> Integer,
        active -> Bool,
    }
}

table! {
    advertisement (rowid) {
        rowid -> BigInt,
        title -> Text,
        section -> Text,
        position -> Text,
        sort_order -> Integer,
        active -> Bool,
        media_type -> Text,
        media -> Text,
        link -> Nullable<Text>,
        created_at -> BigInt,
    }
}

allow_tables_to_appear_in_same_query!(
    listing,
    listing_tag,
    listing_phone,
    listing_image,
    listing_rating,
    listing_comment,
);
