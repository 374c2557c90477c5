use super::*;

/// Stores the rating and the comment of a visitor atomically.
///
/// Returns the ids of the new rating and comment.
pub fn create_comment(
    connections: &sqlite::Connections,
    section: Section,
    listing_id: Id,
    new_comment: usecases::NewListingComment,
) -> Result<(Id, Id)> {
    let mut connection = connections.exclusive()?;
    let (rating_id, comment_id) = connection.transaction(|conn| {
        let storable = usecases::prepare_new_comment(conn, section, listing_id, new_comment)?;
        usecases::store_new_comment(conn, storable).inspect_err(|err| {
            warn!("Failed to store new comment for listing {listing_id}: {err}");
        })
    })?;
    info!(
        "Created comment {comment_id} with rating {rating_id} for {} listing {listing_id}",
        section.code()
    );
    Ok((rating_id, comment_id))
}
