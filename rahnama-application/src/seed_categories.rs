use super::*;

/// Creates the default navigation categories that are still missing.
pub fn seed_categories(connections: &sqlite::Connections) -> Result<Vec<Category>> {
    let mut connection = connections.exclusive()?;
    let created = connection.transaction(|conn| usecases::create_default_categories(conn))?;
    for category in &created {
        info!("Created category {}", category.code.code());
    }
    Ok(created)
}
