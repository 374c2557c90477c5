use super::prelude::*;

/// Categories shown in the navigation of every page.
pub fn load_active_categories<R>(repo: &R) -> Result<Vec<Category>>
where
    R: CategoryRepo,
{
    let mut categories = repo.all_categories()?;
    categories.retain(|c| c.active);
    categories.sort_by(|a, b| (a.order, a.code.code()).cmp(&(b.order, b.code.code())));
    Ok(categories)
}

/// Creates all missing default categories.
///
/// Returns the newly created categories.
pub fn create_default_categories<R>(repo: &R) -> Result<Vec<Category>>
where
    R: CategoryRepo,
{
    let mut created = vec![];
    for category in Category::defaults() {
        if repo.create_category_if_it_does_not_exist(&category)? {
            created.push(category);
        }
    }
    Ok(created)
}
