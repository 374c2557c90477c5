use super::*;

impl<'a> CategoryRepo for DbReadWrite<'a> {
    fn create_category_if_it_does_not_exist(&self, category: &Category) -> Result<bool> {
        create_category_if_it_does_not_exist(&mut self.conn.borrow_mut(), category)
    }
    fn all_categories(&self) -> Result<Vec<Category>> {
        all_categories(&mut self.conn.borrow_mut())
    }
}

impl<'a> CategoryRepo for DbConnection<'a> {
    fn create_category_if_it_does_not_exist(&self, category: &Category) -> Result<bool> {
        create_category_if_it_does_not_exist(&mut self.conn.borrow_mut(), category)
    }
    fn all_categories(&self) -> Result<Vec<Category>> {
        all_categories(&mut self.conn.borrow_mut())
    }
}

impl<'a> CategoryRepo for DbReadOnly<'a> {
    fn create_category_if_it_does_not_exist(&self, _category: &Category) -> Result<bool> {
        unreachable!();
    }
    fn all_categories(&self) -> Result<Vec<Category>> {
        all_categories(&mut self.conn.borrow_mut())
    }
}

fn create_category_if_it_does_not_exist(
    conn: &mut SqliteConnection,
    category: &Category,
) -> Result<bool> {
    let Category {
        code,
        icon,
        order,
        active,
    } = category;
    let new_category = models::NewCategory {
        code: code.code(),
        icon: icon.as_deref(),
        sort_order: *order,
        active: *active,
    };
    let count = diesel::insert_or_ignore_into(schema::category::table)
        .values(&new_category)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert!(count <= 1);
    Ok(count > 0)
}

fn all_categories(conn: &mut SqliteConnection) -> Result<Vec<Category>> {
    use schema::category::dsl;
    let rows = schema::category::table
        .order_by((dsl::sort_order, dsl::code))
        .load::<models::Category>(conn)
        .map_err(from_diesel_err)?;
    Ok(rows
        .into_iter()
        .filter_map(
            |models::Category {
                 rowid: _,
                 code,
                 icon,
                 sort_order,
                 active,
             }| {
                let Ok(code) = code.parse::<CategoryCode>() else {
                    log::warn!("Ignoring category with unknown code: {code}");
                    return None;
                };
                Some(Category {
                    code,
                    icon,
                    order: sort_order,
                    active,
                })
            },
        )
        .collect())
}
