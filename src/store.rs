// Copyright 2023 Remi Bernotavicius

use crate::database;
use crate::database::models::{Recipe, RecipeId};
use diesel::ExpressionMethods as _;
use diesel::QueryDsl as _;
use diesel::QueryResult;
use diesel::RunQueryDsl as _;
use diesel::SelectableHelper as _;

/// Inserts a new recipe and returns its engine-assigned id. Field
/// validation (non-empty text) is the caller's responsibility.
pub fn create_recipe(
    conn: &mut database::Connection,
    new_title: &str,
    new_ingredients: &str,
    new_steps: &str,
    new_type: &str,
) -> QueryResult<RecipeId> {
    use database::schema::recipe::dsl::*;
    use diesel::insert_into;

    insert_into(recipe)
        .values((
            title.eq(new_title),
            ingredients.eq(new_ingredients),
            steps.eq(new_steps),
            type_.eq(new_type),
        ))
        .returning(_id)
        .get_result(conn)
}

/// All recipes in natural storage order. No ORDER BY, so the order is not
/// guaranteed stable across engines.
pub fn fetch_all_recipes(conn: &mut database::Connection) -> QueryResult<Vec<Recipe>> {
    use database::schema::recipe::dsl::*;

    recipe.select(Recipe::as_select()).load(conn)
}

/// A single recipe by id; a nonexistent id is `Ok(None)`, not an error.
pub fn fetch_recipe(
    conn: &mut database::Connection,
    fetch_id: RecipeId,
) -> QueryResult<Option<Recipe>> {
    use database::schema::recipe::dsl::*;
    use diesel::prelude::OptionalExtension as _;

    recipe
        .select(Recipe::as_select())
        .filter(_id.eq(fetch_id))
        .get_result(conn)
        .optional()
}

/// All recipes whose type contains the given substring. Case behavior
/// follows SQLite's default LIKE comparison.
pub fn fetch_recipes_by_type(
    conn: &mut database::Connection,
    filter: &str,
) -> QueryResult<Vec<Recipe>> {
    use database::schema::recipe::dsl::*;
    use diesel::expression_methods::TextExpressionMethods as _;

    recipe
        .select(Recipe::as_select())
        .filter(type_.like(format!("%{filter}%")))
        .distinct()
        .load(conn)
}

/// Full-field replace of the recipe with the given id. Returns true iff a
/// row matched. Partial updates are not supported.
pub fn update_recipe(
    conn: &mut database::Connection,
    edit_id: RecipeId,
    new_title: &str,
    new_ingredients: &str,
    new_steps: &str,
    new_type: &str,
) -> QueryResult<bool> {
    use database::schema::recipe::dsl::*;
    use diesel::update;

    let changed = update(recipe.filter(_id.eq(edit_id)))
        .set((
            title.eq(new_title),
            ingredients.eq(new_ingredients),
            steps.eq(new_steps),
            type_.eq(new_type),
        ))
        .execute(conn)?;
    Ok(changed > 0)
}

/// Removes the recipe with the given id. Returns true iff a row matched.
pub fn delete_recipe(conn: &mut database::Connection, delete_id: RecipeId) -> QueryResult<bool> {
    use database::schema::recipe::dsl::*;
    use diesel::delete;

    let removed = delete(recipe.filter(_id.eq(delete_id))).execute(conn)?;
    Ok(removed > 0)
}
