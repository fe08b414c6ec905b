// Copyright 2023 Remi Bernotavicius

use derive_more::Display;
use diesel::deserialize::Queryable;
use diesel::expression::Selectable;
use diesel_derive_newtype::DieselNewType;

#[derive(DieselNewType, Display, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Copy, Clone)]
pub struct RecipeId(i32);

impl RecipeId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }
}

impl From<RecipeId> for i32 {
    fn from(id: RecipeId) -> Self {
        id.0
    }
}

#[derive(Queryable, Selectable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::database::schema::recipe)]
pub struct Recipe {
    #[diesel(column_name = _id)]
    pub id: RecipeId,
    pub title: String,
    pub ingredients: String,
    pub steps: String,
    pub type_: String,
}
