use diesel::prelude::*;

use crate::domain::ingredient::{Ingredient as DomainIngredient, NewIngredient as DomainNewIngredient};
use crate::models::ingredient::{Ingredient as DbIngredient, NewIngredient as DbNewIngredient};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, IngredientReader, IngredientWriter};

impl IngredientReader for DieselRepository {
    fn get_ingredient_by_id(&self, id: i32) -> RepositoryResult<Option<DomainIngredient>> {
        use crate::schema::ingredients;

        let mut conn = self.conn()?;
        let ingredient = ingredients::table
            .filter(ingredients::id.eq(id))
            .first::<DbIngredient>(&mut conn)
            .optional()?;

        Ok(ingredient.map(DomainIngredient::from))
    }

    fn list_ingredients(&self) -> RepositoryResult<Vec<DomainIngredient>> {
        use crate::schema::ingredients;

        let mut conn = self.conn()?;
        let items = ingredients::table
            .order(ingredients::name.asc())
            .load::<DbIngredient>(&mut conn)?;

        Ok(items.into_iter().map(DomainIngredient::from).collect())
    }
}

impl IngredientWriter for DieselRepository {
    fn create_ingredient(
        &self,
        new_ingredient: &DomainNewIngredient,
    ) -> RepositoryResult<DomainIngredient> {
        use crate::schema::ingredients;

        let mut conn = self.conn()?;
        let created = diesel::insert_into(ingredients::table)
            .values(&DbNewIngredient::from(new_ingredient))
            .get_result::<DbIngredient>(&mut conn)?;

        Ok(created.into())
    }
}
