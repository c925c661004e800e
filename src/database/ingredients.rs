use crate::database::manager::{Database, DbError};
use crate::database::models::Ingredient;

pub async fn fetch_all() -> Result<Vec<Ingredient>, DbError> {
    Database::with_connection(|conn| {
        Box::pin(async move {
            let ingredients =
                sqlx::query_as::<_, Ingredient>("SELECT id, name FROM ingredient ORDER BY id")
                    .fetch_all(&mut *conn)
                    .await?;
            Ok(ingredients)
        })
    })
    .await
}

/// Delete one ingredient. An id with no row reports NotFound; an ingredient
/// still referenced by a recipe is Rejected.
pub async fn delete(id: i32) -> Result<(), DbError> {
    Database::with_connection(move |conn| {
        Box::pin(async move {
            let result = sqlx::query("DELETE FROM ingredient WHERE id = $1")
                .bind(id)
                .execute(&mut *conn)
                .await
                .map_err(delete_error)?;

            if result.rows_affected() == 0 {
                return Err(DbError::NotFound(format!("ingredient {}", id)));
            }
            Ok(())
        })
    })
    .await
}

fn delete_error(err: sqlx::Error) -> DbError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.is_foreign_key_violation() {
            return DbError::Rejected("Failed to delete ingredient.".to_string());
        }
    }
    DbError::Sqlx(err)
}
