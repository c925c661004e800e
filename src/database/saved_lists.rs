use crate::database::manager::{Database, DbError};
use crate::database::models::SavedListCount;

/// Every saved list with its owner's name and recipe count, grouped by
/// owner id as well so same-named lists of different owners stay separate.
pub async fn count_by_list() -> Result<Vec<SavedListCount>, DbError> {
    Database::with_connection(|conn| {
        Box::pin(async move {
            let counts = sqlx::query_as::<_, SavedListCount>(
                "SELECT s.name AS saved_list_name, c.name AS owner_name, \
                 COUNT(s.recipe_id) AS recipe_count \
                 FROM saved_lists s \
                 JOIN customer c ON s.owner_id = c.id \
                 GROUP BY s.name, c.name, s.owner_id \
                 ORDER BY c.name, s.name",
            )
            .fetch_all(&mut *conn)
            .await?;
            Ok(counts)
        })
    })
    .await
}
