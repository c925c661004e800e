use crate::database::manager::{Database, DbError};
use crate::database::models::CuisineRating;

/// Cuisine styles whose average rating ties the best average across all
/// styles. `>= ALL` keeps every style sharing the maximum.
pub async fn top_by_avg_rating() -> Result<Vec<CuisineRating>, DbError> {
    Database::with_connection(|conn| {
        Box::pin(async move {
            let cuisines = sqlx::query_as::<_, CuisineRating>(
                "SELECT cu.style, AVG(r.stars)::float8 AS avg_rating \
                 FROM cuisine cu \
                 JOIN recipe re ON cu.id = re.cuisine_id \
                 JOIN rate r ON r.recipe_id = re.id \
                 GROUP BY cu.style \
                 HAVING AVG(r.stars) >= ALL (\
                 SELECT AVG(r2.stars) \
                 FROM cuisine cu2 \
                 JOIN recipe re2 ON cu2.id = re2.cuisine_id \
                 JOIN rate r2 ON r2.recipe_id = re2.id \
                 GROUP BY cu2.style)",
            )
            .fetch_all(&mut *conn)
            .await?;
            Ok(cuisines)
        })
    })
    .await
}
