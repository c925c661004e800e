//! Recipe operations: listing, table (re)creation, guarded inserts, the
//! ingredient exact-set search, column projection, and rating aggregation.

use serde_json::{json, Value};
use tracing::info;

use crate::database::manager::{Database, DbError};
use crate::database::models::{NewRecipe, Recipe, RecipeRating, RecipeSummary};
use crate::database::rows::row_to_values;
use crate::query::{bind_value_as, RecipeProjection, SqlQuery};

pub async fn fetch_all() -> Result<Vec<Recipe>, DbError> {
    Database::with_connection(|conn| {
        Box::pin(async move {
            let recipes = sqlx::query_as::<_, Recipe>(
                "SELECT id, title, time_consumed, difficulty, cuisine_id \
                 FROM recipe ORDER BY id ASC",
            )
            .fetch_all(&mut *conn)
            .await?;
            Ok(recipes)
        })
    })
    .await
}

/// Drop and re-create the `recipe` table. Dropping cascades to constraints
/// that reference it; dependent rows in `contain`, `rate`, `add_relation`
/// and `saved_lists` are not restored.
pub async fn initiate_table() -> Result<(), DbError> {
    Database::with_connection(|conn| {
        Box::pin(async move {
            sqlx::query("DROP TABLE IF EXISTS recipe CASCADE")
                .execute(&mut *conn)
                .await?;

            sqlx::query(
                "CREATE TABLE recipe (
                    id INTEGER PRIMARY KEY,
                    title VARCHAR(100) NOT NULL UNIQUE,
                    time_consumed INTEGER,
                    difficulty VARCHAR(20),
                    cuisine_id INTEGER REFERENCES cuisine(id)
                )",
            )
            .execute(&mut *conn)
            .await?;

            info!("Recipe table created");
            Ok(())
        })
    })
    .await
}

/// Insert a recipe after pre-checks, each failing with a descriptive
/// client-facing message: the linked customer must exist, and both the
/// recipe id and title must be unused (title compared case- and
/// whitespace-insensitively).
pub async fn insert(new: NewRecipe) -> Result<(), DbError> {
    Database::with_connection(move |conn| {
        Box::pin(async move {
            if let Some(customer_id) = new.customer_id {
                let customer = sqlx::query("SELECT name FROM customer WHERE id = $1")
                    .bind(customer_id)
                    .fetch_optional(&mut *conn)
                    .await?;
                if customer.is_none() {
                    return Err(DbError::Rejected("Customer ID does not exist!".to_string()));
                }
            }

            let id_taken = sqlx::query("SELECT id FROM recipe WHERE id = $1")
                .bind(new.id)
                .fetch_optional(&mut *conn)
                .await?;
            if id_taken.is_some() {
                return Err(DbError::Rejected(
                    "Recipe ID already exists. Choose different recipeID!".to_string(),
                ));
            }

            let title_taken =
                sqlx::query("SELECT title FROM recipe WHERE LOWER(TRIM(title)) = LOWER($1)")
                    .bind(&new.title)
                    .fetch_optional(&mut *conn)
                    .await?;
            if title_taken.is_some() {
                return Err(DbError::Rejected(
                    "Recipe title already used. Choose different recipe title!".to_string(),
                ));
            }

            sqlx::query(
                "INSERT INTO recipe (id, title, time_consumed, difficulty, cuisine_id) \
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(new.id)
            .bind(&new.title)
            .bind(new.time_consumed)
            .bind(new.difficulty.as_deref())
            .bind(new.cuisine_id)
            .execute(&mut *conn)
            .await
            .map_err(constraint_message)?;

            if let Some(customer_id) = new.customer_id {
                sqlx::query("INSERT INTO add_relation (customer_id, recipe_id) VALUES ($1, $2)")
                    .bind(customer_id)
                    .bind(new.id)
                    .execute(&mut *conn)
                    .await?;
            }

            Ok(())
        })
    })
    .await
}

/// Recipes whose ingredient set covers every requested ingredient.
pub async fn find_by_ingredients(names: Vec<String>) -> Result<Vec<RecipeSummary>, DbError> {
    let query = ingredient_search_query(&names);
    Database::with_connection(move |conn| {
        Box::pin(async move {
            let mut q = sqlx::query_as::<_, RecipeSummary>(&query.text);
            for param in &query.params {
                q = bind_value_as(q, param);
            }
            let recipes = q.fetch_all(&mut *conn).await?;
            Ok(recipes)
        })
    })
    .await
}

/// Caller-chosen columns, rows returned as arrays in request order.
pub async fn project(projection: RecipeProjection) -> Result<Vec<Vec<Value>>, DbError> {
    let sql = format!("SELECT {} FROM recipe", projection.select_list());
    Database::with_connection(move |conn| {
        Box::pin(async move {
            let rows = sqlx::query(&sql).fetch_all(&mut *conn).await?;
            Ok(rows.iter().map(row_to_values).collect())
        })
    })
    .await
}

pub async fn above_avg_rating(threshold: f64) -> Result<Vec<RecipeRating>, DbError> {
    Database::with_connection(move |conn| {
        Box::pin(async move {
            let recipes = sqlx::query_as::<_, RecipeRating>(
                "SELECT r.title, AVG(rt.stars)::float8 AS avg_rating \
                 FROM recipe r \
                 JOIN rate rt ON r.id = rt.recipe_id \
                 GROUP BY r.id, r.title \
                 HAVING AVG(rt.stars)::float8 >= $1 \
                 ORDER BY avg_rating DESC",
            )
            .bind(threshold)
            .fetch_all(&mut *conn)
            .await?;
            Ok(recipes)
        })
    })
    .await
}

/// Trimmed, lowercased, empties dropped, duplicates collapsed. The search
/// compares against `LOWER(TRIM(i.name))`, so inputs get the same treatment.
fn normalize_ingredients(names: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for name in names {
        let normalized = name.trim().to_lowercase();
        if !normalized.is_empty() && !out.contains(&normalized) {
            out.push(normalized);
        }
    }
    out
}

/// Build the exact-set search: a recipe matches when its distinct ingredient
/// names cover all N requested names (`HAVING COUNT(DISTINCT ...) = N`).
/// An empty request yields the unfiltered listing.
fn ingredient_search_query(names: &[String]) -> SqlQuery {
    let ingredients = normalize_ingredients(names);
    if ingredients.is_empty() {
        return SqlQuery::without_params("SELECT id, title FROM recipe ORDER BY id");
    }

    let count = ingredients.len();
    let placeholders: Vec<String> = (1..=count).map(|i| format!("${}", i)).collect();
    let text = format!(
        "SELECT r.id, r.title \
         FROM recipe r \
         JOIN contain c ON r.id = c.recipe_id \
         JOIN ingredient i ON c.ingredient_id = i.id \
         WHERE LOWER(TRIM(i.name)) IN ({}) \
         GROUP BY r.id, r.title \
         HAVING COUNT(DISTINCT LOWER(TRIM(i.name))) = ${}",
        placeholders.join(", "),
        count + 1
    );

    let mut params: Vec<Value> = ingredients.into_iter().map(Value::String).collect();
    params.push(json!(count));
    SqlQuery { text, params }
}

/// A race past the pre-checks still surfaces the same descriptive messages
/// when the database raises the constraint violation instead.
fn constraint_message(err: sqlx::Error) -> DbError {
    if let sqlx::Error::Database(ref db_err) = err {
        match db_err.constraint() {
            Some("recipe_pkey") => {
                return DbError::Rejected(
                    "Recipe ID already exists. Choose different recipeID!".to_string(),
                )
            }
            Some("recipe_title_key") => {
                return DbError::Rejected(
                    "Recipe title already used. Choose different recipe title!".to_string(),
                )
            }
            Some("recipe_cuisine_id_fkey") => {
                return DbError::Rejected("Cuisine ID does not exist!".to_string())
            }
            _ => {}
        }
    }
    DbError::Sqlx(err)
}
