//! Customer operations. Customers come in two optional specializations,
//! recipe creator and food critic, joined in for every read.

use serde_json::{json, Value};

use crate::database::manager::{Database, DbError};
use crate::database::models::{CustomerDetail, CustomerRating};
use crate::query::{bind_value, bind_value_as, BoolOp, PredicateList, SqlQuery};

const SELECT_DETAIL: &str = "SELECT c.id, c.name, c.email_address, rc.cooking_history, fc.rating_history \
     FROM customer c \
     LEFT JOIN recipe_creator rc ON c.id = rc.id \
     LEFT JOIN food_critic fc ON c.id = fc.id";

pub async fn fetch_all() -> Result<Vec<CustomerDetail>, DbError> {
    Database::with_connection(|conn| {
        Box::pin(async move {
            let sql = format!("{} ORDER BY c.id", SELECT_DETAIL);
            let customers = sqlx::query_as::<_, CustomerDetail>(&sql)
                .fetch_all(&mut *conn)
                .await?;
            Ok(customers)
        })
    })
    .await
}

/// Filtered customer selection. Both filters are optional and join with the
/// caller's boolean operator; no filters means every customer.
pub async fn select(
    customer_type: Option<String>,
    name: Option<String>,
    op: BoolOp,
) -> Result<Vec<CustomerDetail>, DbError> {
    let query = select_query(customer_type.as_deref(), name.as_deref(), op);
    Database::with_connection(move |conn| {
        Box::pin(async move {
            let mut q = sqlx::query_as::<_, CustomerDetail>(&query.text);
            for param in &query.params {
                q = bind_value_as(q, param);
            }
            let customers = q.fetch_all(&mut *conn).await?;
            Ok(customers)
        })
    })
    .await
}

/// Update the provided fields. The caller guarantees at least one is set;
/// zero affected rows means the customer does not exist.
pub async fn update(
    id: i32,
    new_name: Option<String>,
    new_email: Option<String>,
) -> Result<(), DbError> {
    let query = update_query(id, new_name.as_deref(), new_email.as_deref());
    Database::with_connection(move |conn| {
        Box::pin(async move {
            let mut q = sqlx::query(&query.text);
            for param in &query.params {
                q = bind_value(q, param);
            }
            let result = q.execute(&mut *conn).await?;
            if result.rows_affected() == 0 {
                return Err(DbError::NotFound(format!("customer {}", id)));
            }
            Ok(())
        })
    })
    .await
}

/// Customers who rated a matching recipe at or above the star floor. The
/// title match is a case-insensitive substring.
pub async fn by_recipe_rating(
    recipe_title: String,
    min_stars: f64,
) -> Result<Vec<CustomerRating>, DbError> {
    Database::with_connection(move |conn| {
        Box::pin(async move {
            let customers = sqlx::query_as::<_, CustomerRating>(
                "SELECT c.id, c.name, c.email_address, r.stars \
                 FROM customer c \
                 JOIN rate r ON c.id = r.customer_id \
                 JOIN recipe re ON r.recipe_id = re.id \
                 WHERE LOWER(TRIM(re.title)) LIKE '%' || LOWER(TRIM($1)) || '%' \
                 AND r.stars >= $2 \
                 ORDER BY c.id",
            )
            .bind(&recipe_title)
            .bind(min_stars)
            .fetch_all(&mut *conn)
            .await?;
            Ok(customers)
        })
    })
    .await
}

/// Dynamic WHERE from the optional type and name filters. Unrecognized type
/// values and blank names contribute nothing.
fn select_query(customer_type: Option<&str>, name: Option<&str>, op: BoolOp) -> SqlQuery {
    let mut preds = PredicateList::new(op);
    match customer_type {
        Some("recipeCreator") => preds.push("rc.id IS NOT NULL"),
        Some("foodCritic") => preds.push("fc.id IS NOT NULL"),
        _ => {}
    }
    if let Some(name) = name {
        if !name.trim().is_empty() {
            let placeholder = preds.bind(json!(name));
            preds.push(format!("LOWER(TRIM(c.name)) = LOWER({})", placeholder));
        }
    }

    let text = format!("{}{} ORDER BY c.id", SELECT_DETAIL, preds.where_clause());
    SqlQuery { text, params: preds.into_params() }
}

fn update_query(id: i32, new_name: Option<&str>, new_email: Option<&str>) -> SqlQuery {
    let mut sets = Vec::new();
    let mut params: Vec<Value> = Vec::new();
    if let Some(name) = new_name {
        params.push(json!(name));
        sets.push(format!("name = ${}", params.len()));
    }
    if let Some(email) = new_email {
        params.push(json!(email));
        sets.push(format!("email_address = ${}", params.len()));
    }
    params.push(json!(id));

    let text = format!(
        "UPDATE customer SET {} WHERE id = ${}",
        sets.join(", "),
        params.len()
    );
    SqlQuery { text, params }
}
