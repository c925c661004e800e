use super::error::QueryError;

/// Columns of `recipe` that may appear in a caller-chosen projection.
pub const RECIPE_COLUMNS: &[&str] = &["id", "title", "time_consumed", "difficulty", "cuisine_id"];

/// A validated list of recipe columns.
///
/// Column names arrive from the client and end up interpolated into a SELECT
/// list, so every name is checked against [`RECIPE_COLUMNS`] first. Unknown
/// names are rejected rather than quoted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeProjection {
    columns: Vec<&'static str>,
}

impl RecipeProjection {
    pub fn parse(requested: &[String]) -> Result<Self, QueryError> {
        if requested.is_empty() {
            return Err(QueryError::EmptyProjection);
        }

        let mut columns = Vec::with_capacity(requested.len());
        for name in requested {
            let normalized = name.trim().to_ascii_lowercase();
            match RECIPE_COLUMNS.iter().find(|c| **c == normalized) {
                Some(column) => columns.push(*column),
                None => return Err(QueryError::UnknownColumn(name.clone())),
            }
        }

        Ok(Self { columns })
    }

    /// The validated names joined for a SELECT list.
    pub fn select_list(&self) -> String {
        self.columns.join(", ")
    }

    pub fn columns(&self) -> &[&'static str] {
        &self.columns
    }
}
