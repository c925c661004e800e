use serde_json::Value;
use sqlx::postgres::PgArguments;
use sqlx::FromRow;

use super::error::QueryError;

/// Boolean joiner for dynamic WHERE clauses.
///
/// The joiner arrives as caller-supplied text (`andOr`) and is parsed into an
/// enum before it gets anywhere near SQL; raw strings are never interpolated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoolOp {
    #[default]
    And,
    Or,
}

impl BoolOp {
    pub fn parse(s: &str) -> Result<Self, QueryError> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AND" => Ok(Self::And),
            "OR" => Ok(Self::Or),
            _ => Err(QueryError::InvalidBoolOp(s.to_string())),
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

/// A built SQL statement plus its positional parameters.
#[derive(Debug, Clone)]
pub struct SqlQuery {
    pub text: String,
    pub params: Vec<Value>,
}

impl SqlQuery {
    pub fn without_params(text: impl Into<String>) -> Self {
        Self { text: text.into(), params: vec![] }
    }
}

/// Accumulator for optional filters: each filter contributes zero or one
/// predicate fragment plus bound parameters, and the fragments are joined
/// with the requested boolean operator. No filters means no WHERE clause.
pub struct PredicateList {
    op: BoolOp,
    fragments: Vec<String>,
    params: Vec<Value>,
    param_index: usize,
}

impl PredicateList {
    pub fn new(op: BoolOp) -> Self {
        Self::with_offset(op, 0)
    }

    /// Start placeholder numbering after `starting_param_index` already-bound
    /// parameters, for statements that mix fixed and dynamic parameters.
    pub fn with_offset(op: BoolOp, starting_param_index: usize) -> Self {
        Self {
            op,
            fragments: vec![],
            params: vec![],
            param_index: starting_param_index,
        }
    }

    /// Reserve the next placeholder for `value` and return its `$n` text.
    pub fn bind(&mut self, value: Value) -> String {
        self.params.push(value);
        self.param_index += 1;
        format!("${}", self.param_index)
    }

    /// Add a complete predicate fragment.
    pub fn push(&mut self, fragment: impl Into<String>) {
        self.fragments.push(fragment.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// `" WHERE a AND b"` with a leading space, or `""` when no filter applies.
    pub fn where_clause(&self) -> String {
        if self.fragments.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.fragments.join(&format!(" {} ", self.op.as_sql())))
        }
    }

    pub fn into_params(self) -> Vec<Value> {
        self.params
    }
}

pub fn bind_value<'q>(
    q: sqlx::query::Query<'q, sqlx::Postgres, PgArguments>,
    v: &'q Value,
) -> sqlx::query::Query<'q, sqlx::Postgres, PgArguments> {
    match v {
        Value::Null => {
            let none: Option<String> = None;
            q.bind(none)
        }
        Value::Bool(b) => q.bind(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                q.bind(i)
            } else if let Some(u) = n.as_u64() {
                // Postgres has no u64; cast down if safe
                q.bind(u as i64)
            } else if let Some(f) = n.as_f64() {
                q.bind(f)
            } else {
                q.bind(n.to_string())
            }
        }
        Value::String(s) => q.bind(s),
        // Arrays are expanded into individual placeholders before binding
        Value::Array(_) => q,
        Value::Object(_) => q.bind(v.clone()), // JSONB
    }
}

pub fn bind_value_as<'q, O>(
    q: sqlx::query::QueryAs<'q, sqlx::Postgres, O, PgArguments>,
    v: &'q Value,
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, PgArguments>
where
    O: for<'r> FromRow<'r, sqlx::postgres::PgRow>,
{
    match v {
        Value::Null => {
            let none: Option<String> = None;
            q.bind(none)
        }
        Value::Bool(b) => q.bind(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                q.bind(i)
            } else if let Some(u) = n.as_u64() {
                q.bind(u as i64)
            } else if let Some(f) = n.as_f64() {
                q.bind(f)
            } else {
                q.bind(n.to_string())
            }
        }
        Value::String(s) => q.bind(s),
        Value::Array(_) => q,
        Value::Object(_) => q.bind(v.clone()),
    }
}
