//! Filter-to-query compilation.
//!
//! [`Query::compile`] maps a sparse [`EmployeeSearchFilter`] into the one
//! boolean query the engine executes. Clause order is fixed so the
//! serialized output is reproducible: range clauses first (salary, then
//! monthly expenditure), exact-match clauses after (age, gender,
//! occupation, healthy lifestyle). The typed clause list only becomes the
//! engine's JSON DSL at the serialization boundary.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Value, json};

use crate::filter::EmployeeSearchFilter;

/// A value carried by an exact-match clause.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchValue {
    Int(i64),
    Text(String),
}

impl From<i64> for MatchValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for MatchValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for MatchValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl Serialize for MatchValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Int(value) => serializer.serialize_i64(*value),
            Self::Text(value) => serializer.serialize_str(value),
        }
    }
}

/// One clause of a boolean query.
///
/// Exact-match clauses serialize as `match` clauses uniformly: on analyzed
/// text a `term` lookup would never hit, and `match` against a numeric
/// field is plain equality.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryClause {
    /// Exact-match equality on a single field.
    Match {
        field: &'static str,
        value: MatchValue,
    },
    /// Inclusive numeric bounds; at least one bound is always present.
    Range {
        field: &'static str,
        gte: Option<f64>,
        lte: Option<f64>,
    },
}

impl QueryClause {
    /// Create an exact-match clause.
    #[inline]
    pub fn matches(field: &'static str, value: impl Into<MatchValue>) -> Self {
        Self::Match {
            field,
            value: value.into(),
        }
    }

    /// Create a range clause (inclusive bounds).
    #[inline]
    pub fn range(field: &'static str, gte: Option<f64>, lte: Option<f64>) -> Self {
        Self::Range { field, gte, lte }
    }
}

impl Serialize for QueryClause {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut outer = serializer.serialize_map(Some(1))?;
        match self {
            Self::Match { field, value } => {
                outer.serialize_entry("match", &FieldEntry { field: *field, value })?;
            }
            Self::Range { field, gte, lte } => {
                let bounds = Bounds {
                    gte: *gte,
                    lte: *lte,
                };
                outer.serialize_entry(
                    "range",
                    &FieldEntry {
                        field: *field,
                        value: &bounds,
                    },
                )?;
            }
        }
        outer.end()
    }
}

/// The compiled query: either match-everything or a conjunction of
/// clauses that must all hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    MatchAll,
    Bool { must: Vec<QueryClause> },
}

impl Query {
    /// Compile a filter into the query the engine executes.
    ///
    /// Total function: every well-typed filter compiles. A range pair
    /// contributes a clause iff at least one bound is present; absent
    /// bounds are omitted from the clause, present bounds are copied
    /// verbatim. An exact-match field contributes iff it is present,
    /// zero and empty values included. An empty clause list compiles to
    /// [`Query::MatchAll`], never to an empty conjunction.
    pub fn compile(filter: &EmployeeSearchFilter) -> Self {
        let mut must = Vec::new();

        if filter.salary_gte.is_some() || filter.salary_lte.is_some() {
            must.push(QueryClause::range(
                "salary",
                filter.salary_gte,
                filter.salary_lte,
            ));
        }
        if filter.monthly_expenditure_gte.is_some() || filter.monthly_expenditure_lte.is_some() {
            must.push(QueryClause::range(
                "monthly_expenditure",
                filter.monthly_expenditure_gte,
                filter.monthly_expenditure_lte,
            ));
        }

        if let Some(age) = filter.age {
            must.push(QueryClause::matches("age", age));
        }
        if let Some(gender) = filter.gender {
            must.push(QueryClause::matches("gender", gender));
        }
        if let Some(occupation) = &filter.occupation {
            must.push(QueryClause::matches("occupation", occupation.clone()));
        }
        if let Some(lifestyle) = &filter.healthy_lifestyle {
            must.push(QueryClause::matches("healthy_lifestyle", lifestyle.clone()));
        }

        if must.is_empty() {
            Query::MatchAll
        } else {
            Query::Bool { must }
        }
    }

    /// Wrap the query in the `{"query": ...}` envelope the search
    /// endpoint expects.
    pub fn to_request_body(&self) -> Value {
        json!({ "query": self })
    }
}

impl Serialize for Query {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut outer = serializer.serialize_map(Some(1))?;
        match self {
            Self::MatchAll => outer.serialize_entry("match_all", &EmptyObject)?,
            Self::Bool { must } => outer.serialize_entry("bool", &BoolBody { must })?,
        }
        outer.end()
    }
}

/// `{field: value}` — a single-entry object keyed by a runtime field name.
struct FieldEntry<'a, T: ?Sized> {
    field: &'a str,
    value: &'a T,
}

impl<T: ?Sized + Serialize> Serialize for FieldEntry<'_, T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.field, self.value)?;
        map.end()
    }
}

/// Range bounds with absent members structurally omitted, not null.
struct Bounds {
    gte: Option<f64>,
    lte: Option<f64>,
}

impl Serialize for Bounds {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        if let Some(lower) = self.gte {
            map.serialize_entry("gte", &lower)?;
        }
        if let Some(upper) = self.lte {
            map.serialize_entry("lte", &upper)?;
        }
        map.end()
    }
}

struct EmptyObject;

impl Serialize for EmptyObject {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_map(Some(0))?.end()
    }
}

struct BoolBody<'a> {
    must: &'a [QueryClause],
}

impl Serialize for BoolBody<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("must", self.must)?;
        map.end()
    }
}
