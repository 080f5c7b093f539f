//! Admin report cards.
//!
//! The report endpoints have no fixed schema, so the answer is kept as JSON
//! and flattened by [`ReportData::from_body`] into either a table (a list of
//! objects) or key/value pairs (an object of scalars).

use serde_json::{Map, Value};

use crate::client::ApiClient;
use crate::envelope::{self, REPORT};
use crate::error::ApiError;
use crate::transport::Transport;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReportKind {
    Loans,
    PopularBooks,
    ActiveMembers,
    Fines,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::Loans,
        ReportKind::PopularBooks,
        ReportKind::ActiveMembers,
        ReportKind::Fines,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            ReportKind::Loans => "loans",
            ReportKind::PopularBooks => "popular-books",
            ReportKind::ActiveMembers => "active-members",
            ReportKind::Fines => "fines",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::Loans => "Loan Statistics",
            ReportKind::PopularBooks => "Most Borrowed Books",
            ReportKind::ActiveMembers => "Most Active Members",
            ReportKind::Fines => "Fine Report",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ReportKind::Loans => "View statistics about book loans.",
            ReportKind::PopularBooks => "See which books are the most popular.",
            ReportKind::ActiveMembers => "Identify the most active library members.",
            ReportKind::Fines => "Generate a report of all fines.",
        }
    }
}

/// A report flattened for display.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ReportData {
    #[default]
    Empty,
    Pairs(Vec<(String, String)>),
    Table {
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

impl ReportData {
    pub fn from_body(body: &Value) -> Self {
        let rows: Vec<Value> = envelope::list(body, REPORT).unwrap_or_default();
        if !rows.is_empty() {
            return Self::table(&rows);
        }
        let object = body
            .get("data")
            .and_then(Value::as_object)
            .or_else(|| body.as_object());
        match object {
            Some(map) if !map.is_empty() => Self::pairs(map),
            _ => ReportData::Empty,
        }
    }

    fn table(rows: &[Value]) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for row in rows {
            if let Some(map) = row.as_object() {
                for key in map.keys() {
                    if !columns.contains(key) {
                        columns.push(key.clone());
                    }
                }
            }
        }
        if columns.is_empty() {
            columns.push("value".into());
            let rows = rows.iter().map(|v| vec![cell(v)]).collect();
            return ReportData::Table { columns, rows };
        }
        let rows = rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|c| row.get(c).map(cell).unwrap_or_default())
                    .collect()
            })
            .collect();
        ReportData::Table { columns, rows }
    }

    fn pairs(map: &Map<String, Value>) -> Self {
        ReportData::Pairs(
            map.iter()
                .filter(|(k, _)| k.as_str() != "message")
                .map(|(k, v)| (humanize(k), cell(v)))
                .collect(),
        )
    }
}

/// `total_loans` -> `Total loans`.
pub fn humanize(key: &str) -> String {
    let spaced = key.replace(['_', '-'], " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => "-".into(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(true) => "Yes".into(),
        Value::Bool(false) => "No".into(),
        Value::Array(items) => items.len().to_string(),
        Value::Object(map) => map
            .get("name")
            .or_else(|| map.get("title"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string()),
    }
}

impl<T: Transport> ApiClient<T> {
    pub async fn report(&self, kind: ReportKind) -> Result<ReportData, ApiError> {
        let body = self.get(&format!("/admin/reports/{}", kind.slug())).await?;
        Ok(ReportData::from_body(&body))
    }
}
