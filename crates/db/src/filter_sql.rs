//! Rendering of [`Predicate`] trees into parameterized SQL.
//!
//! Placeholders are numbered from the `first_param` passed to [`render`], so
//! callers can append their own (`LIMIT`, `OFFSET`) after the returned binds.

use cultores_core::filter::Predicate;
use cultores_core::types::DbId;

/// A value to bind, in placeholder order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Text(String),
    Id(DbId),
}

/// A rendered `WHERE` condition (without the keyword) and its binds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhereClause {
    pub sql: String,
    pub binds: Vec<SqlValue>,
}

impl WhereClause {
    /// Index of the first placeholder after this clause's binds.
    pub fn next_param(&self, first_param: usize) -> usize {
        first_param + self.binds.len()
    }
}

pub fn render(predicate: &Predicate, first_param: usize) -> WhereClause {
    let mut binds = Vec::new();
    let mut param_idx = first_param;
    let sql = render_into(predicate, &mut binds, &mut param_idx);
    WhereClause { sql, binds }
}

fn render_into(predicate: &Predicate, binds: &mut Vec<SqlValue>, param_idx: &mut usize) -> String {
    match predicate {
        Predicate::All(parts) => join(parts, "AND", "TRUE", binds, param_idx),
        Predicate::Any(parts) => join(parts, "OR", "FALSE", binds, param_idx),
        Predicate::StartsWith(column, value) => {
            let value = SqlValue::Text(format!("{}%", escape_like(value)));
            let idx = bind(binds, param_idx, value);
            format!("LOWER({}) LIKE ${idx} ESCAPE '\\'", column.as_str())
        }
        Predicate::Contains(column, value) => {
            let value = SqlValue::Text(format!("%{}%", escape_like(value)));
            let idx = bind(binds, param_idx, value);
            format!("LOWER({}) LIKE ${idx} ESCAPE '\\'", column.as_str())
        }
        Predicate::TextEq(column, value) => {
            let idx = bind(binds, param_idx, SqlValue::Text(value.clone()));
            format!("{} = ${idx}", column.as_str())
        }
        Predicate::IdEq(column, id) => {
            let idx = bind(binds, param_idx, SqlValue::Id(*id));
            format!("{} = ${idx}", column.as_str())
        }
        Predicate::Filled(column) => {
            let c = column.as_str();
            format!("({c} IS NOT NULL AND {c} <> '')")
        }
        Predicate::Blank(column) => {
            let c = column.as_str();
            format!("({c} IS NULL OR {c} = '')")
        }
    }
}

fn bind(binds: &mut Vec<SqlValue>, param_idx: &mut usize, value: SqlValue) -> usize {
    binds.push(value);
    let idx = *param_idx;
    *param_idx += 1;
    idx
}

fn join(
    parts: &[Predicate],
    op: &str,
    empty: &str,
    binds: &mut Vec<SqlValue>,
    param_idx: &mut usize,
) -> String {
    if parts.is_empty() {
        return empty.to_string();
    }
    let rendered: Vec<String> = parts
        .iter()
        .map(|p| render_into(p, binds, param_idx))
        .collect();
    format!("({})", rendered.join(&format!(" {op} ")))
}

/// Escape `LIKE` wildcards so the operand is matched literally.
fn escape_like(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
