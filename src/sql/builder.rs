//! Builds parameterized SELECT, INSERT and DELETE statements.

/// Quote identifier for PostgreSQL (identifiers only come from code, never from requests).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryBuf {
    pub sql: String,
    /// Bound as text, in `$1..$n` order.
    pub params: Vec<String>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: &str) -> usize {
        self.params.push(v.to_string());
        self.params.len()
    }
}

/// SELECT every row, ordered by the first column.
pub fn select_all(table: &str, columns: &[&str]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let cols = columns.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ");
    q.sql = format!("SELECT {} FROM {}", cols, quoted(table));
    if let Some(first) = columns.first() {
        q.sql.push_str(&format!(" ORDER BY {}", quoted(first)));
    }
    q
}

/// INSERT one row and return the generated key column.
pub fn insert_returning(table: &str, fields: &[(&str, &str)], returning: &str) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut cols = Vec::with_capacity(fields.len());
    let mut placeholders = Vec::with_capacity(fields.len());
    for (col, val) in fields {
        cols.push(quoted(col));
        let n = q.push_param(val);
        placeholders.push(format!("${}", n));
    }
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(table),
        cols.join(", "),
        placeholders.join(", "),
        quoted(returning)
    );
    q
}

/// DELETE rows whose key, compared as text, equals `id`. The id is opaque: a value that
/// is not a valid key simply matches nothing.
pub fn delete_by_id(table: &str, id_column: &str, id: &str) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(id);
    q.sql = format!(
        "DELETE FROM {} WHERE {}::text = ${}",
        quoted(table),
        quoted(id_column),
        n
    );
    q
}

pub fn delete_all(table: &str) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!("DELETE FROM {}", quoted(table));
    q
}
