//! Renders the handful of statements the Postgres gateway issues from [`schema`] tables.
//!
//! [`schema`]: super::schema

use super::schema::{Column, Table};

fn quote(ident: &str) -> String {
    format!("\"{}\"", ident)
}

fn column_list(columns: &[Column]) -> String {
    columns
        .iter()
        .map(|c| quote(c.name))
        .collect::<Vec<_>>()
        .join(", ")
}

fn predicates(filter: &[Column], first_placeholder: usize) -> String {
    filter
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{} = ${}", quote(c.name), first_placeholder + i))
        .collect::<Vec<_>>()
        .join(" AND ")
}

/// `SELECT <all columns> FROM <table> [WHERE c1 = $1 AND ...] ORDER BY <key>`
pub fn select(table: &Table, filter: &[Column]) -> String {
    let mut sql = format!(
        "SELECT {} FROM {}",
        column_list(table.columns),
        quote(table.name)
    );
    if !filter.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&predicates(filter, 1));
    }
    sql.push_str(&format!(" ORDER BY {}", quote(table.key.name)));
    sql
}

/// Values are bound in the table's column order.
pub fn insert(table: &Table) -> String {
    let placeholders = (1..=table.columns.len())
        .map(|i| format!("${}", i))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quote(table.name),
        column_list(table.columns),
        placeholders
    )
}

/// `SET` values bind first, the key binds last.
pub fn update(table: &Table, set: &[Column]) -> String {
    let assignments = set
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{} = ${}", quote(c.name), i + 1))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "UPDATE {} SET {} WHERE {}",
        quote(table.name),
        assignments,
        predicates(&[table.key], set.len() + 1)
    )
}

pub fn exists(table: &Table) -> String {
    format!(
        "SELECT EXISTS (SELECT 1 FROM {} WHERE {})",
        quote(table.name),
        predicates(&[table.key], 1)
    )
}
