use rusqlite::{types::ValueRef, Row};

///
/// Build a typed record out of a rusqlite [Row].
///
/// Implementations read columns by name, so a record never depends on the
/// position of a column in the select list.
pub trait FromRow: Sized {
    fn from_row(row: &Row) -> rusqlite::Result<Self>;
}

impl FromRow for i64 {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        row.get(0)
    }
}

///
/// Read a numeric column as a whole number.
///
/// The store may keep heights, populations and costs as INTEGER or REAL;
/// a REAL value is rounded to the nearest integer. `NULL` gives `None`.
/// # Arguments
/// * `row` - the row to read from
/// * `column` - the name of the column
pub fn whole_number(row: &Row, column: &str) -> rusqlite::Result<Option<i64>> {
    match row.get_ref(column)? {
        ValueRef::Null => Ok(None),
        ValueRef::Integer(n) => Ok(Some(n)),
        ValueRef::Real(x) => Ok(Some(x.round() as i64)),
        other => Err(rusqlite::Error::InvalidColumnType(
            row.as_ref().column_index(column)?,
            column.to_string(),
            other.data_type(),
        )),
    }
}

///
/// Same as [whole_number] for a column that must not be `NULL`
pub fn required_whole_number(row: &Row, column: &str) -> rusqlite::Result<i64> {
    match whole_number(row, column)? {
        Some(n) => Ok(n),
        None => Err(rusqlite::Error::InvalidColumnType(
            row.as_ref().column_index(column)?,
            column.to_string(),
            rusqlite::types::Type::Null,
        )),
    }
}
