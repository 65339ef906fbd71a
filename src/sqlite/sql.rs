use rusqlite::types;

/// Used as inputs to generate where conditions for SQL queries
///
/// # Arguments
/// * `clause` - the where clause
/// * `params` - the parameters for the where clause
///
/// # Examples
/// ```
/// use holocron::sqlite::sql::WhereConfig;
/// use rusqlite::types;
/// let (clause, params): WhereConfig = ("species = ?", &[types::Value::Text("Human".into())]);
/// ```
pub type WhereConfig<'a> = (&'a str, &'a [types::Value]);

/// The owned version of [WhereConfig],
/// used as outputs, e.g., for functions that generate where conditions for SQL queries
pub type WhereConfigOwned = (String, Vec<types::Value>);

///
/// A single bound condition, e.g. `("height >= ?", Value::Integer(180))`.
/// The clause must contain exactly one `?` placeholder.
pub type Condition = (&'static str, types::Value);

///
/// Standardize the where clause and parameters for a SQL query
/// # Arguments
/// * `q_config` - the where clause and the parameters for the where clause
/// * `link_word` - the word to link the where clause to the previous clause
/// # Examples
/// ```
/// use holocron::sqlite::sql::standardize_q_config;
/// use rusqlite::types;
/// let params = vec![types::Value::Integer(1)];
/// let q_config = Some(("id = ?", params.as_slice()));
/// let (clause, params) = standardize_q_config(q_config, "AND");
///
/// assert_eq!(clause, "AND id = ?");
/// assert_eq!(params, vec![types::Value::Integer(1)]);
/// ```
pub fn standardize_q_config(q_config: Option<WhereConfig>, link_word: &str) -> WhereConfigOwned {
    match q_config {
        Some((clause, params)) => {
            if clause.trim().is_empty() {
                return ("".to_string(), vec![]);
            }
            (
                if link_word.is_empty() {
                    clause.to_string()
                } else {
                    format!("{link_word} {clause}")
                },
                params.to_vec(),
            )
        }
        None => ("".to_string(), vec![]),
    }
}

///
/// Join bound conditions with `AND`.
/// An empty list gives an empty clause, i.e. no constraint at all.
/// # Examples
/// ```
/// use holocron::sqlite::sql::all_of;
/// use rusqlite::types::Value;
/// let (clause, params) = all_of(vec![
///     ("species = ?", Value::Text("Human".into())),
///     ("height >= ?", Value::Integer(180)),
/// ]);
/// assert_eq!(clause, "species = ? AND height >= ?");
/// assert_eq!(params.len(), 2);
/// ```
pub fn all_of(conditions: Vec<Condition>) -> WhereConfigOwned {
    let (clauses, params): (Vec<&str>, Vec<types::Value>) = conditions.into_iter().unzip();
    (clauses.join(" AND "), params)
}

///
/// Build a `WHERE ...` suffix out of optional bound conditions,
/// conditions that are `None` are left out
pub fn where_all_of(conditions: Vec<Option<Condition>>) -> WhereConfigOwned {
    let (clause, params) = all_of(conditions.into_iter().flatten().collect());
    standardize_q_config(Some((clause.as_str(), params.as_slice())), "WHERE")
}
