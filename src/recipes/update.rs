/**
 * Sparse Update Builder
 *
 * Builds the minimal UPDATE statement for a partial recipe edit. Callers
 * send only the fields they want to change; everything else stays
 * untouched.
 *
 * # Injection Safety
 *
 * Column names entering the statement text come exclusively from the
 * fixed `EDITABLE_COLUMNS` allow-list below; caller input is only ever
 * bound as a positional parameter. Deserializing into `RecipeEdit`
 * guarantees no caller-supplied key can reach the SQL text even if the
 * allow-list grows.
 *
 * # Ownership Scoping
 *
 * The recipe id and owner id are always appended as the final two
 * positional parameters and appear only in the WHERE predicate. A
 * caller cannot place either in the SET clause, so ownership itself is
 * not editable through this path.
 */

use serde::Deserialize;
use uuid::Uuid;

use crate::db::SqlValue;
use crate::error::ApiError;

/// Editable recipe columns, in the fixed order they are emitted
///
/// The order is part of the contract: generated statements and their
/// positional parameters are reproducible regardless of caller key
/// order.
pub const EDITABLE_COLUMNS: [&str; 5] = [
    "name_recipe",
    "description",
    "meal_type_id",
    "steps",
    "img_url",
];

/// Sparse edit request for a recipe
///
/// Absent fields are left unchanged. A present-but-empty string is also
/// treated as "leave unchanged" - the system's intake convention, which
/// makes "clear this field to empty" inexpressible. Known limitation,
/// preserved deliberately.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct RecipeEdit {
    #[serde(default)]
    pub name_recipe: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub meal_type_id: Option<i32>,
    #[serde(default)]
    pub steps: Option<String>,
    #[serde(default)]
    pub img_url: Option<String>,
}

/// A built statement with its positional parameters, ready to execute
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStatement {
    pub sql: String,
    pub params: Vec<SqlValue>,
}

fn present(field: &Option<String>) -> Option<SqlValue> {
    field
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(|s| SqlValue::Text(s.to_string()))
}

/// Build the sparse UPDATE for `recipe_id` owned by `owner_id`
///
/// Fails with `NoFieldsToUpdate` before any statement text exists when
/// no field qualifies; never emits a no-op UPDATE.
pub fn build_recipe_update(
    recipe_id: Uuid,
    owner_id: Uuid,
    edit: &RecipeEdit,
) -> Result<UpdateStatement, ApiError> {
    // Fixed iteration order matching EDITABLE_COLUMNS.
    let fields: [(&str, Option<SqlValue>); 5] = [
        ("name_recipe", present(&edit.name_recipe)),
        ("description", present(&edit.description)),
        ("meal_type_id", edit.meal_type_id.map(SqlValue::Int)),
        ("steps", present(&edit.steps)),
        ("img_url", present(&edit.img_url)),
    ];

    let mut set_clauses: Vec<String> = Vec::new();
    let mut params: Vec<SqlValue> = Vec::new();

    for (column, value) in fields {
        if let Some(value) = value {
            params.push(value);
            set_clauses.push(format!("{} = ${}", column, params.len()));
        }
    }

    if set_clauses.is_empty() {
        return Err(ApiError::NoFieldsToUpdate);
    }

    params.push(SqlValue::Uuid(recipe_id));
    params.push(SqlValue::Uuid(owner_id));

    let sql = format!(
        "UPDATE recipes SET {} WHERE id = ${} AND user_id = ${}",
        set_clauses.join(", "),
        params.len() - 1,
        params.len()
    );

    Ok(UpdateStatement { sql, params })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_fields_short_circuits() {
        let err = build_recipe_update(Uuid::new_v4(), Uuid::new_v4(), &RecipeEdit::default());
        assert_matches!(err, Err(ApiError::NoFieldsToUpdate));
    }

    #[test]
    fn test_empty_strings_count_as_absent() {
        let edit = RecipeEdit {
            name_recipe: Some(String::new()),
            description: Some(String::new()),
            ..Default::default()
        };
        let err = build_recipe_update(Uuid::new_v4(), Uuid::new_v4(), &edit);
        assert_matches!(err, Err(ApiError::NoFieldsToUpdate));
    }

    #[test]
    fn test_single_field_touches_only_that_column() {
        let recipe_id = Uuid::new_v4();
        let owner_id = Uuid::new_v4();
        let edit = RecipeEdit {
            name_recipe: Some("Pizza".to_string()),
            ..Default::default()
        };

        let statement = build_recipe_update(recipe_id, owner_id, &edit).unwrap();

        assert_eq!(
            statement.sql,
            "UPDATE recipes SET name_recipe = $1 WHERE id = $2 AND user_id = $3"
        );
        assert_eq!(
            statement.params,
            vec![
                SqlValue::Text("Pizza".to_string()),
                SqlValue::Uuid(recipe_id),
                SqlValue::Uuid(owner_id),
            ]
        );
    }

    #[test]
    fn test_emission_order_is_fixed_not_caller_order() {
        // steps "before" name in the caller's mind; the statement still
        // lists name_recipe first.
        let edit = RecipeEdit {
            steps: Some("knead, rest, bake".to_string()),
            name_recipe: Some("Bread".to_string()),
            ..Default::default()
        };

        let statement = build_recipe_update(Uuid::new_v4(), Uuid::new_v4(), &edit).unwrap();

        assert_eq!(
            statement.sql,
            "UPDATE recipes SET name_recipe = $1, steps = $2 WHERE id = $3 AND user_id = $4"
        );
    }

    #[test]
    fn test_emission_order_matches_allow_list() {
        let edit = RecipeEdit {
            name_recipe: Some("a".to_string()),
            description: Some("b".to_string()),
            meal_type_id: Some(1),
            steps: Some("c".to_string()),
            img_url: Some("d".to_string()),
        };
        let statement = build_recipe_update(Uuid::new_v4(), Uuid::new_v4(), &edit).unwrap();

        let positions: Vec<usize> = EDITABLE_COLUMNS
            .iter()
            .map(|col| statement.sql.find(col).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_all_fields_present() {
        let recipe_id = Uuid::new_v4();
        let owner_id = Uuid::new_v4();
        let edit = RecipeEdit {
            name_recipe: Some("Pupusas".to_string()),
            description: Some("Comida de El Salvador".to_string()),
            meal_type_id: Some(2),
            steps: Some("griddle them".to_string()),
            img_url: Some("https://img.example/p.jpg".to_string()),
        };

        let statement = build_recipe_update(recipe_id, owner_id, &edit).unwrap();

        assert_eq!(
            statement.sql,
            "UPDATE recipes SET name_recipe = $1, description = $2, meal_type_id = $3, \
             steps = $4, img_url = $5 WHERE id = $6 AND user_id = $7"
        );
        assert_eq!(statement.params.len(), 7);
        assert_eq!(statement.params[5], SqlValue::Uuid(recipe_id));
        assert_eq!(statement.params[6], SqlValue::Uuid(owner_id));
    }

    #[test]
    fn test_ids_never_enter_the_set_clause() {
        let edit = RecipeEdit {
            description: Some("new text".to_string()),
            ..Default::default()
        };
        let statement = build_recipe_update(Uuid::new_v4(), Uuid::new_v4(), &edit).unwrap();

        let set_clause = statement
            .sql
            .split(" WHERE ")
            .next()
            .unwrap()
            .to_string();
        assert!(!set_clause.contains("user_id"));
        assert!(!set_clause.contains("id ="));
    }

    #[test]
    fn test_values_are_bound_not_inlined() {
        let edit = RecipeEdit {
            name_recipe: Some("'; DROP TABLE recipes; --".to_string()),
            ..Default::default()
        };
        let statement = build_recipe_update(Uuid::new_v4(), Uuid::new_v4(), &edit).unwrap();

        assert!(!statement.sql.contains("DROP TABLE"));
        assert_eq!(
            statement.params[0],
            SqlValue::Text("'; DROP TABLE recipes; --".to_string())
        );
    }
}
