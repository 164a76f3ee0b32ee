use sqlx::query_builder::Separated;
use sqlx::{Postgres, QueryBuilder};

use business::domain::product::filter::ProductPredicate;

use super::entity::PRODUCT_COLUMNS;

/// Builds the product search statement. Every user-supplied value is a bound
/// parameter; an empty predicate list selects the whole table.
pub fn search_query(predicates: &[ProductPredicate]) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!("SELECT {PRODUCT_COLUMNS} FROM products"));

    if !predicates.is_empty() {
        builder.push(" WHERE ");
        let mut conditions = builder.separated(" AND ");
        for predicate in predicates {
            push_condition(&mut conditions, predicate);
        }
    }

    builder.push(" ORDER BY id");
    builder
}

fn push_condition(
    conditions: &mut Separated<'_, 'static, Postgres, &'static str>,
    predicate: &ProductPredicate,
) {
    match predicate {
        ProductPredicate::NameContains(needle) => {
            conditions.push("name ILIKE ");
            conditions.push_bind_unseparated(like_pattern(needle));
            conditions.push_unseparated(" ESCAPE '\\'");
        }
        ProductPredicate::CategoryIs(id) => {
            conditions.push("category_id = ");
            conditions.push_bind_unseparated(*id);
        }
        ProductPredicate::FarmerIs(id) => {
            conditions.push("farmer_id = ");
            conditions.push_bind_unseparated(*id);
        }
        // float8 -> numeric rounds to 15 digits, so 4.99 compares as 4.99
        ProductPredicate::PriceAtLeast(min) => {
            conditions.push("price >= ");
            conditions.push_bind_unseparated(*min);
            conditions.push_unseparated("::numeric");
        }
        ProductPredicate::PriceAtMost(max) => {
            conditions.push("price <= ");
            conditions.push_bind_unseparated(*max);
            conditions.push_unseparated("::numeric");
        }
        ProductPredicate::InStock => {
            conditions.push("stock > 0");
        }
        ProductPredicate::OutOfStock => {
            conditions.push("stock = 0");
        }
        ProductPredicate::SeasonalContains(needle) => {
            conditions.push("seasonal_availability ILIKE ");
            conditions.push_bind_unseparated(like_pattern(needle));
            conditions.push_unseparated(" ESCAPE '\\'");
        }
    }
}

/// `%needle%` with LIKE metacharacters escaped, so the needle matches literally.
fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_select_everything_without_predicates() {
        let builder = search_query(&[]);

        assert_eq!(
            builder.sql(),
            format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id")
        );
    }

    #[test]
    fn should_join_conditions_with_and() {
        let builder = search_query(&[
            ProductPredicate::CategoryIs(2),
            ProductPredicate::InStock,
            ProductPredicate::PriceAtLeast(5.0),
            ProductPredicate::PriceAtMost(20.0),
            ProductPredicate::NameContains("tom".to_string()),
        ]);

        assert_eq!(
            builder.sql(),
            format!(
                "SELECT {PRODUCT_COLUMNS} FROM products WHERE category_id = $1 AND stock > 0 \
                 AND price >= $2::numeric AND price <= $3::numeric \
                 AND name ILIKE $4 ESCAPE '\\' ORDER BY id"
            )
        );
    }

    #[test]
    fn should_filter_out_of_stock_without_binding() {
        let builder = search_query(&[ProductPredicate::OutOfStock]);

        assert!(builder.sql().ends_with("WHERE stock = 0 ORDER BY id"));
    }

    #[test]
    fn should_never_inline_user_text() {
        let builder = search_query(&[
            ProductPredicate::SeasonalContains("'; DROP TABLE products; --".to_string()),
            ProductPredicate::FarmerIs(9),
        ]);

        assert!(!builder.sql().contains("DROP TABLE"));
        assert!(
            builder
                .sql()
                .contains("seasonal_availability ILIKE $1 ESCAPE '\\' AND farmer_id = $2")
        );
    }

    #[test]
    fn should_escape_like_metacharacters() {
        assert_eq!(like_pattern("50%_off\\"), "%50\\%\\_off\\\\%");
        assert_eq!(like_pattern("Tomat"), "%Tomat%");
    }
}
