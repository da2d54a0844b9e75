use sea_orm::sea_query::{Expr, Func, SimpleExpr};

/// Case-insensitive substring match: `LOWER(expr) LIKE '%term%'`.
///
/// The term is bound as a parameter. `%`, `_` and `\` in the term are
/// escaped so user input only ever matches literally.
pub fn contains_ignore_case(expr: impl Into<SimpleExpr>, term: &str) -> SimpleExpr {
    Expr::expr(Func::lower(expr.into())).like(contains_pattern(term))
}

/// `%term%` with LIKE metacharacters escaped and the term lowercased.
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
