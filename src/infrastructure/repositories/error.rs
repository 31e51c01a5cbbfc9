use crate::domain::errors::DomainError;

const CNT_LISTING_SCOPE_SLUG: &str = "listings_scope_slug_key";
const CNT_LISTING_SLUG_FORMAT: &str = "listings_slug_format_chk";

/// Map a `sqlx` failure onto the domain. `slug` is reported back when the
/// `(scope, slug)` constraint fires.
pub fn map_sqlx(err: sqlx::Error, slug: &str) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_LISTING_SCOPE_SLUG => DomainError::SlugTaken(slug.to_string()),
                    CNT_LISTING_SLUG_FORMAT => {
                        DomainError::Validation(format!("slug `{slug}` is not canonical"))
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => return DomainError::SlugTaken(slug.to_string()),
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("listing not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
