use crate::domain::errors::DomainError;

const IDX_SLUG_KEY: &str = "slugs_name_scope_type_sequence_key";
const IDX_AUTHOR_HANDLE: &str = "authors_handle_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if db_err.is_unique_violation() {
                // SQLite reports the columns rather than the index name.
                let message = db_err.message();
                if db_err.constraint() == Some(IDX_SLUG_KEY) || message.contains("slugs.name") {
                    return DomainError::Conflict("slug sequence already taken".into());
                }
                if db_err.constraint() == Some(IDX_AUTHOR_HANDLE)
                    || message.contains("authors.handle")
                {
                    return DomainError::Conflict("author handle already taken".into());
                }
                return DomainError::Conflict("unique constraint violated".into());
            }
            if db_err.is_check_violation() {
                return DomainError::Validation("check constraint violated".into());
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
