use crate::domain::errors::DomainError;

// SQLite extended result codes.
const SQLITE_CONSTRAINT_UNIQUE: &str = "2067";
const SQLITE_CONSTRAINT_PRIMARYKEY: &str = "1555";
const SQLITE_CONSTRAINT_FOREIGNKEY: &str = "787";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let message = db_err.message().to_string();

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    SQLITE_CONSTRAINT_UNIQUE | SQLITE_CONSTRAINT_PRIMARYKEY => {
                        if message.contains("categories.slug") {
                            return DomainError::Conflict("category slug already exists".into());
                        }
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    SQLITE_CONSTRAINT_FOREIGNKEY => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(message)
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
