//! Customer entity and creation type.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A customer account.
///
/// `password_hash` is `None` for records created through the unauthenticated
/// `POST /customers` path; such customers cannot log in. The hash is never
/// serialized into responses.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Customer {
    /// Returns true if the account carries credentials and can authenticate.
    pub fn can_login(&self) -> bool {
        self.password_hash.is_some()
    }
}

/// Input data for inserting a new customer row.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    /// Pre-hashed password for signup; `None` for the plain creation path.
    pub password_hash: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn customer(password_hash: Option<String>) -> Customer {
        Customer {
            id: 1,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            phone: None,
            address: None,
            password_hash,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_can_login() {
        assert!(!customer(None).can_login());
        assert!(customer(Some("$argon2id$...".to_string())).can_login());
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let json = serde_json::to_value(customer(Some("secret-hash".to_string()))).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "alice@example.com");
    }
}
