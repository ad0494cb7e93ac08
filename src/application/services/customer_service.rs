//! Unauthenticated customer creation service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::NewCustomer;
use crate::domain::repositories::CustomerRepository;
use crate::error::AppError;

/// Input for creating a customer without credentials.
#[derive(Debug, Clone)]
pub struct CustomerData {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Service for the plain customer creation path.
///
/// Customers created here carry no password hash and cannot log in; signup
/// is the credentialed path (see [`crate::application::services::AuthService`]).
pub struct CustomerService<C: CustomerRepository> {
    customer_repository: Arc<C>,
}

impl<C: CustomerRepository> CustomerService<C> {
    /// Creates a new customer service.
    pub fn new(customer_repository: Arc<C>) -> Self {
        Self {
            customer_repository,
        }
    }

    /// Inserts a login-incapable customer row and returns its generated id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_customer(&self, data: CustomerData) -> Result<i64, AppError> {
        let email = data.email.clone();

        let new_customer = NewCustomer {
            name: data.name,
            email: data.email,
            phone: data.phone,
            address: data.address,
            password_hash: None,
        };

        match self.customer_repository.create(new_customer).await {
            Ok(id) => Ok(id),
            Err(AppError::Conflict { .. }) => Err(AppError::conflict(
                "Email already registered",
                json!({ "email": email }),
            )),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockCustomerRepository;

    fn test_data() -> CustomerData {
        CustomerData {
            name: "Bob".to_string(),
            email: "bob@example.com".to_string(),
            phone: Some("555-0100".to_string()),
            address: None,
        }
    }

    #[tokio::test]
    async fn test_create_customer_without_credentials() {
        let mut mock_repo = MockCustomerRepository::new();

        mock_repo
            .expect_create()
            .withf(|new_customer| {
                new_customer.email == "bob@example.com" && new_customer.password_hash.is_none()
            })
            .times(1)
            .returning(|_| Ok(7));

        let service = CustomerService::new(Arc::new(mock_repo));

        let id = service.create_customer(test_data()).await.unwrap();
        assert_eq!(id, 7);
    }

    #[tokio::test]
    async fn test_create_customer_duplicate_email() {
        let mut mock_repo = MockCustomerRepository::new();

        mock_repo.expect_create().times(1).returning(|_| {
            Err(AppError::conflict(
                "Unique constraint violation",
                serde_json::json!({ "constraint": "customers_email_key" }),
            ))
        });

        let service = CustomerService::new(Arc::new(mock_repo));

        let result = service.create_customer(test_data()).await;

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::Conflict { .. }));
        assert_eq!(err.to_string(), "Email already registered");
    }
}
