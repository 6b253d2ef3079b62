//! Add User use case.
//!
//! SOLID (SRP): Handles user creation only.
//! DDD: Validation happens through the domain value objects; the use case
//! orchestrates validation, entity construction, persistence and response
//! population.

use std::sync::Arc;

use crate::config::{
    DATA_KEY_USER, ERROR_KEY_GENERIC, FIELD_EMAIL, FIELD_NAME, FIELD_PASSWORD, FIELD_SURNAME,
};
use crate::domain::{Email, Name, Password, Surname, User, UserId, UserMapper};
use crate::errors::{ApplicationError, AppResult};
use crate::infra::UserRepository;
use crate::types::{Request, UseCaseResponse};

/// Validates inbound field data, persists a new user and reports the
/// outcome through a [`UseCaseResponse`].
pub struct AddUserUseCase {
    repository: Arc<dyn UserRepository>,
    mapper: Arc<dyn UserMapper>,
}

impl AddUserUseCase {
    /// Create the use case with its injected collaborators.
    pub fn new(repository: Arc<dyn UserRepository>, mapper: Arc<dyn UserMapper>) -> Self {
        Self { repository, mapper }
    }

    /// Run the use case against a request.
    ///
    /// On validation failure no entity is constructed and the repository is
    /// never touched. Otherwise the repository allocates exactly one id and
    /// receives at most one `add` call; a persistence failure is reported
    /// under the "generic" error key, success attaches the mapped record
    /// under the "user" data key.
    pub async fn execute(&self, request: &Request) -> UseCaseResponse {
        let mut response = UseCaseResponse::new();

        if !self.is_valid(request, &mut response) {
            tracing::debug!(errors = response.errors().len(), "user request rejected");
            response.set_as_failed();
            return response;
        }

        let id = match self.repository.next_id().await {
            Ok(id) => id,
            Err(err) => {
                tracing::error!(error = %err, "id allocation failed");
                response.set_as_failed();
                response.add_error(
                    ERROR_KEY_GENERIC,
                    ApplicationError::persistence(err.to_string()),
                );
                return response;
            }
        };

        // Re-parse cannot fail once is_valid has passed; kept as a guard so
        // a bug here can never persist a partial entity.
        let user = match Self::assemble(id, request) {
            Ok(user) => user,
            Err(err) => {
                response.set_as_failed();
                response.add_error(
                    ERROR_KEY_GENERIC,
                    ApplicationError::validation(err.to_string()),
                );
                return response;
            }
        };

        if let Err(err) = self.repository.add(user.clone()).await {
            tracing::error!(error = %err, "persisting user failed");
            response.set_as_failed();
            response.add_error(
                ERROR_KEY_GENERIC,
                ApplicationError::persistence(err.to_string()),
            );
            return response;
        }

        tracing::debug!(user_id = %user.id(), "user persisted");
        let record = self.mapper.to_record(&user);
        response.add_data(DATA_KEY_USER, record.into());
        response.set_as_success();
        response
    }

    /// Check the four request fields independently.
    ///
    /// Every invalid field attaches one validation error under its own key;
    /// no short-circuit, so the caller sees all failures at once. The value
    /// objects built here are discarded. Returns true iff the response
    /// accumulated no errors.
    pub fn is_valid(&self, request: &Request, response: &mut UseCaseResponse) -> bool {
        if let Err(err) = Name::parse(request.get_or_default(FIELD_NAME)) {
            response.add_error(FIELD_NAME, ApplicationError::validation(err.to_string()));
        }

        if let Err(err) = Surname::parse(request.get_or_default(FIELD_SURNAME)) {
            response.add_error(FIELD_SURNAME, ApplicationError::validation(err.to_string()));
        }

        if let Err(err) = Email::parse(request.get_or_default(FIELD_EMAIL)) {
            response.add_error(FIELD_EMAIL, ApplicationError::validation(err.to_string()));
        }

        if let Err(err) = Password::parse(request.get_or_default(FIELD_PASSWORD)) {
            response.add_error(FIELD_PASSWORD, ApplicationError::validation(err.to_string()));
        }

        !response.has_errors()
    }

    fn assemble(id: UserId, request: &Request) -> AppResult<User> {
        Ok(User::new(
            id,
            Name::parse(request.get_or_default(FIELD_NAME))?,
            Surname::parse(request.get_or_default(FIELD_SURNAME))?,
            Email::parse(request.get_or_default(FIELD_EMAIL))?,
            Password::parse(request.get_or_default(FIELD_PASSWORD))?,
        ))
    }
}
