use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use entity::user::Role;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, UpdateUserParams, User},
    util::{email::Mailer, password},
    validation::user::{
        CreateUserInput, LoginParams, SignupParams, UpdateProfileInput, UpdateUserInput,
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account with the default `user` role.
    ///
    /// # Arguments
    /// - `params`: Validated signup input with the password still in clear
    ///
    /// # Returns
    /// - `Ok(User)`: The created user
    /// - `Err(AppError)`: 400 for a duplicate email, otherwise database error
    pub async fn signup(&self, params: SignupParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        repo.create(CreateUserParams {
            name: params.name,
            email: params.email,
            password_digest: password::digest(&params.password),
            photo: params.photo,
            role: Role::User,
        })
        .await
        .map_err(map_unique_email)
    }

    /// Checks login credentials.
    ///
    /// # Returns
    /// - `Ok(User)`: The authenticated user
    /// - `Err(AppError)`: 401 when email or password do not match
    pub async fn login(&self, params: LoginParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_email(&params.email).await? else {
            return Err(AuthError::IncorrectCredentials.into());
        };

        if !password::verify(&params.password, &user.password) {
            return Err(AuthError::IncorrectCredentials.into());
        }

        Ok(User::from_entity(user))
    }

    /// Issues a password reset token for the given email.
    ///
    /// The token is delivered through the mailer, which is stubbed to log;
    /// nothing is persisted yet.
    ///
    /// # Returns
    /// - `Ok(())`: The token was issued
    /// - `Err(AppError)`: 404 when no user has that email
    pub async fn forgot_password(&self, email: &str, mailer: &Mailer) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_email(email).await?.is_none() {
            return Err(AppError::NotFound(
                "There is no user with that email address".to_string(),
            ));
        }

        // TODO: persist the token and its expiry once password resets land
        let token = password::digest(&format!("{}:{}", email, chrono::Utc::now()));
        mailer.send(
            email,
            "Your password reset token (valid for 10 min)",
            &format!("Submit a PATCH request with your new password to /api/v1/users/resetPassword/{token}"),
        );

        Ok(())
    }

    /// Fetches all users, for the admin listing.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let repo = UserRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets one user by ID.
    ///
    /// # Returns
    /// - `Ok(User)`: The user
    /// - `Err(AppError)`: 404 when no user has that ID
    pub async fn get(&self, id: i32) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("No user found with that ID".to_string()))
    }

    /// Creates a user on behalf of an administrator.
    ///
    /// # Returns
    /// - `Ok(User)`: The created user
    /// - `Err(AppError)`: 400 for a duplicate email, otherwise database error
    pub async fn create(&self, input: CreateUserInput) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        repo.create(CreateUserParams {
            name: input.name,
            email: input.email,
            password_digest: password::digest(&input.password),
            photo: input.photo,
            role: input.role,
        })
        .await
        .map_err(map_unique_email)
    }

    /// Applies an administrative partial update to a user.
    ///
    /// # Returns
    /// - `Ok(User)`: The updated user
    /// - `Err(AppError)`: 400 for a duplicate email, 404 when no user has that ID
    pub async fn update(&self, id: i32, input: UpdateUserInput) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        repo.update(
            id,
            UpdateUserParams {
                name: input.name,
                email: input.email,
                photo: input.photo,
                role: input.role,
            },
        )
        .await
        .map_err(map_unique_email)?
        .ok_or_else(|| AppError::NotFound("No user found with that ID".to_string()))
    }

    /// Deletes a user.
    ///
    /// # Returns
    /// - `Ok(())`: The user was deleted
    /// - `Err(AppError)`: 404 when no user has that ID
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);

        if repo.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound("No user found with that ID".to_string()))
        }
    }

    /// Applies a self-service profile update for the authenticated user.
    ///
    /// Password fields were already rejected at validation; role changes are
    /// not possible through this path.
    pub async fn update_profile(&self, id: i32, input: UpdateProfileInput) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        repo.update(
            id,
            UpdateUserParams {
                name: input.name,
                email: input.email,
                photo: input.photo,
                role: None,
            },
        )
        .await
        .map_err(map_unique_email)?
        .ok_or_else(|| AppError::NotFound("No user found with that ID".to_string()))
    }

    /// Deletes the authenticated user's own account.
    pub async fn delete_profile(&self, id: i32) -> Result<(), AppError> {
        self.delete(id).await
    }
}

/// Translates the unique email constraint into a client error.
fn map_unique_email(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::BadRequest("This email is already in use".to_string())
        }
        _ => AppError::DbErr(err),
    }
}
