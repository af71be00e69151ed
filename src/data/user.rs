use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use entity::user::Column;

use crate::model::user::{CreateUserParams, UpdateUserParams, User};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `params`: Validated creation parameters with the password already digested
    ///
    /// # Returns
    /// - `Ok(User)`: The created user, without the password digest
    /// - `Err(DbErr)`: Database error, including unique email violations
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let now = Utc::now();

        let user = entity::user::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            photo: ActiveValue::Set(params.photo),
            password: ActiveValue::Set(params.password_digest),
            role: ActiveValue::Set(params.role),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(user))
    }

    /// Finds a user row by email, password digest included.
    ///
    /// The only read that exposes the stored digest; it exists for the login
    /// path and must not leak past the service layer.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The full user row
    /// - `Ok(None)`: No user with that email
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))`: The user
    /// - `Ok(None)`: No user with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let user = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(user.map(User::from_entity))
    }

    /// Fetches all users ordered by name.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let users = entity::prelude::User::find()
            .order_by_asc(Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect();

        Ok(users)
    }

    /// Applies a partial update to a user.
    ///
    /// # Returns
    /// - `Ok(Some(User))`: The updated user
    /// - `Ok(None)`: No user with that ID
    /// - `Err(DbErr)`: Database error, including unique email violations
    pub async fn update(&self, id: i32, params: UpdateUserParams) -> Result<Option<User>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = user.into_active_model();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(email) = params.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(photo) = params.photo {
            active.photo = ActiveValue::Set(Some(photo));
        }
        if let Some(role) = params.role {
            active.role = ActiveValue::Set(role);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;
        Ok(Some(User::from_entity(updated)))
    }

    /// Deletes a user by ID.
    ///
    /// # Returns
    /// - `Ok(true)`: The user was deleted
    /// - `Ok(false)`: No user with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
