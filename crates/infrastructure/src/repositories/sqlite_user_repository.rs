use crate::database::{last_insert_rowid, run_blocking, users, SqlitePool};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use domain::{DomainError, User, UserRepository};

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct UserModel {
    id: i32,
    first_name: String,
    last_name: String,
    email_address: String,
    password: String,
}

#[derive(Insertable)]
#[diesel(table_name = users)]
struct NewUserModel {
    first_name: String,
    last_name: String,
    email_address: String,
    password: String,
}

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User::with_id(
            model.id,
            model.first_name,
            model.last_name,
            model.email_address,
            model.password,
        )
    }
}

impl From<&User> for NewUserModel {
    fn from(user: &User) -> Self {
        NewUserModel {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email_address: user.email_address.clone(),
            password: user.password.clone(),
        }
    }
}

pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DomainError> {
        let result = run_blocking(&self.pool, move |conn| {
            users::table
                .filter(users::id.eq(id))
                .select(UserModel::as_select())
                .first::<UserModel>(conn)
                .optional()
        })
        .await?;

        Ok(result.map(Into::into))
    }

    async fn find_by_email_address(&self, email_address: &str) -> Result<Option<User>, DomainError> {
        let email_address = email_address.to_string();

        let result = run_blocking(&self.pool, move |conn| {
            users::table
                .filter(users::email_address.eq(email_address))
                .select(UserModel::as_select())
                .first::<UserModel>(conn)
                .optional()
        })
        .await?;

        Ok(result.map(Into::into))
    }

    async fn save(&self, user: &User) -> Result<User, DomainError> {
        let new_user = NewUserModel::from(user);
        let email_address = user.email_address.clone();
        let pool = self.pool.clone();

        // SQLite doesn't support RETURNING here, so we insert and then fetch
        let result = tokio::task::spawn_blocking(move || {
            let mut conn = pool
                .get()
                .map_err(|e| DomainError::RepositoryError(e.to_string()))?;

            conn.transaction::<_, diesel::result::Error, _>(|conn| {
                diesel::insert_into(users::table)
                    .values(&new_user)
                    .execute(conn)?;
                let id = last_insert_rowid(conn)?;

                users::table
                    .filter(users::id.eq(id))
                    .select(UserModel::as_select())
                    .first::<UserModel>(conn)
            })
            .map_err(|e| match e {
                DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                    DomainError::EmailAlreadyExists(email_address)
                }
                other => DomainError::RepositoryError(other.to_string()),
            })
        })
        .await
        .map_err(|e| DomainError::RepositoryError(e.to_string()))??;

        Ok(result.into())
    }
}
