use super::*;
use flix_core::ID;
use flix_core::Unique;
use flix_database::*;
use tokio_postgres::Client;
use tokio_postgres::error::SqlState;

impl From<PgErr> for StoreError {
    fn from(e: PgErr) -> Self {
        match e.code() {
            Some(code) if *code == SqlState::UNIQUE_VIOLATION => Self::Conflict,
            _ => Self::Unavailable(e.to_string()),
        }
    }
}

fn account(row: &tokio_postgres::Row) -> Account {
    Account::new(
        ID::from(row.get::<_, uuid::Uuid>(0)),
        row.get::<_, String>(1),
        row.get::<_, String>(2),
        row.get::<_, Option<String>>(3),
    )
}

#[async_trait::async_trait]
impl Accounts for Client {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<(Account, Hashword)>, StoreError> {
        Ok(self
            .query_opt(
                const_format::concatcp!(
                    "SELECT id, username, email, birthday, hashword FROM ",
                    USERS,
                    " WHERE username = $1"
                ),
                &[&username],
            )
            .await?
            .map(|row| (account(&row), Hashword::from(row.get::<_, String>(4)))))
    }

    async fn find_by_id(&self, id: ID<Account>) -> Result<Option<Account>, StoreError> {
        Ok(self
            .query_opt(
                const_format::concatcp!(
                    "SELECT id, username, email, birthday FROM ",
                    USERS,
                    " WHERE id = $1"
                ),
                &[&id.inner()],
            )
            .await?
            .map(|row| account(&row)))
    }

    async fn create(&self, account: &Account, hashword: &Hashword) -> Result<(), StoreError> {
        self.execute(
            const_format::concatcp!(
                "INSERT INTO ",
                USERS,
                " (id, username, email, birthday, hashword) VALUES ($1, $2, $3, $4, $5)"
            ),
            &[
                &account.id().inner(),
                &account.username(),
                &account.email(),
                &account.birthday(),
                &hashword.as_str(),
            ],
        )
        .await
        .map(|_| ())
        .map_err(StoreError::from)
    }

    async fn update(
        &self,
        account: &Account,
        hashword: Option<&Hashword>,
    ) -> Result<bool, StoreError> {
        self.execute(
            const_format::concatcp!(
                "UPDATE ",
                USERS,
                " SET username = $2, email = $3, birthday = $4,",
                " hashword = COALESCE($5, hashword) WHERE id = $1"
            ),
            &[
                &account.id().inner(),
                &account.username(),
                &account.email(),
                &account.birthday(),
                &hashword.map(Hashword::as_str),
            ],
        )
        .await
        .map(|n| n > 0)
        .map_err(StoreError::from)
    }

    async fn delete(&self, id: ID<Account>) -> Result<bool, StoreError> {
        self.execute(
            const_format::concatcp!("DELETE FROM ", USERS, " WHERE id = $1"),
            &[&id.inner()],
        )
        .await
        .map(|n| n > 0)
        .map_err(StoreError::from)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.execute("SELECT 1", &[])
            .await
            .map(|_| ())
            .map_err(StoreError::from)
    }
}
