use flix_core::ID;
use flix_core::Unique;

/// Registered user. The password credential lives beside the account in
/// the store as a [`Hashword`] and never travels with it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Account {
    id: ID<Self>,
    username: String,
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<String>,
}

impl Account {
    pub fn new(id: ID<Self>, username: String, email: String, birthday: Option<String>) -> Self {
        Self {
            id,
            username,
            email,
            birthday,
        }
    }
    pub fn username(&self) -> &str {
        &self.username
    }
    pub fn email(&self) -> &str {
        &self.email
    }
    pub fn birthday(&self) -> Option<&str> {
        self.birthday.as_deref()
    }
    /// Same identity with the given profile fields replaced.
    pub fn amend(
        &self,
        username: Option<String>,
        email: Option<String>,
        birthday: Option<String>,
    ) -> Self {
        Self {
            id: self.id,
            username: username.unwrap_or_else(|| self.username.clone()),
            email: email.unwrap_or_else(|| self.email.clone()),
            birthday: birthday.or_else(|| self.birthday.clone()),
        }
    }
}

impl Unique for Account {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

/// Argon2 PHC string for an account's password. Opaque outside of
/// [`crate::password`]; never serialized.
#[derive(Clone, PartialEq, Eq)]
pub struct Hashword(String);

impl Hashword {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Hashword {
    fn from(phc: String) -> Self {
        Self(phc)
    }
}

impl std::fmt::Debug for Hashword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Hashword(..)")
    }
}

#[cfg(feature = "database")]
mod schema {
    use super::*;
    use flix_database::*;

    /// Schema implementation for Account (users table).
    /// Note: hashword is a database-only column, not part of the Account type.
    impl Schema for Account {
        fn name() -> &'static str {
            USERS
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                USERS,
                " (
                    id          UUID PRIMARY KEY,
                    username    VARCHAR(32) UNIQUE NOT NULL,
                    email       VARCHAR(255) NOT NULL,
                    birthday    TEXT,
                    hashword    TEXT NOT NULL
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_users_username ON ",
                USERS,
                " (username);"
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amend_keeps_identity() {
        let kim = Account::new(ID::default(), "kim".into(), "kim@example.com".into(), None);
        let amended = kim.amend(None, Some("kim@flix.io".into()), Some("1990-01-01".into()));
        assert_eq!(amended.id(), kim.id());
        assert_eq!(amended.username(), "kim");
        assert_eq!(amended.email(), "kim@flix.io");
        assert_eq!(amended.birthday(), Some("1990-01-01"));
    }

    #[test]
    fn serialized_account_has_no_credential() {
        let kim = Account::new(ID::default(), "kim".into(), "kim@example.com".into(), None);
        let json = serde_json::to_value(&kim).unwrap();
        assert_eq!(json["username"], "kim");
        assert!(json.get("hashword").is_none());
        assert!(json.get("password").is_none());
        assert!(json.get("birthday").is_none());
    }

    #[test]
    fn hashword_debug_is_redacted() {
        let hash = Hashword::from("$argon2id$v=19$secret".to_string());
        assert_eq!(format!("{:?}", hash), "Hashword(..)");
    }
}
