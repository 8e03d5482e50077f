use super::Account;
use serde::Deserialize;
use serde::Serialize;

/// Login form. Field names from older clients (`Username`, `Password`)
/// are accepted too; missing fields read as empty and simply fail.
#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default, alias = "Username")]
    pub username: String,
    #[serde(default, alias = "Password")]
    pub password: String,
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    #[serde(alias = "Username")]
    pub username: String,
    #[serde(alias = "Password")]
    pub password: String,
    #[serde(alias = "Email")]
    pub email: String,
    #[serde(default, alias = "Birthday")]
    pub birthday: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct UpdateRequest {
    #[serde(default, alias = "Username")]
    pub username: Option<String>,
    #[serde(default, alias = "Password")]
    pub password: Option<String>,
    #[serde(default, alias = "Email")]
    pub email: Option<String>,
    #[serde(default, alias = "Birthday")]
    pub birthday: Option<String>,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub user: Account,
    pub token: String,
}

impl RegisterRequest {
    /// First complaint about the submitted fields, if any.
    pub fn invalid(&self) -> Option<&'static str> {
        username(&self.username)
            .or_else(|| password(&self.password))
            .or_else(|| email(&self.email))
            .or_else(|| self.birthday.as_deref().and_then(birthday))
    }
}

impl UpdateRequest {
    pub fn invalid(&self) -> Option<&'static str> {
        self.username
            .as_deref()
            .and_then(username)
            .or_else(|| self.password.as_deref().and_then(password))
            .or_else(|| self.email.as_deref().and_then(email))
            .or_else(|| self.birthday.as_deref().and_then(birthday))
    }
}

fn username(s: &str) -> Option<&'static str> {
    match s.len() {
        3..=32 if s.chars().all(|c| c.is_ascii_alphanumeric()) => None,
        3..=32 => Some("username may only contain letters and digits"),
        _ => Some("username must be 3-32 characters"),
    }
}

fn password(s: &str) -> Option<&'static str> {
    (s.len() < 8).then_some("password must be at least 8 characters")
}

/// A non-empty local part and a dotted host. Bare hosts like `localhost`
/// are refused.
fn email(s: &str) -> Option<&'static str> {
    match s.split_once('@') {
        Some((user, host)) if !user.is_empty() && host.contains('.') => None,
        _ => Some("email is not valid"),
    }
}

/// `YYYY-MM-DD`, checked for shape and plausible ranges only.
fn birthday(s: &str) -> Option<&'static str> {
    let parts = s
        .split('-')
        .map(|p| p.parse::<u16>().ok())
        .collect::<Option<Vec<_>>>();
    match parts.as_deref() {
        Some([y, m, d])
            if s.len() == 10
                && *y >= 1900
                && (1..=12).contains(m)
                && (1..=31).contains(d) =>
        {
            None
        }
        _ => Some("birthday must be YYYY-MM-DD"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(username: &str, password: &str, email: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.into(),
            password: password.into(),
            email: email.into(),
            birthday: None,
        }
    }

    #[test]
    fn accepts_legacy_field_names() {
        let req: LoginRequest =
            serde_json::from_str(r#"{"Username":"kim","Password":"secret123"}"#).unwrap();
        assert_eq!(req.username, "kim");
        assert_eq!(req.password, "secret123");
        let req: LoginRequest = serde_json::from_str(r#"{}"#).unwrap();
        assert!(req.username.is_empty());
    }

    #[test]
    fn register_validation() {
        assert_eq!(register("kim", "secret123", "kim@example.com").invalid(), None);
        assert!(register("ki", "secret123", "kim@example.com").invalid().is_some());
        assert!(register("kim!", "secret123", "kim@example.com").invalid().is_some());
        assert!(register("kim", "short", "kim@example.com").invalid().is_some());
        assert!(register("kim", "secret123", "kim.example.com").invalid().is_some());
        assert!(register("kim", "secret123", "@example.com").invalid().is_some());
        assert!(register("kim", "secret123", "kim@localhost").invalid().is_some());
        assert_eq!(register("kim", "secret123", "kim@mail.example.com").invalid(), None);
    }

    #[test]
    fn birthday_validation() {
        assert_eq!(birthday("1990-04-23"), None);
        assert!(birthday("1990-13-01").is_some());
        assert!(birthday("90-04-23").is_some());
        assert!(birthday("yesterday").is_some());
    }

    #[test]
    fn empty_update_is_valid() {
        assert_eq!(UpdateRequest::default().invalid(), None);
        let bad = UpdateRequest {
            password: Some("short".into()),
            ..UpdateRequest::default()
        };
        assert!(bad.invalid().is_some());
    }
}
