use serde::{Deserialize, Serialize};

use wander_shared::Masked;

/// A registered user as persisted in the account list. Accounts are
/// append-only; there is no edit or delete flow.
///
/// The password is stored in plaintext (demo-grade credentials) and wrapped
/// so Debug output never carries it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: Masked<String>,
}

impl UserAccount {
    /// The public projection stored as the active session.
    pub fn session(&self) -> Session {
        Session {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// The signed-in identity. The password is deliberately absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Signup form payload.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

impl From<NewAccount> for UserAccount {
    fn from(form: NewAccount) -> Self {
        UserAccount {
            name: form.name,
            email: form.email,
            phone: form.phone,
            password: Masked(form.password),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_projection_omits_password() {
        let account = UserAccount {
            name: "Asha Rao".to_string(),
            email: "asha@example.in".to_string(),
            phone: "9876543210".to_string(),
            password: Masked("secret".to_string()),
        };
        let json = serde_json::to_string(&account.session()).unwrap();
        assert!(!json.contains("secret"));
        assert!(!json.contains("password"));
    }

    #[test]
    fn test_account_debug_masks_password() {
        let account = UserAccount {
            name: "Asha Rao".to_string(),
            email: "asha@example.in".to_string(),
            phone: "9876543210".to_string(),
            password: Masked("secret".to_string()),
        };
        assert!(!format!("{:?}", account).contains("secret"));
    }
}
