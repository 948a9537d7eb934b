use crate::models::UserInfo;

/// Who is signed in, and the bearer token that proves it.
///
/// Both fields are set together on login/registration or after a successful
/// verify, and cleared together on logout or a failed verify.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub user: Option<UserInfo>,
    pub token: Option<String>,
}

impl Session {
    pub fn signed_in(user: UserInfo, token: String) -> Self {
        Self {
            user: Some(user),
            token: Some(token),
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    /// Token to send as `Authorization: Bearer <token>`.
    pub fn bearer(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.username.as_str())
    }
}
