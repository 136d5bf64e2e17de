//! User profile endpoints.

use anyhow::Result;
use serde::Serialize;
use solde_core::UserProfile;

use crate::Session;

pub async fn me(session: &Session) -> Result<UserProfile> {
    session.get_json("/api/utilisateurs/me").await
}

/// Update display name and email.
pub async fn update(session: &Session, name: &str, email: &str) -> Result<()> {
    #[derive(Serialize)]
    struct Req<'a> {
        nom: &'a str,
        email: &'a str,
    }
    session
        .put_json("/api/utilisateurs/me", &Req { nom: name, email })
        .await
}
