use serde::{Deserialize, Serialize};

/// The part of the identity token this service reads. Expiry is checked by
/// `jsonwebtoken` itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user ID
}
