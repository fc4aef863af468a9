use serde::{Deserialize, Serialize};

use super::reference::Identified;

/// A recruiting company as exposed by the remote API (never includes the password).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub image: String,
}

impl Identified for Company {
    fn id(&self) -> &str {
        &self.id
    }
}
