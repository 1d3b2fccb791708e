use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub phone: String,
    #[serde(rename = "photoURL", default)]
    pub photo_url: Option<String>,
    /// Office held, e.g. "US House" or "US Senate".
    pub area: String,
    #[serde(default)]
    pub party: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}
