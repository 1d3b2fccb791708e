use serde::{Deserialize, Serialize};

use super::Contact;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Issue {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    pub reason: String,
    pub script: String,
    #[serde(default)]
    pub inactive: bool,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Category {
    pub name: String,
}
