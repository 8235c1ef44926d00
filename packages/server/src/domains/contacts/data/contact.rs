use serde::{Deserialize, Serialize};

use crate::domains::contacts::models::SalesContact;

/// Sales contact as returned to clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SalesContactData {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
}

impl From<SalesContact> for SalesContactData {
    fn from(contact: SalesContact) -> Self {
        Self {
            id: contact.id.to_string(),
            first_name: contact.first_name,
            last_name: contact.last_name,
            phone: contact.phone,
            email: contact.email,
        }
    }
}
