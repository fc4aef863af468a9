use serde::{Deserialize, Serialize};

/// Anything the remote API identifies by its `_id`.
pub trait Identified {
    fn id(&self) -> &str;
}

/// A link to another record.
///
/// Depending on the endpoint the remote API either populates the referenced
/// document or only sends its id, so both shapes are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ref<T> {
    Populated(T),
    Id(String),
}

impl<T: Identified> Ref<T> {
    pub fn id(&self) -> &str {
        match self {
            Ref::Populated(inner) => inner.id(),
            Ref::Id(id) => id,
        }
    }
}

impl<T> Ref<T> {
    pub fn populated(&self) -> Option<&T> {
        match self {
            Ref::Populated(inner) => Some(inner),
            Ref::Id(_) => None,
        }
    }
}
