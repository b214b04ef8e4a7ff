use serde::Serialize;

/// Single-resource envelope: `{"item": ...}`
#[derive(Debug, Serialize)]
pub struct ItemResponse<T: Serialize> {
    pub item: T,
}

impl<T: Serialize> ItemResponse<T> {
    pub fn new(item: T) -> Self {
        Self { item }
    }
}
