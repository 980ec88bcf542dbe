//! Content items as seen by the access decision.

use serde::{Deserialize, Serialize};

use super::ids::{ActorId, ContentType, ItemId};

/// A content item owned by the host storage layer.
///
/// The decision reads only the content type and the owner. The item ID is
/// carried so per-node settings can be looked up for the same item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    id: ItemId,
    #[serde(rename = "type")]
    content_type: ContentType,
    owner: ActorId,
}

impl ContentItem {
    /// Creates a content item.
    ///
    /// # Examples
    ///
    /// ```
    /// use content_access_core::ContentItem;
    ///
    /// let item = ContentItem::new("42", "article", "u1");
    /// assert_eq!(item.content_type().as_str(), "article");
    /// assert_eq!(item.owner().as_str(), "u1");
    /// ```
    pub fn new(
        id: impl Into<ItemId>,
        content_type: impl Into<ContentType>,
        owner: impl Into<ActorId>,
    ) -> Self {
        Self {
            id: id.into(),
            content_type: content_type.into(),
            owner: owner.into(),
        }
    }

    /// Item identifier.
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Content type tag.
    pub fn content_type(&self) -> &ContentType {
        &self.content_type
    }

    /// Identity of the owning actor.
    pub fn owner(&self) -> &ActorId {
        &self.owner
    }

    /// Returns `true` if `actor` owns this item.
    pub fn is_owned_by(&self, actor: &ActorId) -> bool {
        &self.owner == actor
    }
}
