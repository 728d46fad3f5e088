//! Entities returned by the remote list queries, with the viewer's
//! like/follow flags attached by the server.

use serde::{Deserialize, Serialize};

/// One like/follow relation between the viewer and a listed entity.
/// Present only right after a fetch; stale once a toggle has been sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerFlag {
    pub actor_id: String,
    pub target_id: String,
    pub flag: bool,
}

/// Something a viewer can like (or follow) from a listing.
pub trait Likeable {
    fn entity_id(&self) -> &str;
    fn like_flags(&self) -> &[ViewerFlag];
    fn like_count(&self) -> u64;

    fn is_liked(&self) -> bool {
        is_flagged(self.like_flags())
    }
}

pub fn is_flagged(flags: &[ViewerFlag]) -> bool {
    flags.iter().any(|f| f.flag)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub property_title: String,
    pub property_brand: String,
    pub property_type: String,
    pub property_location: String,
    pub property_price: i64,
    pub property_year: i64,
    #[serde(default)]
    pub property_barter: bool,
    #[serde(default)]
    pub property_rent: bool,
    #[serde(default)]
    pub property_images: Vec<String>,
    #[serde(default)]
    pub property_views: u64,
    #[serde(default)]
    pub property_likes: u64,
    #[serde(default)]
    pub me_liked: Vec<ViewerFlag>,
}

impl Likeable for PropertyItem {
    fn entity_id(&self) -> &str {
        &self.id
    }

    fn like_flags(&self) -> &[ViewerFlag] {
        &self.me_liked
    }

    fn like_count(&self) -> u64 {
        self.property_likes
    }
}

/// Dealer/agent or any other member shown in a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub member_nick: String,
    #[serde(default)]
    pub member_full_name: Option<String>,
    #[serde(default)]
    pub member_image: Option<String>,
    #[serde(default)]
    pub member_properties: u64,
    #[serde(default)]
    pub member_articles: u64,
    #[serde(default)]
    pub member_followers: u64,
    #[serde(default)]
    pub member_likes: u64,
    #[serde(default)]
    pub me_liked: Vec<ViewerFlag>,
    #[serde(default)]
    pub me_followed: Vec<ViewerFlag>,
}

impl MemberItem {
    pub fn is_followed(&self) -> bool {
        is_flagged(&self.me_followed)
    }
}

impl Likeable for MemberItem {
    fn entity_id(&self) -> &str {
        &self.id
    }

    fn like_flags(&self) -> &[ViewerFlag] {
        &self.me_liked
    }

    fn like_count(&self) -> u64 {
        self.member_likes
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub article_category: crate::facets::ArticleCategory,
    pub article_title: String,
    #[serde(default)]
    pub article_image: Option<String>,
    #[serde(default)]
    pub article_views: u64,
    #[serde(default)]
    pub article_likes: u64,
    #[serde(default)]
    pub member_nick: Option<String>,
    #[serde(default)]
    pub me_liked: Vec<ViewerFlag>,
}

impl Likeable for ArticleItem {
    fn entity_id(&self) -> &str {
        &self.id
    }

    fn like_flags(&self) -> &[ViewerFlag] {
        &self.me_liked
    }

    fn like_count(&self) -> u64 {
        self.article_likes
    }
}
