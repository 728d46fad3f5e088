//! Result cards. Like/follow flags are rendered exactly as the last fetch
//! returned them.

use common::listing_items::{ArticleItem, Likeable, MemberItem, PropertyItem};
use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon,
    icons::md_action_icons::{MdFavorite, MdFavoriteBorder, MdVisibility},
};

const CARD_STYLE: &str = "
    display: flex;
    flex-direction: column;
    gap: 6px;
    padding: 12px;
    border-radius: 10px;
    background: white;
    box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.1);
";

#[component]
pub fn LikeButton(liked: bool, count: u64, onclick: Callback<()>) -> Element {
    rsx! {
        button {
            title: if liked { "Unlike" } else { "Like" },
            style: "display: flex; align-items: center; gap: 4px; background: none; border: none; cursor: pointer;",
            onclick: move |e: MouseEvent| {
                e.stop_propagation();
                onclick.call(());
            },
            if liked {
                Icon { icon: MdFavorite, style: "width: 22px; height: 22px; color: rgb(220, 38, 38);" }
            } else {
                Icon { icon: MdFavoriteBorder, style: "width: 22px; height: 22px; color: black;" }
            }
            "{count}"
        }
    }
}

#[component]
pub fn PropertyCard(item: PropertyItem, on_like: Callback<String>) -> Element {
    let id = item.entity_id().to_string();
    let price = if item.property_rent {
        format!("${} / month", item.property_price)
    } else {
        format!("${}", item.property_price)
    };
    rsx! {
        div {
            style: CARD_STYLE,
            if let Some(image) = item.property_images.first() {
                img { src: "{image}", style: "width: 100%; height: 180px; object-fit: cover; border-radius: 6px;" }
            }
            h3 { style: "margin: 0; font-size: 18px;", "{item.property_title}" }
            div { style: "color: rgba(0,0,0,0.6);", "{item.property_brand} · {item.property_type} · {item.property_year} · {item.property_location}" }
            div { style: "font-size: 20px; font-weight: 500;", "{price}" }
            if item.property_barter {
                span { style: "font-size: 12px; color: rgb(28, 100, 45);", "Barter possible" }
            }
            div {
                style: "display: flex; flex-direction: row; gap: 12px; align-items: center;",
                span {
                    style: "display: flex; align-items: center; gap: 4px;",
                    Icon { icon: MdVisibility, style: "width: 20px; height: 20px;" }
                    "{item.property_views}"
                }
                LikeButton {
                    liked: item.is_liked(),
                    count: item.like_count(),
                    onclick: move |_| on_like.call(id.clone()),
                }
            }
        }
    }
}

#[component]
pub fn AgentCard(item: MemberItem, on_like: Callback<String>, on_follow: Callback<(String, bool)>) -> Element {
    let like_id = item.entity_id().to_string();
    let follow_id = like_id.clone();
    let followed = item.is_followed();
    let name = item.member_full_name.clone().unwrap_or_else(|| item.member_nick.clone());
    rsx! {
        div {
            style: CARD_STYLE,
            if let Some(image) = item.member_image.as_ref() {
                img { src: "{image}", style: "width: 96px; height: 96px; border-radius: 50%; object-fit: cover;" }
            }
            h3 { style: "margin: 0; font-size: 18px;", "{name}" }
            div { style: "color: rgba(0,0,0,0.6);", "@{item.member_nick}" }
            div { "{item.member_properties} vehicles · {item.member_articles} articles · {item.member_followers} followers" }
            div {
                style: "display: flex; flex-direction: row; gap: 12px; align-items: center;",
                LikeButton {
                    liked: item.is_liked(),
                    count: item.like_count(),
                    onclick: move |_| on_like.call(like_id.clone()),
                }
                button {
                    style: "padding: 4px 12px; border-radius: 1000px; border: 1px solid rgba(0,0,0,0.3); background: white; cursor: pointer;",
                    onclick: move |_| on_follow.call((follow_id.clone(), followed)),
                    if followed { "Unfollow" } else { "Follow" }
                }
            }
        }
    }
}

#[component]
pub fn ArticleCard(item: ArticleItem, on_like: Callback<String>) -> Element {
    let id = item.entity_id().to_string();
    let category = common::facets::ListingMode::label(item.article_category);
    rsx! {
        div {
            style: CARD_STYLE,
            if let Some(image) = item.article_image.as_ref() {
                img { src: "{image}", style: "width: 100%; height: 140px; object-fit: cover; border-radius: 6px;" }
            }
            span { style: "font-size: 12px; color: rgb(75, 87, 112);", "{category}" }
            h3 { style: "margin: 0; font-size: 18px;", "{item.article_title}" }
            if let Some(author) = item.member_nick.as_ref() {
                div { style: "color: rgba(0,0,0,0.6);", "by {author}" }
            }
            div {
                style: "display: flex; flex-direction: row; gap: 12px; align-items: center;",
                span {
                    style: "display: flex; align-items: center; gap: 4px;",
                    Icon { icon: MdVisibility, style: "width: 20px; height: 20px;" }
                    "{item.article_views}"
                }
                LikeButton {
                    liked: item.is_liked(),
                    count: item.like_count(),
                    onclick: move |_| on_like.call(id.clone()),
                }
            }
        }
    }
}
