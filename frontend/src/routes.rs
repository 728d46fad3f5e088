use dioxus::prelude::*;
use engine::ListingLocation;

use crate::components::navbar::Navbar;
use crate::data_definitions::url_param::UrlParam;
use crate::pages::agent_page::AgentPage;
use crate::pages::community_page::CommunityPage;
use crate::pages::home_page::HomePage;
use crate::pages::my_page::{MyFavoritesPage, MyPropertiesPage};
use crate::pages::property_page::PropertyPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/property?:input&:mode")]
    PropertyPage { input: UrlParam, mode: UrlParam },


    #[route("/agent?:input")]
    AgentPage { input: UrlParam },


    #[route("/community?:input&:mode")]
    CommunityPage { input: UrlParam, mode: UrlParam },


    #[route("/mypage/properties?:input&:mode")]
    MyPropertiesPage { input: UrlParam, mode: UrlParam },

    #[route("/mypage/favorites?:input")]
    MyFavoritesPage { input: UrlParam },

}

impl Route {
    pub fn properties(location: ListingLocation) -> Self {
        Self::PropertyPage { input: UrlParam::from(location.input), mode: UrlParam::from(location.mode) }
    }

    pub fn agents(location: ListingLocation) -> Self {
        Self::AgentPage { input: UrlParam::from(location.input) }
    }

    pub fn community(location: ListingLocation) -> Self {
        Self::CommunityPage { input: UrlParam::from(location.input), mode: UrlParam::from(location.mode) }
    }

    pub fn my_properties(location: ListingLocation) -> Self {
        Self::MyPropertiesPage { input: UrlParam::from(location.input), mode: UrlParam::from(location.mode) }
    }

    pub fn favorites(location: ListingLocation) -> Self {
        Self::MyFavoritesPage { input: UrlParam::from(location.input) }
    }
}
