//! Top navigation bar markup.
//!
//! The fragment is shared by every help page: a logo block, the top menu links
//! and, when the page opts in, a search form whose handlers (`search()`,
//! `trackSearchButtonState()`, `resetSearchResults()`) live in the page's own
//! search script.

use std::fmt::Write;

/// Id of the element the navigation bar is injected into.
pub const NAV_CONTAINER_ID: &str = "home";

/// Page-global flag a page sets to get the search form.
pub const SEARCH_FLAG: &str = "includeSearchBarInNavBar";

/// A link of the top menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLink {
    pub label: String,
    pub href: String,
}

impl MenuLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Inputs for [`render_nav`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavOptions {
    pub logo_src: String,
    pub title: String,
    pub links: Vec<MenuLink>,
    pub include_search: bool,
}

impl Default for NavOptions {
    fn default() -> Self {
        Self {
            logo_src: "images/PyTT.png".to_string(),
            title: "TravelBoom".to_string(),
            links: vec![
                MenuLink::new("Home", "travel_recommendation.html#top"),
                MenuLink::new("About us", "about_us.html#top"),
                MenuLink::new("Contact us", "contact_us.html#top"),
            ],
            include_search: false,
        }
    }
}

impl NavOptions {
    pub fn with_search(mut self, include_search: bool) -> Self {
        self.include_search = include_search;
        self
    }
}

const SEARCH_FORM: &str = r#"<form class="SearchForm"><input type="search" id="SearchInput" onkeyup="trackSearchButtonState()"><button id="SubmitSearchButton" type="submit" onclick="search()">Search</button><button id="ResetSearchButton" onclick="resetSearchResults()">Reset</button></form>"#;

/// Builds the navigation bar fragment.
pub fn render_nav(options: &NavOptions) -> String {
    let mut html = format!(
        r#"<div class="Logo"><image class="LogoImage" src="{}"/>{}</div><div class="TopDiv">"#,
        options.logo_src, options.title
    );
    for link in &options.links {
        // Writing to a String cannot fail.
        let _ = write!(
            html,
            r#"<a class="TopMenu" href="{}">{}</a>"#,
            link.href, link.label
        );
    }
    html.push_str(r#"</div><div class="SearchBar">"#);
    if options.include_search {
        html.push_str(SEARCH_FORM);
    }
    html.push_str("</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_nav_without_search() {
        let html = render_nav(&NavOptions::default());
        assert!(html.starts_with(r#"<div class="Logo"><image class="LogoImage" src="images/PyTT.png"/>TravelBoom</div>"#));
        assert_eq!(html.matches(r#"class="TopMenu""#).count(), 3);
        assert!(html.contains(r#"<a class="TopMenu" href="about_us.html#top">About us</a>"#));
        assert!(html.ends_with(r#"<div class="SearchBar"></div>"#));
        assert!(!html.contains("SearchInput"));
    }

    #[test]
    fn test_nav_with_search() {
        let html = render_nav(&NavOptions::default().with_search(true));
        for id in ["SearchInput", "SubmitSearchButton", "ResetSearchButton"] {
            assert!(html.contains(&format!(r#"id="{}""#, id)), "missing {}", id);
        }
        assert!(html.contains(r#"onclick="search()""#));
        assert!(html.contains(r#"onkeyup="trackSearchButtonState()""#));
        assert!(html.contains(r#"onclick="resetSearchResults()""#));
        assert!(html.ends_with("</form></div>"));
    }

    #[test]
    fn test_link_order() {
        let html = render_nav(&NavOptions::default());
        let home = html.find(">Home<").unwrap();
        let about = html.find(">About us<").unwrap();
        let contact = html.find(">Contact us<").unwrap();
        assert!(home < about && about < contact);
    }
}
