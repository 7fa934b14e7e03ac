//! Page slugs and the navigation bar shared by every report page

use crate::models::Area;
use crate::units::UnitSystem;
use serde::{Deserialize, Serialize};

/// Page slug for a display name: lowercased, spaces to underscores, and
/// parentheses and slashes dropped
#[must_use]
pub fn sanitize_name(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('_'),
            '(' | ')' | '\\' | '/' => None,
            other => Some(other),
        })
        .collect()
}

/// One entry of the navigation bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub name: String,
    pub href: String,
    pub is_active: bool,
}

/// Slug of the about page
pub const ABOUT_SLUG: &str = "about";
/// Slug of the news page
pub const NEWS_SLUG: &str = "news";
/// Slug of the landing page
pub const INDEX_SLUG: &str = "index";

/// Builds navigation bars for one unit system under a base href
#[derive(Debug, Clone)]
pub struct NavBar {
    links: Vec<NavLink>,
}

impl NavBar {
    /// One link per area in order, then About and News; nothing active
    #[must_use]
    pub fn new(areas: &[Area], unit_system: UnitSystem, base_path: &str) -> Self {
        let base = base_path.trim_end_matches('/');
        let href = |slug: &str| format!("{base}/{unit_system}/{slug}.html");

        let mut links: Vec<NavLink> = areas
            .iter()
            .map(|area| NavLink {
                name: area.name.clone(),
                href: href(&sanitize_name(&area.name)),
                is_active: false,
            })
            .collect();
        links.push(NavLink {
            name: "About".to_string(),
            href: href(ABOUT_SLUG),
            is_active: false,
        });
        links.push(NavLink {
            name: "News".to_string(),
            href: href(NEWS_SLUG),
            is_active: false,
        });

        Self { links }
    }

    /// Copy of the links with only `index` flagged active
    #[must_use]
    pub fn with_active(&self, index: usize) -> Vec<NavLink> {
        let mut links = self.links.clone();
        if let Some(link) = links.get_mut(index) {
            link.is_active = true;
        }
        links
    }

    /// Links for the about page, which sits right after the areas
    #[must_use]
    pub fn for_about(&self) -> Vec<NavLink> {
        self.with_active(self.area_count())
    }

    /// Links for the news page, which follows the about page
    #[must_use]
    pub fn for_news(&self) -> Vec<NavLink> {
        self.with_active(self.area_count() + 1)
    }

    fn area_count(&self) -> usize {
        self.links.len() - 2
    }

    #[must_use]
    pub fn links(&self) -> &[NavLink] {
        &self.links
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn areas() -> Vec<Area> {
        vec![
            Area::new("Ireland", chrono_tz::Europe::Dublin, Vec::new()),
            Area::new("Northern Ireland", chrono_tz::Europe::Belfast, Vec::new()),
        ]
    }

    #[rstest]
    #[case("Ireland", "ireland")]
    #[case("Northern Ireland", "northern_ireland")]
    #[case("Fair Head (North)", "fair_head_north")]
    #[case("Glendalough/Wicklow", "glendaloughwicklow")]
    #[case(r"Back\Slash", "backslash")]
    fn test_sanitize_name(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(sanitize_name(name), expected);
    }

    #[test]
    fn test_links_follow_area_order_then_about_and_news() {
        let nav = NavBar::new(&areas(), UnitSystem::Metric, "/pages");
        let hrefs: Vec<&str> = nav.links().iter().map(|l| l.href.as_str()).collect();

        assert_eq!(
            hrefs,
            [
                "/pages/metric/ireland.html",
                "/pages/metric/northern_ireland.html",
                "/pages/metric/about.html",
                "/pages/metric/news.html",
            ]
        );
        assert!(nav.links().iter().all(|l| !l.is_active));
    }

    #[test]
    fn test_trailing_slash_in_base_path() {
        let nav = NavBar::new(&areas(), UnitSystem::Imperial, "/site/");
        assert_eq!(nav.links()[0].href, "/site/imperial/ireland.html");
    }

    #[test]
    fn test_exactly_one_active_link() {
        let nav = NavBar::new(&areas(), UnitSystem::Metric, "/pages");

        let area_links = nav.with_active(1);
        assert_eq!(area_links.iter().filter(|l| l.is_active).count(), 1);
        assert!(area_links[1].is_active);

        let about = nav.for_about();
        assert!(about[2].is_active);
        assert_eq!(about[2].name, "About");
        assert_eq!(about.iter().filter(|l| l.is_active).count(), 1);

        let news = nav.for_news();
        assert!(news[3].is_active);
        assert_eq!(news[3].name, "News");
    }

    #[test]
    fn test_no_areas_still_has_about_and_news() {
        let nav = NavBar::new(&[], UnitSystem::Metric, "/pages");
        assert_eq!(nav.links().len(), 2);
        assert!(nav.for_about()[0].is_active);
        assert!(nav.for_news()[1].is_active);
    }
}
