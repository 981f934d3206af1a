use crate::domain::a001_banner::Banner;
use crate::domain::a003_category::Category;
use serde::{Deserialize, Serialize};

/// How a banner group is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GroupLayout {
    /// Row placed between two category sections
    Inline,
    /// Carousel after the last category
    Slider,
    /// Centered grid after the last category
    Grid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BannerGroup {
    pub layout: GroupLayout,
    /// Already in visual order for the locale the plan was built for.
    pub banners: Vec<Banner>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RenderEntry {
    Category(Category),
    BannerGroup(BannerGroup),
}

/// Ordered sequence of category sections and banner groups for one page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RenderPlan {
    pub entries: Vec<RenderEntry>,
}

impl RenderPlan {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.entries.iter().filter_map(|entry| match entry {
            RenderEntry::Category(category) => Some(category),
            RenderEntry::BannerGroup(_) => None,
        })
    }

    pub fn banner_groups(&self) -> impl Iterator<Item = &BannerGroup> {
        self.entries.iter().filter_map(|entry| match entry {
            RenderEntry::BannerGroup(group) => Some(group),
            RenderEntry::Category(_) => None,
        })
    }

    pub(crate) fn push_category(&mut self, category: Category) {
        self.entries.push(RenderEntry::Category(category));
    }

    /// Empty groups are never emitted.
    pub(crate) fn push_group(&mut self, layout: GroupLayout, banners: Vec<Banner>) {
        if !banners.is_empty() {
            self.entries
                .push(RenderEntry::BannerGroup(BannerGroup { layout, banners }));
        }
    }
}
