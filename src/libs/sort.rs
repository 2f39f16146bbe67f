use crate::state::gallery::CanvasCardData;
use serde::{ Deserialize, Serialize };
use std::cmp::Ordering;
use strum::{ Display, EnumIter, EnumString, IntoEnumIterator };

/// Field the gallery is ordered by
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display
)]
#[serde(rename_all = "camelCase")]
#[strum(ascii_case_insensitive)]
pub enum SortOption {
    #[default]
    #[strum(to_string = "name")]
    Name,
    #[strum(to_string = "lastModified", serialize = "last-modified")]
    LastModified,
    #[strum(to_string = "lastOpened", serialize = "last-opened")]
    LastOpened,
}

impl SortOption {
    /// Label shown in the "Sort by" menu
    pub fn label(self) -> &'static str {
        match self {
            SortOption::Name => "Name",
            SortOption::LastModified => "Last Modified",
            SortOption::LastOpened => "Last Opened",
        }
    }

    pub fn all() -> Vec<SortOption> {
        SortOption::iter().collect()
    }

    /// Primary order for this field: A to Z for names, most recent first for dates
    pub fn compare(self, a: &CanvasCardData, b: &CanvasCardData) -> Ordering {
        match self {
            SortOption::Name => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            SortOption::LastModified => b.updated_at.cmp(&a.updated_at),
            SortOption::LastOpened => b.last_opened().cmp(&a.last_opened()),
        }
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortDirection {
    #[default]
    Newest,
    Oldest,
}

impl SortDirection {
    /// The chevron button flips between the two directions
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Newest => SortDirection::Oldest,
            SortDirection::Oldest => SortDirection::Newest,
        }
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Newest => ordering,
            SortDirection::Oldest => ordering.reverse(),
        }
    }
}

/// Search text plus sort settings for the gallery grid
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GalleryQuery {
    pub search: String,
    pub sort: SortOption,
    pub direction: SortDirection,
}

impl GalleryQuery {
    pub fn new(search: impl Into<String>, sort: SortOption, direction: SortDirection) -> Self {
        Self { search: search.into(), sort, direction }
    }

    /// Case-insensitive title match; blank search matches everything
    pub fn matches(&self, canvas: &CanvasCardData) -> bool {
        let query = self.search.trim().to_lowercase();
        query.is_empty() || canvas.title.to_lowercase().contains(&query)
    }

    /// Filters and orders `canvases`. Ties fall back to the canvas id.
    pub fn apply<'a>(&self, canvases: &'a [CanvasCardData]) -> Vec<&'a CanvasCardData> {
        let mut visible: Vec<&CanvasCardData> = canvases
            .iter()
            .filter(|canvas| self.matches(canvas))
            .collect();

        visible.sort_by(|a, b| {
            self.direction.apply(self.sort.compare(a, b)).then_with(|| a.id.cmp(&b.id))
        });

        visible
    }
}
