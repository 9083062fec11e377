//! Grouping of report screenshots into gallery sections.

use serde::Serialize;

use crate::model::{ScreenshotCategory, ScreenshotData};

/// Screenshot shown as a standalone map above the competition gallery.
pub const COMPETITION_MAP_ID: &str = "konkurranse-aktorer-kart";

/// Gallery sections of a yearly report, in display order.
pub const REPORT_SECTIONS: [ScreenshotCategory; 6] = [
    ScreenshotCategory::Competition,
    ScreenshotCategory::CardSpending,
    ScreenshotCategory::Movement,
    ScreenshotCategory::Visitors,
    ScreenshotCategory::International,
    ScreenshotCategory::Development,
];

/// Partitions screenshots by category. Groups appear in order of first
/// occurrence and keep their members in input order.
pub fn group_by_category(
    shots: &[ScreenshotData],
) -> Vec<(ScreenshotCategory, Vec<&ScreenshotData>)> {
    let mut groups: Vec<(ScreenshotCategory, Vec<&ScreenshotData>)> = Vec::new();

    for shot in shots {
        match groups.iter_mut().find(|(c, _)| *c == shot.category) {
            Some((_, members)) => members.push(shot),
            None => groups.push((shot.category, vec![shot])),
        }
    }

    groups
}

pub fn in_category(shots: &[ScreenshotData], category: ScreenshotCategory) -> Vec<&ScreenshotData> {
    shots.iter().filter(|s| s.category == category).collect()
}

#[derive(Debug, Serialize)]
pub struct Section<'a> {
    pub category: ScreenshotCategory,
    pub title: &'static str,
    /// Only set for the competition section.
    pub map: Option<&'a ScreenshotData>,
    pub gallery: Vec<&'a ScreenshotData>,
}

impl Section<'_> {
    pub fn is_empty(&self) -> bool {
        self.map.is_none() && self.gallery.is_empty()
    }
}

/// Builds the report's gallery sections. The competition section is always
/// present (its map is pulled out of the gallery); the others are skipped
/// when they have no screenshots.
pub fn report_sections(shots: &[ScreenshotData]) -> Vec<Section<'_>> {
    REPORT_SECTIONS
        .iter()
        .filter_map(|&category| {
            let members = in_category(shots, category);

            if category == ScreenshotCategory::Competition {
                let map = members.iter().copied().find(|s| s.id == COMPETITION_MAP_ID);
                let gallery = members
                    .into_iter()
                    .filter(|s| s.id != COMPETITION_MAP_ID)
                    .collect();
                return Some(Section {
                    category,
                    title: category.title(),
                    map,
                    gallery,
                });
            }

            (!members.is_empty()).then(|| Section {
                category,
                title: category.title(),
                map: None,
                gallery: members,
            })
        })
        .collect()
}
