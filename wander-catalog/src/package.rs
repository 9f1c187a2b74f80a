use serde::{Deserialize, Serialize};
use std::fmt;

use wander_core::view::{CardModel, DetailModel, DetailSection};
use wander_shared::format_inr;

/// Package categories in the catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PackageCategory {
    Beach,
    Mountain,
    Cultural,
    Nature,
    Adventure,
}

impl fmt::Display for PackageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PackageCategory::Beach => "beach",
            PackageCategory::Mountain => "mountain",
            PackageCategory::Cultural => "cultural",
            PackageCategory::Nature => "nature",
            PackageCategory::Adventure => "adventure",
        };
        write!(f, "{}", label)
    }
}

/// How many people a package accommodates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupCapacity {
    pub min: u32,
    pub max: u32,
}

impl fmt::Display for GroupCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} people", self.min, self.max)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub author: String,
    /// 1-5 stars.
    pub rating: u8,
    pub comment: String,
}

/// Read-only catalog entity; never created or mutated at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripPackage {
    pub id: u32,
    pub name: String,
    pub category: PackageCategory,
    /// Per-person price in whole rupees.
    pub price: u32,
    /// 0-5, halves allowed.
    pub rating: f32,
    pub description: String,
    pub duration: String,
    pub group: GroupCapacity,
    pub inclusions: Vec<String>,
    pub exclusions: Vec<String>,
    pub reviews: Vec<Review>,
}

fn stars(rating: f32) -> String {
    "⭐".repeat(rating.floor() as usize)
}

impl From<&TripPackage> for CardModel {
    fn from(package: &TripPackage) -> Self {
        CardModel {
            key: package.id.to_string(),
            title: package.name.clone(),
            lines: vec![
                package.category.to_string(),
                package.description.clone(),
                format_inr(package.price),
                format!("{} ({}/5)", stars(package.rating), package.rating),
            ],
        }
    }
}

impl From<&TripPackage> for DetailModel {
    fn from(package: &TripPackage) -> Self {
        let trip_details = DetailSection {
            heading: "Trip Details".to_string(),
            items: vec![
                format!("Duration: {}", package.duration),
                format!("Group Size: {}", package.group),
                format!("Price: {} per person", format_inr(package.price)),
                format!("Rating: {} {}/5", stars(package.rating), package.rating),
            ],
        };
        let inclusions = DetailSection {
            heading: "Inclusions".to_string(),
            items: package.inclusions.clone(),
        };
        let exclusions = DetailSection {
            heading: "Exclusions".to_string(),
            items: package.exclusions.clone(),
        };
        let reviews = DetailSection {
            heading: "Reviews".to_string(),
            items: package
                .reviews
                .iter()
                .map(|review| {
                    format!(
                        "{} - {}: {}",
                        review.author,
                        "⭐".repeat(review.rating as usize),
                        review.comment
                    )
                })
                .collect(),
        };
        DetailModel {
            title: package.name.clone(),
            sections: vec![trip_details, inclusions, exclusions, reviews],
        }
    }
}
