use crate::package::{GroupCapacity, PackageCategory, Review, TripPackage};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Package not found: {0}")]
    UnknownPackage(u32),
}

/// The static trip catalog. Reference data only; lookups and filters never
/// touch the store.
pub struct Catalog {
    packages: Vec<TripPackage>,
}

impl Catalog {
    pub fn new(packages: Vec<TripPackage>) -> Self {
        Self { packages }
    }

    /// The WanderWith launch catalog.
    pub fn with_default_packages() -> Self {
        Self::new(default_packages())
    }

    pub fn packages(&self) -> &[TripPackage] {
        &self.packages
    }

    pub fn find(&self, id: u32) -> Result<&TripPackage, CatalogError> {
        self.packages
            .iter()
            .find(|package| package.id == id)
            .ok_or(CatalogError::UnknownPackage(id))
    }

    pub fn by_category(&self, category: PackageCategory) -> Vec<&TripPackage> {
        self.packages
            .iter()
            .filter(|package| package.category == category)
            .collect()
    }

    /// Case-insensitive substring search across name, description and category.
    pub fn search(&self, term: &str) -> Vec<&TripPackage> {
        let term = term.to_lowercase();
        self.packages
            .iter()
            .filter(|package| {
                package.name.to_lowercase().contains(&term)
                    || package.description.to_lowercase().contains(&term)
                    || package.category.to_string().contains(&term)
            })
            .collect()
    }

    /// Cheapest and priciest per-person price, None for an empty catalog.
    pub fn price_bounds(&self) -> Option<(u32, u32)> {
        let min = self.packages.iter().map(|package| package.price).min()?;
        let max = self.packages.iter().map(|package| package.price).max()?;
        Some((min, max))
    }
}

pub fn default_packages() -> Vec<TripPackage> {
    vec![
        TripPackage {
            id: 1,
            name: "Goa Beach Paradise".to_string(),
            category: PackageCategory::Beach,
            price: 15000,
            rating: 4.5,
            description: "Experience the best of Goa's beaches with this 5-day package"
                .to_string(),
            duration: "5 Days / 4 Nights".to_string(),
            group: GroupCapacity { min: 2, max: 15 },
            inclusions: vec![
                "Hotel Accommodation".to_string(),
                "Breakfast & Dinner".to_string(),
                "Airport Transfers".to_string(),
                "Sightseeing Tours".to_string(),
                "Water Sports Activities".to_string(),
            ],
            exclusions: vec![
                "Lunch".to_string(),
                "Personal Expenses".to_string(),
                "Travel Insurance".to_string(),
                "Monument Entry Fees".to_string(),
            ],
            reviews: vec![
                Review {
                    author: "Rahul S.".to_string(),
                    rating: 5,
                    comment: "Amazing experience! The beaches were beautiful.".to_string(),
                },
                Review {
                    author: "Priya M.".to_string(),
                    rating: 4,
                    comment: "Great package, well organized tours.".to_string(),
                },
            ],
        },
        TripPackage {
            id: 2,
            name: "Manali Mountain Retreat".to_string(),
            category: PackageCategory::Mountain,
            price: 18000,
            rating: 4.7,
            description: "Explore the scenic beauty of Manali with adventure activities"
                .to_string(),
            duration: "6 Days / 5 Nights".to_string(),
            group: GroupCapacity { min: 2, max: 12 },
            inclusions: vec![
                "Hotel Stay".to_string(),
                "All Meals".to_string(),
                "Paragliding Session".to_string(),
                "Solang Valley Trip".to_string(),
                "Local Sightseeing".to_string(),
            ],
            exclusions: vec![
                "Additional Activities".to_string(),
                "Shopping".to_string(),
                "Travel Insurance".to_string(),
            ],
            reviews: vec![
                Review {
                    author: "Amit K.".to_string(),
                    rating: 5,
                    comment: "Perfect mountain getaway!".to_string(),
                },
                Review {
                    author: "Sneha P.".to_string(),
                    rating: 5,
                    comment: "Loved the paragliding experience.".to_string(),
                },
            ],
        },
        TripPackage {
            id: 3,
            name: "Jaipur Cultural Tour".to_string(),
            category: PackageCategory::Cultural,
            price: 12000,
            rating: 4.3,
            description: "Discover the rich heritage and culture of the Pink City".to_string(),
            duration: "4 Days / 3 Nights".to_string(),
            group: GroupCapacity { min: 2, max: 20 },
            inclusions: vec![
                "Heritage Hotel Stay".to_string(),
                "Breakfast".to_string(),
                "City Palace Tour".to_string(),
                "Amber Fort Visit".to_string(),
                "Local Guide".to_string(),
            ],
            exclusions: vec![
                "Lunch & Dinner".to_string(),
                "Shopping".to_string(),
                "Camel Ride".to_string(),
            ],
            reviews: vec![Review {
                author: "Deepak R.".to_string(),
                rating: 4,
                comment: "Rich cultural experience.".to_string(),
            }],
        },
        TripPackage {
            id: 4,
            name: "Kerala Backwaters".to_string(),
            category: PackageCategory::Nature,
            price: 20000,
            rating: 4.8,
            description: "Relax in the serene backwaters of Kerala".to_string(),
            duration: "5 Days / 4 Nights".to_string(),
            group: GroupCapacity { min: 2, max: 8 },
            inclusions: vec![
                "Houseboat Stay".to_string(),
                "All Meals".to_string(),
                "Ayurvedic Massage".to_string(),
                "Village Tours".to_string(),
                "Kathakali Show".to_string(),
            ],
            exclusions: vec![
                "Personal Expenses".to_string(),
                "Additional Treatments".to_string(),
            ],
            reviews: vec![Review {
                author: "Anjali T.".to_string(),
                rating: 5,
                comment: "Most relaxing vacation ever!".to_string(),
            }],
        },
        TripPackage {
            id: 5,
            name: "Ladakh Adventure".to_string(),
            category: PackageCategory::Adventure,
            price: 35000,
            rating: 4.9,
            description: "Epic adventure through the Himalayas".to_string(),
            duration: "7 Days / 6 Nights".to_string(),
            group: GroupCapacity { min: 4, max: 10 },
            inclusions: vec![
                "Hotels & Camps".to_string(),
                "All Meals".to_string(),
                "Bike Rental".to_string(),
                "Permits".to_string(),
                "Experienced Guide".to_string(),
            ],
            exclusions: vec![
                "Fuel Costs".to_string(),
                "Personal Gear".to_string(),
                "Travel Insurance".to_string(),
            ],
            reviews: vec![Review {
                author: "Vikram S.".to_string(),
                rating: 5,
                comment: "Trip of a lifetime!".to_string(),
            }],
        },
        TripPackage {
            id: 6,
            name: "Andaman Islands".to_string(),
            category: PackageCategory::Beach,
            price: 28000,
            rating: 4.6,
            description: "Pristine beaches and crystal clear waters".to_string(),
            duration: "6 Days / 5 Nights".to_string(),
            group: GroupCapacity { min: 2, max: 12 },
            inclusions: vec![
                "Resort Stay".to_string(),
                "Breakfast & Dinner".to_string(),
                "Scuba Diving".to_string(),
                "Island Hopping".to_string(),
                "Ferry Tickets".to_string(),
            ],
            exclusions: vec![
                "Lunch".to_string(),
                "Additional Water Sports".to_string(),
            ],
            reviews: vec![Review {
                author: "Neha G.".to_string(),
                rating: 5,
                comment: "Paradise on earth!".to_string(),
            }],
        },
    ]
}
