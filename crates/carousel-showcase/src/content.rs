#![forbid(unsafe_code)]

//! Mock content records.
//!
//! The engine never looks inside these; it only sees their count. The
//! fields are what the card renderers display: name, rating, locality
//! tags. Data mirrors the site's hard-coded arrays, in their original
//! order and with their original ids.

/// A Lagos area card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Area {
    pub id: u32,
    pub name: &'static str,
    pub slug: &'static str,
    pub description: &'static str,
    pub restaurant_count: u32,
    pub average_rating: f32,
    pub highlights: &'static [&'static str],
}

/// A community member card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommunityMember {
    pub id: u32,
    pub name: &'static str,
    pub username: &'static str,
    pub location: &'static str,
    pub review_count: u32,
    pub last_review_rating: u8,
}

/// A restaurant card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Restaurant {
    pub id: u32,
    pub name: &'static str,
    pub rating: f32,
    pub review_count: u32,
    pub cuisine: &'static str,
    pub area: &'static str,
    pub price_range: &'static str,
    pub is_open: bool,
}

/// The six area cards of the "Explore Lagos by Area" carousel.
#[must_use]
pub const fn lagos_areas() -> &'static [Area] {
    &[
        Area {
            id: 1,
            name: "Victoria Island",
            slug: "victoria-island",
            description: "The business heart of Lagos with upscale dining and international cuisine",
            restaurant_count: 486,
            average_rating: 4.2,
            highlights: &["Fine Dining", "International Cuisine", "Business District"],
        },
        Area {
            id: 2,
            name: "Lekki",
            slug: "lekki",
            description: "Modern residential area known for trendy cafes and diverse dining options",
            restaurant_count: 324,
            average_rating: 4.1,
            highlights: &["Trendy Cafes", "Family Dining", "Modern Atmosphere"],
        },
        Area {
            id: 3,
            name: "Ikoyi",
            slug: "ikoyi",
            description: "Prestigious neighborhood offering sophisticated dining experiences",
            restaurant_count: 198,
            average_rating: 4.4,
            highlights: &["Luxury Dining", "Hotel Restaurants", "Exclusive Venues"],
        },
        Area {
            id: 4,
            name: "Surulere",
            slug: "surulere",
            description: "Vibrant cultural hub with authentic local eateries and street food",
            restaurant_count: 287,
            average_rating: 4.0,
            highlights: &["Authentic Local Food", "Street Food", "Cultural Experience"],
        },
        Area {
            id: 5,
            name: "Yaba",
            slug: "yaba",
            description: "Tech hub and student area with affordable eats and innovative dining",
            restaurant_count: 156,
            average_rating: 3.9,
            highlights: &["Student-Friendly", "Tech Hub", "Budget Eats"],
        },
        Area {
            id: 6,
            name: "Ikeja",
            slug: "ikeja",
            description: "Commercial center with shopping malls and diverse restaurant chains",
            restaurant_count: 298,
            average_rating: 4.0,
            highlights: &["Shopping Malls", "Chain Restaurants", "Airport Access"],
        },
    ]
}

/// The six reviewer cards of the "Meet the Community" carousel.
#[must_use]
pub const fn community_members() -> &'static [CommunityMember] {
    &[
        CommunityMember {
            id: 1,
            name: "Adunni Olatunji",
            username: "@adunni_foodie",
            location: "Victoria Island, Lagos",
            review_count: 127,
            last_review_rating: 5,
        },
        CommunityMember {
            id: 2,
            name: "Emeka Chukwu",
            username: "@emeka_eats",
            location: "Lekki, Lagos",
            review_count: 89,
            last_review_rating: 4,
        },
        CommunityMember {
            id: 3,
            name: "Fatima Hassan",
            username: "@fatima_taste",
            location: "Ikoyi, Lagos",
            review_count: 203,
            last_review_rating: 4,
        },
        CommunityMember {
            id: 4,
            name: "Tunde Adebayo",
            username: "@tunde_foodguy",
            location: "Surulere, Lagos",
            review_count: 156,
            last_review_rating: 5,
        },
        CommunityMember {
            id: 5,
            name: "Kemi Ogundimu",
            username: "@kemi_foodlover",
            location: "Ikeja, Lagos",
            review_count: 67,
            last_review_rating: 4,
        },
        CommunityMember {
            id: 6,
            name: "David Okafor",
            username: "@david_dishes",
            location: "Yaba, Lagos",
            review_count: 234,
            last_review_rating: 5,
        },
    ]
}

/// Featured restaurants carousel content.
#[must_use]
pub const fn featured_restaurants() -> &'static [Restaurant] {
    &[
        Restaurant {
            id: 1,
            name: "Eric Kayser - Victoria Island",
            rating: 4.5,
            review_count: 4125,
            cuisine: "French Bakery",
            area: "Victoria Island",
            price_range: "₦₦₦",
            is_open: true,
        },
        Restaurant {
            id: 4,
            name: "Nkoyo Restaurant",
            rating: 4.6,
            review_count: 3456,
            cuisine: "Nigerian",
            area: "Ikoyi",
            price_range: "₦₦₦",
            is_open: true,
        },
        Restaurant {
            id: 3,
            name: "Ofada Heaven",
            rating: 4.7,
            review_count: 1567,
            cuisine: "Nigerian",
            area: "Surulere",
            price_range: "₦",
            is_open: true,
        },
    ]
}

/// Nearby restaurants carousel content.
#[must_use]
pub const fn nearby_restaurants() -> &'static [Restaurant] {
    &[
        Restaurant {
            id: 101,
            name: "Buka Restaurant",
            rating: 4.3,
            review_count: 892,
            cuisine: "Nigerian",
            area: "Victoria Island",
            price_range: "₦₦",
            is_open: true,
        },
        Restaurant {
            id: 102,
            name: "Shoprite Food Court",
            rating: 4.1,
            review_count: 1234,
            cuisine: "Mixed",
            area: "Victoria Island",
            price_range: "₦₦",
            is_open: true,
        },
        Restaurant {
            id: 103,
            name: "Mr. Biggs Express",
            rating: 3.9,
            review_count: 567,
            cuisine: "Fast Food",
            area: "Victoria Island",
            price_range: "₦",
            is_open: false,
        },
        Restaurant {
            id: 104,
            name: "Terra Kulture Bistro",
            rating: 4.5,
            review_count: 2156,
            cuisine: "Contemporary Nigerian",
            area: "Victoria Island",
            price_range: "₦₦₦",
            is_open: true,
        },
        Restaurant {
            id: 105,
            name: "Chicken Republic",
            rating: 4.2,
            review_count: 1890,
            cuisine: "Fast Food",
            area: "Victoria Island",
            price_range: "₦₦",
            is_open: true,
        },
        Restaurant {
            id: 106,
            name: "Mama Cass Restaurant",
            rating: 4.4,
            review_count: 987,
            cuisine: "Nigerian",
            area: "Victoria Island",
            price_range: "₦₦",
            is_open: true,
        },
    ]
}
