//! Built-in sample data the portal runs on. Listings are immutable; nothing
//! here is created or destroyed at runtime.

use super::{MarketData, Notification, Preferences, Property, User};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn default_user() -> User {
    User {
        id: "user_001".to_string(),
        name: "John Smith".to_string(),
        email: "john.smith@email.com".to_string(),
        phone: "+971 50 123 4567".to_string(),
        avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=200".to_string(),
        role: "buyer".to_string(),
        preferences: Preferences {
            price_range: (500_000, 2_000_000),
            property_types: strings(&["apartment", "villa"]),
            locations: strings(&["Dubai Marina", "Downtown Dubai"]),
            sustainability: true,
        },
    }
}

pub fn market_data() -> MarketData {
    MarketData {
        average_price: 1_250_000,
        price_change: "+12.5%".to_string(),
        total_listings: 10_234,
        average_days_on_market: 18,
    }
}

pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: 1,
            text: "Price drop on Modern Villa with Garden".to_string(),
            time: "2 hours ago".to_string(),
            read: false,
        },
        Notification {
            id: 2,
            text: "New listing matches your preferences in Dubai Marina".to_string(),
            time: "5 hours ago".to_string(),
            read: false,
        },
        Notification {
            id: 3,
            text: "Viewing confirmed for Beachfront Penthouse".to_string(),
            time: "1 day ago".to_string(),
            read: true,
        },
    ]
}

/// The six featured listings
pub fn properties() -> Vec<Property> {
    vec![
        Property {
            id: 1,
            title: "Luxury Downtown Apartment".to_string(),
            price: 850_000,
            location: "Dubai Marina".to_string(),
            size: 2100,
            bedrooms: 3,
            bathrooms: 2,
            kind: "Apartment".to_string(),
            image: "https://images.unsplash.com/photo-1545324418-cc1a3fa10c00?w=800".to_string(),
            sustainable: true,
            optimized: true,
            rating: 4.8,
            energy_rating: "A+".to_string(),
            visitors: 24,
            days_on_market: 12,
            viewing_requests: 8,
            features: strings(&[
                "Pool",
                "Gym",
                "Parking",
                "24/7 Security",
                "Smart Home",
                "Central AC",
                "Balcony",
            ]),
            description: "Stunning luxury apartment with panoramic marina views. Features high-end finishes, smart home technology, and eco-friendly design.".to_string(),
            year_built: 2022,
            parking: 2,
            commute_cost: "Low - Near Metro".to_string(),
            energy_savings: "30% below average".to_string(),
        },
        Property {
            id: 2,
            title: "Modern Villa with Garden".to_string(),
            price: 2_500_000,
            location: "Palm Jumeirah".to_string(),
            size: 4500,
            bedrooms: 5,
            bathrooms: 4,
            kind: "Villa".to_string(),
            image: "https://images.unsplash.com/photo-1613490493576-7fde63acd811?w=800".to_string(),
            sustainable: true,
            optimized: false,
            rating: 4.9,
            energy_rating: "A".to_string(),
            visitors: 18,
            days_on_market: 8,
            viewing_requests: 12,
            features: strings(&[
                "Garden",
                "Private Pool",
                "Smart Home",
                "Beach Access",
                "Maid Room",
                "BBQ Area",
            ]),
            description: "Exclusive Palm Jumeirah villa with private beach access. Sustainable design with solar panels and energy-efficient systems.".to_string(),
            year_built: 2023,
            parking: 4,
            commute_cost: "Medium".to_string(),
            energy_savings: "25% below average".to_string(),
        },
        Property {
            id: 3,
            title: "Executive Office Space".to_string(),
            price: 1_200_000,
            location: "Business Bay".to_string(),
            size: 3200,
            bedrooms: 0,
            bathrooms: 3,
            kind: "Commercial".to_string(),
            image: "https://images.unsplash.com/photo-1497366216548-37526070297c?w=800".to_string(),
            sustainable: false,
            optimized: true,
            rating: 4.7,
            energy_rating: "B+".to_string(),
            visitors: 31,
            days_on_market: 20,
            viewing_requests: 15,
            features: strings(&[
                "Parking",
                "Conference Room",
                "Reception",
                "Metro Access",
                "Pantry",
                "Server Room",
            ]),
            description: "Prime office space in the heart of Business Bay. Perfect for tech startups and corporate offices.".to_string(),
            year_built: 2020,
            parking: 10,
            commute_cost: "Very Low - Metro Connected".to_string(),
            energy_savings: "15% below average".to_string(),
        },
        Property {
            id: 4,
            title: "Beachfront Penthouse".to_string(),
            price: 4_200_000,
            location: "Jumeirah Beach Residence".to_string(),
            size: 5600,
            bedrooms: 4,
            bathrooms: 5,
            kind: "Penthouse".to_string(),
            image: "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?w=800".to_string(),
            sustainable: true,
            optimized: true,
            rating: 5.0,
            energy_rating: "A++".to_string(),
            visitors: 42,
            days_on_market: 5,
            viewing_requests: 20,
            features: strings(&[
                "Ocean View",
                "Private Pool",
                "Terrace",
                "Concierge",
                "Wine Cellar",
                "Home Theater",
            ]),
            description: "Ultra-luxury penthouse with breathtaking ocean views. The epitome of sustainable luxury living.".to_string(),
            year_built: 2024,
            parking: 3,
            commute_cost: "Low - Near Tram".to_string(),
            energy_savings: "40% below average".to_string(),
        },
        Property {
            id: 5,
            title: "Contemporary Studio".to_string(),
            price: 450_000,
            location: "Downtown Dubai".to_string(),
            size: 650,
            bedrooms: 1,
            bathrooms: 1,
            kind: "Studio".to_string(),
            image: "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?w=800".to_string(),
            sustainable: true,
            optimized: true,
            rating: 4.6,
            energy_rating: "A".to_string(),
            visitors: 35,
            days_on_market: 15,
            viewing_requests: 18,
            features: strings(&[
                "City View",
                "Gym",
                "Pool",
                "Metro Access",
                "Smart Home",
                "Balcony",
            ]),
            description: "Perfect starter home in the heart of Downtown. Energy-efficient and close to all amenities.".to_string(),
            year_built: 2021,
            parking: 1,
            commute_cost: "Very Low - Metro Adjacent".to_string(),
            energy_savings: "28% below average".to_string(),
        },
        Property {
            id: 6,
            title: "Family Townhouse".to_string(),
            price: 1_800_000,
            location: "Arabian Ranches".to_string(),
            size: 3800,
            bedrooms: 4,
            bathrooms: 3,
            kind: "Townhouse".to_string(),
            image: "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?w=800".to_string(),
            sustainable: true,
            optimized: false,
            rating: 4.7,
            energy_rating: "B+".to_string(),
            visitors: 22,
            days_on_market: 18,
            viewing_requests: 9,
            features: strings(&[
                "Garden",
                "Community Pool",
                "Playground",
                "Parking",
                "Maid Room",
                "Study Room",
            ]),
            description: "Spacious family home in a gated community. Perfect for families with children.".to_string(),
            year_built: 2019,
            parking: 2,
            commute_cost: "Medium - 20min to city".to_string(),
            energy_savings: "18% below average".to_string(),
        },
    ]
}
