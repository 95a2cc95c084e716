// Fixed inputs for the generated catalog: Orlando-area towns, streets and photos.

pub const REGION_CODE: &str = "FL";

#[derive(Debug, Clone, Copy)]
pub struct CityAnchor {
    pub name: &'static str,
    pub postal_code: &'static str,
    pub lat: f64,
    pub lng: f64,
}

const fn anchor(name: &'static str, postal_code: &'static str, lat: f64, lng: f64) -> CityAnchor {
    CityAnchor {
        name,
        postal_code,
        lat,
        lng,
    }
}

pub const CITY_ANCHORS: &[CityAnchor] = &[
    anchor("Orlando", "32801", 28.5421, -81.3790),
    anchor("Orlando", "32803", 28.5560, -81.3480),
    anchor("Orlando", "32804", 28.5760, -81.3960),
    anchor("Orlando", "32806", 28.5130, -81.3580),
    anchor("Orlando", "32814", 28.5690, -81.3250),
    anchor("Orlando", "32819", 28.4520, -81.4720),
    anchor("Orlando", "32827", 28.4230, -81.2950),
    anchor("Orlando", "32836", 28.4130, -81.5160),
    anchor("Orlando", "32839", 28.4880, -81.4090),
    anchor("Winter Park", "32789", 28.5999, -81.3392),
    anchor("Winter Park", "32792", 28.6040, -81.2990),
    anchor("Windermere", "34786", 28.4958, -81.5348),
    anchor("Winter Garden", "34787", 28.5653, -81.5862),
    anchor("Oviedo", "32765", 28.6700, -81.2081),
    anchor("Maitland", "32751", 28.6278, -81.3631),
    anchor("Altamonte Springs", "32701", 28.6611, -81.3656),
    anchor("Kissimmee", "34747", 28.3270, -81.5930),
    anchor("Lake Mary", "32746", 28.7589, -81.3178),
    anchor("Sanford", "32771", 28.8029, -81.2695),
    anchor("Clermont", "34711", 28.5494, -81.7729),
];

pub const STREET_NAMES: &[&str] = &[
    "Lakeshore Dr",
    "City Center Ave",
    "Park Ave",
    "Innovation Way",
    "Edgewater Dr",
    "Fairway Ln",
    "Orange Ave",
    "Oak Tree Ln",
    "Marina Way",
    "Palm Beach Dr",
    "Lakeview Rd",
    "Golden Oak Blvd",
    "Thornton Park",
    "Audubon Park",
    "Butler Chain Dr",
    "Delaney Ave",
    "New Broad St",
    "Sand Lake Rd",
    "Virginia Dr",
    "Eola Pkwy",
    "Celebration Blvd",
    "Hamlin Groves",
    "Maitland Ave",
    "Lake Lily Dr",
    "Magnolia Ave",
    "Colonial Dr",
    "Conroy Rd",
    "International Dr",
    "Apopka Vineland",
    "Turkey Lake Rd",
    "Hiawassee Rd",
    "Kirkman Rd",
    "John Young Pkwy",
    "South St",
    "Church St",
    "Central Ave",
    "Main St",
    "Broadway",
    "First St",
    "Second Ave",
    "Lake Eola Dr",
    "Summerlin Ave",
    "Ferncreek Ave",
    "Bumby Ave",
    "Mills Ave",
    "Corrine Dr",
    "Winter Park Rd",
    "Fairbanks Ave",
    "Holt Ave",
    "New England Ave",
];

pub const PROPERTY_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?w=800&q=80",
    "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?w=800&q=80",
    "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?w=800&q=80",
    "https://images.unsplash.com/photo-1600566753086-00f18fb6b3ea?w=800&q=80",
    "https://images.unsplash.com/photo-1600210492486-724fe5c67fb0?w=800&q=80",
    "https://images.unsplash.com/photo-1600573472550-8090b5e0745e?w=800&q=80",
    "https://images.unsplash.com/photo-1600047509807-ba8f99d2cdde?w=800&q=80",
    "https://images.unsplash.com/photo-1600585154526-990dced4db0d?w=800&q=80",
    "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?w=800&q=80",
    "https://images.unsplash.com/photo-1613490493576-7fde63acd811?w=800&q=80",
    "https://images.unsplash.com/photo-1518780664697-55e3ad937233?w=800&q=80",
    "https://images.unsplash.com/photo-1480074568708-e7b720bb3f09?w=800&q=80",
    "https://images.unsplash.com/photo-1500382017468-9049fee74a52?w=800&q=80",
    "https://images.unsplash.com/photo-1510798831971-661eb04b3739?w=800&q=80",
    "https://images.unsplash.com/photo-1449844908441-8829872d2607?w=800&q=80",
    "https://images.unsplash.com/photo-1472224311454-fa056b7ad33e?w=800&q=80",
    "https://images.unsplash.com/photo-1513584684032-2979244001b6?w=800&q=80",
    "https://images.unsplash.com/photo-1516455590571-18256e5bb9ff?w=800&q=80",
    "https://images.unsplash.com/photo-1523217582562-09d0def993a6?w=800&q=80",
    "https://images.unsplash.com/photo-1502005229762-cf1b2da7c5d6?w=800&q=80",
];
