use crate::domain::{ListingStatus, PropertyRecord};
use crate::format::{format_price, format_sqft};
use crate::idx::FeaturedListing;
use maud::{html, Markup};

fn status_class(status: ListingStatus) -> &'static str {
    match status {
        ListingStatus::ForSale => "badge bg-green-500 text-white",
        ListingStatus::Pending => "badge bg-yellow-500 text-white",
        ListingStatus::Sold => "badge bg-red-500 text-white",
    }
}

/// Result card on the search page. Clicking it selects the record.
pub fn property_card(record: &PropertyRecord, selected: bool, select_href: &str) -> Markup {
    html! {
        article.property-card.selected[selected]
            id={ "property-" (record.id) }
            data-id=(record.id)
        {
            a href=(select_href) class="card-link" {
                div class="card-image" {
                    img src=(record.image_url) alt=(record.address) loading="lazy";
                    span class=(status_class(record.status)) { (record.status.label()) }
                }
                div class="card-body" {
                    p class="price" { (format_price(record.price)) }
                    h3 class="address" { (record.address) }
                    p class="locality" { (record.city) ", " (record.region_code) " " (record.postal_code) }
                    p class="specs" {
                        (record.bedrooms) " bd | " (record.bathrooms) " ba | " (format_sqft(record.sqft)) " sqft"
                    }
                    p class="category" { (record.category.label()) }
                }
            }
        }
    }
}

pub fn featured_card(listing: &FeaturedListing) -> Markup {
    html! {
        article class="featured-card" {
            a href=(listing.link_url) {
                img src=(listing.image_url) alt=(listing.title) loading="lazy";
                div class="card-body" {
                    h3 { (listing.title) }
                    p class="price" { (listing.price) }
                    p class="address" { (listing.address) }
                    p class="specs" {
                        (listing.beds) " bd | " (listing.baths) " ba | " (listing.sqft) " sqft"
                    }
                }
            }
        }
    }
}
