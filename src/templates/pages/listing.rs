use crate::idx::FeaturedListing;
use crate::templates::{components::featured_card, desktop_layout};
use maud::{html, Markup};

/// One live IDX listing, shown as a featured card with a way back to search.
pub fn listing_page(listing: &FeaturedListing) -> Markup {
    desktop_layout(
        &listing.address,
        None,
        html! {
            main class="listing-detail" {
                (featured_card(listing))
                a href=(listing.link_url) class="view-all" { "More homes nearby" }
            }
        },
    )
}
