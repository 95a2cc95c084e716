// templates/pages/home.rs

use crate::idx::FeaturedListing;
use crate::templates::{
    components::{featured_card, search_box},
    desktop_layout,
};
use maud::{html, Markup};

pub fn home_page(featured: &[FeaturedListing]) -> Markup {
    desktop_layout(
        "Home",
        None,
        html! {
            section class="hero" {
                h1 { "Find Your Place in Central Florida" }
                p { "Search homes for sale across Orlando, Winter Park, Windermere and beyond." }
                (search_box())
            }

            section class="featured" {
                h2 { "Featured Properties" }
                p { "Discover exceptional homes in Orlando's most desirable neighborhoods" }
                div class="featured-grid" {
                    @for listing in featured {
                        (featured_card(listing))
                    }
                }
                a href="/search" class="view-all" { "View all listings" }
            }
        },
    )
}
