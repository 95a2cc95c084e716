use crate::templates::components::filter_form::{BED_OPTIONS, BATH_OPTIONS, MAX_PRICE_OPTIONS, MIN_PRICE_OPTIONS};
use maud::{html, Markup};

/// Quick search on the home page; lands on /search.
pub fn search_box() -> Markup {
    html! {
        form class="search-box" method="get" action="/search" {
            input type="text" name="city" placeholder="Enter city, neighborhood, or ZIP" aria-label="Location";

            select name="lp" aria-label="Min Price" {
                @for (value, text) in MIN_PRICE_OPTIONS {
                    option value=(value) { (text) }
                }
            }
            select name="hp" aria-label="Max Price" {
                @for (value, text) in MAX_PRICE_OPTIONS {
                    option value=(value) { (text) }
                }
            }
            select name="bd" aria-label="Beds" {
                @for (value, text) in BED_OPTIONS {
                    option value=(value) { (text) " Beds" }
                }
            }
            select name="ba" aria-label="Baths" {
                @for (value, text) in BATH_OPTIONS {
                    option value=(value) { (text) " Baths" }
                }
            }

            button type="submit" class="primary" { "Search Properties" }
        }
    }
}
