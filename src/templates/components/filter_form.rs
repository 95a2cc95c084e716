use crate::domain::{ListingStatus, PropertyCategory};
use crate::search::{FilterCriteria, PRICE_CEILING};
use maud::{html, Markup};

pub const MIN_PRICE_OPTIONS: &[(u64, &str)] = &[
    (0, "No Min"),
    (100_000, "$100,000"),
    (250_000, "$250,000"),
    (500_000, "$500,000"),
    (750_000, "$750,000"),
    (1_000_000, "$1,000,000"),
];

pub const MAX_PRICE_OPTIONS: &[(u64, &str)] = &[
    (PRICE_CEILING, "No Max"),
    (250_000, "$250,000"),
    (500_000, "$500,000"),
    (750_000, "$750,000"),
    (1_000_000, "$1,000,000"),
    (2_000_000, "$2,000,000"),
];

pub const BED_OPTIONS: &[(u32, &str)] = &[(0, "Any"), (1, "1+"), (2, "2+"), (3, "3+"), (4, "4+"), (5, "5+")];
pub const BATH_OPTIONS: &[(u32, &str)] = &[(0, "Any"), (1, "1+"), (2, "2+"), (3, "3+"), (4, "4+")];

fn price_select(name: &str, label: &str, options: &[(u64, &str)], current: u64) -> Markup {
    let known = options.iter().any(|(v, _)| *v == current);
    html! {
        label for=(name) { (label) }
        select name=(name) id=(name) {
            @for (value, text) in options {
                option value=(value) selected[*value == current] { (text) }
            }
            // A value typed into the URL that is not one of the presets.
            @if !known {
                option value=(current) selected { "$" (current) }
            }
        }
    }
}

fn count_select(name: &str, label: &str, options: &[(u32, &str)], current: u32) -> Markup {
    html! {
        label for=(name) { (label) }
        select name=(name) id=(name) {
            @for (value, text) in options {
                option value=(value) selected[*value == current] { (text) }
            }
            @if !options.iter().any(|(v, _)| *v == current) {
                option value=(current) selected { (current) "+" }
            }
        }
    }
}

/// Sidebar filters on the search page. Submits to /search, which rewrites the
/// query string to just the non-default criteria.
pub fn filter_form(criteria: &FilterCriteria) -> Markup {
    html! {
        form class="filter-form" method="get" action="/search" {
            label for="city" { "Location" }
            input type="text" id="city" name="city" value=(criteria.location)
                placeholder="City, address, or ZIP";

            (price_select("lp", "Min Price", MIN_PRICE_OPTIONS, criteria.min_price))
            (price_select("hp", "Max Price", MAX_PRICE_OPTIONS, criteria.max_price))
            (count_select("bd", "Beds", BED_OPTIONS, criteria.min_bedrooms))
            (count_select("ba", "Baths", BATH_OPTIONS, criteria.min_bathrooms))

            label for="pt" { "Property Type" }
            select name="pt" id="pt" {
                option value="all" selected[criteria.property_type.is_none()] { "All Property Types" }
                @for category in PropertyCategory::ALL {
                    option value=(category.slug()) selected[criteria.property_type == Some(category)] {
                        (category.label())
                    }
                }
            }

            label for="status" { "Status" }
            select name="status" id="status" {
                option value="all" selected[criteria.status.is_none()] { "All Status" }
                @for status in ListingStatus::ALL {
                    option value=(status.slug()) selected[criteria.status == Some(status)] {
                        (status.label())
                    }
                }
            }

            button type="submit" class="primary" { "Search" }
            @if !criteria.is_default() {
                a href="/search" class="reset" { "Clear all filters" }
            }
        }
    }
}
