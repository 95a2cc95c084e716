// templates/pages/search.rs

use crate::map::BOOTSTRAP_JS;
use crate::search::SearchSession;
use crate::templates::{
    components::{filter_form, property_card},
    desktop_layout,
};
use maud::{html, Markup, PreEscaped};

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

/// Filters, result cards and the map. `map_config` is the JSON produced by
/// the Leaflet adapter for the same results.
pub fn search_page(session: &SearchSession, map_config: &str) -> Markup {
    let criteria = session.criteria();
    let total = session.result_count();
    let visible = session.visible_results();
    let selection = session.selection();
    let active = criteria.active_filter_count();

    let head = html! {
        link rel="stylesheet" href=(LEAFLET_CSS);
        script src=(LEAFLET_JS) defer {}
    };

    desktop_layout(
        "Search Properties",
        Some(head),
        html! {
            main class="search-layout" {
                aside class="filters" {
                    h2 {
                        "Filters"
                        @if active > 0 {
                            span class="filter-count" { (active) }
                        }
                    }
                    (filter_form(criteria))
                }

                section class="results" {
                    p class="result-summary" {
                        "Showing " span class="result-count" { (total) } " properties"
                        @if !criteria.location.trim().is_empty() {
                            " in " strong { (criteria.location.trim()) }
                        }
                    }

                    @if total == 0 {
                        div class="no-results" {
                            h3 { "No properties found" }
                            p { "Try adjusting your filters" }
                            a href="/search" class="reset" { "Clear all filters" }
                        }
                    } @else {
                        div class="result-grid" {
                            @for record in &visible {
                                (property_card(
                                    record,
                                    selection.is_selected(&record.id),
                                    &session.select_href(&record.id),
                                ))
                            }
                        }
                        @if session.has_more() {
                            a href=(session.load_more_href()) class="load-more" {
                                "Load more (" (visible.len()) " of " (total) ")"
                            }
                        }
                    }
                }

                section class="map-panel" {
                    div id="map" style="height: 100%; min-height: 480px;" {}
                    script type="application/json" id="map-config" { (PreEscaped(map_config)) }
                    script { (PreEscaped(format!("window.addEventListener('load', function () {{{BOOTSTRAP_JS}}});"))) }
                }
            }
        },
    )
}
