use maud::{html, Markup, DOCTYPE};

pub const SITE_NAME: &str = "Realty 360";

/// Page chrome shared by every route. `head` is appended inside <head>.
pub fn desktop_layout(title: &str, head: Option<Markup>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | " (SITE_NAME) }
                @if let Some(extra) = head {
                    (extra)
                }
            }
            body {
                header class="site-header flex items-center justify-between px-6 py-3 shadow" {
                    a href="/" class="brand" { (SITE_NAME) }
                    nav {
                        ul {
                            li { a href="/" { "Home" } }
                            li { a href="/search" { "Search" } }
                            li { a href="/idx-wrapper" { "Map Search" } }
                            li { a href="/listings/sold" { "Sold" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}
