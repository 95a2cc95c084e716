use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Host page for a remote IDX widget. The script finds the two sentinel
/// elements by id and injects its content between them.
pub fn idx_widget_page(title: &str, script_url: &str) -> Markup {
    desktop_layout(
        title,
        None,
        html! {
            main class="idx-wrapper" {
                div id="idx-start" {}
                div id="idx-stop" {}
            }
            script src=(script_url) async {}
        },
    )
}
