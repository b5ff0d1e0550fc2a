//! Page header with logo and title columns.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PageHeaderProps {
    /// Main page title.
    pub title: String,
    /// Logo image source.
    #[props(default = String::new())]
    pub logo_src: String,
}

/// Two-column page header: branding logo on the left, title on the right.
#[component]
pub fn PageHeader(props: PageHeaderProps) -> Element {
    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 24px; margin-bottom: 16px;",
            if !props.logo_src.is_empty() {
                img {
                    src: "{props.logo_src}",
                    width: "150",
                    alt: "logo",
                }
            }
            h1 {
                style: "text-align: left; margin: 0;",
                "{props.title}"
            }
        }
    }
}
