//! Attribution footer.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct FooterProps {
    /// Attribution text shown centered at the bottom of the page.
    #[props(default = "© 2024 Ookla® Data - All Rights Reserved.".to_string())]
    pub text: String,
}

/// Centered attribution line at the bottom of the page.
#[component]
pub fn Footer(props: FooterProps) -> Element {
    rsx! {
        p {
            style: "text-align: center; color: #666; margin-top: 32px;",
            "{props.text}"
        }
    }
}
