//! Alert banner for load and filter errors.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Optional second line telling the user what to check
    #[props(default)]
    pub hint: Option<String>,
}

#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "padding: 12px 16px; margin: 8px 0; background: #FFF3E0; color: #BF360C; border-left: 4px solid #FF7043; border-radius: 2px;",
            p { style: "margin: 0; font-weight: bold;", "{props.message}" }
            if let Some(hint) = props.hint.as_ref() {
                p { style: "margin: 4px 0 0 0; font-size: 12px;", "{hint}" }
            }
        }
    }
}
