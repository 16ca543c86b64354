use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    #[props(default = "Loading rental data...".to_string())]
    pub message: String,
}

/// Shown while the embedded CSV is parsed.
#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; gap: 8px; padding: 40px; color: #666;",
            div {
                style: "width: 28px; height: 28px; border: 3px solid #e0e0e0; border-top-color: #1a237e; border-radius: 50%;",
            }
            span { "{props.message}" }
        }
    }
}
