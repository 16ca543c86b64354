//! Titled panel that D3 renders a chart into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id D3 renders into
    pub id: String,
    /// Heading above the chart; omitted when empty
    #[props(default = String::new())]
    pub title: String,
    #[props(default = 400)]
    pub min_height: u32,
}

#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; width: 100%; background: #fff; border: 1px solid #e0e0e0; border-radius: 6px; padding: 8px; box-sizing: border-box;",
        props.min_height
    );

    rsx! {
        section {
            style: "{style}",
            if !props.title.is_empty() {
                h3 {
                    style: "margin: 0 0 4px 0; font-size: 15px; color: #333;",
                    "{props.title}"
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
