//! Headline number card ("Total All Rental Bikes" and friends).

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MetricCardProps {
    pub label: String,
    pub value: u64,
}

#[component]
pub fn MetricCard(props: MetricCardProps) -> Element {
    let value = format_count(props.value);

    rsx! {
        div {
            style: "flex: 1; padding: 12px 16px; background: #fff; border: 1px solid #e0e0e0; border-radius: 6px;",
            p {
                style: "margin: 0; font-size: 13px; color: #666;",
                "{props.label}"
            }
            p {
                style: "margin: 4px 0 0 0; font-size: 28px; font-weight: bold; color: #1a237e;",
                "{value}"
            }
        }
    }
}

/// Group digits in threes: 3292679 -> "3,292,679".
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::format_count;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(3292679), "3,292,679");
    }
}
