//! Start/end date inputs with quick presets.

use chrono::NaiveDate;
use dioxus::prelude::*;
use reporter_wire::range::{format_date, parse_date};

use crate::app::dates::{today, RangePreset};

/// Value for an `<input type="date">`; empty when unset
fn input_value(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_default()
}

/// Two date pickers plus the preset buttons. Both signals are owned by the
/// page so it can validate them before requesting a report.
#[component]
pub fn DateRangeInputs(
    mut start: Signal<Option<NaiveDate>>,
    mut end: Signal<Option<NaiveDate>>,
    #[props(default = false)] disabled: bool,
) -> Element {
    let start_value = input_value(start());
    let end_value = input_value(end());

    rsx! {
        div { class: "form-row",
            label {
                "Start Date"
                input {
                    r#type: "date",
                    value: "{start_value}",
                    disabled,
                    oninput: move |evt| start.set(parse_date(&evt.value())),
                }
            }
            label {
                "End Date"
                input {
                    r#type: "date",
                    value: "{end_value}",
                    disabled,
                    oninput: move |evt| end.set(parse_date(&evt.value())),
                }
            }
        }
        div { class: "presets",
            for preset in RangePreset::ALL {
                button {
                    key: "{preset.label()}",
                    r#type: "button",
                    class: "secondary outline",
                    disabled,
                    onclick: move |_| {
                        let (from, to) = preset.resolve(today());
                        start.set(Some(from));
                        end.set(Some(to));
                    },
                    "{preset.label()}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_value() {
        assert_eq!(input_value(None), "");
        assert_eq!(
            input_value(NaiveDate::from_ymd_opt(2024, 3, 9)),
            "2024-03-09"
        );
    }
}
