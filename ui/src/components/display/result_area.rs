use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct ResultAreaProps {
    pub id: String,
    pub text: String,
}

/// Plain-text outcome of the last settled submission of a form.
#[component]
pub fn ResultArea(props: ResultAreaProps) -> Element {
    rsx! {
        pre {
            id: "{props.id}",
            class: "result-area",
            "{props.text}"
        }
    }
}
