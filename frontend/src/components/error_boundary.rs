//! Error boundaries and the error panel shown for failed loads.

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                dioxus::logger::tracing::error!("render error in {}: {:?}", boundary_name, err);
                rsx! {
                    div {
                        style: "display:flex; flex-direction: column; gap: 12px; padding: 24px;",
                        h1 {
                            style: "color:#B91C1C; font-size: 36px; font-weight: 500; margin: 0;",
                            "Something went wrong"
                        }
                        p {
                            style: "color:#7F1D1D; font-size: 18px; margin: 0;",
                            "Section: {boundary_name}"
                        }
                        Link {
                            to: Route::HomePage {},
                            "Return to the course catalog"
                        }
                        pre {
                            style: "color:#111827; border: 1px solid #FCA5A5; background: #FEF2F2; padding: 10px; border-radius: 8px; text-wrap: auto;",
                            "{err:#?}"
                        }
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(e) => format!("{:#?}", e.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        RetryButton { onclick: move |_| err.clear_errors() }
                    }
                }
            },
            {children}
        }
    }
}

/// Error panel with an optional action below the message.
#[component]
pub fn ComponentErrorDisplay(
    #[props(default = "Error".to_string())] title: String,
    error_txt: ReadSignal<String>,
    children: Element,
) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                gap: 8px;
                width: 100%;
                padding: 16px;
                border: 1px solid #FCA5A5;
                border-radius: 10px;
                background: #FEF2F2;
            ",
            h2 {
                style: "color:#B91C1C; font-size: 22px; font-weight: 500; margin: 0;",
                "{title}"
            }
            p {
                style: "color:#7F1D1D; margin: 0; text-wrap: auto; max-width: 640px; text-align: center;",
                "{error_txt}"
            }
            {children}
        }
    }
}

#[component]
pub fn RetryButton(onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        button {
            style: "
                height: 34px;
                padding: 0 14px;
                font-size: 14px;
                border-radius: 8px;
                background: white;
                color: #111827;
                border: 1px solid #D1D5DB;
                cursor: pointer;
            ",
            onclick: move |e| onclick.call(e),
            "Try Again"
        }
    }
}
