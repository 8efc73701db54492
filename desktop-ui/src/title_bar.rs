use std::rc::Rc;

use dioxus::html::ScrollBehavior;
use dioxus::prelude::*;

/// Connected wallet address, provided by the hosting page when a wallet is
/// connected.
#[derive(Debug, Clone, PartialEq)]
pub struct WalletAddress(pub String);

/// `0x1234…abcd` for long addresses, anything short passes through.
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}…{tail}")
}

#[component]
pub fn WindowTitleBar(
    #[props(!optional)] title: Option<String>,
    is_touch_device: bool,
    is_full_screen: bool,
    toggle_full_screen: EventHandler<()>,
    window_ref: Signal<Option<Rc<MountedData>>>,
    #[props(default)] hide_wallet_address: bool,
    #[props(!optional)] on_close: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    let wallet = try_use_context::<WalletAddress>();
    let address = wallet
        .filter(|_| !hide_wallet_address)
        .map(|WalletAddress(address)| short_address(&address));
    let toggle_label = if is_full_screen { "❐" } else { "□" };

    rsx! {
        div {
            class: "window-titlebar",
            style: "display: flex; align-items: center; justify-content: space-between; gap: 0.5rem; padding: 0.25rem 0.5rem; background: #fff; border-bottom: 2px solid #000; cursor: grab; user-select: none;",

            span {
                class: "window-title",
                style: "font-weight: 600; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;",
                if let Some(title) = title {
                    "{title}"
                }
            }

            div {
                style: "display: flex; align-items: center; gap: 0.5rem;",
                {children}

                if let Some(address) = address {
                    span {
                        class: "window-wallet",
                        style: "font-family: monospace; font-size: 0.75rem;",
                        "{address}"
                    }
                }

                if !is_touch_device {
                    button {
                        class: "window-fullscreen",
                        style: "width: 24px; height: 24px; background: transparent; border: none; cursor: pointer;",
                        onmousedown: move |e| e.stop_propagation(),
                        onclick: move |e| {
                            e.stop_propagation();
                            toggle_full_screen.call(());
                            if let Some(element) = window_ref() {
                                spawn(async move {
                                    if let Err(e) = element.scroll_to(ScrollBehavior::Smooth).await {
                                        dioxus_logger::tracing::debug!(
                                            "Could not scroll window into view: {:?}",
                                            e
                                        );
                                    }
                                });
                            }
                        },
                        "{toggle_label}"
                    }
                }

                if let Some(on_close) = on_close {
                    button {
                        class: "window-close",
                        style: "width: 24px; height: 24px; background: transparent; border: none; cursor: pointer; font-size: 1.25rem; line-height: 1;",
                        onmousedown: move |e| e.stop_propagation(),
                        onclick: move |e| {
                            e.stop_propagation();
                            on_close.call(());
                        },
                        "×"
                    }
                }
            }
        }
    }
}
