use dioxus::launch;
use dioxus::prelude::*;
use dioxus_logger::tracing::Level;
use shared_types::{Position, WindowConfig};

use desktop_ui::{CartIcon, DesktopWindow, FullScreenProvider, WalletAddress, WindowManager};

const SHOP_WINDOW: &str = r##"{
    "title": "Shop",
    "width": 720,
    "height": "70%",
    "background": "#f5f0e6",
    "scrollable": true,
    "hide_wallet_address": false
}"##;

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());
    dioxus_logger::init(Level::INFO).ok();

    launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| {
        WalletAddress("0x52908400098527886E0F7030069857D2E4169EE7".to_string())
    });
    let mut last_move = use_signal(|| None::<Position>);
    let mut notes_open = use_signal(|| true);
    let shop = use_hook(|| {
        WindowConfig::from_json(SHOP_WINDOW).unwrap_or_else(|e| {
            dioxus_logger::tracing::warn!("Invalid shop window preset, using defaults: {}", e);
            WindowConfig::default()
        })
    });

    let status = match last_move() {
        Some(Position { x, y }) => format!("Last moved to ({x}, {y})"),
        None => "Drag a window by its title bar".to_string(),
    };

    rsx! {
        div {
            style: "min-height: 100vh; background-color: #008080; position: relative;",
            FullScreenProvider {
                WindowManager {
                    if notes_open() {
                        DesktopWindow {
                            title: "Notes",
                            width: 640,
                            height: 480,
                            hide_wallet_address: true,
                            on_moved: move |position| last_move.set(Some(position)),
                            on_close: move |_| notes_open.set(false),
                            p { style: "padding: 1rem;", "{status}" }
                        }
                    }
                    DesktopWindow {
                        title: shop.title.clone().unwrap_or_default(),
                        width: shop.width.clone(),
                        height: shop.height.clone(),
                        background: shop.background().to_string(),
                        scrollable: shop.scrollable,
                        on_moved: move |position| last_move.set(Some(position)),
                        title_children: rsx! {
                            CartIcon { width: 20, height: 20 }
                        },
                        div {
                            style: "display: flex; align-items: center; gap: 1rem; padding: 1rem;",
                            CartIcon { color: "#ff0000", width: 48, height: 48 }
                            span { "Your cart is empty" }
                        }
                    }
                }
            }
        }
    }
}
