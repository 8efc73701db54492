//! DesktopWindow - the container most app views live in
//!
//! On pointer devices with room to spare the window floats and can be dragged
//! by its title bar. On touch devices, narrow viewports, or in full-screen it
//! stays put and fills the space it is given.

use std::rc::Rc;

use dioxus::prelude::*;
use shared_types::{
    resolve_background, Dimension, Position, WindowId, BASE_Z_INDEX, DEFAULT_WINDOW_HEIGHT,
    DEFAULT_WINDOW_WIDTH, FOCUSED_Z_INDEX,
};

use crate::device::{use_browser_width, use_device};
use crate::drag::use_drag;
use crate::focus::use_focus;
use crate::fullscreen::{use_full_screen, FullScreenContext};
use crate::layout::{floating_style, panel_style, should_allow_dragging, ViewportClass};
use crate::title_bar::WindowTitleBar;
use crate::transform::parse_translate;

/// `pos_x`/`pos_y` seed the drag offset only when no [`FullScreenProvider`]
/// is mounted; under a provider the window starts from the provider's last
/// dragged position. `id` names the window in its [`WindowManager`], a fresh
/// id is generated when it is left out.
///
/// [`FullScreenProvider`]: crate::fullscreen::FullScreenProvider
/// [`WindowManager`]: crate::focus::WindowManager
#[component]
pub fn DesktopWindow(
    #[props(into)] id: Option<String>,
    #[props(into)] title: Option<String>,
    #[props(into, default = Dimension::Px(DEFAULT_WINDOW_WIDTH))] width: Dimension,
    #[props(into, default = Dimension::Css(DEFAULT_WINDOW_HEIGHT.to_string()))] height: Dimension,
    #[props(into)] background: Option<String>,
    #[props(default)] full_screen: bool,
    #[props(default)] only_full_screen: bool,
    #[props(default)] scrollable: bool,
    #[props(default)] hide_wallet_address: bool,
    #[props(default)] pos_x: f64,
    #[props(default)] pos_y: f64,
    on_resize: Option<EventHandler<()>>,
    on_moved: Option<EventHandler<Position>>,
    on_close: Option<EventHandler<()>>,
    title_children: Option<Element>,
    children: Element,
) -> Element {
    let device = use_device();
    let browser_width = use_browser_width(&device);
    let full_screen_state = use_full_screen();
    let focus = use_focus();

    let window_id = use_hook(|| id.clone().map(WindowId).unwrap_or_default());
    let mut is_client = use_signal(|| false);
    let mut local_z_index = use_signal(|| BASE_Z_INDEX);
    let mut window_ref = use_signal(|| None::<Rc<MountedData>>);

    let drag_origin = full_screen_state
        .map(|state| state.peek_window_position())
        .unwrap_or(Position::new(pos_x, pos_y));
    let drag = use_drag(drag_origin);

    let id_for_register = window_id.clone();
    use_effect(move || {
        if let Some(focus) = focus {
            focus.register(id_for_register.clone());
        }
    });

    let id_for_drop = window_id.clone();
    use_drop(move || {
        if let Some(focus) = focus {
            focus.unregister(&id_for_drop);
        }
    });

    // Nothing environment-dependent happens until we know we are past the
    // first paint in a live document.
    use_effect(move || is_client.set(true));

    use_effect(use_reactive((&full_screen,), move |(full_screen,)| {
        if !is_client() {
            return;
        }
        if full_screen {
            if let Some(state) = full_screen_state {
                state.set_full_screen(true);
            }
        }
        if let Some(on_resize) = on_resize {
            on_resize.call(());
        }
    }));

    let is_touch_device = device.is_touch_device();
    let breakpoints = device.breakpoints();
    let is_full_screen = full_screen_state
        .map(|state| state.is_full_screen())
        .unwrap_or(false);
    let viewport_width = browser_width();
    let draggable =
        should_allow_dragging(is_touch_device, is_full_screen, viewport_width, &breakpoints);
    let floating = is_client() && draggable;

    let z_index = focus
        .and_then(|focus| focus.z_index(&window_id))
        .unwrap_or_else(|| local_z_index());

    let mut style = panel_style(resolve_background(background.as_deref()), scrollable);
    if floating {
        let class = ViewportClass::classify(viewport_width, &breakpoints);
        style.push_str(&floating_style(class, &width, &height));
    }
    if draggable {
        style.push_str(&format!(" transform: {};", drag.transform()));
    }
    style.push_str(&format!(" z-index: {z_index};"));

    let class = if floating {
        "desktopWindow floating"
    } else {
        "desktopWindow"
    };

    let id_for_focus = window_id.clone();
    let focus_window = move |_: MouseEvent| match focus {
        Some(focus) => focus.focus(&id_for_focus),
        None => local_z_index.set(FOCUSED_Z_INDEX),
    };

    let id_for_stop = window_id.clone();
    let stop_drag = move |_: MouseEvent| {
        let Some(transform) = drag.end() else {
            return;
        };
        if let Some(position) = finish_drag(&transform, full_screen_state, on_moved) {
            dioxus_logger::tracing::debug!(
                "Window {} moved to ({}, {})",
                id_for_stop,
                position.x,
                position.y
            );
        }
    };

    let extra_title_content = title_children.unwrap_or_else(|| rsx! {});

    rsx! {
        div {
            id: "{window_id}",
            class: "{class}",
            style: "{style}",
            onmounted: move |e| window_ref.set(Some(e.data())),
            onclick: focus_window,

            if !only_full_screen {
                div {
                    class: "windowTitleBar",
                    onmousedown: move |e| {
                        if draggable {
                            let point = e.client_coordinates();
                            drag.begin(point.x, point.y);
                        }
                    },
                    WindowTitleBar {
                        title: title.clone(),
                        is_touch_device,
                        is_full_screen,
                        toggle_full_screen: move |_| toggle_full_screen(full_screen_state),
                        window_ref,
                        hide_wallet_address,
                        on_close,
                        {extra_title_content}
                    }
                }
            }

            {children}
        }

        if drag.is_dragging() {
            div {
                class: "drag-overlay",
                style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0; z-index: 9999; cursor: grabbing;",
                onmousemove: move |e| {
                    let point = e.client_coordinates();
                    drag.update(point.x, point.y);
                },
                onmouseup: stop_drag,
            }
        }
    }
}

/// Record where a finished drag left the window: the shared position is
/// updated and `on_moved` fires. Nothing happens for an unrecognized
/// transform.
pub fn finish_drag(
    transform: &str,
    full_screen_state: Option<FullScreenContext>,
    on_moved: Option<EventHandler<Position>>,
) -> Option<Position> {
    let position = position_from_transform(transform)?;
    if let Some(state) = full_screen_state {
        state.set_window_position(position);
    }
    if let Some(on_moved) = on_moved {
        on_moved.call(position);
    }
    Some(position)
}

/// Flip the shared full-screen flag. A no-op without a provider.
pub fn toggle_full_screen(full_screen_state: Option<FullScreenContext>) {
    if let Some(state) = full_screen_state {
        state.toggle();
    }
}

/// Offset a finished drag left on the window. Unrecognized transforms keep
/// the previous position.
pub fn position_from_transform(transform: &str) -> Option<Position> {
    match parse_translate(transform) {
        Ok(position) => Some(position),
        Err(e) => {
            dioxus_logger::tracing::debug!("Ignoring drag end: {}", e);
            None
        }
    }
}
