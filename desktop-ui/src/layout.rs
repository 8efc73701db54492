//! Window layout rules
//!
//! Pure functions that decide whether a window may float and which inline
//! styles it gets at each viewport size. Components call these with values
//! taken from the device classifier and the full-screen provider.

use shared_types::{Breakpoints, Dimension};

/// Layout bucket for a viewport width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Phone,
    Tablet,
    Laptop,
}

impl ViewportClass {
    pub fn classify(width: u32, breakpoints: &Breakpoints) -> Self {
        if width >= breakpoints.laptop {
            ViewportClass::Laptop
        } else if width >= breakpoints.tablet {
            ViewportClass::Tablet
        } else {
            ViewportClass::Phone
        }
    }
}

/// A window may be dragged only on pointer devices, outside full-screen, and
/// on viewports wider than `drag_min_width`.
pub fn should_allow_dragging(
    is_touch_device: bool,
    is_full_screen: bool,
    browser_width: u32,
    breakpoints: &Breakpoints,
) -> bool {
    !is_touch_device && !is_full_screen && browser_width > breakpoints.drag_min_width
}

/// Styles every window panel carries.
pub fn panel_style(background: &str, scrollable: bool) -> String {
    let overflow_y = if scrollable { "scroll" } else { "hidden" };
    format!(
        "width: 100%; height: 100%; margin: 0; padding: 0; background: {background}; \
         border: 2px solid #000; box-shadow: 8px 8px rgba(0, 0, 0, 0.15); \
         display: flex; flex-direction: column; overflow-y: {overflow_y}; overflow-x: hidden; \
         position: absolute;"
    )
}

/// Extra styles for a floating (draggable) panel at the given viewport size.
pub fn floating_style(class: ViewportClass, width: &Dimension, height: &Dimension) -> String {
    let max_width = width.to_css();
    let max_height = height.to_css();
    match class {
        ViewportClass::Phone => {
            " position: absolute; width: 100%; height: 100%; margin: 0; top: 0; left: 0; right: 0;"
                .to_string()
        }
        ViewportClass::Tablet => format!(
            " position: absolute; max-width: {max_width}; max-height: {max_height}; margin: 0; \
             top: 32px; right: 96px; left: unset;"
        ),
        ViewportClass::Laptop => format!(
            " position: absolute; max-width: {max_width}; max-height: {max_height}; \
             top: 32px; left: 96px; right: 96px; width: 80%; margin: auto; margin-top: 32px;"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_or_touch_never_drags() {
        let bp = Breakpoints::default();
        for width in [0, 320, 640, 767, 768] {
            assert!(!should_allow_dragging(false, false, width, &bp));
        }
        for width in [769, 1024, 1920, 4096] {
            assert!(!should_allow_dragging(true, false, width, &bp));
        }
    }

    #[test]
    fn full_screen_never_drags() {
        let bp = Breakpoints::default();
        for touch in [false, true] {
            for width in [320, 769, 1920] {
                assert!(!should_allow_dragging(touch, true, width, &bp));
            }
        }
    }

    #[test]
    fn wide_pointer_window_drags() {
        let bp = Breakpoints::default();
        assert!(should_allow_dragging(false, false, 769, &bp));
        assert!(should_allow_dragging(false, false, 1440, &bp));
    }

    #[test]
    fn classify_uses_breakpoints() {
        let bp = Breakpoints::default();
        assert_eq!(ViewportClass::classify(375, &bp), ViewportClass::Phone);
        assert_eq!(ViewportClass::classify(768, &bp), ViewportClass::Tablet);
        assert_eq!(ViewportClass::classify(1023, &bp), ViewportClass::Tablet);
        assert_eq!(ViewportClass::classify(1024, &bp), ViewportClass::Laptop);
    }

    #[test]
    fn panel_style_reflects_scrollable_and_background() {
        let style = panel_style("#a8a9ae", true);
        assert!(style.contains("background: #a8a9ae;"));
        assert!(style.contains("overflow-y: scroll;"));
        assert!(panel_style("red", false).contains("overflow-y: hidden;"));
    }

    #[test]
    fn floating_layouts_cap_to_declared_size() {
        let width = Dimension::Px(1024.0);
        let height = Dimension::from("90%");

        let phone = floating_style(ViewportClass::Phone, &width, &height);
        assert!(phone.contains("top: 0; left: 0; right: 0;"));
        assert!(!phone.contains("max-width"));

        let tablet = floating_style(ViewportClass::Tablet, &width, &height);
        assert!(tablet.contains("max-width: 1024px;"));
        assert!(tablet.contains("max-height: 90%;"));
        assert!(tablet.contains("right: 96px; left: unset;"));

        let laptop = floating_style(ViewportClass::Laptop, &Dimension::Px(640.0), &height);
        assert!(laptop.contains("max-width: 640px;"));
        assert!(laptop.contains("left: 96px; right: 96px;"));
        assert!(laptop.contains("margin: auto; margin-top: 32px;"));
    }
}
