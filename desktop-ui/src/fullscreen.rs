use dioxus::prelude::*;
use shared_types::Position;

/// Full-screen flag and last dragged window position, shared by every
/// window under one [`FullScreenProvider`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FullScreenState {
    pub is_full_screen: bool,
    pub window_position: Position,
}

impl FullScreenState {
    pub fn toggled(self) -> Self {
        Self {
            is_full_screen: !self.is_full_screen,
            ..self
        }
    }
}

/// Handle to the provider's state. Reads subscribe the calling component.
#[derive(Clone, Copy, PartialEq)]
pub struct FullScreenContext {
    state: Signal<FullScreenState>,
}

impl FullScreenContext {
    pub fn new(state: Signal<FullScreenState>) -> Self {
        Self { state }
    }

    pub fn is_full_screen(&self) -> bool {
        self.state.read().is_full_screen
    }

    pub fn window_position(&self) -> Position {
        self.state.read().window_position
    }

    /// Position without subscribing, for one-off reads such as a drag origin.
    pub fn peek_window_position(&self) -> Position {
        self.state.peek().window_position
    }

    pub fn set_full_screen(&self, is_full_screen: bool) {
        let mut state = self.state;
        if state.peek().is_full_screen != is_full_screen {
            state.write().is_full_screen = is_full_screen;
        }
    }

    pub fn toggle(&self) {
        let mut state = self.state;
        let next = state.peek().toggled();
        state.set(next);
    }

    pub fn set_window_position(&self, position: Position) {
        let mut state = self.state;
        state.write().window_position = position;
    }
}

#[component]
pub fn FullScreenProvider(#[props(default)] initial: FullScreenState, children: Element) -> Element {
    use_context_provider(move || FullScreenContext::new(Signal::new(initial)));

    rsx! {
        {children}
    }
}

/// The nearest [`FullScreenProvider`], if any. Without one, full-screen
/// toggling and position tracking are unavailable.
pub fn use_full_screen() -> Option<FullScreenContext> {
    try_use_context::<FullScreenContext>()
}
