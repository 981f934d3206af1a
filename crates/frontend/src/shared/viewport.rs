use contracts::shared::placement::Viewport;
use leptos::ev;
use leptos::leptos_dom::helpers::window_event_listener;
use leptos::prelude::*;

/// Used when the window width cannot be read.
const FALLBACK_WIDTH_PX: u32 = 1280;

#[derive(Clone, Copy)]
struct ViewportContext(ReadSignal<Viewport>);

pub fn current_viewport() -> Viewport {
    let width = web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(width_from_px)
        .unwrap_or(FALLBACK_WIDTH_PX);
    Viewport::new(width)
}

fn width_from_px(px: f64) -> u32 {
    if px.is_finite() && px > 0.0 {
        px.min(u32::MAX as f64) as u32
    } else {
        FALLBACK_WIDTH_PX
    }
}

/// Provide a viewport signal that follows window resizes.
pub fn provide_viewport() {
    let (viewport, set_viewport) = signal(current_viewport());
    // Lives for the whole app, the handle is never removed.
    let _listener = window_event_listener(ev::resize, move |_| {
        let next = current_viewport();
        if next != viewport.get_untracked() {
            set_viewport.set(next);
        }
    });
    provide_context(ViewportContext(viewport));
}

pub fn use_viewport() -> ReadSignal<Viewport> {
    use_context::<ViewportContext>()
        .expect("ViewportContext not found in context")
        .0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_from_px() {
        assert_eq!(width_from_px(375.0), 375);
        assert_eq!(width_from_px(767.9), 767);
        assert_eq!(width_from_px(0.0), FALLBACK_WIDTH_PX);
        assert_eq!(width_from_px(f64::NAN), FALLBACK_WIDTH_PX);
    }
}
