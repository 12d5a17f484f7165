use dioxus::prelude::*;
use gloo_events::EventListener;
use taskboard_core::TaskForm;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

/// Closes `form` on Escape through a document-level `keydown` listener.
///
/// The listener exists only while the form is visible: it is registered when the
/// form is shown and dropped (which deregisters it) when the form is hidden or
/// the owning component unmounts.
pub fn use_escape_to_close(form: Signal<TaskForm>, on_close: EventHandler<()>) {
    let mut registration = use_signal(|| None::<EventListener>);

    use_effect(move || {
        if !form.read().is_visible() {
            if registration.peek().is_some() {
                tracing::trace!("releasing escape listener");
                registration.set(None);
            }
            return;
        }
        if registration.peek().is_some() {
            return;
        }

        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            tracing::warn!("no document available, escape key will not close the form");
            return;
        };
        let listener = EventListener::new(&document, "keydown", move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if form.peek().handle_key(&event.key()) {
                on_close.call(());
            }
        });
        tracing::trace!("escape listener registered");
        registration.set(Some(listener));
    });

    use_drop(move || {
        if let Ok(mut registration) = registration.try_write() {
            registration.take();
        }
    });
}
