pub mod demo;
pub mod lifecycle;
pub mod project;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

use self::lifecycle::{DismissTrigger, ModalLifecycle};

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: String,
    pub on_close: Callback<()>,
    pub children: Children,
}

/// Overlay dialog shared by the demo-reel and project modals. Dismissed by
/// the close button, a click on the backdrop, or Escape; clicks inside the
/// dialog stop propagating before they reach the backdrop handler. All
/// three triggers funnel through one [`ModalLifecycle`] guard so
/// `on_close` fires exactly once per instance. The document-level Escape
/// listener is removed when the component unmounts.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let lifecycle = use_mut_ref(ModalLifecycle::new);

    let dismiss = {
        let lifecycle = lifecycle.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |trigger: DismissTrigger| {
            if lifecycle.borrow_mut().dismiss(trigger) {
                on_close.emit(());
            }
        })
    };

    {
        let dismiss = dismiss.clone();
        use_effect_with_deps(
            move |_| {
                let listener = Closure::<dyn FnMut(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                    if e.key() == "Escape" {
                        dismiss.emit(DismissTrigger::EscapeKey);
                    }
                });
                let document = web_sys::window().and_then(|w| w.document());
                if let Some(document) = &document {
                    let _ = document.add_event_listener_with_callback(
                        "keydown",
                        listener.as_ref().unchecked_ref(),
                    );
                }
                move || {
                    if let Some(document) = document {
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                    drop(listener);
                }
            },
            (),
        );
    }

    let on_backdrop_click = {
        let dismiss = dismiss.clone();
        Callback::from(move |_: MouseEvent| dismiss.emit(DismissTrigger::Backdrop))
    };

    let on_close_click = {
        let dismiss = dismiss.clone();
        Callback::from(move |_: MouseEvent| dismiss.emit(DismissTrigger::CloseButton))
    };

    html! {
        <div class="modal-overlay" onclick={on_backdrop_click}>
            <style>
            {r#".modal-overlay {
                position: fixed;
                top: 0;
                left: 0;
                width: 100%;
                height: 100%;
                background: rgba(0, 0, 0, 0.8);
                backdrop-filter: blur(5px);
                z-index: 10000;
                display: flex;
                align-items: center;
                justify-content: center;
            }
            .modal-content {
                position: relative;
                background: var(--color-surface);
                border-radius: 15px;
                max-width: 600px;
                width: 90%;
                max-height: 90%;
                border: 1px solid var(--color-border);
                animation: modalSlideIn 0.3s ease-out;
            }
            .modal-header {
                display: flex;
                justify-content: space-between;
                align-items: center;
                padding: 20px;
                border-bottom: 1px solid var(--color-border);
            }
            .modal-header h3 {
                margin: 0;
            }
            .close-modal {
                background: none;
                border: none;
                font-size: 30px;
                color: var(--color-text);
                cursor: pointer;
                padding: 0;
                width: 30px;
                height: 30px;
                display: flex;
                align-items: center;
                justify-content: center;
                transition: color 0.3s ease;
            }
            .close-modal:hover {
                color: var(--color-primary);
            }
            .modal-body {
                padding: 30px 20px;
                text-align: center;
                max-height: 60vh;
                overflow-y: auto;
            }
            @keyframes modalSlideIn {
                from {
                    opacity: 0;
                    transform: translateY(-50px) scale(0.9);
                }
                to {
                    opacity: 1;
                    transform: translateY(0) scale(1);
                }
            }"#}
            </style>
            <div class="modal-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <div class="modal-header">
                    <h3>{ props.title.clone() }</h3>
                    <button class="close-modal" onclick={on_close_click}>{"\u{00d7}"}</button>
                </div>
                <div class="modal-body">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}
