use crate::{
    config::AppConfig,
    controller::{Message, ScreenView, UiEvent},
    models::Category,
    services::{DeviceServices, MainScreenDriver, Presenter},
};
use dioxus::prelude::*;
use dioxus_i18n::t;
use futures_util::StreamExt;
use std::time::Duration;

const TOAST_DURATION: Duration = Duration::from_secs(2);

/// Pushes driver output into the component's signals
struct SignalPresenter {
    view: Signal<ScreenView>,
    toast: Signal<Option<(u64, Message)>>,
    dialog: Signal<Option<(Message, bool)>>,
    toast_seq: u64,
}

impl Presenter for SignalPresenter {
    fn render(&mut self, view: &ScreenView) {
        self.view.set(view.clone());
    }

    fn toast(&mut self, message: Message) {
        self.toast_seq += 1;
        let id = self.toast_seq;
        let mut toast = self.toast;
        toast.set(Some((id, message)));

        // a newer toast replaces this one and owns the slot
        spawn(async move {
            tokio::time::sleep(TOAST_DURATION).await;
            let still_shown = matches!(&*toast.peek(), Some((shown, _)) if *shown == id);
            if still_shown {
                toast.set(None);
            }
        });
    }

    fn dialog(&mut self, message: Message, blocking: bool) {
        self.dialog.set(Some((message, blocking)));
    }
}

fn translate(message: &Message) -> String {
    match message {
        Message::LocationUpdated(c) | Message::MapLocationUpdated(c) => t!(
            message.key(),
            longitude: c.longitude.to_string(),
            latitude: c.latitude.to_string()
        ),
        Message::DeviceError(detail) => t!(message.key(), error: detail.clone()),
        _ => t!(message.key()),
    }
}

/// Check state of each category box, straight from the session
fn category_boxes(view: &ScreenView) -> Vec<(Category, bool)> {
    Category::all()
        .iter()
        .map(|&category| (category, view.category == Some(category)))
        .collect()
}

#[component]
pub fn MainScreen(config: AppConfig) -> Element {
    let view = use_signal(ScreenView::default);
    let toast = use_signal(|| None::<(u64, Message)>);
    let mut dialog = use_signal(|| None::<(Message, bool)>);

    // Owns the controller; events are handled strictly one after another
    let events = use_coroutine(move |mut rx: UnboundedReceiver<UiEvent>| {
        let device = DeviceServices::new(&config);
        let presenter = SignalPresenter {
            view,
            toast,
            dialog,
            toast_seq: 0,
        };
        async move {
            let mut driver = MainScreenDriver::new(device, presenter);
            driver.start();
            driver.dispatch(UiEvent::Loaded).await;
            while let Some(event) = rx.next().await {
                driver.dispatch(event).await;
            }
            log::debug!("MainScreen: event channel closed");
        }
    });

    let current = view();

    if current.splash_visible() {
        return rsx! {
            div { style: "display: flex; flex-direction: column; align-items: center; justify-content: center; height: 100vh; background: #0066cc; color: #ffffff;",
                h1 { style: "font-size: 32px; font-weight: 700;", "🍽️ " {t!("app-name")} }
                p { {t!("loading")} }
            }
        };
    }

    if current.finished {
        return rsx! {
            div { style: "padding: 48px 16px; text-align: center; color: #666;",
                {t!("screen-closed")}
            }
        };
    }

    let longitude = current.coordinates.longitude.to_string();
    let latitude = current.coordinates.latitude.to_string();

    rsx! {
        div { style: "padding: 16px; max-width: 600px; margin: 0 auto; min-height: 100vh; background: #f5f5f5; font-family: sans-serif;",
            h1 { style: "color: #0066cc; text-align: center; margin: 48px 0 24px 0; font-size: 28px; font-weight: 700;",
                "🍽️ "
                {t!("app-name")}
            }

            // Category checkboxes
            div { class: "card", style: "display: flex; justify-content: space-around;",
                for (category, checked) in category_boxes(&current) {
                    label {
                        key: "{category.as_str()}",
                        style: "display: flex; align-items: center; gap: 8px; font-size: 16px;",
                        input {
                            r#type: "checkbox",
                            checked,
                            // the box must not toggle itself; only the session decides
                            onclick: move |evt| {
                                evt.prevent_default();
                                events.send(UiEvent::CategoryClicked(category));
                            },
                        }
                        {t!(category.label_key())}
                    }
                }
            }

            div { class: "card",
                p { style: "font-size: 14px; color: #555; margin: 0;",
                    {t!("current-location", longitude: longitude, latitude: latitude)}
                }
            }

            // Actions
            div { class: "card", style: "display: flex; flex-direction: column; gap: 12px;",
                button {
                    class: "btn-primary",
                    onclick: move |_| events.send(UiEvent::CameraPressed),
                    "📷 "
                    {t!("action-camera")}
                }
                button {
                    class: "btn-primary",
                    onclick: move |_| events.send(UiEvent::GalleryPressed),
                    "🖼️ "
                    {t!("action-gallery")}
                }
                button {
                    class: "btn-primary",
                    onclick: move |_| events.send(UiEvent::IntervalShooterPressed),
                    "⏱️ "
                    {t!("action-interval-shooter")}
                }
                button {
                    class: "btn-secondary",
                    onclick: move |_| events.send(UiEvent::MapPressed),
                    "🗺️ "
                    {t!("action-map")}
                }
                button {
                    class: "btn-secondary",
                    onclick: move |_| events.send(UiEvent::ResetPressed),
                    "📍 "
                    {t!("action-reset")}
                }
            }

            if let Some((_, message)) = toast() {
                div { style: "position: fixed; left: 50%; bottom: 32px; transform: translateX(-50%); background: #333; color: #fff; padding: 10px 18px; border-radius: 20px; font-size: 14px;",
                    {translate(&message)}
                }
            }

            if let Some((message, blocking)) = dialog() {
                div { style: "position: fixed; inset: 0; background: rgba(0, 0, 0, 0.4); display: flex; align-items: center; justify-content: center;",
                    div { class: "card", style: "max-width: 320px;",
                        h2 { style: "margin: 0 0 12px 0; font-size: 18px; color: #333;",
                            {t!("app-name")}
                        }
                        p { style: if blocking { "font-size: 14px; color: #c33;" } else { "font-size: 14px; color: #555;" },
                            {translate(&message)}
                        }
                        button {
                            class: "btn-primary",
                            style: "width: 100%;",
                            onclick: move |_| {
                                dialog.set(None);
                                events.send(UiEvent::DialogDismissed);
                            },
                            {t!("okay")}
                        }
                    }
                }
            }
        }
    }
}
