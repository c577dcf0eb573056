//! Standalone demo: opens a window with the tint picker.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_tint::{tint_picker_with, PickerOptions, Rgb};

fn main() {
    let color = RwSignal::new(Rgb::WHITE);

    floem::Application::new()
        .window(
            move |_| {
                let options = PickerOptions::new()
                    .border_color("#202020")
                    .on_pick(|hex| println!("picked {hex}"));
                tint_picker_with(color, options)
                    .unwrap()
                    .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                        floem::quit_app()
                    })
            },
            Some(
                WindowConfig::default()
                    .size((260.0, 240.0))
                    .title("floem-tint"),
            ),
        )
        .run();
}
