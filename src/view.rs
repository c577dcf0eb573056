//! Floem host for the picker.
//!
//! A trigger swatch toggles a panel holding [`PickerCanvas`], a custom view
//! that shows the picker surface as an image and feeds pointer presses to the
//! controller. The surface is re-uploaded only after it changed.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use floem::kurbo::{Point, Rect, Size};
use floem::peniko::{self, Blob};
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;
use tracing::error;

use crate::color::Rgb;
use crate::config::PickerOptions;
use crate::constants;
use crate::picker::{
    create_color_picker, ColorPicker, Element, PickerError, PickerHost, Selection,
};

type SharedPicker = Rc<RefCell<ColorPicker<FloemHost>>>;

/// Presentation state lives in signals; styles read them to show or hide.
pub(crate) struct FloemHost {
    trigger_toggled: RwSignal<bool>,
    panel_toggled: RwSignal<bool>,
    size: Size,
}

impl PickerHost for FloemHost {
    fn panel_offset(&self) -> Point {
        // Floem hands views positions in their own coordinates.
        Point::ZERO
    }

    fn surface_size(&self) -> Size {
        self.size
    }

    fn set_presentation_state(&mut self, element: Element, expanded: bool) {
        match element {
            Element::Trigger => self.trigger_toggled.set(expanded),
            Element::Panel => self.panel_toggled.set(expanded),
        }
    }
}

/// Builds the trigger + panel pair. `color` follows every pick.
pub(crate) fn tint_picker(
    color: RwSignal<Rgb>,
    mut options: PickerOptions,
) -> Result<impl IntoView, PickerError> {
    let trigger_toggled = RwSignal::new(false);
    let panel_toggled = RwSignal::new(false);

    let mut forward = options.on_pick.take();
    options.on_pick = Some(Box::new(move |hex: &str| {
        if let Some(rgb) = Rgb::from_hex(hex) {
            color.set(rgb);
        }
        if let Some(cb) = forward.as_mut() {
            cb(hex);
        }
    }));

    let host = FloemHost {
        trigger_toggled,
        panel_toggled,
        size: Size::new(constants::PANEL_WIDTH, constants::PANEL_HEIGHT),
    };
    let picker: SharedPicker = Rc::new(RefCell::new(create_color_picker(host, options)?));

    Ok(v_stack((
        trigger(picker.clone(), color, trigger_toggled),
        picker_canvas(picker).style(move |s| {
            s.width(constants::PANEL_WIDTH as f32)
                .height(constants::PANEL_HEIGHT as f32)
                .cursor(floem::style::CursorStyle::Default)
                .apply_if(!panel_toggled.get(), |s| s.hide())
        }),
    ))
    .style(|s| s.gap(constants::GAP).items_start()))
}

fn trigger(picker: SharedPicker, color: RwSignal<Rgb>, toggled: RwSignal<bool>) -> impl IntoView {
    h_stack((
        empty().style(move |s| {
            let c = color.get();
            s.width(constants::SWATCH_SIZE)
                .height(constants::SWATCH_SIZE)
                .border_radius(4.0)
                .border(1.0)
                .border_color(Color::rgb8(180, 180, 180))
                .background(Color::rgb8(c.r, c.g, c.b))
        }),
        label(|| lucide_icons::Icon::Pipette.unicode().to_string()).style(|s| {
            s.font_size(16.0)
                .font_family("lucide".to_string())
                .color(Color::rgb8(120, 120, 120))
        }),
    ))
    .style(move |s| {
        s.gap(4.0)
            .padding(4.0)
            .items_center()
            .border_radius(4.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(235, 235, 235)))
            .apply_if(toggled.get(), |s| s.background(Color::rgb8(225, 225, 225)))
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        if let Err(err) = picker.borrow_mut().toggle() {
            error!(%err, "color picker toggle failed");
        }
    })
}

pub(crate) struct PickerCanvas {
    id: ViewId,
    picker: SharedPicker,
    size: floem::taffy::prelude::Size<f32>,
    /// Last uploaded copy of the surface.
    img: Option<peniko::Image>,
    img_hash: Vec<u8>,
    dirty: bool,
}

fn picker_canvas(picker: SharedPicker) -> PickerCanvas {
    PickerCanvas {
        id: ViewId::new(),
        picker,
        size: Default::default(),
        img: None,
        img_hash: Vec::new(),
        dirty: true,
    }
}

impl PickerCanvas {
    fn ensure_image(&mut self) {
        if !self.dirty && self.img.is_some() {
            return;
        }
        let (pixels, w, h) = {
            let picker = self.picker.borrow();
            let canvas = picker.surface().canvas();
            (canvas.pixels().to_vec(), canvas.width(), canvas.height())
        };
        if w == 0 || h == 0 {
            self.img = None;
            return;
        }

        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, w, h);
        self.img_hash = blob.id().to_le_bytes().to_vec();
        self.img = Some(img);
        self.dirty = false;
    }
}

impl View for PickerCanvas {
    fn id(&self) -> ViewId {
        self.id
    }

    fn event_before_children(&mut self, _cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                let result = self.picker.borrow_mut().handle_click(e.pos);
                match result {
                    Ok(Selection::Ignored) => EventPropagation::Continue,
                    Ok(_) => {
                        self.dirty = true;
                        self.id.request_paint();
                        EventPropagation::Stop
                    }
                    Err(err) => {
                        error!(%err, "color picker selection failed");
                        EventPropagation::Continue
                    }
                }
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        // A hidden panel lays out at zero size; keep the last surface.
        if layout.size == self.size || layout.size.width < 1.0 || layout.size.height < 1.0 {
            return None;
        }
        self.size = layout.size;

        let size = Size::new(
            (self.size.width as f64).floor(),
            (self.size.height as f64).floor(),
        );
        let mut picker = self.picker.borrow_mut();
        if picker.surface().size() != size {
            picker.host_mut().size = size;
            if let Err(err) = picker.resize(size) {
                error!(%err, "color picker resize failed");
            }
            self.dirty = true;
        }
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }

        self.ensure_image();
        if let Some(ref img) = self.img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.img_hash,
                },
                Rect::new(0.0, 0.0, w, h),
            );
        }
    }
}
