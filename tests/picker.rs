use std::cell::RefCell;
use std::rc::Rc;

use floem::kurbo::{Point, Rect, Size};
use floem_tint::{
    compute_bounds, create_color_picker, ColorPicker, Element, PickerHost, PickerOptions, Rgb,
    Selection, CURSOR_MARGIN, TOGGLED_CLASS,
};
use proptest::prelude::*;

/// Host that keeps class lists the way a page would.
#[derive(Default)]
struct PageHost {
    offset: Point,
    size: Size,
    trigger_class: String,
    panel_class: String,
    attached: u32,
    detached: u32,
}

impl PageHost {
    fn new(width: f64, height: f64) -> Self {
        Self {
            offset: Point::new(40.0, 100.0),
            size: Size::new(width, height),
            trigger_class: "btn".to_string(),
            panel_class: "panel wide".to_string(),
            ..Default::default()
        }
    }
}

fn set_token(classes: &mut String, on: bool) {
    let mut tokens: Vec<&str> = classes
        .split_whitespace()
        .filter(|t| *t != TOGGLED_CLASS)
        .collect();
    if on {
        tokens.push(TOGGLED_CLASS);
    }
    *classes = tokens.join(" ");
}

impl PickerHost for PageHost {
    fn panel_offset(&self) -> Point {
        self.offset
    }

    fn surface_size(&self) -> Size {
        self.size
    }

    fn set_presentation_state(&mut self, element: Element, expanded: bool) {
        match element {
            Element::Trigger => set_token(&mut self.trigger_class, expanded),
            Element::Panel => set_token(&mut self.panel_class, expanded),
        }
    }

    fn attach_listeners(&mut self) {
        self.attached += 1;
    }

    fn detach_listeners(&mut self) {
        self.detached += 1;
    }
}

type Picks = Rc<RefCell<Vec<String>>>;

fn open_picker(options: PickerOptions) -> (ColorPicker<PageHost>, Picks) {
    let picks: Picks = Rc::default();
    let sink = picks.clone();
    let options = options.on_pick(move |hex| sink.borrow_mut().push(hex.to_string()));
    let mut picker = create_color_picker(PageHost::new(200.0, 150.0), options).unwrap();
    picker.toggle().unwrap();
    picks.borrow_mut().clear();
    (picker, picks)
}

/// Page position of a surface-local point.
fn page(picker: &ColorPicker<PageHost>, x: f64, y: f64) -> Point {
    let o = picker.host().offset;
    Point::new(x + o.x, y + o.y)
}

fn is_hash_hex(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
}

#[test]
fn documented_layout() {
    let b = compute_bounds(Size::new(200.0, 150.0), 5.0, 30.0);
    assert_eq!(b.contrast, Rect::from_origin_size((5.0, 5.0), (150.0, 140.0)));
    assert_eq!(b.tint, Rect::from_origin_size((165.0, 5.0), (30.0, 140.0)));
}

#[test]
fn construction_picks_once_and_attaches() {
    let picks: Picks = Rc::default();
    let sink = picks.clone();
    let picker = create_color_picker(
        PageHost::new(200.0, 150.0),
        PickerOptions::new().on_pick(move |hex| sink.borrow_mut().push(hex.to_string())),
    )
    .unwrap();
    assert_eq!(picks.borrow().len(), 1);
    assert!(is_hash_hex(&picks.borrow()[0]));
    assert_eq!(picks.borrow()[0], picker.color().to_string());
    assert_eq!(picker.host().attached, 1);
    assert!(!picker.is_expanded());
}

#[test]
fn contrast_click_picks_exactly_once() {
    let (mut picker, picks) = open_picker(PickerOptions::new());
    let selection = picker.handle_click(page(&picker, 10.0, 10.0)).unwrap();
    assert_eq!(selection, Selection::Contrast);
    let picks = picks.borrow();
    assert_eq!(picks.len(), 1);
    assert!(is_hash_hex(&picks[0]), "bad pick {}", picks[0]);
    assert_eq!(picks[0], picker.color().to_string());
}

#[test]
fn border_click_changes_nothing() {
    let (mut picker, picks) = open_picker(PickerOptions::new());
    let (tint, color, cursor) = (picker.tint(), picker.color(), picker.cursor());
    let before = picker.surface().canvas().clone();

    let selection = picker.handle_click(page(&picker, 0.0, 0.0)).unwrap();

    assert_eq!(selection, Selection::Ignored);
    assert!(picks.borrow().is_empty());
    assert_eq!((picker.tint(), picker.color(), picker.cursor()), (tint, color, cursor));
    assert_eq!(picker.surface().canvas(), &before);
}

#[test]
fn tint_click_repicks_at_cursor() {
    let (mut picker, picks) = open_picker(PickerOptions::new());
    picker.handle_click(page(&picker, 100.0, 40.0)).unwrap();
    let cursor = picker.cursor();
    let old_tint = picker.tint();

    // Near the top of the strip: magenta/red territory.
    let selection = picker.handle_click(page(&picker, 180.0, 10.0)).unwrap();
    assert_eq!(selection, Selection::Tint);
    assert_ne!(picker.tint(), old_tint);
    assert_eq!(picker.cursor(), cursor);
    assert_eq!(picks.borrow().len(), 2);

    let after_tint = picker.color();
    picker.select_contrast(picker.cursor()).unwrap();
    assert_eq!(picker.color(), after_tint);
}

#[test]
fn red_tint_shades_toward_red() {
    let (mut picker, _) = open_picker(PickerOptions::new());
    // Row 5 sits beside the first red stop.
    picker.select_tint(Point::new(180.0, 5.0)).unwrap();
    assert_eq!(picker.tint().r, 255);
    assert_eq!(picker.tint().g, 0);

    picker.select_contrast(Point::new(154.0, 5.0)).unwrap();
    let c = picker.color();
    assert!(c.r > 245 && c.g < 10 && c.b < 15, "got {c}");
}

#[test]
fn far_clicks_clamp_the_cursor() {
    let (mut picker, _) = open_picker(PickerOptions::new());
    picker.select_contrast(Point::new(-400.0, 900.0)).unwrap();
    let b = *picker.bounds();
    assert_eq!(
        picker.cursor(),
        Point::new(b.contrast.x0 + CURSOR_MARGIN, b.contrast.y1 - CURSOR_MARGIN)
    );
}

#[test]
fn toggling_twice_restores_classes() {
    let mut picker = create_color_picker(PageHost::new(200.0, 150.0), PickerOptions::new()).unwrap();
    let trigger = picker.host().trigger_class.clone();
    let panel = picker.host().panel_class.clone();

    picker.toggle().unwrap();
    assert!(picker.host().trigger_class.contains(TOGGLED_CLASS));
    assert!(picker.host().panel_class.contains(TOGGLED_CLASS));

    picker.toggle().unwrap();
    assert_eq!(picker.host().trigger_class, trigger);
    assert_eq!(picker.host().panel_class, panel);
}

#[test]
fn destroy_detaches_once() {
    let (mut picker, picks) = open_picker(PickerOptions::new());
    picker.destroy();
    picker.destroy();
    assert_eq!(picker.host().detached, 1);
    assert!(picker.handle_click(page(&picker, 10.0, 10.0)).is_err());
    assert!(picks.borrow().is_empty());
}

#[test]
fn custom_geometry_moves_the_strip() {
    let (mut picker, _) = open_picker(PickerOptions::new().border_width(2.0).tint_strip_width(50.0));
    let b = *picker.bounds();
    assert_eq!(b.tint, Rect::new(148.0, 2.0, 198.0, 148.0));
    assert_eq!(
        picker.handle_click(page(&picker, 150.0, 20.0)).unwrap(),
        Selection::Tint
    );
}

#[test]
fn border_color_paints_the_frame() {
    let (picker, _) = open_picker(PickerOptions::new().border_color("#336699"));
    let px = picker.surface().sample_color_at(0, 0).unwrap();
    assert_eq!(px, Rgb::new(0x33, 0x66, 0x99));
}

#[test]
fn degenerate_configuration_does_not_fail() {
    let (mut picker, picks) = open_picker(PickerOptions::new().tint_strip_width(1000.0));
    assert_eq!(picker.bounds().contrast.area(), 0.0);
    picker.handle_click(page(&picker, 20.0, 20.0)).unwrap();
    assert!(picks.borrow().iter().all(|p| is_hash_hex(p)));
}

proptest! {
    #[test]
    fn cursor_always_inside_inset_square(x in -500.0f64..700.0, y in -500.0f64..700.0) {
        let (mut picker, _) = open_picker(PickerOptions::new());
        picker.select_contrast(Point::new(x, y)).unwrap();
        let b = *picker.bounds();
        let c = picker.cursor();
        prop_assert!(c.x >= b.contrast.x0 + CURSOR_MARGIN && c.x <= b.contrast.x1 - CURSOR_MARGIN);
        prop_assert!(c.y >= b.contrast.y0 + CURSOR_MARGIN && c.y <= b.contrast.y1 - CURSOR_MARGIN);
    }

    #[test]
    fn tint_selection_never_leaves_stale_color(y in 5.0f64..145.0, cx in 5.0f64..155.0, cy in 5.0f64..145.0) {
        let (mut picker, _) = open_picker(PickerOptions::new());
        picker.select_contrast(Point::new(cx, cy)).unwrap();
        picker.select_tint(Point::new(170.0, y)).unwrap();
        let color = picker.color();
        picker.select_contrast(picker.cursor()).unwrap();
        prop_assert_eq!(picker.color(), color);
    }
}
