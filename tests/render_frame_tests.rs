use ruler_rs::api::{RulerEngine, RulerEngineConfig};
use ruler_rs::core::{ContainerBounds, ImageSize};
use ruler_rs::render::{Color, LinePrimitive, NullRenderer, RenderFrame, TextHAlign, TextPrimitive};

fn engine_with_image() -> RulerEngine<NullRenderer> {
    let config = RulerEngineConfig::new(ContainerBounds::new(250.0, 500.0));
    let mut engine = RulerEngine::new(NullRenderer::default(), config).expect("engine init");
    engine
        .load_image(ImageSize::new(500, 1000))
        .expect("image load");
    engine
}

#[test]
fn frame_carries_one_line_and_label_per_ruler() {
    let mut engine = engine_with_image();
    engine.click(100.0).expect("first click");
    engine.click(150.0).expect("second click");
    engine.render().expect("render");

    let renderer = engine.into_renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_line_count, 2);
    assert_eq!(renderer.last_text_count, 2);
}

#[test]
fn visible_preview_adds_one_line() {
    let mut engine = engine_with_image();
    engine.click(100.0).expect("click");
    engine.pointer_move(150.0);
    engine.render().expect("render");

    let renderer = engine.into_renderer();
    assert_eq!(renderer.last_line_count, 2);
    assert_eq!(renderer.last_text_count, 1);
}

#[test]
fn hidden_preview_adds_nothing() {
    let mut engine = engine_with_image();
    engine.click(100.0).expect("click");
    engine.pointer_move(150.0);
    engine.pointer_leave();
    engine.render().expect("render");

    let renderer = engine.into_renderer();
    assert_eq!(renderer.last_line_count, 1);
}

#[test]
fn empty_surface_is_rejected() {
    let frame = RenderFrame::new(0.0, 100.0);
    assert!(frame.validate().is_err());
}

#[test]
fn frame_builders_accumulate_primitives() {
    let line = LinePrimitive::new(0.0, 10.0, 100.0, 10.0, 1.0, Color::rgb(1.0, 0.0, 0.0));
    let text = TextPrimitive::new(
        "y: 10px",
        110.0,
        4.0,
        12.0,
        Color::rgb(0.9, 0.9, 0.9),
        TextHAlign::Left,
    );

    let frame = RenderFrame::new(100.0, 50.0).with_line(line).with_text(text);
    assert!(!frame.is_empty());
    frame.validate().expect("valid frame");
}

#[test]
fn non_finite_line_is_rejected() {
    let line = LinePrimitive::new(0.0, f64::NAN, 100.0, 10.0, 1.0, Color::rgb(1.0, 0.0, 0.0));
    assert!(line.validate().is_err());

    let flat = LinePrimitive::new(0.0, 10.0, 100.0, 10.0, 0.0, Color::rgb(1.0, 0.0, 0.0));
    assert!(flat.validate().is_err());
}

#[test]
fn empty_label_is_rejected() {
    let text = TextPrimitive::new(
        "",
        0.0,
        0.0,
        12.0,
        Color::rgb(0.9, 0.9, 0.9),
        TextHAlign::Left,
    );
    assert!(text.validate().is_err());
}

#[test]
fn out_of_range_color_is_rejected() {
    assert!(Color::rgba(1.5, 0.0, 0.0, 1.0).validate().is_err());
    assert!(Color::rgba(0.5, 0.0, 0.0, -0.1).validate().is_err());
    assert!(Color::rgb(0.2, 0.4, 0.6).validate().is_ok());
}
