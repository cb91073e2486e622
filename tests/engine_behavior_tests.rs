use approx::assert_abs_diff_eq;
use ruler_rs::api::{RulerEngine, RulerEngineConfig};
use ruler_rs::core::{ContainerBounds, ImageSize};
use ruler_rs::decode::ImageDecoder;
use ruler_rs::error::{RulerError, RulerResult};
use ruler_rs::render::NullRenderer;

const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G'];

/// Test decoder: accepts a fake PNG header followed by two dimension bytes.
struct HeaderProbe;

impl ImageDecoder for HeaderProbe {
    fn probe(&self, bytes: &[u8]) -> RulerResult<ImageSize> {
        if bytes.len() < 6 || &bytes[..4] != PNG_MAGIC {
            return Err(RulerError::UnsupportedFileType(
                "not an image".to_owned(),
            ));
        }
        Ok(ImageSize::new(
            u32::from(bytes[4]) * 100,
            u32::from(bytes[5]) * 100,
        ))
    }
}

fn new_engine() -> RulerEngine<NullRenderer> {
    let config = RulerEngineConfig::new(ContainerBounds::new(400.0, 300.0));
    RulerEngine::new(NullRenderer::default(), config).expect("engine init")
}

#[test]
fn loading_an_image_resets_the_session() {
    let mut engine = new_engine();
    engine
        .load_image(ImageSize::new(800, 600))
        .expect("first image");
    engine.click(100.0).expect("click");
    engine.pointer_move(50.0);
    assert_eq!(engine.rulers().len(), 1);

    engine
        .load_image(ImageSize::new(400, 400))
        .expect("second image");
    assert!(engine.rulers().is_empty());
    assert!(!engine.pointer().preview().visible);
    assert_eq!(engine.image(), Some(ImageSize::new(400, 400)));
}

#[test]
fn rejected_image_leaves_state_untouched() {
    let mut engine = new_engine();
    engine
        .load_image(ImageSize::new(800, 600))
        .expect("valid image");
    engine.click(100.0).expect("click");

    let result = engine.load_image(ImageSize::new(0, 600));
    assert!(matches!(result, Err(RulerError::InvalidImage { .. })));
    assert_eq!(engine.image(), Some(ImageSize::new(800, 600)));
    assert_eq!(engine.rulers().len(), 1);
}

#[test]
fn decoder_seam_loads_probed_dimensions() {
    let mut engine = new_engine();

    let mut bytes = PNG_MAGIC.to_vec();
    bytes.extend_from_slice(&[8, 6]);
    let image = engine
        .load_image_bytes(&HeaderProbe, &bytes)
        .expect("decode");

    assert_eq!(image, ImageSize::new(800, 600));
    assert_eq!(engine.image(), Some(image));
}

#[test]
fn failed_decode_leaves_state_untouched() {
    let mut engine = new_engine();
    engine
        .load_image(ImageSize::new(800, 600))
        .expect("valid image");
    engine.click(100.0).expect("click");

    let result = engine.load_image_bytes(&HeaderProbe, b"plain text");
    assert!(matches!(result, Err(RulerError::UnsupportedFileType(_))));
    assert_eq!(engine.image(), Some(ImageSize::new(800, 600)));
    assert_eq!(engine.rulers().len(), 1);
}

#[test]
fn resize_recomputes_fit_but_keeps_rulers() {
    let mut engine = new_engine();
    engine
        .load_image(ImageSize::new(800, 600))
        .expect("image load");
    engine.click(100.0).expect("click");
    let before = engine.rulers().to_vec();
    assert_abs_diff_eq!(
        engine.fit_scale().expect("fit").scale(),
        0.5,
        epsilon = 1e-12
    );

    engine
        .resize(ContainerBounds::new(800.0, 600.0))
        .expect("resize");
    assert_abs_diff_eq!(
        engine.fit_scale().expect("fit").scale(),
        1.0,
        epsilon = 1e-12
    );
    assert_eq!(engine.rulers(), &before[..]);

    // The same ruler now projects to a new display position.
    let display_y = engine
        .fit_scale()
        .expect("fit")
        .image_to_display(f64::from(before[0].y))
        .expect("projection");
    assert_abs_diff_eq!(display_y, 200.0, epsilon = 1e-9);
}

#[test]
fn invalid_resize_is_rejected_without_mutation() {
    let mut engine = new_engine();
    engine
        .load_image(ImageSize::new(800, 600))
        .expect("image load");

    let result = engine.resize(ContainerBounds::new(-1.0, 300.0));
    assert!(matches!(result, Err(RulerError::InvalidBounds { .. })));
    assert_eq!(engine.bounds(), ContainerBounds::new(400.0, 300.0));
}

#[test]
fn resize_before_image_load_applies_to_next_fit() {
    let mut engine = new_engine();
    engine
        .resize(ContainerBounds::new(200.0, 200.0))
        .expect("resize");
    engine
        .load_image(ImageSize::new(400, 400))
        .expect("image load");

    assert_abs_diff_eq!(
        engine.fit_scale().expect("fit").scale(),
        0.5,
        epsilon = 1e-12
    );
}

#[test]
fn invalid_config_is_rejected() {
    let config = RulerEngineConfig::new(ContainerBounds::new(0.0, 300.0));
    assert!(RulerEngine::new(NullRenderer::default(), config).is_err());
}
