//! End-to-end pattern generation tests.
//!
//! Tests verify:
//! - Generated documents contain the expected number of tiles
//! - The embedded image is a byte-exact copy of the source file
//! - MIME subtypes follow the file extension or explicit file type
//! - Failures abort generation with the matching error

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use svg_pattern::error::IoError;
use svg_pattern::{
    make_pattern, ImageSizeReader, OptimizeOptions, PatternError, PatternOptions,
    PatternService, SvgOptimizer,
};

use super::test_utils::{
    count_tiles, create_test_jpeg, create_test_png, create_test_svg, image_href,
    CountingFsSource, Fixtures, MemorySource,
};

// =============================================================================
// Reference Scenario
// =============================================================================

#[test]
fn test_png_reference_scenario() {
    let fixtures = Fixtures::new();
    let png = create_test_png(100, 50);
    let path = fixtures.write("tile.png", &png);

    let options = PatternOptions::new().with_pattern_width(200.0);
    let svg = make_pattern(&path, 1000.0, 500.0, Some(&options)).unwrap();

    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"viewBox="0 0 1000 500""#));
    assert_eq!(svg.matches("<image").count(), 1);
    assert_eq!(count_tiles(&svg), 49);
    assert!(svg.contains(r#"width="200" height="100""#));
    assert!(svg.contains(r##"<use xlink:href="#pattern" x="-100" y="-50"/>"##));

    let expected = format!("data:image/png;base64,{}", STANDARD.encode(&png));
    assert_eq!(image_href(&svg), Some(expected.as_str()));
}

#[test]
fn test_default_options() {
    let fixtures = Fixtures::new();
    let path = fixtures.write("tile.png", create_test_png(50, 50));

    let svg = make_pattern(&path, 1000.0, 1000.0, None).unwrap();

    // 500x500 tiles: floor(2000 / 500) = 4 in each direction
    assert_eq!(count_tiles(&svg), 16);
    assert!(svg.contains(r##"fill="#fff""##));
    assert!(svg.contains(r#"width="500" height="500""#));
}

#[test]
fn test_background_color() {
    let fixtures = Fixtures::new();
    let path = fixtures.write("tile.png", create_test_png(10, 10));

    let options = PatternOptions::new()
        .with_pattern_width(100.0)
        .with_background_color("#00FF00");
    let svg = make_pattern(&path, 300.0, 300.0, Some(&options)).unwrap();

    // The optimizer lowercases and shortens the color.
    assert!(svg.contains(r##"fill="#0f0""##));
}

#[test]
fn test_background_color_is_escaped() {
    let fixtures = Fixtures::new();
    let path = fixtures.write("tile.png", create_test_png(10, 10));

    let options = PatternOptions::new().with_background_color(r#"red" onload="alert(1)"#);
    let svg = make_pattern(&path, 300.0, 300.0, Some(&options)).unwrap();

    assert!(!svg.contains(r#"onload="alert(1)""#));
    assert!(svg.contains("&quot;"));
}

#[test]
fn test_offset_adds_tiles() {
    let fixtures = Fixtures::new();
    let path = fixtures.write("tile.png", create_test_png(100, 100));

    let plain = PatternOptions::new().with_pattern_width(100.0);
    let overlapped = plain.clone().with_pattern_offset(50.0, 50.0);

    let without = make_pattern(&path, 400.0, 400.0, Some(&plain)).unwrap();
    let with = make_pattern(&path, 400.0, 400.0, Some(&overlapped)).unwrap();

    assert_eq!(count_tiles(&without), 36);
    assert_eq!(count_tiles(&with), 144);
}

#[test]
fn test_fractional_tile_height_is_rounded() {
    let fixtures = Fixtures::new();
    let path = fixtures.write("tile.png", create_test_png(3, 1));

    let options = PatternOptions::new().with_pattern_width(100.0);
    let svg = make_pattern(&path, 200.0, 100.0, Some(&options)).unwrap();

    assert!(svg.contains(r#"height="33.333""#));
}

// =============================================================================
// Source Formats
// =============================================================================

#[test]
fn test_jpeg_source() {
    let fixtures = Fixtures::new();
    let jpeg = create_test_jpeg(64, 32, 80);
    let path = fixtures.write("tile.jpeg", &jpeg);

    let options = PatternOptions::new().with_pattern_width(64.0);
    let svg = make_pattern(&path, 128.0, 64.0, Some(&options)).unwrap();

    let expected = format!("data:image/jpeg;base64,{}", STANDARD.encode(&jpeg));
    assert_eq!(image_href(&svg), Some(expected.as_str()));
    assert!(svg.contains(r#"width="64" height="32""#));
}

#[test]
fn test_uppercase_extension() {
    let fixtures = Fixtures::new();
    let path = fixtures.write("TILE.PNG", create_test_png(10, 10));

    let svg = make_pattern(&path, 100.0, 100.0, None).unwrap();
    assert!(svg.contains("data:image/png;base64,"));
}

#[test]
fn test_svg_source_uses_svg_xml_subtype() {
    let fixtures = Fixtures::new();
    let source = create_test_svg(40, 20);
    let path = fixtures.write("logo.svg", &source);

    let options = PatternOptions::new().with_pattern_width(80.0);
    let svg = make_pattern(&path, 800.0, 400.0, Some(&options)).unwrap();

    let expected = format!("data:image/svg+xml;base64,{}", STANDARD.encode(source.as_bytes()));
    assert_eq!(image_href(&svg), Some(expected.as_str()));
    assert!(svg.contains(r#"width="80" height="40""#));
}

#[test]
fn test_explicit_file_type_overrides_extension() {
    let fixtures = Fixtures::new();
    let path = fixtures.write("tile.bin", create_test_png(10, 10));

    let options = PatternOptions::new().with_file_type("png");
    let svg = make_pattern(&path, 100.0, 100.0, Some(&options)).unwrap();
    assert!(svg.contains("data:image/png;base64,"));
}

// =============================================================================
// Error Handling
// =============================================================================

#[test]
fn test_missing_extension() {
    let fixtures = Fixtures::new();
    let path = fixtures.write("tile", create_test_png(10, 10));

    let result = make_pattern(&path, 100.0, 100.0, None);
    assert!(matches!(result, Err(PatternError::UnknownExtension(_))));
}

#[test]
fn test_missing_file() {
    let fixtures = Fixtures::new();
    let path = fixtures.path("absent.png");

    let result = make_pattern(&path, 100.0, 100.0, None);
    assert!(matches!(
        result,
        Err(PatternError::FileRead(IoError::NotFound(_)))
    ));
}

#[test]
fn test_not_an_image() {
    let fixtures = Fixtures::new();
    let path = fixtures.write("notes.png", "just some text");

    let result = make_pattern(&path, 100.0, 100.0, None);
    assert!(matches!(result, Err(PatternError::ImageRead { .. })));
}

#[test]
fn test_zero_width_svg() {
    let fixtures = Fixtures::new();
    let path = fixtures.write(
        "empty.svg",
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="0" height="50"/>"#,
    );

    let result = make_pattern(&path, 100.0, 100.0, None);
    assert!(matches!(result, Err(PatternError::ImageRead { .. })));
}

#[test]
fn test_invalid_canvas() {
    let fixtures = Fixtures::new();
    let path = fixtures.write("tile.png", create_test_png(10, 10));

    let result = make_pattern(&path, 0.0, 100.0, None);
    assert!(matches!(result, Err(PatternError::InvalidCanvas { .. })));
}

#[test]
fn test_offset_equal_to_tile_size() {
    let fixtures = Fixtures::new();
    let path = fixtures.write("tile.png", create_test_png(10, 10));

    let options = PatternOptions::new()
        .with_pattern_width(100.0)
        .with_pattern_offset(0.0, 100.0);
    let result = make_pattern(&path, 100.0, 100.0, Some(&options));
    assert!(matches!(result, Err(PatternError::InvalidOffset { .. })));
}

#[test]
fn test_too_many_tiles() {
    let fixtures = Fixtures::new();
    let path = fixtures.write("tile.png", create_test_png(10, 10));

    let options = PatternOptions::new().with_pattern_width(1.0);
    let result = make_pattern(&path, 10_000.0, 10_000.0, Some(&options));
    assert!(matches!(result, Err(PatternError::TooManyTiles { .. })));
}

// =============================================================================
// Service Behavior
// =============================================================================

#[test]
fn test_service_reads_source_once() {
    let source = MemorySource::new().with_file("tile.png", create_test_png(100, 50));
    let service = PatternService::with_sources(source.clone(), source.clone());

    let options = PatternOptions::new().with_pattern_width(200.0);
    let svg = service
        .make_pattern("tile.png", 1000.0, 500.0, &options)
        .unwrap();

    assert_eq!(count_tiles(&svg), 49);
    assert_eq!(source.byte_reads(), 1);
    assert_eq!(source.size_reads(), 1);
}

#[test]
fn test_file_system_source_read_once() {
    let fixtures = Fixtures::new();
    let png = create_test_png(100, 50);
    let path = fixtures.write("tile.png", &png);

    let bytes = CountingFsSource::new();
    let service = PatternService::with_sources(bytes.clone(), ImageSizeReader::new());

    let options = PatternOptions::new().with_pattern_width(200.0);
    let svg = service.make_pattern(&path, 1000.0, 500.0, &options).unwrap();

    assert_eq!(bytes.reads(), 1);
    let expected = format!("data:image/png;base64,{}", STANDARD.encode(&png));
    assert_eq!(image_href(&svg), Some(expected.as_str()));
}

#[test]
fn test_failed_layout_reads_once() {
    let source = MemorySource::new().with_file("tile", create_test_png(100, 50));
    let service = PatternService::with_sources(source.clone(), source.clone());

    let result = service.make_pattern("tile", 1000.0, 500.0, &PatternOptions::default());
    assert!(matches!(result, Err(PatternError::UnknownExtension(_))));
    assert_eq!(source.byte_reads(), 1);
}

#[test]
fn test_service_is_reusable() {
    let source = MemorySource::new()
        .with_file("a.png", create_test_png(10, 10))
        .with_file("b.svg", create_test_svg(20, 10));
    let service = PatternService::with_sources(source.clone(), source);

    let a = service
        .make_pattern("a.png", 100.0, 100.0, &PatternOptions::default())
        .unwrap();
    let b = service
        .make_pattern("b.svg", 100.0, 100.0, &PatternOptions::default())
        .unwrap();

    assert!(a.contains("data:image/png;base64,"));
    assert!(b.contains("data:image/svg+xml;base64,"));
}

#[test]
fn test_render_document_is_unoptimized() {
    let source = MemorySource::new().with_file("tile.png", create_test_png(100, 50));
    let service = PatternService::with_sources(source.clone(), source);
    let options = PatternOptions::new().with_pattern_width(200.0);

    let raw = service
        .render_document("tile.png", 1000.0, 500.0, &options)
        .unwrap();
    let optimized = service
        .make_pattern("tile.png", 1000.0, 500.0, &options)
        .unwrap();

    assert!(raw.contains('\n'));
    assert!(!optimized.contains('\n'));
    assert_eq!(count_tiles(&raw), count_tiles(&optimized));
    assert_eq!(service.optimizer().optimize(&raw).unwrap(), optimized);
}

#[test]
fn test_optimizer_is_idempotent_on_output() {
    let source = MemorySource::new().with_file("tile.png", create_test_png(3, 1));
    let service = PatternService::with_sources(source.clone(), source);
    let options = PatternOptions::new()
        .with_pattern_width(100.0)
        .with_pattern_offset(12.5, 0.25);

    let svg = service
        .make_pattern("tile.png", 640.0, 480.0, &options)
        .unwrap();
    assert_eq!(service.optimizer().optimize(&svg).unwrap(), svg);
}

#[test]
fn test_custom_optimizer_precision() {
    let source = MemorySource::new().with_file("tile.png", create_test_png(3, 1));
    let optimizer = SvgOptimizer::with_options(OptimizeOptions {
        precision: Some(1),
        ..OptimizeOptions::default()
    });
    let service = PatternService::with_sources(source.clone(), source).with_optimizer(optimizer);

    let options = PatternOptions::new().with_pattern_width(100.0);
    let svg = service
        .make_pattern("tile.png", 200.0, 100.0, &options)
        .unwrap();
    assert!(svg.contains(r#"height="33.3""#));
}
