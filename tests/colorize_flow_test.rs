//! End-to-end flow tests: capture file in, colorized PNG out.

mod common;

use lecroy_colorize::assets::AssetLoader;
use lecroy_colorize::error::AppError;
use lecroy_colorize::models::SettingsFile;
use lecroy_colorize::rendering::{decode_file, EncodeOptions};
use lecroy_colorize::services::{ColorizeService, GridLibrary};
use scope_recolor::{ColorizeError, Rect, Rgb};

use common::fixtures::{
    add_vertical_trace, blank, capture_for, center_column, center_row, default_settings,
};
use common::{assert_canvas, assert_pixel, assert_png, DataDir};

#[test]
fn test_every_default_layout_round_trips_through_files() {
    let settings = default_settings();
    let data = DataDir::new(&settings);
    let service = ColorizeService::new(&settings, GridLibrary::new(data.path()));
    let colors = settings.colors();

    for layout in settings.layouts() {
        let mut capture = capture_for(layout);
        let trace_x = add_vertical_trace(&mut capture, layout);
        let input = data.write_capture(&format!("{}-in.png", layout.id), &capture);
        let output = data.path().join(format!("{}-out.png", layout.id));

        let result = service.colorize_file(&input, &output).unwrap();
        assert_eq!(result.layout_id, layout.id);
        assert_eq!(result.reconstructed, 1, "layout {}", layout.id);

        assert_png(&std::fs::read(&output).unwrap());
        let img = decode_file(&output).unwrap();
        assert_canvas(&img);

        let b = layout.grid_boxes[0];
        let cy = center_row(b);
        assert_pixel(&img, trace_x, cy - 10, colors.trace);
        assert_pixel(&img, trace_x, cy, colors.trace_reconstruction);
        assert_pixel(&img, center_column(b), b.y0 + 5, colors.grid);
        assert_pixel(&img, trace_x + 3, cy - 10, colors.grid_background);
        assert_pixel(&img, 60, 200, colors.background);
    }
}

#[test]
fn test_no_reconstruction_leaves_crossing_as_grid() {
    let settings = default_settings();
    let data = DataDir::new(&settings);
    let service =
        ColorizeService::new(&settings, GridLibrary::new(data.path())).reconstruct(false);
    let layout = settings.layout("single").unwrap();

    let mut capture = capture_for(layout);
    let trace_x = add_vertical_trace(&mut capture, layout);
    let result = service.colorize_image(&capture).unwrap();

    assert_eq!(result.reconstructed, 0);
    assert!(result
        .image
        .pixels()
        .all(|p| p != settings.colors().trace_reconstruction));
    assert_pixel(
        &result.image,
        trace_x,
        center_row(layout.grid_boxes[0]),
        settings.colors().grid,
    );
}

#[test]
fn test_traces_crossing_box_frames_are_not_reconstructed() {
    let settings = default_settings();
    let data = DataDir::new(&settings);
    let service = ColorizeService::new(&settings, GridLibrary::new(data.path()));
    let layout = settings.layout("single").unwrap();
    let b = layout.grid_boxes[0];
    let colors = settings.colors();

    let mut capture = capture_for(layout);
    // vertical trace through the bottom frame, horizontal one through the right frame
    let x = center_column(b) - 100;
    capture.fill_rect(Rect::new(x, b.y1 - 8, x + 1, b.y1 + 4), Rgb::BLACK);
    let y = b.y0 + 60;
    capture.fill_rect(Rect::new(b.x1 - 8, y, b.x1 + 4, y + 1), Rgb::BLACK);

    let result = service.colorize_image(&capture).unwrap();
    assert_eq!(result.layout_id, "single");
    assert_eq!(result.reconstructed, 0);
    assert_pixel(&result.image, x, b.y1 - 4, colors.trace);
    assert_pixel(&result.image, x, b.y1 - 1, colors.grid);
    assert_pixel(&result.image, b.x1 - 1, y, colors.grid);
}

#[test]
fn test_optimized_output_decodes_identically() {
    let settings = default_settings();
    let data = DataDir::new(&settings);
    let layout = settings.layout("dual").unwrap();
    let input = data.write_capture("dual.png", &capture_for(layout));

    let plain_out = data.path().join("plain.png");
    let small_out = data.path().join("small.png");
    ColorizeService::new(&settings, GridLibrary::new(data.path()))
        .colorize_file(&input, &plain_out)
        .unwrap();
    ColorizeService::new(&settings, GridLibrary::new(data.path()))
        .encode_options(EncodeOptions { optimize: true })
        .colorize_file(&input, &small_out)
        .unwrap();

    assert_png(&std::fs::read(&small_out).unwrap());
    assert_eq!(decode_file(&plain_out).unwrap(), decode_file(&small_out).unwrap());
}

#[test]
fn test_param_layout_regions() {
    let settings = default_settings();
    let data = DataDir::new(&settings);
    let service = ColorizeService::new(&settings, GridLibrary::new(data.path()));
    let layout = settings.layout("param").unwrap();
    let strip = settings.delay_strip(layout);

    let mut capture = capture_for(layout);
    // text in the parameter table and the delay strip
    capture.fill_rect(Rect::new(300, 500, 320, 510), Rgb::BLACK);
    capture.set_pixel(300, strip.y0, Rgb::BLACK);
    capture.set_pixel(300, strip.y1, Rgb::BLACK);

    let img = service.colorize_image(&capture).unwrap().image;
    let parameters = layout
        .optional_regions
        .iter()
        .find(|r| r.name == "parameters")
        .unwrap();
    assert_pixel(&img, 310, 505, parameters.color);
    assert_pixel(&img, 300, strip.y0, settings.colors().delay_strip);
    // the gap between strip and parameter table has no region
    assert_pixel(&img, 300, strip.y1, Rgb::BLACK);
}

#[test]
fn test_label_boxes_colored() {
    let settings = default_settings();
    let data = DataDir::new(&settings);
    let service = ColorizeService::new(&settings, GridLibrary::new(data.path()));
    let layout = settings.layout("single").unwrap();
    let detection = settings.box_detection();

    let mut capture = capture_for(layout);
    let cx = detection.channel.x0;
    capture.fill_rect(Rect::new(cx, 100, cx + 1, 160), Rgb::BLACK);
    capture.set_pixel(cx + 40, 130, Rgb::BLACK);
    let mx = detection.menu.x0;
    capture.fill_rect(Rect::new(mx, 300, mx + 1, 350), Rgb::BLACK);
    capture.set_pixel(mx + 40, 330, Rgb::BLACK);

    let result = service.colorize_image(&capture).unwrap();
    assert_eq!(result.channel_boxes, vec![Rect::new(cx + 1, 100, cx + 127, 160)]);
    assert_eq!(result.menu_boxes, vec![Rect::new(mx + 1, 300, mx + 137, 350)]);

    let colors = settings.colors();
    assert_pixel(&result.image, cx + 40, 130, colors.channel_text);
    assert_pixel(&result.image, cx + 40, 140, colors.channel_background);
    assert_pixel(&result.image, mx + 40, 330, colors.menu_text);
    assert_pixel(&result.image, mx + 40, 340, colors.menu_background);
}

#[test]
fn test_identify_reports_layout_and_boxes() {
    let settings = default_settings();
    let data = DataDir::new(&settings);
    let layout = settings.layout("xy").unwrap();
    let mut capture = capture_for(layout);
    let cx = settings.box_detection().channel.x0;
    capture.fill_rect(Rect::new(cx, 200, cx + 1, 240), Rgb::BLACK);
    let input = data.write_capture("xy.png", &capture);

    // identify needs no grid bitmaps
    let service = ColorizeService::new(&settings, GridLibrary::new("/nonexistent"));
    let id = service.identify_file(&input).unwrap();
    assert_eq!(id.layout, "xy");
    assert_eq!(id.kind, "xy");
    assert_eq!(id.channel_boxes, vec![[cx + 1, 200, cx + 127, 240]]);
    assert!(id.menu_boxes.is_empty());
    assert_eq!(id.file, input.display().to_string());
}

#[test]
fn test_missing_grid_bitmap_names_layout() {
    let settings = default_settings();
    let data = DataDir::new(&settings);
    let layout = settings.layout("quad").unwrap();
    std::fs::remove_file(data.path().join(&layout.grid_image.file)).unwrap();

    let service = ColorizeService::new(&settings, GridLibrary::new(data.path()));
    let err = service.colorize_image(&capture_for(layout)).unwrap_err();
    match err {
        AppError::Colorize(ColorizeError::GridBitmap { ref layout, .. }) => {
            assert_eq!(layout, "quad")
        }
        other => panic!("Expected GridBitmap error, got {other:?}"),
    }
}

#[test]
fn test_unidentifiable_and_invalid_captures() {
    let settings = default_settings();
    let data = DataDir::new(&settings);
    let service = ColorizeService::new(&settings, GridLibrary::new(data.path()));

    let err = service.colorize_image(&blank()).unwrap_err();
    assert!(matches!(
        err,
        AppError::Colorize(ColorizeError::UnidentifiableLayout)
    ));

    let mut gray = capture_for(settings.layout("single").unwrap());
    gray.set_pixel(500, 600, Rgb::new(90, 90, 90));
    let input = data.write_capture("gray.png", &gray);
    let output = data.path().join("gray-out.png");
    let err = service.colorize_file(&input, &output).unwrap_err();
    assert!(matches!(
        err,
        AppError::Colorize(ColorizeError::InvalidCapture(_))
    ));
    assert!(!output.exists(), "no partial output on failure");
}

#[test]
fn test_style_and_settings_file_flow() {
    let data = DataDir::new(&default_settings());
    let settings_path = data.path().join("custom.yaml");
    std::fs::write(
        &settings_path,
        "colors:\n  trace: [1, 2, 3]\nstyles:\n  mine:\n    colors:\n      background: \"#abcdef\"\n",
    )
    .unwrap();

    let loader = AssetLoader::new(Some(settings_path));
    let settings = SettingsFile::load(&loader, Some("mine")).unwrap();
    assert_eq!(settings.colors().trace, Rgb::new(1, 2, 3));
    assert_eq!(settings.colors().background, Rgb::new(0xab, 0xcd, 0xef));

    let layout = settings.layout("single").unwrap();
    let mut capture = capture_for(layout);
    let trace_x = add_vertical_trace(&mut capture, layout);
    let img = ColorizeService::new(&settings, GridLibrary::new(data.path()))
        .colorize_image(&capture)
        .unwrap()
        .image;
    assert_pixel(&img, trace_x, center_row(layout.grid_boxes[0]) - 5, Rgb::new(1, 2, 3));
    assert_pixel(&img, 60, 200, Rgb::new(0xab, 0xcd, 0xef));
}
