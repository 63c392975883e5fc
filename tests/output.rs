extern crate fractal_tree;
extern crate image;
extern crate tempfile;

use std::fs;

use fractal_tree::convert::{BuiltinConverter, Converter};
use fractal_tree::ppm::save_ppm;
use fractal_tree::{render, Color, Pixel, PixelBuffer, TreeConfig};

#[test]
fn two_by_two_black_bitmap_is_byte_exact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("black.ppm");
    let buffer = PixelBuffer::new(2, 2, Color::ROSE).unwrap();
    save_ppm(&path, &buffer).unwrap();

    let mut expected = b"P6\n2 2\n255\n".to_vec();
    expected.extend_from_slice(&[0u8; 12]);
    assert_eq!(fs::read(&path).unwrap(), expected);
}

#[test]
fn saving_into_a_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("tree.ppm");
    let buffer = PixelBuffer::new(2, 2, Color::ROSE).unwrap();
    let err = save_ppm(&path, &buffer).unwrap_err();
    assert!(!err.is_recoverable());
    assert!(err.to_string().contains("tree.ppm"));
}

#[test]
fn builtin_converter_writes_a_matching_png() {
    let dir = tempfile::tempdir().unwrap();
    let ppm = dir.path().join("dot.ppm");
    let png = dir.path().join("dot.png");
    let mut buffer = PixelBuffer::new(4, 3, Color::ROSE).unwrap();
    buffer.set_pixel(Pixel(1, 2), 1.0);
    save_ppm(&ppm, &buffer).unwrap();

    BuiltinConverter.convert(&ppm, &png).unwrap();

    let decoded = image::open(&png).unwrap().to_rgb8();
    assert_eq!(decoded.dimensions(), (4, 3));
    assert_eq!(decoded.into_raw(), buffer.as_bytes().to_vec());
}

#[test]
fn builtin_converter_reports_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let err = BuiltinConverter
        .convert(&dir.path().join("nope.ppm"), &dir.path().join("nope.png"))
        .unwrap_err();
    assert!(err.is_recoverable());
}

#[test]
fn rendered_forests_are_identical_on_disk() {
    let config = TreeConfig {
        width: 120,
        height: 120,
        depth: 5,
        thickness: 4,
        ..TreeConfig::default()
    };
    let dir = tempfile::tempdir().unwrap();
    let mut files = Vec::new();
    for name in &["first.ppm", "second.ppm"] {
        let path = dir.path().join(name);
        let (buffer, growth) = render(&config).unwrap();
        assert_eq!(growth.segments, 8 * 63);
        save_ppm(&path, &buffer).unwrap();
        files.push(fs::read(&path).unwrap());
    }
    assert_eq!(files[0], files[1]);
    assert!(files[0].starts_with(b"P6\n120 120\n255\n"));
}
