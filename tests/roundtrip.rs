//! End-to-end stitching tests through the public API.

use cubepano::geometry::{point_to_face_uv, Direction};
use cubepano::{
    split_equirect, synthesize, synthesize_with, CubeFaceSet, CubeFaceSetBuilder, FaceSlot,
    PanoramaError, PixelBuffer, SampleFilter, SynthOptions,
};

const RED: [u8; 4] = [255, 0, 0, 255];
const GREEN: [u8; 4] = [0, 255, 0, 255];
const BLUE: [u8; 4] = [0, 0, 255, 255];

/// Color that varies smoothly with direction, continuous across face seams.
fn direction_color(d: Direction) -> [u8; 4] {
    let v = d.to_cartesian();
    let c = |x: f64| ((x + 1.0) * 127.5).round() as u8;
    [c(v.x), c(v.y), c(v.z), 255]
}

fn direction_panorama(width: u32, height: u32) -> PixelBuffer {
    let mut pano = PixelBuffer::new(width, height).unwrap();
    for y in 0..height {
        for x in 0..width {
            pano.put_pixel(x, y, direction_color(Direction::from_pixel(x, y, width, height)));
        }
    }
    pano
}

fn max_and_mean_error(a: &PixelBuffer, b: &PixelBuffer) -> (u8, f64) {
    let mut max = 0u8;
    let mut sum = 0u64;
    for (x, y) in a.as_raw().iter().zip(b.as_raw()) {
        let d = x.abs_diff(*y);
        max = max.max(d);
        sum += d as u64;
    }
    (max, sum as f64 / a.as_raw().len() as f64)
}

#[test]
fn test_split_then_stitch_reproduces_panorama() {
    let original = direction_panorama(256, 128);
    let faces = split_equirect(&original, 64).unwrap();
    let stitched = synthesize(&faces).unwrap();

    assert_eq!((stitched.width(), stitched.height()), (256, 128));
    let (max, mean) = max_and_mean_error(&original, &stitched);
    assert!(max <= 16, "max channel error {} too large", max);
    assert!(mean <= 4.0, "mean channel error {} too large", mean);
}

#[test]
fn test_bilinear_roundtrip_is_close() {
    let original = direction_panorama(256, 128);
    let faces = split_equirect(&original, 64).unwrap();
    let stitched = synthesize_with(&faces, &SynthOptions::with_filter(SampleFilter::Bilinear)).unwrap();

    let (max, mean) = max_and_mean_error(&original, &stitched);
    assert!(max <= 16, "max channel error {} too large", max);
    assert!(mean <= 4.0, "mean channel error {} too large", mean);
}

#[test]
fn test_front_green_back_blue_scenario() {
    let mut builder = CubeFaceSetBuilder::new();
    for slot in FaceSlot::all() {
        let color = match slot {
            FaceSlot::Front => GREEN,
            FaceSlot::Back => BLUE,
            _ => RED,
        };
        builder.insert(slot, PixelBuffer::solid(32, 32, color).unwrap());
    }
    let pano = synthesize(&builder.build().unwrap()).unwrap();
    let (w, h) = (pano.width(), pano.height());

    assert_eq!((w, h), (128, 64));
    assert_eq!(pano.pixel(0, h / 2), BLUE);
    assert_eq!(pano.pixel(w / 2, h / 2), GREEN);
    assert_eq!(pano.pixel(w - 1, h / 2), BLUE);
}

#[test]
fn test_every_pixel_uv_is_inside_face() {
    let (w, h) = (96, 48);
    for y in 0..h {
        for x in 0..w {
            let hit = Direction::from_pixel(x, y, w, h).hit();
            let uv = point_to_face_uv(hit.face, hit.point);
            assert!(
                (-1e-9..=1.0 + 1e-9).contains(&uv.u) && (-1e-9..=1.0 + 1e-9).contains(&uv.v),
                "pixel ({}, {}) on {:?} has uv {:?}",
                x,
                y,
                hit.face,
                uv
            );
        }
    }
}

#[test]
fn test_mismatched_face_sizes_are_sampled_independently() {
    let faces = CubeFaceSet::from_array(FaceSlot::all().map(|slot| {
        let size = 4 + slot.index() as u32 * 3;
        PixelBuffer::solid(size, size + 1, [slot.index() as u8 * 50, 1, 2, 255]).unwrap()
    }));
    let front = faces.face(FaceSlot::Front);
    let pano = synthesize(&faces).unwrap();
    assert_eq!((pano.width(), pano.height()), (front.width() * 4, front.height() * 2));
    assert!(pano.texels().iter().all(|t| t[0] % 50 == 0 && t[1] == 1));
}

#[test]
fn test_incomplete_set_fails_fast() {
    let builder = CubeFaceSetBuilder::new().with(FaceSlot::Front, PixelBuffer::solid(2, 2, GREEN).unwrap());
    assert!(matches!(builder.build(), Err(PanoramaError::IncompleteInput(FaceSlot::Up))));
}
