use {
  super::*,
  crate::geometry::{point, rect},
  anyhow::Result
};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

#[test] fn background() {
  let canvas = Canvas::new(rect(0.0, 0.0, 30.0, 20.5), WHITE);
  assert_eq!(canvas.image().dimensions(), (30, 20));
  assert!(canvas.image().pixels().all(|px| *px == WHITE));

  let canvas = Canvas::new(rect(10.0, 10.0, 0.0, 0.0), WHITE);
  assert_eq!(canvas.image().dimensions(), (0, 0));
}

#[test] fn image_at_top_left() {
  let mut canvas = Canvas::new(rect(0.0, 0.0, 10.0, 10.0), WHITE);
  canvas.draw_image_at(&RgbaImage::from_pixel(3, 3, RED), point(4.7, 2.2));
  let image = canvas.into_image();
  assert_eq!(*image.get_pixel(4, 2), RED);
  assert_eq!(*image.get_pixel(6, 4), RED);
  assert_eq!(*image.get_pixel(7, 4), WHITE);
  assert_eq!(*image.get_pixel(3, 2), WHITE);
}

#[test] fn image_clipped_at_edges() {
  let mut canvas = Canvas::new(rect(0.0, 0.0, 4.0, 4.0), WHITE);
  canvas.draw_image_at(&RgbaImage::from_pixel(3, 3, RED), point(-2.0, 3.0));
  let image = canvas.image();
  assert_eq!(*image.get_pixel(0, 3), RED);
  assert_eq!(*image.get_pixel(1, 3), WHITE);
  assert_eq!(*image.get_pixel(0, 2), WHITE);
}

#[test] fn transparent_pixels_keep_background() {
  let mut canvas = Canvas::new(rect(0.0, 0.0, 4.0, 4.0), WHITE);
  let mut cap = RgbaImage::from_pixel(2, 2, RED);
  cap.put_pixel(0, 0, Rgba([0, 0, 0, 0]));
  canvas.draw_image_at(&cap, point(0.0, 0.0));
  assert_eq!(*canvas.image().get_pixel(0, 0), WHITE);
  assert_eq!(*canvas.image().get_pixel(1, 1), RED);
}

#[test] fn circle() {
  let mut canvas = Canvas::new(rect(0.0, 0.0, 40.0, 40.0), WHITE);
  canvas.draw_circle(Circle::new(20.0, 20.0, 10.0), BLUE);
  let image = canvas.image();
  assert_eq!(*image.get_pixel(20, 20), BLUE);
  assert_eq!(*image.get_pixel(12, 20), BLUE);
  assert_eq!(*image.get_pixel(0, 0), WHITE);
  // corner of the bounding square is outside the disc
  assert_eq!(*image.get_pixel(10, 10), WHITE);
  assert_eq!(*image.get_pixel(31, 20), WHITE);
}

#[test] fn circle_edge_is_blended() {
  let mut canvas = Canvas::new(rect(0.0, 0.0, 10.0, 10.0), WHITE);
  // pixel (6, 2) has its center exactly on the edge
  canvas.draw_circle(Circle::new(2.5, 2.5, 4.0), BLUE);
  let edge = *canvas.image().get_pixel(6, 2);
  assert_ne!(edge, WHITE);
  assert_ne!(edge, BLUE);
}

#[test] fn circle_outside_canvas() {
  let mut canvas = Canvas::new(rect(0.0, 0.0, 10.0, 10.0), WHITE);
  canvas.draw_circle(Circle::new(-50.0, 50.0, 5.0), BLUE);
  assert!(canvas.image().pixels().all(|px| *px == WHITE));
}

#[test] fn save() -> Result<()> {
  let dir = tempfile::tempdir()?;
  let path = dir.path().join("out.png");
  let mut canvas = Canvas::new(rect(0.0, 0.0, 16.0, 8.0), WHITE);
  canvas.draw_circle(Circle::new(8.0, 4.0, 3.0), RED);
  canvas.save(&path)?;
  let decoded = image::open(&path)?.to_rgba8();
  assert_eq!(&decoded, canvas.image());
  Ok(())
}
