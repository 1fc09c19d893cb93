use {
  super::*,
  anyhow::Result,
  rand::SeedableRng,
  std::fs
};

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);
const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

fn write_cap(dir: &Path, name: &str, color: Rgba<u8>) -> Result<()> {
  RgbaImage::from_pixel(10, 10, color).save(dir.join(name))?;
  Ok(())
}

fn file_name(cap: &Cap) -> String {
  Path::new(&cap.name).file_name().unwrap().to_string_lossy().to_string()
}

#[test] fn open() -> Result<()> {
  let dir = tempfile::tempdir()?;
  let mut image = RgbaImage::from_pixel(10, 10, RED);
  image.put_pixel(0, 0, Rgba([0, 0, 0, 0]));
  image.save(dir.path().join("red.png"))?;

  let cap = Cap::open(dir.path().join("red.png"), 4.0)?;
  assert_eq!(cap.image.dimensions(), (8, 8));
  assert_eq!(cap.color, RED);
  assert_eq!(cap.to_string(), format!("Cap({})", dir.path().join("red.png").display()));
  Ok(())
}

#[test] fn open_broken() -> Result<()> {
  let dir = tempfile::tempdir()?;
  let path = dir.path().join("broken.png");
  fs::write(&path, b"not an image")?;
  match Cap::open(&path, 4.0) {
    Err(Error::Open { path: failed, .. }) => assert_eq!(failed, path),
    other => panic!("unexpected result: {:?}", other.map(|cap| cap.name))
  }
  Ok(())
}

#[test] fn read_dir_natural_order() -> Result<()> {
  let dir = tempfile::tempdir()?;
  write_cap(dir.path(), "cap10.png", BLUE)?;
  write_cap(dir.path(), "cap2.PNG", GREEN)?;
  write_cap(dir.path(), "cap1.png", RED)?;
  fs::write(dir.path().join("notes.txt"), "not a cap")?;
  fs::create_dir(dir.path().join("nested.png"))?;
  write_cap(&dir.path().join("nested.png"), "cap0.png", RED)?;

  let caps = super::read_dir(dir.path(), 3.0)?;
  let names = caps.iter().map(file_name).collect::<Vec<_>>();
  assert_eq!(names, ["cap1.png", "cap2.PNG", "cap10.png"]);
  assert_eq!(caps.iter().map(|cap| cap.color).collect::<Vec<_>>(), [RED, GREEN, BLUE]);
  assert!(caps.iter().all(|cap| cap.image.dimensions() == (6, 6)));
  Ok(())
}

#[test] fn read_dir_fails_on_broken_file() -> Result<()> {
  let dir = tempfile::tempdir()?;
  write_cap(dir.path(), "a.png", RED)?;
  fs::write(dir.path().join("b.jpg"), b"garbage")?;
  assert!(matches!(super::read_dir(dir.path(), 3.0), Err(Error::Open { .. })));
  Ok(())
}

#[test] fn read_missing_dir() {
  let result = super::read_dir("/nonexistent/caps/directory", 3.0);
  assert!(matches!(result, Err(Error::Io(_))));
}

#[test] fn shuffle_is_seeded_permutation() {
  let caps = (0..16)
    .map(|i| Cap::new(format!("cap{}", i), RgbaImage::new(1, 1), RED))
    .collect::<Vec<_>>();
  let shuffled = |seed| {
    let mut caps = caps.clone();
    shuffle(&mut caps, &mut rand_pcg::Pcg64::seed_from_u64(seed));
    caps.into_iter().map(|cap| cap.name).collect::<Vec<_>>()
  };

  assert_eq!(shuffled(7), shuffled(7));
  let mut names = shuffled(7);
  names.sort_by(|a, b| lexical_sort::lexical_cmp(a, b));
  assert_eq!(names, caps.iter().map(|cap| cap.name.clone()).collect::<Vec<_>>());
}

#[test] fn cell_sizes() {
  assert_eq!(cell_size(20.0), 40);
  assert_eq!(cell_size(2.4), 5);
  assert_eq!(cell_size(0.0), 1);
  assert_eq!(cell_size(-3.0), 1);
}
