/// Evaluate `$expr`, logging how long it took.
#[macro_export]
macro_rules! profile(
  ($title: literal, $expr: expr) => {{
    let t0 = std::time::Instant::now();
    let result = $expr;
    $crate::__tracing::info!("{} profile: {}ms", $title, t0.elapsed().as_millis());
    result
  }}
);
