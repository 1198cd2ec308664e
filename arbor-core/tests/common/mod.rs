use arbor_core::points::Point;

/// Points arranged in well-separated square blobs, with the blob index of
/// every point as its reference label. Blob `b` is centred at
/// `(100 * b, 50 * (b % 2))` and its points lie on a small grid.
#[must_use]
pub fn grid_blobs(blobs: usize, side: usize) -> (Vec<Point>, Vec<usize>) {
    let mut points = Vec::new();
    let mut labels = Vec::new();
    for blob in 0..blobs {
        let cx = 100.0 * blob as f64;
        let cy = 50.0 * (blob % 2) as f64;
        for row in 0..side {
            for col in 0..side {
                points.push(Point::new(cx + col as f64, cy + row as f64 * 1.5));
                labels.push(blob);
            }
        }
    }
    (points, labels)
}
