//! Great-circle distance and centroids.

use crate::config::EARTH_RADIUS_METERS;

use super::types::GeoPoint;

/// Haversine distance between two points in meters on a spherical Earth.
pub fn haversine_distance(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_METERS * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Arithmetic mean of latitude and of longitude. `None` only for no points.
///
/// Each axis is scaled by its largest magnitude before summing, so the mean of
/// finite coordinates is finite even when their plain sum would overflow.
pub fn centroid<I>(points: I) -> Option<GeoPoint>
where
    I: IntoIterator<Item = GeoPoint>,
{
    let points: Vec<GeoPoint> = points.into_iter().collect();
    if points.is_empty() {
        return None;
    }
    Some(GeoPoint {
        latitude: scaled_mean(points.iter().map(|p| p.latitude)),
        longitude: scaled_mean(points.iter().map(|p| p.longitude)),
    })
}

/// Mean of finite values without intermediate overflow.
///
/// Every `x / scale` lies in `[-1, 1]`, so their sum divided by `n` stays in
/// `[-1, 1]` and the result is bounded by `scale`.
fn scaled_mean<I>(values: I) -> f64
where
    I: Iterator<Item = f64> + Clone,
{
    let scale = values.clone().fold(0.0f64, |m, x| m.max(x.abs()));
    if scale == 0.0 {
        return 0.0;
    }
    let (count, sum) = values.fold((0usize, 0.0f64), |(n, s), x| (n + 1, s + x / scale));
    #[allow(clippy::cast_precision_loss)]
    let n = count as f64;
    scale * (sum / n)
}
