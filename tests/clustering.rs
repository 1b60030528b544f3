//! Properties of proximity clustering and density aggregation.

mod helpers;

use std::collections::HashSet;

use campaign_map::{
    cluster, count_by_key, density_buckets, group_by_key, opacity_for, CoordinateValue, GeoRecord,
};
use helpers::{record, record_without_coordinates, METERS_PER_DEGREE};
use proptest::prelude::*;

#[test]
fn test_reference_example_two_points() {
    let records = vec![record("A", 0.0, 0.0), record("B", 0.0, 0.001)];
    let groups = cluster(&records, 200.0);

    assert_eq!(groups.len(), 1);
    let group = &groups[0];
    assert_eq!(group.members.len(), 2);
    assert!((group.centroid.latitude - 0.0).abs() < 1e-12);
    assert!((group.centroid.longitude - 0.0005).abs() < 1e-12);
    assert!((group.radius - 282.842_712).abs() < 1e-5);
}

#[test]
fn test_records_one_kilometer_apart_are_separate() {
    let records = vec![
        record("A", -23.55, -46.63),
        record("B", -23.55 + 1000.0 / METERS_PER_DEGREE, -46.63),
    ];
    let groups = cluster(&records, 200.0);
    assert_eq!(groups.len(), 2);
    assert!(groups.iter().all(|g| g.radius == 200.0));
}

#[test]
fn test_dense_site_collapses_to_one_marker() {
    // Nine registrations within ~30 m of each other
    let records: Vec<GeoRecord> = (0..9)
        .map(|i| {
            let offset = f64::from(i) * 3.0 / METERS_PER_DEGREE;
            record(&format!("r{i}"), -23.55 + offset, -46.63 - offset)
        })
        .collect();
    let groups = cluster(&records, 200.0);

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].members.len(), 9);
    assert!((groups[0].radius - 600.0).abs() < 1e-9);
}

#[test]
fn test_input_records_are_untouched() {
    let records = vec![
        record("A", 0.0, 0.0),
        record("B", 0.0, 0.0005),
        record_without_coordinates("C", Some("Centro")),
    ];
    let before = records.clone();
    let _ = cluster(&records, 200.0);
    let _ = group_by_key(&records);
    assert_eq!(records, before);
}

#[test]
fn test_count_by_key_sentinel_and_trim() {
    let counts = count_by_key([None, Some("  centro ")]);
    assert_eq!(counts.get("SEM BAIRRO"), Some(&1));
    assert_eq!(counts.get("CENTRO"), Some(&1));
}

#[test]
fn test_density_from_team_counts() {
    let records = vec![
        GeoRecord::new("1", Some("Centro"), -23.55, -46.63),
        GeoRecord::new("2", Some("centro "), -23.56, -46.64),
        GeoRecord::new("3", None, -23.60, -46.70),
        record_without_coordinates("4", Some("Moema")),
    ];
    let teams = count_by_key(
        std::iter::repeat(Some("Centro"))
            .take(11)
            .chain(std::iter::repeat(None).take(3)),
    );
    let buckets = density_buckets(&records, &teams);

    let keys: Vec<&str> = buckets.iter().map(|b| b.key.as_str()).collect();
    assert_eq!(keys, vec!["CENTRO", "SEM BAIRRO"]);
    assert_eq!(buckets[0].members.len(), 2);
    assert_eq!(buckets[0].opacity, 0.9);
    assert_eq!(buckets[1].related_count, 3);
    assert_eq!(buckets[1].opacity, 0.5);
}

#[test]
fn test_opacity_table() {
    assert_eq!(opacity_for(0), opacity_for(1));
    assert_eq!(opacity_for(1), 0.3);
    assert_eq!(opacity_for(5), 0.5);
    assert_eq!(opacity_for(6), 0.7);
    assert_eq!(opacity_for(10), 0.7);
    assert_eq!(opacity_for(11), 0.9);
}

fn arb_record() -> impl Strategy<Value = GeoRecord> {
    // Small area so that merges actually happen; some records are invalid
    (
        -23.56f64..-23.54,
        -46.64f64..-46.62,
        prop::option::of("[a-c]{1}"),
        0u8..10,
    )
        .prop_map(|(lat, lon, hood, kind)| {
            let (latitude, longitude) = match kind {
                0 => (None, Some(CoordinateValue::Number(lon))),
                1 => (
                    Some(CoordinateValue::Text("x".to_string())),
                    Some(CoordinateValue::Number(lon)),
                ),
                2 => (
                    Some(CoordinateValue::Text(lat.to_string())),
                    Some(CoordinateValue::Text(lon.to_string())),
                ),
                _ => (
                    Some(CoordinateValue::Number(lat)),
                    Some(CoordinateValue::Number(lon)),
                ),
            };
            GeoRecord {
                id: String::new(),
                neighborhood: hood,
                latitude,
                longitude,
            }
        })
}

fn arb_records() -> impl Strategy<Value = Vec<GeoRecord>> {
    prop::collection::vec(arb_record(), 0..60).prop_map(|mut records| {
        for (i, r) in records.iter_mut().enumerate() {
            r.id = format!("r{i}");
        }
        records
    })
}

proptest! {
    #[test]
    fn test_cluster_partitions_valid_records(
        records in arb_records(),
        base in 20.0f64..800.0,
    ) {
        let groups = cluster(&records, base);

        let mut seen = HashSet::new();
        for group in &groups {
            prop_assert!(!group.members.is_empty());
            for member in &group.members {
                prop_assert!(seen.insert(member.id.clone()), "{} in two groups", member.id);
            }
        }
        let valid: HashSet<String> = records
            .iter()
            .filter(|r| r.point().is_some())
            .map(|r| r.id.clone())
            .collect();
        prop_assert_eq!(seen, valid);
    }

    #[test]
    fn test_cluster_centroid_and_radius(
        records in arb_records(),
        base in 20.0f64..800.0,
    ) {
        for group in cluster(&records, base) {
            let n = group.members.len() as f64;
            let points: Vec<_> = group.members.iter().filter_map(|r| r.point()).collect();
            let lat = points.iter().map(|p| p.latitude).sum::<f64>() / n;
            let lon = points.iter().map(|p| p.longitude).sum::<f64>() / n;
            prop_assert!((group.centroid.latitude - lat).abs() < 1e-9);
            prop_assert!((group.centroid.longitude - lon).abs() < 1e-9);

            if group.members.len() == 1 {
                prop_assert_eq!(group.radius, base);
            } else {
                prop_assert!((group.radius - base * n.sqrt()).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_group_by_key_excludes_invalid(records in arb_records()) {
        let groups = group_by_key(&records);
        let grouped: usize = groups.values().map(|g| g.members.len()).sum();
        let valid = records.iter().filter(|r| r.point().is_some()).count();
        prop_assert_eq!(grouped, valid);
        for group in groups.values() {
            prop_assert!(group.members.iter().all(|r| r.point().is_some()));
        }
    }

    #[test]
    fn test_opacity_bounded(count in 0usize..100_000) {
        let opacity = opacity_for(count);
        prop_assert!((0.3..=0.9).contains(&opacity));
    }
}
