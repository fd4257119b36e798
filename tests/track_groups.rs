use trackgroup_rs::{
    codec::{decode, encode},
    decode_groups,
    decode_groups_par,
    decode_groups_par_with,
    extract_group_id,
    DecoderConfig,
    EncodedAirspaces,
    EncodedGroundAltitude,
    EncodedTrack,
    Extent,
    RuntimeTrack,
    TrackGroup,
    Trajectory,
};

fn encode_track(name: &str, lat: &[f64], lon: &[f64], alt: &[f64], time_sec: &[f64]) -> EncodedTrack {
    let trajectory = Trajectory {
        lat: lat.to_vec(),
        lon: lon.to_vec(),
        alt: alt.to_vec(),
        time_sec: time_sec.to_vec(),
    };
    EncodedTrack::encode(name, &trajectory, &DecoderConfig::default())
}

fn four_fixes() -> EncodedTrack {
    encode_track(
        "four",
        &[10.0, 10.0, 10.0, 10.0],
        &[0.0, 0.001, 0.002, 0.003],
        &[100.0, 110.0, 105.0, 105.0],
        &[0.0, 10.0, 20.0, 30.0],
    )
}

#[test]
fn four_fix_scenario() {
    let track = RuntimeTrack::new("1-0", &four_fixes(), false).unwrap();

    assert_eq!(track.len(), 4);
    assert_eq!(track.extrema.alt, Extent::new(100.0, 110.0));
    assert_eq!(track.extrema.lat, Extent::new(10.0, 10.0));
    assert_eq!(track.extrema.time_sec, Extent::new(0.0, 30.0));

    // +10 m over 10 s then -5 m over 10 s
    assert_eq!(track.vz, vec![0.0, 1.0, -0.5, 0.0]);

    // ~109.5 m per 10 s step, i.e. ~39 km/h wherever a window fits
    assert_eq!(track.vx[0], 0.0);
    assert_eq!(track.vx[1], 39.0);
    assert_eq!(track.vx[2], 39.0);
    assert_eq!(track.vx[3], 0.0);
    assert_eq!(track.extrema.vx, Extent::new(0.0, 39.0));
    assert!((track.extrema.max_distance - 109.5).abs() < 0.5);
}

#[test]
fn four_fix_scenario_forward_sum() {
    let config = DecoderConfig::forward_sum();
    let track = RuntimeTrack::assemble("1-0", &four_fixes(), false, &config).unwrap();
    assert!(track.vx[..3].iter().all(|&v| v == 39.0));
    // 5 m over 30 s, -5 m over 20 s (half rounds up), 0 m over 10 s
    assert_eq!(track.vz, vec![0.2, -0.2, 0.0, 0.0]);
}

#[test]
fn no_motion_no_speed() {
    let n = 200;
    let t = (0..n).map(|i| 1_700_000_000.0 + i as f64).collect::<Vec<_>>();
    let encoded = encode_track("still", &vec![45.2; n], &vec![6.1; n], &vec![1200.0; n], &t);
    let track = RuntimeTrack::new("2-0", &encoded, false).unwrap();
    assert!(track.vx.iter().all(|&v| v == 0.0));
    assert!(track.vz.iter().all(|&v| v == 0.0));
    assert_eq!(track.extrema.max_distance, 0.0);
}

#[test]
fn codec_round_trip() {
    let values = [-3.7, 0.0, 12.25, 12.25, -100.5, 1e6 + 0.125];
    assert_eq!(decode(&encode(&values, 1.0, false), 1.0), values.to_vec());

    let quantized = decode(&encode(&values, 100.0, true), 100.0);
    for (q, v) in quantized.iter().zip(values) {
        assert!((q - v).abs() <= 0.005 + 1e-9);
    }
}

#[test]
fn groups_keep_order_and_overlays() {
    let groups = vec![
        TrackGroup {
            id: 100,
            num_post_process: 1,
            tracks: Some(vec![four_fixes(), four_fixes()]),
            ground_altitudes: Some(vec![
                EncodedGroundAltitude { altitudes: Some(encode(&[50., 55., 60., 58.], 1.0, true)) },
                EncodedGroundAltitude { altitudes: Some(vec![1.0, 2.0]) },
            ]),
            airspaces: None,
        },
        // no data
        TrackGroup { id: 101, ..Default::default() },
        TrackGroup {
            id: 102,
            num_post_process: 0,
            tracks: Some(vec![four_fixes()]),
            ground_altitudes: None,
            airspaces: Some(vec![EncodedAirspaces {
                start_sec: vec![5.0, 10.0],
                end_sec: vec![25.0, -10.0],
                name: vec!["A".to_owned(), "B".to_owned()],
                category: vec!["C".to_owned(), "D".to_owned()],
                top: vec![2000.0, 3000.0],
                bottom: vec![0.0, 500.0],
                flags: vec![0, 0],
            }]),
        },
    ];

    let tracks = decode_groups(&groups);
    let ids = tracks.iter().map(|t| t.id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, vec!["100-0", "100-1", "102-0"]);
    assert_eq!(
        tracks.iter().map(|t| extract_group_id(&t.id)).collect::<Vec<_>>(),
        vec![100, 100, 102]
    );

    assert!(tracks[0].is_post_processed && tracks[1].is_post_processed);
    assert!(!tracks[2].is_post_processed);

    assert_eq!(tracks[0].gnd_alt, vec![50., 55., 60., 58.]);
    assert_eq!(tracks[1].gnd_alt, vec![0.0; 4]);
    assert_eq!(tracks[2].gnd_alt, vec![0.0; 4]);

    let airspaces = tracks[2].airspaces.as_ref().unwrap();
    assert_eq!(airspaces.start_sec, vec![5.0, 15.0]);
    assert_eq!(airspaces.end_sec, vec![25.0, 15.0]);
    assert_eq!(airspaces.at(20.0).map(|a| a.name).collect::<Vec<_>>(), vec!["A"]);

    assert_eq!(decode_groups_par(&groups), tracks);
    assert_eq!(decode_groups_par_with(&groups, &DecoderConfig::default()), tracks);
}

#[test]
fn geojson_export() {
    let track = RuntimeTrack::new("1-0", &four_fixes(), true).unwrap();
    let feature = track.to_geojson();
    let properties = feature.properties.as_ref().unwrap();
    assert_eq!(properties["id"], "1-0");
    assert_eq!(properties["name"], "four");
    assert_eq!(properties["postProcessed"], true);
    match feature.geometry.map(|g| g.value) {
        Some(geojson::Value::LineString(line)) => {
            assert_eq!(line.len(), 4);
            assert_eq!(line[1], vec![0.001, 10.0, 110.0]);
        }
        other => panic!("expected a line string, got {other:?}"),
    }
}
