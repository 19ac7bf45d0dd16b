use std::io::Write;
use std::sync::Arc;
use std::thread;

use chrono::{Datelike, NaiveDate, NaiveTime};
use kindmap::*;
use serde_json::json;
use tempfile::NamedTempFile;

/// Line 2 is the circular line, so its congestion rows use 내선/외선
fn snapshot_file() -> NamedTempFile {
    let snapshot = json!({
        "stations": [
            { "station_cd": "0222", "name": "강남", "line": "2", "latitude": 37.4979, "longitude": 127.0276 },
            { "station_cd": "0223", "name": "역삼", "line": "2", "latitude": 37.5006, "longitude": 127.0364 },
            { "station_cd": "0224", "name": "선릉", "line": "2", "latitude": 37.5045, "longitude": 127.0490 },
            { "station_cd": "0225", "name": "삼성", "line": "2", "latitude": 37.5088, "longitude": 127.0631 },
            { "station_cd": "1023", "name": "선릉", "line": "수인분당", "latitude": 37.5045, "longitude": 127.0490 },
            { "station_cd": "4307", "name": "강남", "line": "신분당", "latitude": 37.4969, "longitude": 127.0283 }
        ],
        "station_order": [
            { "station_cd": "0222", "line": "2", "order": 22 },
            { "station_cd": "0223", "line": "2", "order": 23 },
            { "station_cd": "0224", "line": "2", "order": 24 },
            { "station_cd": "0225", "line": "2", "order": 25 }
        ],
        "line_topology": [
            { "station_cd": "0223", "line": "2", "up": ["0222"], "down": ["0224"] }
        ],
        "transfers": [
            { "station_cd": "0224", "from_line": "2", "to_line": "수인분당", "distance": 180.0 },
            { "station_cd": "0222", "from_line": "2", "to_line": "신분당", "distance": 230.0 }
        ],
        "congestion": [
            {
                "station_cd": "0223",
                "line": "2",
                "direction": "내선",
                "day": "weekday",
                "slots": { "08:00": 1.1, "08:30": 1.4, "18:00": 1.3 }
            }
        ]
    });

    let mut file = NamedTempFile::new().unwrap();
    serde_json::to_writer_pretty(&mut file, &snapshot).unwrap();
    file.flush().unwrap();
    file
}

fn load() -> TransitNetwork {
    let file = snapshot_file();
    let (network, report) = create_network_from_file(file.path(), &ModelConfig::default()).unwrap();
    assert_eq!(report.dropped_rows(), 0);
    network
}

#[test]
fn ride_and_transfer_from_file() {
    let network = load();
    let gangnam = network.id("0222").unwrap();
    let seolleung = network.id("0224").unwrap();
    let samsung = network.id("0225").unwrap();

    let ride = network.intermediate_stations(gangnam, samsung, "2");
    let codes: Vec<&str> = ride.iter().map(|&id| network.code(id)).collect();
    assert_eq!(codes, ["0223", "0224", "0225"]);

    let edge = network.transfer(seolleung, "2", "수인분당").unwrap();
    assert_eq!(network.code(edge.to_station), "1023");
    assert_eq!(edge.distance, 180.0);

    let edge = network.transfer(gangnam, "2", "신분당").unwrap();
    assert_eq!(network.station(edge.to_station).unwrap().line, "신분당");
}

#[test]
fn neighbours_from_file() {
    let network = load();
    let yeoksam = network.id("0223").unwrap();
    let next = network.next_stations(yeoksam, "2");
    assert_eq!(network.code(next.towards(Direction::Up)[0]), "0222");
    assert_eq!(network.code(next.towards(Direction::Down)[0]), "0224");
}

#[test]
fn congestion_by_departure_time() {
    let network = load();
    let yeoksam = network.id("0223").unwrap();
    let departure = NaiveDate::from_ymd_opt(2024, 3, 6)
        .unwrap()
        .and_time(NaiveTime::from_hms_opt(8, 41, 0).unwrap());

    let day = day_label(departure.weekday());
    assert_eq!(day, "weekday");
    assert_eq!(
        network.congestion_at(yeoksam, "2", Direction::Up, day, departure.time()),
        1.4
    );
    // Only the inner loop was recorded
    assert_eq!(
        network.congestion_at(yeoksam, "2", Direction::Down, day, departure.time()),
        DEFAULT_CONGESTION
    );
}

#[test]
fn scores_from_facility_csv() {
    let network = load();
    let mut csv = NamedTempFile::new().unwrap();
    writeln!(
        csv,
        "station_cd_list,charger_count,elevator_count,escalator_count,lift_count,movingwalk_count,safe_platform_count,sign_phone_count,toilet_count,helper_count"
    )
    .unwrap();
    writeln!(csv, "0224|1023,1,6,8,0,0,2,1,2,1").unwrap();
    writeln!(csv, "0222|4307,0,0,0,0,0,0,0,0,0").unwrap();
    csv.flush().unwrap();

    let rows = read_facility_rows(csv.path()).unwrap();
    assert_eq!(network.update_scores(&rows), 4);

    let seolleung = network.id("0224").unwrap();
    let bundang = network.id("1023").unwrap();
    let gangnam = network.id("0222").unwrap();
    assert_eq!(network.score(seolleung), network.score(bundang));
    assert_eq!(network.score(gangnam), [0.0; 4]);

    let wheelchair = network.score_for(seolleung, DisabilityType::Physical);
    assert!(wheelchair > 0.0 && wheelchair <= MAX_ACCESSIBILITY_SCORE);
}

#[test]
fn queries_during_score_updates() {
    let network = Arc::new(load());
    let seolleung = network.id("0224").unwrap();
    let bundang = network.id("1023").unwrap();

    let writer = {
        let network = Arc::clone(&network);
        thread::spawn(move || {
            for n in 0..50 {
                let row = FacilityRow {
                    station_cd_list: vec!["0224".to_string(), "1023".to_string()],
                    elevator_count: f64::from(n),
                    ..Default::default()
                };
                network.update_scores(&[row]);
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let network = Arc::clone(&network);
            thread::spawn(move || {
                for _ in 0..100 {
                    let scores = network.scores();
                    assert_eq!(scores[seolleung], scores[bundang]);
                    assert!(network.transfer(seolleung, "2", "수인분당").is_some());
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    let last = network.score(seolleung);
    assert!(last[DisabilityType::Physical.index()] > 0.0);
}

#[test]
fn config_file_sets_default_congestion() {
    let mut config_file = NamedTempFile::new().unwrap();
    write!(config_file, r#"{{ "default_congestion": 0.25 }}"#).unwrap();
    config_file.flush().unwrap();

    let config = read_config(config_file.path()).unwrap();
    let snapshot = read_snapshot(snapshot_file().path()).unwrap();
    let (network, _) = build_network(&snapshot, &config).unwrap();

    let samsung = network.id("0225").unwrap();
    assert_eq!(
        network.congestion(samsung, "2", Direction::Down, "sunday", "12:00"),
        0.25
    );
}

#[test]
fn unknown_station_code() {
    let network = load();
    assert!(matches!(network.id("9999"), Err(Error::StationNotFound(_))));
}
