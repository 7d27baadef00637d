mod common;
use chrono::NaiveDate;
use common::{dashboard, seed_snapshot, temp_dir};
use servdash::errors::AppError;
use servdash::models::activity::{DrilldownRecord, ServiceActivity};
use servdash::models::overview::{MapPoint, StatusCount, TeamStatusCount};
use servdash::models::{Composition, Region, RegionFilter, ViewFilter};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("date")
}

fn week() -> ViewFilter {
    ViewFilter::between(d("2024-01-01"), d("2024-01-07")).expect("filter")
}

#[test]
fn test_shift_start_volta_redonda_week() {
    let snap = seed_snapshot("view_shift_vr");
    let dash = dashboard(&snap);

    let filter = week().with_region(RegionFilter::Only(Region::VoltaRedonda));
    let table = dash.shift_start(&filter).expect("shift start");
    let records = ServiceActivity::from_table(&table).expect("records");

    let resources: Vec<&str> = records
        .iter()
        .map(|r| r.resource.as_deref().unwrap_or(""))
        .collect();
    assert_eq!(resources, ["EQP-VR-02", "EQP-VR-01", "EQP-VR-01"]);

    // ordered by date, then start time
    let keys: Vec<(NaiveDate, String)> = records
        .iter()
        .map(|r| {
            (
                r.service_date.expect("date"),
                r.start_time.expect("start").format("%H:%M").to_string(),
            )
        })
        .collect();
    assert_eq!(
        keys,
        [
            (d("2024-01-01"), "07:00".to_string()),
            (d("2024-01-01"), "07:30".to_string()),
            (d("2024-01-07"), "06:45".to_string()),
        ]
    );
    assert!(records.iter().all(|r| r.region == "Volta Redonda"));
}

#[test]
fn test_shift_start_all_regions_and_other_label() {
    let snap = seed_snapshot("view_shift_all");
    let dash = dashboard(&snap);

    let table = dash.shift_start(&week()).expect("shift start");
    let records = ServiceActivity::from_table(&table).expect("records");

    assert_eq!(records.len(), 5);
    let other = records
        .iter()
        .find(|r| r.resource.as_deref() == Some("EQP-XX-09"))
        .expect("unmatched crew");
    assert_eq!(other.region, "Outra");
}

#[test]
fn test_date_bounds_are_inclusive_and_independent() {
    let snap = seed_snapshot("view_bounds");
    let dash = dashboard(&snap);

    let one_day = ViewFilter::between(d("2024-01-01"), d("2024-01-01")).expect("filter");
    assert_eq!(dash.shift_start(&one_day).expect("one day").len(), 2);

    let open_start =
        ViewFilter::new(None, Some(d("2024-01-01")), RegionFilter::All).expect("filter");
    assert_eq!(dash.shift_start(&open_start).expect("open start").len(), 3);

    let open_end = ViewFilter::new(Some(d("2024-01-07")), None, RegionFilter::All).expect("filter");
    assert_eq!(dash.shift_start(&open_end).expect("open end").len(), 2);

    let unbounded = ViewFilter::default();
    assert_eq!(dash.shift_start(&unbounded).expect("unbounded").len(), 7);
}

#[test]
fn test_composition_and_id_cleanup() {
    let snap = seed_snapshot("view_composition");
    let dash = dashboard(&snap);

    let table = dash.shift_start(&week()).expect("shift start");
    let records = ServiceActivity::from_table(&table).expect("records");

    let by_resource = |code: &str, date: &str| {
        records
            .iter()
            .find(|r| r.resource.as_deref() == Some(code) && r.service_date == Some(d(date)))
            .expect("record")
    };

    // lead present, auxiliary missing
    assert_eq!(by_resource("EQP-VR-02", "2024-01-01").composition, Composition::Incomplete);
    // both present
    let full = by_resource("EQP-VR-01", "2024-01-01");
    assert_eq!(full.composition, Composition::Complete);
    assert_eq!(full.lead_id.as_deref(), Some("111"));
    assert_eq!(full.auxiliary_ids.as_deref(), Some("222"));
    // no lead at all still counts as complete
    assert_eq!(by_resource("EQP-BP-01", "2024-01-03").composition, Composition::Complete);
}

#[test]
fn test_drilldown_parts() {
    let snap = seed_snapshot("view_drilldown");
    let dash = dashboard(&snap);

    let table = dash.drilldown(&ViewFilter::default()).expect("drilldown");
    let records = DrilldownRecord::from_table(&table).expect("records");

    assert_eq!(records.len(), 7);
    let first = &records[0];
    assert_eq!((first.year, first.month, first.day), (2023, 12, 31));
    assert_eq!(first.region, "Três Rios");
    assert_eq!(first.composition, Composition::Incomplete);
}

#[test]
fn test_drilldown_skips_undated_rows() {
    let snap = seed_snapshot("view_drilldown_undated");
    let conn = rusqlite::Connection::open(&snap).expect("open snapshot");
    conn.execute(
        r#"UPDATE "4600010296_servicos" SET data_servico = NULL WHERE id_atividade = 'A7'"#,
        [],
    )
    .expect("clear date");
    drop(conn);

    let dash = dashboard(&snap);
    let table = dash.drilldown(&ViewFilter::default()).expect("drilldown");
    assert_eq!(table.len(), 7);

    let records = DrilldownRecord::from_table(&table).expect("records");
    assert_eq!(records.len(), 6);
    assert!(records.iter().all(|r| r.resource.as_deref() != Some("EQP-XX-09")));
}

#[test]
fn test_equipment_lines_and_lot_resolution() {
    let snap = seed_snapshot("view_equipment");
    let dash = dashboard(&snap);

    let table = dash.equipment_notes(&week()).expect("equipment");
    assert_eq!(table.len(), 4);

    let mut lots: Vec<(String, String, String)> = table
        .iter()
        .map(|row| {
            (
                row.text("Nota").unwrap_or_default(),
                row.text("Ação").unwrap_or_default(),
                row.text("Lote").unwrap_or_default(),
            )
        })
        .collect();
    lots.sort();
    assert_eq!(
        lots,
        [
            ("123456".into(), "INST".into(), "391000".into()),
            ("123456".into(), "INST".into(), "391087".into()),
            ("777".into(), "EXEC".into(), "399108".into()),
            ("777".into(), "RET".into(), "399127".into()),
        ]
    );

    let meter = table
        .iter()
        .find(|row| row.text("Lote").as_deref() == Some("391000"))
        .expect("meter line");
    assert_eq!(meter.text("Descricao").as_deref(), Some("Medidor monofásico"));
    assert_eq!(meter.text("Serial").as_deref(), Some("SN1"));
    assert_eq!(meter.text("Quantidade").as_deref(), Some("1"));
    assert_eq!(meter.text("Instalação").as_deref(), Some("1000"));
    assert_eq!(meter.text("Texto Breve").as_deref(), Some("Troca de medidor"));
    assert_eq!(meter.text("Base Operacional").as_deref(), Some("Volta Redonda"));
    assert_eq!(meter.text("Status Usuário").as_deref(), Some("pendente"));

    let seal = table
        .iter()
        .find(|row| row.text("Lote").as_deref() == Some("399127"))
        .expect("seal line");
    assert_eq!(seal.text("Status Usuário").as_deref(), Some("EXEC"));
    assert_eq!(seal.text("Instalação").as_deref(), Some("2000"));
    assert_eq!(seal.text("Texto Breve").as_deref(), Some("Lacre - Poste"));
    assert_eq!(seal.text("Base Operacional").as_deref(), Some("Barra do Piraí"));
}

#[test]
fn test_safety_checklist_order() {
    let snap = seed_snapshot("view_apr");
    let dash = dashboard(&snap);

    let table = dash.safety_checklist(&week()).expect("apr");
    let rows: Vec<(String, String, String)> = table
        .iter()
        .map(|row| {
            (
                row.text("Nota").unwrap_or_default(),
                row.text("Nº Item").unwrap_or_default(),
                row.text("Equipe").unwrap_or_default(),
            )
        })
        .collect();
    assert_eq!(
        rows,
        [
            ("123456".into(), "1".into(), "EQP-VR-01".into()),
            ("123456".into(), "2".into(), "EQP-VR-01".into()),
            ("777".into(), "1".into(), "EQP-BP-01".into()),
        ]
    );
}

#[test]
fn test_status_counts_ignore_region() {
    let snap = seed_snapshot("view_status");
    let dash = dashboard(&snap);

    let filter = week().with_region(RegionFilter::Only(Region::TresRios));
    let counts = StatusCount::from_table(&dash.status_counts(&filter).expect("status")).expect("counts");

    assert_eq!(
        counts,
        [
            StatusCount {
                status: "concluído".into(),
                total: 6
            },
            StatusCount {
                status: "pendente".into(),
                total: 2
            },
        ]
    );
}

#[test]
fn test_team_counts_and_map_points() {
    let snap = seed_snapshot("view_teams_map");
    let dash = dashboard(&snap);

    let counts =
        TeamStatusCount::from_table(&dash.team_status_counts(&week()).expect("teams")).expect("counts");
    let vr01: i64 = counts
        .iter()
        .filter(|c| c.resource == "EQP-VR-01")
        .map(|c| c.total)
        .sum();
    assert_eq!(vr01, 3);

    let points = MapPoint::from_table(&dash.map_points(&week()).expect("map"));
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].activity_id.as_deref(), Some("A8"));
    assert_eq!(points[0].lat, -22.5);
    assert_eq!(points[0].lon, -44.1);
}

#[test]
fn test_empty_result_is_not_an_error() {
    let snap = seed_snapshot("view_empty");
    let dash = dashboard(&snap);

    let filter = ViewFilter::between(d("2030-01-01"), d("2030-01-31")).expect("filter");
    let table = dash.shift_start(&filter).expect("empty is ok");
    assert!(table.is_empty());
}

#[test]
fn test_missing_snapshot_is_connection_error() {
    let dir = temp_dir("view_missing_snapshot");
    let dash = dashboard(&dir.join("nope.sqlite"));

    let err = dash.shift_start(&week()).expect_err("must fail");
    assert!(matches!(err, AppError::Connection(_)), "{err:?}");
    assert!(err.is_data_failure());
}

#[test]
fn test_broken_schema_is_query_error() {
    let dir = temp_dir("view_broken_schema");
    let path = dir.join("empty.sqlite");
    rusqlite::Connection::open(&path)
        .and_then(|c| c.execute_batch("CREATE TABLE unrelated (x TEXT);"))
        .expect("create empty snapshot");

    let err = dashboard(&path).status_counts(&week()).expect_err("must fail");
    assert!(matches!(err, AppError::Query(_)), "{err:?}");
}
