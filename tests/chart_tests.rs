use iptrack::chart;
use iptrack::error::TrackerError;
use iptrack::models::IpRecord;
use iptrack::store::RecordStore;

fn record(ip: &str, country: &str) -> IpRecord {
    IpRecord {
        ip: ip.to_string(),
        city: "N/A".to_string(),
        region: "N/A".to_string(),
        country: country.to_string(),
        latitude: None,
        longitude: None,
        isp: "N/A".to_string(),
        timezone: "N/A".to_string(),
    }
}

#[test]
fn test_layout_assigns_ordinals_by_first_appearance() {
    let records = vec![
        record("24.48.0.1", "Canada"),
        record("1.1.1.1", "Australia"),
        record("99.230.0.1", "Canada"),
    ];

    let rows = chart::layout(&records, 100);

    assert_eq!(rows[0].ordinal, 1);
    assert_eq!(rows[1].ordinal, 2);
    assert_eq!(rows[2].ordinal, 1);
}

#[test]
fn test_layout_same_country_draws_equal_bars() {
    let records = vec![
        record("24.48.0.1", "Canada"),
        record("1.1.1.1", "Australia"),
        record("99.230.0.1", "Canada"),
    ];

    let rows = chart::layout(&records, 100);

    assert_eq!(rows[0].cells, rows[2].cells);
    // Bar length scales with the category ordinal
    assert_eq!(rows[1].cells, 2 * rows[0].cells);
}

#[test]
fn test_layout_bars_fit_the_width() {
    let records = vec![
        record("8.8.8.8", "United States"),
        record("24.48.0.1", "Canada"),
        record("1.1.1.1", "Australia"),
        record("203.0.113.7", "New Zealand"),
    ];
    let width = 40;

    for row in chart::layout(&records, width) {
        assert!(row.cells >= 1);
        assert!(row.label.len() + row.cells + row.country.len() + 4 <= width);
    }
}

#[test]
fn test_layout_pads_labels_to_a_common_width() {
    let records = vec![record("8.8.8.8", "United States"), record("203.0.113.7", "Canada")];

    let rows = chart::layout(&records, 100);

    assert_eq!(rows[0].label.len(), rows[1].label.len());
    assert_eq!(rows[0].label, "8.8.8.8    ");
    assert_eq!(rows[1].label, "203.0.113.7");
}

#[test]
fn test_layout_survives_a_width_narrower_than_the_labels() {
    let records = vec![
        record("198.51.100.23", "United Kingdom"),
        record("203.0.113.7", "New Zealand"),
    ];

    // Far too narrow for label + bar + country; every bar degrades to one cell
    for row in chart::layout(&records, 5) {
        assert_eq!(row.cells, 1);
    }
}

#[test]
fn test_render_empty_store_reports_no_data() {
    let store = RecordStore::new();

    let err = chart::render(&store).unwrap_err();
    assert!(matches!(err, TrackerError::NoData));
    assert_eq!(
        err.to_string(),
        "No data available for graphical representation."
    );
}
