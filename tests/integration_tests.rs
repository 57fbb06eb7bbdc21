use std::fs;
use tempfile::TempDir;
use ticket_stats::config::toml_config::TomlConfig;
use ticket_stats::core::report::OutputFormat;
use ticket_stats::{CsvTicketSource, Period, Settings, StatsEngine, TicketError};

const SAMPLE_CSV: &str = "\
1,Tait Mc Caughan,tmc0@scribd.com,Brazil,00:11,785
2,Padget McKee,pmckee1@hexun.com,Madagascar,02:19,537
3,Yalonda Jermyn,yjermyn2@omniture.com,Brazil,18:11,579
4,Diannne Pharrow,dpharrow3@icio.us,Brazil,23:16,1238
not-a-number,Broken Row,broken@example.com,Brazil,10:00,100
5,Arline Sivewright,asivewright4@hatena.ne.jp,Japan,07:00,863
";

fn write_fixture(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_end_to_end_report_from_csv() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_fixture(&temp_dir, "tickets.csv", SAMPLE_CSV);

    let engine = StatsEngine::new(CsvTicketSource::new(&input));
    let report = engine.run("Brazil", Period::EarlyMorning).unwrap();

    // the malformed row is skipped
    assert_eq!(report.total_tickets, 5);
    assert_eq!(report.destination_count, 3);
    assert_eq!(report.period_count, 2);
    assert!((report.destination_percentage - 0.6).abs() < 1e-9);
    assert_eq!(report.period_breakdown[&Period::Morning], 1);
    assert_eq!(report.period_breakdown[&Period::Afternoon], 1);
    assert_eq!(report.period_breakdown[&Period::Evening], 1);

    let text = report.render(OutputFormat::Text).unwrap();
    assert!(text.contains("total tickets: 5"));
    assert!(text.contains("tickets to Brazil: 3"));
    assert!(text.contains("share of tickets to Brazil: 0.600"));
}

#[test]
fn test_missing_input_file_aborts() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("tickets.csv");

    let engine = StatsEngine::new(CsvTicketSource::new(missing));
    let err = engine.run("Brazil", Period::EarlyMorning).unwrap_err();

    assert!(matches!(err, TicketError::IoError(_)));
}

#[test]
fn test_empty_destination_aborts() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_fixture(&temp_dir, "tickets.csv", SAMPLE_CSV);

    let engine = StatsEngine::new(CsvTicketSource::new(&input));
    let err = engine.run("", Period::EarlyMorning).unwrap_err();

    assert!(matches!(err, TicketError::CountryNotFound));
    assert!(err.is_query_error());
}

#[test]
fn test_empty_file_yields_zero_share() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_fixture(&temp_dir, "tickets.csv", "");

    let engine = StatsEngine::new(CsvTicketSource::new(&input));
    let report = engine.run("Brazil", Period::Evening).unwrap();

    assert_eq!(report.total_tickets, 0);
    assert_eq!(report.destination_percentage, 0.0);
}

#[test]
fn test_toml_config_drives_the_run() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_fixture(&temp_dir, "tickets.csv", SAMPLE_CSV);
    let config_path = write_fixture(
        &temp_dir,
        "stats.toml",
        &format!(
            "input = {:?}\ndestination = \"Madagascar\"\nperiod = \"evening\"\nformat = \"json\"\n",
            input
        ),
    );

    let settings = Settings::from_toml(TomlConfig::from_file(&config_path).unwrap());
    assert_eq!(settings.format, OutputFormat::Json);

    let engine = StatsEngine::new(CsvTicketSource::new(&settings.input));
    let report = engine.run(&settings.destination, settings.period).unwrap();

    assert_eq!(report.destination_count, 1);
    assert_eq!(report.period_count, 1);

    let json: serde_json::Value =
        serde_json::from_str(&report.render(settings.format).unwrap()).unwrap();
    assert_eq!(json["destination"], "Madagascar");
    assert_eq!(json["period"], "evening");
    assert_eq!(json["total_tickets"], 5);
}
