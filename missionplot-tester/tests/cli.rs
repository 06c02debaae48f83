use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "missionplot-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_list_games_writes_output() {
    let exe = env!("CARGO_BIN_EXE_missionplot-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-games", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available games"));
    assert!(content.contains("Thief Gold"));
}

#[test]
fn cli_json_report_for_one_game() {
    let exe = env!("CARGO_BIN_EXE_missionplot-tester");
    let output_path = temp_path("json");
    let status = Command::new(exe)
        .args([
            "--game",
            "Thief II: The Metal Age",
            "--limit-y",
            "5,10",
            "--report",
            "json",
            "--output",
        ])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    let value: serde_json::Value = serde_json::from_str(&content).expect("json report");
    assert_eq!(value["selection"], "Thief II: The Metal Age");
    assert_eq!(value["points"], 4);
    assert_eq!(value["y_min"], 5.0);
}

#[test]
fn cli_options_report_matches_chart_shape() {
    let exe = env!("CARGO_BIN_EXE_missionplot-tester");
    let output = Command::new(exe)
        .args(["--report", "options", "--fixed-size", "--limit-x", "2000,2010"])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("options json");
    assert_eq!(value["xAxis"]["min"], "2000-01-01");
    assert_eq!(value["xAxis"]["max"], "2010-12-31");
    assert_eq!(value["series"][0]["type"], "scatter");
    assert_eq!(value["series"][0]["symbolSize"], 20.0);
    assert_eq!(value["tooltip"]["trigger"], "item");
}

#[test]
fn cli_rejects_unknown_game() {
    let exe = env!("CARGO_BIN_EXE_missionplot-tester");
    let output = Command::new(exe)
        .args(["--game", "Thief 4"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Thief 4"));
}

#[test]
fn cli_reads_dataset_from_file() {
    let exe = env!("CARGO_BIN_EXE_missionplot-tester");
    let data_path = temp_path("data");
    std::fs::write(
        &data_path,
        r#"[
          {"name":"Rated","release_date":"2010-05-01","game":"The Dark Mod","id":1,"rating_average":7.5,"rating_count":3,
           "rating_distribution":{"7":1,"8":2}},
          {"name":"Unrated","release_date":"2011-05-01","game":"The Dark Mod","id":2,"rating_average":-1}
        ]"#,
    )
    .expect("write dataset");
    let output = Command::new(exe)
        .args(["--report", "json", "--data"])
        .arg(&data_path)
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json report");
    assert_eq!(value["points"], 1);
    assert_eq!(value["games"][0]["game"], "The Dark Mod");
}
