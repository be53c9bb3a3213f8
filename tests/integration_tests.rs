use listing_etl::core::Pipeline;
use listing_etl::{CliConfig, EtlEngine, EtlError, ListingPipeline, LocalStorage, TomlConfig};
use std::io::Read;
use tempfile::TempDir;

const APARTMENTS: &str = r#"<html><body>
<div class="p-table">
  <div class="p-table-header">
    <div class="p-table-header-item" style="grid-row-start: 1; grid-column-start: 1">No.</div>
    <div class="p-table-header-item" style="grid-row-start: 1; grid-column-start: 2">物件番号</div>
    <div class="p-table-header-item" style="grid-row-start: 1; grid-column-start: 3">価格</div>
    <div class="p-table-header-item" style="grid-row-start: 1; grid-column-start: 4">専有面積</div>
    <div class="p-table-header-item" style="grid-row-start: 1; grid-column-start: 5">建物名</div>
  </div>
  <div class="p-table-body">
    <div class="p-table-body-row">
      <div class="p-table-body-item" style="grid-row-start: 1; grid-column-start: 1">1</div>
      <div class="p-table-body-item" style="grid-row-start: 1; grid-column-start: 2">100123456789</div>
      <div class="p-table-body-item" style="grid-row-start: 1; grid-column-start: 3">6,000万円</div>
      <div class="p-table-body-item" style="grid-row-start: 1; grid-column-start: 4">60㎡</div>
      <div class="p-table-body-item" style="grid-row-start: 1; grid-column-start: 5">グランドメゾン, 目黒</div>
    </div>
  </div>
</div></body></html>"#;

const VILLAS: &str = r#"<div class="p-table small">
  <div class="p-table-header">
    <div class="p-table-header-item" style="grid-column-start: 1">価格</div>
    <div class="p-table-header-item" style="grid-column-start: 2">建物面積</div>
  </div>
  <div class="p-table-body">
    <div class="p-table-body-row">
      <div class="p-table-body-item" style="grid-column-start: 1">4,500万円</div>
      <div class="p-table-body-item" style="grid-column-start: 2">90㎡</div>
    </div>
  </div>
</div>"#;

fn write_inputs(dir: &TempDir) -> (String, String) {
    let apartments = dir.path().join("apartments.html");
    let villas = dir.path().join("villas.html");
    std::fs::write(&apartments, APARTMENTS).unwrap();
    std::fs::write(&villas, VILLAS).unwrap();
    (
        apartments.to_string_lossy().to_string(),
        villas.to_string_lossy().to_string(),
    )
}

fn cli_config(apartments: Vec<String>, houses: Vec<String>, output_path: String) -> CliConfig {
    CliConfig {
        apartment_files: apartments,
        house_files: houses,
        output_path,
        formats: vec!["csv".to_string(), "tsv".to_string(), "json".to_string()],
        archive_name: "export_all.zip".to_string(),
        config: None,
        json_logs: false,
        verbose: false,
    }
}

fn read_entry(archive: &mut zip::ZipArchive<std::io::Cursor<Vec<u8>>>, name: &str) -> String {
    let mut content = String::new();
    archive
        .by_name(name)
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    content
}

#[tokio::test]
async fn test_end_to_end_export_both_kinds() {
    let temp_dir = TempDir::new().unwrap();
    let (apartments, villas) = write_inputs(&temp_dir);
    let output_path = temp_dir.path().join("out").to_string_lossy().to_string();

    let config = cli_config(vec![apartments], vec![villas], output_path.clone());
    let pipeline = ListingPipeline::new(LocalStorage::current_dir(), config);
    let result = EtlEngine::new(pipeline).run().await.unwrap();

    assert!(result.ends_with("export_all.zip"));
    let zip_data = std::fs::read(&result).unwrap();
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(zip_data)).unwrap();
    assert_eq!(archive.len(), 6);

    let csv_text = read_entry(&mut archive, "apartments.csv");
    let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.len(), 21);
    assert_eq!(&headers[20], "入力日 (YYYYMMDD)");

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(&rows[0][1], "100123456789");
    assert_eq!(&rows[0][6], "6000");
    assert_eq!(&rows[0][8], "100");
    // 含逗號的欄位需被引號包住
    assert_eq!(&rows[0][9], "グランドメゾン, 目黒");
    assert_eq!(&rows[0][13], "");

    let villas_json: serde_json::Value =
        serde_json::from_str(&read_entry(&mut archive, "villas.json")).unwrap();
    assert_eq!(villas_json[0]["価格 (万円)"], serde_json::json!(4500.0));
    assert_eq!(villas_json[0]["㎡単価 (万円/㎡)"], serde_json::json!(50.0));
    assert!(villas_json[0]["土地面積 (㎡)"].is_null());

    let villas_tsv = read_entry(&mut archive, "villas.tsv");
    assert!(villas_tsv.lines().next().unwrap().contains("接道状況\t沿線駅"));
}

#[tokio::test]
async fn test_empty_documents_report_no_records() {
    let temp_dir = TempDir::new().unwrap();
    let blank = temp_dir.path().join("blank.html");
    std::fs::write(&blank, "<p>データがありません</p>").unwrap();
    let output_path = temp_dir.path().join("out").to_string_lossy().to_string();

    let config = cli_config(
        vec![blank.to_string_lossy().to_string()],
        vec![],
        output_path.clone(),
    );
    let pipeline = ListingPipeline::new(LocalStorage::current_dir(), config);

    let documents = pipeline.extract().await.unwrap();
    let transformed = pipeline.transform(documents).await.unwrap();
    assert!(transformed.is_empty());
    assert_eq!(transformed.documents, 1);

    let err = pipeline.load(transformed).await.unwrap_err();
    assert!(matches!(err, EtlError::NoRecordsError { documents: 1 }));
    assert!(!std::path::Path::new(&output_path).join("export_all.zip").exists());
}

#[tokio::test]
async fn test_toml_driven_run() {
    let temp_dir = TempDir::new().unwrap();
    let (_, villas) = write_inputs(&temp_dir);
    let output_path = temp_dir.path().join("toml-out");

    let toml_content = format!(
        r#"
[pipeline]
name = "villas-only"

[source]
house_files = ["{}"]

[load]
output_path = "{}"
"#,
        villas.replace('\\', "/"),
        output_path.to_string_lossy().replace('\\', "/")
    );
    let config = TomlConfig::from_toml_str(&toml_content).unwrap();

    let pipeline = ListingPipeline::new(LocalStorage::current_dir(), config);
    let result = EtlEngine::new(pipeline).run().await.unwrap();

    let zip_data = std::fs::read(&result).unwrap();
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(zip_data)).unwrap();
    let names: Vec<&str> = archive.file_names().collect();
    assert_eq!(names, vec!["villas.csv"]);

    let csv_text = read_entry(&mut archive, "villas.csv");
    assert_eq!(csv_text.lines().count(), 2);
}
