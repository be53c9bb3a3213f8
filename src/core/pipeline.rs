use crate::core::parser::parse_listings_on;
use crate::core::{ConfigProvider, Pipeline, SourceDocument, Storage, TransformResult};
use crate::domain::model::{ListingKind, TypedRecord};
use crate::utils::error::{EtlError, Result};
use chrono::Local;
use std::io::Write;
use std::path::Path;
use zip::write::{SimpleFileOptions, ZipWriter};

pub struct ListingPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ListingPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    async fn read_documents(&self, files: &[String], kind: ListingKind) -> Result<Vec<SourceDocument>> {
        let mut documents = Vec::with_capacity(files.len());
        for file in files {
            tracing::debug!("Reading {} HTML from: {}", kind, file);
            let bytes = self.storage.read_file(file).await?;
            let html = String::from_utf8(bytes).map_err(|_| EtlError::EncodingError {
                path: file.clone(),
            })?;
            documents.push(SourceDocument {
                kind,
                name: file.clone(),
                html,
            });
        }
        Ok(documents)
    }

    /// CSV is always written; other configured formats follow in order.
    fn formats(&self) -> Vec<&str> {
        let mut formats = vec!["csv"];
        for format in self.config.output_formats() {
            if !formats.contains(&format.as_str()) {
                formats.push(format.as_str());
            }
        }
        formats
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ListingPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<SourceDocument>> {
        let mut documents = self
            .read_documents(self.config.apartment_files(), ListingKind::Apartment)
            .await?;
        documents.extend(
            self.read_documents(self.config.house_files(), ListingKind::DetachedHouse)
                .await?,
        );
        Ok(documents)
    }

    async fn transform(&self, documents: Vec<SourceDocument>) -> Result<TransformResult> {
        // 同一批次共用同一個入力日
        let today = Local::now().date_naive();
        let mut result = TransformResult {
            documents: documents.len(),
            ..Default::default()
        };

        for document in documents {
            let records = parse_listings_on(&document.html, document.kind, today);
            if records.is_empty() {
                tracing::warn!("No {} listings found in {}", document.kind, document.name);
            } else {
                tracing::debug!("{}: {} {} listings", document.name, records.len(), document.kind);
            }
            match document.kind {
                ListingKind::Apartment => result.apartments.extend(records),
                ListingKind::DetachedHouse => result.houses.extend(records),
            }
        }

        Ok(result)
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        if result.is_empty() {
            return Err(EtlError::NoRecordsError {
                documents: result.documents,
            });
        }

        let archive_path = Path::new(self.config.output_path())
            .join(self.config.archive_name())
            .to_string_lossy()
            .to_string();

        // 建立 ZIP：每種物件一張表，空的略過
        let zip_data = {
            let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

            for kind in [ListingKind::Apartment, ListingKind::DetachedHouse] {
                let records = result.records(kind);
                if records.is_empty() {
                    continue;
                }
                for format in self.formats() {
                    let (name, bytes) = match format {
                        "csv" => (format!("{}.csv", kind.sheet_name()), to_delimited(kind, records, b',')?),
                        "tsv" => (format!("{}.tsv", kind.sheet_name()), to_delimited(kind, records, b'\t')?),
                        "json" => (
                            format!("{}.json", kind.sheet_name()),
                            serde_json::to_vec_pretty(records)?,
                        ),
                        other => {
                            return Err(EtlError::InvalidConfigValueError {
                                field: "output_formats".to_string(),
                                value: other.to_string(),
                                reason: "Unsupported format".to_string(),
                            })
                        }
                    };
                    tracing::debug!("Adding {} ({} bytes)", name, bytes.len());
                    zip.start_file(name, SimpleFileOptions::default())?;
                    zip.write_all(&bytes)?;
                }
            }

            let cursor = zip.finish()?;
            cursor.into_inner()
        };

        tracing::debug!("Writing ZIP file ({} bytes) to storage", zip_data.len());
        self.storage.write_file(&archive_path, &zip_data).await?;

        Ok(archive_path)
    }
}

/// Header row in schema order, then one line per record; nulls are empty cells.
pub fn to_delimited(kind: ListingKind, records: &[TypedRecord], delimiter: u8) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer.write_record(kind.columns())?;
    for record in records {
        writer.write_record(record.values().iter().map(|v| v.to_cell()))?;
    }

    writer
        .into_inner()
        .map_err(|e| EtlError::IoError(e.into_error()))
}
