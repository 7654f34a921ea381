use crate::core::editor::edit_records;
use crate::core::{ConfigProvider, Document, EditReport, Pipeline, Prompter, Storage};
use crate::domain::model::{CleanedRecord, SavedDocument};
use crate::utils::error::{EditorError, Result};
use crate::utils::validation::validate_document;
use std::sync::Mutex;

/// Loads the values file, runs the interactive editor over its list and
/// writes the cleaned list back to the same path.
pub struct ValuesPipeline<S: Storage, C: ConfigProvider, P: Prompter> {
    storage: S,
    config: C,
    prompter: Mutex<P>,
}

impl<S: Storage, C: ConfigProvider, P: Prompter> ValuesPipeline<S, C, P> {
    pub fn new(storage: S, config: C, prompter: P) -> Self {
        Self {
            storage,
            config,
            prompter: Mutex::new(prompter),
        }
    }

    pub fn into_prompter(self) -> P {
        self.prompter
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// 以兩格縮排輸出，非 ASCII 字元保持原樣
pub fn render_document(records: &[CleanedRecord]) -> Result<String> {
    let json = serde_json::to_string_pretty(&SavedDocument { list: records })?;
    Ok(json)
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, P: Prompter> Pipeline for ValuesPipeline<S, C, P> {
    async fn extract(&self) -> Result<Document> {
        let path = self.config.values_path();
        tracing::debug!("Reading {}", path);

        let data = self.storage.read_file(path).await?;
        let raw: serde_json::Value =
            serde_json::from_slice(&data).map_err(|source| EditorError::Parse {
                path: path.to_string(),
                source,
            })?;

        let document = validate_document(raw)?;
        tracing::debug!("Loaded {} records", document.list.len());
        Ok(document)
    }

    async fn transform(&self, document: Document) -> Result<EditReport> {
        let mut prompter = self
            .prompter
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        edit_records(&document.list, &mut *prompter, self.config.placeholder())
    }

    async fn load(&self, report: EditReport) -> Result<String> {
        let path = self.config.values_path();
        let save_error = |message: String| EditorError::Save {
            path: path.to_string(),
            message,
        };

        let json = render_document(&report.records).map_err(|e| save_error(e.to_string()))?;

        tracing::debug!("Writing {} records ({} bytes) to {}", report.records.len(), json.len(), path);
        self.storage
            .write_file(path, json.as_bytes())
            .await
            .map_err(|e| save_error(e.to_string()))?;

        Ok(path.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::Console;
    use crate::config::Settings;
    use serde_json::json;
    use std::collections::HashMap;
    use std::io::Cursor;
    use std::sync::Arc;
    use tokio::sync::Mutex as AsyncMutex;

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<AsyncMutex<HashMap<String, Vec<u8>>>>,
        fail_writes: bool,
    }

    impl MockStorage {
        async fn put(&self, path: &str, data: &str) {
            self.files
                .lock()
                .await
                .insert(path.to_string(), data.as_bytes().to_vec());
        }

        async fn get(&self, path: &str) -> Option<Vec<u8>> {
            self.files.lock().await.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| EditorError::NotFound {
                path: path.to_string(),
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            if self.fail_writes {
                return Err(EditorError::IoError(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "read-only filesystem",
                )));
            }
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    fn pipeline(
        storage: MockStorage,
        input: &str,
    ) -> ValuesPipeline<MockStorage, Settings, Console<Cursor<Vec<u8>>, Vec<u8>>> {
        let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        ValuesPipeline::new(storage, Settings::default(), console)
    }

    #[tokio::test]
    async fn test_extract_reports_parse_error_with_path() {
        let storage = MockStorage::default();
        storage.put("./public/json/values.json", "not json").await;

        let err = pipeline(storage, "").extract().await.unwrap_err();
        match err {
            EditorError::Parse { path, .. } => assert_eq!(path, "./public/json/values.json"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[tokio::test]
    async fn test_full_cycle_through_trait() {
        let storage = MockStorage::default();
        storage
            .put(
                "./public/json/values.json",
                r#"{"list":[{"id":1,"objectName":"Foo"},{"id":2,"baseValue":2}]}"#,
            )
            .await;

        let pipeline = pipeline(storage.clone(), "15\n\n");
        let document = pipeline.extract().await.unwrap();
        let report = pipeline.transform(document).await.unwrap();
        assert_eq!(report.entered, 1);
        assert_eq!(report.kept, 1);

        pipeline.load(report).await.unwrap();
        let saved: serde_json::Value =
            serde_json::from_slice(&storage.get("./public/json/values.json").await.unwrap())
                .unwrap();
        assert_eq!(
            saved,
            json!({"list":[
                {"id":1,"objectID":null,"objectName":"Foo","baseValue":15},
                {"id":2,"objectID":null,"objectName":null,"baseValue":2}
            ]})
        );
    }

    #[tokio::test]
    async fn test_write_failure_becomes_save_error() {
        let storage = MockStorage {
            fail_writes: true,
            ..MockStorage::default()
        };

        let report = EditReport::default();
        let err = pipeline(storage, "").load(report).await.unwrap_err();

        assert!(matches!(err, EditorError::Save { .. }));
        assert!(!err.is_fatal());
        assert!(err.user_friendly_message().starts_with("Failed to save file:"));
    }

    #[test]
    fn test_render_empty_list() {
        assert_eq!(render_document(&[]).unwrap(), "{\n  \"list\": []\n}");
    }
}
