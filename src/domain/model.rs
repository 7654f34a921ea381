use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// 輸入清單中的一筆資料，所有欄位皆為選填
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(rename = "objectID", default)]
    pub object_id: Option<Value>,
    #[serde(rename = "objectName", default)]
    pub object_name: Option<Value>,
    // 欄位存在但為 null 時保留 Some(Value::Null)，與欄位缺少區分
    #[serde(
        rename = "baseValue",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub base_value: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl Record {
    /// 編輯時使用的目前值：缺少或 null 都視為沒有值
    pub fn current_value(&self) -> Option<&Value> {
        self.base_value.as_ref().filter(|v| !v.is_null())
    }

    /// 只保留必要欄位，不含 baseValue
    pub fn cleaned(&self) -> CleanedRecord {
        CleanedRecord {
            id: self.id.clone(),
            object_id: self.object_id.clone(),
            object_name: self.object_name.clone(),
            base_value: None,
        }
    }

    /// 退出後剩餘資料的簡化形式：baseValue 只要欄位存在就原樣複製
    pub fn abbreviate(&self) -> CleanedRecord {
        CleanedRecord {
            base_value: self.base_value.clone(),
            ..self.cleaned()
        }
    }
}

/// 寫回檔案的資料形式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanedRecord {
    pub id: Option<Value>,
    #[serde(rename = "objectID")]
    pub object_id: Option<Value>,
    #[serde(rename = "objectName")]
    pub object_name: Option<Value>,
    #[serde(rename = "baseValue", skip_serializing_if = "Option::is_none")]
    pub base_value: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub list: Vec<Record>,
}

/// 輸出檔案的頂層結構
#[derive(Debug, Serialize)]
pub struct SavedDocument<'a> {
    pub list: &'a [CleanedRecord],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// 保留原值 (直接回車或輸入無效數字)
    Kept,
    /// 以新輸入取代原值
    Changed,
    /// 原本沒有值，輸入了新值
    Entered,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditReport {
    pub records: Vec<CleanedRecord>,
    pub kept: usize,
    pub changed: usize,
    pub entered: usize,
    pub drained: usize,
    pub quit_at: Option<usize>,
}

impl EditReport {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    pub fn push_edited(&mut self, record: CleanedRecord, outcome: EditOutcome) {
        match outcome {
            EditOutcome::Kept => self.kept += 1,
            EditOutcome::Changed => self.changed += 1,
            EditOutcome::Entered => self.entered += 1,
        }
        self.records.push(record);
    }

    pub fn push_drained(&mut self, record: CleanedRecord) {
        self.drained += 1;
        self.records.push(record);
    }
}
