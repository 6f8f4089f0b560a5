use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// 單一活動的紀錄，活動名稱作為 `Catalog` 的鍵，不存放在此
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants<I, P>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_enrolled(&self, participant: &str) -> bool {
        self.participants.iter().any(|p| p == participant)
    }

    pub fn enrolled_count(&self) -> usize {
        self.participants.len()
    }

    /// 剩餘名額；容量只作參考，超額時回傳 0
    pub fn spots_left(&self) -> usize {
        (self.max_participants as usize).saturating_sub(self.participants.len())
    }

    pub fn is_over_capacity(&self) -> bool {
        self.participants.len() > self.max_participants as usize
    }
}

/// 活動名稱到活動紀錄的有序對應，保留建立時的順序
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<(String, Activity)>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新增活動；名稱已存在時回傳 false 且不覆寫
    pub fn insert(&mut self, name: impl Into<String>, activity: Activity) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.entries.push((name, activity));
        true
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, activity)| activity)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.entries
            .iter_mut()
            .find(|(key, _)| key == name)
            .map(|(_, activity)| activity)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries
            .iter()
            .map(|(name, activity)| (name.as_str(), activity))
    }
}

// 以 JSON 物件輸出 (name -> activity)，鍵的順序與種子資料一致
impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, activity) in &self.entries {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}
