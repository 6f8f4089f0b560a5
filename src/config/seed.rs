use crate::core::{Activity, Catalog};
use crate::utils::error::{Result, RosterError};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_unique, Validate,
};
use serde::{Deserialize, Serialize};

/// 設定檔中的一筆活動種子資料 (`[[activities]]`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySeed {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl ActivitySeed {
    pub fn new(
        name: &str,
        description: &str,
        schedule: &str,
        max_participants: u32,
        participants: &[&str],
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    fn into_activity(self) -> (String, Activity) {
        let activity = Activity::new(self.description, self.schedule, self.max_participants)
            .with_participants(self.participants);
        (self.name, activity)
    }
}

impl Validate for ActivitySeed {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("activities.name", &self.name)?;
        validate_positive_number(
            &format!("activities.{}.max_participants", self.name),
            self.max_participants,
            1,
        )?;

        let field = format!("activities.{}.participants", self.name);
        for participant in &self.participants {
            validate_non_empty_string(&field, participant)?;
        }
        validate_unique(&field, self.participants.iter().map(String::as_str))
    }
}

/// 驗證種子資料並依序建立名冊
pub fn build_catalog(seeds: &[ActivitySeed]) -> Result<Catalog> {
    if seeds.is_empty() {
        return Err(RosterError::ConfigError {
            message: "at least one activity must be configured".to_string(),
        });
    }

    for seed in seeds {
        seed.validate()?;
    }
    validate_unique("activities.name", seeds.iter().map(|s| s.name.as_str()))?;

    let mut catalog = Catalog::new();
    for seed in seeds.iter().cloned() {
        let (name, activity) = seed.into_activity();
        catalog.insert(name, activity);
    }

    tracing::debug!("Seeded catalog with {} activities", catalog.len());
    Ok(catalog)
}

/// 內建的學校社團活動清單
pub fn default_seeds() -> Vec<ActivitySeed> {
    vec![
        ActivitySeed::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        ActivitySeed::new(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        ActivitySeed::new(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
        ActivitySeed::new(
            "Soccer Team",
            "Join the school soccer team and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
            &["liam@mergington.edu", "noah@mergington.edu"],
        ),
        ActivitySeed::new(
            "Basketball Team",
            "Practice and play basketball with the school team",
            "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
            15,
            &["ava@mergington.edu", "mia@mergington.edu"],
        ),
        ActivitySeed::new(
            "Art Club",
            "Explore your creativity through painting and drawing",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            &["amelia@mergington.edu", "harper@mergington.edu"],
        ),
        ActivitySeed::new(
            "Drama Club",
            "Act, direct, and produce plays and performances",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            20,
            &["ella@mergington.edu", "scarlett@mergington.edu"],
        ),
        ActivitySeed::new(
            "Math Club",
            "Solve challenging problems and participate in math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
            &["james@mergington.edu", "benjamin@mergington.edu"],
        ),
        ActivitySeed::new(
            "Debate Team",
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
            &["charlotte@mergington.edu", "henry@mergington.edu"],
        ),
    ]
}

pub fn default_catalog() -> Result<Catalog> {
    build_catalog(&default_seeds())
}
