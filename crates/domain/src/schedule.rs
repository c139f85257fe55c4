use serde::{Deserialize, Serialize};

/// One schedule rule: a set of active weekdays plus an `HH:MM` window and
/// whether the window is strict. Comparison of `start`/`end` against the
/// current time is lexicographic on the zero-padded `"HH:MM"` string,
/// which coincides with time order for 24-hour format — config loading
/// (out of scope here) is responsible for enforcing that format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRule {
    pub days: Vec<Weekday>,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub strict: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    pub fn from_chrono(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Mon,
            chrono::Weekday::Tue => Weekday::Tue,
            chrono::Weekday::Wed => Weekday::Wed,
            chrono::Weekday::Thu => Weekday::Thu,
            chrono::Weekday::Fri => Weekday::Fri,
            chrono::Weekday::Sat => Weekday::Sat,
            chrono::Weekday::Sun => Weekday::Sun,
        }
    }
}

impl ScheduleRule {
    /// Does this rule match `(today, "HH:MM")`?
    pub fn matches(&self, today: Weekday, now_hhmm: &str) -> bool {
        self.days.contains(&today)
            && self.start.as_str() <= now_hhmm
            && now_hhmm <= self.end.as_str()
    }
}
