use aegis_dns_domain::config::filtering::ScheduleConfig;
use aegis_dns_domain::Weekday;
use chrono::{Local, Timelike};

/// True when the current instant falls inside a strict schedule rule's
/// window. A non-strict match does not itself cause blocking.
pub fn is_restricted_strict(schedule: &ScheduleConfig) -> bool {
    if !schedule.enabled || schedule.rules.is_empty() {
        return false;
    }
    let now = Local::now();
    let today = Weekday::from_chrono(now.weekday());
    let hhmm = format!("{:02}:{:02}", now.hour(), now.minute());
    schedule
        .rules
        .iter()
        .any(|rule| rule.strict && rule.matches(today, &hhmm))
}
