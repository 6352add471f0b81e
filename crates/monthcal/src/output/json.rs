//! JSON output formatting.

/// Format a value as JSON, in the same shape the events are stored in.
pub fn format_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use monthcal_core::calendar::{Event, EventDraft, EventId};

    #[test]
    fn test_event_json_uses_stored_shape() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let event = Event::from_draft(EventId::from("evt"), EventDraft::all_day("Birthday", date));

        let value: serde_json::Value = serde_json::from_str(&format_json(&event)).unwrap();

        assert_eq!(value["id"], "evt");
        assert_eq!(value["allDay"], true);
        assert_eq!(value["color"], "red");
    }
}
