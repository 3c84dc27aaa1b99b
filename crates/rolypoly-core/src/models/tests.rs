#[cfg(test)]
mod model_tests {
    use jiff::{SignedDuration, Timestamp};

    use crate::models::{
        Activity, ActivityBlueprint, ActivityStatus, DaySummary, DayTemplate, Mutation, Schedule,
    };

    fn ts(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    fn create_test_activity(id: &str, start: Option<&str>, completed: bool) -> Activity {
        let mut activity = Activity {
            id: id.to_string(),
            name: format!("Activity {id}"),
            duration: 30,
            start_time: None,
            end_time: None,
            completed,
            order: 0,
        };
        if let Some(start) = start {
            activity.schedule_at(ts(start));
        }
        activity
    }

    #[test]
    fn test_activity_window_is_half_open() {
        let activity = create_test_activity("a", Some("2025-01-06T10:00:00Z"), false);

        assert!(activity.contains(ts("2025-01-06T10:00:00Z")));
        assert!(activity.contains(ts("2025-01-06T10:29:59Z")));
        assert!(!activity.contains(ts("2025-01-06T10:30:00Z")));
        assert!(!activity.contains(ts("2025-01-06T09:59:59Z")));
    }

    #[test]
    fn test_activity_remaining_time() {
        let activity = create_test_activity("a", Some("2025-01-06T10:00:00Z"), false);

        assert_eq!(
            activity.remaining_at(ts("2025-01-06T10:20:00Z")),
            Some(SignedDuration::from_mins(10))
        );
        assert_eq!(
            activity.remaining_at(ts("2025-01-06T11:00:00Z")),
            Some(SignedDuration::ZERO)
        );

        let unscheduled = create_test_activity("b", None, false);
        assert_eq!(unscheduled.remaining_at(ts("2025-01-06T10:20:00Z")), None);
        assert!(!unscheduled.contains(ts("2025-01-06T10:20:00Z")));
    }

    #[test]
    fn test_activity_serialization_uses_camel_case() {
        let activity = create_test_activity("a", Some("2025-01-06T10:00:00Z"), true);
        let json = serde_json::to_value(&activity).unwrap();

        assert_eq!(json["startTime"], "2025-01-06T10:00:00Z");
        assert_eq!(json["endTime"], "2025-01-06T10:30:00Z");
        assert_eq!(json["completed"], true);

        let unscheduled = create_test_activity("b", None, false);
        let json = serde_json::to_value(&unscheduled).unwrap();
        assert!(json.get("startTime").is_none());

        let back: Activity = serde_json::from_value(json).unwrap();
        assert_eq!(back, unscheduled);
    }

    #[test]
    fn test_activity_status_classification() {
        let done = create_test_activity("a", Some("2025-01-06T10:00:00Z"), true);
        let now = create_test_activity("b", Some("2025-01-06T10:30:00Z"), false);
        let next = create_test_activity("c", Some("2025-01-06T11:00:00Z"), false);

        assert_eq!(ActivityStatus::of(&done, Some("a")), ActivityStatus::Done);
        assert_eq!(ActivityStatus::of(&now, Some("b")), ActivityStatus::Current);
        assert_eq!(ActivityStatus::of(&next, Some("b")), ActivityStatus::Upcoming);
        assert_eq!(ActivityStatus::of(&next, None), ActivityStatus::Upcoming);
    }

    #[test]
    fn test_schedule_lookup() {
        let schedule = Schedule::new(vec![
            create_test_activity("a", None, true),
            create_test_activity("b", None, false),
        ]);

        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule.position("b"), Some(1));
        assert_eq!(schedule.get("a").map(|a| a.completed), Some(true));
        assert!(schedule.get("zz").is_none());
        assert!(!schedule.is_finished());
        assert!(Schedule::default().is_finished());
    }

    #[test]
    fn test_schedule_serializes_as_plain_list() {
        let schedule = Schedule::new(vec![create_test_activity("a", None, false)]);
        let json = serde_json::to_value(&schedule).unwrap();

        assert!(json.is_array());
        assert_eq!(json[0]["id"], "a");
    }

    #[test]
    fn test_day_summary() {
        let schedule = Schedule::new(vec![
            create_test_activity("a", Some("2025-01-06T09:00:00Z"), true),
            create_test_activity("b", Some("2025-01-06T10:00:00Z"), false),
            create_test_activity("c", Some("2025-01-06T11:00:00Z"), false),
            create_test_activity("d", None, false),
        ]);

        let summary = DaySummary::from_schedule(&schedule);
        assert_eq!(summary.total_activities, 4);
        assert_eq!(summary.completed_activities, 1);
        assert_eq!(summary.remaining_activities, 3);
        assert_eq!(summary.remaining_minutes, 90);
        assert_eq!(summary.planned_finish, Some(ts("2025-01-06T11:30:00Z")));
        assert_eq!(summary.completion_percentage(), 25);

        let empty = DaySummary::from_schedule(&Schedule::default());
        assert_eq!(empty.completion_percentage(), 0);
        assert_eq!(empty.planned_finish, None);
    }

    #[test]
    fn test_template_total_minutes() {
        let template = DayTemplate {
            id: "t".to_string(),
            name: "Template".to_string(),
            activities: vec![
                ActivityBlueprint {
                    id: "1".to_string(),
                    name: "One".to_string(),
                    duration: 45,
                    order: 0,
                },
                ActivityBlueprint {
                    id: "2".to_string(),
                    name: "Two".to_string(),
                    duration: 15,
                    order: 1,
                },
            ],
        };

        assert_eq!(template.total_minutes(), 60);
    }

    #[test]
    fn test_mutation_wire_format() {
        let mutation: Mutation = serde_json::from_str(
            r#"{"kind":"resize","id":"a","duration":15,"startTime":"2025-01-06T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(
            mutation,
            Mutation::Resize {
                id: "a".to_string(),
                duration: Some(15),
                start_time: Some(ts("2025-01-06T10:00:00Z")),
            }
        );
        assert_eq!(mutation.kind(), "resize");

        let reorder: Mutation =
            serde_json::from_str(r#"{"kind":"reorder","order":["b","a"]}"#).unwrap();
        assert_eq!(
            reorder,
            Mutation::Reorder {
                order: vec!["b".to_string(), "a".to_string()],
            }
        );

        let partial: Mutation = serde_json::from_str(r#"{"kind":"resize","id":"a"}"#).unwrap();
        assert_eq!(
            partial,
            Mutation::Resize {
                id: "a".to_string(),
                duration: None,
                start_time: None,
            }
        );
    }
}
