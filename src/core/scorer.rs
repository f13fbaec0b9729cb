use crate::domain::model::{CardAssessment, CardRecord, DueStatus};
use crate::utils::error::{PressureError, Result};
use chrono::{DateTime, TimeDelta, Utc};

pub const NO_DUE_DATE_PRESSURE: u32 = 1;
pub const MALFORMED_DUE_DATE_PRESSURE: u32 = 1;
pub const OVERDUE_PRESSURE: u32 = 20;
pub const DUE_WITHIN_DAY_PRESSURE: u32 = 10;
pub const DUE_WITHIN_WEEK_PRESSURE: u32 = 5;
pub const DUE_LATER_PRESSURE: u32 = 2;

pub const DAY_HOURS: f64 = 24.0;
pub const WEEK_HOURS: f64 = 24.0 * 7.0;

impl DueStatus {
    /// 依剩餘小時數分類；24 與 168 小時都屬於較緊急的一側
    pub fn from_hours_left(hours_left: f64) -> Self {
        if hours_left < 0.0 {
            Self::Overdue {
                hours_overdue: -hours_left,
            }
        } else if hours_left <= DAY_HOURS {
            Self::DueWithinDay { hours_left }
        } else if hours_left <= WEEK_HOURS {
            Self::DueWithinWeek { hours_left }
        } else {
            Self::DueLater { hours_left }
        }
    }

    pub fn pressure(&self) -> u32 {
        match self {
            Self::NoDueDate => NO_DUE_DATE_PRESSURE,
            Self::MalformedDueDate => MALFORMED_DUE_DATE_PRESSURE,
            Self::Overdue { .. } => OVERDUE_PRESSURE,
            Self::DueWithinDay { .. } => DUE_WITHIN_DAY_PRESSURE,
            Self::DueWithinWeek { .. } => DUE_WITHIN_WEEK_PRESSURE,
            Self::DueLater { .. } => DUE_LATER_PRESSURE,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::NoDueDate => "No due date".to_string(),
            Self::MalformedDueDate => "Date parsing error".to_string(),
            Self::Overdue { hours_overdue } => {
                format!("Overdue (overdue by {:.1} hours)", hours_overdue)
            }
            Self::DueWithinDay { hours_left } => {
                format!("Due within 24 hours ({:.1} hours remaining)", hours_left)
            }
            Self::DueWithinWeek { hours_left } => {
                format!("Due within 7 days ({:.1} days remaining)", hours_left / DAY_HOURS)
            }
            Self::DueLater { .. } => "Due in more than 7 days".to_string(),
        }
    }
}

/// 將 API 的 UTC 時間字串（結尾 `Z`）解析為 UTC 時刻
pub fn parse_due(raw: &str) -> Result<DateTime<Utc>> {
    let trimmed = raw.trim();
    let normalized = match trimmed.strip_suffix(&['Z', 'z'][..]) {
        Some(stripped) => format!("{}+00:00", stripped),
        None => trimmed.to_string(),
    };

    // RFC 3339 要求秒數；手動輸入的 `2025-03-10T12:00Z` 以 0 秒計
    DateTime::parse_from_rfc3339(&normalized)
        .or_else(|e| DateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M%:z").map_err(|_| e))
        .map(|due| due.with_timezone(&Utc))
        .map_err(|e| PressureError::MalformedDueDate {
            value: raw.to_string(),
            reason: e.to_string(),
        })
}

pub fn hours_between(now: DateTime<Utc>, due: DateTime<Utc>) -> f64 {
    let delta: TimeDelta = due - now;
    match delta.num_microseconds() {
        Some(micros) => micros as f64 / 3_600_000_000.0,
        // 超過 i64 微秒範圍時退回秒精度
        None => delta.num_seconds() as f64 / 3_600.0,
    }
}

/// 依到期時間累計清單壓力值。只讀取傳入的 `now`，不讀取系統時鐘。
#[derive(Debug, Clone, Copy, Default)]
pub struct PressureScorer;

impl PressureScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, card: &CardRecord, now: DateTime<Utc>) -> DueStatus {
        let raw = match card.due.as_deref() {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => return DueStatus::NoDueDate,
        };

        match parse_due(raw) {
            Ok(due) => DueStatus::from_hours_left(hours_between(now, due)),
            Err(e) => {
                tracing::info!("Card '{}': date parsing error ({})", card.name, e);
                DueStatus::MalformedDueDate
            }
        }
    }

    pub fn assess(&self, cards: &[CardRecord], now: DateTime<Utc>) -> Vec<CardAssessment> {
        cards
            .iter()
            .map(|card| {
                let status = self.classify(card, now);
                let pressure = status.pressure();
                tracing::debug!(
                    "Card '{}': {} -> pressure +{}",
                    card.name,
                    status.describe(),
                    pressure
                );
                CardAssessment {
                    name: card.name.clone(),
                    due: card.due.clone(),
                    status,
                    pressure,
                }
            })
            .collect()
    }

    pub fn score(&self, cards: &[CardRecord], now: DateTime<Utc>) -> u32 {
        cards
            .iter()
            .map(|card| self.classify(card, now).pressure())
            .fold(0u32, u32::saturating_add)
    }
}

pub fn total_pressure(assessments: &[CardAssessment]) -> u32 {
    assessments
        .iter()
        .map(|assessment| assessment.pressure)
        .fold(0u32, u32::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{SecondsFormat, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
    }

    fn card_due_in(name: &str, delta: TimeDelta) -> CardRecord {
        let due = (now() + delta).to_rfc3339_opts(SecondsFormat::Millis, true);
        CardRecord::new(name, Some(due))
    }

    fn contribution(card: CardRecord) -> u32 {
        PressureScorer::new().score(&[card], now())
    }

    #[test]
    fn test_parse_due_accepts_utc_designator() {
        let parsed = parse_due("2025-03-10T12:00:00.000Z").unwrap();
        assert_eq!(parsed, now());

        let lowercase = parse_due("2025-03-10T12:00:00z").unwrap();
        assert_eq!(lowercase, now());
    }

    #[test]
    fn test_parse_due_converts_offsets_to_utc() {
        let parsed = parse_due("2025-03-10T14:00:00+02:00").unwrap();
        assert_eq!(parsed, now());
    }

    #[test]
    fn test_parse_due_without_seconds() {
        assert_eq!(parse_due("2025-03-10T12:00Z").unwrap(), now());
        assert_eq!(parse_due("2025-03-10T14:00+02:00").unwrap(), now());
    }

    #[test]
    fn test_parse_due_rejects_garbage() {
        let err = parse_due("next tuesday").unwrap_err();
        assert!(matches!(err, PressureError::MalformedDueDate { .. }));
    }

    #[test]
    fn test_due_in_ten_hours_is_within_day() {
        assert_eq!(contribution(card_due_in("soon", TimeDelta::hours(10))), 10);
    }

    #[test]
    fn test_inclusive_boundaries() {
        // 剛好到期與剛好 24 小時都算「24 小時內」
        assert_eq!(contribution(card_due_in("now", TimeDelta::zero())), 10);
        assert_eq!(contribution(card_due_in("24h", TimeDelta::hours(24))), 10);
        assert_eq!(contribution(card_due_in("24h+", TimeDelta::hours(24) + TimeDelta::seconds(1))), 5);
        assert_eq!(contribution(card_due_in("168h", TimeDelta::hours(168))), 5);
        // 168.0001 小時 = 168 小時又 360 毫秒
        assert_eq!(
            contribution(card_due_in("168.0001h", TimeDelta::hours(168) + TimeDelta::milliseconds(360))),
            2
        );
    }

    #[test]
    fn test_overdue_dominates() {
        assert_eq!(contribution(card_due_in("late", TimeDelta::seconds(-1))), 20);
        assert_eq!(contribution(card_due_in("very late", TimeDelta::days(-30))), 20);
    }

    #[test]
    fn test_distant_due_date() {
        assert_eq!(contribution(card_due_in("later", TimeDelta::days(30))), 2);
    }

    #[test]
    fn test_missing_and_malformed_due_dates_count_one() {
        assert_eq!(contribution(CardRecord::new("none", None)), 1);
        assert_eq!(contribution(CardRecord::new("empty", Some(String::new()))), 1);
        assert_eq!(contribution(CardRecord::new("blank", Some("   ".to_string()))), 1);
        assert_eq!(contribution(CardRecord::new("bad", Some("2025-13-45T99:00:00Z".to_string()))), 1);
    }

    #[test]
    fn test_malformed_due_date_does_not_stop_later_cards() {
        let cards = vec![
            CardRecord::new("bad", Some("not-a-date".to_string())),
            card_due_in("late", TimeDelta::hours(-1)),
            card_due_in("week", TimeDelta::days(3)),
        ];

        let scorer = PressureScorer::new();
        let assessments = scorer.assess(&cards, now());

        assert_eq!(assessments.len(), 3);
        assert_eq!(assessments[0].status, DueStatus::MalformedDueDate);
        assert!(matches!(assessments[1].status, DueStatus::Overdue { .. }));
        assert!(matches!(assessments[2].status, DueStatus::DueWithinWeek { .. }));
        assert_eq!(scorer.score(&cards, now()), 1 + 20 + 5);
    }

    #[test]
    fn test_empty_cards_score_zero() {
        assert_eq!(PressureScorer::new().score(&[], now()), 0);
        assert!(PressureScorer::new().assess(&[], now()).is_empty());
    }

    #[test]
    fn test_three_card_scenario_scores_31() {
        let cards = vec![
            card_due_in("overdue", TimeDelta::hours(-2)),
            card_due_in("today", TimeDelta::hours(5)),
            CardRecord::new("someday", None),
        ];

        let scorer = PressureScorer::new();
        let assessments = scorer.assess(&cards, now());

        assert_eq!(scorer.score(&cards, now()), 31);
        assert_eq!(total_pressure(&assessments), 31);
        assert_eq!(
            assessments[0].status,
            DueStatus::Overdue { hours_overdue: 2.0 }
        );
        assert_eq!(assessments[0].status.describe(), "Overdue (overdue by 2.0 hours)");
    }

    #[test]
    fn test_score_is_idempotent() {
        let cards = vec![
            card_due_in("a", TimeDelta::hours(30)),
            CardRecord::new("b", Some("garbage".to_string())),
        ];
        let scorer = PressureScorer::new();

        assert_eq!(scorer.score(&cards, now()), scorer.score(&cards, now()));
        assert_eq!(scorer.assess(&cards, now()), scorer.assess(&cards, now()));
    }

    #[test]
    fn test_week_description_uses_days() {
        let status = DueStatus::from_hours_left(36.0);
        assert_eq!(status.describe(), "Due within 7 days (1.5 days remaining)");
    }
}
