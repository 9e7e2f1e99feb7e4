use chrono::{DateTime, NaiveDateTime, Utc};

pub const DATE_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

// accepts RFC 3339 (with offset) as well as a naive ISO-8601 timestamp,
// e.g. 2022-09-24T04:40:35.726029
pub(crate) fn parse_date(str_time: &str) -> Option<NaiveDateTime> {
    if let Ok(date) = DateTime::parse_from_rfc3339(str_time) {
        return Some(date.naive_utc());
    }
    NaiveDateTime::parse_from_str(str_time, DATE_FMT).ok()
}

pub(crate) fn time_to_json(t: NaiveDateTime) -> String {
    DateTime::<Utc>::from_naive_utc_and_offset(t, Utc).to_rfc3339()
}

pub mod serializer {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::{parse_date, time_to_json};

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        time_to_json(*time).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        parse_date(&str_time).ok_or_else(|| D::Error::custom(format!("invalid date {}", str_time)))
    }
}

pub mod opt_serializer {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::{parse_date, time_to_json};

    pub fn serialize<S: Serializer>(time: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error> {
        time.map(time_to_json).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error> {
        let str_time: Option<String> = Deserialize::deserialize(deserializer)?;
        match str_time {
            Some(s) if !s.is_empty() => {
                parse_date(&s).map(Some).ok_or_else(|| D::Error::custom(format!("invalid date {}", s)))
            }
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use crate::utils::date::{parse_date, time_to_json};

    #[tokio::test]
    async fn test_should_parse_naive_and_offset_dates() {
        let expected = NaiveDate::from_ymd_opt(2022, 9, 24).unwrap().and_hms_micro_opt(4, 40, 35, 726029).unwrap();
        assert_eq!(Some(expected), parse_date("2022-09-24T04:40:35.726029"));
        assert_eq!(Some(expected), parse_date("2022-09-24T04:40:35.726029+00:00"));
        assert_eq!(Some(expected), parse_date("2022-09-24T06:40:35.726029+02:00"));
        assert_eq!(None, parse_date("yesterday"));
    }

    #[tokio::test]
    async fn test_should_round_trip_time() {
        let now = Utc::now().naive_utc();
        assert_eq!(Some(now), parse_date(time_to_json(now).as_str()));
    }
}
