pub const DATE_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub mod serializer {
    use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        time_to_json(*time).serialize(serializer)
    }

    // accepts both rfc3339 (as written by serialize) and the bare DATE_FMT form
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        if let Ok(time) = DateTime::parse_from_rfc3339(&str_time) {
            return Ok(time.naive_utc());
        }
        NaiveDateTime::parse_from_str(&str_time, DATE_FMT).map_err(D::Error::custom)
    }

    fn time_to_json(t: NaiveDateTime) -> String {
        Utc.from_utc_datetime(&t).to_rfc3339()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDateTime, Utc};
    use serde::{Deserialize, Serialize};
    use crate::utils::date::serializer;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "serializer")]
        at: NaiveDateTime,
    }

    #[tokio::test]
    async fn test_should_read_back_serialized_date() {
        let stamped = Stamped { at: Utc::now().naive_utc() };
        let json = serde_json::to_string(&stamped).expect("should serialize");
        let loaded: Stamped = serde_json::from_str(json.as_str()).expect("should deserialize");
        assert_eq!(stamped, loaded);
    }

    #[tokio::test]
    async fn test_should_parse_plain_date() {
        let loaded: Stamped = serde_json::from_str(r#"{"at":"2023-05-01T10:20:30.5"}"#).expect("should deserialize");
        assert_eq!("2023-05-01 10:20:30.500", loaded.at.format("%Y-%m-%d %H:%M:%S%.3f").to_string());
    }
}
