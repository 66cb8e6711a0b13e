use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::convert::TryFrom;

use super::aggregate::{Satellite, SatelliteField};
use super::error::LoadError;
use crate::enums::ObjectType;

/// Параметры запроса `GET /v1/satellites`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SatellitesQuery {
    /// Категории через запятую; при пустом фильтре параметр не передаётся
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_types: Option<String>,
    /// Фиксированный список запрашиваемых атрибутов
    pub attributes: String,
}

impl SatellitesQuery {
    pub fn new(object_types: &[ObjectType]) -> Self {
        let object_types = if object_types.is_empty() {
            None
        } else {
            Some(
                object_types
                    .iter()
                    .map(|t| t.code())
                    .collect::<Vec<_>>()
                    .join(","),
            )
        };

        Self {
            object_types,
            attributes: SatelliteField::all()
                .iter()
                .map(|f| f.attribute())
                .collect::<Vec<_>>()
                .join(","),
        }
    }

    pub fn to_query_string(&self) -> Result<String, LoadError> {
        serde_qs::to_string(self)
            .map_err(|e| LoadError::Query(e.to_string()))
    }
}

/// Ответ API со списком объектов и счётчиками по категориям
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SatellitesResponse {
    pub data: Vec<Satellite>,
    pub counts: CategoryCounts,
}

#[derive(Deserialize)]
struct RawResponse {
    #[serde(default)]
    data: Vec<serde_json::Value>,
    #[serde(default)]
    counts: CategoryCounts,
}

/// Разбор тела ответа в типизированные записи.
///
/// Одна некорректная запись отклоняет весь ответ; в ошибке и в логе
/// указаны её индекс и NORAD ID.
pub fn decode_response(body: &str) -> Result<SatellitesResponse, LoadError> {
    let raw: RawResponse =
        serde_json::from_str(body).map_err(|e| LoadError::Decode(e.to_string()))?;

    let mut data = Vec::with_capacity(raw.data.len());
    for (index, value) in raw.data.into_iter().enumerate() {
        let norad_cat_id = value
            .get("noradCatId")
            .map(|id| id.to_string())
            .unwrap_or_else(|| "?".to_string());
        let satellite = serde_json::from_value::<Satellite>(value).map_err(|e| {
            log::warn!("Invalid record #{} (noradCatId {}): {}", index, norad_cat_id, e);
            LoadError::Decode(format!("record #{} (noradCatId {}): {}", index, norad_cat_id, e))
        })?;
        data.push(satellite);
    }

    Ok(SatellitesResponse {
        data,
        counts: raw.counts,
    })
}

/// Значение счётчика: API отдаёт числа строками, но принимаем и числа
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CountValue {
    Text(String),
    Number(u64),
}

impl CountValue {
    fn parse(&self) -> Result<u64, String> {
        match self {
            CountValue::Number(n) => Ok(*n),
            CountValue::Text(s) => s
                .trim()
                .parse::<u64>()
                .map_err(|_| format!("invalid count value: {:?}", s)),
        }
    }
}

/// Счётчики объектов: общий (`total`) и по каждой категории
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "HashMap<String, CountValue>")]
pub struct CategoryCounts {
    total: u64,
    by_type: BTreeMap<ObjectType, u64>,
}

impl TryFrom<HashMap<String, CountValue>> for CategoryCounts {
    type Error = String;

    fn try_from(raw: HashMap<String, CountValue>) -> Result<Self, Self::Error> {
        let mut counts = CategoryCounts::default();
        for (key, value) in raw {
            if key == "total" {
                counts.total = value.parse()?;
            } else if let Some(object_type) = ObjectType::from_code(&key) {
                counts.by_type.insert(object_type, value.parse()?);
            }
        }
        Ok(counts)
    }
}

impl CategoryCounts {
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn count(&self, object_type: ObjectType) -> u64 {
        self.by_type.get(&object_type).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::OrbitCode;

    #[test]
    fn test_query_omits_empty_object_types() {
        let query = SatellitesQuery::new(&[]);
        assert_eq!(query.object_types, None);
        let qs = query.to_query_string().unwrap();
        assert!(!qs.contains("objectTypes"));
        assert!(qs.starts_with("attributes="));
    }

    #[test]
    fn test_query_joins_types_and_attributes() {
        let query = SatellitesQuery::new(&[ObjectType::RocketBody, ObjectType::Payload]);
        assert_eq!(query.object_types.as_deref(), Some("ROCKET BODY,PAYLOAD"));
        assert_eq!(
            query.attributes,
            "noradCatId,intlDes,name,launchDate,decayDate,objectType,launchSiteCode,countryCode,orbitCode"
        );

        let qs = query.to_query_string().unwrap();
        let parsed: SatellitesQuery = serde_qs::from_str(&qs).unwrap();
        assert_eq!(parsed, query);
    }

    #[test]
    fn test_decode_response() {
        let body = r#"{
            "data": [{
                "noradCatId": "5", "intlDes": "1958-002B", "name": "VANGUARD 1",
                "launchDate": "1958-03-17", "decayDate": null, "objectType": "PAYLOAD",
                "launchSiteCode": "AFETR", "countryCode": "US", "orbitCode": "MEO"
            }],
            "counts": {"total": "42", "PAYLOAD": "30", "ROCKET BODY": "7", "UNKNOWN": "0", "DEBRIS": 5}
        }"#;
        let resp = decode_response(body).unwrap();
        assert_eq!(resp.data.len(), 1);
        assert_eq!(resp.data[0].orbit_code, OrbitCode::Meo);
        assert_eq!(resp.counts.total(), 42);
        assert_eq!(resp.counts.count(ObjectType::Payload), 30);
        assert_eq!(resp.counts.count(ObjectType::RocketBody), 7);
        assert_eq!(resp.counts.count(ObjectType::Debris), 5);
    }

    #[test]
    fn test_decode_missing_data_is_empty() {
        let resp = decode_response("{}").unwrap();
        assert!(resp.data.is_empty());
        assert_eq!(resp.counts.total(), 0);
    }

    #[test]
    fn test_decode_error_names_the_bad_record() {
        let body = r#"{"data": [
            {"noradCatId": "5", "intlDes": "1958-002B", "name": "VANGUARD 1",
             "launchDate": "1958-03-17", "objectType": "PAYLOAD",
             "launchSiteCode": "AFETR", "countryCode": "US", "orbitCode": "MEO"},
            {"noradCatId": "6", "intlDes": "1958-003A", "name": null,
             "launchDate": "1958-03-26", "objectType": "PAYLOAD",
             "launchSiteCode": "AFETR", "countryCode": "US", "orbitCode": "LEO"}
        ]}"#;
        match decode_response(body) {
            Err(LoadError::Decode(msg)) => {
                assert!(msg.contains("record #1"), "{}", msg);
                assert!(msg.contains("\"6\""), "{}", msg);
            }
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_errors() {
        assert!(matches!(decode_response("not json"), Err(LoadError::Decode(_))));
        assert!(matches!(
            decode_response(r#"{"data": [], "counts": {"total": "many"}}"#),
            Err(LoadError::Decode(_))
        ));
        assert!(matches!(
            decode_response(r#"{"data": [{"noradCatId": "1"}]}"#),
            Err(LoadError::Decode(_))
        ));
    }
}
