use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::enums::{ObjectType, OrbitCode};

/// Отслеживаемый орбитальный объект (запись каталога).
///
/// Идентичность: `norad_cat_id`. Клиент записи не изменяет, только читает.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Satellite {
    pub norad_cat_id: String,
    pub intl_des: String,
    pub name: String,
    pub launch_date: String,
    #[serde(default)]
    pub decay_date: Option<String>,
    pub object_type: ObjectType,
    pub launch_site_code: String,
    pub country_code: String,
    pub orbit_code: OrbitCode,
}

/// Поле записи, по которому можно сортировать и которое запрашивается у API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SatelliteField {
    NoradCatId,
    IntlDes,
    Name,
    LaunchDate,
    DecayDate,
    ObjectType,
    LaunchSiteCode,
    CountryCode,
    OrbitCode,
}

impl SatelliteField {
    /// Имя атрибута в JSON API
    pub fn attribute(&self) -> &'static str {
        match self {
            SatelliteField::NoradCatId => "noradCatId",
            SatelliteField::IntlDes => "intlDes",
            SatelliteField::Name => "name",
            SatelliteField::LaunchDate => "launchDate",
            SatelliteField::DecayDate => "decayDate",
            SatelliteField::ObjectType => "objectType",
            SatelliteField::LaunchSiteCode => "launchSiteCode",
            SatelliteField::CountryCode => "countryCode",
            SatelliteField::OrbitCode => "orbitCode",
        }
    }

    pub fn all() -> Vec<SatelliteField> {
        vec![
            SatelliteField::NoradCatId,
            SatelliteField::IntlDes,
            SatelliteField::Name,
            SatelliteField::LaunchDate,
            SatelliteField::DecayDate,
            SatelliteField::ObjectType,
            SatelliteField::LaunchSiteCode,
            SatelliteField::CountryCode,
            SatelliteField::OrbitCode,
        ]
    }
}

impl Satellite {
    /// Естественный порядок значения поля.
    ///
    /// Строки сравниваются лексикографически, даты как ISO-строки,
    /// отсутствующая дата схода с орбиты идёт раньше любой заданной.
    pub fn compare_by_field(&self, other: &Self, field: SatelliteField) -> Ordering {
        match field {
            SatelliteField::NoradCatId => self.norad_cat_id.cmp(&other.norad_cat_id),
            SatelliteField::IntlDes => self.intl_des.cmp(&other.intl_des),
            SatelliteField::Name => self.name.cmp(&other.name),
            SatelliteField::LaunchDate => self.launch_date.cmp(&other.launch_date),
            SatelliteField::DecayDate => self.decay_date.cmp(&other.decay_date),
            SatelliteField::ObjectType => self.object_type.code().cmp(other.object_type.code()),
            SatelliteField::LaunchSiteCode => self.launch_site_code.cmp(&other.launch_site_code),
            SatelliteField::CountryCode => self.country_code.cmp(&other.country_code),
            SatelliteField::OrbitCode => self.orbit_code.code().cmp(other.orbit_code.code()),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn satellite(id: &str, name: &str) -> Satellite {
        Satellite {
            norad_cat_id: id.to_string(),
            intl_des: format!("1990-{}A", id),
            name: name.to_string(),
            launch_date: "1990-01-01".to_string(),
            decay_date: None,
            object_type: ObjectType::Payload,
            launch_site_code: "AFETR".to_string(),
            country_code: "US".to_string(),
            orbit_code: OrbitCode::Leo,
        }
    }

    pub fn numbered(count: usize) -> Vec<Satellite> {
        (1..=count)
            .map(|i| satellite(&format!("{:05}", i), &format!("SAT {}", i)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_record() {
        let json = r#"{
            "noradCatId": "25544",
            "intlDes": "1998-067A",
            "name": "ISS (ZARYA)",
            "launchDate": "1998-11-20",
            "decayDate": null,
            "objectType": "PAYLOAD",
            "launchSiteCode": "TYMSC",
            "countryCode": "ISS",
            "orbitCode": "LEO4"
        }"#;
        let sat: Satellite = serde_json::from_str(json).unwrap();
        assert_eq!(sat.norad_cat_id, "25544");
        assert_eq!(sat.decay_date, None);
        assert_eq!(sat.object_type, ObjectType::Payload);
        assert_eq!(sat.orbit_code, OrbitCode::Leo4);
    }

    #[test]
    fn test_missing_decay_date_defaults_to_none() {
        let json = r#"{"noradCatId":"1","intlDes":"1957-001A","name":"SL-1 R/B",
            "launchDate":"1957-10-04","objectType":"ROCKET BODY",
            "launchSiteCode":"TYMSC","countryCode":"CIS","orbitCode":"LEO"}"#;
        let sat: Satellite = serde_json::from_str(json).unwrap();
        assert_eq!(sat.decay_date, None);
        assert_eq!(sat.object_type, ObjectType::RocketBody);
    }

    #[test]
    fn test_unknown_object_type_fails() {
        let json = r#"{"noradCatId":"1","intlDes":"x","name":"x","launchDate":"x",
            "objectType":"STATION","launchSiteCode":"x","countryCode":"x","orbitCode":"LEO"}"#;
        assert!(serde_json::from_str::<Satellite>(json).is_err());
    }

    #[test]
    fn test_compare_decay_date_none_first() {
        let mut a = fixtures::satellite("1", "A");
        let mut b = fixtures::satellite("2", "B");
        a.decay_date = None;
        b.decay_date = Some("2000-01-01".to_string());
        assert_eq!(a.compare_by_field(&b, SatelliteField::DecayDate), Ordering::Less);
    }

    #[test]
    fn test_attributes_match_serde_names() {
        let sat = fixtures::satellite("1", "A");
        let value = serde_json::to_value(&sat).unwrap();
        for field in SatelliteField::all() {
            assert!(value.get(field.attribute()).is_some(), "{}", field.attribute());
        }
    }
}
