use serde::{Deserialize, Serialize};
use std::fmt;

/// Класс орбиты (поле `orbitCode` каталога). Закрытый набор кодов.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OrbitCode {
    #[serde(rename = "LEO")]
    Leo,
    #[serde(rename = "LEO1")]
    Leo1,
    #[serde(rename = "LEO2")]
    Leo2,
    #[serde(rename = "LEO3")]
    Leo3,
    #[serde(rename = "LEO4")]
    Leo4,
    #[serde(rename = "MEO")]
    Meo,
    #[serde(rename = "GEO")]
    Geo,
    #[serde(rename = "HEO")]
    Heo,
    #[serde(rename = "IGO")]
    Igo,
    #[serde(rename = "EGO")]
    Ego,
    #[serde(rename = "NSO")]
    Nso,
    #[serde(rename = "GTO")]
    Gto,
    #[serde(rename = "GHO")]
    Gho,
    #[serde(rename = "HAO")]
    Hao,
    #[serde(rename = "MGO")]
    Mgo,
    #[serde(rename = "LMO")]
    Lmo,
    #[serde(rename = "UFO")]
    Ufo,
    #[serde(rename = "ESO")]
    Eso,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl OrbitCode {
    pub fn code(&self) -> &'static str {
        match self {
            OrbitCode::Leo => "LEO",
            OrbitCode::Leo1 => "LEO1",
            OrbitCode::Leo2 => "LEO2",
            OrbitCode::Leo3 => "LEO3",
            OrbitCode::Leo4 => "LEO4",
            OrbitCode::Meo => "MEO",
            OrbitCode::Geo => "GEO",
            OrbitCode::Heo => "HEO",
            OrbitCode::Igo => "IGO",
            OrbitCode::Ego => "EGO",
            OrbitCode::Nso => "NSO",
            OrbitCode::Gto => "GTO",
            OrbitCode::Gho => "GHO",
            OrbitCode::Hao => "HAO",
            OrbitCode::Mgo => "MGO",
            OrbitCode::Lmo => "LMO",
            OrbitCode::Ufo => "UFO",
            OrbitCode::Eso => "ESO",
            OrbitCode::Unknown => "UNKNOWN",
        }
    }

    /// Все коды в порядке выпадающего списка
    pub fn all() -> Vec<OrbitCode> {
        vec![
            OrbitCode::Leo,
            OrbitCode::Leo1,
            OrbitCode::Leo2,
            OrbitCode::Leo3,
            OrbitCode::Leo4,
            OrbitCode::Meo,
            OrbitCode::Geo,
            OrbitCode::Heo,
            OrbitCode::Igo,
            OrbitCode::Ego,
            OrbitCode::Nso,
            OrbitCode::Gto,
            OrbitCode::Gho,
            OrbitCode::Hao,
            OrbitCode::Mgo,
            OrbitCode::Lmo,
            OrbitCode::Ufo,
            OrbitCode::Eso,
            OrbitCode::Unknown,
        ]
    }

    /// Проходит ли объект с этим кодом фильтр `active`.
    ///
    /// Совпадение по подстроке: часть кодов является префиксом других
    /// ("LEO" и "LEO1"), поэтому "LEO1" проходит фильтр "LEO".
    pub fn matches(&self, active: OrbitCode) -> bool {
        self.code().contains(active.code())
    }
}

impl fmt::Display for OrbitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
