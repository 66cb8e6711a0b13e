use serde::{Deserialize, Serialize};
use std::fmt;

/// Категория отслеживаемого объекта (поле `objectType` каталога)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ObjectType {
    #[serde(rename = "ROCKET BODY")]
    RocketBody,
    #[serde(rename = "DEBRIS")]
    Debris,
    #[serde(rename = "UNKNOWN")]
    Unknown,
    #[serde(rename = "PAYLOAD")]
    Payload,
}

impl ObjectType {
    /// Код категории, как его отдаёт и принимает API
    pub fn code(&self) -> &'static str {
        match self {
            ObjectType::RocketBody => "ROCKET BODY",
            ObjectType::Debris => "DEBRIS",
            ObjectType::Unknown => "UNKNOWN",
            ObjectType::Payload => "PAYLOAD",
        }
    }

    /// Подпись для фильтра-чипа
    pub fn display_name(&self) -> &'static str {
        match self {
            ObjectType::RocketBody => "Rocket Bodies",
            ObjectType::Debris => "Debris",
            ObjectType::Unknown => "Unknown",
            ObjectType::Payload => "Payloads",
        }
    }

    /// Все категории в порядке отображения
    pub fn all() -> Vec<ObjectType> {
        vec![
            ObjectType::RocketBody,
            ObjectType::Debris,
            ObjectType::Unknown,
            ObjectType::Payload,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ROCKET BODY" => Some(ObjectType::RocketBody),
            "DEBRIS" => Some(ObjectType::Debris),
            "UNKNOWN" => Some(ObjectType::Unknown),
            "PAYLOAD" => Some(ObjectType::Payload),
            _ => None,
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
