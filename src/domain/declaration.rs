use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Report reason. The Korean labels are what the server stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeclarationType {
    #[serde(rename = "18세 미만")]
    Underage,
    #[serde(rename = "사기")]
    Fraud,
    #[serde(rename = "허위")]
    FalseAdvertising,
    #[serde(rename = "정보 오류")]
    WrongInformation,
    #[serde(rename = "기타")]
    Other,
}

impl DeclarationType {
    pub const ALL: [DeclarationType; 5] = [
        DeclarationType::Underage,
        DeclarationType::Fraud,
        DeclarationType::FalseAdvertising,
        DeclarationType::WrongInformation,
        DeclarationType::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DeclarationType::Underage => "18세 미만",
            DeclarationType::Fraud => "사기",
            DeclarationType::FalseAdvertising => "허위",
            DeclarationType::WrongInformation => "정보 오류",
            DeclarationType::Other => "기타",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            DeclarationType::Underage => "18세 미만인 사용자와 관련된 문제",
            DeclarationType::Fraud => "사기 또는 거짓 정보",
            DeclarationType::FalseAdvertising => "허위 과장 광고",
            DeclarationType::WrongInformation => "상품 정보 오류",
            DeclarationType::Other => "기타",
        }
    }
}

impl fmt::Display for DeclarationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeclarationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s.trim())
            .ok_or_else(|| format!("unknown report type: {}", s))
    }
}

/// Body of `POST declarations`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Declaration {
    pub link: String,
    #[serde(rename = "type")]
    pub kind: DeclarationType,
    pub content: String,
}

/// Server acknowledgement of a report. Only the id is interpreted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Receipt {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_wire_value() {
        let d = Declaration {
            link: "https://hanjan.example/post/1".into(),
            kind: DeclarationType::WrongInformation,
            content: "도수가 틀립니다".into(),
        };
        let value = serde_json::to_value(&d).unwrap();
        assert_eq!(value["type"], "정보 오류");
    }

    #[test]
    fn test_type_from_str() {
        assert_eq!("사기".parse::<DeclarationType>(), Ok(DeclarationType::Fraud));
        assert!("spam".parse::<DeclarationType>().is_err());
    }

    #[test]
    fn test_receipt_keeps_unknown_fields() {
        let r: Receipt = serde_json::from_str(r#"{"id":10,"status":"RECEIVED"}"#).unwrap();
        assert_eq!(r.id, Some(10));
        assert_eq!(r.fields["status"], "RECEIVED");
    }
}
