//! `.properties` 파일 기반 메시지 카탈로그
//!
//! Spring의 `ResourceBundleMessageSource`와 동일한 `key=value` 형식을 읽습니다.
//! 기본 카탈로그는 바이너리에 포함된 `resources/messages.properties`이며,
//! `MESSAGES_PATH`로 다른 파일을 지정할 수 있습니다.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::{debug, info};

use super::{format_message, CatalogError, MessageCatalog};

const BUNDLED_MESSAGES: &str = include_str!("../../resources/messages.properties");

/// 메모리에 적재된 불변 메시지 카탈로그
#[derive(Debug, Clone, Default)]
pub struct PropertiesCatalog {
    entries: HashMap<String, String>,
}

impl PropertiesCatalog {
    /// properties 형식 문자열을 파싱합니다.
    ///
    /// - `#` 또는 `!`로 시작하는 줄과 빈 줄은 무시합니다.
    /// - 첫 번째 `=` 또는 `:`를 기준으로 키와 값을 나눕니다.
    /// - 키와 값의 앞뒤 공백은 제거합니다.
    /// - 같은 키가 반복되면 마지막 값이 사용됩니다.
    pub fn parse(content: &str) -> Self {
        let entries = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('!'))
            .filter_map(|line| {
                let split_at = line.find(['=', ':'])?;
                let key = line[..split_at].trim();
                let value = line[split_at + 1..].trim();
                (!key.is_empty()).then(|| (key.to_string(), value.to_string()))
            })
            .collect();

        Self { entries }
    }

    /// 바이너리에 포함된 기본 카탈로그
    pub fn bundled() -> Self {
        Self::parse(BUNDLED_MESSAGES)
    }

    /// 파일에서 카탈로그를 로드합니다.
    ///
    /// # Errors
    ///
    /// * `CatalogError::Load` - 파일을 읽을 수 없는 경우
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| CatalogError::Load {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let catalog = Self::parse(&content);
        info!(
            "메시지 카탈로그 로드됨: {} ({}개 항목)",
            path.display(),
            catalog.len()
        );
        Ok(catalog)
    }

    /// 경로가 주어지면 파일에서, 아니면 번들 카탈로그를 사용합니다.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("MESSAGES_PATH 미설정, 번들 메시지 카탈로그 사용");
                Ok(Self::bundled())
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn lookup(&self, key: &str) -> Result<&str, CatalogError> {
        self.entries
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| CatalogError::MissingKey(key.to_string()))
    }
}

impl MessageCatalog for PropertiesCatalog {
    fn get(&self, key: &str) -> Result<String, CatalogError> {
        self.lookup(key).map(str::to_string)
    }

    fn get_with_params(&self, key: &str, params: &[String]) -> Result<String, CatalogError> {
        self.lookup(key)
            .map(|template| format_message(template, params))
    }
}
