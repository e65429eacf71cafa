use serde::{Deserialize, Serialize};

/// Типы покрытия корта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceType {
    Hard,
    Grass,
    Clay,
}

impl SurfaceType {
    /// Получить код покрытия
    pub fn code(&self) -> &'static str {
        match self {
            SurfaceType::Hard => "hard",
            SurfaceType::Grass => "grass",
            SurfaceType::Clay => "clay",
        }
    }

    /// Получить подпись покрытия (фиксированный набор меток UI)
    pub fn label(&self) -> &'static str {
        match self {
            SurfaceType::Hard => "하드",
            SurfaceType::Grass => "잔디",
            SurfaceType::Clay => "클레이",
        }
    }

    /// Получить все типы покрытий
    pub fn all() -> Vec<SurfaceType> {
        vec![SurfaceType::Hard, SurfaceType::Grass, SurfaceType::Clay]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "hard" => Some(SurfaceType::Hard),
            "grass" => Some(SurfaceType::Grass),
            "clay" => Some(SurfaceType::Clay),
            _ => None,
        }
    }
}

impl ToString for SurfaceType {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for surface in SurfaceType::all() {
            assert_eq!(SurfaceType::from_code(surface.code()), Some(surface));
        }
        assert_eq!(SurfaceType::from_code("carpet"), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(SurfaceType::Hard.label(), "하드");
        assert_eq!(SurfaceType::Grass.label(), "잔디");
        assert_eq!(SurfaceType::Clay.label(), "클레이");
    }
}
