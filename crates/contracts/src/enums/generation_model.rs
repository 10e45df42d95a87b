use serde::{Deserialize, Serialize};
use std::fmt;

/// Модель генерации, которую запрашивает виджет
///
/// Ровно два варианта: переключатель в UI листает их по кругу.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GenerationModel {
    #[default]
    #[serde(rename = "gpt-3.5-turbo")]
    Gpt35Turbo,
    #[serde(rename = "gpt-4")]
    Gpt4,
}

impl GenerationModel {
    /// Идентификатор модели на проводе
    pub fn code(&self) -> &'static str {
        match self {
            GenerationModel::Gpt35Turbo => "gpt-3.5-turbo",
            GenerationModel::Gpt4 => "gpt-4",
        }
    }

    /// Короткая подпись для переключателя
    pub fn display_name(&self) -> &'static str {
        match self {
            GenerationModel::Gpt35Turbo => "GPT-3.5",
            GenerationModel::Gpt4 => "GPT-4",
        }
    }

    /// Вторая модель пары, для переключателя
    pub fn toggled(self) -> Self {
        match self {
            GenerationModel::Gpt35Turbo => GenerationModel::Gpt4,
            GenerationModel::Gpt4 => GenerationModel::Gpt35Turbo,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "gpt-3.5-turbo" => Some(GenerationModel::Gpt35Turbo),
            "gpt-4" => Some(GenerationModel::Gpt4),
            _ => None,
        }
    }
}

impl fmt::Display for GenerationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
