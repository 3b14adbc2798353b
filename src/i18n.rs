/// UI texts in English and Vietnamese
///
/// Votes are always stored with their English names; only what the reviewer
/// sees on screen changes with the language.
use serde::{Deserialize, Serialize};

use crate::state::data::Emotion;

/// Display language for the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Vi,
}

/// Every static string shown in the window
#[derive(Debug)]
pub struct Texts {
    pub title: &'static str,
    pub scene: &'static str,
    pub role: &'static str,
    pub external_emotion: &'static str,
    pub internal_emotion: &'static str,
    pub prev: &'static str,
    pub next: &'static str,
    pub goto_first: &'static str,
    pub select_category: &'static str,
    pub select_role: &'static str,
    pub image_not_found: &'static str,
    pub remaining_samples: &'static str,
    pub sample: &'static str,
    pub no_samples: &'static str,
}

const EN: Texts = Texts {
    title: "Emotion Voting App",
    scene: "🎮 Scene:",
    role: "🎭 Character Archetype",
    external_emotion: "🧝 External Expression",
    internal_emotion: "🧠 Internal Emotion",
    prev: "⬅ Previous",
    next: "Next ➡",
    goto_first: "⏩ Go to First Unvoted Sample",
    select_category: "Select Character Archetype Category",
    select_role: "Select Specific Archetype Category",
    image_not_found: "Image not found",
    remaining_samples: "remaining",
    sample: "Sample",
    no_samples: "No samples found in the data folder",
};

const VI: Texts = Texts {
    title: "Ứng dụng bình chọn cảm xúc",
    scene: "🎮 Trích đoạn:",
    role: "🎭 Vai diễn",
    external_emotion: "🧝 Cảm xúc bên ngoài",
    internal_emotion: "🧠 Cảm xúc bên trong",
    prev: "⬅ Trước",
    next: "Tiếp ➡",
    goto_first: "⏩ Đến mẫu chưa vote đầu tiên",
    select_category: "Chọn loại vai",
    select_role: "Chọn vai cụ thể",
    image_not_found: "Không tìm thấy ảnh",
    remaining_samples: "còn lại",
    sample: "Mẫu",
    no_samples: "Không có mẫu nào trong thư mục dữ liệu",
};

impl Language {
    pub fn texts(self) -> &'static Texts {
        match self {
            Language::En => &EN,
            Language::Vi => &VI,
        }
    }

    /// Button label for an emotion
    pub fn emotion_label(self, emotion: Emotion) -> &'static str {
        match self {
            Language::En => emotion.as_str(),
            Language::Vi => match emotion {
                Emotion::Happiness => "Hỷ",
                Emotion::Anger => "Nộ",
                Emotion::Love => "Ái",
                Emotion::Hatred => "Ố",
                Emotion::Sadness => "Ai",
                Emotion::Fear => "Cụ",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vietnamese_labels_are_distinct() {
        let labels: std::collections::HashSet<_> = Emotion::ALL
            .iter()
            .map(|e| Language::Vi.emotion_label(*e))
            .collect();
        assert_eq!(labels.len(), Emotion::ALL.len());
    }

    #[test]
    fn test_english_labels_match_stored_names() {
        for emotion in Emotion::ALL {
            assert_eq!(Language::En.emotion_label(emotion), emotion.as_str());
        }
    }
}
