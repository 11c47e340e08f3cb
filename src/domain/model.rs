// SPDX-License-Identifier: MPL-2.0
//! Models the AI assistant can be pointed at.

use super::choice::Choice;
use super::namespace::{ModuleId, Namespace};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssistantModel {
    #[serde(rename = "llama-3.2-3b")]
    Llama32_3b,
    #[serde(rename = "qwen-2.5-3b")]
    Qwen25_3b,
    #[serde(rename = "phi-3-mini")]
    Phi3Mini,
    #[serde(rename = "gpt-4o-mini")]
    Gpt4oMini,
}

impl AssistantModel {
    /// The module that serves this model.
    #[must_use]
    pub fn module(self) -> ModuleId {
        match self {
            AssistantModel::Llama32_3b | AssistantModel::Qwen25_3b => ModuleId::Llama,
            AssistantModel::Phi3Mini => ModuleId::Onnx,
            AssistantModel::Gpt4oMini => ModuleId::OpenAi,
        }
    }

    /// Whether prompts leave the machine.
    #[must_use]
    pub fn is_remote(self) -> bool {
        self.module() == ModuleId::OpenAi
    }

    /// Namespace holding the model's display label.
    #[must_use]
    pub fn lexeme_namespace(self) -> Namespace {
        Namespace::Module(self.module())
    }

    /// Key of the display label inside [`Self::lexeme_namespace`].
    #[must_use]
    pub fn lexeme_key(self) -> &'static str {
        match self {
            AssistantModel::Llama32_3b => "model_llama_3_2_3b",
            AssistantModel::Qwen25_3b => "model_qwen_2_5_3b",
            AssistantModel::Phi3Mini => "model_phi_3_mini",
            AssistantModel::Gpt4oMini => "model_gpt_4o_mini",
        }
    }
}

impl Choice for AssistantModel {
    const SET: &'static str = "assistant model";
    const ALL: &'static [Self] = &[
        AssistantModel::Llama32_3b,
        AssistantModel::Qwen25_3b,
        AssistantModel::Phi3Mini,
        AssistantModel::Gpt4oMini,
    ];

    fn key(self) -> &'static str {
        match self {
            AssistantModel::Llama32_3b => "llama-3.2-3b",
            AssistantModel::Qwen25_3b => "qwen-2.5-3b",
            AssistantModel::Phi3Mini => "phi-3-mini",
            AssistantModel::Gpt4oMini => "gpt-4o-mini",
        }
    }

    fn is_default(self) -> bool {
        self == AssistantModel::Llama32_3b
    }
}

impl Default for AssistantModel {
    fn default() -> Self {
        Self::default_member()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::choice::validate_choices;

    #[test]
    fn exactly_one_default_model() {
        assert!(validate_choices::<AssistantModel>().is_ok());
        assert_eq!(AssistantModel::default(), AssistantModel::Llama32_3b);
        assert!(!AssistantModel::default().is_remote());
    }

    #[test]
    fn from_key_is_case_insensitive() {
        assert_eq!(
            AssistantModel::from_key("GPT-4o-Mini"),
            Some(AssistantModel::Gpt4oMini)
        );
        assert_eq!(AssistantModel::from_key("gpt-5"), None);
    }

    #[test]
    fn keys_match_serde_names() {
        for model in AssistantModel::ALL {
            let value = toml::Value::try_from(model).expect("model serializes");
            assert_eq!(value.as_str(), Some(model.key()));
        }
    }

    #[test]
    fn labels_live_in_the_serving_module() {
        assert_eq!(
            AssistantModel::Phi3Mini.lexeme_namespace(),
            Namespace::Module(ModuleId::Onnx)
        );
        assert!(AssistantModel::Gpt4oMini.is_remote());
    }
}
