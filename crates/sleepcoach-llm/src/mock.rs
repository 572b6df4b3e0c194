//! Offline provider with canned replies per model family

use crate::{InferenceProvider, ModelOutput, UpstreamResult};
use async_trait::async_trait;
use sleepcoach_core::{PromptKind, PromptText};

/// Canned replies for one model family
struct MockVoice {
    tag: &'static str,
    urge: &'static str,
    praise: &'static str,
}

const GEMMA: MockVoice = MockVoice {
    tag: "Gemma mock",
    urge: "It is already {time}. You need proper rest, so start winding down now: take a few slow breaths and let the day go.",
    praise: "Well done! Going to bed early is a real gift to your health. Sleep well and sweet dreams!",
};

const LLAMA: MockVoice = MockVoice {
    tag: "Llama mock",
    urge: "It's getting late, already {time}. Put things down for tonight and get ready for bed; rest makes tomorrow easier.",
    praise: "Great choice! You are building a healthy habit that will pay off. Good night!",
};

const GPT: MockVoice = MockVoice {
    tag: "GPT mock",
    urge: "Judging by {time}, now is a good moment to switch into sleep mode: dim the lights, put the screens away, stretch gently.",
    praise: "Excellent decision! Prioritizing sleep is an investment you will feel tomorrow in both mood and focus.",
};

const CLAUDE: MockVoice = MockVoice {
    tag: "Claude mock",
    urge: "I notice it is {time}. A gentle reminder: enough sleep matters for body and mind alike.",
    praise: "I appreciate you choosing to rest now. That kind of self-care is worth being proud of.",
};

/// Provider that answers without any network call
///
/// The reply depends on the model family named in `model` and on the
/// prompt kind. Urge replies mention the resolved hour when there is one.
pub struct MockProvider {
    model: String,
}

impl MockProvider {
    /// Create a mock provider imitating `model`
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }

    fn voice(&self) -> &'static MockVoice {
        let model = self.model.to_ascii_lowercase();
        if model.contains("llama") {
            &LLAMA
        } else if model.contains("gpt") {
            &GPT
        } else if model.contains("claude") {
            &CLAUDE
        } else {
            &GEMMA
        }
    }

    /// Reply for a prompt, without going through the async trait
    pub fn reply(&self, prompt: &PromptText) -> String {
        let voice = self.voice();
        let body = match prompt.kind() {
            PromptKind::Praise => voice.praise.to_string(),
            PromptKind::Urge => {
                let time = prompt
                    .resolved_hour()
                    .map(|hour| format!("{hour:02}:00"))
                    .unwrap_or_else(|| "late".to_string());
                voice.urge.replace("{time}", &time)
            }
        };
        format!("[{}] {}", voice.tag, body)
    }
}

#[async_trait]
impl InferenceProvider for MockProvider {
    async fn run(&self, prompt: &PromptText) -> UpstreamResult<ModelOutput> {
        Ok(ModelOutput::Text(self.reply(prompt)))
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }

    fn model(&self) -> &str {
        &self.model
    }
}
