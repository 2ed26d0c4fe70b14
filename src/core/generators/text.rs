//! Template-based text generation
//!
//! No model inference happens here. Prompts are sorted into a coarse
//! category by keyword matching, then one of three canned templates per
//! category is picked at random and interpolated with the prompt.

use crate::core::generators::MediaGenerator;
use crate::core::types::{GenerationOutput, GenerationRequest, TextMetadata, TextOutput};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::Utc;
use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use regex::Regex;

/// Source label attached to template-generated text
pub const TEXT_SOURCE: &str = "enhanced-template";

const DEFAULT_MODEL: &str = "enhanced-template";

/// Placeholder substituted with the lowercased prompt
const PROMPT_SLOT: &str = "{prompt}";

static STORY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(story|tale|narrative|once upon|character|plot|fiction)\b").unwrap()
});
static EXPLANATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(explain|how|what is|define|describe|tell me about|why|when)\b").unwrap()
});
static CREATIVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(create|imagine|design|art|creative|invent|build|make)\b").unwrap()
});

const STORY_TEMPLATES: [&str; 3] = [
    "Once upon a time, there was a tale about {prompt}. This story unfolds in a world where imagination meets reality, and every word carries the power to transform thoughts into vivid experiences. The journey begins with curiosity and leads to discovery, where each chapter reveals new layers of meaning and connection.",
    "In a realm where {prompt} holds great significance, our story begins. The protagonist discovers that this concept is more than just an idea: it's a gateway to understanding deeper truths about existence and purpose. Through trials and revelations, they learn that every challenge is an opportunity for growth.",
    "The narrative of {prompt} takes us on an extraordinary adventure through landscapes of possibility. Our hero encounters wisdom in unexpected places, finding that the true treasure was not the destination, but the transformation that occurred along the way.",
];

const EXPLANATION_TEMPLATES: [&str; 3] = [
    "Let me explain {prompt} in a comprehensive way. This concept involves multiple interconnected aspects that work together to create a complete understanding. At its core, it represents a fundamental principle that influences various domains of knowledge and application, offering insights that extend far beyond surface-level comprehension.",
    "Understanding {prompt} requires us to examine its key components and relationships. This topic connects to broader themes in science, philosophy, and practical application. By breaking it down into manageable parts, we can appreciate both its complexity and its elegant simplicity.",
    "To grasp {prompt}, we need to explore both its theoretical foundations and real-world implications. This multifaceted subject reveals layers of complexity that become clearer through systematic analysis and practical examples that demonstrate its relevance in everyday contexts.",
];

const CREATIVE_TEMPLATES: [&str; 3] = [
    "Imagine a world where {prompt} becomes the centerpiece of innovation and artistic expression. In this creative space, boundaries dissolve and new possibilities emerge from the intersection of technology, art, and human imagination. Here, conventional rules bend to accommodate fresh perspectives and revolutionary ideas.",
    "The creative potential of {prompt} invites us to think beyond conventional limitations. This is where we explore uncharted territories of thought and expression, where each idea sparks new connections and insights. Innovation flourishes when we dare to question assumptions and embrace unconventional approaches.",
    "Through the lens of creativity, {prompt} transforms into a canvas for exploration and experimentation. This perspective opens doors to innovative solutions and fresh interpretations that challenge traditional thinking patterns and inspire breakthrough moments.",
];

const DEFAULT_TEMPLATES: [&str; 3] = [
    "Regarding {prompt}, there are numerous fascinating dimensions to explore. This topic touches on various interconnected themes that reveal the complexity and richness of the subject matter. Each aspect contributes to a deeper understanding of how different elements work together to create meaningful insights.",
    "When we consider {prompt}, we encounter a rich tapestry of ideas and possibilities. This exploration leads us to discover connections and patterns that enhance our understanding of the broader context. The interplay between different concepts creates opportunities for learning and growth.",
    "The subject of {prompt} presents us with opportunities to delve deeper into meaningful analysis. Through careful examination and thoughtful reflection, we uncover layers of significance that contribute to a more complete and nuanced perspective on this important topic.",
];

/// Template-based text generator
#[derive(Debug, Clone, Default)]
pub struct TextGenerator;

impl TextGenerator {
    /// Create a new text generator
    pub fn new() -> Self {
        Self
    }

    /// Classify a lowercased prompt into a template category
    pub fn classify(prompt_lower: &str) -> &'static str {
        if STORY_RE.is_match(prompt_lower) {
            "story"
        } else if EXPLANATION_RE.is_match(prompt_lower) {
            "explanation"
        } else if CREATIVE_RE.is_match(prompt_lower) {
            "creative"
        } else {
            "default"
        }
    }

    fn templates_for(category: &str) -> &'static [&'static str; 3] {
        match category {
            "story" => &STORY_TEMPLATES,
            "explanation" => &EXPLANATION_TEMPLATES,
            "creative" => &CREATIVE_TEMPLATES,
            _ => &DEFAULT_TEMPLATES,
        }
    }
}

#[async_trait]
impl MediaGenerator for TextGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationOutput> {
        let prompt = request.prompt()?;
        let prompt_lower = prompt.to_lowercase();

        let category = Self::classify(&prompt_lower);
        let templates = Self::templates_for(category);
        let template = templates
            .choose(&mut rand::thread_rng())
            .unwrap_or(&templates[0]);
        let text = template.replace(PROMPT_SLOT, &prompt_lower);

        let metadata = TextMetadata {
            model: request
                .model
                .clone()
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            category: category.to_string(),
            timestamp: Utc::now(),
            word_count: text.split_whitespace().count(),
            character_count: text.chars().count(),
        };

        Ok(GenerationOutput::Text(TextOutput {
            text,
            source: TEXT_SOURCE.to_string(),
            metadata,
        }))
    }
}
