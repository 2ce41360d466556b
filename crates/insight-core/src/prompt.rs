//! Prompt composition.
//!
//! A prompt is the caller's context blocks (employee rosters, review scores,
//! and so on) followed by the user's question wrapped in an instruction that
//! asks for a detailed, actionable, markdown-formatted answer.

use crate::error::Result;
use minijinja::{Environment, context};
use serde::{Deserialize, Serialize};

/// Built-in template. Receives `blocks` (list of `{label, data}`) and `query`.
pub const DEFAULT_TEMPLATE: &str = r#"You are an HR analytics assistant helping a manager understand employee performance.
Use only the data below to answer.
{% for block in blocks %}
{{ block.label }}:
{{ block.data }}
{% endfor %}
User question: {{ query }}

Please provide a detailed, actionable answer based on the data above.
- Reference specific employees, teams and metrics where relevant
- Highlight trends, risks and concrete recommendations
- Format the response in markdown using headings (##), bullet lists (-) and **bold** for key figures"#;

/// A labelled block of caller-supplied data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextBlock {
    pub label: String,
    pub data: String,
}

impl ContextBlock {
    pub fn new(label: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            data: data.into(),
        }
    }

    /// Builds a block whose data is `value` as pretty-printed JSON.
    pub fn json<T: Serialize + ?Sized>(label: impl Into<String>, value: &T) -> Result<Self> {
        Ok(Self::new(label, serde_json::to_string_pretty(value)?))
    }
}

/// Ordered context blocks included in every prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptContext {
    blocks: Vec<ContextBlock>,
}

impl PromptContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_block(mut self, block: ContextBlock) -> Self {
        self.blocks.push(block);
        self
    }

    pub fn push(&mut self, block: ContextBlock) {
        self.blocks.push(block);
    }

    pub fn blocks(&self) -> &[ContextBlock] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Renders the prompt template.
pub struct PromptBuilder {
    env: Environment<'static>,
    template: String,
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self::with_template(DEFAULT_TEMPLATE)
    }

    pub fn with_template(template: impl Into<String>) -> Self {
        Self {
            env: Environment::new(),
            template: template.into(),
        }
    }

    /// Composes the full prompt for `query`.
    pub fn compose(&self, context: &PromptContext, query: &str) -> Result<String> {
        let prompt = self.env.render_str(
            &self.template,
            context! {
                blocks => context.blocks(),
                query => query,
            },
        )?;
        Ok(prompt)
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}
