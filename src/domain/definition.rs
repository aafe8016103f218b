//! Tool definition model.
//!
//! A definition document is YAML shaped as
//! `heading: { title, subtitle, output_file, before: [section], after: { logs, notes } }`.
//! Every key is optional; anything missing falls back to an empty structure.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

use super::answers::AnswersView;

/// The prompt schema for one tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Definition {
    pub heading: Heading,
    pub sections: Vec<Section>,
    pub after: AfterMessages,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Heading {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    /// File name offered when no output path is given.
    pub output_file: Option<String>,
}

/// Display grouping of prompts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub prompts: Vec<PromptSpec>,
}

/// One question of the wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptSpec {
    pub key: String,
    pub prompt: String,
    pub description: Option<String>,
    pub default: Option<String>,
    pub required: bool,
    pub is_password: bool,
    pub is_list: bool,
    pub choices: Vec<String>,
    pub regex: Option<String>,
    pub depends_on: DependencyGate,
}

impl PromptSpec {
    pub fn new<K: Into<String>, P: Into<String>>(key: K, prompt: P) -> Self {
        Self { key: key.into(), prompt: prompt.into(), ..Self::default() }
    }

    /// Text shown to the user; the key stands in when no prompt text is given.
    pub fn display_text(&self) -> &str {
        if self.prompt.is_empty() { &self.key } else { &self.prompt }
    }
}

/// Messages emitted after a successful write, or on failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AfterMessages {
    pub success: Option<String>,
    pub error: Option<String>,
    pub notes: Vec<String>,
}

/// Condition under which a prompt is asked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DependencyGate {
    #[default]
    Ungated,
    /// Asked only when the earlier answer for `key` equals `value` exactly.
    Requires { key: String, value: String },
    /// Present but unusable; the prompt is never asked.
    Malformed,
}

impl DependencyGate {
    pub fn requires<K: Into<String>, V: Into<String>>(key: K, value: V) -> Self {
        DependencyGate::Requires { key: key.into(), value: value.into() }
    }

    fn from_value(value: &Value) -> Self {
        let Value::Mapping(mapping) = value else {
            return match value {
                Value::Null => DependencyGate::Ungated,
                _ => DependencyGate::Malformed,
            };
        };

        let key = mapping.get("key").and_then(Value::as_str).filter(|key| !key.is_empty());
        let expected = mapping.get("value").and_then(scalar_string).filter(|v| !v.is_empty());
        match (key, expected) {
            (Some(key), Some(value)) => DependencyGate::requires(key, value),
            _ => DependencyGate::Malformed,
        }
    }

    /// Whether the prompt may be asked given the answers collected so far.
    pub fn is_open(&self, answers: AnswersView<'_>) -> bool {
        match self {
            DependencyGate::Ungated => true,
            DependencyGate::Requires { key, value } => answers.text(key) == Some(value.as_str()),
            DependencyGate::Malformed => false,
        }
    }
}

impl Definition {
    /// Parse a definition document.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let dto: DefinitionDto = serde_yaml::from_str(content)?;
        Ok(dto.into())
    }

    /// All prompts in evaluation order.
    pub fn prompts(&self) -> impl Iterator<Item = &PromptSpec> {
        self.sections.iter().flat_map(|section| section.prompts.iter())
    }

    pub fn output_file_or_default(&self, tool: &str) -> String {
        match &self.heading.output_file {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => format!("{}.yaml", tool.to_lowercase()),
        }
    }

    pub fn title_or_default(&self, tool: &str) -> String {
        match &self.heading.title {
            Some(title) if !title.is_empty() => title.clone(),
            _ => format!("{} Configuration Wizard", title_case(tool)),
        }
    }

    /// Structural problems that do not prevent a run but change its behavior.
    pub fn diagnostics(&self) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut findings = Vec::new();

        for prompt in self.prompts() {
            if prompt.key.is_empty() {
                findings.push(format!("Prompt '{}' has no key and is skipped", prompt.prompt));
                continue;
            }

            match &prompt.depends_on {
                DependencyGate::Requires { key, .. } if !seen.contains(key.as_str()) => {
                    findings.push(format!(
                        "Prompt '{}' depends on '{}', which is not asked before it",
                        prompt.key, key
                    ));
                }
                DependencyGate::Malformed => findings.push(format!(
                    "Prompt '{}' has a malformed depends_on and is never asked",
                    prompt.key
                )),
                _ => {}
            }

            if let Some(pattern) = &prompt.regex {
                if let Err(err) = regex::Regex::new(pattern) {
                    findings.push(format!(
                        "Prompt '{}' has an invalid regex '{}': {}",
                        prompt.key, pattern, err
                    ));
                }
            }

            if !seen.insert(prompt.key.as_str()) {
                findings.push(format!("Duplicate prompt key '{}'", prompt.key));
            }
        }

        findings
    }
}

pub fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// String form of a YAML scalar. Sequences are comma-joined.
fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        Value::Sequence(items) => {
            Some(items.iter().filter_map(scalar_string).collect::<Vec<_>>().join(", "))
        }
        Value::Null | Value::Mapping(_) | Value::Tagged(_) => None,
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn optional_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_string(&Value::deserialize(deserializer)?))
}

fn scalar_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Sequence(items) => items.iter().filter_map(scalar_string).collect(),
        other => scalar_string(&other).into_iter().collect(),
    })
}

fn dependency_gate<'de, D>(deserializer: D) -> Result<DependencyGate, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(DependencyGate::from_value(&Value::deserialize(deserializer)?))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DefinitionDto {
    #[serde(deserialize_with = "null_as_default")]
    heading: HeadingDto,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct HeadingDto {
    #[serde(deserialize_with = "optional_scalar")]
    title: Option<String>,
    #[serde(deserialize_with = "optional_scalar")]
    subtitle: Option<String>,
    #[serde(deserialize_with = "optional_scalar")]
    output_file: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    before: Vec<SectionDto>,
    #[serde(deserialize_with = "null_as_default")]
    after: AfterDto,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SectionDto {
    #[serde(deserialize_with = "optional_scalar")]
    title: Option<String>,
    #[serde(deserialize_with = "optional_scalar")]
    subtitle: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    prompts: Vec<PromptDto>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PromptDto {
    #[serde(deserialize_with = "null_as_default")]
    key: String,
    #[serde(deserialize_with = "null_as_default")]
    prompt: String,
    #[serde(deserialize_with = "optional_scalar")]
    description: Option<String>,
    #[serde(deserialize_with = "optional_scalar")]
    default: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    required: bool,
    #[serde(deserialize_with = "null_as_default")]
    is_password: bool,
    #[serde(deserialize_with = "null_as_default")]
    is_list: bool,
    #[serde(deserialize_with = "scalar_list")]
    choices: Vec<String>,
    #[serde(deserialize_with = "optional_scalar")]
    regex: Option<String>,
    #[serde(deserialize_with = "dependency_gate")]
    depends_on: DependencyGate,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AfterDto {
    #[serde(deserialize_with = "null_as_default")]
    logs: LogsDto,
    #[serde(deserialize_with = "scalar_list")]
    notes: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LogsDto {
    #[serde(deserialize_with = "optional_scalar")]
    success: Option<String>,
    #[serde(deserialize_with = "optional_scalar")]
    error: Option<String>,
}

impl From<DefinitionDto> for Definition {
    fn from(dto: DefinitionDto) -> Self {
        let heading = dto.heading;
        Definition {
            heading: Heading {
                title: heading.title,
                subtitle: heading.subtitle,
                output_file: heading.output_file,
            },
            sections: heading.before.into_iter().map(Section::from).collect(),
            after: AfterMessages {
                success: heading.after.logs.success,
                error: heading.after.logs.error,
                notes: heading.after.notes,
            },
        }
    }
}

impl From<SectionDto> for Section {
    fn from(dto: SectionDto) -> Self {
        Section {
            title: dto.title,
            subtitle: dto.subtitle,
            prompts: dto.prompts.into_iter().map(PromptSpec::from).collect(),
        }
    }
}

impl From<PromptDto> for PromptSpec {
    fn from(dto: PromptDto) -> Self {
        PromptSpec {
            key: dto.key,
            prompt: dto.prompt,
            description: dto.description,
            default: dto.default,
            required: dto.required,
            is_password: dto.is_password,
            is_list: dto.is_list,
            choices: dto.choices,
            regex: dto.regex,
            depends_on: dto.depends_on,
        }
    }
}
