use chrono::{DateTime, Utc};
use maud::{Markup, PreEscaped, html};
use tracing::warn;

use crate::format::format_relative_time;
use crate::util::time::to_iso8601;

/// Browser-side updater. Applies the same rules as [`crate::format`] to every element
/// marked `data-diff-time-target="display"`, once a minute.
pub const UPDATER_SCRIPT: &str = include_str!("../../assets/diff_time_updater.js");

const DEFAULT_ELEMENT: &str = "span";

/// Per-page render state. The updater script is emitted once per context.
#[derive(Debug, Default)]
pub struct RenderContext {
    script_emitted: bool,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script_emitted(&self) -> bool {
        self.script_emitted
    }
}

/// An HTML element whose text is the relative time to `target`.
#[derive(Debug, Clone)]
pub struct DiffTime {
    target: DateTime<Utc>,
    element: String,
    attributes: Vec<(String, String)>,
    data: Vec<(String, String)>,
    auto_update: bool,
}

impl DiffTime {
    pub fn new(target: DateTime<Utc>) -> Self {
        Self {
            target,
            element: DEFAULT_ELEMENT.to_string(),
            attributes: Vec::new(),
            data: Vec::new(),
            auto_update: false,
        }
    }

    pub fn element(mut self, name: impl Into<String>) -> Self {
        self.element = name.into();
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Adds `data-<key>`; underscores in `key` become dashes.
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.push((key.into(), value.into()));
        self
    }

    pub fn auto_update(mut self, enabled: bool) -> Self {
        self.auto_update = enabled;
        self
    }

    pub fn render(&self, now: &DateTime<Utc>, ctx: &mut RenderContext) -> Markup {
        let name = if is_valid_name(&self.element) {
            self.element.as_str()
        } else {
            warn!(element = %self.element, "Invalid element name, using span");
            DEFAULT_ELEMENT
        };

        let mut attrs: Vec<(String, String)> = self
            .attributes
            .iter()
            .filter(|(key, _)| is_valid_name(key))
            .cloned()
            .collect();

        let mut data = self.data.clone();
        if self.auto_update {
            data.push(("diff_time_target".to_string(), "display".to_string()));
            data.push(("certain_time".to_string(), to_iso8601(&self.target)));
        }
        attrs.extend(
            data.into_iter()
                .filter(|(key, _)| is_valid_name(key))
                .map(|(key, value)| (format!("data-{}", key.replace('_', "-")), value)),
        );

        let emit_script = self.auto_update && !ctx.script_emitted;
        if emit_script {
            ctx.script_emitted = true;
        }

        // maud needs static tag names, so only the tag itself is assembled here.
        html! {
            (PreEscaped(open_tag(name, &attrs)))
            (format_relative_time(&self.target, now))
            (PreEscaped(format!("</{name}>")))
            @if emit_script {
                script { (PreEscaped(UPDATER_SCRIPT)) }
            }
        }
    }
}

fn open_tag(name: &str, attrs: &[(String, String)]) -> String {
    let mut tag = format!("<{name}");
    for (key, value) in attrs {
        let value = html! { (value) };
        tag.push_str(&format!(" {}=\"{}\"", key, value.into_string()));
    }
    tag.push('>');
    tag
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name.starts_with(|c: char| c.is_ascii_alphabetic())
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
