use super::Rule;

/// A well-known rule with a display label.
/// Presets behave exactly like any other rule number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RulePreset {
    pub rule: Rule,
    pub name: &'static str,
}

impl RulePreset {
    pub const fn new(number: u8, name: &'static str) -> Self {
        Self {
            rule: Rule::new(number),
            name,
        }
    }

    /// Label shown in the preset selector, e.g. "30 Chaos"
    pub fn label(&self) -> String {
        format!("{} {}", self.rule.number(), self.name)
    }
}

pub const PRESETS: &[RulePreset] = &[
    RulePreset::new(30, "Chaos"),
    RulePreset::new(90, "Sierpiński"),
    RulePreset::new(110, "Turing"),
    RulePreset::new(184, "Traffic"),
    RulePreset::new(45, "Fractal"),
    RulePreset::new(126, "Complex"),
];

/// Get all available presets
pub fn all_presets() -> &'static [RulePreset] {
    PRESETS
}

/// Position of the preset matching `rule`, if it is one
pub fn find(rule: Rule) -> Option<usize> {
    PRESETS.iter().position(|preset| preset.rule == rule)
}
