use thiserror::Error;

pub const INCREMENT_TOKEN: &str = "{increment}";
pub const CURRENT_TOKEN: &str = "{current}";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormulaError {
    #[error("formula is empty")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    template: String,
}

impl Formula {
    pub fn parse(input: &str) -> Result<Self, FormulaError> {
        if input.is_empty() {
            return Err(FormulaError::Empty);
        }
        Ok(Self {
            template: input.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }

    pub fn expand(&self, current_name: &str, index: i64, pad: usize) -> String {
        let mut out = self.template.clone();
        if out.contains(INCREMENT_TOKEN) {
            out = out.replace(INCREMENT_TOKEN, &format_increment(index, pad));
        }
        if out.contains(CURRENT_TOKEN) {
            out = out.replace(CURRENT_TOKEN, current_name);
        }
        out
    }

    pub fn invert_increment(&self, renamed: &str) -> String {
        if !self.template.contains(INCREMENT_TOKEN) {
            return String::new();
        }
        let stripped = self.template.replace(CURRENT_TOKEN, "");
        let before = string_before(&stripped, INCREMENT_TOKEN);
        let after = string_after(&stripped, INCREMENT_TOKEN);
        string_between(renamed, before, after)
    }

    pub fn invert_current(&self, renamed: &str) -> String {
        extract_current(&self.template, renamed)
    }

    // The extracted increment is substituted back into the template so the
    // literal around {current} matches the renamed name.
    pub fn rollback_name(&self, renamed: &str) -> String {
        let increment = self.invert_increment(renamed);
        let substituted = self.template.replace(INCREMENT_TOKEN, &increment);
        extract_current(&substituted, renamed)
    }
}

fn format_increment(index: i64, pad: usize) -> String {
    format!("{:0width$}", index, width = pad)
}

fn extract_current(template: &str, renamed: &str) -> String {
    if !template.contains(CURRENT_TOKEN) {
        return String::new();
    }
    let stripped = template.replace(INCREMENT_TOKEN, "");
    let before = string_before(&stripped, CURRENT_TOKEN);
    let after = string_after(&stripped, CURRENT_TOKEN);
    let out = strip_first(renamed, before);
    strip_first(&out, after)
}

fn strip_first(value: &str, pattern: &str) -> String {
    if pattern.is_empty() {
        return value.to_string();
    }
    value.replacen(pattern, "", 1)
}

fn string_before<'a>(value: &'a str, sep: &str) -> &'a str {
    if sep.is_empty() {
        return value;
    }
    match value.find(sep) {
        Some(pos) => &value[..pos],
        None => "",
    }
}

fn string_after<'a>(value: &'a str, sep: &str) -> &'a str {
    match value.rfind(sep) {
        Some(pos) => {
            let start = pos + sep.len();
            if start >= value.len() {
                ""
            } else {
                &value[start..]
            }
        }
        None => "",
    }
}

fn string_between(value: &str, before: &str, after: &str) -> String {
    if !value.contains(before) || !value.contains(after) {
        return String::new();
    }
    let rest = value.replacen(before, "", 1);
    string_before(&rest, after).to_string()
}
