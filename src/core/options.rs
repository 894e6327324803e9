//! Typed flag parsing for terminal commands.
//!
//! Accepts `--name`, `--name=value`, `--name value` (only for flags declared
//! as taking a value) and single-dash short aliases. Anything not declared is
//! collected into [`ParsedFlags::ignored`] and otherwise has no effect.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagSpec {
    pub name: &'static str,
    pub short: Option<char>,
    pub takes_value: bool,
}

impl FlagSpec {
    pub const fn switch(name: &'static str) -> Self {
        Self {
            name,
            short: None,
            takes_value: false,
        }
    }

    pub const fn with_short(name: &'static str, short: char) -> Self {
        Self {
            name,
            short: Some(short),
            takes_value: false,
        }
    }

    pub const fn value(name: &'static str) -> Self {
        Self {
            name,
            short: None,
            takes_value: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    Switch,
    Value(String),
    /// Declared as taking a value but none followed.
    Missing,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFlags {
    recognized: Vec<(&'static str, FlagValue)>,
    pub positional: Vec<String>,
    pub ignored: Vec<String>,
}

impl ParsedFlags {
    pub fn parse(args: &[String], specs: &[FlagSpec]) -> Self {
        let mut parsed = ParsedFlags::default();
        let mut iter = args.iter().peekable();

        while let Some(arg) = iter.next() {
            let spec = if let Some(long) = arg.strip_prefix("--") {
                let (name, inline) = match long.split_once('=') {
                    Some((name, value)) => (name, Some(value)),
                    None => (long, None),
                };
                let name = name.to_lowercase();
                specs
                    .iter()
                    .find(|spec| spec.name == name)
                    .map(|spec| (spec, inline))
            } else if let Some(short) = arg.strip_prefix('-') {
                let mut chars = short.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => specs
                        .iter()
                        .find(|spec| spec.short == Some(c.to_ascii_lowercase()))
                        .map(|spec| (spec, None)),
                    _ => None,
                }
            } else {
                parsed.positional.push(arg.clone());
                continue;
            };

            let Some((spec, inline)) = spec else {
                parsed.ignored.push(arg.clone());
                continue;
            };

            let value = if !spec.takes_value {
                FlagValue::Switch
            } else if let Some(inline) = inline {
                if inline.is_empty() {
                    FlagValue::Missing
                } else {
                    FlagValue::Value(inline.to_string())
                }
            } else {
                match iter.next_if(|next| !next.starts_with('-')) {
                    Some(next) => FlagValue::Value(next.clone()),
                    None => FlagValue::Missing,
                }
            };

            parsed.recognized.push((spec.name, value));
        }

        parsed
    }

    pub fn has(&self, name: &str) -> bool {
        self.recognized.iter().any(|(flag, _)| *flag == name)
    }

    /// First value given for `name`; later repeats are ignored.
    pub fn get(&self, name: &str) -> Option<&FlagValue> {
        self.recognized
            .iter()
            .find(|(flag, _)| *flag == name)
            .map(|(_, value)| value)
    }

    pub fn is_empty(&self) -> bool {
        self.recognized.is_empty()
    }
}
