use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User-selectable language grouping. `All` disables extension filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    All,
    TypeScript,
    JavaScript,
    Python,
}

impl Language {
    /// Prompt order. `All` comes first so it is the default choice.
    #[must_use]
    pub const fn choices() -> [Self; 4] {
        [Self::All, Self::TypeScript, Self::JavaScript, Self::Python]
    }

    /// Extensions covered by this selection, without the leading dot.
    ///
    /// `None` means no filter at all: every extension is accepted. An empty
    /// slice would instead match nothing, so the two are kept distinct.
    #[must_use]
    pub const fn extensions(self) -> Option<&'static [&'static str]> {
        match self {
            Self::All => None,
            Self::TypeScript => Some(&["ts", "tsx"]),
            Self::JavaScript => Some(&["js", "jsx"]),
            Self::Python => Some(&["py"]),
        }
    }

    /// Owned form of [`Language::extensions`], shaped for `ScanConfig`.
    #[must_use]
    pub fn extension_filter(self) -> Option<Vec<String>> {
        self.extensions()
            .map(|exts| exts.iter().map(|e| (*e).to_string()).collect())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::All => "All",
            Self::TypeScript => "TypeScript",
            Self::JavaScript => "JavaScript",
            Self::Python => "Python",
        };
        f.write_str(name)
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "typescript" => Ok(Self::TypeScript),
            "javascript" => Ok(Self::JavaScript),
            "python" => Ok(Self::Python),
            other => Err(format!("Unknown language: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_has_no_filter() {
        assert_eq!(Language::All.extensions(), None);
        assert_eq!(Language::All.extension_filter(), None);
    }

    #[test]
    fn typescript_covers_both_extensions() {
        assert_eq!(
            Language::TypeScript.extensions(),
            Some(&["ts", "tsx"][..])
        );
    }

    #[test]
    fn parses_lowercased_flag_keys() {
        assert_eq!("typescript".parse(), Ok(Language::TypeScript));
        assert_eq!("javascript".parse(), Ok(Language::JavaScript));
        assert_eq!("python".parse(), Ok(Language::Python));
        assert_eq!("all".parse(), Ok(Language::All));
        assert!("rust".parse::<Language>().is_err());
    }

    #[test]
    fn prompt_choices_are_ordered() {
        let names: Vec<String> = Language::choices().iter().map(ToString::to_string).collect();
        assert_eq!(names, ["All", "TypeScript", "JavaScript", "Python"]);
    }
}
