//! Display filter over the todo set.

use crate::model::todo::Todo;

/// Display-only selection among the three subsets.
///
/// Selecting a filter changes which members the view shows, never which
/// members exist or their flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Maps a route fragment to a filter.
    ///
    /// Input is trimmed first; empty or unrecognized fragments behave as
    /// `All`.
    pub fn parse(fragment: &str) -> Self {
        match fragment.trim() {
            "active" => Self::Active,
            "completed" => Self::Completed,
            _ => Self::All,
        }
    }

    /// Canonical fragment name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Root shell class reflecting the active filter.
    pub fn shell_class(self) -> String {
        format!("filter-{}", self.as_str())
    }

    /// Whether a member belongs to this filter's display subset.
    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Self::All => true,
            Self::Active => !todo.is_completed(),
            Self::Completed => todo.is_completed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Filter;

    #[test]
    fn parse_recognizes_the_three_names() {
        assert_eq!(Filter::parse("all"), Filter::All);
        assert_eq!(Filter::parse("active"), Filter::Active);
        assert_eq!(Filter::parse("completed"), Filter::Completed);
    }

    #[test]
    fn parse_trims_and_defaults_to_all() {
        assert_eq!(Filter::parse("  active  "), Filter::Active);
        assert_eq!(Filter::parse(""), Filter::All);
        assert_eq!(Filter::parse("archived"), Filter::All);
    }

    #[test]
    fn shell_class_carries_the_fragment_name() {
        assert_eq!(Filter::Active.shell_class(), "filter-active");
        assert_eq!(Filter::All.shell_class(), "filter-all");
    }
}
