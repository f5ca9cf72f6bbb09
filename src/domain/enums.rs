use clap::ValueEnum;

/// Which tasks the list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FilterMode {
    #[default]
    All,
    Completed,
    Incomplete,
}

impl FilterMode {
    /// Check whether a task with the given completion flag passes the filter
    pub fn matches(&self, completed: bool) -> bool {
        match self {
            Self::All => true,
            Self::Completed => completed,
            Self::Incomplete => !completed,
        }
    }

    /// Next mode in the All -> Completed -> Incomplete cycle
    pub fn next(&self) -> Self {
        match self {
            Self::All => Self::Completed,
            Self::Completed => Self::Incomplete,
            Self::Incomplete => Self::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Completed => "Completed",
            Self::Incomplete => "Incomplete",
        }
    }
}

/// Display ordering of the list (never applied to the stored order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortMode {
    #[default]
    None,
    #[value(name = "asc", alias = "ascending")]
    Ascending,
    #[value(name = "desc", alias = "descending")]
    Descending,
}

impl SortMode {
    /// Next mode in the None -> Ascending -> Descending cycle
    pub fn next(&self) -> Self {
        match self {
            Self::None => Self::Ascending,
            Self::Ascending => Self::Descending,
            Self::Descending => Self::None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "No sort",
            Self::Ascending => "A → Z",
            Self::Descending => "Z → A",
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Navigating the list
    Normal,
    /// Typing into the input line (new task text or the edit scratch)
    TextEntry,
}
