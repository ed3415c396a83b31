/// Predefined expense categories offered by the add-expense form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Rent,
    Food,
    Transportation,
    Utilities,
    Insurance,
    Entertainment,
    Subscriptions,
    Savings,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rent => "Rent",
            Self::Food => "Food",
            Self::Transportation => "Transportation",
            Self::Utilities => "Utilities",
            Self::Insurance => "Insurance",
            Self::Entertainment => "Entertainment",
            Self::Subscriptions => "Subscriptions",
            Self::Savings => "Savings",
            Self::Other => "Other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Rent => "🏠",
            Self::Food => "🍔",
            Self::Transportation => "🚗",
            Self::Utilities => "💡",
            Self::Insurance => "🛡",
            Self::Entertainment => "🎬",
            Self::Subscriptions => "📺",
            Self::Savings => "🏦",
            Self::Other => "📦",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        Self::all().iter().copied().find(|c| c.as_str().to_lowercase() == lower)
    }

    pub fn all() -> &'static [Category] {
        &[
            Self::Rent,
            Self::Food,
            Self::Transportation,
            Self::Utilities,
            Self::Insurance,
            Self::Entertainment,
            Self::Subscriptions,
            Self::Savings,
            Self::Other,
        ]
    }

    /// The catch-all category is named by the user instead of by the catalog.
    pub fn takes_custom_name(&self) -> bool {
        matches!(self, Self::Other)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.icon(), self.as_str())
    }
}

/// One expense line. `key` is the unique identity in the budget; `icon` and
/// `name` are for display only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    pub key: String,
    pub icon: Option<String>,
    pub name: String,
    pub amount: i64,
}

impl Expense {
    /// A plain expense whose display name is its key.
    pub fn new(key: String, amount: i64) -> Self {
        Self {
            name: key.clone(),
            key,
            icon: None,
            amount,
        }
    }

    /// Build an expense from a catalog entry. `Other` uses `custom_name` as
    /// both key and name; every other category is keyed by its own name.
    /// Returns `None` when the resulting key would be empty.
    pub fn from_category(category: Category, custom_name: &str, amount: i64) -> Option<Self> {
        let name = if category.takes_custom_name() {
            custom_name.trim()
        } else {
            category.as_str()
        };
        if name.is_empty() {
            return None;
        }
        Some(Self {
            key: name.to_string(),
            icon: Some(category.icon().to_string()),
            name: name.to_string(),
            amount,
        })
    }

    /// Decode a label written by the old single-string layout, where an icon
    /// token and a name were packed together and separated by the first space.
    /// The whole label stays the key.
    pub fn from_legacy_label(label: &str, amount: i64) -> Self {
        match label.split_once(' ') {
            Some((icon, name)) => Self {
                key: label.to_string(),
                icon: Some(icon.to_string()),
                name: name.to_string(),
                amount,
            },
            None => Self::new(label.to_string(), amount),
        }
    }

    pub fn label(&self) -> String {
        match &self.icon {
            Some(icon) if !icon.is_empty() => format!("{icon} {}", self.name),
            _ => self.name.clone(),
        }
    }
}

/// Parse user-entered amount text as a non-negative whole number.
pub fn parse_amount(text: &str) -> Option<i64> {
    text.trim()
        .parse::<u64>()
        .ok()
        .and_then(|v| i64::try_from(v).ok())
}
