use crate::models::SpendingStatus;

/// Environment variables consulted for the preferred language, in order.
const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_MESSAGES", "LANG"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Language {
    English,
    Swedish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Text {
    Welcome,
    ChooseIncome,
    Start,
    Income,
    Savings,
    Spent,
    YearlySavings,
    Ratio,
    Expenses,
    NoExpenses,
    EditIncome,
    AddExpense,
    EditName,
    Category,
    Name,
    Amount,
    Saved,
    Removed,
    InvalidExpense,
    DeleteMode,
}

impl Language {
    pub(crate) fn detect() -> Self {
        Self::from_env(|key| std::env::var(key).ok())
    }

    /// The first non-empty locale variable decides; anything that is not
    /// Swedish falls back to English.
    pub(crate) fn from_env(lookup: impl Fn(&str) -> Option<String>) -> Self {
        LOCALE_VARS
            .iter()
            .filter_map(|var| lookup(var))
            .find(|value| !value.trim().is_empty())
            .map(|tag| Self::from_tag(&tag))
            .unwrap_or(Self::English)
    }

    pub(crate) fn from_tag(tag: &str) -> Self {
        if tag.trim().to_ascii_lowercase().starts_with("sv") {
            Self::Swedish
        } else {
            Self::English
        }
    }

    pub(crate) fn text(self, text: Text) -> &'static str {
        match self {
            Self::English => match text {
                Text::Welcome => "Welcome",
                Text::ChooseIncome => "choose your income",
                Text::Start => "Start",
                Text::Income => "income",
                Text::Savings => "savings",
                Text::Spent => "spent",
                Text::YearlySavings => "yearly savings",
                Text::Ratio => "spending ratio",
                Text::Expenses => "expenses",
                Text::NoExpenses => "No expenses yet. Press a to add one",
                Text::EditIncome => "Change your income",
                Text::AddExpense => "Add expense",
                Text::EditName => "Your name",
                Text::Category => "category",
                Text::Name => "name",
                Text::Amount => "amount",
                Text::Saved => "Saved",
                Text::Removed => "Removed",
                Text::InvalidExpense => "Enter a name and a whole, non-negative amount",
                Text::DeleteMode => "DELETE",
            },
            Self::Swedish => match text {
                Text::Welcome => "Välkommen",
                Text::ChooseIncome => "välj din inkomst",
                Text::Start => "Starta",
                Text::Income => "inkomst",
                Text::Savings => "sparande",
                Text::Spent => "spenderat",
                Text::YearlySavings => "årligt sparande",
                Text::Ratio => "andel spenderat",
                Text::Expenses => "kostnader",
                Text::NoExpenses => "Inga kostnader än. Tryck a för att lägga till",
                Text::EditIncome => "Ändra din inkomst",
                Text::AddExpense => "Lägg till kostnad",
                Text::EditName => "Ditt namn",
                Text::Category => "kategori",
                Text::Name => "namn",
                Text::Amount => "belopp",
                Text::Saved => "Sparat",
                Text::Removed => "Borttaget",
                Text::InvalidExpense => "Ange ett namn och ett heltal som inte är negativt",
                Text::DeleteMode => "TA BORT",
            },
        }
    }

    pub(crate) fn status(self, status: SpendingStatus) -> &'static str {
        match (self, status) {
            (Self::English, SpendingStatus::SavingALot) => "You are saving a lot",
            (Self::English, SpendingStatus::StillSaving) => "You are still saving",
            (Self::English, SpendingStatus::SpendingALot) => "You are spending a lot",
            (Self::English, SpendingStatus::SpendingAlmostEverything) => {
                "You are spending almost everything"
            }
            (Self::Swedish, SpendingStatus::SavingALot) => "Du sparar mycket",
            (Self::Swedish, SpendingStatus::StillSaving) => "Du sparar fortfarande",
            (Self::Swedish, SpendingStatus::SpendingALot) => "Du spenderar mycket",
            (Self::Swedish, SpendingStatus::SpendingAlmostEverything) => {
                "Du spenderar nästan allt"
            }
        }
    }

    /// Empty names produce no greeting.
    pub(crate) fn greeting(self, name: &str) -> Option<String> {
        if name.is_empty() {
            return None;
        }
        Some(match self {
            Self::English => format!("Hi, {name}!"),
            Self::Swedish => format!("Hej, {name}!"),
        })
    }
}
