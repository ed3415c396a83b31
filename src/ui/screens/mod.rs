pub(crate) mod budget;
pub(crate) mod dialogs;
pub(crate) mod onboarding;
