// Focus management for the welcome screen buttons

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WelcomeFocus {
    #[default]
    CreateAccount,
    LogIn,
}

impl WelcomeFocus {
    pub fn next(&self) -> Self {
        match self {
            Self::CreateAccount => Self::LogIn,
            Self::LogIn => Self::CreateAccount,
        }
    }

    pub fn previous(&self) -> Self {
        // Two entries, so previous and next coincide
        self.next()
    }
}
