// English string resources

use crate::catalog::DescriptionRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringRef {
    WelcomeMessage,
    CreateAccount,
    Login,
    LoginTitle,
    Email,
    Password,
    PreTerms,
    Terms,
    PostTerms,
    PrivacyPolicy,
    SearchPlaceholder,
    BrowseThemes,
    DesignGarden,
}

pub fn text(id: StringRef) -> &'static str {
    match id {
        StringRef::WelcomeMessage => "Beautiful home garden solutions",
        StringRef::CreateAccount => "Create account",
        StringRef::Login => "Log in",
        StringRef::LoginTitle => "Log in with email",
        StringRef::Email => "Email address",
        StringRef::Password => "Password (8+ characters)",
        StringRef::PreTerms => "By clicking below, you agree to our",
        StringRef::Terms => "Terms of Use",
        StringRef::PostTerms => "and consent to our",
        StringRef::PrivacyPolicy => "Privacy Policy.",
        StringRef::SearchPlaceholder => "Search",
        StringRef::BrowseThemes => "Browse themes",
        StringRef::DesignGarden => "Design your home garden",
    }
}

/// Resolve a catalog description key. Unknown keys render as the key itself.
pub fn description(id: DescriptionRef) -> &'static str {
    match id.0 {
        "item_description" => "This is a description",
        other => other,
    }
}
