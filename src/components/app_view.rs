//! Defines the shared application view state.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppView {
    Splash,
    Home,
    About,
}

pub fn view_label(view: &AppView) -> &'static str {
    match view {
        AppView::Splash => "Welcome",
        AppView::Home => "Home",
        AppView::About => "About",
    }
}
