//! Navigation surface: the pages the shell can show.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    TravelSettlement,
    ExpenseCapture,
    SettlementSuccess,
    SettlementStatus,
    NotFound,
}

impl View {
    pub const ROUTES: [View; 5] = [
        View::Home,
        View::TravelSettlement,
        View::ExpenseCapture,
        View::SettlementSuccess,
        View::SettlementStatus,
    ];

    /// Unknown paths resolve to [`View::NotFound`].
    pub fn resolve(path: &str) -> View {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        Self::ROUTES
            .into_iter()
            .find(|view| view.path() == normalized)
            .unwrap_or(View::NotFound)
    }

    pub fn path(self) -> &'static str {
        match self {
            View::Home => "/",
            View::TravelSettlement => "/travel-settlement",
            View::ExpenseCapture => "/expense-capture",
            View::SettlementSuccess => "/settlement-success",
            View::SettlementStatus => "/settlement-status",
            View::NotFound => "*",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::TravelSettlement => "Travel Settlement",
            View::ExpenseCapture => "Expense Capture",
            View::SettlementSuccess => "Settlement Submitted",
            View::SettlementStatus => "Settlement Status",
            View::NotFound => "Page Not Found",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_resolve() {
        assert_eq!(View::resolve("/"), View::Home);
        assert_eq!(View::resolve("/travel-settlement/"), View::TravelSettlement);
        assert_eq!(View::resolve(" /settlement-status "), View::SettlementStatus);
        for view in View::ROUTES {
            assert_eq!(View::resolve(view.path()), view);
        }
    }

    #[test]
    fn unknown_paths_fall_through() {
        assert_eq!(View::resolve("/admin"), View::NotFound);
        assert_eq!(View::resolve(""), View::NotFound);
    }
}
