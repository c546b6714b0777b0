pub mod dashboard;
pub mod distribution_rules;
pub mod logists;
pub mod orders;
pub mod platforms;

pub use dashboard::DashboardPage;
pub use distribution_rules::DistributionRulesPage;
pub use logists::LogistsPage;
pub use orders::OrdersPage;
pub use platforms::PlatformsPage;
