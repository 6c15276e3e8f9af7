//! Routed page components.

mod binom;
mod callback;
mod combined;
mod docs;
mod google_ads;
mod login;
mod not_found;
mod report_state;

pub use binom::BinomReport;
pub use callback::AuthCallback;
pub use combined::CombinedReport;
pub use docs::Docs;
pub use google_ads::GoogleAdsReport;
pub use login::Login;
pub use not_found::NotFound;
