// Landing page sections

/// Booking link used by every call-to-action on the page (single source
/// of truth).
pub const CALENDLY_URL: &str = "https://calendly.com/frederik-approx-leads/discovery";

mod cta;
mod footer;
mod hero;
mod nav;
mod offer;
mod process;
mod proof;

pub use cta::CtaBanner;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use offer::Offer;
pub use process::Process;
pub use proof::Proof;
