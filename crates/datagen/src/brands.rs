//! Tier-specific brand name synthesis
//!
//! Names come from the `fake` generators, driven through the caller's RNG
//! so a seeded run produces the same brands every time.

use fake::faker::company::en::CompanyName;
use fake::faker::name::en::LastName;
use fake::Fake;
use rand::Rng;

/// Synthesize a brand display name for a tier
///
/// Conventions: luxury `"<Surname> Couture"`, premium `"<Surname> & Co."`,
/// mid_range a plain company name, anything else `"<Company> Basics"`.
pub fn brand_name<R: Rng + ?Sized>(rng: &mut R, tier: &str) -> String {
    match tier {
        "luxury" => {
            let surname: String = LastName().fake_with_rng(rng);
            format!("{surname} Couture")
        }
        "premium" => {
            let surname: String = LastName().fake_with_rng(rng);
            format!("{surname} & Co.")
        }
        "mid_range" => {
            let company: String = CompanyName().fake_with_rng(rng);
            company
        }
        _ => {
            let company: String = CompanyName().fake_with_rng(rng);
            format!("{company} Basics")
        }
    }
}
