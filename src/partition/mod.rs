mod contiguity;
mod district;
mod district_set;
mod membership;

pub(self) use membership::Membership;
pub use district::District;
pub use district_set::DistrictSet;
